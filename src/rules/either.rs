//! Either: ordered choice over alternatives.

use crate::rules::apply;
use crate::{Context, IntoRule, MatchResult, ParseError, Rule, RuleRef, Tree};
use std::sync::RwLock;

/// Choice composite: the first alternative that succeeds wins.
///
/// Soft failures (`UnexpectedToken`, `UnexpectedEof`) mean "alternative tried
/// and rejected" and move on to the next one; anything else is a broken
/// grammar and propagates. When every alternative rejects or skips, the
/// reported error names this rule, not the last-tried child.
#[derive(Debug)]
pub struct Either {
    name: String,
    rules: RwLock<Vec<RuleRef>>,
}

impl Either {
    pub fn new(name: impl Into<String>, rules: Vec<RuleRef>) -> Self {
        Either { name: name.into(), rules: RwLock::new(rules) }
    }

    /// Append an alternative. Must not be called while matching is in
    /// progress.
    pub fn add(&self, rule: impl IntoRule) {
        self.rules.write().expect("rule list lock poisoned").push(rule.into_rule());
    }
}

impl Rule for Either {
    fn name(&self) -> &str {
        &self.name
    }

    fn kind(&self) -> &'static str {
        "either"
    }

    fn is_finite(&self) -> bool {
        false
    }

    fn children(&self) -> Vec<RuleRef> {
        self.rules.read().expect("rule list lock poisoned").clone()
    }

    fn matches<'a>(&self, this: &RuleRef, ctx: &Context<'_>, input: &'a [u8]) -> MatchResult<'a> {
        let rules = self.children();
        if rules.is_empty() {
            return Err(ParseError::EmptyRule { rule: self.name.clone(), enclosing: ctx.enclosing_name() });
        }

        let position = ctx.location().offset;
        if input.is_empty() {
            return Err(ParseError::UnexpectedEof { position, rule: self.name.clone() });
        }

        // Every alternative starts where the caller stands; line and column
        // are carried over from the caller rather than re-resolved.
        let descent = ctx.descend(this)?;

        for rule in &rules {
            match apply(rule, &descent, input) {
                Ok(None) => continue,
                Ok(Some(sub)) => {
                    let region = sub.region;
                    let data = sub.data;
                    return Ok(Some(Tree {
                        rule: this.clone(),
                        location: ctx.location(),
                        region,
                        data,
                        children: vec![sub],
                    }));
                }
                Err(err) if err.recoverable() => continue,
                Err(err) => return Err(err),
            }
        }

        Err(ParseError::unexpected_token(input, position, &self.name))
    }
}
