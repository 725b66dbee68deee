//! Chain: match every sub-rule in order.

use crate::rules::{apply, slice_between};
use crate::{Context, IntoRule, MatchResult, ParseError, Region, Rule, RuleRef, Tree};
use std::sync::RwLock;

/// Sequence composite: all sub-rules must succeed, in order.
///
/// Skipped sub-matches leave no child behind; errors from any sub-rule
/// propagate unchanged (no backtracking).
#[derive(Debug)]
pub struct Chain {
    name: String,
    rules: RwLock<Vec<RuleRef>>,
}

impl Chain {
    pub fn new(name: impl Into<String>, rules: Vec<RuleRef>) -> Self {
        Chain { name: name.into(), rules: RwLock::new(rules) }
    }

    /// Append a sub-rule. Must not be called while matching is in progress.
    pub fn add(&self, rule: impl IntoRule) {
        self.rules.write().expect("rule list lock poisoned").push(rule.into_rule());
    }
}

impl Rule for Chain {
    fn name(&self) -> &str {
        &self.name
    }

    fn kind(&self) -> &'static str {
        "chain"
    }

    fn is_finite(&self) -> bool {
        false
    }

    fn children(&self) -> Vec<RuleRef> {
        self.rules.read().expect("rule list lock poisoned").clone()
    }

    fn matches<'a>(&self, this: &RuleRef, ctx: &Context<'_>, input: &'a [u8]) -> MatchResult<'a> {
        // Cloned out so a cyclic grammar never re-enters the lock.
        let rules = self.children();
        if rules.is_empty() {
            return Err(ParseError::EmptyRule { rule: self.name.clone(), enclosing: ctx.enclosing_name() });
        }

        let descent = ctx.descend(this)?;
        let origin = ctx.location().offset;
        let mut offset = origin;
        let mut tail = input;
        let mut children: Vec<Tree<'a>> = Vec::with_capacity(rules.len());

        for rule in &rules {
            let step = descent.at(offset);
            match apply(rule, &step, tail)? {
                None => continue,
                Some(sub) => {
                    let consumed = sub.region.len();
                    offset += consumed;
                    tail = tail.get(consumed..).unwrap_or(&[]);
                    children.push(sub);
                }
            }
        }

        let region = match (children.first(), children.last()) {
            (Some(first), Some(last)) => Region::new(first.region.start, last.region.end),
            _ => Region::empty(origin),
        };

        Ok(Some(Tree {
            rule: this.clone(),
            location: ctx.location(),
            region,
            data: slice_between(input, origin, region),
            children,
        }))
    }
}
