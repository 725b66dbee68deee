//! Wrapper: pass-through that re-labels an inner rule.

use crate::rules::apply;
use crate::{Context, IntoRule, MatchResult, ParseError, Rule, RuleRef, Tree};
use std::sync::RwLock;

/// Re-labels one inner rule without altering its semantics, so a subgrammar
/// shows up under its own name in diagnostics.
///
/// The inner slot may start out absent: [`Wrapper::named`] creates an unbound
/// wrapper to be closed later with [`Wrapper::bind`], which is how cyclic
/// grammars get their forward reference. Matching an unbound wrapper fails
/// with `EmptyRule`; the display emitter renders the absent slot as `<nil>`.
#[derive(Debug)]
pub struct Wrapper {
    name: String,
    rule: RwLock<Option<RuleRef>>,
}

impl Wrapper {
    pub fn new(name: impl Into<String>, rule: impl IntoRule) -> Self {
        Wrapper { name: name.into(), rule: RwLock::new(Some(rule.into_rule())) }
    }

    /// An unbound wrapper, to be closed with [`bind`](Self::bind).
    pub fn named(name: impl Into<String>) -> Self {
        Wrapper { name: name.into(), rule: RwLock::new(None) }
    }

    /// Set the inner rule. Must not be called while matching is in progress.
    pub fn bind(&self, rule: impl IntoRule) {
        *self.rule.write().expect("rule slot lock poisoned") = Some(rule.into_rule());
    }

    fn inner(&self) -> Option<RuleRef> {
        self.rule.read().expect("rule slot lock poisoned").clone()
    }
}

impl Rule for Wrapper {
    fn name(&self) -> &str {
        &self.name
    }

    fn kind(&self) -> &'static str {
        "wrapper"
    }

    fn is_finite(&self) -> bool {
        false
    }

    fn children(&self) -> Vec<RuleRef> {
        self.inner().into_iter().collect()
    }

    fn matches<'a>(&self, this: &RuleRef, ctx: &Context<'_>, input: &'a [u8]) -> MatchResult<'a> {
        let Some(inner) = self.inner() else {
            return Err(ParseError::EmptyRule { rule: self.name.clone(), enclosing: ctx.enclosing_name() });
        };

        let descent = ctx.descend(this)?;
        match apply(&inner, &descent, input)? {
            None => Ok(None),
            Some(sub) => {
                let region = sub.region;
                let data = sub.data;
                Ok(Some(Tree { rule: this.clone(), location: ctx.location(), region, data, children: vec![sub] }))
            }
        }
    }
}
