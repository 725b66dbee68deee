//! The rule algebra.
//!
//! Rules are the operators a grammar is composed of. Two leaves match bytes
//! directly; four composites combine other rules:
//!
//! ```text
//! terminal("(" value="(")          literal byte sequence
//! regexp("num" pattern="[0-9]+")   leftmost regex match
//!
//! chain("expr")[..]                every sub-rule in order
//! either("digit")[..]              first sub-rule that succeeds
//! repetition("digits")[..]         inner rule, bounded or unbounded times
//! wrapper("value")[..]             single passthrough, re-labels for diagnostics
//! ```
//!
//! Matching is one synchronous recursive descent. Each rule consumes a prefix
//! of the input tail it is handed and returns a [`Tree`] covering it; a
//! composite stitches child trees together and advances through the tail by
//! each child's region length. Composites increment the nesting depth before
//! descending, which is the engine's only guard against cyclic grammars.
//!
//! ## Error discipline
//!
//! `chain` and `wrapper` propagate child errors unchanged. `either` and
//! `repetition` recover from the two soft kinds only (`UnexpectedToken`,
//! `UnexpectedEof`) to implement alternative selection and loop termination;
//! when they ultimately fail they report *themselves* as the offender, not the
//! last-tried child.
//!
//! ## Building grammars
//!
//! The lowercase helpers ([`terminal`], [`chain`], ...) wrap each rule in a
//! shared handle so it can appear under several parents. Cycles are closed
//! with [`Wrapper::named`] + [`Wrapper::bind`], or by [`Chain::add`] /
//! [`Either::add`] after construction. All of that mutation must finish before
//! matching begins.

#[path = "rules/chain.rs"]
mod chain_rule;
#[path = "rules/display.rs"]
mod display_rule;
#[path = "rules/either.rs"]
mod either_rule;
#[path = "rules/regexp.rs"]
mod regexp_rule;
#[path = "rules/repetition.rs"]
mod repetition_rule;
#[path = "rules/terminal.rs"]
mod terminal_rule;
#[path = "rules/wrapper.rs"]
mod wrapper_rule;

#[cfg(test)]
#[path = "rules/tests.rs"]
mod tests;

pub use chain_rule::Chain;
pub use display_rule::display;
pub use either_rule::Either;
pub use regexp_rule::Regexp;
pub use repetition_rule::Repetition;
pub use terminal_rule::Terminal;
pub use wrapper_rule::Wrapper;

use crate::{Context, IntoRule, MatchResult, Region, RuleRef};
use std::sync::Arc;

/// Invoke `rule` against `input` at the position carried by `ctx`.
///
/// This is the single dispatch point for matching: it hands the rule its own
/// shared handle so the emitted tree can reference it.
pub fn apply<'a>(rule: &RuleRef, ctx: &Context<'_>, input: &'a [u8]) -> MatchResult<'a> {
    rule.matches(rule, ctx, input)
}

/// Leaf matching the fixed byte sequence `value`.
pub fn terminal(name: impl Into<String>, value: impl AsRef<[u8]>) -> Arc<Terminal> {
    Arc::new(Terminal::new(name, value))
}

/// Leaf matching the leftmost occurrence of `pattern` in the remaining input.
///
/// Panics on an invalid pattern; a malformed grammar is a programmer error.
pub fn regexp(name: impl Into<String>, pattern: &str) -> Arc<Regexp> {
    Arc::new(Regexp::new(name, pattern))
}

/// Sequence: every sub-rule must match, in order.
pub fn chain<I>(name: impl Into<String>, rules: I) -> Arc<Chain>
where
    I: IntoIterator,
    I::Item: IntoRule,
{
    Arc::new(Chain::new(name, collect_rules(rules)))
}

/// Ordered choice: the first sub-rule that succeeds wins.
pub fn either<I>(name: impl Into<String>, rules: I) -> Arc<Either>
where
    I: IntoIterator,
    I::Item: IntoRule,
{
    Arc::new(Either::new(name, collect_rules(rules)))
}

/// One-or-more repetition of `rule`.
pub fn repetition(name: impl Into<String>, rule: impl IntoRule) -> Arc<Repetition> {
    Arc::new(Repetition::new(name, rule.into_rule()))
}

/// Exactly `times` repetitions of `rule`.
pub fn repetition_times(name: impl Into<String>, times: usize, rule: impl IntoRule) -> Arc<Repetition> {
    Arc::new(Repetition::times(name, times, rule.into_rule()))
}

/// At least `times` repetitions of `rule`.
pub fn repetition_times_variadic(name: impl Into<String>, times: usize, rule: impl IntoRule) -> Arc<Repetition> {
    Arc::new(Repetition::times_variadic(name, times, rule.into_rule()))
}

/// Passthrough that re-labels `rule` in diagnostics.
pub fn wrapper(name: impl Into<String>, rule: impl IntoRule) -> Arc<Wrapper> {
    Arc::new(Wrapper::new(name, rule))
}

/// Choice over the single bytes `from..=to`, one terminal per byte.
///
/// Panics when `from > to`; an inverted range is a programmer error.
pub fn ascii_range(name: impl Into<String>, from: u8, to: u8) -> Arc<Either> {
    let name = name.into();
    assert!(from <= to, "ascii_range '{name}': from {from:#04x} past to {to:#04x}");
    let bytes = (from..=to).map(|b| {
        let label = if b.is_ascii_graphic() { char::from(b).to_string() } else { format!("{b:#04x}") };
        terminal(label, [b]).into_rule()
    });
    Arc::new(Either::new(name, bytes.collect()))
}

fn collect_rules<I>(rules: I) -> Vec<RuleRef>
where
    I: IntoIterator,
    I::Item: IntoRule,
{
    rules.into_iter().map(IntoRule::into_rule).collect()
}

/// Slice the bytes `region` covers out of `input`, where `input` starts at
/// absolute offset `origin`. Empty when the region lies outside the tail
/// (possible with unanchored regexp children).
pub(crate) fn slice_between<'a>(input: &'a [u8], origin: usize, region: Region) -> &'a [u8] {
    let start = region.start.saturating_sub(origin);
    let end = region.end.saturating_sub(origin);
    input.get(start..end).unwrap_or(&[])
}
