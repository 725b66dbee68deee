//! Cycle-aware rule display.
//!
//! Grammar graphs may be cyclic, so a naive recursive formatter would never
//! terminate. The emitter keeps the trail of rules currently being rendered
//! and replaces every back-edge with the literal `<circular>`; an absent
//! child slot renders as `<nil>`.

use crate::RuleRef;
use std::fmt::Write as _;
use std::sync::Arc;

/// Render `rule` and its (possibly cyclic) subgraph as one line of text.
///
/// ```
/// use weft::{RuleRef, display, repetition, terminal};
///
/// let rule: RuleRef = repetition("digits", terminal("one", "1"));
/// assert_eq!(
///     display(&rule),
///     "repetition(\"digits\" times=1 variadic=true)[terminal(\"one\" value=1)]",
/// );
/// ```
pub fn display(rule: &RuleRef) -> String {
    let mut out = String::new();
    let mut trail = Vec::new();
    emit(rule, &mut trail, &mut out);
    out
}

fn emit(rule: &RuleRef, trail: &mut Vec<*const ()>, out: &mut String) {
    let id = Arc::as_ptr(rule) as *const ();
    if trail.contains(&id) {
        out.push_str("<circular>");
        return;
    }

    out.push_str(rule.kind());
    let _ = write!(out, "(\"{}\"", rule.name());
    for (key, value) in rule.parameters() {
        let _ = write!(out, " {key}={value}");
    }
    out.push(')');

    if rule.is_finite() {
        return;
    }

    trail.push(id);
    out.push('[');
    let children = rule.children();
    if children.is_empty() {
        out.push_str("<nil>");
    }
    for (i, child) in children.iter().enumerate() {
        if i > 0 {
            out.push_str(", ");
        }
        emit(child, trail, out);
    }
    out.push(']');
    trail.pop();
}
