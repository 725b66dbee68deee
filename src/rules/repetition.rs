//! Repetition: the same inner rule, one or more times, with optional bounds.

use crate::rules::{apply, slice_between};
use crate::{Context, MatchResult, ParseError, Region, Rule, RuleRef, Tree};

/// Repeats one inner rule.
///
/// Three surface forms collapse into `times` + `variadic`:
///
/// ```text
/// repetition(..)                     times=1, variadic=true   (one or more)
/// repetition_times(.., n)            times=n, variadic=false  (exactly n)
/// repetition_times_variadic(.., n)   times=n, variadic=true   (at least n)
/// ```
///
/// The zero-times variadic form that matches nothing emits the skip signal
/// instead of an empty tree, so the enclosing composite silently omits the
/// slot.
#[derive(Debug)]
pub struct Repetition {
    name: String,
    rule: RuleRef,
    times: usize,
    variadic: bool,
}

impl Repetition {
    /// One-or-more repetition (the default form).
    pub fn new(name: impl Into<String>, rule: RuleRef) -> Self {
        Repetition { name: name.into(), rule, times: 1, variadic: true }
    }

    /// Exactly `times` repetitions.
    pub fn times(name: impl Into<String>, times: usize, rule: RuleRef) -> Self {
        Repetition { name: name.into(), rule, times, variadic: false }
    }

    /// At least `times` repetitions.
    pub fn times_variadic(name: impl Into<String>, times: usize, rule: RuleRef) -> Self {
        Repetition { name: name.into(), rule, times, variadic: true }
    }
}

impl Rule for Repetition {
    fn name(&self) -> &str {
        &self.name
    }

    fn kind(&self) -> &'static str {
        "repetition"
    }

    fn is_finite(&self) -> bool {
        false
    }

    fn children(&self) -> Vec<RuleRef> {
        vec![self.rule.clone()]
    }

    fn parameters(&self) -> Vec<(&'static str, String)> {
        vec![("times", self.times.to_string()), ("variadic", self.variadic.to_string())]
    }

    fn matches<'a>(&self, this: &RuleRef, ctx: &Context<'_>, input: &'a [u8]) -> MatchResult<'a> {
        let descent = ctx.descend(this)?;
        let origin = ctx.location().offset;
        let mut offset = origin;
        let mut tail = input;
        let mut children: Vec<Tree<'a>> = Vec::new();
        let mut cause = None;

        while !tail.is_empty() {
            let step = descent.at(offset);
            match apply(&self.rule, &step, tail) {
                Ok(None) => break,
                Ok(Some(sub)) => {
                    let consumed = sub.region.len();
                    children.push(sub);
                    if consumed == 0 {
                        // A zero-width match cannot make progress.
                        break;
                    }
                    offset += consumed;
                    tail = tail.get(consumed..).unwrap_or(&[]);
                }
                Err(err) if err.recoverable() => {
                    cause = Some(err);
                    break;
                }
                Err(err) => return Err(err),
            }
        }

        let count = children.len();
        if count == 0 && self.times == 0 && self.variadic {
            return Ok(None);
        }

        if !self.variadic && count > self.times {
            // Report the first occurrence past the bound.
            let excess = &children[self.times];
            let window = tail_from(input, origin, excess.region.start);
            return Err(ParseError::unexpected_token(window, excess.region.start, &self.name));
        }

        if count < self.times {
            return Err(match cause {
                Some(cause) => ParseError::unexpected_token_caused(tail, offset, &self.name, cause),
                None => ParseError::unexpected_token(tail, offset, &self.name),
            });
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

/// The tail of `input` starting at absolute offset `at`, where `input` begins
/// at absolute offset `origin`.
fn tail_from(input: &[u8], origin: usize, at: usize) -> &[u8] {
    input.get(at.saturating_sub(origin)..).unwrap_or(&[])
}
