//! Regexp: leaf rule matching a pre-compiled regular expression.

use crate::{Context, MatchResult, ParseError, Region, Rule, RuleRef, Tree};
use regex::bytes::Regex;

/// Matches the leftmost occurrence of a pattern in the remaining input.
///
/// The match is not anchored: the emitted region may start past the caller's
/// current position, and enclosing composites advance by the region length
/// only.
#[derive(Debug)]
pub struct Regexp {
    name: String,
    pattern: Regex,
}

impl Regexp {
    /// Compile `pattern` for rule `name`.
    ///
    /// # Panics
    ///
    /// Panics when the pattern does not compile; a malformed grammar is a
    /// programmer error caught at construction, not at match time.
    pub fn new(name: impl Into<String>, pattern: &str) -> Self {
        let name = name.into();
        let pattern =
            Regex::new(pattern).unwrap_or_else(|err| panic!("invalid pattern for rule '{name}': {err}"));
        Regexp { name, pattern }
    }

    /// The source text of the compiled pattern.
    pub fn pattern(&self) -> &str {
        self.pattern.as_str()
    }
}

impl Rule for Regexp {
    fn name(&self) -> &str {
        &self.name
    }

    fn kind(&self) -> &'static str {
        "regexp"
    }

    fn parameters(&self) -> Vec<(&'static str, String)> {
        vec![("pattern", self.pattern.as_str().to_string())]
    }

    fn matches<'a>(&self, this: &RuleRef, ctx: &Context<'_>, input: &'a [u8]) -> MatchResult<'a> {
        let position = ctx.location().offset;
        match self.pattern.find(input) {
            None => Err(ParseError::unexpected_token(input, position, &self.name)),
            Some(found) => Ok(Some(Tree {
                rule: this.clone(),
                location: ctx.location(),
                region: Region::new(position + found.start(), position + found.end()),
                data: found.as_bytes(),
                children: Vec::new(),
            })),
        }
    }
}
