//! Terminal: leaf rule matching a fixed byte sequence.

use crate::input::codepoints;
use crate::{Context, MatchResult, ParseError, Region, Rule, RuleRef, Tree};

/// Matches the byte sequence `value` exactly, at the current position.
///
/// Length sufficiency is checked in UTF-8 code points while the emitted
/// region and data slice stay byte-precise, so multi-byte literals work
/// without giving up byte offsets.
#[derive(Debug)]
pub struct Terminal {
    name: String,
    value: Vec<u8>,
}

impl Terminal {
    pub fn new(name: impl Into<String>, value: impl AsRef<[u8]>) -> Self {
        Terminal { name: name.into(), value: value.as_ref().to_vec() }
    }

    /// The literal this terminal matches.
    pub fn value(&self) -> &[u8] {
        &self.value
    }
}

impl Rule for Terminal {
    fn name(&self) -> &str {
        &self.name
    }

    fn kind(&self) -> &'static str {
        "terminal"
    }

    fn parameters(&self) -> Vec<(&'static str, String)> {
        vec![("value", String::from_utf8_lossy(&self.value).into_owned())]
    }

    fn matches<'a>(&self, this: &RuleRef, ctx: &Context<'_>, input: &'a [u8]) -> MatchResult<'a> {
        let want = codepoints(&self.value);
        if want == 0 {
            return Err(ParseError::EmptyRule { rule: self.name.clone(), enclosing: ctx.enclosing_name() });
        }

        let position = ctx.location().offset;
        if codepoints(input) < want {
            return Err(ParseError::UnexpectedEof { position, rule: self.name.clone() });
        }
        if input.get(..self.value.len()) != Some(self.value.as_slice()) {
            return Err(ParseError::unexpected_token(input, position, &self.name));
        }

        Ok(Some(Tree {
            rule: this.clone(),
            location: ctx.location(),
            region: Region::new(position, position + self.value.len()),
            data: &input[..self.value.len()],
            children: Vec::new(),
        }))
    }
}
