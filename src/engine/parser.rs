//! Parser configuration and the top-level drive loop.

use crate::engine::LineIndex;
use crate::input::codepoints;
use crate::rules::{apply, either, terminal};
use crate::{Context, IntoRule, Location, ParseError, RuleRef, Tree};

/// Default ceiling on match-call nesting.
const DEFAULT_MAX_DEPTH: usize = 128;

/// Drives a rule graph over a byte buffer.
///
/// A `Parser` is configuration only; it holds no per-run state, so one
/// instance may serve any number of `parse` calls, concurrently from several
/// threads as long as the grammar is no longer being mutated.
///
/// ```
/// use weft::{Parser, terminal};
///
/// let parser = Parser::new().max_depth(64);
/// let tree = parser.parse(terminal("foo", "foo"), b"foo").unwrap();
/// assert_eq!(tree.region.len(), 3);
/// ```
#[derive(Debug)]
pub struct Parser {
    max_depth: usize,
    line_break: RuleRef,
}

impl Default for Parser {
    fn default() -> Self {
        Self::new()
    }
}

impl Parser {
    /// A parser with the default depth ceiling (128) and a line-break rule
    /// recognizing `"\n"` and `"\r\n"`.
    pub fn new() -> Self {
        let line_break = either("line_break", vec![terminal("line_feed", "\n"), terminal("carriage_return", "\r\n")]);
        Parser { max_depth: DEFAULT_MAX_DEPTH, line_break }
    }

    /// Set the maximum allowed nesting of the match call stack.
    pub fn max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }

    /// Set the rule used to recognize line boundaries for line/column
    /// resolution.
    pub fn line_break(mut self, rule: impl IntoRule) -> Self {
        self.line_break = rule.into_rule();
        self
    }

    pub(crate) fn ceiling(&self) -> usize {
        self.max_depth
    }

    pub(crate) fn line_break_rule(&self) -> &RuleRef {
        &self.line_break
    }

    /// Match `rule` against the whole of `input`.
    ///
    /// The root rule starts from a fresh context at offset 0, line 0, column
    /// 0, depth 0. A root-level skip is reported as `UnexpectedEof`; a match
    /// that leaves input unconsumed (fewer code points covered than the input
    /// contains) is reported as `UnexpectedToken` with a window of the
    /// remaining tail. The returned tree borrows `input`.
    pub fn parse<'a>(&self, rule: impl IntoRule, input: &'a [u8]) -> Result<Tree<'a>, ParseError> {
        let rule = rule.into_rule();
        let lines = LineIndex::build(self, input)?;
        let ctx = Context { parser: self, lines: &lines, enclosing: None, location: Location::default() };

        match apply(&rule, &ctx, input)? {
            None => Err(ParseError::UnexpectedEof { position: 1, rule: rule.name().to_string() }),
            Some(tree) => {
                if tree.region.end < codepoints(input) {
                    let tail = input.get(tree.region.end..).unwrap_or(&[]);
                    return Err(ParseError::unexpected_token(tail, tree.region.end, rule.name()));
                }
                Ok(tree)
            }
        }
    }

    /// 0-based line and column for byte `offset` of `input`.
    ///
    /// Builds a fresh line index for the call; `parse` itself indexes the
    /// input once and resolves positions from that.
    pub fn locate(&self, input: &[u8], offset: usize) -> Result<(usize, usize), ParseError> {
        Ok(LineIndex::build(self, input)?.locate(offset))
    }
}
