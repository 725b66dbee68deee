//! Per-parse line index.
//!
//! Resolving a byte offset into a line/column pair by rescanning the input on
//! every query is quadratic over a parse that emits many trees. The index is
//! built once per [`Parser::parse`](crate::Parser::parse) call by running the
//! configured line-break rule across the input, and each `locate` afterwards
//! is a binary search over the recorded line starts.

use crate::engine::Parser;
use crate::rules::apply;
use crate::{Context, Location, ParseError};

/// Byte offsets at which each line starts. `starts[0]` is always 0.
#[derive(Debug)]
pub(crate) struct LineIndex {
    starts: Vec<usize>,
}

impl LineIndex {
    /// Scan `input` with the parser's line-break rule and record line starts.
    ///
    /// Soft failures of the line-break rule mean "no break here" and move the
    /// scan forward one byte; anything else is a broken line-break rule and
    /// propagates.
    pub(crate) fn build(parser: &Parser, input: &[u8]) -> Result<LineIndex, ParseError> {
        // Line-break rules are matched against a scratch index; they only see
        // line 0, which is fine because their own location is never observed.
        let scratch = LineIndex { starts: vec![0] };
        let rule = parser.line_break_rule();

        let mut starts = vec![0];
        let mut offset = 0;
        while offset < input.len() {
            let ctx = Context {
                parser,
                lines: &scratch,
                enclosing: None,
                location: Location { offset, ..Location::default() },
            };
            match apply(rule, &ctx, &input[offset..]) {
                Ok(Some(tree)) if !tree.region.is_empty() => {
                    offset += tree.region.len();
                    starts.push(offset);
                }
                Ok(_) => offset += 1,
                Err(err) if err.recoverable() => offset += 1,
                Err(err) => return Err(err),
            }
        }

        Ok(LineIndex { starts })
    }

    /// 0-based line and column for byte `offset`. Columns count bytes from
    /// the line start; offsets past the end resolve onto the last line.
    pub(crate) fn locate(&self, offset: usize) -> (usize, usize) {
        let line = self.starts.partition_point(|&start| start <= offset) - 1;
        (line, offset - self.starts[line])
    }
}
