//! Parse error taxonomy.
//!
//! All failures produced while matching are values of a single [`ParseError`]
//! enum. Positions stored in the variants are 0-based byte offsets; rendered
//! messages add 1 so humans read 1-based positions.
//!
//! Two kinds are *soft*: [`ParseError::UnexpectedToken`] and
//! [`ParseError::UnexpectedEof`]. They mean "this input did not fit here" and
//! are the only kinds an enclosing `Either` or `Repetition` is allowed to
//! recover from (alternative selection, loop termination). Everything else
//! signals a broken grammar or an exhausted engine limit and propagates to the
//! caller unchanged.

use crate::input::show_input;
use thiserror::Error;

/// Everything that can go wrong while matching rules against input.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ParseError {
    /// A composite rule had no sub-rules, or a leaf had empty content.
    #[error("rule '{rule}' has nothing to match")]
    EmptyRule {
        /// Name of the offending rule.
        rule: String,
        /// Name of the rule that invoked it, when known.
        enclosing: Option<String>,
    },

    /// The engine met a rule kind it cannot dispatch. Never raised by the
    /// built-in rules; reserved for host-defined [`Rule`](crate::Rule)
    /// implementations.
    #[error("rule '{rule}' is not supported by this engine")]
    UnsupportedRule { rule: String },

    /// Input ran out while the rule required more.
    #[error("unexpected end of input at position {} while matching '{rule}'", .position + 1)]
    UnexpectedEof { position: usize, rule: String },

    /// Input at `position` did not match the rule. `token` is a displayable
    /// window of the offending input, already truncated for presentation.
    #[error("unexpected token \"{token}\" at position {} while matching '{rule}'", .position + 1)]
    UnexpectedToken {
        token: String,
        position: usize,
        rule: String,
        /// The underlying failure, when a composite rephrased a child error.
        #[source]
        cause: Option<Box<ParseError>>,
    },

    /// The match call stack went past the engine's configured ceiling.
    #[error("matching reached nesting level {depth} at position {}, deeper than allowed", .position + 1)]
    NestingTooDeep { depth: usize, position: usize },

    /// A balanced-delimiter scan found an opener with no matching closer.
    #[error("opening '{opening}' at position {} has no matching '{closing}'", .position + 1)]
    BoundIncomplete {
        position: usize,
        opening: String,
        closing: String,
    },
}

impl ParseError {
    /// Build an [`ParseError::UnexpectedToken`] whose token is a display
    /// window of `window` (see [`show_input`](crate::show_input)).
    pub(crate) fn unexpected_token(window: &[u8], position: usize, rule: &str) -> Self {
        ParseError::UnexpectedToken {
            token: String::from_utf8_lossy(&show_input(window)).into_owned(),
            position,
            rule: rule.to_string(),
            cause: None,
        }
    }

    /// Same as [`unexpected_token`](Self::unexpected_token) but keeps the
    /// child failure that led here as the error source.
    pub(crate) fn unexpected_token_caused(window: &[u8], position: usize, rule: &str, cause: ParseError) -> Self {
        ParseError::UnexpectedToken {
            token: String::from_utf8_lossy(&show_input(window)).into_owned(),
            position,
            rule: rule.to_string(),
            cause: Some(Box::new(cause)),
        }
    }

    /// True for the soft failures (`UnexpectedToken`, `UnexpectedEof`) that an
    /// enclosing choice or repetition may swallow while trying alternatives.
    pub fn recoverable(&self) -> bool {
        matches!(self, ParseError::UnexpectedToken { .. } | ParseError::UnexpectedEof { .. })
    }
}
