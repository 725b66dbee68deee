use crate::engine::Parser;
use crate::error::ParseError;
use crate::{IntoRule, Tree};
use once_cell::sync::Lazy;

static DEFAULT_PARSER: Lazy<Parser> = Lazy::new(Parser::new);

/// Parse `input` with `rule` on a shared default [`Parser`].
///
/// The default parser uses the stock depth ceiling and treats `\n` and `\r\n`
/// as line breaks. Hosts that need different limits build their own
/// [`Parser`] and call [`Parser::parse`] directly.
///
/// # Example
/// ```
/// use weft::{parse, terminal};
///
/// let word = terminal("greeting", "hello");
/// let tree = parse(word, b"hello").unwrap();
/// assert_eq!(tree.data, b"hello");
/// ```
pub fn parse(rule: impl IntoRule, input: &[u8]) -> Result<Tree<'_>, ParseError> {
    DEFAULT_PARSER.parse(rule, input)
}
