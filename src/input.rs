//! Byte-level input helpers.
//!
//! Small scanning utilities shared by the rules, the engine, and the error
//! constructors. Everything here works on raw bytes; the only concession to
//! UTF-8 is [`codepoints`], which counts scalar values without validating.

use crate::ParseError;
use crate::Region;
use std::borrow::Cow;

/// Hard cap on the length of a displayed input window.
const SHOW_MAX: usize = 32;
/// Once past this many bytes, the next space ends the window.
const SHOW_SOFT: usize = SHOW_MAX / 2;

/// Produce a displayable window of `buf` for error messages.
///
/// The scan stops at the first newline, or at the first space once past the
/// soft threshold, or at the hard cap of 32 bytes, whichever comes first. When
/// anything was cut off, the returned copy ends in `...`; otherwise the
/// original buffer is returned borrowed and untouched.
pub fn show_input(buf: &[u8]) -> Cow<'_, [u8]> {
    let mut cut = None;
    for (i, &b) in buf.iter().enumerate() {
        if i >= SHOW_MAX {
            cut = Some(SHOW_MAX);
            break;
        }
        if b == b'\n' || (i >= SHOW_SOFT && b == b' ') {
            cut = Some(i);
            break;
        }
    }

    match cut {
        None => Cow::Borrowed(buf),
        Some(at) => {
            let mut shown = buf[..at].to_vec();
            if shown.len() >= 3 {
                let tail = shown.len() - 3;
                shown[tail..].copy_from_slice(b"...");
            } else {
                shown = b"...".to_vec();
            }
            Cow::Owned(shown)
        }
    }
}

/// Count UTF-8 code points in `bytes` without validating.
///
/// Continuation bytes (`0b10xx_xxxx`) are skipped, so for well-formed UTF-8
/// this is the scalar value count and for arbitrary bytes it never exceeds
/// `bytes.len()`.
pub(crate) fn codepoints(bytes: &[u8]) -> usize {
    bytes.iter().filter(|&&b| b & 0xC0 != 0x80).count()
}

/// Scan `input` for a balanced `opening`/`closing` pair.
///
/// Returns the region covering the first opener through its matching closer
/// (inclusive), `Ok(None)` when no opener occurs at all, and
/// [`ParseError::BoundIncomplete`] when an opener is left unclosed.
pub fn bound(input: &[u8], opening: u8, closing: u8) -> Result<Option<Region>, ParseError> {
    let Some(start) = input.iter().position(|&b| b == opening) else {
        return Ok(None);
    };

    let mut depth = 0usize;
    for (i, &b) in input.iter().enumerate().skip(start) {
        if b == opening {
            depth += 1;
        } else if b == closing {
            depth -= 1;
            if depth == 0 {
                return Ok(Some(Region::new(start, i + 1)));
            }
        }
    }

    Err(ParseError::BoundIncomplete {
        position: start,
        opening: char::from(opening).to_string(),
        closing: char::from(closing).to_string(),
    })
}
