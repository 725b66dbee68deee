//! The parser engine.
//!
//! This module is the public entry point for running a grammar. It is split
//! into focused submodules under `src/engine/` while keeping public paths
//! stable (`crate::engine::Parser`).
//!
//! ## How a parse runs
//!
//! ```text
//! rule graph ──┐
//!              │
//! input ── LineIndex::build ─── line starts     (lines.rs)
//!              │
//!              v
//!       Parser::parse (parser.rs)
//!         - fresh Context at {0,0,0,0}
//!         - apply the root rule (recursive descent)
//!         - root skip        -> UnexpectedEof
//!         - unconsumed tail  -> UnexpectedToken
//!              │
//!              v
//!            Tree
//! ```
//!
//! The engine owns the two knobs that bound a run: the nesting ceiling
//! (`max_depth`, checked by composites before each descent) and the
//! `line_break` rule used to resolve byte offsets into line/column pairs.
//!
//! ## Responsibilities by module
//!
//! - `parser.rs`: the `Parser` configuration and the top-level drive loop.
//! - `lines.rs`: the per-parse line index behind `locate`.

#[path = "engine/lines.rs"]
mod lines;
#[path = "engine/parser.rs"]
mod parser;

pub(crate) use lines::LineIndex;
pub use parser::Parser;
