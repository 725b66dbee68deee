//! A small embeddable parser-combinator engine.
//!
//! A host program composes a grammar once from shared rule handles, then runs
//! it repeatedly over byte input to produce an annotated parse tree:
//!
//! ```
//! use weft::{either, parse, repetition, terminal};
//!
//! let digit = either("digit", vec![terminal("1", "1"), terminal("2", "2"), terminal("3", "3")]);
//! let digits = repetition("digits", digit);
//!
//! let tree = parse(digits, b"123").unwrap();
//! assert_eq!(tree.children.len(), 3);
//! assert_eq!(tree.data, b"123");
//! ```
//!
//! The pieces: the rule algebra and its matching semantics (`rules`), the
//! engine driving a match while enforcing depth limits and positional
//! bookkeeping (`engine`), and the traversal utilities consumers use to
//! inspect results (`walk`, `matchers`). The core model shared by all of them
//! lives here at the crate root.

extern crate self as weft;

#[macro_use]
mod macros;
mod api;
mod engine;
mod error;
mod input;
mod matchers;
mod rules;
mod walk;

pub use api::parse;
pub use engine::Parser;
pub use error::ParseError;
pub use input::{bound, show_input};
pub use matchers::Matcher;
pub use rules::{
    Chain, Either, Regexp, Repetition, Terminal, Wrapper, apply, ascii_range, chain, display, either, regexp,
    repetition, repetition_times, repetition_times_variadic, terminal, wrapper,
};
pub use walk::{Flow, Node, scan, walk_bfs, walk_bfs_name_chain, walk_dfs, walk_dfs_name_chain};

use crate::engine::LineIndex;
use std::borrow::Cow;
use std::fmt;
use std::sync::Arc;

// --- Core model --------------------------------------------------------------

/// Shared handle to a rule in a grammar graph.
///
/// Ownership of rules is shared: one rule may appear under multiple parents,
/// and the graph may be cyclic (see [`Wrapper::named`] for the forward
/// reference used to close cycles). Rules are immutable once matching begins.
pub type RuleRef = Arc<dyn Rule>;

/// Outcome of one rule invocation.
///
/// `Ok(Some(tree))` is a match, `Err` a failure. `Ok(None)` is the *skip*
/// signal: "I consumed nothing, proceed as if I were absent". It is a control
/// value distinct from the error type so that composites can act on it without
/// inspecting error kinds; only the zero-times variadic [`Repetition`] emits
/// it.
pub type MatchResult<'a> = Result<Option<Tree<'a>>, ParseError>;

/// A matching operator: a node in the grammar graph.
///
/// The built-in implementers are [`Terminal`], [`Regexp`], [`Chain`],
/// [`Either`], [`Repetition`] and [`Wrapper`]. Hosts may add their own; an
/// engine that meets a rule it cannot handle reports
/// [`ParseError::UnsupportedRule`].
pub trait Rule: fmt::Debug + Send + Sync {
    /// Human-readable name. Not required to be unique within a grammar.
    fn name(&self) -> &str;

    /// Short lowercase tag naming the rule kind, used by the display emitter.
    fn kind(&self) -> &'static str;

    /// True iff this is a leaf matcher with no sub-rules.
    fn is_finite(&self) -> bool {
        self.children().is_empty()
    }

    /// Ordered sub-rules. Empty for leaves.
    fn children(&self) -> Vec<RuleRef> {
        Vec::new()
    }

    /// Diagnostic key/value pairs rendered by [`display`]. Never consulted
    /// during matching.
    fn parameters(&self) -> Vec<(&'static str, String)> {
        Vec::new()
    }

    /// Match against the start of `input` and emit the covering subtree.
    ///
    /// `this` is the rule's own shared handle, passed in by [`apply`] so the
    /// rule can place itself into the trees it emits and into child contexts.
    /// `input` is the remaining tail of the original buffer;
    /// `ctx.location()` holds the absolute position it starts at.
    fn matches<'a>(&self, this: &RuleRef, ctx: &Context<'_>, input: &'a [u8]) -> MatchResult<'a>;
}

/// Conversion into a shared rule handle.
///
/// Lets construction helpers accept both concrete `Arc<Terminal>`-style
/// handles and already-erased [`RuleRef`]s in the same child list.
pub trait IntoRule {
    fn into_rule(self) -> RuleRef;
}

impl<R: Rule + 'static> IntoRule for Arc<R> {
    fn into_rule(self) -> RuleRef {
        self
    }
}

impl IntoRule for RuleRef {
    fn into_rule(self) -> RuleRef {
        self
    }
}

/// A half-open byte span `[start, end)` within the original input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Region {
    /// Start byte index (inclusive).
    pub start: usize,
    /// End byte index (exclusive).
    pub end: usize,
}

impl Region {
    /// Build a region. `start <= end` must hold; an empty match has
    /// `start == end`.
    pub fn new(start: usize, end: usize) -> Self {
        debug_assert!(start <= end, "region start {start} past end {end}");
        Region { start, end }
    }

    /// Region of zero length anchored at `at`.
    pub fn empty(at: usize) -> Self {
        Region { start: at, end: at }
    }

    pub fn len(&self) -> usize {
        self.end - self.start
    }

    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }
}

impl fmt::Display for Region {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}..{})", self.start, self.end)
    }
}

/// A position within input while matching.
///
/// The byte `offset` is primary; `line` and `column` are derived from the
/// input and the engine's line-break rule. `depth` is the nesting level of the
/// ongoing match. All fields are 0-based.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Location {
    pub offset: usize,
    pub line: usize,
    pub column: usize,
    pub depth: usize,
}

/// The recursive record of a successful match.
///
/// `data` is exactly `input[region.start..region.end]`, borrowed from the
/// buffer handed to [`Parser::parse`]; the input must outlive the tree.
#[derive(Debug, Clone)]
pub struct Tree<'a> {
    /// The rule that produced this subtree.
    pub rule: RuleRef,
    /// Where matching began for this subtree.
    pub location: Location,
    /// The byte span this subtree covers.
    pub region: Region,
    /// The covered bytes.
    pub data: &'a [u8],
    /// One subtree per sub-match that was not skipped, in input order.
    pub children: Vec<Tree<'a>>,
}

impl<'a> Tree<'a> {
    /// Name of the rule that produced this subtree.
    pub fn name(&self) -> &str {
        self.rule.name()
    }

    /// The covered bytes as text.
    pub fn text(&self) -> Cow<'a, str> {
        String::from_utf8_lossy(self.data)
    }

    fn fmt_at(&self, f: &mut fmt::Formatter<'_>, indent: usize) -> fmt::Result {
        writeln!(f, "{:indent$}{} {} \"{}\"", "", self.name(), self.region, self.text(), indent = indent)?;
        for child in &self.children {
            child.fmt_at(f, indent + 2)?;
        }
        Ok(())
    }
}

impl fmt::Display for Tree<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.fmt_at(f, 0)
    }
}

/// Ambient information passed down during matching.
///
/// Carries the engine handle, the rule that invoked the current match (`None`
/// at the root) and the current [`Location`]. A fresh context is constructed
/// at each descent; contexts are never mutated in place.
#[derive(Debug)]
pub struct Context<'p> {
    pub(crate) parser: &'p Parser,
    pub(crate) lines: &'p LineIndex,
    pub(crate) enclosing: Option<RuleRef>,
    pub(crate) location: Location,
}

impl<'p> Context<'p> {
    /// Where matching currently stands.
    pub fn location(&self) -> Location {
        self.location
    }

    /// The rule that invoked this match, if any.
    pub fn enclosing(&self) -> Option<&RuleRef> {
        self.enclosing.as_ref()
    }

    pub(crate) fn enclosing_name(&self) -> Option<String> {
        self.enclosing.as_ref().map(|r| r.name().to_string())
    }

    /// Context for descending into the sub-rules of `this`.
    ///
    /// Increments the nesting depth and checks it against the engine ceiling
    /// before any matching work happens. The location is otherwise unchanged.
    pub fn descend(&self, this: &RuleRef) -> Result<Context<'p>, ParseError> {
        let depth = self.location.depth + 1;
        if depth > self.parser.ceiling() {
            return Err(ParseError::NestingTooDeep { depth, position: self.location.offset });
        }
        Ok(Context {
            parser: self.parser,
            lines: self.lines,
            enclosing: Some(this.clone()),
            location: Location { depth, ..self.location },
        })
    }

    /// Context at byte `offset`, with line and column re-resolved from the
    /// per-parse line index. Depth and enclosing rule carry over.
    pub fn at(&self, offset: usize) -> Context<'p> {
        let (line, column) = self.lines.locate(offset);
        Context {
            parser: self.parser,
            lines: self.lines,
            enclosing: self.enclosing.clone(),
            location: Location { offset, line, column, depth: self.location.depth },
        }
    }
}
