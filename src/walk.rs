//! Generic tree traversal.
//!
//! Walkers are the observation surface for parse results. They work over the
//! abstract "labeled node with ordered children" shape ([`Node`]), which
//! [`Tree`](crate::Tree) implements, so hosts can reuse them for their own
//! derived structures.
//!
//! A visitor steers the walk through its return value:
//!
//! ```text
//! Ok(Flow::Continue)    keep going
//! Ok(Flow::Stop)        halt the walk after this visit (not an error)
//! Ok(Flow::SkipBranch)  do not descend into this node's children
//! Err(e)                abort; the error is handed back to the caller
//! ```
//!
//! - `walk_bfs` visits by level, root first, on a FIFO queue.
//! - `walk_dfs` visits preorder on an explicit stack of per-level slices, so
//!   skipping a branch costs nothing.
//! - The `_name_chain` variants additionally pass the path of labels from the
//!   root down to the visited node.
//! - `scan` is the bare preorder visit with no control signals, tolerant of
//!   visitors that mutate child lists while the walk is running.

#[path = "walk/bfs.rs"]
mod bfs;
#[path = "walk/dfs.rs"]
mod dfs;

pub use bfs::{walk_bfs, walk_bfs_name_chain};
pub use dfs::{scan, walk_dfs, walk_dfs_name_chain};

use crate::Tree;

/// Control signal returned by walk visitors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    /// Proceed normally.
    Continue,
    /// Halt the whole walk after this visit.
    Stop,
    /// Do not descend into this node's children.
    SkipBranch,
}

/// A labeled node with ordered children; the shape all walkers traverse.
pub trait Node {
    /// Label shown in name chains.
    fn label(&self) -> &str;

    /// Ordered children.
    fn nodes(&self) -> &[Self]
    where
        Self: Sized;

    /// Ordered children, mutable. Only [`scan`] visitors may mutate them
    /// while a walk is in progress.
    fn nodes_mut(&mut self) -> &mut Vec<Self>
    where
        Self: Sized;
}

impl Node for Tree<'_> {
    fn label(&self) -> &str {
        self.name()
    }

    fn nodes(&self) -> &[Self] {
        &self.children
    }

    fn nodes_mut(&mut self) -> &mut Vec<Self> {
        &mut self.children
    }
}
