//! Depth-first walkers.

use crate::walk::{Flow, Node};

/// Visit every node preorder, each node before its children.
///
/// The stack holds one `(siblings, next index)` frame per level, so skipping a
/// branch is a matter of not pushing a frame for it.
pub fn walk_dfs<N, F, E>(root: &N, mut visit: F) -> Result<(), E>
where
    N: Node,
    F: FnMut(&N) -> Result<Flow, E>,
{
    match visit(root)? {
        Flow::Stop | Flow::SkipBranch => return Ok(()),
        Flow::Continue => {}
    }
    let mut stack: Vec<(&[N], usize)> = vec![(root.nodes(), 0)];
    while let Some(frame) = stack.last_mut() {
        let (siblings, index) = (frame.0, frame.1);
        if index >= siblings.len() {
            stack.pop();
            continue;
        }
        frame.1 += 1;
        let node = &siblings[index];
        match visit(node)? {
            Flow::Stop => return Ok(()),
            Flow::SkipBranch => {}
            Flow::Continue => {
                if !node.nodes().is_empty() {
                    stack.push((node.nodes(), 0));
                }
            }
        }
    }
    Ok(())
}

/// Visit every node preorder, passing the root-to-node label path.
///
/// The chain vector mirrors the stack: one label pushed when a frame is
/// entered, popped when the frame is exhausted.
pub fn walk_dfs_name_chain<'t, N, F, E>(root: &'t N, mut visit: F) -> Result<(), E>
where
    N: Node,
    F: FnMut(&'t N, &[&'t str]) -> Result<Flow, E>,
{
    let mut chain: Vec<&'t str> = vec![root.label()];
    match visit(root, &chain)? {
        Flow::Stop | Flow::SkipBranch => return Ok(()),
        Flow::Continue => {}
    }
    let mut stack: Vec<(&'t [N], usize)> = vec![(root.nodes(), 0)];
    while let Some(frame) = stack.last_mut() {
        let (siblings, index) = (frame.0, frame.1);
        if index >= siblings.len() {
            stack.pop();
            chain.pop();
            continue;
        }
        frame.1 += 1;
        let node = &siblings[index];
        chain.push(node.label());
        match visit(node, &chain)? {
            Flow::Stop => return Ok(()),
            Flow::SkipBranch => {
                chain.pop();
            }
            Flow::Continue => {
                if node.nodes().is_empty() {
                    chain.pop();
                } else {
                    stack.push((node.nodes(), 0));
                }
            }
        }
    }
    Ok(())
}

/// Bare preorder visit over mutable nodes, with no control signals.
///
/// The child list is re-read on every step, so a visitor may insert or remove
/// children of the node it is handed; children already behind the cursor are
/// not revisited.
pub fn scan<N, F>(root: &mut N, mut visit: F)
where
    N: Node,
    F: FnMut(&mut N),
{
    scan_inner(root, &mut visit);
}

fn scan_inner<N: Node>(node: &mut N, visit: &mut impl FnMut(&mut N)) {
    visit(node);
    let mut index = 0;
    while index < node.nodes_mut().len() {
        scan_inner(&mut node.nodes_mut()[index], visit);
        index += 1;
    }
}
