//! Breadth-first walkers.

use crate::walk::{Flow, Node};
use std::collections::VecDeque;
use std::rc::Rc;

/// Parent link in a name chain.
///
/// Each queued node carries an `Rc` link to its parent's chain; a link stays
/// alive exactly as long as some still-queued descendant needs it, so the
/// auxiliary memory of [`walk_bfs_name_chain`] is bounded by the widest level
/// of the tree rather than its node count.
struct Link<'t> {
    label: &'t str,
    parent: Option<Rc<Link<'t>>>,
}

fn names<'t>(parent: &Option<Rc<Link<'t>>>, label: &'t str) -> Vec<&'t str> {
    let mut chain = vec![label];
    let mut cursor = parent.clone();
    while let Some(link) = cursor {
        chain.push(link.label);
        cursor = link.parent.clone();
    }
    chain.reverse();
    chain
}

/// Visit every node level by level, root first.
pub fn walk_bfs<N, F, E>(root: &N, mut visit: F) -> Result<(), E>
where
    N: Node,
    F: FnMut(&N) -> Result<Flow, E>,
{
    let mut queue: VecDeque<&N> = VecDeque::from([root]);
    while let Some(node) = queue.pop_front() {
        match visit(node)? {
            Flow::Stop => return Ok(()),
            Flow::SkipBranch => continue,
            Flow::Continue => queue.extend(node.nodes()),
        }
    }
    Ok(())
}

/// Visit every node level by level, passing the root-to-node label path.
pub fn walk_bfs_name_chain<'t, N, F, E>(root: &'t N, mut visit: F) -> Result<(), E>
where
    N: Node,
    F: FnMut(&'t N, &[&'t str]) -> Result<Flow, E>,
{
    let mut queue: VecDeque<(&'t N, Option<Rc<Link<'t>>>)> = VecDeque::from([(root, None)]);
    while let Some((node, parent)) = queue.pop_front() {
        let chain = names(&parent, node.label());
        match visit(node, &chain)? {
            Flow::Stop => return Ok(()),
            Flow::SkipBranch => continue,
            Flow::Continue => {
                if node.nodes().is_empty() {
                    continue;
                }
                let link = Rc::new(Link { label: node.label(), parent });
                queue.extend(node.nodes().iter().map(|child| (child, Some(link.clone()))));
            }
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::walk::tests::node;

    #[test]
    fn bfs_visits_by_level() {
        let tree = node("root", vec![node("a", vec![node("a1", vec![])]), node("b", vec![])]);
        let mut seen = Vec::new();
        walk_bfs::<_, _, ()>(&tree, |n| {
            seen.push(n.label().to_string());
            Ok(Flow::Continue)
        })
        .unwrap();
        assert_eq!(seen, ["root", "a", "b", "a1"]);
    }

    #[test]
    fn bfs_stop_halts_after_the_visit() {
        let tree = node("root", vec![node("a", vec![]), node("b", vec![])]);
        let mut seen = Vec::new();
        walk_bfs::<_, _, ()>(&tree, |n| {
            seen.push(n.label().to_string());
            Ok(if n.label() == "a" { Flow::Stop } else { Flow::Continue })
        })
        .unwrap();
        assert_eq!(seen, ["root", "a"]);
    }

    #[test]
    fn bfs_skip_branch_omits_descendants_only() {
        let tree = node("root", vec![node("a", vec![node("a1", vec![])]), node("b", vec![node("b1", vec![])])]);
        let mut seen = Vec::new();
        walk_bfs::<_, _, ()>(&tree, |n| {
            seen.push(n.label().to_string());
            Ok(if n.label() == "a" { Flow::SkipBranch } else { Flow::Continue })
        })
        .unwrap();
        assert_eq!(seen, ["root", "a", "b", "b1"]);
    }

    #[test]
    fn bfs_errors_abort_the_walk() {
        let tree = node("root", vec![node("a", vec![])]);
        let err = walk_bfs(&tree, |n| if n.label() == "a" { Err("boom") } else { Ok(Flow::Continue) });
        assert_eq!(err, Err("boom"));
    }

    #[test]
    fn bfs_name_chains_run_root_to_node() {
        let tree = node("root", vec![node("a", vec![node("a1", vec![])]), node("b", vec![])]);
        let mut chains = Vec::new();
        walk_bfs_name_chain::<_, _, ()>(&tree, |_, chain| {
            chains.push(chain.join("."));
            Ok(Flow::Continue)
        })
        .unwrap();
        assert_eq!(chains, ["root", "root.a", "root.b", "root.a.a1"]);
    }
}
