//! Cycle detection over directed graphs.
//!
//! Three-color depth-first search driven by an explicit work stack. Editor
//! graphs are routinely long chains, so the walk must not lean on the call
//! stack; a ten-thousand-node pipeline is still a few machine words per
//! frame here where recursion would overflow.

use petgraph::graph::{DiGraph, NodeIndex};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Mark {
    Unvisited,
    InProgress,
    Finished,
}

/// Returns true when the graph has no directed cycle.
///
/// A node is `InProgress` while anything below it is still being explored
/// and `Finished` once its whole subtree is done. Meeting an `InProgress`
/// node again means the walk has come back around: a cycle. Meeting a
/// `Finished` node is just a diamond, two paths into the same subgraph, and
/// is skipped without re-exploring. A self-loop trips the `InProgress` check
/// on its own node immediately.
pub fn is_acyclic<N, E>(graph: &DiGraph<N, E>) -> bool {
    let mut marks = vec![Mark::Unvisited; graph.node_count()];
    for start in graph.node_indices() {
        if marks[start.index()] != Mark::Unvisited {
            continue;
        }
        if walk_finds_cycle(graph, start, &mut marks) {
            return false;
        }
    }
    true
}

fn walk_finds_cycle<N, E>(
    graph: &DiGraph<N, E>,
    start: NodeIndex,
    marks: &mut [Mark],
) -> bool {
    marks[start.index()] = Mark::InProgress;
    let mut stack = vec![(start, graph.neighbors(start))];
    loop {
        // Take the next neighbor before touching the stack again; holding
        // the iterator borrow across a push would not compile.
        let next = match stack.last_mut() {
            Some((_, neighbors)) => neighbors.next(),
            None => return false,
        };
        match next {
            Some(neighbor) => match marks[neighbor.index()] {
                Mark::InProgress => return true,
                Mark::Finished => {}
                Mark::Unvisited => {
                    marks[neighbor.index()] = Mark::InProgress;
                    stack.push((neighbor, graph.neighbors(neighbor)));
                }
            },
            None => {
                if let Some((done, _)) = stack.pop() {
                    marks[done.index()] = Mark::Finished;
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn graph_of(nodes: usize, arcs: &[(usize, usize)]) -> DiGraph<usize, ()> {
        let mut graph = DiGraph::new();
        let indices: Vec<_> = (0..nodes).map(|n| graph.add_node(n)).collect();
        for &(from, to) in arcs {
            graph.add_edge(indices[from], indices[to], ());
        }
        graph
    }

    #[test]
    fn empty_graph_is_acyclic() {
        assert!(is_acyclic(&graph_of(0, &[])));
    }

    #[test]
    fn isolated_nodes_are_acyclic() {
        assert!(is_acyclic(&graph_of(3, &[])));
    }

    #[test]
    fn chain_is_acyclic() {
        assert!(is_acyclic(&graph_of(4, &[(0, 1), (1, 2), (2, 3)])));
    }

    #[test]
    fn diamond_is_acyclic() {
        assert!(is_acyclic(&graph_of(4, &[(0, 1), (0, 2), (1, 3), (2, 3)])));
    }

    #[test]
    fn triangle_is_a_cycle() {
        assert!(!is_acyclic(&graph_of(3, &[(0, 1), (1, 2), (2, 0)])));
    }

    #[test]
    fn self_loop_is_a_cycle() {
        assert!(!is_acyclic(&graph_of(1, &[(0, 0)])));
    }

    #[test]
    fn cycle_in_one_component_decides_the_graph() {
        assert!(!is_acyclic(&graph_of(5, &[(0, 1), (2, 3), (3, 4), (4, 2)])));
    }

    #[test]
    fn back_edge_into_ancestor_is_a_cycle() {
        assert!(!is_acyclic(&graph_of(4, &[(0, 1), (1, 2), (2, 3), (3, 1)])));
    }

    #[test]
    fn deep_chain_does_not_exhaust_the_stack() {
        let arcs: Vec<_> = (0..9_999).map(|n| (n, n + 1)).collect();
        assert!(is_acyclic(&graph_of(10_000, &arcs)));
        let mut looped = arcs;
        looped.push((9_999, 0));
        assert!(!is_acyclic(&graph_of(10_000, &looped)));
    }
}
