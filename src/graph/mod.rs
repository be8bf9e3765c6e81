//! Layered DAG built from winning routes.
//!
//! One node per distinct `(step, cell)` pair, one edge record per traversed
//! transition. Winning routes that share a prefix merge at the shared nodes,
//! so a node can have several incoming edges; that union view is the point of
//! the construction.

use rustc_hash::{FxHashMap, FxHashSet};

use crate::core::cell::Cell;
use crate::search::enumerate::Route;

/// A node of the layered graph, keyed by `(step, cell)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct LayerNode {
    pub step: usize,
    pub cell: Cell,
}

/// One traversal of a transition: connects `(step, from)` to `(step + 1, to)`.
///
/// The edge list is deliberately not deduplicated; identical transitions from
/// different routes stay separate records (see [`LayeredGraph::edge_groups`]).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct LayerEdge {
    pub step: usize,
    pub from: Cell,
    pub to: Cell,
}

/// Identity of a logical transition, shared by all its edge records.
pub type EdgeKey = (usize, Cell, Cell);

#[derive(Debug, Clone, Default)]
pub struct LayeredGraph {
    /// Sorted by `(step, cell)` ascending.
    pub nodes: Vec<LayerNode>,
    /// In route order of the input, duplicates retained.
    pub edges: Vec<LayerEdge>,
}

impl LayeredGraph {
    /// Fold winning routes into a layered graph. Routes shorter than two
    /// cells traverse nothing and are skipped. Rebuilt from scratch on each
    /// generation; there is no incremental update.
    pub fn from_wins(wins: &[Route]) -> LayeredGraph {
        let mut seen: FxHashSet<LayerNode> = FxHashSet::default();
        let mut nodes: Vec<LayerNode> = Vec::new();
        let mut edges: Vec<LayerEdge> = Vec::new();

        let mut ensure = |node: LayerNode, nodes: &mut Vec<LayerNode>| {
            if seen.insert(node) {
                nodes.push(node);
            }
        };

        for route in wins.iter().filter(|r| r.len() >= 2) {
            for (step, pair) in route.windows(2).enumerate() {
                ensure(
                    LayerNode {
                        step,
                        cell: pair[0],
                    },
                    &mut nodes,
                );
                ensure(
                    LayerNode {
                        step: step + 1,
                        cell: pair[1],
                    },
                    &mut nodes,
                );
                edges.push(LayerEdge {
                    step,
                    from: pair[0],
                    to: pair[1],
                });
            }
        }

        nodes.sort_unstable();
        LayeredGraph { nodes, edges }
    }

    /// Highest step index present, 0 for an empty graph.
    pub fn max_step(&self) -> usize {
        self.nodes.last().map_or(0, |n| n.step)
    }

    /// Nodes of one layer, in cell order.
    pub fn layer(&self, step: usize) -> impl Iterator<Item = &LayerNode> {
        self.nodes.iter().filter(move |n| n.step == step)
    }

    /// Indices of edges arriving at a node (its parents' traversals).
    pub fn in_edges(&self, node: LayerNode) -> Vec<usize> {
        self.edges
            .iter()
            .enumerate()
            .filter(|(_, e)| e.step + 1 == node.step && e.to == node.cell)
            .map(|(i, _)| i)
            .collect()
    }

    /// Group edge indices by logical transition, retaining every member.
    ///
    /// A renderer that draws one stroke per record needs this to flash all
    /// drawn instances of a transition at once.
    pub fn edge_groups(&self) -> FxHashMap<EdgeKey, Vec<usize>> {
        let mut groups: FxHashMap<EdgeKey, Vec<usize>> = FxHashMap::default();
        for (i, e) in self.edges.iter().enumerate() {
            groups.entry((e.step, e.from, e.to)).or_default().push(i);
        }
        groups
    }
}
