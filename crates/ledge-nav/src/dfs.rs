//! Depth-first search from a live position to the first reachable goal vertex.
//!
//! The search is destructive: it splices the start into the graph and flips `visited` flags,
//! so callers normally run it on a clone (see [`crate::Navigator`]).

use ledge_core::Position;

use crate::{Graph, NavPath, VertexId};

/// One discovered vertex and the arena index of the node that discovered it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchNode {
    pub vertex: VertexId,
    pub parent: Option<usize>,
}

/// Reusable scratch buffers for DFS queries.
///
/// After a search, [`DfsQuery::nodes`] holds every node discovered by that search, root first,
/// which is handy for debugging the traversal order.
#[derive(Debug, Default)]
pub struct DfsQuery {
    nodes: Vec<SearchNode>,
    open: Vec<usize>,
    children: Vec<VertexId>,
}

impl DfsQuery {
    pub fn nodes(&self) -> &[SearchNode] {
        &self.nodes
    }
}

pub fn search(graph: &mut Graph, start: Position) -> Option<NavPath> {
    let mut query = DfsQuery::default();
    let mut out = NavPath::default();
    search_into(graph, start, &mut query, &mut out)?;
    Some(out)
}

/// Like [`search`], writing into caller-owned buffers. `out` is left empty on `None`.
pub fn search_into(
    graph: &mut Graph,
    start: Position,
    query: &mut DfsQuery,
    out: &mut NavPath,
) -> Option<()> {
    out.points.clear();
    let DfsQuery {
        nodes,
        open,
        children,
    } = query;
    nodes.clear();
    open.clear();

    graph.reset_visited();
    let root = graph.add_from_position(start);
    nodes.push(SearchNode {
        vertex: root,
        parent: None,
    });
    open.push(0);

    let mut expanded = 0usize;
    while let Some(current) = open.pop() {
        expanded += 1;
        children.clear();
        if let Some(vertex) = graph.vertex(nodes[current].vertex) {
            children.extend(vertex.edges().iter().map(|e| e.end));
        }

        for &child in children.iter() {
            let Some(target) = graph.vertex_mut(child) else {
                continue;
            };

            if target.goal {
                nodes.push(SearchNode {
                    vertex: child,
                    parent: Some(current),
                });
                reconstruct_into(graph, nodes, nodes.len() - 1, out)?;
                tracing::debug!(
                    expanded,
                    discovered = nodes.len(),
                    waypoints = out.len(),
                    "dfs reached goal"
                );
                return Some(());
            }

            if !target.visited {
                target.visited = true;
                nodes.push(SearchNode {
                    vertex: child,
                    parent: Some(current),
                });
                open.push(nodes.len() - 1);
            }
        }
    }

    tracing::debug!(
        expanded,
        discovered = nodes.len(),
        x = start.x,
        y = start.y,
        "dfs exhausted frontier without reaching a goal"
    );
    None
}

/// Walk parent indices from `leaf` back to the root, goal first.
fn reconstruct_into(
    graph: &Graph,
    nodes: &[SearchNode],
    leaf: usize,
    out: &mut NavPath,
) -> Option<()> {
    let mut at = Some(leaf);
    while let Some(idx) = at {
        let node = nodes[idx];
        out.points.push(graph.vertex(node.vertex)?.position);
        at = node.parent;
    }
    Some(())
}
