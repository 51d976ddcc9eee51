use std::collections::BTreeMap;
use std::sync::Arc;

use ledge_core::{Obstacle, Position};

use crate::geometry::{distance, segments_intersect};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Stable vertex identifier.
///
/// Identifiers are handed out in creation order and never reused within a graph, and a clone
/// keeps the identifiers of the graph it was copied from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct VertexId(pub u32);

/// Directed connection `start -> end`, weighted by Euclidean distance.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Edge {
    pub start: VertexId,
    pub end: VertexId,
    pub distance: f32,
}

/// A standing spot: a ground extremity, a platform corner, or a collectible.
#[derive(Debug, Clone, PartialEq)]
pub struct Vertex {
    pub position: Position,
    /// Set only for collectible-derived vertices.
    pub goal: bool,
    /// Search scratch flag; meaningless outside a running search.
    pub visited: bool,
    edges: Vec<Edge>,
}

impl Vertex {
    fn new(position: Position, goal: bool) -> Self {
        Self {
            position,
            goal,
            visited: false,
            edges: Vec::new(),
        }
    }

    /// Outgoing edges in generation order.
    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }
}

/// Fixed vertices that do not come from the level's obstacle list.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct GraphLayout {
    /// Left extremity of the ground floor.
    pub ground_left: Position,
    /// Right extremity of the ground floor.
    pub ground_right: Position,
    /// How far above a platform's surface its corner vertices sit (the character's footprint
    /// radius).
    pub vertex_clearance: f32,
}

impl Default for GraphLayout {
    fn default() -> Self {
        Self {
            ground_left: Position::new(50.0, 740.0),
            ground_right: Position::new(1200.0, 740.0),
            vertex_clearance: 40.0,
        }
    }
}

/// Visibility-style graph over a level's standing spots.
///
/// Edges are derived, never stored independently: every build or clone recomputes them from
/// vertex positions with [`Graph::feasible`], and removing a vertex prunes every edge that
/// targets it.
#[derive(Debug)]
pub struct Graph {
    max_vertical_distance: f32,
    obstacles: Arc<[Obstacle]>,
    vertices: BTreeMap<VertexId, Vertex>,
    next_id: u32,
}

impl Graph {
    /// Build with the default [`GraphLayout`].
    pub fn new(
        obstacles: Vec<Obstacle>,
        collectibles: &[Position],
        max_vertical_distance: f32,
    ) -> Self {
        Self::with_layout(
            obstacles,
            collectibles,
            max_vertical_distance,
            GraphLayout::default(),
        )
    }

    pub fn with_layout(
        obstacles: Vec<Obstacle>,
        collectibles: &[Position],
        max_vertical_distance: f32,
        layout: GraphLayout,
    ) -> Self {
        let mut graph = Self {
            max_vertical_distance,
            obstacles: obstacles.into(),
            vertices: BTreeMap::new(),
            next_id: 0,
        };

        graph.insert_vertex(layout.ground_left, false);
        graph.insert_vertex(layout.ground_right, false);

        let clearance = layout.vertex_clearance;
        let obstacles = Arc::clone(&graph.obstacles);
        for o in obstacles.iter() {
            let surface = o.top() - clearance;
            graph.insert_vertex(Position::new(o.right(), surface), false);
            graph.insert_vertex(Position::new(o.left(), surface), false);
        }

        for c in collectibles {
            graph.insert_vertex(*c, true);
        }

        graph.generate_edges();
        tracing::debug!(
            vertices = graph.vertex_count(),
            edges = graph.edge_count(),
            obstacles = graph.obstacles.len(),
            reach = max_vertical_distance,
            "built visibility graph"
        );
        graph
    }

    pub fn max_vertical_distance(&self) -> f32 {
        self.max_vertical_distance
    }

    pub fn obstacles(&self) -> &[Obstacle] {
        &self.obstacles
    }

    pub fn vertex(&self, id: VertexId) -> Option<&Vertex> {
        self.vertices.get(&id)
    }

    pub(crate) fn vertex_mut(&mut self, id: VertexId) -> Option<&mut Vertex> {
        self.vertices.get_mut(&id)
    }

    /// Vertices in creation order.
    pub fn vertices(&self) -> impl Iterator<Item = (VertexId, &Vertex)> + '_ {
        self.vertices.iter().map(|(id, v)| (*id, v))
    }

    pub fn edges(&self) -> impl Iterator<Item = &Edge> + '_ {
        self.vertices.values().flat_map(|v| v.edges.iter())
    }

    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    pub fn edge_count(&self) -> usize {
        self.vertices.values().map(|v| v.edges.len()).sum()
    }

    pub fn goal_count(&self) -> usize {
        self.vertices.values().filter(|v| v.goal).count()
    }

    pub fn goals(&self) -> impl Iterator<Item = Position> + '_ {
        self.vertices
            .values()
            .filter(|v| v.goal)
            .map(|v| v.position)
    }

    /// First vertex (in creation order) at exactly `position`.
    pub fn find_vertex(&self, position: Position) -> Option<VertexId> {
        self.vertices
            .iter()
            .find(|(_, v)| v.position == position)
            .map(|(id, _)| *id)
    }

    pub fn in_degree(&self, id: VertexId) -> usize {
        self.edges().filter(|e| e.end == id).count()
    }

    pub fn reset_visited(&mut self) {
        for v in self.vertices.values_mut() {
            v.visited = false;
        }
    }

    /// Whether a character standing at `from` can move straight to `to`.
    ///
    /// Rising by more than the reach is never feasible; descending is unconstrained. Otherwise
    /// the straight segment must not cross the top surface of any obstacle. Obstacle sides and
    /// bottoms are not tested.
    pub fn feasible(&self, from: Position, to: Position) -> bool {
        if from.y - to.y > self.max_vertical_distance {
            return false;
        }
        !self
            .obstacles
            .iter()
            .any(|o| segments_intersect(from, to, o.top_right(), o.top_left()))
    }

    /// Splice a non-goal vertex at `position` into the graph with outgoing edges only.
    ///
    /// Existing vertices at exactly the same coordinates are skipped as targets. No existing
    /// vertex gains an edge into the new one.
    pub fn add_from_position(&mut self, position: Position) -> VertexId {
        let edges: Vec<(VertexId, f32)> = self
            .vertices
            .iter()
            .filter(|(_, other)| other.position != position)
            .filter(|(_, other)| self.feasible(position, other.position))
            .map(|(id, other)| (*id, distance(position, other.position)))
            .collect();

        let id = self.insert_vertex(position, false);
        if let Some(vertex) = self.vertices.get_mut(&id) {
            vertex.edges = edges
                .into_iter()
                .map(|(end, distance)| Edge {
                    start: id,
                    end,
                    distance,
                })
                .collect();
        }
        id
    }

    /// Delete the goal vertex at exactly `position` together with every edge that targets it.
    ///
    /// Non-goal vertices are never removed, even at the same coordinates. Returns whether a
    /// vertex was removed; an unknown position is a no-op.
    pub fn remove_goal_at(&mut self, position: Position) -> bool {
        let Some(id) = self
            .vertices
            .iter()
            .find(|(_, v)| v.goal && v.position == position)
            .map(|(id, _)| *id)
        else {
            tracing::trace!(x = position.x, y = position.y, "no goal vertex to remove");
            return false;
        };

        self.vertices.remove(&id);
        let mut pruned = 0usize;
        for v in self.vertices.values_mut() {
            let before = v.edges.len();
            v.edges.retain(|e| e.end != id);
            pruned += before - v.edges.len();
        }

        tracing::debug!(
            vertex = id.0,
            x = position.x,
            y = position.y,
            pruned_edges = pruned,
            "removed goal vertex"
        );
        true
    }

    fn insert_vertex(&mut self, position: Position, goal: bool) -> VertexId {
        let id = VertexId(self.next_id);
        self.next_id += 1;
        self.vertices.insert(id, Vertex::new(position, goal));
        id
    }

    /// Recompute all edges for every ordered pair of distinct vertices.
    fn generate_edges(&mut self) {
        let nodes: Vec<(VertexId, Position)> = self
            .vertices
            .iter()
            .map(|(id, v)| (*id, v.position))
            .collect();

        let mut all_edges: Vec<Vec<Edge>> = Vec::with_capacity(nodes.len());
        for &(start, from) in &nodes {
            let edges = nodes
                .iter()
                .filter(|&&(end, _)| end != start)
                .filter(|&&(_, to)| self.feasible(from, to))
                .map(|&(end, to)| Edge {
                    start,
                    end,
                    distance: distance(from, to),
                })
                .collect();
            all_edges.push(edges);
        }

        for (v, edges) in self.vertices.values_mut().zip(all_edges) {
            v.edges = edges;
        }
    }
}

/// Deep copy for a destructive search.
///
/// Vertices keep their identifiers, positions and goal flags; `visited` is reset and every edge
/// is regenerated from the copied positions. The obstacle list is shared, not duplicated.
impl Clone for Graph {
    fn clone(&self) -> Self {
        let mut clone = Self {
            max_vertical_distance: self.max_vertical_distance,
            obstacles: Arc::clone(&self.obstacles),
            vertices: self
                .vertices
                .iter()
                .map(|(id, v)| (*id, Vertex::new(v.position, v.goal)))
                .collect(),
            next_id: self.next_id,
        };
        clone.generate_edges();
        clone
    }
}
