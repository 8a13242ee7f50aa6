use std::collections::HashMap;

use tracing::debug;

use crate::constellation::{Constellation, SatId};
use crate::error::{Error, Result};
use crate::geometry::{Vec3, EARTH_RADIUS_KM};
use crate::visibility::line_of_sight;

/// Node of the visibility graph: identity, fixed position, and the outgoing
/// edges keyed by target identifier. Search bookkeeping lives outside the
/// graph (see [`crate::path`]), so nodes stay immutable after the build.
#[derive(Debug, Clone)]
pub struct Node {
    pub id: SatId,
    pub position: Vec3,
    edges: HashMap<SatId, f64>,
}

impl Node {
    pub fn new(id: SatId, position: Vec3) -> Self {
        Self {
            id,
            position,
            edges: HashMap::new(),
        }
    }

    /// Insert an outgoing edge. A repeated insert for the same target keeps
    /// the cheaper weight.
    pub fn insert_edge(&mut self, target: SatId, distance: f64) {
        self.edges
            .entry(target)
            .and_modify(|existing| {
                if distance < *existing {
                    *existing = distance;
                }
            })
            .or_insert(distance);
    }

    /// Weight of the edge towards `target`, if one exists.
    pub fn edge_to(&self, target: &str) -> Option<f64> {
        self.edges.get(target).copied()
    }

    pub fn edges(&self) -> impl Iterator<Item = (&SatId, f64)> {
        self.edges.iter().map(|(target, distance)| (target, *distance))
    }

    pub fn degree(&self) -> usize {
        self.edges.len()
    }
}

/// Graph over the constellation whose edges connect pairs with unobstructed
/// line of sight, weighted by Euclidean distance.
#[derive(Debug, Clone, Default)]
pub struct VisibilityGraph {
    nodes: HashMap<SatId, Node>,
}

impl VisibilityGraph {
    pub fn node(&self, id: &str) -> Option<&Node> {
        self.nodes.get(id)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.nodes.contains_key(id)
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn nodes(&self) -> impl Iterator<Item = &Node> {
        self.nodes.values()
    }

    /// Total number of directed edges.
    pub fn edge_count(&self) -> usize {
        self.nodes.values().map(Node::degree).sum()
    }

    pub fn insert_node(&mut self, id: SatId, position: Vec3) {
        self.nodes.insert(id.clone(), Node::new(id, position));
    }

    /// Insert a directed edge; keeps the cheaper weight on duplicates. A
    /// missing source node is ignored.
    pub fn insert_edge(&mut self, from: &str, to: SatId, distance: f64) {
        if let Some(node) = self.nodes.get_mut(from) {
            node.insert_edge(to, distance);
        }
    }
}

/// Build the visibility graph for a constellation.
///
/// Visibility is treated as symmetric: each unordered pair is tested once,
/// marching from the lexicographically smaller identifier, and both directed
/// edges are inserted on success. This halves the O(N²) marching work and
/// keeps the two directions of a pair consistent regardless of float jitter
/// in the march.
///
/// Two points sharing a position make the test degenerate and abort the
/// build; no partial graph is returned.
pub fn build_visibility_graph(constellation: &Constellation) -> Result<VisibilityGraph> {
    let mut graph = VisibilityGraph::default();
    for (id, position) in constellation.iter() {
        graph.insert_node(id.clone(), *position);
    }

    let mut entries: Vec<(&SatId, &Vec3)> = constellation.iter().collect();
    entries.sort_by(|left, right| left.0.cmp(right.0));

    for i in 0..entries.len() {
        let (a_id, a_pos) = entries[i];
        for &(b_id, b_pos) in &entries[i + 1..] {
            let visible = match line_of_sight(a_pos, b_pos, EARTH_RADIUS_KM) {
                Ok(visible) => visible,
                Err(Error::ZeroLengthVector) => {
                    return Err(Error::CoincidentPositions {
                        a: a_id.clone(),
                        b: b_id.clone(),
                    })
                }
                Err(err) => return Err(err),
            };

            if visible {
                let distance = a_pos.distance_to(b_pos);
                graph.insert_edge(a_id, b_id.clone(), distance);
                graph.insert_edge(b_id, a_id.clone(), distance);
            }
        }
    }

    debug!(
        nodes = graph.len(),
        edges = graph.edge_count(),
        "visibility graph built"
    );
    Ok(graph)
}
