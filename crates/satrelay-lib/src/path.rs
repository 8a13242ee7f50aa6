use std::cmp::Ordering;
use std::collections::{BinaryHeap, HashMap};

use crate::constellation::SatId;
use crate::graph::VisibilityGraph;

/// Frontier priorities closer together than this are treated as equal and
/// tie-broken by identifier. The tolerance only dampens floating-point jitter
/// in the pop order; it carries no semantic weight.
pub const PRIORITY_EPSILON: f64 = 1.0e-4;

/// A* search from `start` to `goal` over the visibility graph.
///
/// Returns the full node sequence including both endpoints, or `None` when
/// the frontier drains without reaching the goal. A miss is a first-class
/// result here, not an error.
///
/// Search state (best-known cost and predecessor per node) lives in per-call
/// tables keyed by identifier, so the graph stays read-only and any number of
/// searches can run over it. Relaxing a node pushes a fresh frontier entry;
/// entries whose recorded cost no longer matches the node's best are dropped
/// on pop (lazy deletion), which keeps the search optimal without a
/// decrease-key queue. The straight-line heuristic never overestimates
/// straight-line edge costs, so the first goal pop is the cheapest route.
pub fn find_route(graph: &VisibilityGraph, start: &str, goal: &str) -> Option<Vec<SatId>> {
    let start_node = graph.node(start)?;
    let goal_node = graph.node(goal)?;

    if start == goal {
        return Some(vec![start_node.id.clone()]);
    }

    let goal_position = goal_node.position;

    let mut g_score: HashMap<&SatId, f64> = HashMap::new();
    let mut predecessor: HashMap<&SatId, &SatId> = HashMap::new();
    let mut frontier = BinaryHeap::new();

    g_score.insert(&start_node.id, 0.0);
    frontier.push(FrontierEntry::new(
        &start_node.id,
        0.0,
        start_node.position.distance_to(&goal_position),
    ));

    while let Some(entry) = frontier.pop() {
        // lazy deletion: the node was relaxed after this entry was pushed
        let current = match g_score.get(entry.id) {
            Some(best) if entry.cost > *best => continue,
            Some(best) => *best,
            None => continue,
        };

        if entry.id.as_str() == goal {
            return Some(reconstruct_path(&predecessor, entry.id));
        }

        let Some(node) = graph.node(entry.id) else {
            continue;
        };

        for (target, distance) in node.edges() {
            let Some(neighbour) = graph.node(target) else {
                continue;
            };

            let tentative = current + distance;
            if tentative < *g_score.get(&neighbour.id).unwrap_or(&f64::INFINITY) {
                g_score.insert(&neighbour.id, tentative);
                predecessor.insert(&neighbour.id, entry.id);
                frontier.push(FrontierEntry::new(
                    &neighbour.id,
                    tentative,
                    neighbour.position.distance_to(&goal_position),
                ));
            }
        }
    }

    None
}

fn reconstruct_path<'a>(
    predecessor: &HashMap<&'a SatId, &'a SatId>,
    goal: &'a SatId,
) -> Vec<SatId> {
    let mut path = vec![goal.clone()];
    let mut current = goal;
    while let Some(&prev) = predecessor.get(current) {
        current = prev;
        path.push(prev.clone());
    }
    path.reverse();
    path
}

#[derive(Debug, Clone, Copy)]
struct FrontierEntry<'a> {
    id: &'a SatId,
    /// Cost at push time; stale once the node is relaxed again.
    cost: f64,
    /// f = g + h, the heap priority.
    priority: f64,
}

impl<'a> FrontierEntry<'a> {
    fn new(id: &'a SatId, cost: f64, estimate: f64) -> Self {
        Self {
            id,
            cost,
            priority: cost + estimate,
        }
    }
}

impl Eq for FrontierEntry<'_> {}

impl PartialEq for FrontierEntry<'_> {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Ord for FrontierEntry<'_> {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reverse ordering so BinaryHeap becomes a min-heap on priority;
        // priorities within PRIORITY_EPSILON fall back to the identifier.
        match compare_priority(other.priority, self.priority) {
            Ordering::Equal => other.id.cmp(self.id),
            ordering => ordering,
        }
    }
}

impl PartialOrd for FrontierEntry<'_> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

fn compare_priority(a: f64, b: f64) -> Ordering {
    if (a - b).abs() <= PRIORITY_EPSILON {
        Ordering::Equal
    } else {
        a.total_cmp(&b)
    }
}
