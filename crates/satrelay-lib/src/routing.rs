//! Route orchestration: endpoint validation, graph build, search, and the
//! plan type returned to consumers.

use serde::Serialize;
use tracing::debug;

use crate::constellation::{Constellation, SatId, GOAL, START};
use crate::error::{Error, Result};
use crate::graph::{build_visibility_graph, VisibilityGraph};
use crate::path::find_route;

/// High-level relay route request.
#[derive(Debug, Clone)]
pub struct RouteRequest {
    pub start: SatId,
    pub goal: SatId,
}

impl RouteRequest {
    /// Route between the dataset's injected terminals.
    pub fn terminals() -> Self {
        Self {
            start: START.to_string(),
            goal: GOAL.to_string(),
        }
    }

    pub fn between(start: impl Into<SatId>, goal: impl Into<SatId>) -> Self {
        Self {
            start: start.into(),
            goal: goal.into(),
        }
    }
}

impl Default for RouteRequest {
    fn default() -> Self {
        Self::terminals()
    }
}

/// Planned relay route returned by the library.
#[derive(Debug, Clone, Serialize)]
pub struct RoutePlan {
    pub start: SatId,
    pub goal: SatId,
    /// Full node sequence in travel order, terminals included.
    pub steps: Vec<SatId>,
    /// Sum of edge weights along `steps`, in kilometres.
    pub total_distance_km: f64,
}

impl RoutePlan {
    /// Number of hops in the route.
    pub fn hop_count(&self) -> usize {
        self.steps.len().saturating_sub(1)
    }

    /// The intermediate relays in travel order, terminals stripped. Empty
    /// when the endpoints see each other directly.
    pub fn relay_hops(&self) -> &[SatId] {
        if self.steps.len() <= 2 {
            &[]
        } else {
            &self.steps[1..self.steps.len() - 1]
        }
    }
}

/// Compute a relay route across the constellation.
///
/// Validates the endpoints, builds the visibility graph, and runs the A*
/// search. A drained frontier surfaces as [`Error::RouteNotFound`]; callers
/// that prefer the bare miss signal can run [`find_route`] on a graph they
/// built themselves.
pub fn plan_route(constellation: &Constellation, request: &RouteRequest) -> Result<RoutePlan> {
    for id in [&request.start, &request.goal] {
        if !constellation.contains(id) {
            return Err(Error::UnknownEndpoint { id: id.clone() });
        }
    }

    let graph = build_visibility_graph(constellation)?;

    let Some(steps) = find_route(&graph, &request.start, &request.goal) else {
        return Err(Error::RouteNotFound {
            start: request.start.clone(),
            goal: request.goal.clone(),
        });
    };

    let total_distance_km = total_distance(&graph, &steps);
    debug!(
        hops = steps.len().saturating_sub(1),
        distance_km = total_distance_km,
        "relay route planned"
    );

    Ok(RoutePlan {
        start: request.start.clone(),
        goal: request.goal.clone(),
        steps,
        total_distance_km,
    })
}

fn total_distance(graph: &VisibilityGraph, steps: &[SatId]) -> f64 {
    steps
        .windows(2)
        .filter_map(|pair| {
            let from = graph.node(&pair[0])?;
            let to = graph.node(&pair[1])?;
            Some(from.position.distance_to(&to.position))
        })
        .sum()
}
