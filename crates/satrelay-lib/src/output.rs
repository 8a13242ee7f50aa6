use std::fmt::Write;

use serde::Serialize;

use crate::constellation::SatId;
use crate::error::{Error, Result};
use crate::routing::RoutePlan;

/// Presentation style for turning a [`RouteSummary`] into text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RouteRenderMode {
    /// Header line plus numbered steps.
    PlainText,
    /// The bare comma-joined relay hops, empty when none are needed.
    HopsOnly,
}

/// Structured representation of a planned relay route that higher-level
/// consumers can serialise.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct RouteSummary {
    pub start: SatId,
    pub goal: SatId,
    pub hops: usize,
    pub total_distance_km: f64,
    pub steps: Vec<SatId>,
    pub relays: Vec<SatId>,
}

impl RouteSummary {
    /// Convert a [`RoutePlan`] into a summary.
    pub fn from_plan(plan: &RoutePlan) -> Result<Self> {
        if plan.steps.is_empty() {
            return Err(Error::EmptyRoutePlan);
        }

        Ok(Self {
            start: plan.start.clone(),
            goal: plan.goal.clone(),
            hops: plan.hop_count(),
            total_distance_km: plan.total_distance_km,
            steps: plan.steps.clone(),
            relays: plan.relay_hops().to_vec(),
        })
    }

    /// Render the summary using the requested textual mode.
    pub fn render(&self, mode: RouteRenderMode) -> String {
        match mode {
            RouteRenderMode::PlainText => self.render_plain(),
            RouteRenderMode::HopsOnly => self.relays.join(","),
        }
    }

    fn render_plain(&self) -> String {
        let mut buffer = String::new();
        let _ = writeln!(
            buffer,
            "Route: {} -> {} ({} hops, {:.3} km)",
            self.start, self.goal, self.hops, self.total_distance_km
        );
        for (index, step) in self.steps.iter().enumerate() {
            let _ = writeln!(buffer, "{index:>3}: {step}");
        }
        buffer
    }
}
