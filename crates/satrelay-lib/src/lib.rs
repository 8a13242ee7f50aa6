//! Satellite relay pathfinding library.
//!
//! This crate loads a constellation dataset, builds a visibility graph by
//! testing every pair of points for line of sight past the occluding sphere,
//! and runs an A* search over that graph to find the shortest relay route
//! between the two terminals. Higher-level consumers (the CLI) should only
//! depend on the functions exported here instead of reimplementing behavior.

#![deny(warnings)]

pub mod constellation;
pub mod error;
pub mod geometry;
pub mod graph;
pub mod output;
pub mod path;
pub mod routing;
pub mod visibility;

pub use constellation::{
    load_constellation, parse_constellation, Constellation, SatId, ENDPOINT_ALTITUDE_KM, GOAL,
    START,
};
pub use error::{Error, Result};
pub use geometry::{Vec3, EARTH_RADIUS_KM};
pub use graph::{build_visibility_graph, Node, VisibilityGraph};
pub use output::{RouteRenderMode, RouteSummary};
pub use path::{find_route, PRIORITY_EPSILON};
pub use routing::{plan_route, RoutePlan, RouteRequest};
pub use visibility::{line_of_sight, MIN_STEP_KM};
