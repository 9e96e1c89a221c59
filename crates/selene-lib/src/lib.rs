//! Selene library entry points.
//!
//! This crate models a network of surveyed waypoints on the surface of a
//! spherical body, weights the connections between them by great-circle
//! distance plus a terrain hazard penalty, and runs single-source
//! shortest-path searches over the result. Higher-level consumers (the CLI)
//! should only depend on the functions exported here instead of
//! reimplementing behavior.

#![deny(warnings)]

pub mod error;
pub mod geo;
pub mod network;
pub mod report;
pub mod route;
pub mod search;
pub mod survey;

pub use error::{Error, Result};
pub use geo::{geodesic_weight, haversine_distance, Coordinate, LUNAR_RADIUS_KM};
pub use network::{Edge, Network, Waypoint, WaypointId};
pub use report::{distance_lines, path_lines, TraverseEndpoint, TraverseStep, TraverseSummary};
pub use route::{plan_traverse, reconstruct_route, TraversePlan};
pub use search::{shortest_paths, ShortestPaths};
pub use survey::{build_network, load_network, SurveyEdge, SurveyFile, SurveyWaypoint};
