use std::fs;
use std::path::Path;

use serde::Deserialize;
use tracing::debug;

use crate::error::Result;
use crate::geo::{Coordinate, LUNAR_RADIUS_KM};
use crate::network::Network;

/// On-disk description of a surveyed waypoint network.
///
/// Waypoints carry their geographic coordinates; edge weights are derived
/// from those coordinates plus an optional per-edge hazard penalty.
#[derive(Debug, Clone, Deserialize)]
pub struct SurveyFile {
    /// Radius of the body being traversed, in kilometres.
    #[serde(default = "default_body_radius_km")]
    pub body_radius_km: f64,
    pub waypoints: Vec<SurveyWaypoint>,
    #[serde(default)]
    pub edges: Vec<SurveyEdge>,
}

/// A surveyed waypoint with its position in degrees.
#[derive(Debug, Clone, Deserialize)]
pub struct SurveyWaypoint {
    pub name: String,
    pub lat: f64,
    pub lon: f64,
}

/// A directed connection between two named waypoints.
#[derive(Debug, Clone, Deserialize)]
pub struct SurveyEdge {
    pub from: String,
    pub to: String,
    /// Extra traversal cost for hazards along this connection, in km.
    #[serde(default)]
    pub extra_km: f64,
}

fn default_body_radius_km() -> f64 {
    LUNAR_RADIUS_KM
}

/// Load a survey file and build the corresponding network.
pub fn load_network(path: &Path) -> Result<Network> {
    let raw = fs::read_to_string(path)?;
    let survey: SurveyFile = serde_json::from_str(&raw)?;
    debug!(path = %path.display(), "loading survey network");
    build_network(&survey)
}

/// Build a network from an in-memory survey description.
pub fn build_network(survey: &SurveyFile) -> Result<Network> {
    let mut network = Network::new(survey.body_radius_km);

    for waypoint in &survey.waypoints {
        let coordinate = Coordinate::new(waypoint.lat, waypoint.lon)?;
        network.add_surveyed_waypoint(waypoint.name.clone(), coordinate)?;
    }

    for edge in &survey.edges {
        let from = network.resolve(&edge.from)?;
        let to = network.resolve(&edge.to)?;
        network.add_surveyed_edge(from, to, edge.extra_km)?;
    }

    debug!(
        waypoints = network.waypoint_count(),
        edges = network.edge_count(),
        body_radius_km = network.body_radius_km(),
        "survey network built"
    );

    Ok(network)
}
