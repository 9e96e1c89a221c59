use thiserror::Error;

use crate::network::WaypointId;

/// Convenient result alias for the Selene library.
pub type Result<T> = std::result::Result<T, Error>;

/// Top-level library error type.
#[derive(Debug, Error)]
pub enum Error {
    /// Raised when a waypoint name could not be found in the network.
    #[error("unknown waypoint: {name}{}", format_suggestions(.suggestions))]
    UnknownWaypoint {
        name: String,
        suggestions: Vec<String>,
    },

    /// Raised when declaring a waypoint whose name is already in use.
    #[error("duplicate waypoint name: {name}")]
    DuplicateWaypoint { name: String },

    /// Raised when an edge references a waypoint that was never declared.
    #[error("edge endpoint references undeclared waypoint id {id}")]
    UndeclaredEndpoint { id: WaypointId },

    /// Raised when an edge weight would break the non-negativity invariant
    /// the search relies on.
    #[error("invalid weight {weight_km} km on edge {source_id} -> {target}: weights must be finite and non-negative")]
    InvalidWeight {
        source_id: WaypointId,
        target: WaypointId,
        weight_km: f64,
    },

    /// Raised for latitudes or longitudes outside their valid ranges.
    #[error("invalid coordinate ({lat_deg}, {lon_deg}): latitude must be within [-90, 90] and longitude within [-180, 180]")]
    InvalidCoordinate { lat_deg: f64, lon_deg: f64 },

    /// Raised when a geodesic edge is requested for a waypoint without a
    /// surveyed coordinate.
    #[error("waypoint {name} has no surveyed coordinate")]
    UnsurveyedWaypoint { name: String },

    /// Raised when no traverse could be found between two waypoints.
    #[error("no traverse found between {start} and {goal}")]
    NoTraverse { start: String, goal: String },

    /// Raised when a computed traverse plan lacks any waypoints.
    #[error("traverse plan was empty")]
    EmptyTraversePlan,

    /// Wrapper for IO errors.
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// Wrapper for survey file parsing errors.
    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

fn format_suggestions(suggestions: &[String]) -> String {
    if suggestions.is_empty() {
        String::new()
    } else if suggestions.len() == 1 {
        format!(". Did you mean '{}'?", suggestions[0])
    } else {
        format!(
            ". Did you mean one of: {}?",
            suggestions
                .iter()
                .map(|s| format!("'{}'", s))
                .collect::<Vec<_>>()
                .join(", ")
        )
    }
}
