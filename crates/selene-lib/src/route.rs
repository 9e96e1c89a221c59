use serde::Serialize;

use crate::error::{Error, Result};
use crate::network::{Network, WaypointId};
use crate::search::{shortest_paths, ShortestPaths};

/// Walk predecessor links back from `target` and return the waypoint
/// sequence from the search source to `target` inclusive.
///
/// Returns `None` when `target` was never reached. The reversed walk is
/// checked to actually begin at the source, so a dangling predecessor chain
/// reports unreachable instead of yielding a malformed partial path.
pub fn reconstruct_route(paths: &ShortestPaths, target: WaypointId) -> Option<Vec<WaypointId>> {
    let mut route = Vec::new();
    let mut current = Some(target);
    while let Some(waypoint) = current {
        route.push(waypoint);
        current = paths.predecessor(waypoint);
    }
    route.reverse();

    if route.first() == Some(&paths.source()) {
        Some(route)
    } else {
        None
    }
}

/// Planned traverse returned by the library.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct TraversePlan {
    pub start: WaypointId,
    pub goal: WaypointId,
    pub steps: Vec<WaypointId>,
    pub distance_km: f64,
}

impl TraversePlan {
    /// Number of hops in the traverse.
    pub fn hop_count(&self) -> usize {
        self.steps.len().saturating_sub(1)
    }
}

/// Compute the cheapest traverse between two named waypoints.
pub fn plan_traverse(network: &Network, start: &str, goal: &str) -> Result<TraversePlan> {
    let start_id = network.resolve(start)?;
    let goal_id = network.resolve(goal)?;

    let paths = shortest_paths(network, start_id);
    let Some(steps) = reconstruct_route(&paths, goal_id) else {
        return Err(Error::NoTraverse {
            start: start.to_string(),
            goal: goal.to_string(),
        });
    };
    let distance_km = paths.distance(goal_id).unwrap_or(0.0);

    Ok(TraversePlan {
        start: start_id,
        goal: goal_id,
        steps,
        distance_km,
    })
}
