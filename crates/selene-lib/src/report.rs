use std::fmt::Write;

use serde::Serialize;

use crate::error::{Error, Result};
use crate::network::{Network, WaypointId};
use crate::route::{reconstruct_route, TraversePlan};
use crate::search::ShortestPaths;

/// One line per declared waypoint describing its distance from the search
/// source, in declaration order.
///
/// Unreachable waypoints are called out as such rather than rendered as a
/// numeric sentinel.
pub fn distance_lines(network: &Network, paths: &ShortestPaths) -> Vec<String> {
    network
        .waypoints()
        .map(|waypoint| match paths.distance(waypoint.id) {
            Some(distance) => {
                format!("Node {} is at a distance of {}", waypoint.name, distance)
            }
            None => format!("Node {} is unreachable", waypoint.name),
        })
        .collect()
}

/// One line per declared waypoint listing the reconstructed route from the
/// search source, in declaration order.
pub fn path_lines(network: &Network, paths: &ShortestPaths) -> Vec<String> {
    network
        .waypoints()
        .map(|waypoint| match reconstruct_route(paths, waypoint.id) {
            Some(route) => {
                let joined = route
                    .iter()
                    .filter_map(|id| network.waypoint_name(*id))
                    .collect::<Vec<_>>()
                    .join(" - ");
                format!("Shortest path to node {}: {}", waypoint.name, joined)
            }
            None => format!("No path to node {}", waypoint.name),
        })
        .collect()
}

/// Endpoint within a planned traverse.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct TraverseEndpoint {
    pub id: WaypointId,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

impl TraverseEndpoint {
    fn display_name(&self) -> &str {
        self.name.as_deref().unwrap_or("<unknown>")
    }
}

/// Step taken during a planned traverse.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct TraverseStep {
    pub index: usize,
    pub id: WaypointId,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Distance covered by the leg arriving at this step; `None` on the
    /// starting waypoint.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub leg_km: Option<f64>,
}

impl TraverseStep {
    fn display_name(&self) -> &str {
        self.name.as_deref().unwrap_or("<unknown>")
    }
}

/// Structured representation of a planned traverse that higher-level
/// consumers can serialise or render.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct TraverseSummary {
    pub start: TraverseEndpoint,
    pub goal: TraverseEndpoint,
    pub hops: usize,
    pub distance_km: f64,
    pub steps: Vec<TraverseStep>,
}

impl TraverseSummary {
    /// Convert a [`TraversePlan`] into a summary with resolved waypoint
    /// names and per-leg distances.
    pub fn from_plan(network: &Network, plan: &TraversePlan) -> Result<Self> {
        if plan.steps.is_empty() {
            return Err(Error::EmptyTraversePlan);
        }

        let steps = plan
            .steps
            .iter()
            .enumerate()
            .map(|(index, &id)| TraverseStep {
                index,
                id,
                name: network.waypoint_name(id).map(|name| name.to_string()),
                leg_km: if index == 0 {
                    None
                } else {
                    cheapest_leg(network, plan.steps[index - 1], id)
                },
            })
            .collect::<Vec<_>>();

        let start = TraverseEndpoint {
            id: plan.start,
            name: network.waypoint_name(plan.start).map(|n| n.to_string()),
        };
        let goal = TraverseEndpoint {
            id: plan.goal,
            name: network.waypoint_name(plan.goal).map(|n| n.to_string()),
        };

        Ok(Self {
            start,
            goal,
            hops: plan.hop_count(),
            distance_km: plan.distance_km,
            steps,
        })
    }

    /// Render the summary as plain text.
    pub fn render(&self) -> String {
        let mut buffer = String::new();
        let _ = writeln!(
            buffer,
            "Traverse: {} -> {} ({} hops, {:.3} km)",
            self.start.display_name(),
            self.goal.display_name(),
            self.hops,
            self.distance_km
        );
        for step in &self.steps {
            match step.leg_km {
                Some(leg) => {
                    let _ = writeln!(
                        buffer,
                        "{:>3}: {} (+{:.3} km)",
                        step.index,
                        step.display_name(),
                        leg
                    );
                }
                None => {
                    let _ = writeln!(buffer, "{:>3}: {}", step.index, step.display_name());
                }
            }
        }
        buffer
    }
}

/// Cheapest edge weight between two adjacent steps. On a shortest path the
/// settled leg always uses the cheapest of any parallel edges.
fn cheapest_leg(network: &Network, from: WaypointId, to: WaypointId) -> Option<f64> {
    network
        .outgoing(from)
        .filter(|edge| edge.target == to)
        .map(|edge| edge.weight_km)
        .min_by(|a, b| a.total_cmp(b))
}
