use std::cmp::Ordering;
use std::collections::{BinaryHeap, HashMap, HashSet};

use tracing::debug;

use crate::network::{Network, WaypointId};

/// Result of a single-source shortest-path search.
///
/// Distances and predecessor links are recorded only for waypoints the
/// search reached; everything else is unreachable. Callers branch on
/// [`ShortestPaths::distance`] returning `None` instead of comparing
/// against an infinity sentinel, so unreachable never leaks into
/// arithmetic.
#[derive(Debug, Clone, PartialEq)]
pub struct ShortestPaths {
    source: WaypointId,
    distances: HashMap<WaypointId, f64>,
    predecessors: HashMap<WaypointId, WaypointId>,
}

impl ShortestPaths {
    /// Waypoint the search started from.
    pub fn source(&self) -> WaypointId {
        self.source
    }

    /// Shortest distance from the source in kilometres, or `None` when the
    /// waypoint is unreachable.
    pub fn distance(&self, waypoint: WaypointId) -> Option<f64> {
        self.distances.get(&waypoint).copied()
    }

    /// Immediate predecessor of `waypoint` on its shortest path, or `None`
    /// for the source and for unreachable waypoints.
    pub fn predecessor(&self, waypoint: WaypointId) -> Option<WaypointId> {
        self.predecessors.get(&waypoint).copied()
    }

    /// Whether the search assigned a finite distance to `waypoint`.
    pub fn is_reachable(&self, waypoint: WaypointId) -> bool {
        self.distances.contains_key(&waypoint)
    }

    /// Number of waypoints the search reached, including the source.
    pub fn reached_count(&self) -> usize {
        self.distances.len()
    }
}

/// Run Dijkstra's algorithm from `source` against every declared waypoint.
///
/// Label-setting search over the network's edge list: waypoints are settled
/// in order of increasing tentative distance, and settling stops on its own
/// once the frontier drains, leaving any remaining waypoints unreachable.
/// Correct for the non-negative weights the network enforces at insertion.
/// The network must not be mutated between this call and any reconstruction
/// over the returned maps.
pub fn shortest_paths(network: &Network, source: WaypointId) -> ShortestPaths {
    let mut distances: HashMap<WaypointId, f64> = HashMap::new();
    let mut predecessors: HashMap<WaypointId, WaypointId> = HashMap::new();
    let mut settled: HashSet<WaypointId> = HashSet::new();
    let mut queue = BinaryHeap::new();

    // A source outside the declared waypoint set reaches nothing.
    if network.contains(source) {
        distances.insert(source, 0.0);
        queue.push(QueueEntry::new(source, 0.0));
    }

    while let Some(entry) = queue.pop() {
        if !settled.insert(entry.waypoint) {
            // Stale queue entry left over from an earlier relaxation.
            continue;
        }
        let settled_distance = entry.cost.0;

        for edge in network.outgoing(entry.waypoint) {
            if settled.contains(&edge.target) {
                continue;
            }
            let candidate = settled_distance + edge.weight_km;
            let improved = distances
                .get(&edge.target)
                .map_or(true, |best| candidate < *best);
            if improved {
                distances.insert(edge.target, candidate);
                predecessors.insert(edge.target, entry.waypoint);
                queue.push(QueueEntry::new(edge.target, candidate));
            }
        }
    }

    debug!(
        source,
        reached = distances.len(),
        waypoints = network.waypoint_count(),
        "single-source search settled"
    );

    ShortestPaths {
        source,
        distances,
        predecessors,
    }
}

#[derive(Copy, Clone, Debug, Default)]
struct FloatOrd(f64);

impl PartialEq for FloatOrd {
    fn eq(&self, other: &Self) -> bool {
        self.0.eq(&other.0)
    }
}

impl Eq for FloatOrd {}

impl PartialOrd for FloatOrd {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for FloatOrd {
    fn cmp(&self, other: &Self) -> Ordering {
        self.0.total_cmp(&other.0)
    }
}

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
struct QueueEntry {
    waypoint: WaypointId,
    cost: FloatOrd,
}

impl QueueEntry {
    fn new(waypoint: WaypointId, cost: f64) -> Self {
        Self {
            waypoint,
            cost: FloatOrd(cost),
        }
    }
}

impl Ord for QueueEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reverse ordering so BinaryHeap becomes a min-heap by cost.
        other
            .cost
            .cmp(&self.cost)
            .then_with(|| other.waypoint.cmp(&self.waypoint))
    }
}

impl PartialOrd for QueueEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}
