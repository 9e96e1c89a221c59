use std::collections::HashMap;

use crate::error::{Error, Result};
use crate::geo::{geodesic_weight, Coordinate, LUNAR_RADIUS_KM};

/// Jaro-Winkler score a candidate must reach to be offered as a suggestion.
const SUGGESTION_THRESHOLD: f64 = 0.7;

/// Numeric identifier for a waypoint, issued by the network in declaration
/// order.
pub type WaypointId = u32;

/// Named point of interest in the navigable area.
#[derive(Debug, Clone, PartialEq)]
pub struct Waypoint {
    pub id: WaypointId,
    pub name: String,
    /// Surveyed position, when known. Required for edges whose weight is
    /// derived from the waypoint itself rather than explicit coordinates.
    pub coordinate: Option<Coordinate>,
}

/// Directed connection between two waypoints, weighted in kilometres.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Edge {
    pub source: WaypointId,
    pub target: WaypointId,
    pub weight_km: f64,
}

/// Directed, weighted multigraph of surface waypoints.
///
/// Edges live in an ordered list rather than an adjacency index; at the
/// intended scale (tens of waypoints, low hundreds of edges) the linear
/// scans are cheaper than index upkeep. Parallel edges between the same
/// pair of waypoints are permitted and considered independently.
#[derive(Debug, Clone)]
pub struct Network {
    waypoints: Vec<Waypoint>,
    name_to_id: HashMap<String, WaypointId>,
    edges: Vec<Edge>,
    body_radius_km: f64,
}

impl Network {
    /// Create an empty network on a body of the given radius.
    pub fn new(body_radius_km: f64) -> Self {
        Self {
            waypoints: Vec::new(),
            name_to_id: HashMap::new(),
            edges: Vec::new(),
            body_radius_km,
        }
    }

    /// Create an empty network on the Moon.
    pub fn lunar() -> Self {
        Self::new(LUNAR_RADIUS_KM)
    }

    /// Create a network with the given waypoint names already declared.
    pub fn with_waypoints<I, S>(names: I, body_radius_km: f64) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut network = Self::new(body_radius_km);
        for name in names {
            network.add_waypoint(name)?;
        }
        Ok(network)
    }

    /// Radius of the body this network is laid out on, in kilometres.
    pub fn body_radius_km(&self) -> f64 {
        self.body_radius_km
    }

    /// Declare a waypoint and return its identifier.
    pub fn add_waypoint(&mut self, name: impl Into<String>) -> Result<WaypointId> {
        self.insert_waypoint(name.into(), None)
    }

    /// Declare a waypoint together with its surveyed coordinate.
    pub fn add_surveyed_waypoint(
        &mut self,
        name: impl Into<String>,
        coordinate: Coordinate,
    ) -> Result<WaypointId> {
        self.insert_waypoint(name.into(), Some(coordinate))
    }

    fn insert_waypoint(
        &mut self,
        name: String,
        coordinate: Option<Coordinate>,
    ) -> Result<WaypointId> {
        if self.name_to_id.contains_key(&name) {
            return Err(Error::DuplicateWaypoint { name });
        }
        let id = self.waypoints.len() as WaypointId;
        self.name_to_id.insert(name.clone(), id);
        self.waypoints.push(Waypoint {
            id,
            name,
            coordinate,
        });
        Ok(id)
    }

    /// Number of declared waypoints.
    pub fn waypoint_count(&self) -> usize {
        self.waypoints.len()
    }

    /// Number of edges, counting parallel edges separately.
    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// Whether `id` refers to a declared waypoint.
    pub fn contains(&self, id: WaypointId) -> bool {
        (id as usize) < self.waypoints.len()
    }

    /// Lookup a waypoint by identifier.
    pub fn waypoint(&self, id: WaypointId) -> Option<&Waypoint> {
        self.waypoints.get(id as usize)
    }

    /// Iterate over the declared waypoints in declaration order.
    pub fn waypoints(&self) -> impl Iterator<Item = &Waypoint> + '_ {
        self.waypoints.iter()
    }

    /// Every edge in insertion order.
    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    /// Lookup a waypoint identifier by its case-sensitive name.
    pub fn waypoint_id_by_name(&self, name: &str) -> Option<WaypointId> {
        self.name_to_id.get(name).copied()
    }

    /// Lookup a waypoint name by identifier.
    pub fn waypoint_name(&self, id: WaypointId) -> Option<&str> {
        self.waypoint(id).map(|waypoint| waypoint.name.as_str())
    }

    /// Resolve a waypoint name to its identifier, suggesting near misses on
    /// failure.
    pub fn resolve(&self, name: &str) -> Result<WaypointId> {
        self.waypoint_id_by_name(name)
            .ok_or_else(|| Error::UnknownWaypoint {
                name: name.to_string(),
                suggestions: self.fuzzy_waypoint_matches(name, 3),
            })
    }

    /// Waypoint names similar to `name`, best match first.
    pub fn fuzzy_waypoint_matches(&self, name: &str, limit: usize) -> Vec<String> {
        let needle = name.to_lowercase();
        let mut scored: Vec<(f64, &str)> = self
            .waypoints
            .iter()
            .map(|waypoint| {
                let score = strsim::jaro_winkler(&needle, &waypoint.name.to_lowercase());
                (score, waypoint.name.as_str())
            })
            .filter(|(score, _)| *score >= SUGGESTION_THRESHOLD)
            .collect();
        scored.sort_by(|a, b| b.0.partial_cmp(&a.0).unwrap_or(std::cmp::Ordering::Equal));
        scored
            .into_iter()
            .take(limit)
            .map(|(_, candidate)| candidate.to_string())
            .collect()
    }

    /// Append a raw edge.
    ///
    /// This is the low-level escape hatch; weights with physical meaning
    /// should come through [`Network::add_geodesic_edge`]. Endpoints must be
    /// declared and the weight must be finite and non-negative.
    pub fn add_edge(
        &mut self,
        source: WaypointId,
        target: WaypointId,
        weight_km: f64,
    ) -> Result<()> {
        if !self.contains(source) {
            return Err(Error::UndeclaredEndpoint { id: source });
        }
        if !self.contains(target) {
            return Err(Error::UndeclaredEndpoint { id: target });
        }
        if !weight_km.is_finite() || weight_km < 0.0 {
            return Err(Error::InvalidWeight {
                source_id: source,
                target,
                weight_km,
            });
        }
        self.edges.push(Edge {
            source,
            target,
            weight_km,
        });
        Ok(())
    }

    /// Append an edge whose weight is the great-circle distance between the
    /// two coordinates plus a non-negative hazard penalty.
    pub fn add_geodesic_edge(
        &mut self,
        source: WaypointId,
        target: WaypointId,
        from: Coordinate,
        to: Coordinate,
        extra_km: f64,
    ) -> Result<()> {
        if !extra_km.is_finite() || extra_km < 0.0 {
            return Err(Error::InvalidWeight {
                source_id: source,
                target,
                weight_km: extra_km,
            });
        }
        let weight_km = geodesic_weight(&from, &to, self.body_radius_km, extra_km);
        self.add_edge(source, target, weight_km)
    }

    /// Append a geodesic edge using the surveyed coordinates recorded on the
    /// two endpoints.
    pub fn add_surveyed_edge(
        &mut self,
        source: WaypointId,
        target: WaypointId,
        extra_km: f64,
    ) -> Result<()> {
        let from = self.surveyed_coordinate(source)?;
        let to = self.surveyed_coordinate(target)?;
        self.add_geodesic_edge(source, target, from, to, extra_km)
    }

    fn surveyed_coordinate(&self, id: WaypointId) -> Result<Coordinate> {
        let waypoint = self
            .waypoint(id)
            .ok_or(Error::UndeclaredEndpoint { id })?;
        waypoint
            .coordinate
            .ok_or_else(|| Error::UnsurveyedWaypoint {
                name: waypoint.name.clone(),
            })
    }

    /// Targets reachable from `id` by a single outgoing edge, in
    /// edge-insertion order. Parallel edges appear once per edge.
    pub fn neighbors(&self, id: WaypointId) -> Vec<WaypointId> {
        self.outgoing(id).map(|edge| edge.target).collect()
    }

    /// Outgoing edges of `id` in insertion order.
    pub fn outgoing(&self, id: WaypointId) -> impl Iterator<Item = &Edge> + '_ {
        self.edges.iter().filter(move |edge| edge.source == id)
    }
}
