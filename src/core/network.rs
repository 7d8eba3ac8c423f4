//! Station network storage
//!
//! Holds the stations and the symmetric connections between them. A pair of
//! stations has at most one connection, carrying four independent weights.

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::core::error::{Error, Result};
use crate::core::suggest::suggest_station;

/// Maximum number of stations a network holds unless configured otherwise
pub const DEFAULT_CAPACITY: usize = 40;

/// Identifier of a station inside a [`Network`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StationId(pub usize);

impl fmt::Display for StationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Descriptive station metadata, not interpreted by route search
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StationInfo {
    pub card_types: String,
    pub platform: u32,
    pub zone: String,
}

/// A registered station
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Station {
    pub id: StationId,
    pub name: String,
    pub info: StationInfo,
}

/// Weights of a direct connection between two stations
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Connection {
    /// Kilometres
    pub distance: u32,
    /// Rupees
    pub fare: u32,
    /// Minutes
    pub time: u32,
    /// Crowd level, 0-10 by convention
    pub crowd: u32,
}

impl Connection {
    pub fn new(distance: u32, fare: u32, time: u32, crowd: u32) -> Self {
        Self {
            distance,
            fare,
            time,
            crowd,
        }
    }
}

/// Aggregate figures over all connections of a network
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct NetworkStats {
    pub stations: usize,
    pub connections: usize,
    pub average_distance: u32,
    pub max_distance: u32,
    pub min_distance: u32,
}

/// Stations and their symmetric connections.
///
/// Both directions of every connection are stored, and every write updates
/// both, so `connection(a, b) == connection(b, a)` always holds.
#[derive(Debug, Clone)]
pub struct Network {
    capacity: usize,
    stations: BTreeMap<StationId, Station>,
    adjacency: BTreeMap<StationId, BTreeMap<StationId, Connection>>,
}

impl Default for Network {
    fn default() -> Self {
        Self::new()
    }
}

impl Network {
    /// Create an empty network with the default capacity
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_CAPACITY)
    }

    /// Create an empty network holding at most `capacity` stations
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            capacity,
            stations: BTreeMap::new(),
            adjacency: BTreeMap::new(),
        }
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Number of registered stations
    pub fn len(&self) -> usize {
        self.stations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stations.is_empty()
    }

    /// Register a station. The network is left unchanged on error.
    ///
    /// Surrounding whitespace is stripped from `name`, the same way lookups
    /// strip it.
    pub fn add_station(&mut self, id: StationId, name: &str, info: StationInfo) -> Result<()> {
        let name = name.trim();
        if self.stations.contains_key(&id) {
            return Err(Error::DuplicateStation(id));
        }
        if self.find_by_name(name).is_some() {
            return Err(Error::DuplicateStationName(name.to_string()));
        }
        if self.stations.len() >= self.capacity {
            return Err(Error::NetworkFull {
                capacity: self.capacity,
            });
        }

        self.stations.insert(
            id,
            Station {
                id,
                name: name.to_string(),
                info,
            },
        );
        self.adjacency.entry(id).or_default();
        Ok(())
    }

    /// Connect two stations in both directions, replacing any previous
    /// connection between the same pair.
    pub fn add_connection(&mut self, a: StationId, b: StationId, connection: Connection) -> Result<()> {
        if a == b {
            return Err(Error::SelfConnection(a));
        }
        self.require_station(a)?;
        self.require_station(b)?;
        if connection.distance == 0 {
            return Err(Error::InvalidConnection {
                from: a,
                to: b,
                reason: "distance must be greater than zero".to_string(),
            });
        }

        self.adjacency.entry(a).or_default().insert(b, connection);
        self.adjacency.entry(b).or_default().insert(a, connection);
        Ok(())
    }

    /// True when `a` and `b` are distinct and directly connected
    pub fn has_connection(&self, a: StationId, b: StationId) -> bool {
        self.connection(a, b).is_some()
    }

    /// Weights of the direct connection between `a` and `b`, if any
    pub fn connection(&self, a: StationId, b: StationId) -> Option<&Connection> {
        if a == b {
            return None;
        }
        self.adjacency.get(&a).and_then(|links| links.get(&b))
    }

    /// Stations directly reachable from `id`, in ascending id order
    pub fn neighbors(&self, id: StationId) -> Vec<StationId> {
        self.links(id).map(|(next, _)| next).collect()
    }

    /// Direct connections leaving `id`, in ascending id order of the far end
    pub fn links(&self, id: StationId) -> impl Iterator<Item = (StationId, &Connection)> + '_ {
        self.adjacency
            .get(&id)
            .into_iter()
            .flat_map(|links| links.iter().map(|(next, conn)| (*next, conn)))
    }

    /// Every connection once, as `(lower id, higher id, weights)`
    pub fn connections(&self) -> impl Iterator<Item = (StationId, StationId, &Connection)> + '_ {
        self.adjacency.iter().flat_map(|(from, links)| {
            links
                .iter()
                .filter(move |(to, _)| *to > from)
                .map(move |(to, conn)| (*from, *to, conn))
        })
    }

    pub fn connection_count(&self) -> usize {
        self.connections().count()
    }

    pub fn station(&self, id: StationId) -> Option<&Station> {
        self.stations.get(&id)
    }

    /// All stations in ascending id order
    pub fn stations(&self) -> impl Iterator<Item = &Station> + '_ {
        self.stations.values()
    }

    pub fn contains(&self, id: StationId) -> bool {
        self.stations.contains_key(&id)
    }

    /// Fail with [`Error::InvalidStation`] unless `id` is registered
    pub fn require_station(&self, id: StationId) -> Result<&Station> {
        self.station(id).ok_or(Error::InvalidStation(id))
    }

    /// Look up a station by name, ignoring case.
    ///
    /// Unknown names carry the closest registered name as a suggestion.
    pub fn station_by_name(&self, name: &str) -> Result<StationId> {
        let wanted = name.trim();
        self.find_by_name(wanted).ok_or_else(|| {
            let names: Vec<String> = self.stations.values().map(|s| s.name.clone()).collect();
            Error::StationNotFound {
                name: wanted.to_string(),
                suggestion: suggest_station(wanted, &names),
            }
        })
    }

    fn find_by_name(&self, name: &str) -> Option<StationId> {
        let wanted = name.trim().to_lowercase();
        self.stations
            .values()
            .find(|s| s.name.to_lowercase() == wanted)
            .map(|s| s.id)
    }

    /// Display name of a station, or its id when unknown
    pub fn name_of(&self, id: StationId) -> String {
        self.station(id)
            .map(|s| s.name.clone())
            .unwrap_or_else(|| id.to_string())
    }

    /// Count, average, longest and shortest connection distances
    pub fn statistics(&self) -> NetworkStats {
        let distances: Vec<u32> = self.connections().map(|(_, _, c)| c.distance).collect();
        let total: u64 = distances.iter().map(|&d| u64::from(d)).sum();
        let average_distance = if distances.is_empty() {
            0
        } else {
            (total / distances.len() as u64) as u32
        };

        NetworkStats {
            stations: self.stations.len(),
            connections: distances.len(),
            average_distance,
            max_distance: distances.iter().copied().max().unwrap_or(0),
            min_distance: distances.iter().copied().min().unwrap_or(0),
        }
    }
}
