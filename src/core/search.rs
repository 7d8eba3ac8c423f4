//! Exhaustive route enumeration
//!
//! Depth-first backtracking over the network, collecting every simple route
//! between two stations. The search is bounded only by structure: a maximum
//! number of hops per route and a maximum number of routes overall. There is
//! no cost-based pruning.

use std::collections::HashSet;

use log::{debug, warn};
use serde::{Deserialize, Serialize};

use crate::core::error::{Error, Result};
use crate::core::network::{Connection, Network, StationId};

/// Default maximum hops per route (a route visits at most 20 stations)
pub const DEFAULT_MAX_HOPS: usize = 19;

/// Default maximum number of routes collected by one search
pub const DEFAULT_MAX_ROUTES: usize = 1000;

/// Structural bounds of a search
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchLimits {
    /// Maximum number of connections in a single route
    pub max_hops: usize,
    /// Maximum number of routes collected before the search stops
    pub max_routes: usize,
}

impl Default for SearchLimits {
    fn default() -> Self {
        Self {
            max_hops: DEFAULT_MAX_HOPS,
            max_routes: DEFAULT_MAX_ROUTES,
        }
    }
}

/// Running sums along a partial route, widened so no route can overflow
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
struct Totals {
    distance: u64,
    fare: u64,
    time: u64,
    crowd: u64,
}

impl Totals {
    fn add(self, connection: &Connection) -> Self {
        Self {
            distance: self.distance + u64::from(connection.distance),
            fare: self.fare + u64::from(connection.fare),
            time: self.time + u64::from(connection.time),
            crowd: self.crowd + u64::from(connection.crowd),
        }
    }
}

/// A simple route through the network with its accumulated costs.
///
/// Routes are immutable once built.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Route {
    stations: Vec<StationId>,
    total_distance: u64,
    total_fare: u64,
    total_time: u64,
    avg_crowd: u32,
}

impl Route {
    fn from_totals(stations: Vec<StationId>, totals: Totals) -> Self {
        let hops = stations.len().saturating_sub(1) as u64;
        // A mean of u32 values always fits back into u32
        let avg_crowd = if hops > 0 {
            u32::try_from(totals.crowd / hops).unwrap_or(u32::MAX)
        } else {
            0
        };
        Self {
            stations,
            total_distance: totals.distance,
            total_fare: totals.fare,
            total_time: totals.time,
            avg_crowd,
        }
    }

    /// Build a route from an explicit station sequence, summing the
    /// connection weights along it.
    ///
    /// Fails when the sequence is empty, names an unknown station, repeats a
    /// station, or has a consecutive pair without a direct connection.
    pub fn measure(network: &Network, stations: &[StationId]) -> Result<Self> {
        if stations.is_empty() {
            return Err(Error::InvalidRoute("a route needs at least one station".to_string()));
        }

        let mut seen = HashSet::new();
        for &id in stations {
            network.require_station(id)?;
            if !seen.insert(id) {
                return Err(Error::InvalidRoute(format!("station {id} appears twice")));
            }
        }

        let mut totals = Totals::default();
        for pair in stations.windows(2) {
            let connection = network.connection(pair[0], pair[1]).ok_or_else(|| {
                Error::InvalidRoute(format!("no connection between {} and {}", pair[0], pair[1]))
            })?;
            totals = totals.add(connection);
        }

        Ok(Self::from_totals(stations.to_vec(), totals))
    }

    /// Stations in travel order
    pub fn stations(&self) -> &[StationId] {
        &self.stations
    }

    pub fn origin(&self) -> StationId {
        self.stations[0]
    }

    pub fn destination(&self) -> StationId {
        self.stations[self.stations.len() - 1]
    }

    /// Number of connections travelled
    pub fn hops(&self) -> usize {
        self.stations.len() - 1
    }

    pub fn total_distance(&self) -> u64 {
        self.total_distance
    }

    pub fn total_fare(&self) -> u64 {
        self.total_fare
    }

    pub fn total_time(&self) -> u64 {
        self.total_time
    }

    /// Crowd sum divided by hop count, truncated
    pub fn avg_crowd(&self) -> u32 {
        self.avg_crowd
    }
}

/// Routes found by one search, in discovery order
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct RouteSet {
    pub routes: Vec<Route>,
    /// The route-count bound stopped the search; more routes may exist
    pub limit_reached: bool,
}

impl RouteSet {
    pub fn len(&self) -> usize {
        self.routes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.routes.is_empty()
    }
}

/// One level of the depth-first search
struct Frame {
    links: Vec<(StationId, Connection)>,
    cursor: usize,
    totals: Totals,
}

impl Frame {
    fn new(network: &Network, station: StationId, totals: Totals) -> Self {
        Self {
            links: network.links(station).map(|(next, conn)| (next, *conn)).collect(),
            cursor: 0,
            totals,
        }
    }

    /// Advance to the next neighbour not already on the route
    fn next_unvisited(&mut self, on_route: &HashSet<StationId>) -> Option<(StationId, Connection)> {
        while let Some(&(next, conn)) = self.links.get(self.cursor) {
            self.cursor += 1;
            if !on_route.contains(&next) {
                return Some((next, conn));
            }
        }
        None
    }
}

/// Enumerate every simple route from `source` to `dest`.
///
/// Neighbours are explored in ascending id order, so the result order is
/// deterministic for a given network and limits. Callers validate the
/// endpoints first: both must exist and differ.
pub fn enumerate_routes(
    network: &Network,
    source: StationId,
    dest: StationId,
    limits: &SearchLimits,
) -> RouteSet {
    let mut found = RouteSet::default();
    if limits.max_routes == 0 {
        found.limit_reached = true;
        return found;
    }

    let mut trail = vec![source];
    let mut on_route = HashSet::from([source]);
    let mut stack = vec![Frame::new(network, source, Totals::default())];
    let mut expanded = 0usize;

    while let Some(frame) = stack.last_mut() {
        let hops = trail.len() - 1;
        let next = if hops < limits.max_hops {
            frame.next_unvisited(&on_route)
        } else {
            None
        };

        let Some((next, connection)) = next else {
            // Exhausted: backtrack
            stack.pop();
            if let Some(station) = trail.pop() {
                on_route.remove(&station);
            }
            continue;
        };

        let totals = frame.totals.add(&connection);
        if next == dest {
            let mut stations = trail.clone();
            stations.push(dest);
            found.routes.push(Route::from_totals(stations, totals));

            if found.routes.len() >= limits.max_routes {
                found.limit_reached = true;
                break;
            }
            continue;
        }

        expanded += 1;
        trail.push(next);
        on_route.insert(next);
        stack.push(Frame::new(network, next, totals));
    }

    debug!(
        "Search {source} -> {dest}: {} route(s), {expanded} expansion(s)",
        found.routes.len()
    );
    if found.limit_reached {
        warn!(
            "Route search stopped after {} routes; more may exist",
            limits.max_routes
        );
    }

    found
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::network::StationInfo;

    fn network(n: usize, edges: &[(usize, usize, Connection)]) -> Network {
        let mut network = Network::new();
        for id in 0..n {
            network
                .add_station(StationId(id), &format!("S{id}"), StationInfo::default())
                .unwrap();
        }
        for &(a, b, conn) in edges {
            network.add_connection(StationId(a), StationId(b), conn).unwrap();
        }
        network
    }

    fn ids(route: &Route) -> Vec<usize> {
        route.stations().iter().map(|s| s.0).collect()
    }

    /// Complete graph on `n` stations with unit weights
    fn complete(n: usize) -> Network {
        let mut edges = Vec::new();
        for a in 0..n {
            for b in (a + 1)..n {
                edges.push((a, b, Connection::new(1, 1, 1, 1)));
            }
        }
        network(n, &edges)
    }

    #[test]
    fn test_single_chain() {
        let net = network(
            3,
            &[
                (0, 1, Connection::new(3, 10, 8, 7)),
                (1, 2, Connection::new(4, 12, 10, 6)),
            ],
        );
        let set = enumerate_routes(&net, StationId(0), StationId(2), &SearchLimits::default());

        assert_eq!(set.len(), 1);
        assert!(!set.limit_reached);
        let route = &set.routes[0];
        assert_eq!(ids(route), vec![0, 1, 2]);
        assert_eq!(route.total_distance(), 7);
        assert_eq!(route.total_fare(), 22);
        assert_eq!(route.total_time(), 18);
        assert_eq!(route.avg_crowd(), 6);
        assert_eq!(route.hops(), 2);
    }

    #[test]
    fn test_isolated_source_yields_nothing() {
        let net = network(3, &[(1, 2, Connection::new(1, 1, 1, 1))]);
        let set = enumerate_routes(&net, StationId(0), StationId(2), &SearchLimits::default());
        assert!(set.is_empty());
        assert!(!set.limit_reached);
    }

    #[test]
    fn test_discovery_order_follows_ascending_ids() {
        // 0-1, 0-2, 1-3, 2-3, 1-2
        let unit = Connection::new(1, 1, 1, 1);
        let net = network(4, &[(0, 1, unit), (0, 2, unit), (1, 3, unit), (2, 3, unit), (1, 2, unit)]);
        let set = enumerate_routes(&net, StationId(0), StationId(3), &SearchLimits::default());

        let all: Vec<Vec<usize>> = set.routes.iter().map(ids).collect();
        assert_eq!(
            all,
            vec![vec![0, 1, 2, 3], vec![0, 1, 3], vec![0, 2, 1, 3], vec![0, 2, 3]]
        );
    }

    #[test]
    fn test_complete_graph_route_count() {
        // Simple paths between two fixed vertices of K5: 1 + 3 + 6 + 6 = 16
        let net = complete(5);
        let set = enumerate_routes(&net, StationId(0), StationId(4), &SearchLimits::default());
        assert_eq!(set.len(), 16);

        for route in &set.routes {
            let unique: HashSet<_> = route.stations().iter().collect();
            assert_eq!(unique.len(), route.stations().len());
            assert_eq!(route.origin(), StationId(0));
            assert_eq!(route.destination(), StationId(4));
        }
    }

    #[test]
    fn test_hop_bound_prunes_long_routes() {
        let net = complete(5);
        let limits = SearchLimits {
            max_hops: 2,
            ..SearchLimits::default()
        };
        let set = enumerate_routes(&net, StationId(0), StationId(4), &limits);

        // direct + three single-intermediate routes
        assert_eq!(set.len(), 4);
        assert!(set.routes.iter().all(|r| r.hops() <= 2));
    }

    #[test]
    fn test_hop_bound_of_one_allows_only_direct() {
        let net = complete(4);
        let limits = SearchLimits {
            max_hops: 1,
            ..SearchLimits::default()
        };
        let set = enumerate_routes(&net, StationId(0), StationId(3), &limits);
        assert_eq!(set.len(), 1);
        assert_eq!(ids(&set.routes[0]), vec![0, 3]);
    }

    #[test]
    fn test_route_bound_stops_search_cleanly() {
        let net = complete(6);
        let limits = SearchLimits {
            max_routes: 5,
            ..SearchLimits::default()
        };
        let full = enumerate_routes(&net, StationId(0), StationId(5), &SearchLimits::default());
        let capped = enumerate_routes(&net, StationId(0), StationId(5), &limits);

        assert_eq!(capped.len(), 5);
        assert!(capped.limit_reached);
        assert!(!full.limit_reached);
        // The capped set is exactly the first routes of the full search
        assert_eq!(&full.routes[..5], &capped.routes[..]);
    }

    #[test]
    fn test_zero_route_bound() {
        let net = complete(3);
        let limits = SearchLimits {
            max_routes: 0,
            ..SearchLimits::default()
        };
        let set = enumerate_routes(&net, StationId(0), StationId(2), &limits);
        assert!(set.is_empty());
        assert!(set.limit_reached);
    }

    #[test]
    fn test_enumeration_is_deterministic() {
        let net = complete(6);
        let first = enumerate_routes(&net, StationId(1), StationId(4), &SearchLimits::default());
        let second = enumerate_routes(&net, StationId(1), StationId(4), &SearchLimits::default());
        assert_eq!(first, second);
    }

    #[test]
    fn test_measure_matches_enumerated_totals() {
        let net = network(
            4,
            &[
                (0, 1, Connection::new(2, 8, 6, 9)),
                (1, 2, Connection::new(3, 10, 8, 4)),
                (2, 3, Connection::new(5, 15, 12, 6)),
                (0, 3, Connection::new(20, 50, 35, 8)),
            ],
        );
        let set = enumerate_routes(&net, StationId(0), StationId(3), &SearchLimits::default());
        for route in &set.routes {
            let measured = Route::measure(&net, route.stations()).unwrap();
            assert_eq!(&measured, route);
        }

        let long = Route::measure(&net, &[StationId(0), StationId(1), StationId(2), StationId(3)]).unwrap();
        assert_eq!(long.total_distance(), 10);
        assert_eq!(long.total_fare(), 33);
        assert_eq!(long.total_time(), 26);
        assert_eq!(long.avg_crowd(), 19 / 3);
    }

    #[test]
    fn test_measure_rejects_broken_routes() {
        let net = network(3, &[(0, 1, Connection::new(1, 1, 1, 1))]);
        assert!(Route::measure(&net, &[]).is_err());
        assert!(Route::measure(&net, &[StationId(0), StationId(2)]).is_err());
        assert!(Route::measure(&net, &[StationId(0), StationId(1), StationId(0)]).is_err());
        assert!(matches!(
            Route::measure(&net, &[StationId(0), StationId(7)]),
            Err(Error::InvalidStation(StationId(7)))
        ));

        let single = Route::measure(&net, &[StationId(2)]).unwrap();
        assert_eq!(single.hops(), 0);
        assert_eq!(single.avg_crowd(), 0);
        assert_eq!(single.total_distance(), 0);
    }

    #[test]
    fn test_large_weights_do_not_wrap() {
        let max = u32::MAX;
        let net = network(
            3,
            &[
                (0, 1, Connection::new(max, max, max, max)),
                (1, 2, Connection::new(1, max, 2, max)),
                (0, 2, Connection::new(5, 5, 5, 5)),
            ],
        );
        let set = enumerate_routes(&net, StationId(0), StationId(2), &SearchLimits::default());
        assert_eq!(set.len(), 2);

        let long = &set.routes[0];
        assert_eq!(ids(long), vec![0, 1, 2]);
        assert_eq!(long.total_distance(), u64::from(max) + 1);
        assert_eq!(long.total_fare(), 2 * u64::from(max));
        assert_eq!(long.total_time(), u64::from(max) + 2);
        assert_eq!(long.avg_crowd(), max);
        assert_eq!(Route::measure(&net, long.stations()).unwrap(), *long);

        let ranked = crate::core::rank::rank(&set.routes, crate::core::rank::Metric::Distance, 1);
        assert_eq!(ids(ranked[0]), vec![0, 2]);
    }
}
