//! Plain-text rendering for the command-line interface
//!
//! Every function returns the finished text so the binary decides where it
//! goes and tests can inspect it.

use std::fmt::Write;

use butterfly_transit::{Metric, Network, RankedRoutes, Route, StationId};

const RULE: &str = "================================================================================";
const THIN_RULE: &str = "--------------------------------------------------------------------------------";

fn banner(out: &mut String, title: &str) {
    let _ = writeln!(out, "{RULE}");
    let _ = writeln!(out, " {title}");
    let _ = writeln!(out, "{RULE}");
}

/// Table of every station
pub fn stations_table(network: &Network) -> String {
    let mut out = String::new();
    banner(&mut out, "ALL AVAILABLE STATIONS");
    let _ = writeln!(
        out,
        "{:<4} {:<25} {:<34} {:<8} {:<20}",
        "ID", "Station Name", "Card Types", "Platform", "Zone"
    );
    let _ = writeln!(out, "{THIN_RULE}");
    for station in network.stations() {
        let _ = writeln!(
            out,
            "{:<4} {:<25} {:<34} {:<8} {:<20}",
            station.id.0,
            station.name,
            station.info.card_types,
            station.info.platform,
            station.info.zone
        );
    }
    let _ = writeln!(out, "{RULE}");
    out
}

/// One station with its direct connections
pub fn station_details(network: &Network, id: StationId) -> Option<String> {
    let station = network.station(id)?;
    let mut out = String::new();
    banner(&mut out, "STATION INFORMATION");
    let _ = writeln!(out, " Station ID      : {}", station.id.0);
    let _ = writeln!(out, " Station Name    : {}", station.name);
    let _ = writeln!(out, " Card Types      : {}", station.info.card_types);
    let _ = writeln!(out, " Platform Number : {}", station.info.platform);
    let _ = writeln!(out, " Zone            : {}", station.info.zone);
    let _ = writeln!(out, "{RULE}");
    let _ = writeln!(out, " Connected Stations:");
    let _ = writeln!(out, "{THIN_RULE}");

    let mut any = false;
    for (next, conn) in network.links(id) {
        any = true;
        let _ = writeln!(
            out,
            "  -> {} (Distance: {} km, Fare: Rs {}, Time: {} min, Crowd: {}/10)",
            network.name_of(next),
            conn.distance,
            conn.fare,
            conn.time,
            conn.crowd
        );
    }
    if !any {
        let _ = writeln!(out, "  No direct connections available.");
    }
    let _ = writeln!(out, "{RULE}");
    Some(out)
}

/// A single route with its totals
pub fn route_details(network: &Network, route: &Route) -> String {
    let path: Vec<String> = route
        .stations()
        .iter()
        .map(|&id| network.name_of(id))
        .collect();

    let mut out = String::new();
    let _ = writeln!(out, "  Path: {}", path.join(" -> "));
    let _ = writeln!(out, "  Total Distance: {} km", route.total_distance());
    let _ = writeln!(out, "  Total Fare: Rs {}", route.total_fare());
    let _ = writeln!(out, "  Total Time: {} minutes", route.total_time());
    let _ = writeln!(out, "  Average Crowd Level: {}/10", route.avg_crowd());
    let _ = writeln!(out, "  Number of Stops: {}", route.hops());
    out
}

fn metric_label(metric: Metric, route: &Route) -> String {
    match metric {
        Metric::Distance => format!("Distance: {} km", route.total_distance()),
        Metric::Fare => format!("Fare: Rs {}", route.total_fare()),
        Metric::Time => format!("Time: {} minutes", route.total_time()),
    }
}

/// The three rankings of a route query
pub fn ranked_routes(network: &Network, ranked: &RankedRoutes) -> String {
    let mut out = String::new();
    if ranked.limit_reached {
        let _ = writeln!(
            out,
            "Search stopped at the route limit after {} route(s); more routes may exist.",
            ranked.total_found
        );
        if ranked.is_empty() {
            return out;
        }
    } else if ranked.is_empty() {
        let _ = writeln!(out, "No routes found between these stations!");
        return out;
    }

    let _ = writeln!(out, "Found {} possible route(s).", ranked.total_found);

    for metric in Metric::ALL {
        let _ = writeln!(out);
        banner(
            &mut out,
            &format!("ROUTES RANKED BY {}", metric.to_string().to_uppercase()),
        );
        for (i, route) in ranked.view(metric).iter().enumerate() {
            let _ = writeln!(out, "\nRoute #{} ({})", i + 1, metric_label(metric, route));
            let _ = writeln!(out, "{THIN_RULE}");
            out.push_str(&route_details(network, route));
        }
    }
    out
}

/// Distance matrix of the first `size` stations; `--` marks no connection
pub fn distance_matrix(network: &Network, size: usize) -> String {
    let ids: Vec<StationId> = network.stations().map(|s| s.id).take(size).collect();

    let mut out = String::new();
    banner(&mut out, &format!("DISTANCE MATRIX (First {} stations)", ids.len()));
    let _ = write!(out, "     ");
    for id in &ids {
        let _ = write!(out, "{:>4} ", id.0);
    }
    let _ = writeln!(out);

    for &row in &ids {
        let _ = write!(out, "{:>4} ", row.0);
        for &col in &ids {
            if row == col {
                let _ = write!(out, "{:>4} ", 0);
            } else {
                match network.connection(row, col) {
                    Some(conn) => {
                        let _ = write!(out, "{:>4} ", conn.distance);
                    }
                    None => {
                        let _ = write!(out, "{:>4} ", "--");
                    }
                }
            }
        }
        let _ = writeln!(out);
    }
    let _ = writeln!(out, "{RULE}");
    out
}

/// Network-wide statistics
pub fn statistics(network: &Network) -> String {
    let stats = network.statistics();
    let mut card_types: Vec<&str> = network
        .stations()
        .flat_map(|s| s.info.card_types.split(','))
        .map(str::trim)
        .filter(|card| !card.is_empty())
        .collect();
    card_types.sort_unstable();
    card_types.dedup();

    let mut out = String::new();
    banner(&mut out, "SYSTEM STATISTICS");
    let _ = writeln!(out, " Total Stations       : {}", stats.stations);
    let _ = writeln!(out, " Total Connections    : {}", stats.connections);
    let _ = writeln!(out, " Average Distance     : {} km", stats.average_distance);
    let _ = writeln!(out, " Maximum Distance     : {} km", stats.max_distance);
    let _ = writeln!(out, " Minimum Distance     : {} km", stats.min_distance);
    let _ = writeln!(out, " Supported Card Types : {}", card_types.join(", "));
    let _ = writeln!(out, "{RULE}");
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use butterfly_transit::{seed, PlannerConfig, find_routes};

    fn network() -> Network {
        seed::delhi_ncr(PlannerConfig::default().capacity).unwrap()
    }

    #[test]
    fn test_stations_table_lists_everyone() {
        let table = stations_table(&network());
        assert!(table.contains("Connaught Place"));
        assert!(table.contains("Vasant Vihar"));
        assert_eq!(table.lines().filter(|l| l.contains("Metro Card")).count(), 40);
    }

    #[test]
    fn test_station_details() {
        let network = network();
        let text = station_details(&network, StationId(9)).unwrap();
        assert!(text.contains("Red Fort"));
        assert!(text.contains("-> India Gate (Distance: 3 km"));
        assert!(text.contains("-> Chandni Chowk (Distance: 1 km"));
        assert!(station_details(&network, StationId(99)).is_none());
    }

    #[test]
    fn test_ranked_routes_sections() {
        let network = network();
        let ranked = find_routes(&network, StationId(9), StationId(10), &PlannerConfig::default()).unwrap();
        let text = ranked_routes(&network, &ranked);

        assert!(text.contains("ROUTES RANKED BY DISTANCE"));
        assert!(text.contains("ROUTES RANKED BY FARE"));
        assert!(text.contains("ROUTES RANKED BY TIME"));
        assert!(text.contains("Route #1 (Distance: 1 km)"));
        assert!(text.contains("Path: Red Fort -> Chandni Chowk"));
    }

    #[test]
    fn test_empty_ranking() {
        let text = ranked_routes(&network(), &RankedRoutes::default());
        assert!(text.contains("No routes found"));
    }

    #[test]
    fn test_route_limit_is_reported() {
        let network = network();
        let mut config = PlannerConfig::default();
        config.search.max_routes = 2;
        let ranked = find_routes(&network, StationId(9), StationId(10), &config).unwrap();
        let text = ranked_routes(&network, &ranked);
        assert!(text.contains("after 2 route(s); more routes may exist"));
        assert!(text.contains("ROUTES RANKED BY TIME"));

        config.search.max_routes = 0;
        let ranked = find_routes(&network, StationId(9), StationId(10), &config).unwrap();
        let text = ranked_routes(&network, &ranked);
        assert!(text.contains("after 0 route(s); more routes may exist"));
        assert!(!text.contains("No routes found"));
    }

    #[test]
    fn test_distance_matrix_marks_missing_connections() {
        let text = distance_matrix(&network(), 3);
        let grid: Vec<Vec<&str>> = text
            .lines()
            .map(|l| l.split_whitespace().collect::<Vec<_>>())
            .filter(|cells| cells.len() == 4)
            .collect();
        // Row 0: self, India Gate at 3 km, no direct link to AIIMS
        assert_eq!(grid[0], vec!["0", "0", "3", "--"]);
        assert_eq!(grid[1], vec!["1", "3", "0", "4"]);
        assert_eq!(grid[2], vec!["2", "--", "4", "0"]);
    }

    #[test]
    fn test_statistics_card_types() {
        let text = statistics(&network());
        assert!(text.contains("Total Stations       : 40"));
        assert!(text.contains("Airport Pass"));
        assert!(text.contains("ISBT Pass"));
    }
}
