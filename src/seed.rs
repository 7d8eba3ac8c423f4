//! Built-in Delhi NCR bus network
//!
//! Forty stations across Delhi, Noida, Gurgaon, Ghaziabad and Faridabad with
//! their direct bus connections. Connections are replayed in their listed
//! order; a pair listed twice keeps the later weights.

use crate::core::error::Result;
use crate::core::network::{Connection, Network, StationId, StationInfo};

/// `(id, name, card types, platform, zone)`
const STATIONS: &[(usize, &str, &str, u32, &str)] = &[
    (0, "Connaught Place", "Metro Card, Bus Card", 1, "Central Delhi"),
    (1, "India Gate", "Metro Card, Bus Card", 1, "Central Delhi"),
    (2, "AIIMS", "Metro Card, Bus Card", 2, "South Delhi"),
    (3, "Hauz Khas", "Metro Card, Bus Card", 2, "South Delhi"),
    (4, "Saket", "Metro Card, Bus Card", 1, "South Delhi"),
    (5, "Nehru Place", "Metro Card, Bus Card", 3, "South Delhi"),
    (6, "Kalkaji", "Metro Card, Bus Card", 2, "South Delhi"),
    (7, "Lajpat Nagar", "Metro Card, Bus Card", 2, "South Delhi"),
    (8, "Kashmere Gate", "Metro Card, Bus Card, ISBT Pass", 4, "North Delhi"),
    (9, "Red Fort", "Metro Card, Bus Card", 1, "Old Delhi"),
    (10, "Chandni Chowk", "Metro Card, Bus Card", 2, "Old Delhi"),
    (11, "Civil Lines", "Metro Card, Bus Card", 1, "North Delhi"),
    (12, "Azadpur", "Metro Card, Bus Card", 2, "North Delhi"),
    (13, "Pitampura", "Metro Card, Bus Card", 2, "North West Delhi"),
    (14, "Rohini", "Metro Card, Bus Card", 3, "North West Delhi"),
    (15, "Dwarka", "Metro Card, Bus Card", 3, "South West Delhi"),
    (16, "IGI Airport", "Metro Card, Bus Card, Airport Pass", 4, "South West Delhi"),
    (17, "Rajouri Garden", "Metro Card, Bus Card", 2, "West Delhi"),
    (18, "Janakpuri", "Metro Card, Bus Card", 2, "West Delhi"),
    (19, "Uttam Nagar", "Metro Card, Bus Card", 2, "West Delhi"),
    (20, "Noida Sector 15", "Metro Card, Bus Card", 2, "Noida"),
    (21, "Noida Sector 18", "Metro Card, Bus Card", 3, "Noida"),
    (22, "Noida Sector 62", "Metro Card, Bus Card", 2, "Noida"),
    (23, "Greater Noida", "Metro Card, Bus Card", 3, "Greater Noida"),
    (24, "Vaishali", "Metro Card, Bus Card", 3, "Ghaziabad"),
    (25, "Anand Vihar", "Metro Card, Bus Card, ISBT Pass", 4, "East Delhi"),
    (26, "Preet Vihar", "Metro Card, Bus Card", 2, "East Delhi"),
    (27, "Mayur Vihar", "Metro Card, Bus Card", 2, "East Delhi"),
    (28, "Faridabad", "Metro Card, Bus Card", 3, "Faridabad"),
    (29, "Gurgaon Cyber City", "Metro Card, Bus Card", 4, "Gurgaon"),
    (30, "MG Road Gurgaon", "Metro Card, Bus Card", 2, "Gurgaon"),
    (31, "Sikanderpur", "Metro Card, Bus Card", 2, "Gurgaon"),
    (32, "Botanical Garden", "Metro Card, Bus Card", 3, "Noida"),
    (33, "Karol Bagh", "Metro Card, Bus Card", 2, "Central Delhi"),
    (34, "Shahdara", "Metro Card, Bus Card", 2, "East Delhi"),
    (35, "Mundka", "Metro Card, Bus Card", 2, "West Delhi"),
    (36, "Badarpur", "Metro Card, Bus Card", 2, "South Delhi"),
    (37, "Okhla", "Metro Card, Bus Card", 2, "South Delhi"),
    (38, "Safdarjung", "Metro Card, Bus Card", 1, "South Delhi"),
    (39, "Vasant Vihar", "Metro Card, Bus Card", 1, "South West Delhi"),
];

/// `(from, to, distance km, fare Rs, time min, crowd 0-10)`
const CONNECTIONS: &[(usize, usize, u32, u32, u32, u32)] = &[
    (0, 1, 3, 10, 8, 7),
    (0, 8, 5, 15, 12, 8),
    (0, 33, 2, 8, 5, 9),
    (1, 2, 4, 12, 10, 6),
    (1, 9, 3, 10, 8, 7),
    (2, 3, 3, 10, 8, 7),
    (2, 38, 2, 8, 6, 5),
    (3, 4, 4, 12, 10, 6),
    (3, 5, 5, 15, 12, 7),
    (4, 39, 3, 10, 8, 5),
    (4, 5, 6, 18, 15, 6),
    (5, 6, 3, 10, 8, 8),
    (5, 7, 2, 8, 6, 7),
    (6, 7, 2, 8, 6, 7),
    (6, 36, 5, 15, 12, 6),
    (7, 26, 8, 20, 18, 7),
    (7, 37, 4, 12, 10, 6),
    (8, 9, 2, 8, 6, 9),
    (8, 10, 3, 10, 8, 10),
    (8, 11, 3, 10, 8, 7),
    (9, 10, 1, 5, 4, 9),
    (10, 11, 4, 12, 10, 8),
    (11, 12, 5, 15, 12, 6),
    (12, 13, 6, 18, 15, 7),
    (13, 14, 5, 15, 12, 6),
    (14, 35, 8, 20, 18, 5),
    (15, 16, 4, 12, 10, 7),
    (15, 18, 6, 18, 15, 6),
    (16, 29, 15, 50, 35, 8),
    (17, 18, 3, 10, 8, 7),
    (17, 33, 4, 12, 10, 8),
    (18, 19, 4, 12, 10, 7),
    (18, 15, 6, 18, 15, 6),
    (19, 35, 7, 20, 16, 6),
    (20, 21, 2, 8, 6, 8),
    (20, 32, 5, 15, 12, 7),
    (21, 22, 8, 20, 18, 7),
    (21, 32, 3, 10, 8, 8),
    (22, 23, 12, 30, 25, 6),
    (24, 25, 5, 15, 12, 7),
    (24, 27, 4, 12, 10, 7),
    (25, 26, 3, 10, 8, 9),
    (25, 34, 6, 18, 15, 8),
    (26, 27, 2, 8, 6, 8),
    (27, 32, 7, 20, 16, 7),
    (28, 36, 10, 25, 22, 6),
    (28, 37, 8, 20, 18, 6),
    (29, 30, 4, 12, 10, 8),
    (29, 31, 3, 10, 8, 9),
    (30, 31, 2, 8, 6, 8),
    (31, 15, 8, 20, 18, 7),
    (32, 20, 5, 15, 12, 7),
    (32, 21, 3, 10, 8, 8),
    (33, 17, 4, 12, 10, 8),
    (33, 8, 6, 18, 15, 9),
    (34, 25, 6, 18, 15, 8),
    (34, 10, 8, 20, 18, 8),
    (36, 37, 3, 10, 8, 6),
    (37, 5, 4, 12, 10, 6),
    (38, 39, 4, 12, 10, 5),
    (39, 16, 10, 25, 20, 6),
];

/// Build the Delhi NCR network in a network of the given capacity
pub fn delhi_ncr(capacity: usize) -> Result<Network> {
    let mut network = Network::with_capacity(capacity);

    for &(id, name, card_types, platform, zone) in STATIONS {
        let info = StationInfo {
            card_types: card_types.to_string(),
            platform,
            zone: zone.to_string(),
        };
        network.add_station(StationId(id), name, info)?;
    }

    for &(from, to, distance, fare, time, crowd) in CONNECTIONS {
        network.add_connection(
            StationId(from),
            StationId(to),
            Connection::new(distance, fare, time, crowd),
        )?;
    }

    Ok(network)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::network::DEFAULT_CAPACITY;

    #[test]
    fn test_seed_shape() {
        let network = delhi_ncr(DEFAULT_CAPACITY).unwrap();
        assert_eq!(network.len(), 40);
        assert_eq!(network.connection_count(), 56);

        let stats = network.statistics();
        assert_eq!(stats.average_distance, 4);
        assert_eq!(stats.max_distance, 15);
        assert_eq!(stats.min_distance, 1);
    }

    #[test]
    fn test_every_station_is_connected() {
        let network = delhi_ncr(DEFAULT_CAPACITY).unwrap();
        for station in network.stations() {
            assert!(
                !network.neighbors(station.id).is_empty(),
                "{} has no connections",
                station.name
            );
        }
    }

    #[test]
    fn test_station_metadata() {
        let network = delhi_ncr(DEFAULT_CAPACITY).unwrap();
        let airport = network.station_by_name("igi airport").unwrap();
        let station = network.station(airport).unwrap();
        assert_eq!(station.id, StationId(16));
        assert_eq!(station.info.platform, 4);
        assert_eq!(station.info.zone, "South West Delhi");
        assert!(station.info.card_types.contains("Airport Pass"));
    }

    #[test]
    fn test_too_small_capacity_fails() {
        assert!(delhi_ncr(10).is_err());
    }
}
