//! Core library modules for butterfly-transit
//!
//! Network storage, route enumeration and ranking, plus the configuration,
//! persistence and name-matching pieces around them.

pub mod config;
pub mod error;
pub mod network;
pub mod planner;
pub mod rank;
pub mod search;
pub mod store;
pub mod suggest;

// Re-export main types for internal use
pub use network::{Connection, Network, Station, StationId, StationInfo};
pub use search::{Route, RouteSet, SearchLimits};
