//! # Butterfly-transit
//!
//! Finds every simple route between two stations of a small bus network and
//! ranks them by distance, fare and travel time.
//!
//! ```no_run
//! use butterfly_transit::{seed, find_routes_by_name, PlannerConfig};
//!
//! let config = PlannerConfig::default();
//! let network = seed::delhi_ncr(config.capacity)?;
//! let ranked = find_routes_by_name(&network, "Connaught Place", "Saket", &config)?;
//! for route in &ranked.by_fare {
//!     println!("Rs {} via {} stops", route.total_fare(), route.hops());
//! }
//! # Ok::<(), butterfly_transit::Error>(())
//! ```

pub mod core;
pub mod seed;

pub use crate::core::config::PlannerConfig;
pub use crate::core::error::{Error, Result};
pub use crate::core::network::{Connection, Network, NetworkStats, Station, StationId, StationInfo};
pub use crate::core::planner::{find_routes, find_routes_by_name, search_routes, RoutePlanner};
pub use crate::core::rank::{rank, Metric, RankLimits, RankedRoutes};
pub use crate::core::search::{enumerate_routes, Route, RouteSet, SearchLimits};
pub use crate::core::store;
