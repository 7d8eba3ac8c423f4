//! Route queries
//!
//! The entry point used by the CLI: validate the endpoints, enumerate every
//! route, rank the result.

use log::info;

use crate::core::config::PlannerConfig;
use crate::core::error::{Error, Result};
use crate::core::network::{Network, StationId};
use crate::core::rank::RankedRoutes;
use crate::core::search::{enumerate_routes, RouteSet};

/// Check that both endpoints exist and differ
pub fn validate_endpoints(network: &Network, source: StationId, dest: StationId) -> Result<()> {
    network.require_station(source)?;
    network.require_station(dest)?;
    if source == dest {
        return Err(Error::SameEndpoint(source));
    }
    Ok(())
}

/// Every route between two stations, unranked
pub fn search_routes(
    network: &Network,
    source: StationId,
    dest: StationId,
    config: &PlannerConfig,
) -> Result<RouteSet> {
    validate_endpoints(network, source, dest)?;
    Ok(enumerate_routes(network, source, dest, &config.search))
}

/// Every route between two stations, ranked by distance, fare and time
pub fn find_routes(
    network: &Network,
    source: StationId,
    dest: StationId,
    config: &PlannerConfig,
) -> Result<RankedRoutes> {
    let set = search_routes(network, source, dest, config)?;
    info!(
        "Found {} route(s) from {} to {}",
        set.len(),
        network.name_of(source),
        network.name_of(dest)
    );
    Ok(RankedRoutes::from_set(&set, &config.ranking))
}

/// [`find_routes`] with endpoints given by station name
pub fn find_routes_by_name(
    network: &Network,
    from: &str,
    to: &str,
    config: &PlannerConfig,
) -> Result<RankedRoutes> {
    let source = network.station_by_name(from)?;
    let dest = network.station_by_name(to)?;
    find_routes(network, source, dest, config)
}

/// A network paired with the configuration its queries run under
#[derive(Debug, Clone)]
pub struct RoutePlanner {
    network: Network,
    config: PlannerConfig,
}

impl RoutePlanner {
    pub fn new(network: Network, config: PlannerConfig) -> Self {
        Self { network, config }
    }

    pub fn network(&self) -> &Network {
        &self.network
    }

    /// Mutable access for edits between queries
    pub fn network_mut(&mut self) -> &mut Network {
        &mut self.network
    }

    pub fn config(&self) -> &PlannerConfig {
        &self.config
    }

    pub fn find_routes(&self, source: StationId, dest: StationId) -> Result<RankedRoutes> {
        find_routes(&self.network, source, dest, &self.config)
    }

    pub fn find_routes_by_name(&self, from: &str, to: &str) -> Result<RankedRoutes> {
        find_routes_by_name(&self.network, from, to, &self.config)
    }
}
