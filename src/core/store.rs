//! Binary network snapshots
//!
//! A snapshot is the whole network (stations plus every connection once)
//! encoded with bincode. Loading rebuilds the network through the regular
//! `add_station`/`add_connection` calls, so a corrupt or hand-edited file
//! cannot produce an asymmetric or self-connected network.

use std::fs::File;
use std::io::{BufReader, BufWriter};
use std::path::Path;

use log::info;
use serde::{Deserialize, Serialize};

use crate::core::error::{Error, Result};
use crate::core::network::{Connection, Network, Station, StationId};

/// Default snapshot file name
pub const DEFAULT_NETWORK_FILE: &str = "bus_routes.dat";

const FORMAT_VERSION: u32 = 1;

#[derive(Debug, Serialize, Deserialize)]
struct NetworkSnapshot {
    format_version: u32,
    capacity: u32,
    stations: Vec<Station>,
    connections: Vec<(StationId, StationId, Connection)>,
}

impl NetworkSnapshot {
    fn capture(network: &Network) -> Self {
        Self {
            format_version: FORMAT_VERSION,
            capacity: network.capacity() as u32,
            stations: network.stations().cloned().collect(),
            connections: network
                .connections()
                .map(|(a, b, conn)| (a, b, *conn))
                .collect(),
        }
    }

    fn restore(self, capacity: Option<usize>) -> Result<Network> {
        if self.format_version != FORMAT_VERSION {
            return Err(Error::Persistence(format!(
                "unsupported snapshot version {} (expected {FORMAT_VERSION})",
                self.format_version
            )));
        }

        let capacity = capacity.unwrap_or(self.capacity as usize);
        let mut network = Network::with_capacity(capacity);
        for station in self.stations {
            network.add_station(station.id, &station.name, station.info)?;
        }
        for (a, b, conn) in self.connections {
            network.add_connection(a, b, conn)?;
        }
        Ok(network)
    }
}

/// Encode a network into bytes
pub fn to_bytes(network: &Network) -> Result<Vec<u8>> {
    Ok(bincode::serialize(&NetworkSnapshot::capture(network))?)
}

/// Decode a network from bytes, keeping the capacity it was saved with
/// unless `capacity` overrides it
pub fn from_bytes(bytes: &[u8], capacity: Option<usize>) -> Result<Network> {
    let snapshot: NetworkSnapshot = bincode::deserialize(bytes)?;
    snapshot.restore(capacity)
}

/// Write a network snapshot to `path`, replacing any existing file
pub fn save<P: AsRef<Path>>(network: &Network, path: P) -> Result<()> {
    let path = path.as_ref();
    let writer = BufWriter::new(File::create(path)?);
    bincode::serialize_into(writer, &NetworkSnapshot::capture(network))?;
    info!(
        "Saved {} stations and {} connections to {}",
        network.len(),
        network.connection_count(),
        path.display()
    );
    Ok(())
}

/// Read a network snapshot from `path`
pub fn load<P: AsRef<Path>>(path: P, capacity: Option<usize>) -> Result<Network> {
    let path = path.as_ref();
    let reader = BufReader::new(File::open(path)?);
    let snapshot: NetworkSnapshot = bincode::deserialize_from(reader)?;
    let network = snapshot.restore(capacity)?;
    info!(
        "Loaded {} stations and {} connections from {}",
        network.len(),
        network.connection_count(),
        path.display()
    );
    Ok(network)
}
