//! Error types for butterfly-transit library
//!
//! Every failure here is local and synchronous: validation problems are
//! reported before any search work begins, and nothing is retried.

use thiserror::Error;

use crate::core::network::StationId;

/// Main error type for butterfly-transit operations
#[derive(Debug, Error)]
pub enum Error {
    /// Station id not present in the network
    #[error("Station {0} does not exist")]
    InvalidStation(StationId),

    /// Station name not present in the network
    #[error("Station '{name}' not found{}", suggestion_hint(.suggestion))]
    StationNotFound {
        name: String,
        suggestion: Option<String>,
    },

    /// Attempted re-registration of an existing station id
    #[error("Station {0} is already registered")]
    DuplicateStation(StationId),

    /// Attempted registration of a name already used (case-insensitive)
    #[error("A station named '{0}' is already registered")]
    DuplicateStationName(String),

    /// The network already holds its maximum number of stations
    #[error("Network is full ({capacity} stations)")]
    NetworkFull { capacity: usize },

    /// A connection from a station to itself
    #[error("Station {0} cannot be connected to itself")]
    SelfConnection(StationId),

    /// Connection weights that cannot be traversed
    #[error("Invalid connection {from} <-> {to}: {reason}")]
    InvalidConnection {
        from: StationId,
        to: StationId,
        reason: String,
    },

    /// Source and destination are the same station
    #[error("Source and destination cannot be the same station ({0})")]
    SameEndpoint(StationId),

    /// A station sequence that is not a simple connected route
    #[error("Invalid route: {0}")]
    InvalidRoute(String),

    /// File I/O error
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),

    /// Snapshot encoding or decoding failure
    #[error("Persistence error: {0}")]
    Persistence(String),

    /// Invalid configuration file or parameters
    #[error("Configuration error: {0}")]
    Config(String),
}

fn suggestion_hint(suggestion: &Option<String>) -> String {
    match suggestion {
        Some(name) => format!(" (did you mean '{name}'?)"),
        None => String::new(),
    }
}

impl From<bincode::Error> for Error {
    fn from(err: bincode::Error) -> Self {
        Error::Persistence(err.to_string())
    }
}

impl From<toml::de::Error> for Error {
    fn from(err: toml::de::Error) -> Self {
        Error::Config(err.to_string())
    }
}

/// Convenience result type for butterfly-transit operations
pub type Result<T> = std::result::Result<T, Error>;
