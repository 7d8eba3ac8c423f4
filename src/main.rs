//! # Butterfly-transit CLI
//!
//! Command-line interface for the butterfly-transit library.
//! Lists stations, finds and ranks routes, and edits or saves the network.

use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use log::error;

use butterfly_transit::{
    find_routes_by_name, seed, store, Connection, Network, PlannerConfig, RoutePlanner, StationId,
};

mod cli;

/// Command-line interface for butterfly-transit
#[derive(Parser)]
#[command(name = "butterfly-transit")]
#[command(about = "Exhaustive bus route finder for the Delhi NCR network")]
#[command(long_about = "Finds every route between two stations and ranks them:
  butterfly-transit stations                          # List all stations
  butterfly-transit route \"Connaught Place\" Saket     # Routes ranked by distance, fare, time
  butterfly-transit info 8                            # One station and its connections
  butterfly-transit connect 0 2 --distance 5 --fare 15 --time 12 --crowd 6

The built-in network is used unless --network points at a saved one.")]
#[command(version = env!("BUTTERFLY_VERSION"))]
struct Cli {
    /// Saved network file to use instead of the built-in network
    #[arg(long, global = true, value_name = "FILE")]
    network: Option<PathBuf>,

    /// TOML configuration file (defaults to ./butterfly-transit.toml when present)
    #[arg(long, global = true, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// List all stations
    Stations,

    /// Show one station and its direct connections
    Info {
        /// Station ID
        id: usize,
    },

    /// Find every route between two stations and rank them
    Route {
        /// Source station name (case-insensitive)
        from: String,

        /// Destination station name (case-insensitive)
        to: String,

        /// Routes to show ranked by distance
        #[arg(long, value_name = "N")]
        top_distance: Option<usize>,

        /// Routes to show ranked by fare
        #[arg(long, value_name = "N")]
        top_fare: Option<usize>,

        /// Routes to show ranked by time
        #[arg(long, value_name = "N")]
        top_time: Option<usize>,

        /// Maximum connections per route
        #[arg(long, value_name = "N")]
        max_hops: Option<usize>,

        /// Stop searching after this many routes
        #[arg(long, value_name = "N")]
        max_routes: Option<usize>,

        /// Print the rankings as JSON
        #[arg(long)]
        json: bool,
    },

    /// Show the distance matrix of the first stations
    Matrix {
        /// Number of stations to include
        #[arg(long, default_value_t = 10)]
        size: usize,
    },

    /// Add or replace a connection and save the network
    Connect {
        /// First station ID
        from: usize,

        /// Second station ID
        to: usize,

        /// Distance in km
        #[arg(long)]
        distance: u32,

        /// Fare in Rs
        #[arg(long)]
        fare: u32,

        /// Travel time in minutes
        #[arg(long)]
        time: u32,

        /// Crowd level (0-10)
        #[arg(long, default_value_t = 5)]
        crowd: u32,

        /// Where to write the network (defaults to --network, else bus_routes.dat)
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,
    },

    /// Save the network to a file
    Save {
        /// Output file
        #[arg(default_value = store::DEFAULT_NETWORK_FILE)]
        path: PathBuf,
    },

    /// Show network statistics
    Stats,
}

fn main() {
    if let Err(e) = run() {
        error!("❌ Error: {e:#}");
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging to stderr
    let default_filter = if cli.verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter))
        .target(env_logger::Target::Stderr)
        .init();

    if cli.verbose {
        eprintln!("🦋 Butterfly-transit v{} starting...", env!("BUTTERFLY_VERSION"));
    }

    let config = PlannerConfig::resolve(cli.config.as_deref())
        .context("Failed to load configuration")?;
    let network = load_network(cli.network.as_deref(), &config)?;
    let mut planner = RoutePlanner::new(network, config);

    match cli.command {
        Command::Stations => {
            print!("{}", cli::report::stations_table(planner.network()));
        }
        Command::Info { id } => {
            let Some(text) = cli::report::station_details(planner.network(), StationId(id)) else {
                bail!("Invalid station ID {id} (expected 0-{})", planner.network().len().saturating_sub(1));
            };
            print!("{text}");
        }
        Command::Route {
            from,
            to,
            top_distance,
            top_fare,
            top_time,
            max_hops,
            max_routes,
            json,
        } => {
            let mut config = planner.config().clone();
            apply_overrides(&mut config, top_distance, top_fare, top_time, max_hops, max_routes);
            config.validate()?;

            if !json {
                eprintln!("🔍 Searching for routes from {from} to {to}...");
            }
            let ranked = find_routes_by_name(planner.network(), &from, &to, &config)?;

            if json {
                println!("{}", serde_json::to_string_pretty(&ranked)?);
            } else {
                print!("{}", cli::report::ranked_routes(planner.network(), &ranked));
            }
        }
        Command::Matrix { size } => {
            print!("{}", cli::report::distance_matrix(planner.network(), size));
        }
        Command::Connect {
            from,
            to,
            distance,
            fare,
            time,
            crowd,
            output,
        } => {
            let (from, to) = (StationId(from), StationId(to));
            planner
                .network_mut()
                .add_connection(from, to, Connection::new(distance, fare, time, crowd))?;
            eprintln!(
                "✅ Connection added: {} <-> {}",
                planner.network().name_of(from),
                planner.network().name_of(to)
            );
            eprintln!("   Distance: {distance} km, Fare: Rs {fare}, Time: {time} min");

            let path = output
                .or(cli.network)
                .unwrap_or_else(|| PathBuf::from(store::DEFAULT_NETWORK_FILE));
            save_network(planner.network(), &path)?;
        }
        Command::Save { path } => {
            save_network(planner.network(), &path)?;
        }
        Command::Stats => {
            print!("{}", cli::report::statistics(planner.network()));
        }
    }

    Ok(())
}

/// Use the saved network when given, else the built-in one
fn load_network(path: Option<&Path>, config: &PlannerConfig) -> Result<Network> {
    match path {
        Some(path) => store::load(path, None)
            .with_context(|| format!("Failed to load network from {}", path.display())),
        None => seed::delhi_ncr(config.capacity).context("Failed to build the built-in network"),
    }
}

fn save_network(network: &Network, path: &Path) -> Result<()> {
    store::save(network, path)
        .with_context(|| format!("Failed to save network to {}", path.display()))?;
    eprintln!("💾 Network saved to '{}'", path.display());
    Ok(())
}

/// Command-line values win over the configuration file
fn apply_overrides(
    config: &mut PlannerConfig,
    top_distance: Option<usize>,
    top_fare: Option<usize>,
    top_time: Option<usize>,
    max_hops: Option<usize>,
    max_routes: Option<usize>,
) {
    if let Some(n) = top_distance {
        config.ranking.distance = n;
    }
    if let Some(n) = top_fare {
        config.ranking.fare = n;
    }
    if let Some(n) = top_time {
        config.ranking.time = n;
    }
    if let Some(n) = max_hops {
        config.search.max_hops = n;
    }
    if let Some(n) = max_routes {
        config.search.max_routes = n;
    }
}
