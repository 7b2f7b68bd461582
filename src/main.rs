use anyhow::Context;
use clap::Parser;
use mapbox_travel_time::{
    sdk::config::MapboxConfig,
    sdk::routing::{RouteLookup, RouteQuery, TravelTimeProvider},
    sdk::util::log::init_logging,
    Coordinate,
};
use serde::Serialize;
use std::time::Duration;

/// Estimate the driving time between two coordinates with the Mapbox Directions API
#[derive(Parser, Debug)]
#[command(version, about, long_about = None, allow_negative_numbers = true)]
struct Cli {
    /// Latitude of the starting point
    #[arg(long)]
    src_lat: f64,

    /// Longitude of the starting point
    #[arg(long)]
    src_lon: f64,

    /// Latitude of the destination
    #[arg(long)]
    dst_lat: f64,

    /// Longitude of the destination
    #[arg(long)]
    dst_lon: f64,

    /// [Optional] Directions endpoint, overrides MAPBOX_API_BASE_URL
    #[arg(long)]
    base_url: Option<String>,

    /// [Optional] Request timeout in seconds, overrides MAPBOX_API_TIMEOUT_SECS
    #[arg(long, value_parser = clap::value_parser!(u64).range(1..))]
    timeout_secs: Option<u64>,

    /// Print the result as JSON
    #[arg(long)]
    json: bool,
}

#[derive(Serialize)]
struct TravelEstimate {
    source: Coordinate,
    destination: Coordinate,
    minutes: f64,
}

fn main() {
    dotenvy::dotenv().ok();
    init_logging();

    if let Err(e) = run(Cli::parse()) {
        log::error!("{e:#}");
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> anyhow::Result<()> {
    let mut config = MapboxConfig::from_env()?;
    if let Some(base_url) = cli.base_url {
        config.base_url = base_url;
    }
    if let Some(secs) = cli.timeout_secs {
        config.timeout = Duration::from_secs(secs);
    }
    log::debug!("Using {:?}", config);

    let lookup = RouteLookup::new(config)?;
    let query = RouteQuery::from_degrees(cli.src_lat, cli.src_lon, cli.dst_lat, cli.dst_lon);

    let minutes = estimate(&lookup, &query)
        .with_context(|| format!("Travel time lookup failed for {}", query.coordinates_path()))?;

    if cli.json {
        let estimate = TravelEstimate {
            source: query.source,
            destination: query.destination,
            minutes,
        };
        println!("{}", serde_json::to_string_pretty(&estimate)?);
    } else {
        println!("{minutes:.2}");
    }
    Ok(())
}

fn estimate(provider: &dyn TravelTimeProvider, query: &RouteQuery) -> anyhow::Result<f64> {
    let minutes = provider.travel_time_minutes(query)?;
    log::info!(
        "Driving time ({:.6}, {:.6}) -> ({:.6}, {:.6}): {:.2} min",
        query.source.lat,
        query.source.lon,
        query.destination.lat,
        query.destination.lon,
        minutes
    );
    Ok(minutes)
}
