use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::{error, info};
use tracing_subscriber::{fmt, EnvFilter};

use skyroute_core::{plan_route, HexMap};

#[derive(Parser, Debug)]
#[command(name = "skyroute", version, about = "Plan a drone route over a hex-grid map")]
struct Args {
    /// Path to the map description file
    #[arg(value_name = "MAP")]
    map: PathBuf,
}

fn run(args: &Args) -> Result<String> {
    let mut map = HexMap::load(&args.map)
        .with_context(|| format!("failed to load map {:?}", args.map))?;
    info!(cells = map.num_cells(), "map loaded");

    let route = plan_route(&mut map).context("route search failed")?;
    Ok(match route.reported_length {
        Some(len) => format!("Destination reached via path of length {len}."),
        None => "Destination not reached.".to_string(),
    })
}

fn main() -> ExitCode {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    fmt().with_env_filter(filter).init();

    let args = Args::parse();
    info!(core_version = %skyroute_core::version(), map = ?args.map, "starting skyroute");

    match run(&args) {
        Ok(report) => {
            println!("{report}");
            ExitCode::SUCCESS
        }
        Err(e) => {
            error!(error = ?e, "route planning failed");
            eprintln!("Unable to compute a route: {e:#}");
            ExitCode::FAILURE
        }
    }
}
