use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use serde_json::json;
use tracing_subscriber::{EnvFilter, FmtSubscriber};

use selene_lib::{
    distance_lines, load_network, path_lines, plan_traverse, reconstruct_route, shortest_paths,
    Network, TraverseSummary,
};

#[derive(Parser, Debug)]
#[command(author, version, about = "Lunar traverse planning utilities")]
struct Cli {
    /// Path to the survey file describing waypoints and connections.
    #[arg(long)]
    network: PathBuf,

    /// Emit machine-readable JSON instead of text.
    #[arg(long)]
    json: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Compute the cheapest traverse between two waypoint names.
    Route {
        /// Starting waypoint name.
        #[arg(long = "from")]
        from: String,
        /// Destination waypoint name.
        #[arg(long = "to")]
        to: String,
    },
    /// Report distances and paths from a source waypoint to every other.
    Survey {
        /// Source waypoint name.
        #[arg(long = "source")]
        source: String,
    },
}

fn main() -> Result<()> {
    init_tracing();
    let cli = Cli::parse();

    let network = load_survey(&cli.network)?;

    match cli.command {
        Command::Route { from, to } => handle_route(&network, &from, &to, cli.json),
        Command::Survey { source } => handle_survey(&network, &source, cli.json),
    }
}

fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(env_filter)
        .finish();

    let _ = tracing::subscriber::set_global_default(subscriber);
}

fn load_survey(path: &Path) -> Result<Network> {
    load_network(path)
        .with_context(|| format!("failed to load survey network from {}", path.display()))
}

fn handle_route(network: &Network, from: &str, to: &str, json: bool) -> Result<()> {
    let plan = plan_traverse(network, from, to)
        .with_context(|| format!("failed to plan a traverse from {from} to {to}"))?;
    let summary = TraverseSummary::from_plan(network, &plan)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&summary)?);
    } else {
        print!("{}", summary.render());
    }
    Ok(())
}

fn handle_survey(network: &Network, source: &str, json: bool) -> Result<()> {
    let source_id = network
        .resolve(source)
        .with_context(|| format!("failed to resolve survey source {source}"))?;
    let paths = shortest_paths(network, source_id);

    if json {
        let report: Vec<_> = network
            .waypoints()
            .map(|waypoint| {
                let route = reconstruct_route(&paths, waypoint.id).map(|steps| {
                    steps
                        .iter()
                        .filter_map(|id| network.waypoint_name(*id))
                        .collect::<Vec<_>>()
                });
                json!({
                    "name": waypoint.name,
                    "distance_km": paths.distance(waypoint.id),
                    "path": route,
                })
            })
            .collect();
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        for line in distance_lines(network, &paths) {
            println!("{line}");
        }
        for line in path_lines(network, &paths) {
            println!("{line}");
        }
    }
    Ok(())
}
