use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use tracing_subscriber::{EnvFilter, FmtSubscriber};

use satrelay_lib::{
    build_visibility_graph, load_constellation, plan_route, Error as LibError, RouteRenderMode,
    RouteRequest, RouteSummary,
};

#[derive(Parser, Debug)]
#[command(author, version, about = "Satellite relay routing over a constellation dataset")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Compute the relay route between the dataset's terminals.
    Route {
        /// Constellation dataset file.
        file: PathBuf,

        /// Output format.
        #[arg(long, value_enum, default_value = "hops")]
        format: OutputFormat,
    },
    /// Report visibility graph statistics for a dataset.
    Inspect {
        /// Constellation dataset file.
        file: PathBuf,
    },
}

#[derive(ValueEnum, Clone, Copy, Debug)]
enum OutputFormat {
    /// Comma-joined relay hops only.
    Hops,
    /// Header plus numbered steps.
    Plain,
    /// The full route summary as JSON.
    Json,
}

fn main() -> Result<()> {
    init_tracing();
    let cli = Cli::parse();

    match cli.command {
        Command::Route { file, format } => handle_route(&file, format),
        Command::Inspect { file } => handle_inspect(&file),
    }
}

fn handle_route(file: &Path, format: OutputFormat) -> Result<()> {
    let constellation = load_constellation(file)
        .with_context(|| format!("failed to load constellation from {}", file.display()))?;

    let plan = match plan_route(&constellation, &RouteRequest::terminals()) {
        Ok(plan) => plan,
        Err(LibError::RouteNotFound { .. }) => {
            // a drained frontier is a normal outcome, not a failure
            println!("Path not found!");
            return Ok(());
        }
        Err(err) => return Err(err.into()),
    };

    let summary = RouteSummary::from_plan(&plan)?;
    match format {
        OutputFormat::Hops => println!("{}", summary.render(RouteRenderMode::HopsOnly)),
        OutputFormat::Plain => print!("{}", summary.render(RouteRenderMode::PlainText)),
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&summary)?),
    }

    Ok(())
}

fn handle_inspect(file: &Path) -> Result<()> {
    let constellation = load_constellation(file)
        .with_context(|| format!("failed to load constellation from {}", file.display()))?;
    let graph = build_visibility_graph(&constellation)?;

    println!("Nodes: {}", graph.len());
    println!("Edges: {}", graph.edge_count());

    let mut nodes: Vec<_> = graph.nodes().collect();
    nodes.sort_by(|a, b| a.id.cmp(&b.id));
    for node in nodes {
        println!("- {} ({} visible)", node.id, node.degree());
    }

    Ok(())
}

fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .finish();

    let _ = tracing::subscriber::set_global_default(subscriber);
}
