//! pedigree-layout CLI entry point.

use std::fs;
use std::io::{self, Read, Write};
use std::process;

use clap::{Parser, Subcommand};
use serde::Serialize;
use tracing::level_filters::LevelFilter;

use pedigree_layout::{
    Connector, Layout, LayoutConfig, Snapshot, compute_layout_with_config, route_connectors,
    search_persons, validate,
};

/// Generation layout and consistency checks for pedigree snapshots.
#[derive(Parser, Debug)]
#[command(
    name = "pedigree-layout",
    version = env!("PEDIGREE_LAYOUT_VERSION"),
    about = "Generation layout and consistency checks for pedigree snapshots"
)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Write output to this file instead of stdout
    #[arg(short = 'o', long = "output", global = true)]
    output: Option<String>,

    /// Pretty-print JSON output
    #[arg(long, global = true)]
    pretty: bool,

    /// Increase log verbosity on stderr (-v info, -vv debug, -vvv trace)
    #[arg(short = 'v', long = "verbose", action = clap::ArgAction::Count, global = true)]
    verbose: u8,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Compute node levels and positions
    Layout {
        /// Snapshot JSON file (reads from stdin if not provided)
        input: Option<String>,

        /// LayoutConfig JSON file overriding the default spacing
        #[arg(short = 'c', long = "config")]
        config: Option<String>,

        /// Also emit connector geometry for every link
        #[arg(long)]
        connectors: bool,
    },
    /// Report impossible dates and lineage cycles
    Validate {
        /// Snapshot JSON file (reads from stdin if not provided)
        input: Option<String>,

        /// Exit with status 2 when any diagnostic is reported
        #[arg(long)]
        strict: bool,
    },
    /// List persons whose given or family name contains QUERY
    Search {
        query: String,

        /// Snapshot JSON file (reads from stdin if not provided)
        input: Option<String>,
    },
}

#[derive(Serialize)]
struct LayoutOutput<'a> {
    #[serde(flatten)]
    layout: &'a Layout,
    #[serde(skip_serializing_if = "Option::is_none")]
    connectors: Option<Vec<Connector>>,
}

fn fail(msg: impl std::fmt::Display) -> ! {
    eprintln!("error: {}", msg);
    process::exit(1);
}

fn read_source(path: Option<&str>) -> String {
    match path {
        Some(path) => fs::read_to_string(path)
            .unwrap_or_else(|e| fail(format_args!("cannot read '{}': {}", path, e))),
        None => {
            let mut buf = String::new();
            if let Err(e) = io::stdin().read_to_string(&mut buf) {
                fail(format_args!("cannot read stdin: {}", e));
            }
            buf
        }
    }
}

fn load_snapshot(path: Option<&str>) -> Snapshot {
    Snapshot::from_json(&read_source(path)).unwrap_or_else(|e| fail(e))
}

fn to_json<T: Serialize>(value: &T, pretty: bool) -> String {
    let encoded = if pretty {
        serde_json::to_string_pretty(value)
    } else {
        serde_json::to_string(value)
    };
    encoded.unwrap_or_else(|e| fail(format_args!("cannot encode output: {}", e)))
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => LevelFilter::WARN,
        1 => LevelFilter::INFO,
        2 => LevelFilter::DEBUG,
        _ => LevelFilter::TRACE,
    };
    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_max_level(level)
        .with_target(false)
        .init();
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let mut exit_code = 0;
    let rendered = match &cli.command {
        Command::Layout {
            input,
            config,
            connectors,
        } => {
            let config = match config {
                Some(path) => LayoutConfig::from_json(&read_source(Some(path.as_str())))
                    .unwrap_or_else(|e| fail(format_args!("invalid config '{}': {}", path, e))),
                None => LayoutConfig::default(),
            };
            let snapshot = load_snapshot(input.as_deref());
            let layout = compute_layout_with_config(&snapshot.persons, &snapshot.relations, &config);
            tracing::info!(
                nodes = layout.nodes.len(),
                links = layout.links.len(),
                "layout computed"
            );
            let connectors = connectors.then(|| route_connectors(&layout, &config));
            to_json(
                &LayoutOutput {
                    layout: &layout,
                    connectors,
                },
                cli.pretty,
            )
        }
        Command::Validate { input, strict } => {
            let snapshot = load_snapshot(input.as_deref());
            let diagnostics = validate(&snapshot.persons, &snapshot.relations);
            tracing::info!(diagnostics = diagnostics.len(), "validation finished");
            if *strict && !diagnostics.is_empty() {
                exit_code = 2;
            }
            to_json(&diagnostics, cli.pretty)
        }
        Command::Search { query, input } => {
            let snapshot = load_snapshot(input.as_deref());
            let found = search_persons(&snapshot.persons, query)
                .unwrap_or_else(|e| fail(format_args!("invalid query: {}", e)));
            to_json(&found, cli.pretty)
        }
    };

    if let Some(ref path) = cli.output {
        if let Err(e) = fs::write(path, format!("{}\n", rendered)) {
            fail(format_args!("cannot write '{}': {}", path, e));
        }
    } else {
        println!("{}", rendered);
        if let Err(e) = io::stdout().flush() {
            fail(format_args!("cannot flush stdout: {}", e));
        }
    }

    process::exit(exit_code);
}
