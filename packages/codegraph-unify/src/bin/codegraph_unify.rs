//! Codegraph Unify CLI
//!
//! # Usage
//!
//! ```bash
//! # Solve a JSON constraint list
//! cargo run --bin codegraph-unify -- solve --input constraints.json --pretty
//!
//! # Solve with a YAML config and the per-constraint trace
//! cargo run --bin codegraph-unify -- solve --input constraints.json --config unify.yaml --trace
//!
//! # Unify two types
//! cargo run --bin codegraph-unify -- unify --left '{"type":"var","name":"x"}' --right '{"type":"num"}'
//!
//! # Print a preset config
//! cargo run --bin codegraph-unify -- config --preset debug
//! ```

use clap::{Parser, Subcommand};
use codegraph_unify::features::type_unification::{JsonConstraintSource, SolveConstraintsUseCase};
use codegraph_unify::{unify, CodegraphUnifyError, Preset, SolverConfig, Type};
use serde::Serialize;
use std::path::PathBuf;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "codegraph-unify")]
#[command(about = "Constraint-based type unification", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Solve a JSON array of constraints
    Solve {
        /// Constraint file (JSON array)
        #[arg(short, long)]
        input: PathBuf,

        /// YAML solver configuration
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Include the per-constraint trace in the output
        #[arg(long)]
        trace: bool,

        /// Pretty-print JSON output
        #[arg(long)]
        pretty: bool,
    },

    /// Unify two JSON-encoded types
    Unify {
        #[arg(short, long)]
        left: String,

        #[arg(short, long)]
        right: String,
    },

    /// Print a preset configuration as YAML
    Config {
        #[arg(short, long, default_value = "default")]
        preset: String,
    },
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match run(cli.command) {
        Ok(output) => {
            println!("{}", output);
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("❌ {}", e);
            ExitCode::FAILURE
        }
    }
}

fn run(command: Commands) -> Result<String, CodegraphUnifyError> {
    match command {
        Commands::Solve {
            input,
            config,
            trace,
            pretty,
        } => {
            let config = match config {
                Some(path) => SolverConfig::from_yaml(path)?,
                None => SolverConfig::default(),
            };
            let config = if trace { config.record_trace(true) } else { config };

            let use_case = SolveConstraintsUseCase::new(JsonConstraintSource::from_file(input), config)?;
            let outcome = use_case.execute()?;
            to_json(&outcome, pretty)
        }

        Commands::Unify { left, right } => {
            let left: Type = serde_json::from_str(&left)?;
            let right: Type = serde_json::from_str(&right)?;
            let subst = unify(&left, &right)?;
            to_json(&subst, false)
        }

        Commands::Config { preset } => {
            let preset: Preset = preset.parse()?;
            Ok(SolverConfig::from_preset(preset).to_yaml()?)
        }
    }
}

fn to_json<T: Serialize>(value: &T, pretty: bool) -> Result<String, CodegraphUnifyError> {
    let json = if pretty {
        serde_json::to_string_pretty(value)?
    } else {
        serde_json::to_string(value)?
    };
    Ok(json)
}
