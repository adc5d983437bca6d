//! Command-line front end: reads a mission plan and prints final rover positions.

use std::fs;
use std::io::{self, Read};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use plateau_rover::{SimulationConfig, parse_mission};
use tracing::Level;

#[derive(Parser, Debug)]
#[command(name = "plateau-rover", version, about = "Replays rover commands on a plateau")]
struct Cli {
    /// Mission file. Reads stdin when omitted or `-`.
    input: Option<PathBuf>,

    /// Print final states as a JSON array instead of text lines.
    #[arg(long)]
    json: bool,

    /// Reject rovers that start outside the plateau.
    #[arg(long)]
    validate_start: bool,

    /// Maximum number of commands per instruction line.
    #[arg(long)]
    max_instructions: Option<usize>,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

impl Cli {
    fn config(&self) -> SimulationConfig {
        let config = SimulationConfig::new().with_validate_start(self.validate_start);
        match self.max_instructions {
            Some(limit) => config.with_max_instructions(limit),
            None => config,
        }
    }

    fn read_input(&self) -> Result<String> {
        match &self.input {
            Some(path) if path.as_os_str() != "-" => fs::read_to_string(path)
                .with_context(|| format!("failed to read mission file {}", path.display())),
            _ => {
                let mut buf = String::new();
                io::stdin()
                    .read_to_string(&mut buf)
                    .context("failed to read mission from stdin")?;
                Ok(buf)
            }
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let level = match cli.verbose {
        0 => Level::WARN,
        1 => Level::INFO,
        2 => Level::DEBUG,
        _ => Level::TRACE,
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(io::stderr)
        .init();

    let input = cli.read_input()?;
    let mission = parse_mission(&input).context("invalid mission plan")?;
    let finals = mission
        .run(&cli.config())
        .context("simulation aborted")?;
    tracing::info!(rovers = finals.len(), "simulation complete");

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&finals)?);
    } else {
        let lines: Vec<String> = finals.iter().map(ToString::to_string).collect();
        println!("{}", lines.join("\n"));
    }
    Ok(())
}
