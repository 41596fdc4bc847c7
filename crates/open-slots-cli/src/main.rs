//! `openslots` CLI — compute the open slots of a day from calendar JSON.
//!
//! ## Usage
//!
//! ```sh
//! # Calendars on stdin, result on stdout
//! cat calendars.json | openslots compute
//!
//! # From file to file, pretty-printed
//! openslots compute -i calendars.json -o slots.json --pretty
//!
//! # Run the bundled two-calendar example day
//! openslots demo
//!
//! # Show how the day boundary and merge were derived
//! openslots -vv compute -i calendars.json
//! ```

use anyhow::{Context, Result};
use clap::{ArgAction, Parser, Subcommand};
use std::io::{self, IsTerminal, Read};
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

#[derive(Parser)]
#[command(
    name = "openslots",
    version,
    about = "Find the open slots in a day shared by several calendars"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Increase log verbosity on stderr (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,
}

#[derive(Subcommand)]
enum Commands {
    /// Compute open slots from a JSON array of calendars
    Compute {
        /// Input file (reads from stdin if omitted)
        #[arg(short, long)]
        input: Option<String>,
        /// Output file (writes to stdout if omitted)
        #[arg(short, long)]
        output: Option<String>,
        /// Pretty-print the JSON result
        #[arg(long)]
        pretty: bool,
    },
    /// Compute open slots for the bundled example day
    Demo {
        /// Pretty-print the JSON result
        #[arg(long)]
        pretty: bool,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match cli.command {
        Commands::Compute {
            input,
            output,
            pretty,
        } => {
            let json = read_input(input.as_deref())?;
            let result = compute(&json, pretty)?;
            write_output(output.as_deref(), &result)?;
        }
        Commands::Demo { pretty } => {
            info!("computing bundled example day");
            let result = compute(open_slots::example::EXAMPLE_CALENDARS, pretty)?;
            write_output(None, &result)?;
        }
    }

    Ok(())
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => Level::WARN,
        1 => Level::INFO,
        2 => Level::DEBUG,
        _ => Level::TRACE,
    };
    FmtSubscriber::builder()
        .with_max_level(level)
        .with_target(true)
        .with_writer(io::stderr)
        .with_ansi(io::stderr().is_terminal())
        .init();
}

fn compute(json: &str, pretty: bool) -> Result<String> {
    let result = if pretty {
        open_slots::compute_open_slots_json_pretty(json)
    } else {
        open_slots::compute_open_slots_json(json)
    };
    result.context("Failed to compute open slots")
}

fn read_input(path: Option<&str>) -> Result<String> {
    match path {
        Some(path) => {
            std::fs::read_to_string(path).with_context(|| format!("Failed to read file: {}", path))
        }
        None => {
            let mut buf = String::new();
            io::stdin()
                .read_to_string(&mut buf)
                .context("Failed to read from stdin")?;
            Ok(buf)
        }
    }
}

fn write_output(path: Option<&str>, content: &str) -> Result<()> {
    match path {
        Some(path) => {
            std::fs::write(path, content)
                .with_context(|| format!("Failed to write file: {}", path))?;
            info!(path, "wrote result");
        }
        None => {
            println!("{}", content);
        }
    }
    Ok(())
}
