//! `overlaps` CLI — report overlapping events read from stdin or a file.
//!
//! ## Usage
//!
//! ```sh
//! # Interactive: type events, finish with a line containing `end`
//! overlaps
//! Enter events:
//! 2020-01-01 09:00 10:30
//! 2020-01-01 10:00 11:00
//! end
//! (2020-01-01 09:00 10:30, 2020-01-01 10:00 11:00)
//!
//! # From a file, JSON report to a file
//! overlaps -i events.txt --format json -o report.json
//!
//! # Show sweep diagnostics on stderr
//! RUST_LOG=overlap_engine=debug overlaps -i events.txt
//! ```

mod report;

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use overlap_engine::{Collected, Collector, DualOrder, LineOutcome};
use std::fs::File;
use std::io::{self, BufRead, BufReader};
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "overlaps",
    version,
    about = "Report every pair of overlapping events given as 'YYYY-MM-DD HH:MM HH:MM' lines"
)]
struct Cli {
    /// Input file (reads from stdin if omitted)
    #[arg(short, long)]
    input: Option<String>,

    /// Output file (writes to stdout if omitted)
    #[arg(short, long)]
    output: Option<String>,

    /// Report format
    #[arg(long, value_enum, default_value_t = Format::Text)]
    format: Format,

    /// Do not print the "Enter events:" prompt when reading stdin
    #[arg(long)]
    no_prompt: bool,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum Format {
    Text,
    Json,
}

fn main() -> Result<()> {
    init_logging();
    let cli = Cli::parse();

    let collected = match cli.input.as_deref() {
        Some(path) => {
            let file = File::open(path).with_context(|| format!("Failed to read file: {}", path))?;
            collect_lines(BufReader::new(file))?
        }
        None => {
            if cli.format == Format::Text && !cli.no_prompt {
                println!("Enter events:");
            }
            collect_lines(io::stdin().lock())?
        }
    };

    let order = DualOrder::new(&collected.events);
    let pairs = order.overlaps();
    info!(
        events = collected.events.len(),
        skipped = collected.rejected.len(),
        overlaps = pairs.len(),
        "report ready"
    );

    let rendered = match cli.format {
        Format::Text => report::render_text(&collected.rejected, &pairs),
        Format::Json => report::render_json(&collected, &pairs)?,
    };
    write_output(cli.output.as_deref(), &rendered)
}

/// Log to stderr so stdout only carries the report. `RUST_LOG` overrides the
/// default `warn` filter.
fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

/// Feed lines into a [`Collector`] until the terminator or end of input.
///
/// Stops reading as soon as `end` is seen so interactive sessions do not
/// wait for EOF.
fn collect_lines(reader: impl BufRead) -> Result<Collected> {
    let mut collector = Collector::new();
    let mut rejected = Vec::new();

    for line in reader.lines() {
        let line = line.context("Failed to read input line")?;
        match collector.push_line(&line) {
            LineOutcome::Accepted(_) => {}
            LineOutcome::Rejected(err) => rejected.push(err),
            LineOutcome::End => break,
        }
    }

    Ok(Collected {
        events: collector.into_events(),
        rejected,
    })
}

fn write_output(path: Option<&str>, content: &str) -> Result<()> {
    match path {
        Some(path) => {
            std::fs::write(path, content)
                .with_context(|| format!("Failed to write file: {}", path))?;
        }
        None => {
            print!("{}", content);
        }
    }
    Ok(())
}
