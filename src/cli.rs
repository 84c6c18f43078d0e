use crate::export;
use crate::extract;
use crate::model::Marker;
use crate::percentiles;
use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand, ValueEnum};
use log::{info, warn};
use std::fs::File;
use std::io::{self, BufRead, BufReader, BufWriter, Write};
use std::path::Path;

#[derive(Debug, Parser)]
#[command(
    name = "exp-parse",
    version,
    about = "Convert raw benchmark-experiment logs into CSV tables for plotting"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Extract data points from a ping experiment run
    Ping {
        /// What to extract from the raw log
        #[arg(long, short, value_enum)]
        extract: ExtractMode,

        #[command(flatten)]
        io: IoArgs,
    },

    /// Per-message percentile blocks from a grouped ping run
    Grouped {
        #[command(flatten)]
        io: IoArgs,
    },

    /// Per-record (window, throughput, latency) rows from a throughput-vs-latency run
    Throughput {
        #[command(flatten)]
        io: IoArgs,
    },
}

/// Input/output selection shared by every pipeline.
#[derive(Debug, Args)]
pub struct IoArgs {
    /// Raw experiment log (defaults to stdin)
    pub input: Option<std::path::PathBuf>,

    /// Destination CSV file (defaults to stdout)
    pub output: Option<std::path::PathBuf>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ExtractMode {
    /// Ping round-trip times, summarized as a percentile table
    Ping,
    /// Per-interval message counts, passed through unmodified
    Interval,
}

pub fn run(args: Cli) -> Result<()> {
    let (Command::Ping { io, .. } | Command::Grouped { io } | Command::Throughput { io }) =
        &args.command;
    let input = open_input(io.input.as_deref())?;
    let mut output = open_output(io.output.as_deref())?;
    match &args.command {
        Command::Ping { extract, .. } => run_ping(*extract, input, &mut output)?,
        Command::Grouped { .. } => run_grouped(input, &mut output)?,
        Command::Throughput { .. } => run_throughput(input, &mut output)?,
    }
    output.flush().context("flush output")
}

fn run_ping(mode: ExtractMode, input: impl BufRead, output: impl Write) -> Result<()> {
    match mode {
        ExtractMode::Ping => {
            let samples = extract::scan_marker(input, Marker::Time)?;
            info!("collected {} ping samples", samples.len());
            let rows = percentiles::summarize(&samples)
                .context("insufficient ping data to compute percentiles")?;
            export::write_rows(output, &rows)
        }
        ExtractMode::Interval => {
            let counts = extract::scan_marker(input, Marker::Interval)?;
            info!("collected {} interval counts", counts.len());
            export::write_rows(output, &counts)
        }
    }
}

fn run_grouped(input: impl BufRead, output: impl Write) -> Result<()> {
    let groups = extract::scan_groups(input)?;
    if groups.is_empty() {
        warn!("no group declarations found; emitting nothing");
    }
    info!("summarizing {} message groups", groups.len());
    let rows = percentiles::summarize_groups(&groups)?;
    export::write_rows(output, &rows)
}

fn run_throughput(input: impl BufRead, output: impl Write) -> Result<()> {
    let records = extract::scan_records(input)?;
    info!("parsed {} throughput/latency records", records.len());
    export::write_rows(output, &records)
}

fn open_input(path: Option<&Path>) -> Result<Box<dyn BufRead>> {
    Ok(match path {
        Some(p) => {
            let file =
                File::open(p).with_context(|| format!("open input file {}", p.display()))?;
            Box::new(BufReader::new(file))
        }
        None => Box::new(BufReader::new(io::stdin().lock())),
    })
}

fn open_output(path: Option<&Path>) -> Result<Box<dyn Write>> {
    Ok(match path {
        Some(p) => {
            let file =
                File::create(p).with_context(|| format!("create output file {}", p.display()))?;
            Box::new(BufWriter::new(file))
        }
        None => Box::new(io::stdout().lock()),
    })
}
