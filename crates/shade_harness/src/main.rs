//! Shade harness CLI
//!
//! Drive a header coordinator from generated sweeps or TOML scenarios and
//! print the sampled element state per step.

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use shade_harness::runner::{run_scenario, FrameLog};
use shade_harness::scenario::{Scenario, Step};

#[derive(Parser)]
#[command(name = "shade-harness")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Shade header animation harness", long_about = None)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Sweep the expansion fraction to 1 and back
    Sweep {
        /// Frames per direction
        #[arg(short, long, default_value = "10")]
        frames: usize,

        /// Run in combined-header mode
        #[arg(long)]
        combined: bool,

        /// Report a single-carrier device
        #[arg(long)]
        single_carrier: bool,

        /// Show the privacy chip before sweeping
        #[arg(long)]
        chip: bool,
    },

    /// Play a scenario from a TOML file
    Play {
        /// Scenario file
        file: PathBuf,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };

    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(filter)
        .init();

    match cli.command {
        Commands::Sweep {
            frames,
            combined,
            single_carrier,
            chip,
        } => cmd_sweep(frames, combined, single_carrier, chip),

        Commands::Play { file } => cmd_play(&file),
    }
}

fn cmd_sweep(frames: usize, combined: bool, single_carrier: bool, chip: bool) -> Result<()> {
    let mut scenario = Scenario::sweep(frames);
    scenario.header.combined = combined;
    if chip {
        scenario.steps.insert(0, Step::Chip { visible: true });
    }
    if single_carrier {
        scenario.steps.insert(0, Step::SingleCarrier { single: true });
    }

    let log = run_scenario(&scenario)?;
    print_log(&log);
    Ok(())
}

fn cmd_play(file: &Path) -> Result<()> {
    let scenario = Scenario::load(file)?;
    let log = run_scenario(&scenario)?;
    print_log(&log);
    Ok(())
}

fn print_log(log: &FrameLog) {
    println!(
        "{:>5}  {:>9}  {:>6}  {:>7}  {:>6}  {:>7}  {:>7}  flags",
        "frac", "clockdate", "date", "carrier", "icons", "battery", "transY"
    );
    for frame in &log.frames {
        let mut flags = String::new();
        if frame.clock_date_gone {
            flags.push_str(" label-gone");
        }
        if frame.rssi_ignored {
            flags.push_str(" rssi-held");
        }
        println!(
            "{:>5.2}  {:>9.3}  {:>6.3}  {:>7.3}  {:>6.3}  {:>7.3}  {:>7.1} {}",
            frame.fraction,
            frame.clock_date_alpha,
            frame.date_alpha,
            frame.carrier_alpha,
            frame.icons_alpha,
            frame.battery_alpha,
            frame.qs_translation,
            flags
        );
    }
}
