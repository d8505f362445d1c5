use anyhow::Result;
use clap::{Parser, Subcommand};
use log::LevelFilter;

mod commands;

#[derive(Parser)]
#[command(name = "simplevec-cmd")]
#[command(about = "Command-line utility for exercising SimpleVec")]
#[command(version)]
struct Cli {
    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Append values one by one and report every capacity change
    Growth {
        /// Number of values to append
        #[arg(short, long, default_value_t = 64)]
        count: usize,
    },

    /// Run a random mix of operations, checking each step against `Vec`
    Workload {
        /// Number of operations to perform
        #[arg(short, long, default_value_t = 10_000)]
        ops: usize,

        /// Random seed; a fresh seed is drawn when omitted
        #[arg(short, long, env = "SIMPLEVEC_SEED")]
        seed: Option<u64>,
    },

    /// Walk through push, insert, erase and a failing checked access
    Demo,
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    };
    env_logger::Builder::new()
        .filter_level(level)
        .parse_env("SIMPLEVEC_LOG")
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match cli.command {
        Commands::Growth { count } => commands::growth::run(count),
        Commands::Workload { ops, seed } => commands::workload::run(ops, seed),
        Commands::Demo => commands::demo::run(),
    }
}
