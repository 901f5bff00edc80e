//! opr-harvest CLI
//!
//! Harvests spells and special rules from the OPR Army Forge API into JSON
//! and CSV files.

mod error;
mod report;

use std::io::Write;
use std::path::PathBuf;
use std::time::Duration;

use clap::Parser;
use log::{Level, LevelFilter};
use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;

use opr_harvest_core::GameSystem;
use opr_harvest_forge::{ArmyForgeClient, ClientOptions, DEFAULT_BASE_URL};
use opr_harvest_lib::{DEFAULT_OUTPUT_DIR, HarvestOptions, Strategy, collect, write_harvest};

use crate::error::CliError;

#[derive(Parser)]
#[command(name = "opr-harvest", version)]
#[command(
    about = "Harvest spells and special rules from OPR Army Forge",
    long_about = None
)]
struct Cli {
    /// Emit each army book for every system it was listed under, ignoring
    /// its declared compatibility
    #[arg(long)]
    force_duplicates: bool,

    /// Fetch every system's army books separately instead of deduplicating
    #[arg(long)]
    per_system: bool,

    /// Game systems to scan, by slug, alias, or id (e.g., gf,gff,aof)
    #[arg(short, long, value_delimiter = ',')]
    systems: Option<Vec<GameSystem>>,

    /// Directory for the JSON and CSV output
    #[arg(
        short,
        long,
        env = "OPR_HARVEST_OUTPUT_DIR",
        default_value = DEFAULT_OUTPUT_DIR
    )]
    output_dir: PathBuf,

    /// Army Forge API root
    #[arg(long, env = "ARMY_FORGE_API_URL", default_value = DEFAULT_BASE_URL)]
    base_url: String,

    /// Minimum delay between API requests, in milliseconds
    #[arg(long, env = "OPR_HARVEST_DELAY_MS", default_value_t = 10)]
    delay_ms: u64,

    /// Show detailed progress and the cross-system army book list
    #[arg(short, long, conflicts_with = "quiet")]
    verbose: bool,

    /// Only show warnings and errors
    #[arg(short, long)]
    quiet: bool,
}

impl Cli {
    fn log_level(&self) -> LevelFilter {
        if self.quiet {
            LevelFilter::Warn
        } else if self.verbose {
            LevelFilter::Debug
        } else {
            LevelFilter::Info
        }
    }

    fn strategy(&self) -> Strategy {
        if self.per_system {
            Strategy::PerSystem
        } else {
            Strategy::Smart
        }
    }

    /// Selected systems in scan order, duplicates removed.
    fn systems(&self) -> Vec<GameSystem> {
        match &self.systems {
            Some(selected) => GameSystem::all()
                .iter()
                .copied()
                .filter(|s| selected.contains(s))
                .collect(),
            None => GameSystem::all().to_vec(),
        }
    }
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.log_level());

    if let Err(e) = run(&cli) {
        log::error!("{e}");
        std::process::exit(1);
    }
}

/// Workspace crates whose logs follow the verbosity flags. Dependencies stay
/// at `warn`.
const LOG_MODULES: &[&str] = &[
    "opr_harvest",
    "opr_harvest_core",
    "opr_harvest_forge",
    "opr_harvest_lib",
];

/// Filters for the given verbosity; `RUST_LOG` is applied last so it wins.
fn log_builder(level: LevelFilter) -> env_logger::Builder {
    let mut builder = env_logger::Builder::new();
    builder.filter_level(LevelFilter::Warn);
    for module in LOG_MODULES {
        builder.filter_module(module, level);
    }
    builder.parse_default_env();
    builder
}

/// Install the logger: bare messages for info and below, a colored prefix
/// for warnings and errors.
fn init_logging(level: LevelFilter) {
    log_builder(level)
        .target(env_logger::Target::Stdout)
        .format(|buf, record| match record.level() {
            Level::Error => writeln!(
                buf,
                "{} {}",
                "error:".if_supports_color(Stdout, |t| t.red()),
                record.args()
            ),
            Level::Warn => writeln!(
                buf,
                "{} {}",
                "\u{26A0}".if_supports_color(Stdout, |t| t.yellow()),
                record.args()
            ),
            _ => writeln!(buf, "{}", record.args()),
        })
        .init();
}

fn run(cli: &Cli) -> Result<(), CliError> {
    let client = ArmyForgeClient::new(ClientOptions {
        base_url: cli.base_url.clone(),
        request_interval: Duration::from_millis(cli.delay_ms),
        ..Default::default()
    })?;

    let options = HarvestOptions {
        systems: cli.systems(),
        strategy: cli.strategy(),
        force_duplicates: cli.force_duplicates,
        output_dir: cli.output_dir.clone(),
    };

    report::print_banner(&options, client.base_url().as_str());

    let harvest = collect(&client, &options);

    log::info!("");
    let output = write_harvest(&harvest.records, options.strategy, &options.output_dir)?;

    report::print_summary(&harvest, &output, &options, cli.verbose);
    Ok(())
}
