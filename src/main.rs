use clap::{CommandFactory, Parser};
use clap_complete::{generate, Shell};
use miette::Result;
use std::path::{Path, PathBuf};
use tracing::info;

mod config;
mod error;
mod refactor;
mod report;
mod strip;

use config::Config;
use refactor::SourceRewriter;
use report::{ReportFormat, Reporter, StripSummary};
use strip::DeadFunctionStripper;

/// deadstrip - strip functions marked #[allow(dead_code)] from a source file
#[derive(Parser, Debug)]
#[command(name = "deadstrip")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Source file to rewrite in place
    #[arg(required_unless_present = "completions")]
    path: Option<PathBuf>,

    /// Path to configuration file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Marker annotation that flags the following function as dead
    #[arg(short, long)]
    marker: Option<String>,

    /// Dry run - compute and report without rewriting the file
    #[arg(long)]
    dry_run: bool,

    /// Output format
    #[arg(short, long, value_enum, default_value = "terminal")]
    format: OutputFormat,

    /// Output file (for json format)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Verbose output
    #[arg(short, long)]
    verbose: bool,

    /// Quiet mode - only output results
    #[arg(short, long)]
    quiet: bool,

    /// Generate shell completions
    #[arg(long, value_name = "SHELL")]
    completions: Option<Shell>,
}

#[derive(clap::ValueEnum, Clone, Debug, Default)]
enum OutputFormat {
    #[default]
    Terminal,
    Json,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Handle shell completions
    if let Some(shell) = cli.completions {
        let mut cmd = Cli::command();
        let name = cmd.get_name().to_string();
        generate(shell, &mut cmd, name, &mut std::io::stdout());
        return Ok(());
    }

    // Initialize logging
    init_logging(cli.verbose, cli.quiet);

    info!("deadstrip v{}", env!("CARGO_PKG_VERSION"));

    let target = cli
        .path
        .clone()
        .ok_or_else(|| miette::miette!("missing source file path"))?;

    // Load configuration
    let config = load_config(&cli, &target)?;

    run_strip(&config, &cli, &target)?;

    Ok(())
}

fn init_logging(verbose: bool, quiet: bool) {
    use tracing_subscriber::{fmt, EnvFilter};

    let filter = if quiet {
        EnvFilter::new("error")
    } else if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };

    fmt().with_env_filter(filter).with_target(false).init();
}

fn load_config(cli: &Cli, target: &Path) -> Result<Config> {
    let mut config = if let Some(config_path) = &cli.config {
        Config::from_file(config_path)?
    } else {
        // Try to load from the default location beside the target
        Config::from_default_locations(target)?
    };

    // Override with CLI arguments
    if let Some(marker) = &cli.marker {
        config.marker = marker.clone();
    }

    Ok(config)
}

fn run_strip(config: &Config, cli: &Cli, target: &Path) -> Result<()> {
    use std::time::Instant;

    let start_time = Instant::now();

    info!(
        "Stripping functions marked {} from {}",
        config.marker,
        target.display()
    );

    let stripper = DeadFunctionStripper::new(config.marker.clone());
    let rewriter = SourceRewriter::new(stripper).with_dry_run(cli.dry_run);
    let outcome = rewriter.rewrite(target)?;

    info!("Finished in {:.2?}", start_time.elapsed());

    let summary = StripSummary::new(target, &outcome, cli.dry_run);
    let reporter = Reporter::new(report_format(cli), cli.output.clone());
    reporter.report(&summary)?;

    Ok(())
}

fn report_format(cli: &Cli) -> ReportFormat {
    match cli.format {
        OutputFormat::Terminal => ReportFormat::Terminal,
        OutputFormat::Json => ReportFormat::Json,
    }
}
