//! shelf-alloc — assign a product catalog to shelves with a genetic algorithm.

use anyhow::Context;
use clap::{Parser, Subcommand, ValueEnum};
use shelf_alloc::catalog::{sample_catalog, Catalog};
use shelf_alloc::config::{ReportFormat, RunConfig};
use shelf_alloc::report;
use shelf_alloc::shelf::{score, ShelfOptimizer};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "shelf-alloc", version, about = "Genetic shelf allocation")]
struct Cli {
    /// Run configuration (TOML)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Catalog file (TOML); overrides the config file, defaults to the built-in sample
    #[arg(long, global = true)]
    catalog: Option<PathBuf>,

    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Search for the best allocation
    Solve {
        #[arg(long)]
        population_size: Option<usize>,

        #[arg(long)]
        max_generations: Option<usize>,

        #[arg(long)]
        mutation_rate: Option<f64>,

        #[arg(long)]
        tournament_size: Option<usize>,

        #[arg(long)]
        seed: Option<u64>,

        /// Output format
        #[arg(long)]
        format: Option<OutputFormat>,

        /// Also write the report to this file
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Score an existing allocation given as a JSON object {product_id: shelf_id}
    Score {
        assignment: PathBuf,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum OutputFormat {
    Table,
    Json,
    Csv,
}

impl From<OutputFormat> for ReportFormat {
    fn from(format: OutputFormat) -> Self {
        match format {
            OutputFormat::Table => ReportFormat::Table,
            OutputFormat::Json => ReportFormat::Json,
            OutputFormat::Csv => ReportFormat::Csv,
        }
    }
}

fn init_logging(verbose: u8) {
    let default_level = match verbose {
        0 => "info",
        1 => "debug",
        _ => "trace",
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn load_catalog(path: Option<&Path>) -> anyhow::Result<Catalog> {
    match path {
        Some(path) => Catalog::load(path)
            .with_context(|| format!("failed to load catalog {}", path.display())),
        None => Ok(sample_catalog()?),
    }
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let mut config = match &cli.config {
        Some(path) => RunConfig::load(path)
            .with_context(|| format!("failed to load config {}", path.display()))?,
        None => RunConfig::default(),
    };
    let catalog_path = cli.catalog.clone().or_else(|| config.catalog.clone());
    let catalog = load_catalog(catalog_path.as_deref())?;

    match cli.command {
        Commands::Solve {
            population_size,
            max_generations,
            mutation_rate,
            tournament_size,
            seed,
            format,
            output,
        } => {
            let ga = &mut config.ga;
            if let Some(n) = population_size {
                ga.population_size = n;
            }
            if let Some(n) = max_generations {
                ga.max_generations = n;
            }
            if let Some(rate) = mutation_rate {
                ga.mutation_rate = rate;
            }
            if let Some(k) = tournament_size {
                ga.tournament_size = k;
            }
            if seed.is_some() {
                ga.seed = seed;
            }
            if let Some(format) = format {
                config.report.format = format.into();
            }
            if output.is_some() {
                config.report.output = output;
            }

            let allocation = ShelfOptimizer::new(&catalog, config.ga.clone()).run()?;
            let rows = report::rows(&allocation, &catalog);
            let rendered = report::render(config.report.format, &allocation, &rows)?;
            println!("{rendered}");

            if let Some(path) = &config.report.output {
                report::write_report(path, &rendered)
                    .with_context(|| format!("failed to write report {}", path.display()))?;
                info!(rows = rows.len(), "allocation report saved");
            }
        }
        Commands::Score { assignment } => {
            let text = std::fs::read_to_string(&assignment)
                .with_context(|| format!("failed to read {}", assignment.display()))?;
            let map: BTreeMap<String, String> = serde_json::from_str(&text)?;
            let breakdown = score(&catalog, &map)?;

            println!("Penalty: {}", breakdown.total());
            for (rule, count, penalty) in breakdown.violated() {
                println!("  {rule}: {count} violation(s), penalty {penalty}");
            }
        }
    }

    Ok(())
}
