//! Venture CLI - business idea evaluation from the terminal
//!
//! - Evaluate an idea at a location against the evaluation service
//! - Analyze a saved report offline
//! - Browse known locations and business ideas

use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod commands;
mod config;
mod error;
mod output;

use commands::lookup::LookupKind;
use commands::{analyze, evaluate, lookup};
use config::CliConfig;
use error::CliResult;

/// Venture CLI application
#[derive(Parser)]
#[command(name = "venture")]
#[command(about = "Venture - business idea evaluation CLI", long_about = None)]
#[command(version)]
struct Cli {
    /// Configuration file path
    #[arg(short, long, env = "VENTURE_CONFIG")]
    config: Option<String>,

    /// Evaluation service base URL
    #[arg(short, long, env = "VENTURE_API_URL")]
    api_url: Option<String>,

    /// Output format (table, json, yaml)
    #[arg(short, long, default_value = "table")]
    output: output::OutputFormat,

    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

/// Available commands
#[derive(Subcommand)]
enum Commands {
    /// Evaluate a business idea at a location
    Evaluate(evaluate::EvaluateArgs),

    /// Build the dashboard for a saved report without contacting the service
    Analyze(analyze::AnalyzeArgs),

    /// List known locations
    Locations {
        /// Only show entries containing this text
        #[arg(short, long)]
        filter: Option<String>,
    },

    /// List suggested business ideas
    #[command(alias = "business-ideas")]
    Ideas {
        /// Only show entries containing this text
        #[arg(short, long)]
        filter: Option<String>,
    },

    /// Show effective configuration
    Config,
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    let filter = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| filter.into()),
        )
        .with(
            tracing_subscriber::fmt::layer()
                .without_time()
                .with_writer(std::io::stderr),
        )
        .init();

    if let Err(e) = run(cli).await {
        output::print_error(&e.to_string());
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> CliResult<()> {
    let config = CliConfig::load(cli.config.as_deref())?;
    let settings = config.resolve(cli.api_url.as_deref());
    let format = cli.output;

    match cli.command {
        Commands::Evaluate(args) => evaluate::execute(args, &settings, format).await,
        Commands::Analyze(args) => analyze::execute(args, &settings, format),
        Commands::Locations { filter } => {
            lookup::execute(LookupKind::Locations, filter, &settings, format).await
        }
        Commands::Ideas { filter } => {
            lookup::execute(LookupKind::BusinessIdeas, filter, &settings, format).await
        }
        Commands::Config => {
            let path = match cli.config {
                Some(path) => path,
                None => CliConfig::default_config_path()?.display().to_string(),
            };
            match format {
                output::OutputFormat::Table => {
                    println!("Config file: {}", path);
                    println!("API URL: {}", settings.api_url);
                    println!("Timeout: {}s", settings.timeout.as_secs());
                    println!("Horizon: {:?}", settings.horizon);
                    println!("Generate risks: {}", settings.generate_risks);
                    println!("Risk model: {}", settings.risk_model);
                    if let Some(endpoint) = &settings.risk_endpoint {
                        println!("Risk endpoint: {}", endpoint);
                    }
                    Ok(())
                }
                _ => output::print_single(&settings, format),
            }
        }
    }
}
