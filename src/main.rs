use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use storyscope::config::Config;
use storyscope::estimation::{Estimator, Story};
use storyscope::server;

#[derive(Parser)]
#[command(name = "storyscope")]
#[command(about = "Estimate user story complexity on a Fibonacci story-point scale", long_about = None)]
struct Cli {
    /// Path to a config file (default: <config dir>/storyscope/config.toml)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the HTTP estimation server
    Serve {
        /// Address to bind
        #[arg(long)]
        host: Option<String>,
        /// Port to listen on
        #[arg(short, long)]
        port: Option<u16>,
        /// Allow cross-origin requests from any origin
        #[arg(long)]
        cors: bool,
    },
    /// Estimate a single story and print the result as JSON
    Estimate {
        /// Story summary
        #[arg(short, long, default_value = "")]
        summary: String,
        /// Story description
        #[arg(short, long, default_value = "")]
        description: String,
        /// Story label (repeatable)
        #[arg(short, long = "label")]
        labels: Vec<String>,
    },
    /// Show or initialize configuration
    Config {
        /// Show current configuration
        #[arg(short, long)]
        show: bool,
        /// Write the default configuration file
        #[arg(long)]
        init: bool,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "storyscope=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Serve { host, port, cors } => {
            let mut config = load_config(cli.config.as_deref())?;
            if let Some(host) = host {
                config.server.host = host;
            }
            if let Some(port) = port {
                config.server.port = port;
            }
            config.server.cors_enabled |= cors;
            server::start_server(config).await?;
        }
        Commands::Estimate {
            summary,
            description,
            labels,
        } => {
            let config = load_config(cli.config.as_deref())?;
            run_estimate(&config, Story::new(summary, description, labels))?;
        }
        Commands::Config { show, init } => {
            handle_config(cli.config, show, init)?;
        }
    }

    Ok(())
}

fn load_config(path: Option<&std::path::Path>) -> Result<Config> {
    match path {
        Some(path) => Config::load_from(path),
        None => Config::load(),
    }
}

fn run_estimate(config: &Config, story: Story) -> Result<()> {
    let estimator = Estimator::from_config(config).context("Text analyzer failed to load")?;
    let result = estimator.estimate(&story)?;
    println!("{}", serde_json::to_string_pretty(&result)?);
    Ok(())
}

fn handle_config(path: Option<PathBuf>, show: bool, init: bool) -> Result<()> {
    let path = match path {
        Some(path) => path,
        None => Config::config_path()?,
    };

    if init {
        if path.exists() {
            println!("Config already exists at {}", path.display());
        } else {
            Config::default().save_to(&path)?;
            println!("Wrote default config to {}", path.display());
        }
        return Ok(());
    }

    let config = if path.exists() {
        Config::load_from(&path)?
    } else {
        Config::default()
    };

    if show {
        println!("Current configuration:");
        println!("{}", toml::to_string_pretty(&config)?);
    } else {
        println!("Config file: {}", path.display());
        println!("Use --show to display it or --init to create it");
    }

    Ok(())
}
