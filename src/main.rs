use anyhow::Context;
use calcd::app::{handle_fatal_error, initialize_app, run_server, AppConfig};
use calcd::calculator::{calculate, evaluate_equation, Operand, OperationRequest};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Arithmetic service for infix equations and named operations
#[derive(Parser)]
#[command(name = "calcd")]
#[command(about = "Evaluate arithmetic locally or serve it over HTTP", long_about = None)]
struct Cli {
    /// Enable verbose output (-v for debug, -vv for trace, -vvv for all)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Path to configuration file
    #[arg(short = 'c', long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Serve the calculator over HTTP (default command)
    Serve {
        /// Address to bind (default: 127.0.0.1)
        #[arg(long)]
        host: Option<String>,

        /// Port to listen on (default: 5000)
        #[arg(short = 'p', long)]
        port: Option<u16>,
    },
    /// Evaluate an infix equation such as "10*4+3-2"
    Eval {
        #[arg(allow_hyphen_values = true)]
        equation: String,
    },
    /// Fold an operation (add, subtract, multiply, divide) over numbers
    Calc {
        operation: String,

        #[arg(required = true, allow_negative_numbers = true)]
        numbers: Vec<f64>,
    },
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    let config = match AppConfig::load(cli.config.as_deref()) {
        Ok(config) => config.with_verbose(cli.verbose),
        Err(e) => handle_fatal_error(e, cli.verbose),
    };

    let result = match cli.command {
        Some(Commands::Serve { host, port }) => serve(config, host, port).await,
        Some(Commands::Eval { equation }) => {
            initialize_app(&config);
            evaluate_equation(&equation)
                .with_context(|| format!("Failed to evaluate '{equation}'"))
                .map(|result| println!("{result}"))
        }
        Some(Commands::Calc { operation, numbers }) => {
            initialize_app(&config);
            let request =
                OperationRequest::new(operation, numbers.into_iter().map(Operand::from).collect());
            calculate(&request)
                .context("Failed to calculate")
                .map(|result| println!("{result}"))
        }
        None => serve(config, None, None).await,
    };

    if let Err(e) = result {
        handle_fatal_error(e, cli.verbose);
    }
}

async fn serve(
    mut config: AppConfig,
    host: Option<String>,
    port: Option<u16>,
) -> anyhow::Result<()> {
    if let Some(host) = host {
        config = config.with_host(host);
    }
    if let Some(port) = port {
        config = config.with_port(port);
    }

    initialize_app(&config);
    run_server(&config).await
}
