use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use mimalloc::MiMalloc;

use calc_bootstrap::{AppConfig, CliArgs, init_logging, shutdown_token};
use calc_transport_grpc::ListenConfig;
use calculator::CalculatorHost;
use calculator_sdk::{CalculatorClient, CalculatorGrpcClient, Operation};

#[global_allocator]
static GLOBAL: MiMalloc = MiMalloc;

/// Calculator Server - unary gRPC add/subtract service
#[derive(Parser)]
#[command(name = "calculator-server")]
#[command(about = "Calculator Server - unary gRPC add/subtract service")]
#[command(version)]
struct Cli {
    /// Path to configuration file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Port override (takes precedence over PORT and the config file)
    #[arg(short, long)]
    port: Option<u16>,

    /// Print effective configuration (YAML) and exit
    #[arg(long)]
    print_config: bool,

    /// Log verbosity level (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the server
    Run,
    /// Validate configuration and exit
    Check,
    /// Send a single calculation to a running server and print the result
    #[command(allow_negative_numbers = true)]
    Call {
        /// Server endpoint
        #[arg(long, default_value = "http://127.0.0.1:8080")]
        endpoint: String,

        /// Operation: add or subtract
        operation: Operation,

        first_operand: f32,

        second_operand: f32,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let args = CliArgs {
        config: cli.config.clone(),
        port: cli.port,
        verbose: cli.verbose,
    };

    // Layered config:
    // 1) defaults -> 2) YAML (if provided) -> 3) env (APP__*) -> 4) PORT -> 5) CLI overrides
    let mut config = AppConfig::load_or_default(args.config.as_deref())?;
    config.apply_cli_overrides(&args);

    init_logging(&config.logging)?;

    if cli.print_config {
        println!("{}", config.to_yaml()?);
        return Ok(());
    }

    match cli.command.unwrap_or(Commands::Run) {
        Commands::Run => run_server(&config).await,
        Commands::Check => check_config(&config),
        Commands::Call {
            endpoint,
            operation,
            first_operand,
            second_operand,
        } => call(&endpoint, operation, first_operand, second_operand).await,
    }
}

fn check_config(config: &AppConfig) -> Result<()> {
    tracing::info!("Checking configuration...");
    println!("Configuration is valid");
    println!("{}", config.to_yaml()?);
    Ok(())
}

async fn run_server(config: &AppConfig) -> Result<()> {
    let listen_addr = config.listen_addr();
    tracing::info!(%listen_addr, "Calculator Server starting");

    let cancel = shutdown_token();
    let host = CalculatorHost::new(ListenConfig::from(listen_addr));
    host.run(cancel).await?;

    tracing::info!("Calculator Server stopped");
    Ok(())
}

async fn call(
    endpoint: &str,
    operation: Operation,
    first_operand: f32,
    second_operand: f32,
) -> Result<()> {
    let client = CalculatorGrpcClient::connect(endpoint)
        .await
        .with_context(|| format!("failed to connect to {endpoint}"))?;

    let result = client
        .calculate(first_operand, second_operand, operation)
        .await?;

    println!("{result}");
    Ok(())
}
