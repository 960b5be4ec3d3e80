use clap::Parser;
use miette::{IntoDiagnostic, Result};
use paytrack::application::driver::{Outcome, execute};
use paytrack::application::module::PaymentModule;
use paytrack::config::Config;
use paytrack::infrastructure::gateways::GatewayKind;
use paytrack::interfaces::csv::command_reader::CommandReader;
use paytrack::interfaces::csv::record_writer::RecordWriter;
use std::fs::File;
use std::io::{self, IsTerminal, Read};
use std::path::PathBuf;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Input commands CSV file. Reads stdin when omitted.
    input: Option<PathBuf>,

    /// Gateway that performs the charges. Overrides the config file.
    #[arg(long, value_enum)]
    gateway: Option<GatewayKind>,

    /// Path to a JSON configuration file.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Largest accepted amount in minor units. Overrides the config file.
    #[arg(long)]
    max_amount: Option<u64>,
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("warn,paytrack=info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_ansi(io::stderr().is_terminal())
        .init();
}

#[tokio::main]
async fn main() -> Result<()> {
    init_tracing();
    let cli = Cli::parse();

    let mut config = match &cli.config {
        Some(path) => Config::load(path).into_diagnostic()?,
        None => Config::default(),
    };
    if let Some(gateway) = cli.gateway {
        config.gateway = gateway;
    }
    if let Some(max_amount) = cli.max_amount {
        config.max_amount = max_amount;
    }

    let module = PaymentModule::builder()
        .gateway(config.gateway.build())
        .config(config)
        .build()
        .into_diagnostic()?;
    info!(
        gateway = module.gateway_name(),
        max_amount = module.max_amount(),
        "payment module ready"
    );

    let source: Box<dyn Read> = match cli.input {
        Some(path) => Box::new(File::open(path).into_diagnostic()?),
        None => Box::new(io::stdin()),
    };

    let reader = CommandReader::new(source);
    for command in reader.commands() {
        match command {
            Ok(command) => match execute(&module, command).await {
                Ok(Outcome::Paid(id)) => {
                    let balance = module.balance().await;
                    info!(%id, %balance, "payment accepted");
                }
                Ok(Outcome::Cancelled(id)) => {
                    let balance = module.balance().await;
                    info!(%id, %balance, "payment cancelled");
                }
                Ok(Outcome::Info(id, record)) => {
                    info!(
                        %id,
                        description = %record.description,
                        amount = record.amount.value(),
                        cancelled = record.cancelled,
                        "payment info"
                    );
                }
                Err(e) => warn!("Error processing command: {}", e),
            },
            Err(e) => warn!("Error reading command: {}", e),
        }
    }

    let records = module.info_all().await;
    let balance = module.balance().await;
    let stdout = io::stdout();
    let mut writer = RecordWriter::new(stdout.lock());
    writer.write_records(&records).into_diagnostic()?;

    info!(records = records.len(), %balance, "done");
    Ok(())
}
