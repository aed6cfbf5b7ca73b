use clap::Parser;
use estate_predict::application::orchestrator::RequestOrchestrator;
use estate_predict::domain::form::RawFormInput;
use estate_predict::domain::ports::{PredictionGatewayBox, PresenterHandle};
use estate_predict::infrastructure::console::ConsolePresenter;
use estate_predict::infrastructure::http::{DEFAULT_ENDPOINT, HttpPredictionGateway};
use estate_predict::interfaces::csv::form_reader::FormReader;
use miette::{IntoDiagnostic, Result};
use std::fs::File;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Input CSV file with one form submission per row
    #[arg(required_unless_present = "sample")]
    input: Option<PathBuf>,

    /// Submit a single built-in sample listing instead of reading a file
    #[arg(long)]
    sample: bool,

    /// Prediction endpoint URL
    #[arg(long, default_value = DEFAULT_ENDPOINT)]
    endpoint: String,

    /// HTTP request timeout, in seconds
    #[arg(long, default_value_t = 10)]
    timeout_secs: u64,

    /// Delay before a simulated demo price is shown after a failure, in milliseconds
    #[arg(long, default_value_t = 2000)]
    fallback_delay_ms: u64,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let gateway: PredictionGatewayBox = Box::new(
        HttpPredictionGateway::new(&cli.endpoint, Duration::from_secs(cli.timeout_secs))
            .into_diagnostic()?,
    );
    let presenter: PresenterHandle = Arc::new(ConsolePresenter::new());
    let orchestrator = RequestOrchestrator::new(
        gateway,
        presenter,
        &cli.endpoint,
        Duration::from_millis(cli.fallback_delay_ms),
    );

    if cli.sample {
        orchestrator.submit(RawFormInput::sample()).await;
    } else if let Some(input) = cli.input {
        let file = File::open(input).into_diagnostic()?;
        let reader = FormReader::new(file);
        for row in reader.rows() {
            match row {
                Ok(form) => {
                    orchestrator.submit(form).await;
                }
                Err(e) => {
                    eprintln!("Error reading form row: {e}");
                }
            }
        }
    }

    // Let any scheduled demo price land before the process exits.
    orchestrator.settle().await;

    Ok(())
}
