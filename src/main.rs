//! CLI entry point for the ZIP code forecast lookup.
//!
//! `forecast` prints a per-weekday summary for one ZIP code, `serve` exposes
//! the same summary over HTTP.

use anyhow::{Context, Result, anyhow};
use clap::{Parser, Subcommand};
use nws_forecast::{
    config::Settings, infra::nws::NwsClient, location::ZipCodeTable, output, server,
    services::ForecastApi,
};
use std::ffi::OsStr;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tokio::io::{AsyncBufReadExt, AsyncWriteExt, BufReader};
use tracing::info;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{
    EnvFilter, Layer,
    fmt::{self, format::FmtSpan},
    layer::SubscriberExt,
    util::SubscriberInitExt,
};

#[derive(Parser)]
#[command(name = "nws_forecast")]
#[command(about = "Weather forecast by ZIP code from api.weather.gov", long_about = None)]
struct Cli {
    /// CSV file mapping ZIP codes to coordinates (overrides ZIP_CSV_PATH)
    #[arg(long, global = true, value_name = "PATH")]
    zip_csv: Option<PathBuf>,

    /// Base URL of the NWS API (overrides NWS_API_BASE)
    #[arg(long, global = true, value_name = "URL")]
    api_base: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the forecast for a ZIP code, prompting for it if not given
    Forecast {
        /// ZIP code to look up
        #[arg(short, long)]
        zip: Option<String>,

        /// Print JSON instead of a table
        #[arg(long, default_value_t = false)]
        json: bool,
    },
    /// Serve forecasts over HTTP at /forecast/{zipcode}
    Serve {
        /// Address to listen on (overrides BIND_ADDR)
        #[arg(short, long)]
        addr: Option<String>,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok(); // Load .env file

    let _log_guard = init_tracing()?;

    let cli = Cli::parse();

    let mut settings = Settings::from_env();
    if let Some(path) = cli.zip_csv {
        settings.zip_csv_path = path;
    }
    if let Some(base) = cli.api_base {
        settings.api_base = base;
    }

    match cli.command {
        Commands::Forecast { zip, json } => {
            let zip = match zip {
                Some(zip) => zip,
                None => prompt_zip().await?,
            };
            print_forecast(&settings, &zip, json).await?;
        }
        Commands::Serve { addr } => {
            if let Some(addr) = addr {
                settings.bind_addr = addr;
            }
            serve(&settings).await?;
        }
    }

    Ok(())
}

/// Colored stderr output plus a JSON log file rotated daily.
fn init_tracing() -> Result<WorkerGuard> {
    let log_file_path =
        std::env::var("LOG_FILE_PATH").unwrap_or_else(|_| "logs/nws_forecast.log".to_string());
    let log_dir = Path::new(&log_file_path)
        .parent()
        .unwrap_or(Path::new("logs"));
    let log_file_name = Path::new(&log_file_path)
        .file_name()
        .unwrap_or(OsStr::new("nws_forecast.log"));

    let file_appender = tracing_appender::rolling::daily(log_dir, log_file_name);
    let (non_blocking_file, file_guard) = tracing_appender::non_blocking(file_appender);

    let stderr_layer = fmt::layer()
        .with_target(true)
        .with_span_events(FmtSpan::CLOSE)
        .with_ansi(true)
        .with_writer(std::io::stderr)
        .with_filter(EnvFilter::from_env("RUST_LOG").add_directive("info".parse()?));

    let json_layer = fmt::layer()
        .json()
        .with_current_span(true)
        .with_span_list(true)
        .with_writer(non_blocking_file)
        .with_filter(EnvFilter::from_env("RUST_LOG_JSON").add_directive("debug".parse()?));

    tracing_subscriber::registry()
        .with(stderr_layer)
        .with(json_layer)
        .init();

    Ok(file_guard)
}

/// Asks for a ZIP code on stdout and reads one line from stdin.
async fn prompt_zip() -> Result<String> {
    let mut stdout = tokio::io::stdout();
    stdout.write_all(b"Enter zip code: ").await?;
    stdout.flush().await?;

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    let line = lines
        .next_line()
        .await?
        .ok_or_else(|| anyhow!("No zip code entered"))?;

    Ok(line.trim().to_string())
}

/// Looks up `zip`, fetches its forecast and prints it to stdout.
#[tracing::instrument(skip(settings))]
async fn print_forecast(settings: &Settings, zip: &str, json: bool) -> Result<()> {
    let zip_codes = ZipCodeTable::load(&settings.zip_csv_path)?;

    let coordinate = zip_codes
        .lookup(zip)
        .ok_or_else(|| anyhow!("Could not find zipcode {}", zip.trim()))?;

    let client = NwsClient::new(&settings.api_base, &settings.user_agent)?;
    let forecast = client
        .fetch_forecast(coordinate)
        .await
        .context("Could not get forecast")?;

    let summary = forecast.summary();
    output::log_summary(&summary);

    let mut stdout = std::io::stdout().lock();
    if json {
        output::write_json(&mut stdout, &summary)?;
    } else {
        output::write_table(&mut stdout, zip, &summary)?;
    }

    Ok(())
}

/// Loads the ZIP table once and serves until stopped.
async fn serve(settings: &Settings) -> Result<()> {
    let zip_codes = ZipCodeTable::load(&settings.zip_csv_path)?;
    let client = NwsClient::new(&settings.api_base, &settings.user_agent)?;

    info!(
        api_base = %settings.api_base,
        zip_codes = zip_codes.len(),
        "Starting forecast server"
    );

    let state = server::AppState::new(zip_codes, Arc::new(client));
    server::run(&settings.bind_addr, state).await
}
