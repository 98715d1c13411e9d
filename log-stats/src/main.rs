mod db;
mod error;
mod models;
mod report;

use std::io::Write;
use std::process::ExitCode;

use clap::Parser;
use error::StatsError;
use mongodb::Client;
use report::NginxStats;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(version, about = "Analyze nginx request logs stored in MongoDB", long_about = None)]
struct Args {
    /// MongoDB URI to connect to.
    #[arg(long = "db_uri", default_value = "mongodb://127.0.0.1:27017")]
    db_uri: String,
}

#[tokio::main]
async fn main() -> Result<ExitCode, anyhow::Error> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(std::io::stderr)
        .init();
    let args = Args::parse();

    match run(&args, &mut std::io::stdout()).await {
        Ok(()) => Ok(ExitCode::SUCCESS),
        Err(StatsError::Connection(e)) => {
            error!("failed to connect to MongoDB: {e}");
            Ok(ExitCode::FAILURE)
        }
        Err(StatsError::Operation(e)) => {
            error!("error while accessing the MongoDB collection: {e}");
            Ok(ExitCode::FAILURE)
        }
        Err(StatsError::Fatal(e)) => Err(e),
    }
}

async fn run<W: Write>(args: &Args, out: &mut W) -> Result<(), StatsError> {
    info!("connecting to MongoDB at {}", args.db_uri);
    let client = db::connect(&args.db_uri).await?;

    // Capture the outcome so the client is shut down exactly once whether
    // the report succeeded or not.
    let outcome = report(&client, out).await;
    client.shutdown().await;
    info!("closed MongoDB connection");
    outcome
}

async fn report<W: Write>(client: &Client, out: &mut W) -> Result<(), StatsError> {
    db::ping(client).await?;
    let logs = db::nginx_collection(client);
    let stats = NginxStats::gather(&logs).await?;
    stats.write_report(out)?;
    Ok(())
}
