mod args;
mod generator;

use args::CliArgs;
use clap::Parser;
use generator::{LogRecord, generate_log_record};
use mongodb::Client;
use rand::{SeedableRng, rngs::StdRng};

#[tokio::main(flavor = "multi_thread")]
async fn main() -> mongodb::error::Result<()> {
    let args = CliArgs::parse();
    println!(
        "Seeding {} nginx log documents into {}",
        args.count(),
        args.db_uri()
    );

    let client = Client::with_uri_str(args.db_uri()).await?;
    let logs = client.database("logs").collection::<LogRecord>("nginx");

    let mut rng = StdRng::from_os_rng();
    let mut remaining = *args.count();
    while remaining > 0 {
        let batch_len = remaining.min(*args.batch_size() as u64) as usize;
        let batch: Vec<LogRecord> = (0..batch_len)
            .map(|_| generate_log_record(&mut rng))
            .collect();
        logs.insert_many(batch).await?;
        remaining -= batch_len as u64;
    }

    println!("Inserted {} documents into logs.nginx", args.count());
    client.shutdown().await;
    Ok(())
}
