use clap::Parser;
use derive_getters::Getters;

#[derive(Parser, Debug, Getters)]
#[command(name = "log-seeder")]
#[command(about = "Seed the logs.nginx collection with fake nginx logs", long_about = None)]
pub struct CliArgs {
    #[arg(long = "db_uri", default_value = "mongodb://127.0.0.1:27017")]
    db_uri: String,

    #[arg(long, default_value_t = 1000)]
    count: u64,

    #[arg(long, default_value_t = 100)]
    batch_size: usize,
}
