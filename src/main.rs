use clap::Parser;
use env_logger::Env;

use horizon_client::cli::{self, Cli};

#[tokio::main]
async fn main() {
    env_logger::init_from_env(Env::default().default_filter_or("info"));
    dotenv::dotenv().ok();

    let cli = Cli::parse();
    if let Err(err) = cli::run(cli).await {
        eprintln!("Error: {}", err);
        std::process::exit(1);
    }
}
