use clap::Parser;
use colored::*;
use std::process;

use medimate::cli::Args;
use medimate::config::Config;
use medimate::{logging, server};

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();
    logging::init();

    let args = Args::parse();

    let config = match Config::from_env_and_args(&args) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("{} {}", "Error:".red(), e);
            process::exit(1);
        }
    };

    if let Err(e) = server::run(config).await {
        eprintln!("{} {}", "Error:".red(), e);
        process::exit(1);
    }
}
