use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "medimate")]
#[command(about = "Symptom-triage chat relay over the Gemini API", long_about = None)]
pub struct Args {
    #[arg(long = "host", help = "Address to bind the HTTP server to")]
    pub host: Option<String>,

    #[arg(short = 'p', long = "port", help = "Port to bind the HTTP server to")]
    pub port: Option<u16>,

    #[arg(
        long = "reports-dir",
        help = "Directory for generated summary reports"
    )]
    pub reports_dir: Option<PathBuf>,

    #[arg(
        long = "sessions-dir",
        help = "Directory for persisted session histories"
    )]
    pub sessions_dir: Option<PathBuf>,

    #[arg(
        long = "api-endpoint",
        help = "Custom model API base URL (e.g., https://generativelanguage.googleapis.com/v1beta/models)"
    )]
    pub api_endpoint: Option<String>,
}
