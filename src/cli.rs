use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "k6gen")]
#[command(version)]
#[command(about = "Generate k6 load-test scripts from OpenAPI documents", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Generate a k6 script covering every operation of an OpenAPI document
    Generate {
        /// OpenAPI document URL or file path (defaults to K6GEN_SPEC_URL)
        #[arg(short, long)]
        spec: Option<String>,

        /// Bearer token for the Authorization header (defaults to K6GEN_TOKEN)
        #[arg(short, long)]
        token: Option<String>,

        /// Base URL for API requests
        #[arg(long)]
        base_url: Option<String>,

        /// Value substituted for {company} path placeholders
        #[arg(short, long)]
        company: Option<String>,

        /// Number of virtual users
        #[arg(long)]
        vus: Option<u32>,

        /// Duration of the test (e.g., "30s", "5m")
        #[arg(long)]
        duration: Option<String>,

        /// Group to run when GROUP_NAME is not set at run time
        #[arg(short, long)]
        group: Option<String>,

        /// Output directory (defaults to ~/Documents/scripts)
        #[arg(short = 'O', long)]
        output_dir: Option<PathBuf>,

        /// Print the script to stdout instead of writing a file
        #[arg(long)]
        stdout: bool,
    },

    /// List operations of an OpenAPI document grouped by tag
    List {
        /// OpenAPI document URL or file path (defaults to K6GEN_SPEC_URL)
        #[arg(short, long)]
        spec: Option<String>,
    },

    /// Start an HTTP server that generates scripts on request
    Serve {
        /// Port number
        #[arg(short, long, default_value = "8080")]
        port: u16,
    },
}
