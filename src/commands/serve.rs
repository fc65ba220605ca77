use crate::config::GeneratorConfig;
use crate::{Result, server};
use colored::*;
use std::net::SocketAddr;

pub async fn execute_serve(config: GeneratorConfig, port: u16) -> Result<()> {
    println!("{}", "Starting web server...".bright_blue());
    println!("  Output directory: {}", config.output_dir.display());
    if let Some(ref url) = config.spec_url {
        println!("  Default spec: {}", url);
    }
    println!("  Port: {}", port);
    println!();

    let addr = SocketAddr::from(([127, 0, 0, 1], port));
    server::start_server(addr, config).await?;

    Ok(())
}
