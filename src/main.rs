use clap::Parser;
use k6gen::{
    Result,
    cli::{Cli, Commands},
    commands::{self, GenerateCommandArgs},
    config::GeneratorConfig,
    logging,
};

#[tokio::main]
async fn main() -> Result<()> {
    dotenv::dotenv().ok();
    logging::init_logging();

    let cli = Cli::parse();
    let config = GeneratorConfig::from_env();

    match cli.command {
        Commands::Generate {
            spec,
            token,
            base_url,
            company,
            vus,
            duration,
            group,
            output_dir,
            stdout,
        } => {
            let mut settings = config.settings.clone();
            if let Some(token) = token {
                settings.token = token;
            }
            if let Some(base_url) = base_url {
                settings.base_url = base_url;
            }
            if let Some(company) = company {
                settings.company = company;
            }
            if let Some(vus) = vus {
                settings.vus = vus;
            }
            if let Some(duration) = duration {
                settings.duration = duration;
            }
            if group.is_some() {
                settings.default_group = group;
            }

            let output_dir = output_dir.unwrap_or_else(|| config.output_dir.clone());

            commands::execute_generate(GenerateCommandArgs {
                spec: spec.as_deref().or(config.spec_url.as_deref()),
                settings,
                output_dir: &output_dir,
                to_stdout: stdout,
            })
            .await?;
        }
        Commands::List { spec } => {
            commands::execute_list(spec.as_deref().or(config.spec_url.as_deref())).await?;
        }
        Commands::Serve { port } => {
            commands::execute_serve(config, port).await?;
        }
    }

    Ok(())
}
