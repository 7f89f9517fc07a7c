use clap::Parser;
use echopulse::cli::handlers::*;
use echopulse::cli::Cli;
use echopulse::cli::Commands;
use echopulse::AppConfig;
use echopulse::Result;
use tracing::info;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Load configuration
    let config = match &cli.config {
        Some(path) => AppConfig::from_file(path)?,
        None => AppConfig::load()?,
    };

    // Initialize logging
    if cli.verbose {
        echopulse::logging::init_logging_with_level("debug")?;
    } else {
        echopulse::logging::init_logging_with_config(Some(&config))?;
    }
    info!("Configuration loaded successfully");

    // Execute the requested command
    match cli.command {
        Commands::Summarize { input } => handle_summarize_command(&config, &input)?,
        Commands::Analyze { input, json } => handle_analyze_command(&config, &input, json)?,
        Commands::ParseUrl { url, platform } => handle_parse_url_command(&url, platform)?,
        Commands::Serve { host, port, cors } => {
            let host = host.unwrap_or_else(|| config.server.host.clone());
            let port = port.unwrap_or(config.server.port);
            let cors = cors || config.server.enable_cors;
            echopulse::api::serve_api(&config, host, port, cors).await?;
        }
        Commands::Config => handle_config_command(&config)?,
    }

    Ok(())
}
