use anyhow::Result;
use clap::Parser;

use income_entry_cli::{
    cli::{args::Args, commands::CliApp},
    utils::Config,
};

fn main() -> Result<()> {
    let args = Args::parse();

    let config = Config::from_env().map_err(|e| {
        eprintln!("Failed to load configuration: {}", e);
        e
    })?;

    let filter = if args.verbose {
        tracing_subscriber::EnvFilter::new("debug")
    } else {
        tracing_subscriber::EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(config.log_level.clone()))
    };
    tracing_subscriber::fmt().with_env_filter(filter).init();

    if config.no_color {
        console::set_colors_enabled(false);
    }

    tracing::debug!(
        "Config: successfully loaded for {} environment",
        config.environment
    );
    tracing::info!("Income entry CLI starting");

    let app = CliApp::new(config);
    app.run(args)?;

    tracing::info!("Income entry CLI stopped");
    Ok(())
}
