// STU: SESv2 Template Utility
// Copyright (c) 2024 STU Core Team

use clap::Parser;
use stu::{
    error::Result,
    export,
    gateway::SesTemplateStore,
};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

mod cli;
use cli::{Cli, Commands};

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    init_logging(&cli);

    if let Err(e) = run(cli).await {
        tracing::error!("Error: {}", e);
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

/// Initialize logging based on verbosity level
/// - 0: errors only
/// - 1 (-v): stu info logs
/// - 2 (-vv): stu debug logs
/// - 3+ (-vvv): everything, including SDK internals
fn init_logging(cli: &Cli) {
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(log_filter(cli.verbose)));

    let fmt_layer = tracing_subscriber::fmt::layer()
        .with_target(true)
        .with_writer(std::io::stderr);

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt_layer)
        .init();
}

/// Map a `-v` count onto a tracing filter directive.
fn log_filter(verbose: u8) -> &'static str {
    match verbose {
        0 => "error",
        1 => "stu=info",
        2 => "stu=debug",
        _ => "stu=trace,debug",
    }
}

/// Run the CLI command
async fn run(cli: Cli) -> Result<()> {
    let config = cli.to_config();
    config.validate()?;

    let store = SesTemplateStore::connect(&config.gateway).await;

    match &cli.command {
        Commands::List => {
            let table = export::list(&store).await?;
            print!("{}", table);
        }
        Commands::Get { name } => {
            let content = export::get(&store, name).await?;
            println!("{}", content);
        }
        Commands::Pull { dir, .. } => {
            export::pull(&store, &config.pull, dir).await?;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_verbosity_tiers() {
        assert_eq!(log_filter(0), "error");
        assert_eq!(log_filter(1), "stu=info");
        assert_eq!(log_filter(2), "stu=debug");
        assert_eq!(log_filter(3), "stu=trace,debug");
    }
}
