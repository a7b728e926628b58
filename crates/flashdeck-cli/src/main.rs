//! CLI entry point.

use std::process::ExitCode;

use clap::Parser;

use flashdeck_cli::{Cli, CliError, Commands, bootstrap, handlers, init_logging};

#[tokio::main]
async fn main() -> ExitCode {
    // Load environment variables before clap reads FLASHDECK_* defaults
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    init_logging(cli.verbose);

    match run(&cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e:#}");
            ExitCode::from(e.downcast_ref::<CliError>().map_or(1, CliError::exit_code))
        }
    }
}

async fn run(cli: &Cli) -> anyhow::Result<()> {
    match &cli.command {
        Commands::Study { cards, seed } => {
            let ctx = bootstrap(cli)?;
            handlers::study::execute(&ctx, cards, *seed).await?;
        }
        Commands::Stats { cards } => {
            handlers::stats::execute(cards).await?;
        }
        Commands::Reset => {
            let ctx = bootstrap(cli)?;
            handlers::reset::execute(ctx.store.as_ref(), &ctx.record_path)?;
        }
        Commands::Paths => {
            handlers::paths::execute(cli.config.as_deref())?;
        }
    }
    Ok(())
}
