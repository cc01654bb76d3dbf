use clap::Parser;
use pilefix::cli;
use tracing_subscriber::EnvFilter;

fn main() -> anyhow::Result<()> {
    let cli = cli::Cli::parse();

    // Initialize logging based on verbosity flag
    let filter = if cli.verbose {
        EnvFilter::new("pilefix=debug,info")
    } else {
        EnvFilter::new("pilefix=warn")
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .without_time()
        .with_writer(std::io::stderr)
        .init();

    match cli.command {
        cli::Commands::Piles(args) => {
            cli::piles::run(args, cli.format, cli.verbose)?;
        }
        cli::Commands::Extend(args) => {
            cli::extend::run(args, cli.format, cli.verbose)?;
        }
        cli::Commands::Link(args) => {
            cli::link::run(args, cli.format, cli.verbose)?;
        }
    }

    Ok(())
}
