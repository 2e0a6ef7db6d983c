use clap::Parser;
use miette::Result;
use simpleyaml::cli::{Cli, Commands};
use simpleyaml::discovery::load_manifest;
use simpleyaml::output::Printer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn main() -> Result<()> {
    let cli = Cli::parse();

    let default_filter = if cli.verbose {
        "simpleyaml=debug"
    } else {
        "simpleyaml=warn"
    };
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| default_filter.into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let manifest = load_manifest(cli.config.as_deref())?;
    let printer = Printer::new();

    match cli.command {
        Commands::Get(args) => simpleyaml::cli::get::run(args, &manifest)?,
        Commands::Paths(args) => simpleyaml::cli::paths::run(args, &manifest)?,
        Commands::Check(args) => simpleyaml::cli::check::run(args, &manifest, &printer)?,
        Commands::Completions(args) => simpleyaml::cli::completions::run(args)?,
    }

    Ok(())
}
