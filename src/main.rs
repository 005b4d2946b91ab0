//! Lineconf CLI entry point.

use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use lineconf::cli::{commands, Cli, Commands};

fn main() {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();

    let result = match &cli.command {
        Commands::Get { key, default } => {
            commands::get::execute(&cli.file, key, default.as_deref())
        }
        Commands::Set { key, value } => commands::set::execute(&cli.file, key, value),
        Commands::Remove { key } => commands::remove::execute(&cli.file, key),
        Commands::List { plain, json } => commands::list::execute(&cli.file, *plain, *json),
        Commands::Cat { json } => commands::cat::execute(&cli.file, *json),
    };

    if let Err(err) = result {
        eprintln!("error: {err:#}");
        std::process::exit(1);
    }
}
