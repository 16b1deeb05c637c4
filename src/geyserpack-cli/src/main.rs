mod cli;
mod commands;
mod config;

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use cli::*;

fn main() -> Result<()> {
    let cli = Cli::parse();

    init_tracing(cli.verbose);

    match cli.command {
        Commands::Build(args) => {
            commands::build::handle(args)?;
        }

        Commands::Import { source } => {
            commands::import::handle(&source)?;
        }

        Commands::Configure {
            output_dir,
            pack_name,
            pack_description,
            regenerate_source_pack,
            show,
        } => {
            commands::configure::handle(
                commands::configure::Changes {
                    output_dir,
                    pack_name,
                    pack_description,
                    regenerate_source_pack,
                },
                show,
            )?;
        }
    }

    Ok(())
}

fn init_tracing(verbose: u8) {
    let default_filter = match verbose {
        0 => "geyserpack=info",
        1 => "geyserpack=debug",
        _ => "geyserpack=trace",
    };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| default_filter.into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}
