//! Core CLI definitions

use clap::{ArgAction, Parser, Subcommand};
use std::path::PathBuf;

use super::build::BuildArgs;

#[derive(Parser)]
#[command(name = "geyserpack")]
#[command(about = "Oraxen to Bedrock/Geyser pack generator", long_about = None)]
pub struct Cli {
    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Generate the resource pack, Geyser mappings and Oraxen items
    #[command(visible_alias = "b")]
    Build(BuildArgs),

    /// List what an Oraxen plugin directory would import
    #[command(visible_alias = "i")]
    Import {
        /// Oraxen plugin directory (containing items/ and pack/textures/)
        source: PathBuf,
    },

    /// Configure default settings
    #[command(visible_alias = "c")]
    Configure {
        /// Default output directory
        #[arg(long)]
        output_dir: Option<PathBuf>,

        /// Resource pack name written to manifest.json
        #[arg(long)]
        pack_name: Option<String>,

        /// Resource pack description written to manifest.json
        #[arg(long)]
        pack_description: Option<String>,

        /// Regenerate the Oraxen source pack on every build
        #[arg(long)]
        regenerate_source_pack: Option<bool>,

        /// Show current configuration
        #[arg(long)]
        show: bool,
    },
}
