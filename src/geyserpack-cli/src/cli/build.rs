//! Build command CLI definitions

use clap::Args;
use std::path::PathBuf;

#[derive(Args)]
pub struct BuildArgs {
    /// YAML file listing manually defined entries (repeatable)
    #[arg(short, long = "entries", value_name = "FILE")]
    pub entries: Vec<PathBuf>,

    /// Oraxen plugin directory to import entries from (repeatable)
    #[arg(short, long = "import", value_name = "DIR")]
    pub import: Vec<PathBuf>,

    /// Output directory (uses configured default, then the current directory)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Also write the Oraxen source pack
    #[arg(long, conflicts_with = "skip_source_pack")]
    pub source_pack: bool,

    /// Never write the Oraxen source pack, even if configured to
    #[arg(long)]
    pub skip_source_pack: bool,

    /// Drop the entry at this position in the collected list (repeatable)
    #[arg(short = 'x', long = "exclude", value_name = "INDEX")]
    pub exclude: Vec<usize>,

    /// Override the manifest pack name
    #[arg(long)]
    pub name: Option<String>,

    /// Override the manifest pack description
    #[arg(long)]
    pub description: Option<String>,
}
