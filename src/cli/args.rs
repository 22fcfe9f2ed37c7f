use std::path::PathBuf;

use clap::Parser;

/// Command-line arguments for `item_picker_cli`.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "item_picker_cli",
    version,
    about = "Browse, search, and select transaction items from a catalog file"
)]
pub struct CliArgs {
    /// JSON catalog with `groups` and `items`.
    pub catalog: PathBuf,

    /// Initially selected item ids, comma separated.
    #[arg(long, value_delimiter = ',')]
    pub selected: Vec<String>,

    /// Edit a private copy of the selection instead of mirroring `--selected`.
    #[arg(long)]
    pub editable: bool,

    /// Initial search text.
    #[arg(long)]
    pub search: Option<String>,

    /// Configuration file; defaults to the platform config directory.
    #[arg(long, env = "ITEM_PICKER_CONFIG")]
    pub config: Option<PathBuf>,
}
