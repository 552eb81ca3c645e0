use std::path::PathBuf;

use clap::Parser;

use crate::navigation::Route;

/// Terminal chat and internal-data Q&A client with suggested prompts
#[derive(Debug, Parser)]
#[command(name = "qadesk", version, about)]
pub struct Args {
    /// Config file (default: ~/.config/qadesk/config.toml)
    #[arg(short, long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Route to open at start-up, e.g. "/" or "/qa"
    #[arg(short, long, value_name = "ROUTE")]
    pub route: Option<Route>,

    /// Print the suggestion catalog and exit
    #[arg(long)]
    pub list_suggestions: bool,

    /// Print every submitted query as a JSON line on exit
    #[arg(long)]
    pub print_transcript: bool,
}
