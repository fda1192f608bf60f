use std::path::PathBuf;

use clap::{ArgAction, Args, Parser, Subcommand};
use tutorial_utils::DatasetOptions;

#[derive(Clone, Debug, Parser)]
#[command(name = "tutorial-utils", version = env!("CARGO_PKG_VERSION"), about, long_about = None, propagate_version = true)]
pub struct App {
    /// Increase log verbosity (-v debug, -vv trace).
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub cmd: Commands,
}

#[derive(Clone, Debug, Subcommand)]
pub enum Commands {
    #[command(
        alias = "rsoxs",
        name = "rsoxs-simulation-data",
        about = "Download and extract the RSoXS simulation dataset"
    )]
    RsoxsSimulationData(FetchArg),
}

#[derive(Clone, Debug, Args)]
pub struct FetchArg {
    /// Destination directory, relative to --path.
    #[arg(long)]
    pub dest: Option<PathBuf>,

    /// Working directory [default: current directory].
    #[arg(long, env = "TUTORIAL_DATA_PATH")]
    pub path: Option<PathBuf>,

    /// Directory for the downloaded archive [default: current directory].
    #[arg(long, env = "TUTORIAL_CACHE_PATH")]
    pub cache_path: Option<PathBuf>,
}

impl From<FetchArg> for DatasetOptions {
    fn from(arg: FetchArg) -> Self {
        DatasetOptions {
            dest: arg.dest,
            path: arg.path,
            cache_path: arg.cache_path,
        }
    }
}
