//! Command implementations for the city indicator CLI.
//!
//! Provides subcommands to list the indicator catalog, summarize or describe
//! a single indicator, and run a full render pass to disk.

use clap::{Args, Subcommand};
use std::path::PathBuf;

pub mod inspect;
pub mod render;
pub mod setup;

/// Location of the indicator CSV directory.
#[derive(Args, Debug, Clone)]
pub struct DataArgs {
    /// Directory of indicator CSV files (one file per indicator)
    #[arg(short = 'd', long, default_value = "fixtures/data")]
    pub data_dir: PathBuf,
}

/// Static tables loaded once at startup.
#[derive(Args, Debug, Clone)]
pub struct StaticArgs {
    /// Kepler.gl visual configuration JSON
    #[arg(short = 'c', long, default_value = "fixtures/kepler.gl.json")]
    pub config: PathBuf,

    /// Indicator description table JSON
    #[arg(long, default_value = "fixtures/descriptions.json")]
    pub descriptions: PathBuf,

    /// Explicit indicator-name to map-layer-id table JSON.
    /// Without it, each indicator's own name is its layer id.
    #[arg(long)]
    pub layer_ids: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Command {
    /// List discovered indicators in catalog order
    List {
        #[command(flatten)]
        data: DataArgs,
    },

    /// Print highest, lowest and average values for one indicator
    Summarize {
        #[command(flatten)]
        data: DataArgs,

        /// Indicator name, e.g. "Total Number of MSME Clusters in the City (2020-21)"
        indicator: String,
    },

    /// Print the static description for one indicator
    Describe {
        /// Indicator description table JSON
        #[arg(long, default_value = "fixtures/descriptions.json")]
        descriptions: PathBuf,

        /// Indicator name; any "(year)" suffix is ignored for the lookup
        indicator: String,
    },

    /// Render map payload, charts and report for the selected indicators
    Render {
        #[command(flatten)]
        data: DataArgs,

        #[command(flatten)]
        statics: StaticArgs,

        /// Indicator to select (repeatable)
        #[arg(short = 's', long = "select")]
        select: Vec<String>,

        /// Select every discovered indicator
        #[arg(long, conflicts_with = "select")]
        all: bool,

        /// Output directory for map.json, charts/ and report.txt
        #[arg(short = 'o', long, default_value = "out")]
        out_dir: PathBuf,
    },
}

pub fn run(command: Command) -> anyhow::Result<()> {
    match command {
        Command::List { data } => inspect::run_list(&data),
        Command::Summarize { data, indicator } => inspect::run_summarize(&data, &indicator),
        Command::Describe {
            descriptions,
            indicator,
        } => inspect::run_describe(&descriptions, &indicator),
        Command::Render {
            data,
            statics,
            select,
            all,
            out_dir,
        } => render::run_render(&data, &statics, &select, all, &out_dir),
    }
}
