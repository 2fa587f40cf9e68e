//! DeCODE CLI - Command line tool for the Indian city economic indicator dashboard.

use clap::Parser;

#[derive(Parser)]
#[command(
    name = "decode-cli",
    version,
    about = "Insights on Economic Trends in Indian Cities"
)]
struct Cli {
    #[command(subcommand)]
    command: decode_cmd::Command,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let cli = Cli::parse();
    log::debug!("decode-cli {}", env!("CARGO_PKG_VERSION"));
    decode_cmd::run(cli.command)
}
