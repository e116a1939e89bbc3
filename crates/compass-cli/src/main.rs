use crate::opt::Cli;
use anyhow::Result;
use clap::Parser;

mod cli;
mod logging;
mod opt;

#[tokio::main]
async fn main() -> Result<()> {
    let options = Cli::parse();
    cli::exec(options.command).await
}
