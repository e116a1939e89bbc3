use clap::{Parser, Subcommand};
use url::Url;

#[derive(Debug, Parser)]
#[command(name = "compass", about = "Take the platform maturity assessment from the terminal")]
pub(crate) struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub(crate) enum Commands {
    Run(Run),
}

#[derive(Debug, Clone, Parser)]
pub(crate) struct Run {
    #[arg(
        short,
        long,
        default_value = "http://localhost:3030/",
        help = "Base url of the assessment relay"
    )]
    pub(crate) server_url: Url,

    #[arg(long, help = "Log client activity to the terminal")]
    pub(crate) debug: bool,
}
