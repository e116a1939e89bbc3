use clap::{Args, Parser, Subcommand};
use compass_core::llm_config::LlmConfig;
use std::net::IpAddr;

#[derive(Debug, Parser)]
#[command(name = "compass-server", about = "Serve the platform maturity assessment API")]
pub(crate) struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub(crate) enum Commands {
    Run(Run),
}

#[derive(Debug, Clone, Args)]
#[group(multiple = true, required = false)]
pub(crate) struct LlmServiceArgs {
    #[arg(long, env = "OPENAI_API_KEY", hide_env_values = true)]
    pub(crate) openai_key: Option<String>,

    #[arg(long, help = "Override the completion API base url")]
    pub(crate) openai_api_base: Option<String>,

    #[arg(long, help = "Model used to generate assessments")]
    pub(crate) assessment_model: Option<String>,
}

impl From<LlmServiceArgs> for LlmConfig {
    fn from(args: LlmServiceArgs) -> Self {
        LlmConfig::new(args.openai_key, args.openai_api_base, args.assessment_model)
    }
}

#[derive(Debug, Clone, Parser)]
pub(crate) struct Run {
    #[arg(long)]
    pub(crate) host: Option<IpAddr>,

    #[arg(short, long)]
    pub(crate) port: Option<u16>,

    #[arg(long, help = "Allowed CORS origins; every origin is allowed when empty")]
    pub(crate) origins: Vec<String>,

    #[command(flatten)]
    pub(crate) llm: LlmServiceArgs,
}
