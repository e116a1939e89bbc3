use crate::app::create_app;
use crate::opt::{Cli, Commands, Run};
use anyhow::Result;
use axum::serve;
use clap::Parser;
use compass_config::catalog::{self, Catalog};
use compass_core::analysis::{GenerateAssessment, LlmAnalyst};
use compass_core::llm_config::LlmConfig;
use std::net::{IpAddr, Ipv4Addr};
use std::sync::Arc;

mod app;
mod logging;
mod net;
mod opt;
mod routes;

const DEFAULT_HOST: IpAddr = IpAddr::V4(Ipv4Addr::LOCALHOST);
const DEFAULT_PORT: u16 = 3030;

pub(crate) struct InnerAppConfig {
    catalog: Catalog,
    analyst: Arc<dyn GenerateAssessment>,
}

/// Process-wide, read-only configuration shared by every request.
#[derive(Clone)]
pub(crate) struct AppConfig(Arc<InnerAppConfig>);

impl AppConfig {
    pub(crate) fn new(catalog: Catalog, analyst: Arc<dyn GenerateAssessment>) -> Self {
        Self(Arc::new(InnerAppConfig { catalog, analyst }))
    }

    pub(crate) fn catalog(&self) -> &Catalog {
        &self.0.catalog
    }

    pub(crate) fn analyst(&self) -> &dyn GenerateAssessment {
        self.0.analyst.as_ref()
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    match cli.command {
        Commands::Run(opt) => run(opt).await,
    }
}

async fn run(opt: Run) -> Result<()> {
    logging::setup()?;

    let llm_config = LlmConfig::from(opt.llm.clone());
    let catalog = catalog::default_catalog().clone();
    let analyst: Arc<dyn GenerateAssessment> = Arc::new(LlmAnalyst::new(llm_config, catalog.clone()));
    let app_config = AppConfig::new(catalog, analyst);

    let app = create_app(app_config, opt.origins.clone())?;
    let listener = net::create_listener((opt.host, opt.port), (DEFAULT_HOST, DEFAULT_PORT)).await?;
    tracing::info!(address = %listener.local_addr()?, "assessment relay listening");
    serve(listener, app).await?;
    Ok(())
}
