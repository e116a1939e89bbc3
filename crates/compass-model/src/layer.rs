use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// One of the four fixed thematic categories grouping questions and
/// sub-scores. The wire representation uses the camelCase identifiers the
/// assessment contract was defined with.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash, ToSchema)]
#[serde(rename_all = "camelCase")]
pub enum Layer {
    PlatformServices,
    CloudGovernance,
    PortfolioArchitecture,
    ProductExecution,
}

impl Layer {
    pub const ALL: [Layer; 4] = [
        Layer::PlatformServices,
        Layer::CloudGovernance,
        Layer::PortfolioArchitecture,
        Layer::ProductExecution,
    ];

    #[must_use]
    pub fn label(&self) -> &'static str {
        match self {
            Self::PlatformServices => "Platform Services",
            Self::CloudGovernance => "Cloud Governance",
            Self::PortfolioArchitecture => "Portfolio Architecture",
            Self::ProductExecution => "Product & Client Execution",
        }
    }
}
