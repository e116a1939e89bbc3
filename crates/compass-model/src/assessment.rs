use crate::band::MaturityBand;
use crate::layer::Layer;
use crate::responses::ResponseSet;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Body of `POST /api/assess`.
#[derive(Serialize, Deserialize, Debug, Clone, ToSchema)]
pub struct AssessRequest {
    pub responses: ResponseSet,
}

/// The structured result returned by the scoring service for one
/// [`ResponseSet`]. Optional fields were introduced by later revisions of
/// the contract; consumers fall back to rendering without them.
#[derive(Serialize, Deserialize, Debug, Clone, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Assessment {
    pub overall_score: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub maturity_statement: Option<String>,
    pub layer_scores: IndexMap<Layer, f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub layer_analysis: Option<IndexMap<Layer, LayerAnalysis>>,
    pub recommendations: Vec<Recommendation>,
    pub executive_summary: String,
}

impl Assessment {
    #[must_use]
    pub fn band(&self) -> MaturityBand {
        MaturityBand::from_score(self.overall_score)
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, ToSchema)]
pub struct LayerAnalysis {
    pub signal: String,
    pub risk: String,
    pub impact: String,
}

#[derive(Serialize, Deserialize, Debug, Clone, ToSchema)]
pub struct Recommendation {
    pub title: String,
    #[serde(flatten)]
    pub details: RecommendationDetails,
}

/// The contract grew from a two-field to a three-field recommendation
/// shape; both are still on the wire. The variant is resolved once when an
/// [`Assessment`] is deserialized, not re-sniffed per render site.
#[derive(Serialize, Deserialize, Debug, Clone, ToSchema)]
#[serde(untagged)]
pub enum RecommendationDetails {
    #[serde(rename_all = "camelCase")]
    Expanded {
        strategic_action: String,
        risk_of_inaction: String,
        expected_outcome: String,
    },
    Legacy {
        description: String,
        impact: String,
    },
}
