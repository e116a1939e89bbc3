use crate::analysis::error::AnalysisError;
use crate::llm_config::LlmConfig;
use crate::openai::schema::SchemaField;
use crate::openai::{CallConfig, FunctionResponse, call_function};
use async_openai::types::{
    ChatCompletionRequestMessage, ChatCompletionRequestSystemMessage, ChatCompletionRequestSystemMessageContent,
    ChatCompletionRequestUserMessage, ChatCompletionRequestUserMessageContent,
};
use async_trait::async_trait;
use compass_config::catalog::Catalog;
use compass_model::assessment::{Assessment, LayerAnalysis, Recommendation, RecommendationDetails};
use compass_model::layer::Layer;
use compass_model::responses::ResponseSet;
use indexmap::IndexMap;
use serde::Deserialize;
use std::collections::HashMap;
use std::time::Duration;

pub mod error;

pub const RECOMMENDATION_COUNT: usize = 3;

const SYSTEM_PROMPT: &str = "You are a platform maturity assessment expert. Analyze the questionnaire \
responses and assess the organization's platform engineering maturity.\n\n\
Each response is scored from 1-5, where:\n\
1 = Ad-hoc/None\n\
2 = Basic/Minimal\n\
3 = Developing/Partial\n\
4 = Mature/Established\n\
5 = Optimized/Leading\n\n\
Score the overall result and every layer on the same 1-5 scale, with one decimal of precision. \
Provide exactly 3 recommendations, prioritized by potential impact, and a 2-3 sentence executive \
summary. Record the assessment by calling the function provided.";

/// Seam between the relay and the model-backed analysis, so handlers can
/// be exercised against a fake.
#[async_trait]
pub trait GenerateAssessment: Send + Sync {
    async fn generate(&self, responses: &ResponseSet) -> Result<Assessment, AnalysisError>;
}

/// The production analyst: renders the answers into a prompt, makes one
/// completion call with a forced function call, and checks the reply
/// against the assessment contract before handing it on.
pub struct LlmAnalyst {
    llm_config: LlmConfig,
    catalog: Catalog,
}

impl LlmAnalyst {
    #[must_use]
    pub fn new(llm_config: LlmConfig, catalog: Catalog) -> Self {
        Self { llm_config, catalog }
    }
}

#[async_trait]
impl GenerateAssessment for LlmAnalyst {
    async fn generate(&self, responses: &ResponseSet) -> Result<Assessment, AnalysisError> {
        if !self.llm_config.has_key() {
            return Err(AnalysisError::MissingCredential);
        }

        let messages = vec![
            ChatCompletionRequestMessage::System(ChatCompletionRequestSystemMessage {
                content: ChatCompletionRequestSystemMessageContent::Text(SYSTEM_PROMPT.to_owned()),
                name: None,
            }),
            ChatCompletionRequestMessage::User(ChatCompletionRequestUserMessage {
                content: ChatCompletionRequestUserMessageContent::Text(build_user_prompt(&self.catalog, responses)?),
                name: None,
            }),
        ];

        let reply: AssessmentReply = call_function(
            self.llm_config.openai_config(),
            self.llm_config.assessment_model(),
            CallConfig::builder()
                .total_timeout(Duration::from_secs(120))
                .request_timeout(Duration::from_secs(30))
                .temperature(Some(0.7))
                .build(),
            messages,
        )
        .await?;

        reply.into_assessment()
    }
}

fn build_user_prompt(catalog: &Catalog, responses: &ResponseSet) -> Result<String, AnalysisError> {
    let mut prompt = String::from("Here are the questionnaire responses:\n");
    for (number, question) in catalog.questions().enumerate() {
        let answer = responses
            .get(question.id)
            .ok_or_else(|| AnalysisError::MissingAnswer(question.id.to_owned()))?;
        prompt.push_str(&format!(
            "\n{}. {} ({}): {}/{}\n",
            number + 1,
            question.prompt,
            question.layer.label(),
            answer,
            question.scale.max,
        ));
    }
    prompt.push_str("\nAnalyze these responses and provide a detailed maturity assessment.");
    Ok(prompt)
}

fn layer_field(layer: Layer) -> &'static str {
    match layer {
        Layer::PlatformServices => "platformServices",
        Layer::CloudGovernance => "cloudGovernance",
        Layer::PortfolioArchitecture => "portfolioArchitecture",
        Layer::ProductExecution => "productExecution",
    }
}

/// The function-call payload the assistant fills in. Kept separate from
/// the wire [`Assessment`] so the contract checks happen in one place.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct AssessmentReply {
    overall_score: f64,
    #[serde(default)]
    maturity_statement: Option<String>,
    layer_scores: LayerScoresReply,
    #[serde(default)]
    layer_analysis: Option<LayerAnalysisReply>,
    recommendations: Vec<RecommendationReply>,
    executive_summary: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct LayerScoresReply {
    platform_services: f64,
    cloud_governance: f64,
    portfolio_architecture: f64,
    product_execution: f64,
}

impl LayerScoresReply {
    fn get(&self, layer: Layer) -> f64 {
        match layer {
            Layer::PlatformServices => self.platform_services,
            Layer::CloudGovernance => self.cloud_governance,
            Layer::PortfolioArchitecture => self.portfolio_architecture,
            Layer::ProductExecution => self.product_execution,
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct LayerAnalysisReply {
    platform_services: AnalysisEntry,
    cloud_governance: AnalysisEntry,
    portfolio_architecture: AnalysisEntry,
    product_execution: AnalysisEntry,
}

impl LayerAnalysisReply {
    fn clone_entry(&self, layer: Layer) -> AnalysisEntry {
        match layer {
            Layer::PlatformServices => self.platform_services.clone(),
            Layer::CloudGovernance => self.cloud_governance.clone(),
            Layer::PortfolioArchitecture => self.portfolio_architecture.clone(),
            Layer::ProductExecution => self.product_execution.clone(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
struct AnalysisEntry {
    signal: String,
    risk: String,
    impact: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RecommendationReply {
    title: String,
    strategic_action: String,
    risk_of_inaction: String,
    expected_outcome: String,
}

fn check_score(field: &'static str, value: f64) -> Result<f64, AnalysisError> {
    if (1.0..=5.0).contains(&value) {
        Ok(value)
    } else {
        Err(AnalysisError::ScoreOutOfRange { field, value })
    }
}

impl AssessmentReply {
    fn into_assessment(self) -> Result<Assessment, AnalysisError> {
        let overall_score = check_score("overallScore", self.overall_score)?;

        let mut layer_scores = IndexMap::with_capacity(Layer::ALL.len());
        for layer in Layer::ALL {
            layer_scores.insert(layer, check_score(layer_field(layer), self.layer_scores.get(layer))?);
        }

        if self.recommendations.len() != RECOMMENDATION_COUNT {
            return Err(AnalysisError::RecommendationCount(self.recommendations.len()));
        }

        let layer_analysis = self.layer_analysis.map(|analysis| {
            let mut entries = IndexMap::with_capacity(Layer::ALL.len());
            for layer in Layer::ALL {
                let entry = analysis.clone_entry(layer);
                entries.insert(
                    layer,
                    LayerAnalysis {
                        signal: entry.signal,
                        risk: entry.risk,
                        impact: entry.impact,
                    },
                );
            }
            entries
        });

        let recommendations = self
            .recommendations
            .into_iter()
            .map(|rec| Recommendation {
                title: rec.title,
                details: RecommendationDetails::Expanded {
                    strategic_action: rec.strategic_action,
                    risk_of_inaction: rec.risk_of_inaction,
                    expected_outcome: rec.expected_outcome,
                },
            })
            .collect();

        Ok(Assessment {
            overall_score,
            maturity_statement: self.maturity_statement,
            layer_scores,
            layer_analysis,
            recommendations,
            executive_summary: self.executive_summary,
        })
    }
}

fn analysis_entry_schema() -> SchemaField<'static> {
    SchemaField::object()
        .properties(HashMap::from([
            (
                "signal",
                SchemaField::new("string").description("What the answers signal for this layer"),
            ),
            (
                "risk",
                SchemaField::new("string").description("The main risk the current state carries"),
            ),
            (
                "impact",
                SchemaField::new("string").description("Business impact of that risk"),
            ),
        ]))
        .required(vec!["signal", "risk", "impact"])
}

fn per_layer_schema(entry: fn() -> SchemaField<'static>) -> SchemaField<'static> {
    SchemaField::object()
        .properties(HashMap::from([
            ("platformServices", entry()),
            ("cloudGovernance", entry()),
            ("portfolioArchitecture", entry()),
            ("productExecution", entry()),
        ]))
        .required(vec![
            "platformServices",
            "cloudGovernance",
            "portfolioArchitecture",
            "productExecution",
        ])
}

fn score_schema() -> SchemaField<'static> {
    SchemaField::new("number").description("Maturity score from 1 (ad-hoc) to 5 (optimized)")
}

impl FunctionResponse for AssessmentReply {
    fn function_name() -> &'static str {
        "record_assessment"
    }

    fn function_description() -> &'static str {
        "Records the structured platform maturity assessment derived from the questionnaire \
        responses. Always use this to deliver the assessment."
    }

    fn function_parameters() -> serde_json::Value {
        let field = SchemaField::object()
            .properties(HashMap::from([
                (
                    "overallScore",
                    SchemaField::new("number").description("Overall maturity from 1 to 5, one decimal"),
                ),
                (
                    "maturityStatement",
                    SchemaField::new("string").description("One-sentence interpretation of the overall score"),
                ),
                ("layerScores", per_layer_schema(score_schema)),
                ("layerAnalysis", per_layer_schema(analysis_entry_schema)),
                (
                    "recommendations",
                    SchemaField::new("array")
                        .description("Exactly 3 recommendations, prioritized by potential impact")
                        .items(
                            SchemaField::object()
                                .properties(HashMap::from([
                                    ("title", SchemaField::new("string").description("Short title")),
                                    (
                                        "strategicAction",
                                        SchemaField::new("string").description("Actionable strategic recommendation"),
                                    ),
                                    (
                                        "riskOfInaction",
                                        SchemaField::new("string").description("What happens if nothing changes"),
                                    ),
                                    (
                                        "expectedOutcome",
                                        SchemaField::new("string").description("Commercial/business outcome expected"),
                                    ),
                                ]))
                                .required(vec!["title", "strategicAction", "riskOfInaction", "expectedOutcome"]),
                        )
                        .min_items(RECOMMENDATION_COUNT)
                        .max_items(RECOMMENDATION_COUNT),
                ),
                (
                    "executiveSummary",
                    SchemaField::new("string").description("2-3 sentence summary of the organization's maturity"),
                ),
            ]))
            .required(vec![
                "overallScore",
                "layerScores",
                "recommendations",
                "executiveSummary",
            ]);

        serde_json::to_value(field).expect("serialization of a static schema cannot fail")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use compass_config::catalog::default_catalog;
    use serde_json::json;
    use test_log::test;

    fn responses() -> ResponseSet {
        [
            ("cicd", 3),
            ("iac", 2),
            ("cloudCost", 4),
            ("accessControl", 3),
            ("serviceStandard", 2),
            ("deliveryVisibility", 4),
            ("aiReadiness", 1),
        ]
        .into_iter()
        .collect()
    }

    fn reply(overall: f64, recommendations: usize) -> AssessmentReply {
        let rec = json!({
            "title": "Standardize pipelines",
            "strategicAction": "Adopt a shared CI/CD template",
            "riskOfInaction": "Growing per-team divergence",
            "expectedOutcome": "Shorter lead times"
        });
        serde_json::from_value(json!({
            "overallScore": overall,
            "layerScores": {
                "platformServices": 2.5,
                "cloudGovernance": 3.5,
                "portfolioArchitecture": 2.0,
                "productExecution": 2.5
            },
            "recommendations": vec![rec; recommendations],
            "executiveSummary": "Developing overall."
        }))
        .unwrap()
    }

    #[test]
    fn test_user_prompt_lists_answers_in_catalog_order() {
        let prompt = build_user_prompt(default_catalog(), &responses()).unwrap();
        assert!(prompt.contains("1. How standardized are your CI/CD pipelines across teams? (Platform Services): 3/5"));
        assert!(
            prompt.contains("7. How prepared is your platform to support AI/ML workloads? (Product & Client Execution): 1/5")
        );
    }

    #[test]
    fn test_user_prompt_requires_complete_responses() {
        let mut incomplete = responses();
        incomplete.clear();
        incomplete.insert("cicd", 3);
        let error = build_user_prompt(default_catalog(), &incomplete).unwrap_err();
        assert!(matches!(error, AnalysisError::MissingAnswer(id) if id == "iac"));
    }

    #[test]
    fn test_reply_converts_with_fixed_layer_order() {
        let assessment = reply(2.6, RECOMMENDATION_COUNT).into_assessment().unwrap();
        let layers: Vec<Layer> = assessment.layer_scores.keys().copied().collect();
        assert_eq!(layers, Layer::ALL);
        assert_eq!(assessment.recommendations.len(), RECOMMENDATION_COUNT);
        assert!(matches!(
            assessment.recommendations[0].details,
            RecommendationDetails::Expanded { .. }
        ));
    }

    #[test]
    fn test_reply_score_out_of_range_rejected() {
        let error = reply(5.4, RECOMMENDATION_COUNT).into_assessment().unwrap_err();
        assert!(matches!(
            error,
            AnalysisError::ScoreOutOfRange {
                field: "overallScore",
                ..
            }
        ));
    }

    #[test]
    fn test_reply_wrong_recommendation_count_rejected() {
        let error = reply(2.6, 2).into_assessment().unwrap_err();
        assert!(matches!(error, AnalysisError::RecommendationCount(2)));
    }

    #[test]
    fn test_function_parameters_shape() {
        let parameters = AssessmentReply::function_parameters();
        assert_eq!(parameters["type"], "object");
        assert_eq!(parameters["properties"]["recommendations"]["minItems"], 3);
        let required = parameters["required"].as_array().unwrap();
        assert!(required.iter().any(|v| v == "overallScore"));
        assert!(!required.iter().any(|v| v == "maturityStatement"));
    }
}
