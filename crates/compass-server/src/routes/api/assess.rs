use crate::AppConfig;
use axum::response::IntoResponse;
use axum::routing::{Router, post};
use axum::{Extension, Json};
use compass_model::assessment::Assessment;
use error::Error;
use serde::Deserialize;
use serde_json::{Map, Value};
use utoipa::ToSchema;
use uuid::Uuid;

pub(crate) mod error;

pub(crate) fn create_router<S>() -> Router<S>
where
    S: Clone + Send + Sync + 'static,
{
    Router::new().route("/", post(assess)).with_state(())
}

/// Request body. `responses` stays a raw map here; it is validated against
/// the catalog so a rejection can name the first offending field instead
/// of failing deserialization wholesale.
#[derive(Debug, Deserialize, ToSchema)]
pub(crate) struct AssessBody {
    #[serde(default)]
    #[schema(value_type = Object)]
    responses: Option<Map<String, Value>>,
}

#[utoipa::path(
    post,
    path = "/api/assess",
    request_body = AssessBody,
    responses(
        (status = OK, body = Assessment, description = "Generated maturity assessment"),
        (status = BAD_REQUEST, body = error::ErrorBody, description = "Missing responses object, missing field, or out-of-range value"),
        (status = INTERNAL_SERVER_ERROR, body = error::ErrorBody, description = "Assessment generation failed"),
    ),
    tag = "api"
)]
pub(crate) async fn assess(
    Extension(app_config): Extension<AppConfig>,
    Json(body): Json<AssessBody>,
) -> Result<impl IntoResponse, Error> {
    let raw = body.responses.ok_or(Error::ResponsesRequired)?;
    let responses = app_config.catalog().validate_responses(&raw)?;

    let request_id = Uuid::new_v4();
    tracing::debug!(%request_id, answers = responses.len(), "generating assessment");

    let assessment = app_config.analyst().generate(&responses).await.map_err(|error| {
        tracing::error!(
            %request_id,
            error = &error as &dyn std::error::Error,
            "assessment generation failed"
        );
        Error::Generation
    })?;

    tracing::debug!(%request_id, score = assessment.overall_score, "assessment generated");
    Ok(Json(assessment))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::AppConfig;
    use async_trait::async_trait;
    use axum::body::{Body, to_bytes};
    use compass_config::catalog::default_catalog;
    use compass_core::analysis::error::AnalysisError;
    use compass_core::analysis::GenerateAssessment;
    use compass_model::assessment::{Recommendation, RecommendationDetails};
    use compass_model::layer::Layer;
    use compass_model::responses::ResponseSet;
    use http::{Request, StatusCode};
    use serde_json::json;
    use std::sync::Arc;
    use test_log::test;
    use tower::ServiceExt;

    struct FakeAnalyst {
        fail: bool,
    }

    #[async_trait]
    impl GenerateAssessment for FakeAnalyst {
        async fn generate(&self, _responses: &ResponseSet) -> Result<Assessment, AnalysisError> {
            if self.fail {
                Err(AnalysisError::MissingCredential)
            } else {
                Ok(assessment())
            }
        }
    }

    fn assessment() -> Assessment {
        let recommendation = Recommendation {
            title: "Standardize pipelines".to_owned(),
            details: RecommendationDetails::Expanded {
                strategic_action: "Adopt a shared CI/CD template".to_owned(),
                risk_of_inaction: "Growing per-team divergence".to_owned(),
                expected_outcome: "Shorter lead times".to_owned(),
            },
        };
        Assessment {
            overall_score: 2.7,
            maturity_statement: None,
            layer_scores: Layer::ALL.iter().map(|layer| (*layer, 2.5)).collect(),
            layer_analysis: None,
            recommendations: vec![recommendation.clone(), recommendation.clone(), recommendation],
            executive_summary: "Developing overall.".to_owned(),
        }
    }

    fn app(fail: bool) -> Router {
        let config = AppConfig::new(default_catalog().clone(), Arc::new(FakeAnalyst { fail }));
        create_router().layer(Extension(config))
    }

    async fn post(app: Router, body: &serde_json::Value) -> (StatusCode, serde_json::Value) {
        let request = Request::builder()
            .method("POST")
            .uri("/")
            .header("content-type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap();
        let response = app.oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let body = serde_json::from_slice(&bytes).unwrap();
        (status, body)
    }

    fn complete_payload() -> serde_json::Value {
        json!({
            "responses": {
                "cicd": 3,
                "iac": 2,
                "cloudCost": 4,
                "accessControl": 3,
                "serviceStandard": 2,
                "deliveryVisibility": 4,
                "aiReadiness": 1
            }
        })
    }

    #[test(tokio::test)]
    async fn test_valid_submission_returns_assessment() {
        let (status, body) = post(app(false), &complete_payload()).await;
        assert_eq!(status, StatusCode::OK);
        let score = body["overallScore"].as_f64().unwrap();
        assert!((1.0..=5.0).contains(&score));
        assert_eq!(body["recommendations"].as_array().unwrap().len(), 3);
        assert_eq!(
            body["recommendations"][0]["strategicAction"],
            "Adopt a shared CI/CD template"
        );
    }

    #[test(tokio::test)]
    async fn test_missing_responses_object_rejected() {
        let (status, body) = post(app(false), &json!({})).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body, json!({"error": "Responses are required"}));
    }

    #[test(tokio::test)]
    async fn test_missing_field_named_in_rejection() {
        let mut payload = complete_payload();
        payload["responses"].as_object_mut().unwrap().remove("aiReadiness");
        let (status, body) = post(app(false), &payload).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(
            body,
            json!({"error": "Invalid or missing value for aiReadiness. Must be between 1 and 5."})
        );
    }

    #[test(tokio::test)]
    async fn test_out_of_range_field_named_in_rejection() {
        let mut payload = complete_payload();
        payload["responses"]["cloudCost"] = json!(6);
        let (status, body) = post(app(false), &payload).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(
            body,
            json!({"error": "Invalid or missing value for cloudCost. Must be between 1 and 5."})
        );
    }

    #[test(tokio::test)]
    async fn test_first_offending_field_wins() {
        let mut payload = complete_payload();
        payload["responses"]["iac"] = json!(0);
        payload["responses"]["aiReadiness"] = json!(9);
        let (status, body) = post(app(false), &payload).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(
            body,
            json!({"error": "Invalid or missing value for iac. Must be between 1 and 5."})
        );
    }

    #[test(tokio::test)]
    async fn test_generation_failure_collapses_to_fixed_message() {
        let (status, body) = post(app(true), &complete_payload()).await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body, json!({"error": "Failed to generate assessment"}));
    }
}
