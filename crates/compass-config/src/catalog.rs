use crate::error::{ResponseRejection, ValidationError};
use compass_model::layer::Layer;
use compass_model::responses::ResponseSet;
use indexmap::IndexMap;
use serde_json::{Map, Value};
use std::sync::LazyLock;

/// # Five-point answer scale
/// Every questionnaire item is answered on the same closed integer scale;
/// the hints label its endpoints for the person answering.
#[derive(Debug, Clone, Copy)]
pub struct LikertScale {
    pub min: u8,
    pub max: u8,
    pub hint_min: &'static str,
    pub hint_max: &'static str,
}

pub const MATURITY_SCALE: LikertScale = LikertScale {
    min: 1,
    max: 5,
    hint_min: "Ad-hoc / none",
    hint_max: "Optimized / leading",
};

#[derive(Debug, Clone, Copy)]
pub struct Question {
    /// Identifier the answer is keyed under, both in memory and on the wire.
    pub id: &'static str,
    pub prompt: &'static str,
    pub layer: Layer,
    pub scale: LikertScale,
}

impl Question {
    /// Range check for an already-parsed answer.
    pub fn check_scale(&self, value: u8) -> Result<(), ValidationError> {
        if value < self.scale.min || value > self.scale.max {
            return Err(ValidationError::AnswerOutOfRange {
                min: self.scale.min,
                max: self.scale.max,
                value: i64::from(value),
            });
        }
        Ok(())
    }

    /// Type and range check for a raw JSON answer value.
    pub fn accept(&self, value: &Value) -> Result<u8, ValidationError> {
        let Some(value) = value.as_i64() else {
            return Err(ValidationError::InvalidAnswerType {
                actual_type: json_type_name(value),
            });
        };
        if value < i64::from(self.scale.min) || value > i64::from(self.scale.max) {
            return Err(ValidationError::AnswerOutOfRange {
                min: self.scale.min,
                max: self.scale.max,
                value,
            });
        }
        u8::try_from(value).map_err(|_| ValidationError::AnswerOutOfRange {
            min: self.scale.min,
            max: self.scale.max,
            value,
        })
    }
}

fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "fractional number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

/// The ordered question list a questionnaire session runs over. The
/// default catalog is fixed at compile time; consumers take a catalog as
/// input so tests can swap in a smaller one.
#[derive(Debug, Clone)]
pub struct Catalog {
    questions: IndexMap<&'static str, Question>,
}

impl Catalog {
    #[must_use]
    pub fn new<I: IntoIterator<Item = Question>>(questions: I) -> Self {
        Self {
            questions: questions.into_iter().map(|q| (q.id, q)).collect(),
        }
    }

    #[must_use]
    pub fn get(&self, question_id: &str) -> Option<&Question> {
        self.questions.get(question_id)
    }

    #[must_use]
    pub fn by_index(&self, index: usize) -> Option<&Question> {
        self.questions.get_index(index).map(|(_, question)| question)
    }

    pub fn questions(&self) -> impl Iterator<Item = &Question> + '_ {
        self.questions.values()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.questions.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }

    /// First catalog question without an answer, in catalog order.
    #[must_use]
    pub fn first_unanswered(&self, responses: &ResponseSet) -> Option<&Question> {
        self.questions().find(|question| responses.get(question.id).is_none())
    }

    /// Validates a raw `responses` object into a typed [`ResponseSet`].
    /// Questions are checked in catalog order and the first violation
    /// wins; keys outside the catalog are ignored.
    pub fn validate_responses(&self, raw: &Map<String, Value>) -> Result<ResponseSet, ResponseRejection> {
        let mut responses = ResponseSet::new();
        for question in self.questions() {
            let value = raw.get(question.id).ok_or(ResponseRejection {
                question: question.id,
                source: ValidationError::MissingAnswer,
            })?;
            let value = question.accept(value).map_err(|source| ResponseRejection {
                question: question.id,
                source,
            })?;
            responses.insert(question.id, value);
        }
        Ok(responses)
    }
}

static DEFAULT_CATALOG: LazyLock<Catalog> = LazyLock::new(|| {
    Catalog::new([
        Question {
            id: "cicd",
            prompt: "How standardized are your CI/CD pipelines across teams?",
            layer: Layer::PlatformServices,
            scale: MATURITY_SCALE,
        },
        Question {
            id: "iac",
            prompt: "What percentage of your infrastructure is managed as code?",
            layer: Layer::PlatformServices,
            scale: MATURITY_SCALE,
        },
        Question {
            id: "cloudCost",
            prompt: "How well do you track and attribute cloud costs?",
            layer: Layer::CloudGovernance,
            scale: MATURITY_SCALE,
        },
        Question {
            id: "accessControl",
            prompt: "How automated and policy-driven are your access controls?",
            layer: Layer::CloudGovernance,
            scale: MATURITY_SCALE,
        },
        Question {
            id: "serviceStandard",
            prompt: "How consistent are technology choices across your portfolio?",
            layer: Layer::PortfolioArchitecture,
            scale: MATURITY_SCALE,
        },
        Question {
            id: "deliveryVisibility",
            prompt: "How much visibility do executives have into delivery metrics?",
            layer: Layer::ProductExecution,
            scale: MATURITY_SCALE,
        },
        Question {
            id: "aiReadiness",
            prompt: "How prepared is your platform to support AI/ML workloads?",
            layer: Layer::ProductExecution,
            scale: MATURITY_SCALE,
        },
    ])
});

#[must_use]
pub fn default_catalog() -> &'static Catalog {
    &DEFAULT_CATALOG
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn raw(value: Value) -> Map<String, Value> {
        match value {
            Value::Object(map) => map,
            other => panic!("expected an object, got {other}"),
        }
    }

    fn complete() -> Map<String, Value> {
        raw(json!({
            "cicd": 3,
            "iac": 2,
            "cloudCost": 4,
            "accessControl": 3,
            "serviceStandard": 2,
            "deliveryVisibility": 4,
            "aiReadiness": 1
        }))
    }

    #[test]
    fn test_default_catalog_shape() {
        let catalog = default_catalog();
        assert_eq!(catalog.len(), 7);
        assert_eq!(catalog.by_index(0).unwrap().id, "cicd");
        assert_eq!(catalog.by_index(6).unwrap().id, "aiReadiness");
        assert_eq!(catalog.get("cloudCost").unwrap().layer, Layer::CloudGovernance);
    }

    #[test]
    fn test_validate_accepts_complete_payload() {
        let responses = default_catalog().validate_responses(&complete()).unwrap();
        assert_eq!(responses.len(), 7);
        assert_eq!(responses.get("cloudCost"), Some(4));
    }

    #[test]
    fn test_validate_rejects_missing_field() {
        let mut payload = complete();
        payload.remove("aiReadiness");
        let rejection = default_catalog().validate_responses(&payload).unwrap_err();
        assert_eq!(rejection.question, "aiReadiness");
        assert!(matches!(rejection.source, ValidationError::MissingAnswer));
    }

    #[test]
    fn test_validate_rejects_out_of_range() {
        let mut payload = complete();
        payload.insert("cloudCost".to_owned(), json!(6));
        let rejection = default_catalog().validate_responses(&payload).unwrap_err();
        assert_eq!(rejection.question, "cloudCost");
        assert!(matches!(
            rejection.source,
            ValidationError::AnswerOutOfRange { min: 1, max: 5, value: 6 }
        ));
    }

    #[test]
    fn test_validate_rejects_non_integer() {
        let mut payload = complete();
        payload.insert("iac".to_owned(), json!(3.5));
        let rejection = default_catalog().validate_responses(&payload).unwrap_err();
        assert_eq!(rejection.question, "iac");
        assert!(matches!(rejection.source, ValidationError::InvalidAnswerType { .. }));
    }

    #[test]
    fn test_validate_names_first_offender_in_catalog_order() {
        let mut payload = complete();
        payload.remove("iac");
        payload.insert("aiReadiness".to_owned(), json!(0));
        let rejection = default_catalog().validate_responses(&payload).unwrap_err();
        assert_eq!(rejection.question, "iac");
    }

    #[test]
    fn test_validate_ignores_unknown_keys() {
        let mut payload = complete();
        payload.insert("observability".to_owned(), json!(5));
        assert!(default_catalog().validate_responses(&payload).is_ok());
    }

    #[test]
    fn test_first_unanswered_follows_catalog_order() {
        let catalog = default_catalog();
        let mut responses = ResponseSet::new();
        assert_eq!(catalog.first_unanswered(&responses).unwrap().id, "cicd");
        responses.insert("cicd", 3);
        responses.insert("cloudCost", 2);
        assert_eq!(catalog.first_unanswered(&responses).unwrap().id, "iac");
    }
}
