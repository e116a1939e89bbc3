use crate::openai::error::OpenAiError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AnalysisError {
    #[error("no API credential configured for the completion service")]
    MissingCredential,

    #[error(transparent)]
    OpenAi(#[from] OpenAiError),

    #[error("no answer recorded for question \"{0}\"")]
    MissingAnswer(String),

    #[error("{field} {value} in the model reply is outside the 1-5 range")]
    ScoreOutOfRange { field: &'static str, value: f64 },

    #[error("model reply carried {0} recommendations instead of 3")]
    RecommendationCount(usize),
}
