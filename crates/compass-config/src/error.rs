use thiserror::Error;

#[derive(Debug, Error)]
pub enum ValidationError {
    #[error("expected an integer answer, found {actual_type}")]
    InvalidAnswerType { actual_type: &'static str },

    #[error("answer {value} is outside the {min}..={max} scale")]
    AnswerOutOfRange { min: u8, max: u8, value: i64 },

    #[error("no answer given")]
    MissingAnswer,
}

/// A response payload rejected during catalog-order validation, carrying
/// the id of the first offending question.
#[derive(Debug, Error)]
#[error("invalid response for \"{question}\": {source}")]
pub struct ResponseRejection {
    pub question: &'static str,
    #[source]
    pub source: ValidationError,
}
