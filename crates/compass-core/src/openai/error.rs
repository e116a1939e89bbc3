use thiserror::Error;

#[derive(Debug, Error)]
pub enum OpenAiError {
    #[error("OpenAI error: {0}")]
    Api(#[from] async_openai::error::OpenAIError),

    #[error("failed to build http client: {0}")]
    HttpClientBuild(reqwest::Error),

    #[error("assistant returned an empty response")]
    EmptyResponse,

    #[error(transparent)]
    FunctionCall(#[from] FunctionCallError),
}

#[derive(Debug, Error)]
pub enum FunctionCallError {
    #[error("assistant reply carried no function call")]
    Missing,

    #[error("assistant called the wrong function")]
    WrongFunction,

    #[error("function call arguments did not match the expected schema")]
    InvalidArguments,
}
