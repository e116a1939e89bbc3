use crate::openai::error::{FunctionCallError, OpenAiError};
use async_openai::Client;
use async_openai::config::OpenAIConfig;
use async_openai::types::{
    ChatCompletionNamedToolChoice, ChatCompletionRequestMessage, ChatCompletionTool, ChatCompletionToolChoiceOption,
    ChatCompletionToolType, CreateChatCompletionRequestArgs, CreateChatCompletionResponse, FunctionName,
    FunctionObject,
};
use backoff::ExponentialBackoffBuilder;
use serde::de::DeserializeOwned;
use std::error::Error;
use std::time::Duration;
use tracing::instrument;
use typed_builder::TypedBuilder;

pub mod error;
pub mod schema;

#[derive(TypedBuilder, Debug, Clone)]
pub struct CallConfig {
    total_timeout: Duration,
    request_timeout: Duration,
    #[builder(default = Duration::from_millis(100))]
    min_retry_interval: Duration,
    #[builder(default = Duration::from_secs(2))]
    max_retry_interval: Duration,
    #[builder(default)]
    temperature: Option<f32>,
}

/// A reply the assistant is forced to produce by calling one named
/// function; the argument payload deserializes into the implementor.
pub trait FunctionResponse: DeserializeOwned {
    fn function_name() -> &'static str;
    fn function_description() -> &'static str;
    fn function_parameters() -> serde_json::Value;
}

/// One chat completion with a forced named function call. Transient
/// failures are retried with exponential backoff inside `total_timeout`;
/// a single attempt is bounded by `request_timeout`.
#[instrument(skip(openai_config, config, messages))]
pub async fn call_function<T: FunctionResponse>(
    openai_config: OpenAIConfig,
    model: &str,
    config: CallConfig,
    messages: Vec<ChatCompletionRequestMessage>,
) -> Result<T, OpenAiError> {
    let name = T::function_name();

    let mut request = CreateChatCompletionRequestArgs::default();
    request
        .model(model)
        .messages(messages)
        .tools(vec![ChatCompletionTool {
            r#type: ChatCompletionToolType::Function,
            function: FunctionObject {
                name: name.to_owned(),
                description: Some(T::function_description().to_owned()),
                parameters: Some(T::function_parameters()),
                strict: None,
            },
        }])
        .tool_choice(ChatCompletionToolChoiceOption::Named(ChatCompletionNamedToolChoice {
            r#type: ChatCompletionToolType::Function,
            function: FunctionName { name: name.to_owned() },
        }));
    if let Some(temperature) = config.temperature {
        request.temperature(temperature);
    }
    let request = request.build()?;

    let http_client = reqwest::Client::builder()
        .timeout(config.request_timeout)
        .build()
        .map_err(|error| {
            tracing::error!(error = &error as &dyn Error, "failed to build http client for the completion call");
            OpenAiError::HttpClientBuild(error)
        })?;

    let mut backoff_builder = ExponentialBackoffBuilder::default();
    backoff_builder
        .with_initial_interval(config.min_retry_interval)
        .with_max_interval(config.max_retry_interval)
        .with_max_elapsed_time(Some(config.total_timeout));
    let backoff = backoff_builder.build();

    let client = Client::with_config(openai_config)
        .with_http_client(http_client)
        .with_backoff(backoff);

    tracing::debug!(model, function = name, "sending completion request");
    let completion = client.chat().create(request).await.map_err(|error| {
        tracing::warn!(error = &error as &dyn Error, "completion call failed");
        OpenAiError::Api(error)
    })?;

    parse_function_call(&completion)
}

#[instrument(skip_all)]
fn parse_function_call<T: FunctionResponse>(completion: &CreateChatCompletionResponse) -> Result<T, OpenAiError> {
    let choice = completion.choices.first().ok_or(OpenAiError::EmptyResponse)?;

    let call = choice
        .message
        .tool_calls
        .as_ref()
        .and_then(|calls| calls.first())
        .ok_or(FunctionCallError::Missing)?;

    if call.function.name != T::function_name() {
        tracing::warn!(
            expected_function = T::function_name(),
            called_function = call.function.name,
            "assistant tried to call the wrong function"
        );
        return Err(FunctionCallError::WrongFunction.into());
    }

    serde_json::from_str(&call.function.arguments).map_err(|error| {
        tracing::warn!(
            error = &error as &dyn Error,
            arguments = call.function.arguments,
            "failed to parse function call arguments"
        );
        FunctionCallError::InvalidArguments.into()
    })
}
