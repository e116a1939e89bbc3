use async_openai::config::OpenAIConfig;

pub const DEFAULT_ASSESSMENT_MODEL: &str = "gpt-4.1-mini";

/// Connection settings for the completion service, resolved once at
/// process start and read-only afterwards. A missing key does not fail
/// construction; the upstream call is where its absence surfaces.
#[derive(Debug, Clone, Default)]
pub struct LlmConfig {
    key: Option<String>,
    api_base: Option<String>,
    model: Option<String>,
}

impl LlmConfig {
    #[must_use]
    pub fn new(key: Option<String>, api_base: Option<String>, model: Option<String>) -> Self {
        Self { key, api_base, model }
    }

    #[must_use]
    pub fn has_key(&self) -> bool {
        self.key.is_some()
    }

    #[must_use]
    pub fn assessment_model(&self) -> &str {
        if let Some(model) = &self.model {
            model.as_str()
        } else {
            tracing::debug!("using default model for the assessment feature");
            DEFAULT_ASSESSMENT_MODEL
        }
    }

    #[must_use]
    pub fn openai_config(&self) -> OpenAIConfig {
        let mut config = OpenAIConfig::default();
        if let Some(api_base) = &self.api_base {
            config = config.with_api_base(api_base);
        }
        if let Some(key) = &self.key {
            config = config.with_api_key(key);
        }
        config
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_model_fallback() {
        let config = LlmConfig::default();
        assert_eq!(config.assessment_model(), DEFAULT_ASSESSMENT_MODEL);
        let config = LlmConfig::new(None, None, Some("gpt-4-turbo".to_owned()));
        assert_eq!(config.assessment_model(), "gpt-4-turbo");
    }
}
