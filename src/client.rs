use std::fmt;

use crate::{
    completions::{PreparedRequest, build_request, classify},
    constants::deepseek,
    core::{
        ClientError, GenerationConfig, HttpClientConfig, HttpTransport, Message, ReqwestTransport,
    },
};

/// Where the API key comes from.
#[derive(Clone)]
pub enum ApiKey {
    /// Read from the `DEEPSEEK_API_KEY` environment variable.
    Default,
    Custom(String),
}

impl fmt::Debug for ApiKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApiKey::Default => write!(f, "ApiKey::Default"),
            ApiKey::Custom(_) => write!(f, "ApiKey::Custom(<redacted>)"),
        }
    }
}

impl ApiKey {
    pub fn resolve(self) -> Result<String, ClientError> {
        match self {
            ApiKey::Default => std::env::var(deepseek::API_KEY_ENV_VAR).map_err(|_| {
                ClientError::Configuration(format!(
                    "{} environment variable not set",
                    deepseek::API_KEY_ENV_VAR
                ))
            }),
            ApiKey::Custom(key) => Ok(key),
        }
    }
}

/// Client configuration. Fixed once handed to a [`DeepSeekClient`].
#[derive(Clone)]
pub struct ClientConfig {
    api_key: String,
    base_url: String,
    http: HttpClientConfig,
}

impl fmt::Debug for ClientConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ClientConfig")
            .field("api_key", &"<redacted>")
            .field("base_url", &self.base_url)
            .field("http", &self.http)
            .finish()
    }
}

impl ClientConfig {
    /// Config pointing at the production endpoint.
    ///
    /// The key is only checked for emptiness, never for format.
    pub fn new(api_key: impl Into<String>) -> Result<Self, ClientError> {
        let api_key = api_key.into();
        if api_key.is_empty() {
            return Err(ClientError::Configuration(
                "API key must not be empty".to_string(),
            ));
        }

        Ok(Self {
            api_key,
            base_url: deepseek::API_BASE.to_string(),
            http: HttpClientConfig::default(),
        })
    }

    pub fn from_api_key(api_key: ApiKey) -> Result<Self, ClientError> {
        Self::new(api_key.resolve()?)
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        let base_url = base_url.into();
        self.base_url = base_url.strip_suffix('/').unwrap_or(&base_url).to_string();
        self
    }

    pub fn with_http_config(mut self, config: HttpClientConfig) -> Self {
        self.http = config;
        self
    }

    pub fn api_key(&self) -> &str {
        &self.api_key
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn http_config(&self) -> &HttpClientConfig {
        &self.http
    }
}

/// Client for the DeepSeek chat-completion endpoint.
///
/// Holds no mutable state: share it behind an `Arc` to issue calls
/// concurrently. Each call makes exactly one HTTP request and never retries.
pub struct DeepSeekClient<T: HttpTransport = ReqwestTransport> {
    config: ClientConfig,
    transport: T,
}

impl DeepSeekClient<ReqwestTransport> {
    pub fn new(config: ClientConfig) -> Result<Self, ClientError> {
        let transport = ReqwestTransport::new(config.http_config())?;
        Ok(Self { config, transport })
    }

    /// Client for the production endpoint with default HTTP settings.
    pub fn from_api_key(api_key: ApiKey) -> Result<Self, ClientError> {
        Self::new(ClientConfig::from_api_key(api_key)?)
    }
}

impl<T: HttpTransport> DeepSeekClient<T> {
    pub fn with_transport(config: ClientConfig, transport: T) -> Self {
        Self { config, transport }
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Generate a completion with the default parameters
    /// (`max_tokens = 50`, `temperature = 0.7`).
    pub async fn generate_chat_completion(
        &self,
        model: &str,
        messages: &[Message],
    ) -> Result<String, ClientError> {
        self.generate_chat_completion_with(model, messages, GenerationConfig::default())
            .await
    }

    /// Generate a completion and return the first choice's text, trimmed.
    ///
    /// # Errors
    ///
    /// [`ClientError::Request`] if no HTTP response was received,
    /// [`ClientError::Api`] if the server answered with an error status or
    /// with a body that is not a chat completion.
    #[tracing::instrument(
        name = "generate_chat_completion",
        skip(self, messages, generation),
        fields(
            message_count = messages.len(),
            max_tokens = generation.max_tokens,
            temperature = generation.temperature,
        ),
        err
    )]
    pub async fn generate_chat_completion_with(
        &self,
        model: &str,
        messages: &[Message],
        generation: GenerationConfig,
    ) -> Result<String, ClientError> {
        let request = self.prepare_request(model, messages, &generation)?;
        let outcome = self
            .transport
            .post(&request.url, &request.headers, request.body)
            .await;
        classify(outcome)
    }

    /// The request a completion call would send, without sending it.
    pub fn prepare_request(
        &self,
        model: &str,
        messages: &[Message],
        generation: &GenerationConfig,
    ) -> Result<PreparedRequest, ClientError> {
        build_request(&self.config, model, messages, generation)
    }
}
