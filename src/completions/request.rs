use crate::{
    client::ClientConfig,
    constants::deepseek,
    core::{ClientError, CompletionRequest, GenerationConfig, Message},
};

/// A request ready to hand to an [`HttpTransport`](crate::HttpTransport).
#[derive(Debug, Clone, PartialEq)]
pub struct PreparedRequest {
    pub url: String,
    pub headers: Vec<(String, String)>,
    pub body: String,
}

impl PreparedRequest {
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(n, _)| n.eq_ignore_ascii_case(name))
            .map(|(_, v)| v.as_str())
    }
}

/// Build the `POST {base_url}/chat/completions` request for one call.
///
/// Deterministic: the same inputs always produce the same request.
pub fn build_request(
    config: &ClientConfig,
    model: &str,
    messages: &[Message],
    generation: &GenerationConfig,
) -> Result<PreparedRequest, ClientError> {
    let payload = CompletionRequest {
        model: model.to_string(),
        messages: messages.to_vec(),
        max_tokens: generation.max_tokens,
        temperature: generation.temperature,
    };

    let body = serde_json::to_string(&payload).map_err(|e| ClientError::Request {
        message: format!("Request failed: could not serialize request body: {e}"),
        source: Box::new(e),
    })?;

    Ok(PreparedRequest {
        url: format!(
            "{}{}",
            config.base_url(),
            deepseek::CHAT_COMPLETIONS_ENDPOINT
        ),
        headers: vec![
            (
                "Authorization".to_string(),
                format!("Bearer {}", config.api_key()),
            ),
            ("Content-Type".to_string(), "application/json".to_string()),
        ],
        body,
    })
}
