use tracing::{debug, warn};

use crate::core::{ChatCompletionResponse, ClientError, HttpResponse, TransportError};

/// Turn a transport outcome into the generated text or a typed error.
///
/// - transport failure: [`ClientError::Request`]
/// - 4xx/5xx: [`ClientError::Api`] with the status and the raw body
/// - anything else that is not `{"choices": [{"message": {"content": ...}}]}`
///   with at least one choice: [`ClientError::Api`] without a status
/// - otherwise the first choice's content, trimmed
pub fn classify(outcome: Result<HttpResponse, TransportError>) -> Result<String, ClientError> {
    let response = match outcome {
        Ok(response) => response,
        Err(e) => {
            warn!(error = %e, "HTTP request failed");
            return Err(e.into());
        }
    };

    if response.is_error_status() {
        warn!(status = response.status, "API returned error status");
        return Err(ClientError::Api {
            message: format!(
                "API request failed with status code {}: {}",
                response.status, response.body
            ),
            status_code: Some(response.status),
        });
    }

    debug!(status = response.status, "API request successful");

    let parsed: ChatCompletionResponse = serde_json::from_str(&response.body).map_err(|e| {
        warn!(error = %e, "Response body does not match chat completion shape");
        ClientError::invalid_format()
    })?;

    // Only the first choice is ever returned.
    let choice = parsed.choices.into_iter().next().ok_or_else(|| {
        warn!("Response contains no choices");
        ClientError::invalid_format()
    })?;

    Ok(choice.message.content.trim().to_string())
}
