pub mod error;
pub mod http;
pub mod types;

pub use error::ClientError;
pub use http::{HttpClientConfig, HttpResponse, HttpTransport, ReqwestTransport, TransportError};
pub use types::{ChatRole, CompletionRequest, GenerationConfig, Message};
pub(crate) use types::ChatCompletionResponse;
