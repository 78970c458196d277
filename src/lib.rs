//! # deepseek
//!
//! A small async client for the DeepSeek chat-completion API.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use deepseek::{ApiKey, ClientConfig, DeepSeekClient, Message};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = DeepSeekClient::new(ClientConfig::from_api_key(ApiKey::Default)?)?;
//!
//!     let text = client
//!         .generate_chat_completion(
//!             "deepseek-chat",
//!             &[
//!                 Message::system("You are a concise assistant."),
//!                 Message::user("Name one Rust feature."),
//!             ],
//!         )
//!         .await?;
//!
//!     println!("{text}");
//!     Ok(())
//! }
//! ```
//!
//! ## Errors
//!
//! Every call returns either the text or a [`ClientError`]:
//! [`ClientError::Request`] when the server was never reached,
//! [`ClientError::Api`] when it answered with an error status or an
//! unexpected body. Nothing is retried.

pub mod client;
pub mod completions;
pub mod constants;
pub mod core;

pub use client::{ApiKey, ClientConfig, DeepSeekClient};
pub use completions::PreparedRequest;
pub use crate::core::{
    ChatRole, ClientError, CompletionRequest, GenerationConfig, HttpClientConfig, HttpResponse,
    HttpTransport, Message, ReqwestTransport, TransportError,
};
