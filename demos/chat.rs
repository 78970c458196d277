use deepseek::{ApiKey, ClientError, DeepSeekClient, GenerationConfig, Message};
use dotenv::dotenv;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let client = DeepSeekClient::from_api_key(ApiKey::Default)?;

    let messages = vec![
        Message::system("You are a concise, upbeat assistant."),
        Message::user("Share a fun fact about Rust programming."),
    ];

    let response = client
        .generate_chat_completion_with(
            "deepseek-chat",
            &messages,
            GenerationConfig::default().with_max_tokens(120),
        )
        .await;

    match response {
        Ok(text) => println!("Assistant:\n{text}"),
        Err(ClientError::Api {
            message,
            status_code: Some(status),
        }) => eprintln!("Server rejected the request ({status}): {message}"),
        Err(ClientError::Api { message, .. }) => eprintln!("Unexpected response: {message}"),
        Err(e) => eprintln!("Could not reach the API: {e}"),
    }

    Ok(())
}
