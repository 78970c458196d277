use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use deepseek::{
    ClientConfig, ClientError, DeepSeekClient, GenerationConfig, HttpResponse, HttpTransport,
    Message, TransportError,
};
use serde_json::{Value, json};

#[derive(Debug, Clone, PartialEq)]
struct RecordedRequest {
    url: String,
    headers: Vec<(String, String)>,
    body: String,
}

/// Replays a fixed outcome for every call and records what was sent.
struct StubTransport {
    reply: Reply,
    sent: Mutex<Vec<RecordedRequest>>,
}

enum Reply {
    Response(HttpResponse),
    Failure(&'static str),
}

impl StubTransport {
    fn responding(status: u16, body: impl Into<String>) -> Self {
        Self {
            reply: Reply::Response(HttpResponse::new(status, body)),
            sent: Mutex::new(Vec::new()),
        }
    }

    fn failing(description: &'static str) -> Self {
        Self {
            reply: Reply::Failure(description),
            sent: Mutex::new(Vec::new()),
        }
    }

    fn sent(&self) -> Vec<RecordedRequest> {
        self.sent.lock().unwrap().clone()
    }
}

#[async_trait]
impl HttpTransport for StubTransport {
    async fn post(
        &self,
        url: &str,
        headers: &[(String, String)],
        body: String,
    ) -> Result<HttpResponse, TransportError> {
        self.sent.lock().unwrap().push(RecordedRequest {
            url: url.to_string(),
            headers: headers.to_vec(),
            body,
        });

        match &self.reply {
            Reply::Response(response) => Ok(response.clone()),
            Reply::Failure(description) => Err(TransportError::new(std::io::Error::new(
                std::io::ErrorKind::ConnectionReset,
                *description,
            ))),
        }
    }
}

fn config() -> ClientConfig {
    ClientConfig::new("test_api_key")
        .unwrap()
        .with_base_url("https://stub.invalid/v1")
}

fn stub_client(
    transport: StubTransport,
) -> (DeepSeekClient<Arc<StubTransport>>, Arc<StubTransport>) {
    let transport = Arc::new(transport);
    let client = DeepSeekClient::with_transport(config(), Arc::clone(&transport));
    (client, transport)
}

#[tokio::test]
async fn stub_success_strips_whitespace() {
    let (client, transport) = stub_client(StubTransport::responding(
        200,
        r#"{"choices":[{"message":{"content":"  Test response  "}}]}"#,
    ));

    let text = client
        .generate_chat_completion("test-model", &[Message::user("Hello!")])
        .await
        .unwrap();

    assert_eq!(text, "Test response");

    let sent = transport.sent();
    assert_eq!(sent.len(), 1);
    assert_eq!(sent[0].url, "https://stub.invalid/v1/chat/completions");
    assert!(sent[0].headers.contains(&(
        "Authorization".to_string(),
        "Bearer test_api_key".to_string()
    )));
}

#[tokio::test]
async fn stub_network_failure_is_request_error() {
    let (client, _transport) = stub_client(StubTransport::failing("connection reset by peer"));

    let result = client
        .generate_chat_completion("test-model", &[Message::user("Hello!")])
        .await;

    match result {
        Err(err @ ClientError::Request { .. }) => {
            assert!(err.message().contains("connection reset by peer"));
            assert!(std::error::Error::source(&err).is_some());
        }
        other => panic!("Expected Request Error, got {:?}", other),
    }
}

#[tokio::test]
async fn stub_error_status_is_api_error() {
    let (client, _transport) = stub_client(StubTransport::responding(400, "Bad Request"));

    let err = client
        .generate_chat_completion("test-model", &[Message::user("Hello!")])
        .await
        .unwrap_err();

    assert_eq!(err.status_code(), Some(400));
    assert!(err.message().contains("400"));
    assert!(err.message().contains("Bad Request"));
}

#[tokio::test]
async fn stub_empty_object_is_invalid_format() {
    let (client, _transport) = stub_client(StubTransport::responding(200, "{}"));

    let err = client
        .generate_chat_completion("test-model", &[Message::user("Hello!")])
        .await
        .unwrap_err();

    assert!(err.is_api_error());
    assert_eq!(err.status_code(), None);
    assert_eq!(err.message(), "Invalid response format from the API.");
}

#[tokio::test]
async fn repeated_calls_are_identical() {
    let (client, transport) = stub_client(StubTransport::responding(
        200,
        json!({ "choices": [{ "message": { "content": "same answer" } }] }).to_string(),
    ));
    let messages = [Message::system("You are a calculator."), Message::user("2 + 2")];
    let generation = GenerationConfig::default().with_max_tokens(10);

    let first = client
        .generate_chat_completion_with("test-model", &messages, generation)
        .await
        .unwrap();
    let second = client
        .generate_chat_completion_with("test-model", &messages, generation)
        .await
        .unwrap();

    assert_eq!(first, second);

    let sent = transport.sent();
    assert_eq!(sent.len(), 2);
    assert_eq!(sent[0], sent[1]);

    let body: Value = serde_json::from_str(&sent[0].body).unwrap();
    assert_eq!(body["messages"][0]["role"], "system");
    assert_eq!(body["messages"][1]["content"], "2 + 2");
    assert_eq!(body["max_tokens"], 10);
}

#[tokio::test]
async fn concurrent_calls_share_one_client() {
    let (client, transport) = stub_client(StubTransport::responding(
        200,
        r#"{"choices":[{"message":{"content":"pong"}}]}"#,
    ));
    let client = Arc::new(client);

    let mut handles = Vec::new();
    for i in 0..8 {
        let client = Arc::clone(&client);
        handles.push(tokio::spawn(async move {
            client
                .generate_chat_completion("test-model", &[Message::user(format!("ping {i}"))])
                .await
        }));
    }

    for handle in handles {
        assert_eq!(handle.await.unwrap().unwrap(), "pong");
    }
    assert_eq!(transport.sent().len(), 8);
}
