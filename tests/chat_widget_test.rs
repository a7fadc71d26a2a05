//! End-to-end chat scenarios against a mock suggestion server
//! Run with: cargo test --test chat_widget_test

use std::sync::Once;

use rae_chat::domain::entities::{InputField, Message, Sender};
use rae_chat::infrastructure::adapters::MemorySurface;
use rae_chat::infrastructure::config::ServerConfig;
use rae_chat::{ChatWidget, FALLBACK_REPLY};
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::{TcpListener, TcpStream};
use wiremock::{
    matchers::{body_json, header, method, path},
    Mock, MockServer, ResponseTemplate,
};

static INIT: Once = Once::new();

fn ensure_init() {
    INIT.call_once(|| {
        let _ = tracing_subscriber::fmt()
            .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
            .with_test_writer()
            .try_init();
    });
}

fn widget_for(server: &MockServer) -> ChatWidget<MemorySurface> {
    ChatWidget::new(&ServerConfig::new(server.uri()), MemorySurface::new())
}

/// Serve a single request with a 200 whose body stops short of its
/// declared Content-Length, then close the connection
async fn truncated_body_server() -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    tokio::spawn(async move {
        let (mut socket, _) = listener.accept().await.unwrap();
        read_request(&mut socket).await;
        socket
            .write_all(b"HTTP/1.1 200 OK\r\nContent-Length: 100\r\n\r\nshort")
            .await
            .unwrap();
        let _ = socket.shutdown().await;
    });

    format!("http://{}", addr)
}

/// Consume headers and body so closing the socket is a clean EOF
async fn read_request(socket: &mut TcpStream) {
    let mut buf = Vec::new();
    let mut chunk = [0u8; 1024];
    loop {
        let n = socket.read(&mut chunk).await.unwrap();
        if n == 0 {
            return;
        }
        buf.extend_from_slice(&chunk[..n]);

        if let Some(end) = buf.windows(4).position(|w| w == b"\r\n\r\n") {
            let headers = String::from_utf8_lossy(&buf[..end]).to_lowercase();
            let length = headers
                .lines()
                .find_map(|l| l.strip_prefix("content-length:"))
                .and_then(|v| v.trim().parse::<usize>().ok())
                .unwrap_or(0);
            if buf.len() >= end + 4 + length {
                return;
            }
        }
    }
}

/// Blank input: log unchanged, no request sent
#[tokio::test]
async fn test_blank_input_sends_nothing() {
    ensure_init();
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    let widget = widget_for(&server);
    assert!(widget.submit("  ").is_none());
    assert!(widget.submit("").is_none());
    assert!(widget.surface().is_empty());
}

/// "hola" is echoed, posted as JSON, and the trimmed reply is shown
#[tokio::test]
async fn test_reply_is_displayed() {
    ensure_init();
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/sugerir-rae"))
        .and(header("content-type", "application/json"))
        .and(body_json(serde_json::json!({ "text": "hola" })))
        .respond_with(ResponseTemplate::new(200).set_body_string("Hola, ¿qué tal?\n"))
        .expect(1)
        .mount(&server)
        .await;

    let widget = widget_for(&server);
    let handle = widget.submit("hola").expect("input accepted");
    assert_eq!(widget.surface().messages(), vec![Message::user("hola")]);

    handle.await.unwrap();

    assert_eq!(
        widget.surface().messages(),
        vec![Message::user("hola"), Message::bot("Hola, ¿qué tal?")]
    );
}

/// A 500 from the server becomes the fallback message
#[tokio::test]
async fn test_server_error_shows_fallback() {
    ensure_init();
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/sugerir-rae"))
        .respond_with(ResponseTemplate::new(500).set_body_string("GROQ_API_KEY not configured"))
        .expect(1)
        .mount(&server)
        .await;

    let widget = widget_for(&server);
    widget.submit("hola").unwrap().await.unwrap();

    let messages = widget.surface().messages();
    assert_eq!(messages.len(), 2);
    assert_eq!(messages[1], Message::bot(FALLBACK_REPLY));
}

/// Transport failure before any response gives the same fallback
#[tokio::test]
async fn test_unreachable_server_shows_fallback() {
    ensure_init();
    let widget = ChatWidget::new(&ServerConfig::new("http://127.0.0.1:1"), MemorySurface::new());

    widget.submit("hola").unwrap().await.unwrap();

    assert_eq!(
        widget.surface().messages(),
        vec![Message::user("hola"), Message::bot(FALLBACK_REPLY)]
    );
}

/// A 200 whose body cannot be read in full gives the same fallback
#[tokio::test]
async fn test_truncated_body_shows_fallback() {
    ensure_init();
    let base_url = truncated_body_server().await;
    let widget = ChatWidget::new(&ServerConfig::new(base_url), MemorySurface::new());

    widget.submit("hola").unwrap().await.unwrap();

    assert_eq!(
        widget.surface().messages(),
        vec![Message::user("hola"), Message::bot(FALLBACK_REPLY)]
    );
}

/// Every accepted send yields exactly one user and one bot message
#[tokio::test]
async fn test_each_send_gets_one_reply() {
    ensure_init();
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/sugerir-rae"))
        .respond_with(ResponseTemplate::new(200).set_body_string("  ok  "))
        .expect(3)
        .mount(&server)
        .await;

    let widget = widget_for(&server);
    let mut field = InputField::new();
    let mut handles = Vec::new();

    for text in ["uno", " ", "dos", "tres"] {
        field.set(text);
        if let Some(handle) = widget.send(&mut field) {
            handles.push(handle);
        }
    }
    for handle in handles {
        handle.await.unwrap();
    }

    let messages = widget.surface().messages();
    assert_eq!(messages.len(), 6);

    // Requests run concurrently, so only the user echoes have a fixed order
    let users: Vec<&str> = messages
        .iter()
        .filter(|m| m.sender() == Sender::User)
        .map(|m| m.text())
        .collect();
    assert_eq!(users, vec!["uno", "dos", "tres"]);
    assert!(messages
        .iter()
        .filter(|m| m.sender() == Sender::Bot)
        .all(|m| m.text() == "ok"));
}
