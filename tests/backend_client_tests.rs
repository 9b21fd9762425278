use student_assistant_gateway::services::backend_client::BackendHandler;
use student_assistant_gateway::services::handler::{ChatHandler, HandlerError};

use axum::{Json, Router, http::StatusCode, routing::post};
use serde_json::{Value, json};
use std::time::Duration;

/// Serve `app` on an ephemeral local port and return its base url.
async fn spawn_backend(app: Router) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    format!("http://{}", addr)
}

#[tokio::test]
async fn test_forwards_message_and_user_id() {
    let app = Router::new().route(
        "/api/chatbot",
        post(|Json(body): Json<Value>| async move {
            Json(json!({
                "reply": format!("{}|{}", body["message"].as_str().unwrap_or(""), body["user_id"]),
            }))
        }),
    );
    let base = spawn_backend(app).await;
    let handler = BackendHandler::new(&base, "/api/chatbot", Duration::from_secs(5)).unwrap();

    let reply = handler.handle_chat("hi", Some("u1")).await.unwrap();
    assert_eq!(reply, r#"hi|"u1""#);

    let reply = handler.handle_chat("hello", None).await.unwrap();
    assert_eq!(reply, "hello|null");
}

#[tokio::test]
async fn test_non_success_status_is_error() {
    let app = Router::new().route(
        "/api/chatbot",
        post(|| async { (StatusCode::SERVICE_UNAVAILABLE, "down") }),
    );
    let base = spawn_backend(app).await;
    let handler = BackendHandler::new(&base, "/api/chatbot", Duration::from_secs(5)).unwrap();

    let err = handler.handle_chat("hi", None).await.unwrap_err();
    assert!(matches!(err, HandlerError::Status(503)));
}

#[tokio::test]
async fn test_reply_without_reply_field_is_error() {
    let app = Router::new().route(
        "/api/chatbot",
        post(|| async { Json(json!({ "answer": "wrong shape" })) }),
    );
    let base = spawn_backend(app).await;
    let handler = BackendHandler::new(&base, "/api/chatbot", Duration::from_secs(5)).unwrap();

    let err = handler.handle_chat("hi", None).await.unwrap_err();
    assert!(matches!(err, HandlerError::InvalidReply(_)));
}

#[tokio::test]
async fn test_unreachable_backend_is_transport_error() {
    // bind then drop to get a port nothing listens on
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let handler = BackendHandler::new(
        &format!("http://{}", addr),
        "/api/chatbot",
        Duration::from_secs(2),
    )
    .unwrap();

    let err = handler.handle_chat("hi", None).await.unwrap_err();
    assert!(matches!(err, HandlerError::Transport(_)));
}
