//! HTTP sender against a mock notification service.

use herald::{
    Config, DispatchError, HttpSender, KeywordIntentParser, NotificationRequest, Pipeline,
    Sender, SenderExt, TransportError, config::Url, transcript::CONVERSATION,
};
use std::time::Duration;
use wiremock::{
    Mock, MockServer, ResponseTemplate,
    matchers::{body_json, method, path},
};

fn endpoint(server: &MockServer) -> Url {
    format!("{}/notify", server.uri()).parse().unwrap()
}

#[tokio::test]
async fn test_posts_json_body_and_returns_response() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/notify"))
        .and(body_json(serde_json::json!({
            "recipient": "DevOps",
            "message": "Urgent: Meeting at 10 AM tomorrow",
            "channel": "email"
        })))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(serde_json::json!({ "status": "Notification sent" })),
        )
        .expect(1)
        .mount(&server)
        .await;

    let sender = HttpSender::new(endpoint(&server));
    let result = sender
        .send(NotificationRequest::new("DevOps", "Urgent: Meeting at 10 AM tomorrow"))
        .await
        .unwrap();

    assert_eq!(result, serde_json::json!({ "status": "Notification sent" }));
}

#[tokio::test]
async fn test_error_status_json_body_returned_verbatim() {
    for (status, body) in [
        (404, serde_json::json!({ "error": "recipient not found" })),
        (503, serde_json::json!({ "error": "maintenance", "retry_after": 30 })),
    ] {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/notify"))
            .respond_with(ResponseTemplate::new(status).set_body_json(body.clone()))
            .expect(1)
            .mount(&server)
            .await;

        let sender = HttpSender::new(endpoint(&server));
        let result = sender
            .send(NotificationRequest::new("DevOps", "hi"))
            .await
            .unwrap();

        assert_eq!(result, body, "status {status}");
    }
}

#[tokio::test]
async fn test_error_status_non_json_body_is_decode_error() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(503).set_body_string("maintenance"))
        .mount(&server)
        .await;

    let sender = HttpSender::new(endpoint(&server));
    let err = sender
        .send(NotificationRequest::new("DevOps", "hi"))
        .await
        .unwrap_err();

    assert!(matches!(err, TransportError::Decode(_)));
}

#[tokio::test]
async fn test_non_json_body_is_decode_error() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_string("sent!"))
        .mount(&server)
        .await;

    let sender = HttpSender::new(endpoint(&server));
    let err = sender
        .send(NotificationRequest::new("DevOps", "hi"))
        .await
        .unwrap_err();

    assert!(matches!(err, TransportError::Decode(_)));
}

#[tokio::test]
async fn test_slow_server_times_out() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(serde_json::json!({ "status": "ok" }))
                .set_delay(Duration::from_millis(500)),
        )
        .mount(&server)
        .await;

    let sender = HttpSender::new(endpoint(&server)).with_timeout(Duration::from_millis(50));
    let err = sender
        .send(NotificationRequest::new("DevOps", "hi"))
        .await
        .unwrap_err();

    assert!(matches!(err, TransportError::Timeout(_)));
}

#[tokio::test]
async fn test_unreachable_endpoint_is_request_error() {
    // Reserve a free port, then release it so nothing is listening.
    let addr = std::net::TcpListener::bind("127.0.0.1:0")
        .unwrap()
        .local_addr()
        .unwrap();
    let sender = HttpSender::new(format!("http://{addr}/notify").parse().unwrap())
        .with_timeout(Duration::from_secs(5));
    let err = sender
        .send(NotificationRequest::new("DevOps", "hi"))
        .await
        .unwrap_err();

    assert!(matches!(err, TransportError::Request(_)));
}

#[tokio::test]
async fn test_production_pipeline_against_mock() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/notify"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({ "status": "ok" })))
        .expect(1)
        .mount(&server)
        .await;

    let config = Config::new(&format!("{}/notify", server.uri()), Duration::from_secs(5)).unwrap();
    let pipeline = Pipeline::new(KeywordIntentParser::new(), herald::dispatcher(&config).unwrap());

    let result = pipeline.run(CONVERSATION).await.unwrap();
    assert_eq!(result, serde_json::json!({ "status": "ok" }));

    let err = pipeline.run("nothing to see here").await.unwrap_err();
    assert!(matches!(err, DispatchError::InvalidIntent(_)));
}
