mod common;

use axum::http::StatusCode;
use common::{ada_announcement, post_json, post_raw, router_with, sample_users, send};
use frontdesk_service::models::OperationResult;
use frontdesk_service::services::MockDirectory;
use serde_json::json;
use std::sync::Arc;

#[tokio::test]
async fn relays_visitor_to_staff_member() {
    let directory = Arc::new(MockDirectory::new(sample_users()));
    let router = router_with(directory.clone());

    let (status, body) = send(&router, post_json("/staff/U123", &ada_announcement())).await;

    assert_eq!(status, StatusCode::CREATED);
    let result: OperationResult = serde_json::from_str(&body).unwrap();
    assert_eq!(result, OperationResult::sent());
    assert_eq!(result.message, "Message successfully sent");

    let sent = directory.sent_messages().await;
    assert_eq!(sent.len(), 1);
    assert_eq!(sent[0].channel, "U123");
    assert!(sent[0].text.contains("Ada Lovelace"));
    assert!(sent[0].as_user);
    assert_eq!(sent[0].attachments.len(), 1);
    assert_eq!(sent[0].attachments[0].text, "Interview");
    assert_eq!(sent[0].attachments[0].color, "#36a64f");
}

#[tokio::test]
async fn greeting_names_body_staff_id_and_recipient_comes_from_path() {
    let directory = Arc::new(MockDirectory::new(sample_users()));
    let router = router_with(directory.clone());

    let (status, _) = send(&router, post_json("/staff/U777", &ada_announcement())).await;

    assert_eq!(status, StatusCode::CREATED);
    let sent = directory.sent_messages().await;
    assert_eq!(sent[0].channel, "U777");
    assert_eq!(
        sent[0].text,
        "Hey U123, Ada Lovelace is here for you at the front desk."
    );
}

#[tokio::test]
async fn malformed_json_is_400_without_sending() {
    let directory = Arc::new(MockDirectory::new(sample_users()));
    let router = router_with(directory.clone());

    let (status, body) = send(&router, post_raw("/staff/U123", "{not json")).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    let result: OperationResult = serde_json::from_str(&body).unwrap();
    assert!(!result.success);
    assert!(result.message.starts_with("Invalid visitor announcement"));
    assert!(directory.sent_messages().await.is_empty());
}

#[tokio::test]
async fn missing_fields_are_400_without_sending() {
    let directory = Arc::new(MockDirectory::new(sample_users()));
    let router = router_with(directory.clone());

    let body = json!({ "firstName": "Ada", "lastName": "Lovelace" });
    let (status, _) = send(&router, post_json("/staff/U123", &body)).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(directory.sent_messages().await.is_empty());
}

#[tokio::test]
async fn empty_body_is_400() {
    let directory = Arc::new(MockDirectory::new(sample_users()));
    let router = router_with(directory.clone());

    let (status, _) = send(&router, post_raw("/staff/U123", "")).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(directory.sent_messages().await.is_empty());
}

#[tokio::test]
async fn wrong_field_types_are_400() {
    let directory = Arc::new(MockDirectory::new(sample_users()));
    let router = router_with(directory.clone());

    let body = json!({
        "firstName": "Ada",
        "lastName": "Lovelace",
        "purpose": 42,
        "staffId": "U123"
    });
    let (status, _) = send(&router, post_json("/staff/U123", &body)).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(directory.sent_messages().await.is_empty());
}

#[tokio::test]
async fn messaging_failure_is_500_with_failure_result() {
    let directory = Arc::new(MockDirectory::new(sample_users()).failing_post());
    let router = router_with(directory.clone());

    let (status, body) = send(&router, post_json("/staff/U123", &ada_announcement())).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    let result: OperationResult = serde_json::from_str(&body).unwrap();
    assert_eq!(result, OperationResult::failed());
    assert_eq!(result.message, "Failed to send message");
    assert_eq!(directory.sent_messages().await.len(), 1);
}

#[tokio::test]
async fn repeated_requests_are_not_deduplicated() {
    let directory = Arc::new(MockDirectory::new(sample_users()));
    let router = router_with(directory.clone());

    let (first, _) = send(&router, post_json("/staff/U123", &ada_announcement())).await;
    let (second, _) = send(&router, post_json("/staff/U123", &ada_announcement())).await;

    assert_eq!(first, StatusCode::CREATED);
    assert_eq!(second, StatusCode::CREATED);
    assert_eq!(directory.sent_messages().await.len(), 2);
}

#[tokio::test]
async fn body_is_accepted_without_content_type() {
    let directory = Arc::new(MockDirectory::new(sample_users()));
    let router = router_with(directory.clone());

    let request = axum::http::Request::builder()
        .method("POST")
        .uri("/staff/U123")
        .body(axum::body::Body::from(ada_announcement().to_string()))
        .unwrap();
    let (status, _) = send(&router, request).await;

    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(directory.sent_messages().await.len(), 1);
}
