use super::common::*;
use axum::body::{Body, Bytes};
use axum::extract::State;
use axum::http::{header, Request, StatusCode};
use serde_json::json;
use std::sync::Arc;
use tower::ServiceExt;

use crate::coach::{coach_router, FirstPicker, MAX_PRODUCT_CHARS};

fn post_json(body: &str) -> Request<Body> {
    Request::post("/mcp/carbon_score")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

#[tokio::test]
async fn calculate_route_returns_score_praise_and_tips() {
    let router = coach_router(Arc::new(build_service()));

    let response = router
        .oneshot(post_json(
            &json!({
                "mode": "calculate",
                "answers": {
                    "transport": "Car",
                    "shopping": "Groceries & Food",
                    "electronics_freq": "Rarely",
                },
            })
            .to_string(),
        ))
        .await
        .expect("route executes");

    assert_eq!(response.status(), StatusCode::OK);
    let payload = read_json_body(response).await;
    assert_eq!(payload["carbon_score"], json!(3.6));
    assert_eq!(payload["tier"], json!("good"));
    assert_eq!(payload["praise"], json!("Good job! You're doing well! 💪"));
    assert_eq!(payload["tips"].as_array().map(Vec::len), Some(3));
}

#[tokio::test]
async fn product_route_lists_alternatives_with_reasons() {
    let router = coach_router(Arc::new(build_service()));

    let response = router
        .oneshot(post_json(
            r#"{"mode":"product","product":"I want a new Smartphone please"}"#,
        ))
        .await
        .expect("route executes");

    assert_eq!(response.status(), StatusCode::OK);
    let payload = read_json_body(response).await;
    assert_eq!(payload["product"], json!("I want a new Smartphone please"));
    assert_eq!(payload["category"], json!("phone"));
    assert_eq!(payload["carbon_score"], json!(70.0));
    let alternatives = payload["alternatives"].as_array().expect("alternatives");
    assert_eq!(alternatives[0]["name"], json!("Refurbished phone model X"));
    assert_eq!(alternatives[0]["carbon_score"], json!(50.0));
    assert!(alternatives[0]["reason"].as_str().is_some());
}

#[tokio::test]
async fn handler_rejects_invalid_choice_with_bad_request() {
    let service = Arc::new(build_service());

    let response = crate::coach::router::carbon_score_handler::<FirstPicker>(
        State(service),
        Bytes::from(
            json!({
                "mode": "calculate",
                "transport": "Teleport",
                "shopping": "Home & Living",
                "electronics_freq": "Rarely",
            })
            .to_string(),
        ),
    )
    .await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let payload = read_json_body(response).await;
    assert_eq!(
        payload["message"],
        json!("Invalid transport option 'Teleport'.")
    );
}

#[tokio::test]
async fn malformed_json_is_a_bad_request() {
    let router = coach_router(Arc::new(build_service()));

    let response = router
        .oneshot(post_json("{not json"))
        .await
        .expect("route executes");

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let payload = read_json_body(response).await;
    assert_eq!(payload["message"], json!("Invalid JSON format."));
}

#[tokio::test]
async fn unknown_mode_is_rejected() {
    let router = coach_router(Arc::new(build_service()));

    let response = router
        .oneshot(post_json(r#"{"mode":"horoscope"}"#))
        .await
        .expect("route executes");

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let payload = read_json_body(response).await;
    assert!(payload["message"]
        .as_str()
        .unwrap_or_default()
        .starts_with("Invalid mode 'horoscope'"));
}

#[tokio::test]
async fn challenge_route_reports_tie() {
    let router = coach_router(Arc::new(build_service()));

    let response = router
        .oneshot(post_json(
            r#"{"mode":"challenge","my_score":5,"friend_score":5}"#,
        ))
        .await
        .expect("route executes");

    assert_eq!(response.status(), StatusCode::OK);
    let payload = read_json_body(response).await;
    assert_eq!(payload["message"], json!("Same footprint. Team effort! 🤝"));
    assert_eq!(payload["outcome"], json!("tie"));
    assert!(payload.get("gap_percent").is_none());
}

#[tokio::test]
async fn body_without_content_type_is_still_parsed() {
    let router = coach_router(Arc::new(build_service()));

    let response = router
        .oneshot(
            Request::post("/mcp/carbon_score")
                .body(Body::from(r#"{"mode":"quiz"}"#))
                .unwrap(),
        )
        .await
        .expect("route executes");

    assert_eq!(response.status(), StatusCode::OK);
    let payload = read_json_body(response).await;
    assert_eq!(payload["questions"].as_array().map(Vec::len), Some(3));
}

#[tokio::test]
async fn non_object_json_is_a_bad_request() {
    let router = coach_router(Arc::new(build_service()));

    let response = router
        .oneshot(post_json(r#"["quiz"]"#))
        .await
        .expect("route executes");

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let payload = read_json_body(response).await;
    assert_eq!(payload["message"], json!("Invalid JSON format."));
}

#[tokio::test]
async fn fields_unused_by_the_mode_are_ignored() {
    let router = coach_router(Arc::new(build_service()));

    let response = router
        .oneshot(post_json(r#"{"mode":"quiz","product":123,"quantity":"many"}"#))
        .await
        .expect("route executes");

    assert_eq!(response.status(), StatusCode::OK);
    let payload = read_json_body(response).await;
    assert!(payload["intro"].as_str().is_some());
}

#[tokio::test]
async fn wrongly_typed_fields_report_the_field_problem() {
    let cases = [
        (
            r#"{"mode":"product","product":"phone","quantity":-1}"#,
            "Quantity must be a whole number of at least 1.",
        ),
        (
            r#"{"mode":"product","product":"phone","quantity":"2"}"#,
            "Quantity must be a whole number of at least 1.",
        ),
        (
            r#"{"mode":"challenge","my_score":"5","friend_score":7}"#,
            "my_score must be a finite, non-negative number.",
        ),
        (
            r#"{"mode":"calculate","transport":7,"shopping":"Home & Living","electronics_freq":"Rarely"}"#,
            "Invalid transport option '7'.",
        ),
    ];

    for (body, message) in cases {
        let router = coach_router(Arc::new(build_service()));
        let response = router.oneshot(post_json(body)).await.expect("route executes");

        assert_eq!(response.status(), StatusCode::BAD_REQUEST, "{body}");
        let payload = read_json_body(response).await;
        assert_eq!(payload["message"], json!(message), "{body}");
    }
}

#[tokio::test]
async fn oversized_product_text_is_rejected_before_matching() {
    let router = coach_router(Arc::new(build_service()));
    let text = "phone ".repeat(MAX_PRODUCT_CHARS);

    let response = router
        .oneshot(post_json(
            &json!({ "mode": "product", "product": text }).to_string(),
        ))
        .await
        .expect("route executes");

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let payload = read_json_body(response).await;
    assert!(payload["message"]
        .as_str()
        .unwrap_or_default()
        .starts_with("Product text is too long"));
}
