// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Feed and post creation tests through the HTTP API.

use axum::{
    body::Body,
    http::{header, Request, StatusCode},
};
use chrono::FixedOffset;
use social_feed::models::{BackendTimestamp, ReactionKind};
use social_feed::time_utils::format_timestamp_in;
use tower::ServiceExt;

mod common;

#[tokio::test]
async fn test_feed_newest_first_with_display_fields() {
    let (app, state, db) = common::create_test_app();
    let mut older = common::test_post("1", "user1@example.com");
    older.timestamp = BackendTimestamp::Seconds {
        seconds: 1640995200,
    };
    let mut newer = common::test_post("2", "user2@example.com");
    newer.timestamp = BackendTimestamp::Seconds {
        seconds: 1641038400,
    };
    db.insert_post(older);
    db.insert_post(newer);
    state
        .reactions
        .set_reaction("1", Some("u1"), ReactionKind::Like)
        .await
        .unwrap();

    let response = app
        .oneshot(
            Request::builder()
                .uri("/api/posts?tz_offset=0")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let json = common::json_body(response).await;
    let posts = json.as_array().unwrap();
    assert_eq!(posts.len(), 2);

    assert_eq!(posts[0]["id"], "2");
    assert_eq!(posts[0]["display_time"], "Jan 1, 2022 at 12:00 PM");
    assert_eq!(posts[0]["created_at"], "2022-01-01T12:00:00Z");
    assert_eq!(posts[0]["timestamp"]["seconds"], 1641038400);

    assert_eq!(posts[1]["id"], "1");
    assert_eq!(posts[1]["display_time"], "Jan 1, 2022 at 12:00 AM");
    assert_eq!(posts[1]["reactions"]["like_count"], 1);
    assert_eq!(posts[1]["reactions"]["viewer_reaction"], "none");
}

#[tokio::test]
async fn test_feed_display_time_matches_pattern_in_local_zone() {
    let (app, _, db) = common::create_test_app();
    db.insert_post(common::test_post("1", "user1@example.com"));

    let response = app
        .oneshot(Request::builder().uri("/api/posts").body(Body::empty()).unwrap())
        .await
        .unwrap();

    let json = common::json_body(response).await;
    let display = json[0]["display_time"].as_str().unwrap();
    let pattern = regex::Regex::new(r"^\w{3} \d{1,2}, \d{4} at \d{1,2}:\d{2} (AM|PM)$").unwrap();
    assert!(pattern.is_match(display), "unexpected display time {display}");
}

#[tokio::test]
async fn test_user_posts_filtered_by_author() {
    let (app, _, db) = common::create_test_app();
    db.insert_post(common::test_post("1", "user1@example.com"));
    db.insert_post(common::test_post("2", "user2@example.com"));

    let response = app
        .oneshot(
            Request::builder()
                .uri("/api/users/user2@example.com/posts")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    let json = common::json_body(response).await;
    let posts = json.as_array().unwrap();
    assert_eq!(posts.len(), 1);
    assert_eq!(posts[0]["author"], "user2@example.com");
}

#[tokio::test]
async fn test_whitespace_post_rejected() {
    let (app, state, _) = common::create_test_app();
    let token = common::create_test_jwt("u1@example.com", &state.config.jwt_signing_key);

    let response = app
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/api/posts")
                .header(header::AUTHORIZATION, format!("Bearer {}", token))
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(r#"{"content":"   "}"#))
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert!(state.posts.feed().await.unwrap().is_empty());
}

#[tokio::test]
async fn test_created_post_appears_in_feed() {
    let (app, state, _) = common::create_test_app();
    let token = common::create_test_jwt("u1@example.com", &state.config.jwt_signing_key);

    let response = app
        .clone()
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/api/posts")
                .header(header::AUTHORIZATION, format!("Bearer {}", token))
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(r#"{"content":"hello"}"#))
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::CREATED);
    let created = common::json_body(response).await;
    assert_eq!(created["content"], "hello");
    assert_eq!(created["reactions"]["like_count"], 0);

    let response = app
        .oneshot(Request::builder().uri("/api/posts").body(Body::empty()).unwrap())
        .await
        .unwrap();
    let feed = common::json_body(response).await;
    assert_eq!(feed[0]["id"], created["id"]);
}

#[tokio::test]
async fn test_invalid_tz_offset() {
    let (app, _, db) = common::create_test_app();
    db.insert_post(common::test_post("1", "user1@example.com"));

    let response = app
        .oneshot(
            Request::builder()
                .uri("/api/posts?tz_offset=99999")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_created_post_uses_requested_offset() {
    let (app, state, _) = common::create_test_app();
    let token = common::create_test_jwt("u1@example.com", &state.config.jwt_signing_key);

    let response = app
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/api/posts?tz_offset=-480")
                .header(header::AUTHORIZATION, format!("Bearer {}", token))
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(r#"{"content":"hello"}"#))
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::CREATED);
    let created = common::json_body(response).await;
    let seconds = created["timestamp"]["seconds"].as_i64().unwrap();
    let pst = FixedOffset::east_opt(-480 * 60).unwrap();
    let expected = format_timestamp_in(Some(&BackendTimestamp::Seconds { seconds }), &pst);
    assert_eq!(created["display_time"], expected);
}

#[tokio::test]
async fn test_create_post_with_invalid_offset_writes_nothing() {
    let (app, state, _) = common::create_test_app();
    let token = common::create_test_jwt("u1@example.com", &state.config.jwt_signing_key);

    let response = app
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/api/posts?tz_offset=99999")
                .header(header::AUTHORIZATION, format!("Bearer {}", token))
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(r#"{"content":"hello"}"#))
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert!(state.posts.feed().await.unwrap().is_empty());
}
