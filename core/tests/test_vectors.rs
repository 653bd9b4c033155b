//! Verify outcome classification against JSON test vectors in `test-vectors/`.
//!
//! # Design
//! Each vector describes a simulated response (or transport failure) and
//! the expected result. Bodies are stored as JSON values where possible
//! (`body`) and re-serialized, so the vectors stay readable; raw strings
//! (`body_raw`) cover the not-JSON cases. Expected payloads are compared
//! through the decoded types, not raw strings, to avoid field-ordering
//! false negatives.

use std::sync::Arc;

use async_trait::async_trait;
use posts_core::{
    ApiError, HttpResponse, Post, PostDetail, PostsClient, PostsService, Transport, TransportError,
};
use reqwest::Url;

/// Replays one canned outcome for every request.
struct VectorTransport {
    response: Result<HttpResponse, TransportError>,
}

#[async_trait]
impl Transport for VectorTransport {
    async fn get(&self, _url: &Url) -> Result<HttpResponse, TransportError> {
        self.response.clone()
    }
}

fn client_for(case: &serde_json::Value) -> PostsClient {
    let response = if let Some(message) = case.get("transport_error") {
        Err(TransportError(message.as_str().unwrap().to_string()))
    } else {
        let body = if let Some(raw) = case.get("body_raw") {
            raw.as_str().unwrap().as_bytes().to_vec()
        } else {
            serde_json::to_vec(&case["body"]).unwrap()
        };
        Ok(HttpResponse {
            status: case["status"].as_u64().unwrap() as u16,
            body,
        })
    };
    PostsClient::with_base_url(
        Arc::new(VectorTransport { response }),
        "https://example.com/api/",
    )
}

fn assert_expected_error(name: &str, err: ApiError, expected: &str) {
    let matched = match expected {
        "InvalidResponse" => matches!(err, ApiError::InvalidResponse),
        "Decoding" => matches!(err, ApiError::Decoding(_)),
        "Network" => matches!(err, ApiError::Network(_)),
        "InvalidUrl" => matches!(err, ApiError::InvalidUrl(_)),
        other => panic!("{name}: unknown expected_error: {other}"),
    };
    assert!(matched, "{name}: expected {expected}, got {err:?}");
}

#[tokio::test]
async fn feed_test_vectors() {
    let raw = include_str!("../../test-vectors/feed.json");
    let vectors: serde_json::Value = serde_json::from_str(raw).unwrap();

    for case in vectors["cases"].as_array().unwrap() {
        let name = case["name"].as_str().unwrap();
        let result = client_for(case).fetch_feed().await;

        if let Some(expected_error) = case.get("expected_error") {
            let err = result.expect_err(name);
            assert_expected_error(name, err, expected_error.as_str().unwrap());
        } else {
            let posts = result.unwrap_or_else(|e| panic!("{name}: {e}"));
            let expected: Vec<Post> =
                serde_json::from_value(case["expected_posts"].clone()).unwrap();
            assert_eq!(posts, expected, "{name}: decoded posts");
        }
    }
}

#[tokio::test]
async fn post_detail_test_vectors() {
    let raw = include_str!("../../test-vectors/post_detail.json");
    let vectors: serde_json::Value = serde_json::from_str(raw).unwrap();

    for case in vectors["cases"].as_array().unwrap() {
        let name = case["name"].as_str().unwrap();
        let id = case["input_id"].as_i64().unwrap();
        let result = client_for(case).fetch_post_detail(id).await;

        if let Some(expected_error) = case.get("expected_error") {
            let err = result.expect_err(name);
            assert_expected_error(name, err, expected_error.as_str().unwrap());
        } else {
            let detail = result.unwrap_or_else(|e| panic!("{name}: {e}"));
            let expected: PostDetail =
                serde_json::from_value(case["expected_detail"].clone()).unwrap();
            assert_eq!(detail, expected, "{name}: decoded detail");
        }
    }
}
