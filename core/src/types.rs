//! Wire DTOs for the posts API.
//!
//! # Design
//! These types mirror the server's JSON exactly, including the `timeshamp`
//! spelling the API actually ships — renaming it would break decoding.
//! The mock-server crate defines its own copies; integration tests catch
//! schema drift between the two.

use serde::Deserialize;

/// A feed-list item.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Post {
    #[serde(rename = "postId")]
    pub post_id: i64,
    /// Seconds since the Unix epoch. The wire name is not a typo on our side.
    #[serde(rename = "timeshamp")]
    pub timestamp: f64,
    pub title: String,
    pub preview_text: String,
    pub likes_count: u32,
}

/// Full content of a single post.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct PostDetail {
    #[serde(rename = "postId")]
    pub post_id: i64,
    #[serde(rename = "timeshamp")]
    pub timestamp: f64,
    pub title: String,
    pub text: String,
    /// Absolute image URL; null or absent when the post has no image.
    #[serde(rename = "postImage", default)]
    pub post_image: Option<String>,
    pub likes_count: u32,
}

/// Envelope of `GET main.json`.
#[derive(Debug, Deserialize)]
pub struct FeedResponse {
    pub posts: Vec<Post>,
}

/// Envelope of `GET posts/{id}.json`.
#[derive(Debug, Deserialize)]
pub struct PostDetailResponse {
    pub post: PostDetail,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn feed_post_decodes_with_renamed_fields() {
        let json = r#"{"posts":[{"postId":1,"timeshamp":0,"title":"T","preview_text":"P","likes_count":3}]}"#;
        let feed: FeedResponse = serde_json::from_str(json).unwrap();
        assert_eq!(feed.posts.len(), 1);
        let post = &feed.posts[0];
        assert_eq!(post.post_id, 1);
        assert_eq!(post.timestamp, 0.0);
        assert_eq!(post.title, "T");
        assert_eq!(post.preview_text, "P");
        assert_eq!(post.likes_count, 3);
    }

    #[test]
    fn feed_preserves_server_order() {
        let json = r#"{"posts":[
            {"postId":9,"timeshamp":1.0,"title":"a","preview_text":"","likes_count":0},
            {"postId":2,"timeshamp":2.0,"title":"b","preview_text":"","likes_count":0},
            {"postId":5,"timeshamp":3.0,"title":"c","preview_text":"","likes_count":0}
        ]}"#;
        let feed: FeedResponse = serde_json::from_str(json).unwrap();
        let ids: Vec<i64> = feed.posts.iter().map(|p| p.post_id).collect();
        assert_eq!(ids, vec![9, 2, 5]);
    }

    #[test]
    fn missing_field_fails_the_whole_payload() {
        let json = r#"{"posts":[{"postId":1,"timeshamp":0,"preview_text":"P","likes_count":3}]}"#;
        let result: Result<FeedResponse, _> = serde_json::from_str(json);
        assert!(result.is_err());
    }

    #[test]
    fn correctly_spelled_timestamp_is_rejected() {
        let json = r#"{"posts":[{"postId":1,"timestamp":0,"title":"T","preview_text":"P","likes_count":3}]}"#;
        let result: Result<FeedResponse, _> = serde_json::from_str(json);
        assert!(result.is_err());
    }

    #[test]
    fn wrong_type_fails_the_whole_payload() {
        let json = r#"{"posts":[{"postId":"one","timeshamp":0,"title":"T","preview_text":"P","likes_count":3}]}"#;
        let result: Result<FeedResponse, _> = serde_json::from_str(json);
        assert!(result.is_err());
    }

    #[test]
    fn detail_decodes_with_image_url() {
        let json = r#"{"post":{"postId":7,"timeshamp":1575655535.0,"title":"T","text":"body","postImage":"https://example.com/i.png","likes_count":9}}"#;
        let detail = serde_json::from_str::<PostDetailResponse>(json).unwrap().post;
        assert_eq!(detail.post_id, 7);
        assert_eq!(detail.text, "body");
        assert_eq!(detail.post_image.as_deref(), Some("https://example.com/i.png"));
    }

    #[test]
    fn detail_image_may_be_null_or_absent() {
        let null_image = r#"{"post":{"postId":7,"timeshamp":0,"title":"T","text":"b","postImage":null,"likes_count":0}}"#;
        let detail = serde_json::from_str::<PostDetailResponse>(null_image).unwrap().post;
        assert!(detail.post_image.is_none());

        let absent = r#"{"post":{"postId":7,"timeshamp":0,"title":"T","text":"b","likes_count":0}}"#;
        let detail = serde_json::from_str::<PostDetailResponse>(absent).unwrap().post;
        assert!(detail.post_image.is_none());
    }
}
