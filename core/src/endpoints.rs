//! Logical request → relative path mapping.

/// The two requests the posts API serves.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Endpoint {
    Feed,
    PostDetail(i64),
}

impl Endpoint {
    /// Relative path under the API base. Ids are embedded verbatim; an id
    /// unknown to the server fails at fetch time, not here.
    pub fn path(&self) -> String {
        match self {
            Endpoint::Feed => "main.json".to_string(),
            Endpoint::PostDetail(id) => format!("posts/{id}.json"),
        }
    }
}
