//! The feed post model.

use serde::{Deserialize, Serialize};
use sift_filter_rs::Matchable;

/// One post from a feed export.
///
/// Only `id`, `author`, and `text` are required in feed files; everything
/// else defaults when absent and is omitted when re-serializing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Post {
    /// The ID of the post.
    pub id: String,

    /// Handle of the account that wrote the post.
    pub author: String,

    /// The text content of the post.
    pub text: String,

    /// When the post was published, as an opaque timestamp string.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,

    /// BCP-47 language tag, if the feed annotated one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lang: Option<String>,
}

/// Word filters search a post's text content.
impl Matchable for Post {
    fn text(&self) -> &str {
        &self.text
    }
}
