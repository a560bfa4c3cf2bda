//! Post output formatting.

use owo_colors::OwoColorize;
use serde::Serialize;
use sift_feed_rs::Post;

use super::helpers::{single_line, truncate_id, truncate_str};

/// JSON output structure for a single post.
#[derive(Serialize)]
pub struct PostOutput<'a> {
    pub id: &'a str,
    pub author: &'a str,
    pub text: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lang: Option<&'a str>,
}

/// Formats posts as a JSON array.
pub fn format_posts_json(posts: &[Post]) -> Result<String, serde_json::Error> {
    let output: Vec<PostOutput> = posts
        .iter()
        .map(|post| PostOutput {
            id: &post.id,
            author: &post.author,
            text: &post.text,
            created_at: post.created_at.as_deref(),
            lang: post.lang.as_deref(),
        })
        .collect();

    serde_json::to_string_pretty(&output)
}

/// Formats posts as a table.
pub fn format_posts_table(posts: &[Post], use_colors: bool) -> String {
    if posts.is_empty() {
        return "No posts matched.\n".to_string();
    }

    let mut output = String::new();

    // Header
    let header = format!("{:<12} {:<18} {}", "ID", "Author", "Text");
    if use_colors {
        output.push_str(&format!("{}\n", header.dimmed()));
    } else {
        output.push_str(&header);
        output.push('\n');
    }

    // Posts
    for post in posts {
        let id = truncate_id(&post.id);
        let author = truncate_str(&post.author, 18);
        let text = truncate_str(&single_line(&post.text), 70);

        let line = format!("{:<12} {:<18} {}", id, author, text);
        output.push_str(&line);
        output.push('\n');
    }

    output
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_post(id: &str, author: &str, text: &str) -> Post {
        Post {
            id: id.to_string(),
            author: author.to_string(),
            text: text.to_string(),
            created_at: None,
            lang: None,
        }
    }

    #[test]
    fn test_format_posts_table_empty() {
        assert_eq!(format_posts_table(&[], false), "No posts matched.\n");
    }

    #[test]
    fn test_format_posts_table_rows() {
        let posts = vec![
            make_post("1", "ada", "I love blue skies"),
            make_post("2", "grace", "green and\nred mix"),
        ];

        let output = format_posts_table(&posts, false);
        let lines: Vec<&str> = output.lines().collect();

        assert_eq!(lines.len(), 3);
        assert!(lines[0].starts_with("ID"));
        assert!(lines[1].contains("ada"));
        assert!(lines[1].contains("I love blue skies"));
        // Multi-line text is flattened for the table
        assert!(lines[2].contains("green and red mix"));
    }

    #[test]
    fn test_format_posts_table_multibyte_id() {
        // 13-byte ID whose 12th byte boundary splits the 'é'
        let posts = vec![make_post("12345678901é", "ada", "blue")];

        let output = format_posts_table(&posts, false);
        assert!(output.contains("12345678901é"));
    }

    #[test]
    fn test_format_posts_json_is_array() {
        let posts = vec![make_post("1", "ada", "blue")];
        let json = format_posts_json(&posts).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();

        let array = value.as_array().unwrap();
        assert_eq!(array.len(), 1);
        assert_eq!(array[0]["id"], "1");
        assert_eq!(array[0]["author"], "ada");
        assert_eq!(array[0]["text"], "blue");
        // Absent optionals are skipped entirely
        assert!(array[0].get("created_at").is_none());
        assert!(array[0].get("lang").is_none());
    }

    #[test]
    fn test_format_posts_json_keeps_optionals() {
        let posts = vec![Post {
            id: "9".to_string(),
            author: "ada".to_string(),
            text: "blue".to_string(),
            created_at: Some("2014-07-08T11:22:33Z".to_string()),
            lang: Some("en".to_string()),
        }];

        let json = format_posts_json(&posts).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value[0]["created_at"], "2014-07-08T11:22:33Z");
        assert_eq!(value[0]["lang"], "en");
    }
}
