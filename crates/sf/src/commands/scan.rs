//! Scan command implementation.
//!
//! Parse a filter expression, load a feed file, and print the posts the
//! filter matches.

use std::path::{Path, PathBuf};

use sift_feed_rs::{FeedStore, Post};
use sift_filter_rs::{parse, Filter};

use super::config::load_config;
use super::{CommandContext, CommandError, Result};
use crate::output;

/// Options for the scan command.
pub struct ScanOptions {
    /// Raw filter expression.
    pub expr: String,
    /// Feed file from the `--feed` flag or the `SF_FEED` env var.
    pub feed: Option<PathBuf>,
    /// Maximum number of posts to print.
    pub limit: Option<u32>,
    /// Keep the posts the filter does not match instead.
    pub invert: bool,
}

/// Executes the scan command.
pub fn execute(ctx: &CommandContext, opts: &ScanOptions) -> Result<()> {
    let filter = parse(&opts.expr)?;
    let feed_path = resolve_feed(opts.feed.as_deref())?;

    if ctx.verbose {
        eprintln!("Scanning {} for {}", feed_path.display(), filter);
    }

    let store = FeedStore::new(&feed_path);
    let posts = store.load()?;
    let scanned = posts.len();

    let selected = select_posts(posts, &filter, opts.invert, opts.limit);

    if ctx.verbose {
        eprintln!("{} of {} posts kept", selected.len(), scanned);
    }

    if ctx.json_output {
        println!("{}", output::format_posts_json(&selected)?);
    } else if !ctx.quiet {
        print!("{}", output::format_posts_table(&selected, ctx.use_colors));
    }

    Ok(())
}

/// Resolves the feed file path.
///
/// The `--feed` flag and the `SF_FEED` environment variable both arrive
/// through clap (`env = "SF_FEED"`), so by the time this runs the only
/// remaining fallback is the `feed` key in the config file.
fn resolve_feed(flag: Option<&Path>) -> Result<PathBuf> {
    if let Some(path) = flag {
        return Ok(path.to_path_buf());
    }

    if let Ok(config) = load_config() {
        if let Some(feed) = config.feed {
            return Ok(PathBuf::from(feed));
        }
    }

    Err(CommandError::Config(
        "No feed file specified. Use --feed, set SF_FEED, or set feed in the config file."
            .to_string(),
    ))
}

/// Applies the filter to the loaded posts, honoring invert and limit.
fn select_posts(posts: Vec<Post>, filter: &Filter, invert: bool, limit: Option<u32>) -> Vec<Post> {
    let mut selected: Vec<Post> = posts
        .into_iter()
        .filter(|post| filter.matches(post) != invert)
        .collect();

    if let Some(limit) = limit {
        selected.truncate(limit as usize);
    }

    selected
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;
    use std::env;
    use std::fs;
    use std::io::Write;
    use tempfile::TempDir;

    fn make_post(id: &str, text: &str) -> Post {
        Post {
            id: id.to_string(),
            author: "tester".to_string(),
            text: text.to_string(),
            created_at: None,
            lang: None,
        }
    }

    fn sample_posts() -> Vec<Post> {
        vec![
            make_post("1", "I love blue skies"),
            make_post("2", "green and red mix"),
            make_post("3", "yellow sun, purple flower"),
        ]
    }

    // ==================== select_posts ====================

    #[test]
    fn test_select_posts_keeps_matches() {
        let filter = parse("blue or green and not red").unwrap();
        let selected = select_posts(sample_posts(), &filter, false, None);

        let ids: Vec<&str> = selected.iter().map(|p| p.id.as_str()).collect();
        assert_eq!(ids, ["1"]);
    }

    #[test]
    fn test_select_posts_invert() {
        let filter = parse("blue or green and not red").unwrap();
        let selected = select_posts(sample_posts(), &filter, true, None);

        let ids: Vec<&str> = selected.iter().map(|p| p.id.as_str()).collect();
        assert_eq!(ids, ["2", "3"]);
    }

    #[test]
    fn test_select_posts_limit() {
        let filter = parse("blue or yellow or green").unwrap();
        let selected = select_posts(sample_posts(), &filter, false, Some(2));
        assert_eq!(selected.len(), 2);
        assert_eq!(selected[0].id, "1");
        assert_eq!(selected[1].id, "2");
    }

    #[test]
    fn test_select_posts_limit_larger_than_matches() {
        let filter = parse("blue").unwrap();
        let selected = select_posts(sample_posts(), &filter, false, Some(50));
        assert_eq!(selected.len(), 1);
    }

    #[test]
    fn test_select_posts_preserves_feed_order() {
        let filter = parse("not nothing-matches-this").unwrap();
        let selected = select_posts(sample_posts(), &filter, false, None);

        let ids: Vec<&str> = selected.iter().map(|p| p.id.as_str()).collect();
        assert_eq!(ids, ["1", "2", "3"]);
    }

    // ==================== resolve_feed ====================

    #[test]
    fn test_resolve_feed_from_flag() {
        let path = PathBuf::from("/tmp/feed.jsonl");
        let resolved = resolve_feed(Some(&path)).unwrap();
        assert_eq!(resolved, path);
    }

    #[test]
    #[serial]
    fn test_resolve_feed_from_config() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join("config.toml");

        let mut file = fs::File::create(&config_path).unwrap();
        writeln!(file, r#"feed = "/data/timeline.jsonl""#).unwrap();

        let original = env::var("SF_CONFIG").ok();
        env::set_var("SF_CONFIG", config_path.to_str().unwrap());

        let resolved = resolve_feed(None);

        if let Some(val) = original {
            env::set_var("SF_CONFIG", val);
        } else {
            env::remove_var("SF_CONFIG");
        }

        assert_eq!(resolved.unwrap(), PathBuf::from("/data/timeline.jsonl"));
    }

    #[test]
    #[serial]
    fn test_resolve_feed_flag_overrides_config() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join("config.toml");

        let mut file = fs::File::create(&config_path).unwrap();
        writeln!(file, r#"feed = "/data/timeline.jsonl""#).unwrap();

        let original = env::var("SF_CONFIG").ok();
        env::set_var("SF_CONFIG", config_path.to_str().unwrap());

        let flag = PathBuf::from("/data/other.jsonl");
        let resolved = resolve_feed(Some(&flag));

        if let Some(val) = original {
            env::set_var("SF_CONFIG", val);
        } else {
            env::remove_var("SF_CONFIG");
        }

        assert_eq!(resolved.unwrap(), flag);
    }

    #[test]
    #[serial]
    fn test_resolve_feed_unset_is_config_error() {
        // Point the config at a path that does not exist so the fallback
        // chain has nowhere left to go.
        let original = env::var("SF_CONFIG").ok();
        env::set_var("SF_CONFIG", "/tmp/sf-test-nonexistent/config.toml");

        let resolved = resolve_feed(None);

        if let Some(val) = original {
            env::set_var("SF_CONFIG", val);
        } else {
            env::remove_var("SF_CONFIG");
        }

        let err = resolved.unwrap_err();
        assert!(matches!(err, CommandError::Config(_)));
        assert!(err.to_string().contains("No feed file specified"));
    }
}
