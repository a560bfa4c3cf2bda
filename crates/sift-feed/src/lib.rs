//! Feed post model and feed-file loading.
//!
//! A feed is a local JSON Lines export of posts (one object per line). This
//! crate provides the [`Post`] model and [`FeedStore`] for reading feed
//! files; posts implement [`sift_filter_rs::Matchable`], so a parsed filter
//! evaluates against them directly.
//!
//! # Example
//!
//! ```no_run
//! use sift_feed_rs::FeedStore;
//! use sift_filter_rs::parse;
//!
//! let filter = parse("blue or green and not red")?;
//! let mut posts = FeedStore::new("timeline.jsonl").load()?;
//! posts.retain(|post| filter.matches(post));
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

mod post;
mod store;

pub use post::Post;
pub use store::{read_posts, FeedError, FeedResult, FeedStore, ReadPostsError};
