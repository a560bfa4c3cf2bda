//! Feed file loading.
//!
//! A feed file is JSON Lines: one post object per line, blank lines ignored.
//! Loading is strict; the first malformed line aborts with its 1-based line
//! number.

use std::fs;
use std::io::{self, BufRead};
use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::Post;

/// Errors that can occur while loading a feed file.
#[derive(Debug, Error)]
pub enum FeedError {
    /// I/O error opening or reading the feed file.
    #[error("failed to read feed file '{path}': {source}")]
    Read {
        /// The path that failed to read.
        path: PathBuf,
        /// The underlying I/O error.
        #[source]
        source: io::Error,
    },

    /// A line that is not a valid post object.
    #[error("invalid post in '{path}' on line {line}: {source}")]
    Parse {
        /// The feed file containing the bad line.
        path: PathBuf,
        /// 1-based line number of the bad line.
        line: usize,
        /// The underlying JSON error.
        #[source]
        source: serde_json::Error,
    },
}

/// Result type for feed store operations.
pub type FeedResult<T> = std::result::Result<T, FeedError>;

/// Errors from parsing a stream of feed lines, with no file path attached.
///
/// [`FeedStore::load`] converts these into [`FeedError`] with the path
/// filled in.
#[derive(Debug, Error)]
pub enum ReadPostsError {
    /// I/O error while reading a line.
    #[error("failed to read feed line {line}: {source}")]
    Io {
        /// 1-based number of the line being read.
        line: usize,
        /// The underlying I/O error.
        #[source]
        source: io::Error,
    },

    /// A line that is not a valid post object.
    #[error("invalid post on line {line}: {source}")]
    Parse {
        /// 1-based number of the bad line.
        line: usize,
        /// The underlying JSON error.
        #[source]
        source: serde_json::Error,
    },
}

/// Reads posts from a JSON Lines stream.
///
/// Blank lines are skipped; line numbers in errors are 1-based and count
/// skipped lines too.
pub fn read_posts<R: BufRead>(reader: R) -> std::result::Result<Vec<Post>, ReadPostsError> {
    let mut posts = Vec::new();

    for (index, line) in reader.lines().enumerate() {
        let number = index + 1;
        let line = line.map_err(|e| ReadPostsError::Io {
            line: number,
            source: e,
        })?;

        if line.trim().is_empty() {
            continue;
        }

        let post = serde_json::from_str(&line).map_err(|e| ReadPostsError::Parse {
            line: number,
            source: e,
        })?;
        posts.push(post);
    }

    Ok(posts)
}

/// Read access to a feed export file.
///
/// # Example
///
/// ```no_run
/// use sift_feed_rs::FeedStore;
///
/// let store = FeedStore::new("timeline.jsonl");
/// let posts = store.load()?;
/// # Ok::<(), sift_feed_rs::FeedError>(())
/// ```
#[derive(Debug, Clone)]
pub struct FeedStore {
    /// Path to the feed file.
    path: PathBuf,
}

impl FeedStore {
    /// Creates a store for the feed file at `path`.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Returns the path to the feed file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Returns true if the feed file exists on disk.
    pub fn exists(&self) -> bool {
        self.path.exists()
    }

    /// Loads every post in the feed file.
    ///
    /// # Errors
    ///
    /// - Returns [`FeedError::Read`] if the file cannot be opened or read
    ///   (a missing file surfaces as `ErrorKind::NotFound`).
    /// - Returns [`FeedError::Parse`] for the first malformed line, with its
    ///   1-based line number.
    pub fn load(&self) -> FeedResult<Vec<Post>> {
        let file = fs::File::open(&self.path).map_err(|e| FeedError::Read {
            path: self.path.clone(),
            source: e,
        })?;

        read_posts(io::BufReader::new(file)).map_err(|e| match e {
            ReadPostsError::Io { source, .. } => FeedError::Read {
                path: self.path.clone(),
                source,
            },
            ReadPostsError::Parse { line, source } => FeedError::Parse {
                path: self.path.clone(),
                line,
                source,
            },
        })
    }
}
