//! Collection-file ingestion for fintel.
//!
//! Reads the newest collection file per configured target from the data
//! directory and tags every tweet with the target that produced it.
//! Older files per target are the collector's history and are ignored.

pub mod error;
pub mod loader;
pub mod types;

pub use error::IngestError;
pub use loader::load_latest_tweets;
pub use types::{CollectionFile, LoadedTweet, Tweet, TweetUser};
