//! Review data source
//!
//! - **types**: Record types (ReviewRecord, Ratings, WouldReturn)
//! - **source**: Pluggable sources and the never-failing `load`
//! - **error**: Load errors
//!
//! # Example
//!
//! ```rust,no_run
//! use platebook::reviews::{load, FileSource};
//!
//! #[tokio::main]
//! async fn main() {
//!     let reviews = load(&FileSource::new("site/reviews.json")).await;
//!     println!("{} reviews", reviews.len());
//! }
//! ```

pub mod error;
pub mod source;
pub mod types;

pub use error::{LoadError, LoadResult};
pub use source::{load, source_for, FileSource, HttpSource, ReviewSource};
pub use types::{parse_calendar_date, Ratings, ReviewDocument, ReviewId, ReviewRecord, WouldReturn};
