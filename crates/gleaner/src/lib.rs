// ABOUTME: Main library entry point for the gleaner structural web extractor.
// ABOUTME: Re-exports the public API: Client, ClientBuilder, Locator, Target, Record, ScrapeError.

//! Gleaner - fetch a page, match repeated elements by tag + class/id, and
//! extract title/link records for JSON or CSV export.
//!
//! The pipeline is straight-line and synchronous: fetch feeds extract,
//! extract feeds zero, one, or two independent file writers.
//!
//! # Example
//!
//! ```no_run
//! use gleaner::{Client, Locator, ScrapeError, Target};
//!
//! fn main() -> Result<(), ScrapeError> {
//!     let locator = Locator::new("span", Target::Class("titleline".to_string()))?;
//!     let client = Client::builder().build();
//!     let records = client.scrape("https://news.ycombinator.com", &locator)?;
//!     gleaner::write_json(&records, std::path::Path::new("news.json"))?;
//!     Ok(())
//! }
//! ```

pub mod client;
pub mod error;
pub mod export;
pub mod extract;
pub mod fetch;
pub mod locator;
pub mod options;
pub mod record;

pub use crate::client::Client;
pub use crate::error::{ErrorCode, ScrapeError};
pub use crate::export::{write_csv, write_json};
pub use crate::extract::extract;
pub use crate::fetch::{fetch, FetchResult};
pub use crate::locator::{Locator, Target};
pub use crate::options::{ClientBuilder, Options};
pub use crate::record::Record;
