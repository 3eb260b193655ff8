// ABOUTME: The main Client struct tying fetch and extract into one scrape call.
// ABOUTME: Owns the blocking HTTP client; each scrape is a pure pipeline over fresh state.

use crate::error::ScrapeError;
use crate::extract::extract;
use crate::fetch::{fetch, FetchResult};
use crate::locator::Locator;
use crate::options::{ClientBuilder, Options};
use crate::record::Record;

/// The gleaner client: one blocking HTTP client plus the scrape pipeline.
pub struct Client {
    http: reqwest::blocking::Client,
}

impl Client {
    /// Create a new ClientBuilder for configuring the client.
    pub fn builder() -> ClientBuilder {
        ClientBuilder::new()
    }

    /// Create a new Client with the given options.
    pub fn new(opts: Options) -> Self {
        let http = opts.http_client.clone().unwrap_or_else(|| {
            reqwest::blocking::Client::builder()
                .user_agent(&opts.user_agent)
                .timeout(opts.timeout)
                .gzip(true)
                .brotli(true)
                .deflate(true)
                .build()
                .expect("failed to build HTTP client")
        });
        Self { http }
    }

    /// Fetch the page at `url` and return its body text.
    pub fn fetch(&self, url: &str) -> Result<FetchResult, ScrapeError> {
        fetch(&self.http, url)
    }

    /// Fetch `url` and extract all records matching `locator`.
    ///
    /// A failure at either stage aborts the pipeline and surfaces that
    /// stage's error kind.
    pub fn scrape(&self, url: &str, locator: &Locator) -> Result<Vec<Record>, ScrapeError> {
        let fetched = self.fetch(url)?;
        extract(&fetched.body, locator)
    }
}

impl Default for Client {
    fn default() -> Self {
        Self::new(Options::default())
    }
}
