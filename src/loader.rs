//! One-shot loader for the product-transaction dataset.
//!
//! Reads a JSON array of products from an HTTP endpoint or a local file.
//! There is no retry and no caching: each call to [`Loader::load`] is a
//! single read, and the dashboard only ever makes one.

use crate::config;
use crate::error::{DashboardError, Result};
use crate::models::Product;
use flate2::read::GzDecoder;
use reqwest::blocking::Client;
use std::fmt;
use std::fs;
use std::io::{BufReader, Read};
use std::path::PathBuf;
use std::time::Duration;
use tracing::{debug, info};

/// Where the dataset is read from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DataSource {
    Http { url: String },
    /// Local JSON file; a `.gz` extension is decompressed transparently.
    File { path: PathBuf },
}

impl DataSource {
    /// The fixed dataset resource on the given host.
    pub fn resource(base_url: &str) -> Self {
        DataSource::Http {
            url: config::resource_url(base_url, config::RESOURCE_PATH),
        }
    }
}

impl Default for DataSource {
    fn default() -> Self {
        DataSource::resource(config::DEFAULT_BASE_URL)
    }
}

impl fmt::Display for DataSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DataSource::Http { url } => write!(f, "{}", url),
            DataSource::File { path } => write!(f, "{}", path.display()),
        }
    }
}

/// Reads the product dataset from a [`DataSource`].
pub struct Loader {
    source: DataSource,
    timeout: Duration,
    client: Option<Client>,
}

impl Loader {
    pub fn new(source: DataSource, timeout: Duration) -> Self {
        Self {
            source,
            timeout,
            client: None,
        }
    }

    pub fn source(&self) -> &DataSource {
        &self.source
    }

    /// Lazy HTTP client, created on first use.
    fn client(&mut self) -> Result<&Client> {
        if self.client.is_none() {
            let client = Client::builder()
                .timeout(self.timeout)
                .redirect(reqwest::redirect::Policy::limited(10))
                .build()?;
            self.client = Some(client);
        }
        self.client
            .as_ref()
            .ok_or_else(|| DashboardError::InvalidArgument("HTTP client unavailable".into()))
    }

    /// Read and parse the dataset once.
    pub fn load(&mut self) -> Result<Vec<Product>> {
        info!(source = %self.source, "loading product dataset");
        let products = match self.source.clone() {
            DataSource::Http { url } => self.fetch(&url)?,
            DataSource::File { path } => read_file(&path)?,
        };
        info!(count = products.len(), "product dataset loaded");
        Ok(products)
    }

    fn fetch(&mut self, url: &str) -> Result<Vec<Product>> {
        let client = self.client()?;
        let resp = client.get(url).send()?.error_for_status()?;
        debug!(status = %resp.status(), "dataset response received");
        let body = resp.text()?;
        parse_products(&body)
    }

    /// Drop the HTTP client, if one was built.
    pub fn close(&mut self) {
        self.client = None;
    }
}

fn read_file(path: &std::path::Path) -> Result<Vec<Product>> {
    let contents = if path.extension().and_then(|e| e.to_str()) == Some("gz") {
        let file = fs::File::open(path)?;
        let mut decoder = BufReader::new(GzDecoder::new(BufReader::new(file)));
        let mut contents = String::new();
        decoder.read_to_string(&mut contents)?;
        contents
    } else {
        fs::read_to_string(path)?
    };
    parse_products(&contents)
}

/// Parse a JSON array of products.
pub fn parse_products(json: &str) -> Result<Vec<Product>> {
    serde_json::from_str(json).map_err(DashboardError::from)
}
