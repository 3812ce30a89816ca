//! Product transaction dashboard.
//!
//! Loads a list of product-transaction records once, filters it by free-text
//! search and sale month, pages the matches into a table, and derives a
//! price-range histogram, a category distribution, and sales statistics.
//!
//! # Quick start
//!
//! ```no_run
//! use product_dashboard::{Event, ProductDashboard};
//!
//! let mut dashboard = ProductDashboard::builder()
//!     .base_url("http://localhost:3000")
//!     .build();
//! dashboard.load();
//!
//! dashboard.apply(Event::SetQuery("laptop".into()));
//! dashboard.apply(Event::SelectMonth(Some(chrono::Month::March)));
//!
//! println!("{}", dashboard.render_text());
//! ```

#[cfg(feature = "async")]
pub mod async_client;
pub mod aggregate;
pub mod config;
pub mod error;
pub mod filter;
pub mod loader;
pub mod models;
pub mod pagination;
pub mod presentation;
pub mod state;

#[cfg(feature = "async")]
pub use async_client::AsyncProductDashboard;
pub use error::{DashboardError, Result};
pub use filter::FilterCriteria;
pub use loader::{DataSource, Loader};
pub use models::{CategoryDistribution, PriceHistogram, PriceRange, Product, Statistics};
pub use presentation::DashboardView;
pub use state::{DashboardState, Event, LoadStatus, SortColumn, SortDirection};

use std::fmt;
use std::path::{Path, PathBuf};
use std::time::Duration;

use tracing::warn;

// ---------------------------------------------------------------------------
// ProductDashboardBuilder
// ---------------------------------------------------------------------------

/// Builder for configuring and constructing a [`ProductDashboard`].
///
/// Use [`ProductDashboard::builder()`] to obtain a builder, chain configuration
/// methods, and call [`build()`](ProductDashboardBuilder::build).
pub struct ProductDashboardBuilder {
    base_url: String,
    resource_path: String,
    file: Option<PathBuf>,
    timeout: Duration,
    page_size: usize,
}

impl Default for ProductDashboardBuilder {
    fn default() -> Self {
        Self {
            base_url: config::DEFAULT_BASE_URL.to_string(),
            resource_path: config::RESOURCE_PATH.to_string(),
            file: None,
            timeout: config::DEFAULT_TIMEOUT,
            page_size: config::DEFAULT_PAGE_SIZE,
        }
    }
}

impl ProductDashboardBuilder {
    /// Host the dataset resource is fetched from. Defaults to
    /// `http://localhost:3000`.
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    /// Path of the dataset resource on the host. Defaults to
    /// `/roxiler.com/product_transaction.json`.
    pub fn resource_path(mut self, path: impl Into<String>) -> Self {
        self.resource_path = path.into();
        self
    }

    /// Read the dataset from a local JSON (or `.json.gz`) file instead of
    /// over HTTP.
    pub fn file<P: AsRef<Path>>(mut self, path: P) -> Self {
        self.file = Some(path.as_ref().to_path_buf());
        self
    }

    /// HTTP request timeout. Defaults to 120 seconds.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Initial rows per table page. Defaults to 10.
    pub fn page_size(mut self, page_size: usize) -> Self {
        self.page_size = page_size;
        self
    }

    /// Build the dashboard in the `Loading` state. No I/O happens until
    /// [`ProductDashboard::load`].
    pub fn build(self) -> ProductDashboard {
        let source = match self.file {
            Some(path) => DataSource::File { path },
            None => DataSource::Http {
                url: config::resource_url(&self.base_url, &self.resource_path),
            },
        };
        ProductDashboard {
            loader: Loader::new(source, self.timeout),
            state: DashboardState::new(self.page_size),
        }
    }
}

// ---------------------------------------------------------------------------
// ProductDashboard
// ---------------------------------------------------------------------------

/// The dashboard controller: owns the loader and the [`DashboardState`], and
/// exposes the view derived from it.
pub struct ProductDashboard {
    loader: Loader,
    state: DashboardState,
}

impl ProductDashboard {
    pub fn builder() -> ProductDashboardBuilder {
        ProductDashboardBuilder::default()
    }

    /// Read the dataset, once.
    ///
    /// The first call performs the read and records either the dataset or the
    /// failure message. Later calls do nothing. Returns the resulting status.
    pub fn load(&mut self) -> &LoadStatus {
        if *self.state.status() != LoadStatus::Loading {
            return self.state.status();
        }
        let event = match self.loader.load() {
            Ok(products) => Event::Loaded(products),
            Err(e) => {
                warn!(source = %self.loader.source(), error = %e, "failed to load product dataset");
                Event::LoadFailed(e.to_string())
            }
        };
        self.loader.close();
        self.apply(event);
        self.state.status()
    }

    /// Apply an event to the state.
    pub fn apply(&mut self, event: Event) {
        let state = std::mem::take(&mut self.state);
        self.state = state.apply(event);
    }

    pub fn state(&self) -> &DashboardState {
        &self.state
    }

    pub fn source(&self) -> &DataSource {
        self.loader.source()
    }

    pub fn view(&self) -> DashboardView {
        presentation::view(&self.state)
    }

    pub fn render_text(&self) -> String {
        presentation::render_text(&self.view())
    }
}

impl fmt::Display for ProductDashboard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let status = match self.state.status() {
            LoadStatus::Loading => "loading",
            LoadStatus::Loaded => "loaded",
            LoadStatus::Failed(_) => "failed",
        };
        write!(
            f,
            "ProductDashboard(source={}, status={}, visible={}/{})",
            self.loader.source(),
            status,
            self.state.visible_len(),
            self.state.dataset().len()
        )
    }
}
