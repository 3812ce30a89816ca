//! Async wrapper around [`ProductDashboard`] for use in async runtimes (Tokio, etc.).
//!
//! The one-shot dataset read runs on the blocking thread pool via
//! [`tokio::task::spawn_blocking`], keeping the event loop free. Filtering and
//! aggregation still run to completion inside the dispatched closure.
//!
//! # Example
//!
//! ```no_run
//! use product_dashboard::{AsyncProductDashboard, Event, ProductDashboard};
//!
//! #[tokio::main(flavor = "current_thread")]
//! async fn main() {
//!     let dashboard = AsyncProductDashboard::new(ProductDashboard::builder().build());
//!     dashboard.load().await.unwrap();
//!
//!     let text = dashboard
//!         .run(|d| {
//!             d.apply(Event::SetQuery("shirt".into()));
//!             d.render_text()
//!         })
//!         .await
//!         .unwrap();
//!     println!("{text}");
//! }
//! ```

use std::sync::{Arc, Mutex};

use crate::error::{DashboardError, Result};
use crate::presentation::DashboardView;
use crate::state::{Event, LoadStatus};
use crate::ProductDashboard;

/// Async wrapper around [`ProductDashboard`].
///
/// The dashboard is protected by a [`Mutex`]; every operation is dispatched
/// to a blocking thread.
#[derive(Clone)]
pub struct AsyncProductDashboard {
    inner: Arc<Mutex<ProductDashboard>>,
}

impl AsyncProductDashboard {
    pub fn new(dashboard: ProductDashboard) -> Self {
        Self {
            inner: Arc::new(Mutex::new(dashboard)),
        }
    }

    /// Run a closure against the dashboard on the blocking thread pool.
    pub async fn run<F, T>(&self, f: F) -> Result<T>
    where
        F: FnOnce(&mut ProductDashboard) -> T + Send + 'static,
        T: Send + 'static,
    {
        let dashboard = self.inner.clone();
        tokio::task::spawn_blocking(move || {
            let mut guard = dashboard
                .lock()
                .map_err(|_| DashboardError::InvalidArgument("dashboard lock poisoned".into()))?;
            Ok(f(&mut guard))
        })
        .await
        .map_err(|e| DashboardError::InvalidArgument(format!("Task join error: {e}")))?
    }

    /// Read the dataset once; see [`ProductDashboard::load`].
    pub async fn load(&self) -> Result<LoadStatus> {
        self.run(|d| d.load().clone()).await
    }

    pub async fn apply(&self, event: Event) -> Result<()> {
        self.run(move |d| d.apply(event)).await
    }

    pub async fn view(&self) -> Result<DashboardView> {
        self.run(|d| d.view()).await
    }
}
