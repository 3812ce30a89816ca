//! Dashboard state and its transitions.
//!
//! [`DashboardState`] owns the dataset, the filter criteria, the derived
//! visible subset and statistics, and the table's paging/sorting. It only
//! changes through [`DashboardState::apply`], which consumes the state and
//! returns the next one. Any event touching the dataset, query, or month
//! recomputes the visible subset and the statistics before returning, so the
//! derived values never lag behind their inputs.

use std::cmp::Ordering;

use chrono::Month;
use tracing::debug;

use crate::aggregate;
use crate::filter::{self, FilterCriteria};
use crate::models::{Product, Statistics};
use crate::pagination::Pagination;

// ---------------------------------------------------------------------------
// LoadStatus
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum LoadStatus {
    #[default]
    Loading,
    Loaded,
    /// Load failed; holds the message shown in place of the dashboard.
    Failed(String),
}

// ---------------------------------------------------------------------------
// Sorting
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortColumn {
    Id,
    Title,
    Price,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortDirection {
    Ascending,
    Descending,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Sort {
    pub column: SortColumn,
    pub direction: SortDirection,
}

impl Sort {
    fn compare(&self, a: &Product, b: &Product) -> Ordering {
        let ord = match self.column {
            SortColumn::Id => a.id.cmp(&b.id),
            SortColumn::Title => a.title.cmp(&b.title),
            SortColumn::Price => a.price.total_cmp(&b.price),
        };
        match self.direction {
            SortDirection::Ascending => ord,
            SortDirection::Descending => ord.reverse(),
        }
    }
}

// ---------------------------------------------------------------------------
// Event
// ---------------------------------------------------------------------------

/// Inputs that move the dashboard from one state to the next.
#[derive(Debug, Clone, PartialEq)]
pub enum Event {
    /// The data source returned the dataset.
    Loaded(Vec<Product>),
    /// The data source failed with this message.
    LoadFailed(String),
    SetQuery(String),
    /// Select a month, or clear the selection with `None`.
    SelectMonth(Option<Month>),
    SetPageSize(usize),
    SetPage(usize),
    SortBy(SortColumn, SortDirection),
    ClearSort,
}

// ---------------------------------------------------------------------------
// DashboardState
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Default)]
pub struct DashboardState {
    status: LoadStatus,
    dataset: Vec<Product>,
    criteria: FilterCriteria,
    /// Positions into `dataset` of the records passing `criteria`, in
    /// dataset order.
    visible: Vec<usize>,
    statistics: Statistics,
    pagination: Pagination,
    sort: Option<Sort>,
}

impl DashboardState {
    /// A state awaiting its dataset, with the given table page size.
    pub fn new(page_size: usize) -> Self {
        Self {
            pagination: Pagination::new(page_size),
            ..Self::default()
        }
    }

    /// Apply one event and return the resulting state.
    pub fn apply(mut self, event: Event) -> Self {
        match event {
            Event::Loaded(products) => {
                if self.status != LoadStatus::Loading {
                    debug!("ignoring dataset delivered after load resolved");
                    return self;
                }
                self.dataset = products;
                self.status = LoadStatus::Loaded;
                self.recompute();
            }
            Event::LoadFailed(message) => {
                if self.status != LoadStatus::Loading {
                    debug!("ignoring load failure delivered after load resolved");
                    return self;
                }
                self.status = LoadStatus::Failed(message);
            }
            Event::SetQuery(query) => {
                self.criteria.query = query;
                self.recompute();
            }
            Event::SelectMonth(month) => {
                self.criteria.month = month;
                self.recompute();
            }
            Event::SetPageSize(per_page) => self.pagination.set_per_page(per_page),
            Event::SetPage(page) => self.pagination.set_page(page, self.visible.len()),
            Event::SortBy(column, direction) => {
                self.sort = Some(Sort { column, direction });
            }
            Event::ClearSort => self.sort = None,
        }
        self
    }

    fn recompute(&mut self) {
        self.visible = filter::filter_indices(&self.dataset, &self.criteria);
        self.statistics = aggregate::summarize(
            self.visible.iter().map(|&i| &self.dataset[i]),
            &self.criteria,
        );
        self.pagination.reset();
        debug!(
            visible = self.visible.len(),
            total = self.dataset.len(),
            month = ?self.criteria.month,
            "recomputed visible subset"
        );
    }

    pub fn status(&self) -> &LoadStatus {
        &self.status
    }

    pub fn dataset(&self) -> &[Product] {
        &self.dataset
    }

    pub fn criteria(&self) -> &FilterCriteria {
        &self.criteria
    }

    /// The visible subset in dataset order.
    pub fn visible(&self) -> Vec<&Product> {
        self.visible.iter().map(|&i| &self.dataset[i]).collect()
    }

    pub fn visible_len(&self) -> usize {
        self.visible.len()
    }

    /// The visible subset in table order (sorted if a sort is set).
    pub fn rows(&self) -> Vec<&Product> {
        let mut rows = self.visible();
        if let Some(sort) = self.sort {
            rows.sort_by(|a, b| sort.compare(a, b));
        }
        rows
    }

    /// The rows on the current table page.
    pub fn page_rows(&self) -> Vec<&Product> {
        let rows = self.rows();
        self.pagination.slice(&rows).to_vec()
    }

    pub fn statistics(&self) -> Statistics {
        self.statistics
    }

    pub fn pagination(&self) -> Pagination {
        self.pagination
    }

    pub fn sort(&self) -> Option<Sort> {
        self.sort
    }
}
