//! Presentation: turns a [`DashboardState`] into render-ready output.
//!
//! Everything here is a pure read of the state. A view holds no state of its
//! own and is rebuilt from scratch whenever the state changes.

pub mod charts;
pub mod table;
pub mod text;

pub use charts::{category_chart, price_range_chart, ChartDataset, ChartKind, ChartPayload};
pub use table::{format_currency, yes_no, Column, TableRow, Thumbnail, COLUMNS};
pub use text::render_text;

use serde::Serialize;

use crate::aggregate;
use crate::config;
use crate::filter::FilterCriteria;
use crate::models::Statistics;
use crate::state::{DashboardState, LoadStatus};

// ---------------------------------------------------------------------------
// DashboardView
// ---------------------------------------------------------------------------

/// What the dashboard shows: a loading notice, the load error alone, or the
/// full dashboard.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "status", rename_all = "camelCase")]
pub enum DashboardView {
    Loading,
    Failed { message: String },
    Ready(Box<ReadyView>),
}

impl DashboardView {
    pub fn ready(&self) -> Option<&ReadyView> {
        match self {
            DashboardView::Ready(view) => Some(view),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReadyView {
    pub criteria: FilterCriteria,
    pub columns: Vec<Column>,
    pub rows: Vec<TableRow>,
    pub page: PageInfo,
    pub statistics: Statistics,
    pub price_chart: ChartPayload,
    pub category_chart: ChartPayload,
}

impl ReadyView {
    /// The three statistic lines of the statistics block.
    pub fn statistic_lines(&self) -> [String; 3] {
        statistic_lines(&self.statistics)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PageInfo {
    pub page: usize,
    pub per_page: usize,
    pub total_pages: usize,
    /// Number of rows across all pages (the visible subset size).
    pub total_rows: usize,
    pub page_size_options: Vec<usize>,
}

/// Build the view for the current state.
pub fn view(state: &DashboardState) -> DashboardView {
    match state.status() {
        LoadStatus::Loading => DashboardView::Loading,
        LoadStatus::Failed(message) => DashboardView::Failed {
            message: message.clone(),
        },
        LoadStatus::Loaded => DashboardView::Ready(Box::new(ready_view(state))),
    }
}

fn ready_view(state: &DashboardState) -> ReadyView {
    let visible = state.visible();
    let pagination = state.pagination();

    ReadyView {
        criteria: state.criteria().clone(),
        columns: COLUMNS.to_vec(),
        rows: state
            .page_rows()
            .into_iter()
            .map(TableRow::from_product)
            .collect(),
        page: PageInfo {
            page: pagination.page(),
            per_page: pagination.per_page(),
            total_pages: pagination.total_pages(visible.len()),
            total_rows: visible.len(),
            page_size_options: config::PAGE_SIZE_OPTIONS.to_vec(),
        },
        statistics: state.statistics(),
        price_chart: price_range_chart(&aggregate::price_histogram(visible.iter().copied())),
        category_chart: category_chart(&aggregate::category_distribution(
            visible.iter().copied(),
        )),
    }
}

pub fn statistic_lines(stats: &Statistics) -> [String; 3] {
    [
        format!("Total Sell: {}", format_currency(stats.total_sell)),
        format!("Total Sold Items: {}", stats.total_sold_items),
        format!("Total Not Sold Items: {}", stats.total_not_sold_items),
    ]
}
