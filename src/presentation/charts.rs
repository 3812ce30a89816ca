//! Chart payloads for the two dashboard charts, shaped like Chart.js `data`
//! configs so a front end can hand them to the chart widget unchanged.

use serde::Serialize;

use crate::config;
use crate::models::{CategoryDistribution, PriceHistogram};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum ChartKind {
    Bar,
    Doughnut,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChartDataset {
    pub label: String,
    pub data: Vec<usize>,
    pub background_color: Vec<String>,
    pub border_color: Vec<String>,
    pub border_width: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChartPayload {
    #[serde(rename = "type")]
    pub kind: ChartKind,
    pub title: String,
    pub labels: Vec<String>,
    pub datasets: Vec<ChartDataset>,
}

impl ChartPayload {
    /// `(label, value)` pairs of the first dataset.
    pub fn points(&self) -> Vec<(&str, usize)> {
        let data = self
            .datasets
            .first()
            .map(|d| d.data.as_slice())
            .unwrap_or_default();
        self.labels
            .iter()
            .map(String::as_str)
            .zip(data.iter().copied())
            .collect()
    }
}

/// Bar chart of item counts per price bucket.
pub fn price_range_chart(histogram: &PriceHistogram) -> ChartPayload {
    ChartPayload {
        kind: ChartKind::Bar,
        title: "Price Range Distribution".to_string(),
        labels: histogram.labels().into_iter().map(String::from).collect(),
        datasets: vec![ChartDataset {
            label: "Number of Items".to_string(),
            data: histogram.counts(),
            background_color: vec![config::HISTOGRAM_FILL.to_string()],
            border_color: vec![config::HISTOGRAM_BORDER.to_string()],
            border_width: 1,
        }],
    }
}

/// Doughnut chart of item counts per category, palette cycled per slice.
pub fn category_chart(distribution: &CategoryDistribution) -> ChartPayload {
    let slices = distribution.len();
    ChartPayload {
        kind: ChartKind::Doughnut,
        title: "Category Distribution".to_string(),
        labels: distribution.labels().into_iter().map(String::from).collect(),
        datasets: vec![ChartDataset {
            label: "Category Distribution".to_string(),
            data: distribution.counts(),
            background_color: palette(&config::CATEGORY_FILLS, slices),
            border_color: palette(&config::CATEGORY_BORDERS, slices),
            border_width: 1,
        }],
    }
}

fn palette(colors: &[&str], len: usize) -> Vec<String> {
    colors.iter().cycle().take(len).map(|c| c.to_string()).collect()
}
