//! Filter stage: narrows the dataset by free-text query and sale month.

use chrono::Month;
use serde::{Deserialize, Serialize};

use crate::models::Product;

/// The user's current search text and optional month selection.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterCriteria {
    pub query: String,
    pub month: Option<Month>,
}

impl FilterCriteria {
    pub fn new(query: impl Into<String>, month: Option<Month>) -> Self {
        Self {
            query: query.into(),
            month,
        }
    }

    /// `true` when either the query or the month narrows the dataset.
    pub fn is_active(&self) -> bool {
        !self.query.is_empty() || self.month.is_some()
    }

    /// Whether a single record passes both filters.
    pub fn matches(&self, product: &Product) -> bool {
        let needle = self.query.to_lowercase();
        matches_query(product, &needle) && self.matches_month(product)
    }

    fn matches_month(&self, product: &Product) -> bool {
        match self.month {
            Some(month) => product.sale_month() == Some(month),
            None => true,
        }
    }
}

/// `needle` must already be lower-cased. An empty needle matches everything.
fn matches_query(product: &Product, needle: &str) -> bool {
    needle.is_empty()
        || product.title.to_lowercase().contains(needle)
        || product.description.to_lowercase().contains(needle)
}

/// Return the records of `dataset` that satisfy `criteria`, in dataset order.
///
/// A non-empty query keeps records whose title or description contains it
/// case-insensitively; a month keeps records sold in that calendar month.
/// Both apply together. Records whose `dateOfSale` does not parse never match
/// a month.
pub fn filter_products<'a>(dataset: &'a [Product], criteria: &FilterCriteria) -> Vec<&'a Product> {
    filter_indices(dataset, criteria)
        .into_iter()
        .map(|i| &dataset[i])
        .collect()
}

/// Like [`filter_products`] but returns positions into `dataset`.
pub fn filter_indices(dataset: &[Product], criteria: &FilterCriteria) -> Vec<usize> {
    let needle = criteria.query.to_lowercase();
    dataset
        .iter()
        .enumerate()
        .filter(|(_, p)| matches_query(p, &needle) && criteria.matches_month(p))
        .map(|(i, _)| i)
        .collect()
}

/// The twelve month-selector options as `(value, label)`, value 1-12.
pub fn month_options() -> Vec<(u32, &'static str)> {
    (1..=12u8)
        .filter_map(|n| Month::try_from(n).ok())
        .map(|m| (m.number_from_month(), m.name()))
        .collect()
}

/// Resolve a month-selector value (1-12) to a [`Month`].
pub fn month_from_number(value: u32) -> Option<Month> {
    u8::try_from(value).ok().and_then(|n| Month::try_from(n).ok())
}
