use chrono::{DateTime, Datelike, Month, NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

/// Naive timestamp layouts accepted for `dateOfSale` when it carries no offset.
const NAIVE_DATETIME_FORMATS: [&str; 2] = ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"];

// ---------------------------------------------------------------------------
// Product - One product-transaction record from the data source
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: i64,
    pub title: String,
    pub description: String,
    pub price: f64,
    pub category: String,
    pub sold: bool,
    pub date_of_sale: String,
    pub image: String,
}

impl Product {
    /// Calendar date of the sale, or `None` if `dateOfSale` is not a date.
    ///
    /// Offset-bearing timestamps keep the wall-clock date they were written
    /// in; `2021-11-30T23:00:00-05:00` is 30 November, not 1 December UTC.
    pub fn sale_date(&self) -> Option<NaiveDate> {
        let raw = self.date_of_sale.trim();

        if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
            return Some(dt.date_naive());
        }
        for fmt in NAIVE_DATETIME_FORMATS {
            if let Ok(dt) = NaiveDateTime::parse_from_str(raw, fmt) {
                return Some(dt.date());
            }
        }
        NaiveDate::parse_from_str(raw, "%Y-%m-%d").ok()
    }

    /// Calendar month of the sale, or `None` for an invalid date.
    pub fn sale_month(&self) -> Option<Month> {
        self.sale_date()
            .and_then(|d| Month::try_from(d.month() as u8).ok())
    }
}
