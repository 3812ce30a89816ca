use serde::Serialize;

use crate::config;
use crate::models::Product;
use crate::state::SortColumn;

// ---------------------------------------------------------------------------
// Columns
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Column {
    pub name: &'static str,
    #[serde(skip)]
    pub sort: Option<SortColumn>,
    /// Long text that should wrap instead of truncating.
    pub wrap: bool,
}

impl Column {
    pub fn sortable(&self) -> bool {
        self.sort.is_some()
    }
}

pub const COLUMNS: [Column; 7] = [
    Column { name: "ID", sort: Some(SortColumn::Id), wrap: false },
    Column { name: "Title", sort: Some(SortColumn::Title), wrap: false },
    Column { name: "Description", sort: None, wrap: true },
    Column { name: "Price", sort: Some(SortColumn::Price), wrap: false },
    Column { name: "Category", sort: None, wrap: false },
    Column { name: "Sold", sort: None, wrap: false },
    Column { name: "Image", sort: None, wrap: false },
];

// ---------------------------------------------------------------------------
// Rows
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Thumbnail {
    pub src: String,
    pub alt: String,
    pub width: u32,
    pub height: u32,
}

/// One product formatted for display, one field per column.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TableRow {
    pub id: String,
    pub title: String,
    pub description: String,
    pub price: String,
    pub category: String,
    pub sold: &'static str,
    pub image: Thumbnail,
}

impl TableRow {
    pub fn from_product(product: &Product) -> Self {
        Self {
            id: product.id.to_string(),
            title: product.title.clone(),
            description: product.description.clone(),
            price: format_currency(product.price),
            category: product.category.clone(),
            sold: yes_no(product.sold),
            image: Thumbnail {
                src: product.image.clone(),
                alt: product.title.clone(),
                width: config::THUMBNAIL_SIZE,
                height: config::THUMBNAIL_SIZE,
            },
        }
    }

    /// Text cells in column order; the image cell shows its source.
    pub fn cells(&self) -> [&str; 7] {
        [
            self.id.as_str(),
            self.title.as_str(),
            self.description.as_str(),
            self.price.as_str(),
            self.category.as_str(),
            self.sold,
            self.image.src.as_str(),
        ]
    }
}

/// Dollar amount with two fixed decimals, e.g. `$329.85`.
pub fn format_currency(amount: f64) -> String {
    format!("${:.2}", amount)
}

pub fn yes_no(flag: bool) -> &'static str {
    if flag {
        "Yes"
    } else {
        "No"
    }
}
