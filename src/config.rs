use std::time::Duration;

pub const DEFAULT_BASE_URL: &str = "http://localhost:3000";
pub const RESOURCE_PATH: &str = "/roxiler.com/product_transaction.json";

pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(120);

pub const DEFAULT_PAGE_SIZE: usize = 10;
pub const MAX_PAGE_SIZE: usize = 100;

/// Page sizes offered by the rows-per-page control.
pub const PAGE_SIZE_OPTIONS: [usize; 5] = [10, 15, 20, 25, 30];

pub const THUMBNAIL_SIZE: u32 = 50;

// Chart colours (RGBA, Chart.js syntax)
pub const HISTOGRAM_FILL: &str = "rgba(75, 192, 192, 0.6)";
pub const HISTOGRAM_BORDER: &str = "rgba(75, 192, 192, 1)";

pub const CATEGORY_FILLS: [&str; 5] = [
    "rgba(255, 99, 132, 0.6)",
    "rgba(54, 162, 235, 0.6)",
    "rgba(255, 206, 86, 0.6)",
    "rgba(75, 192, 192, 0.6)",
    "rgba(153, 102, 255, 0.6)",
];

pub const CATEGORY_BORDERS: [&str; 5] = [
    "rgba(255, 99, 132, 1)",
    "rgba(54, 162, 235, 1)",
    "rgba(255, 206, 86, 1)",
    "rgba(75, 192, 192, 1)",
    "rgba(153, 102, 255, 1)",
];

/// Join a base URL and a resource path with exactly one `/` between them.
pub fn resource_url(base_url: &str, path: &str) -> String {
    format!(
        "{}/{}",
        base_url.trim_end_matches('/'),
        path.trim_start_matches('/')
    )
}
