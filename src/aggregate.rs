//! Aggregations over the visible subset: price histogram, category counts,
//! and sales statistics.

use crate::filter::FilterCriteria;
use crate::models::{CategoryDistribution, PriceHistogram, Product, Statistics};

/// Count the records falling in each of the ten fixed price buckets.
pub fn price_histogram<'a, I>(products: I) -> PriceHistogram
where
    I: IntoIterator<Item = &'a Product>,
{
    let mut histogram = PriceHistogram::default();
    for product in products {
        histogram.add(product.price);
    }
    histogram
}

/// Count the records per category, keyed in first-seen order.
pub fn category_distribution<'a, I>(products: I) -> CategoryDistribution
where
    I: IntoIterator<Item = &'a Product>,
{
    let mut distribution = CategoryDistribution::default();
    for product in products {
        distribution.add(&product.category);
    }
    distribution
}

impl Statistics {
    /// Sum of prices plus sold / not-sold counts over `products`.
    pub fn compute<'a, I>(products: I) -> Self
    where
        I: IntoIterator<Item = &'a Product>,
    {
        products
            .into_iter()
            .fold(Statistics::default(), |mut stats, product| {
                stats.total_sell += product.price;
                if product.sold {
                    stats.total_sold_items += 1;
                } else {
                    stats.total_not_sold_items += 1;
                }
                stats
            })
    }
}

/// Statistics for the dashboard's statistics block.
///
/// Only populated while a month is selected. Without a month the block reads
/// all zeros, even when the text query is narrowing the table.
pub fn summarize<'a, I>(products: I, criteria: &FilterCriteria) -> Statistics
where
    I: IntoIterator<Item = &'a Product>,
{
    if criteria.month.is_some() {
        Statistics::compute(products)
    } else {
        Statistics::default()
    }
}
