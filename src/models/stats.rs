use serde::ser::SerializeMap;
use serde::{Deserialize, Serialize, Serializer};

// ---------------------------------------------------------------------------
// Statistics - Sales summary over the visible subset
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Statistics {
    pub total_sell: f64,
    pub total_sold_items: usize,
    pub total_not_sold_items: usize,
}

// ---------------------------------------------------------------------------
// PriceRange - One of the ten fixed histogram buckets
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PriceRange {
    UpTo100,
    UpTo200,
    UpTo300,
    UpTo400,
    UpTo500,
    UpTo600,
    UpTo700,
    UpTo800,
    UpTo900,
    Above900,
}

impl PriceRange {
    /// All buckets in ascending order.
    pub const ALL: [PriceRange; 10] = [
        PriceRange::UpTo100,
        PriceRange::UpTo200,
        PriceRange::UpTo300,
        PriceRange::UpTo400,
        PriceRange::UpTo500,
        PriceRange::UpTo600,
        PriceRange::UpTo700,
        PriceRange::UpTo800,
        PriceRange::UpTo900,
        PriceRange::Above900,
    ];

    pub fn label(self) -> &'static str {
        match self {
            PriceRange::UpTo100 => "0-100",
            PriceRange::UpTo200 => "101-200",
            PriceRange::UpTo300 => "201-300",
            PriceRange::UpTo400 => "301-400",
            PriceRange::UpTo500 => "401-500",
            PriceRange::UpTo600 => "501-600",
            PriceRange::UpTo700 => "601-700",
            PriceRange::UpTo800 => "701-800",
            PriceRange::UpTo900 => "801-900",
            PriceRange::Above900 => "901-above",
        }
    }

    /// Inclusive upper bound, `None` for the open top bucket.
    pub fn upper_bound(self) -> Option<f64> {
        match self {
            PriceRange::Above900 => None,
            other => Some(100.0 * (other.index() + 1) as f64),
        }
    }

    /// Position of this bucket in [`PriceRange::ALL`].
    pub fn index(self) -> usize {
        self as usize
    }

    /// Bucket a price with ascending `<=` comparisons, so a boundary value
    /// (exactly 100, 200, ...) lands in the lower bucket.
    ///
    /// Negative and NaN prices fall through to [`PriceRange::Above900`].
    pub fn for_price(price: f64) -> Self {
        if price.is_nan() || price < 0.0 {
            return PriceRange::Above900;
        }
        Self::ALL
            .into_iter()
            .find(|range| range.upper_bound().is_some_and(|upper| price <= upper))
            .unwrap_or(PriceRange::Above900)
    }
}

// ---------------------------------------------------------------------------
// PriceHistogram - Item count per price bucket, all buckets always present
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PriceHistogram {
    counts: [usize; 10],
}

impl PriceHistogram {
    pub fn add(&mut self, price: f64) {
        self.counts[PriceRange::for_price(price).index()] += 1;
    }

    pub fn get(&self, range: PriceRange) -> usize {
        self.counts[range.index()]
    }

    /// Count for a bucket label such as `"101-200"`.
    pub fn get_label(&self, label: &str) -> Option<usize> {
        PriceRange::ALL
            .into_iter()
            .find(|r| r.label() == label)
            .map(|r| self.get(r))
    }

    /// `(bucket, count)` pairs in ascending bucket order.
    pub fn iter(&self) -> impl Iterator<Item = (PriceRange, usize)> + '_ {
        PriceRange::ALL.into_iter().map(|r| (r, self.get(r)))
    }

    pub fn labels(&self) -> Vec<&'static str> {
        PriceRange::ALL.iter().map(|r| r.label()).collect()
    }

    pub fn counts(&self) -> Vec<usize> {
        self.counts.to_vec()
    }

    pub fn total(&self) -> usize {
        self.counts.iter().sum()
    }
}

impl Serialize for PriceHistogram {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.counts.len()))?;
        for (range, count) in self.iter() {
            map.serialize_entry(range.label(), &count)?;
        }
        map.end()
    }
}

// ---------------------------------------------------------------------------
// CategoryDistribution - Item count per category, first-seen order
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CategoryDistribution {
    entries: Vec<(String, usize)>,
}

impl CategoryDistribution {
    pub fn add(&mut self, category: &str) {
        match self.entries.iter_mut().find(|(name, _)| name == category) {
            Some((_, count)) => *count += 1,
            None => self.entries.push((category.to_string(), 1)),
        }
    }

    pub fn get(&self, category: &str) -> Option<usize> {
        self.entries
            .iter()
            .find(|(name, _)| name == category)
            .map(|(_, count)| *count)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, usize)> + '_ {
        self.entries.iter().map(|(name, count)| (name.as_str(), *count))
    }

    pub fn labels(&self) -> Vec<&str> {
        self.entries.iter().map(|(name, _)| name.as_str()).collect()
    }

    pub fn counts(&self) -> Vec<usize> {
        self.entries.iter().map(|(_, count)| *count).collect()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn total(&self) -> usize {
        self.entries.iter().map(|(_, count)| count).sum()
    }

    /// Fraction of all counted items that fall in `category` (0.0 when empty
    /// or absent).
    pub fn share(&self, category: &str) -> f64 {
        let total = self.total();
        match self.get(category) {
            Some(count) if total > 0 => count as f64 / total as f64,
            _ => 0.0,
        }
    }
}

impl Serialize for CategoryDistribution {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (name, count) in &self.entries {
            map.serialize_entry(name, count)?;
        }
        map.end()
    }
}
