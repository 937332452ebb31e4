//! Ordering of the product list.

use std::{cmp::Ordering, fmt, str::FromStr};

use feruca::Collator;
use serde::{Deserialize, Serialize};
use shared::domain::Product;
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortKey {
    /// Name first, then count.
    #[default]
    Alphabetical,
    /// Count first, then name.
    Count,
}

impl SortKey {
    pub const ALL: [SortKey; 2] = [SortKey::Alphabetical, SortKey::Count];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Alphabetical => "alphabetical",
            Self::Count => "count",
        }
    }

    pub fn compare(self, a: &Product, b: &Product) -> Ordering {
        self.compare_with(&mut Collator::default(), a, b)
    }

    fn compare_with(self, collator: &mut Collator, a: &Product, b: &Product) -> Ordering {
        let primary = match self {
            Self::Alphabetical => collate_names(collator, &a.name, &b.name)
                .then_with(|| a.count.cmp(&b.count)),
            Self::Count => a
                .count
                .cmp(&b.count)
                .then_with(|| collate_names(collator, &a.name, &b.name)),
        };
        primary.then_with(|| a.id.cmp(&b.id))
    }
}

impl fmt::Display for SortKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown sort key '{0}' (expected 'alphabetical' or 'count')")]
pub struct UnknownSortKey(pub String);

impl FromStr for SortKey {
    type Err = UnknownSortKey;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        Self::ALL
            .into_iter()
            .find(|key| key.as_str().eq_ignore_ascii_case(trimmed))
            .ok_or_else(|| UnknownSortKey(s.to_string()))
    }
}

/// Unicode collation with the root locale: accents and case only break
/// ties between names that are otherwise equal, and lowercase sorts first.
pub fn compare_names(a: &str, b: &str) -> Ordering {
    collate_names(&mut Collator::default(), a, b)
}

fn collate_names(collator: &mut Collator, a: &str, b: &str) -> Ordering {
    collator.collate(&a, &b).then_with(|| a.cmp(b))
}

/// Returns a sorted copy of `products`; the input is left untouched.
pub fn sort_products(products: &[Product], key: SortKey) -> Vec<Product> {
    let mut sorted = products.to_vec();
    let mut collator = Collator::default();
    sorted.sort_by(|a, b| key.compare_with(&mut collator, a, b));
    sorted
}
