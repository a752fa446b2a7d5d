//! Per-category aggregate produced by the store

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

use super::ids::CategoryId;

/// Totals for one category over a period
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoryStat {
    pub category_id: CategoryId,
    pub category_name: String,
    pub transaction_count: u64,
    pub total_amount: f64,
}

/// Drop empty categories and order by total descending, then by id.
///
/// Both backends finish their aggregation through here so the ordering
/// and the zero-total rule are identical.
pub fn finalize_stats(mut stats: Vec<CategoryStat>) -> Vec<CategoryStat> {
    stats.retain(|s| s.transaction_count > 0 && s.total_amount != 0.0);
    stats.sort_by(|a, b| {
        b.total_amount
            .partial_cmp(&a.total_amount)
            .unwrap_or(Ordering::Equal)
            .then(a.category_id.cmp(&b.category_id))
    });
    stats
}
