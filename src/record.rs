use std::collections::HashSet;

use serde::Serialize;

/// One extracted catalog entry. Fields default to "" rather than an Option so
/// every export column is always present.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ProductRecord {
    pub category: String,
    pub brand: String,
    pub product_name: String,
    pub characteristics: String,
    pub volume: String,
    pub price: String,
    /// The untouched input line, kept for diagnostics.
    pub raw_line: String,
}

/// Aggregate of one full parse run.
#[derive(Debug, Default, Serialize)]
pub struct CatalogSummary {
    pub records: Vec<ProductRecord>,
    pub failures: Vec<String>,
    pub categories: HashSet<String>,
    pub total_records: usize,
    pub success_count: usize,
}
