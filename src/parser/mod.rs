pub mod lines;
pub mod product;

use std::collections::HashSet;

use lines::LineKind;

use crate::record::CatalogSummary;

/// Single pass over the catalog text: classify each trimmed, non-empty line,
/// carry the most recent category header forward, and run the field extractor
/// on every product line under it.
pub fn parse_catalog(text: &str) -> CatalogSummary {
    let lines: Vec<&str> = text
        .lines()
        .map(str::trim)
        .filter(|l| !l.is_empty())
        .collect();

    let mut records = Vec::new();
    let mut failures = Vec::new();
    let mut categories: HashSet<String> = HashSet::new();
    let mut current_category = String::new();

    // Line numbers in failure messages count trimmed, non-empty lines only.
    for (i, line) in lines.iter().enumerate() {
        match lines::classify(line) {
            LineKind::Category(name) => {
                categories.insert(name.clone());
                current_category = name;
            }
            LineKind::Skip => {}
            LineKind::Product => match product::extract(line, &current_category) {
                Ok(Some(record)) => records.push(record),
                // Too little left to split into brand + product.
                Ok(None) => {}
                Err(e) => {
                    failures.push(format!("Error parsing line {}: {} - {}", i + 1, line, e))
                }
            },
        }
    }

    let total = records.len();
    CatalogSummary {
        records,
        failures,
        categories,
        total_records: total,
        success_count: total,
    }
}

// ── Tests ──

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_input_yields_nothing() {
        let summary = parse_catalog("\n   \n\t\n");
        assert!(summary.records.is_empty());
        assert!(summary.failures.is_empty());
        assert!(summary.categories.is_empty());
        assert_eq!(summary.total_records, 0);
    }

    #[test]
    fn header_sets_category_for_following_products() {
        let text = "Skincare:\n- BRAND Product Name (Shade A) (50ml) 15€\n- NIVEA Body Milk 6€";
        let summary = parse_catalog(text);
        assert_eq!(summary.records.len(), 2);
        assert!(summary.records.iter().all(|r| r.category == "Skincare"));
        assert_eq!(summary.categories.len(), 1);
    }

    #[test]
    fn category_switches_on_next_header() {
        let text = "Skincare:\n- NIVEA Creme 5€\nMakeup:\n- ESSENCE Mascara 4€";
        let summary = parse_catalog(text);
        assert_eq!(summary.records[0].category, "Skincare");
        assert_eq!(summary.records[1].category, "Makeup");
        assert!(summary.categories.contains("Makeup"));
    }

    #[test]
    fn orphan_product_gets_empty_category() {
        let summary = parse_catalog("- NIVEA Creme 5€");
        assert_eq!(summary.records.len(), 1);
        assert_eq!(summary.records[0].category, "");
        assert!(summary.categories.is_empty());
    }

    #[test]
    fn non_product_lines_are_ignored() {
        let text = "Skincare:\nnota interna\n- NIVEA Creme 5€";
        let summary = parse_catalog(text);
        assert_eq!(summary.records.len(), 1);
        assert!(summary.failures.is_empty());
    }

    #[test]
    fn bad_line_is_reported_without_aborting_the_batch() {
        let bad = format!("- ACME Huge Serum {}€", "9".repeat(400));
        let text = format!(
            "Serums:\n- GOOD One Serum 10€\n{bad}\n- GOOD Two Serum 12€"
        );
        let summary = parse_catalog(&text);
        assert_eq!(summary.records.len(), 2);
        assert_eq!(summary.failures.len(), 1);
        assert!(summary.failures[0].starts_with("Error parsing line 3:"));
        assert!(summary.failures[0].contains("ACME Huge Serum"));
    }

    #[test]
    fn insufficient_tokens_are_dropped_silently() {
        let summary = parse_catalog("Skincare:\n- SOLO");
        assert!(summary.records.is_empty());
        assert!(summary.failures.is_empty());
    }

    #[test]
    fn category_assignment_is_order_independent() {
        let a = parse_catalog("Skincare:\n- NIVEA Creme 5€\n- VICHY Serum 20€");
        let b = parse_catalog("Skincare:\n- VICHY Serum 20€\n- NIVEA Creme 5€");
        for summary in [&a, &b] {
            assert!(summary.records.iter().all(|r| r.category == "Skincare"));
        }
    }

    #[test]
    fn catalogo_fixture() {
        let text = std::fs::read_to_string("tests/fixtures/catalogo.txt").unwrap();
        let summary = parse_catalog(&text);
        assert_eq!(summary.records.len(), 6);
        assert_eq!(summary.categories.len(), 3);
        assert!(summary.failures.is_empty());
        assert_eq!(summary.total_records, summary.success_count);

        let nivea = summary.records.iter().find(|r| r.brand == "NIVEA").unwrap();
        assert_eq!(nivea.category, "Corporal");
        assert_eq!(nivea.product_name, "Body Milk");
        assert_eq!(nivea.price, "16€");

        let lrp = summary
            .records
            .iter()
            .find(|r| r.brand == "La Roche-Posay")
            .unwrap();
        assert_eq!(lrp.product_name, "EFFACLAR Duo+");
        assert_eq!(lrp.volume, "40ml");
        assert_eq!(lrp.price, "28€");
    }
}
