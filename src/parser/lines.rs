/// What a single trimmed, non-empty catalog line is.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LineKind {
    /// Free-text header labelling the products that follow, e.g. "Maquillaje:".
    Category(String),
    /// Product entry, starts with '-'.
    Product,
    /// Neither header nor product; skipped.
    Skip,
}

/// Classify one line. A trailing ':' marks a header unless the line is itself
/// a product entry (leading '-' wins over the colon).
pub fn classify(line: &str) -> LineKind {
    if line.ends_with(':') && !line.starts_with('-') {
        let name = line.strip_suffix(':').unwrap_or(line).trim().to_string();
        return LineKind::Category(name);
    }
    if line.starts_with('-') {
        LineKind::Product
    } else {
        LineKind::Skip
    }
}

// ── Tests ──
