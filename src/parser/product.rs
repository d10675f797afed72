use std::sync::LazyLock;

use anyhow::{Context, Result};
use regex::Regex;

use crate::record::ProductRecord;

static PRICE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(\d+(?:[.,]\d+)?)€\s*$").unwrap());
static PRICE_STRIP_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"=?\s*\d+(?:[.,]\d+)?€\s*$").unwrap());
static TRAILING_EQ_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"=\s*$").unwrap());
static VOLUME_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\(([^)]*(?:ml|ML|g|G))\)").unwrap());
static PAREN_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\(([^)]+)\)").unwrap());
static UPPER_LETTER_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[A-ZÁÉÍÓÚÑÜ]").unwrap());
static CAPS_TOKEN_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-ZÁÉÍÓÚÑÜ0-9-]+$").unwrap());

/// Flat retail markup added to every supplier price before display.
const MARKUP_EUR: f64 = 10.0;

/// Pull structured fields out of one product line.
///
/// Steps run in a fixed order, each removing what it matched from a working
/// copy of the line: trailing price, stray '=', volume parenthesis, remaining
/// parentheses, then the brand/product split on whatever is left. Lines that
/// reduce to fewer than two tokens yield `Ok(None)`.
pub fn extract(line: &str, category: &str) -> Result<Option<ProductRecord>> {
    let mut rest = line
        .strip_prefix('-')
        .unwrap_or(line)
        .trim_start()
        .to_string();

    let mut price = String::new();
    if let Some(caps) = PRICE_RE.captures(&rest) {
        let digits = caps[1].replace(',', ".");
        let base = digits
            .parse::<f64>()
            .ok()
            .filter(|v| v.is_finite())
            .with_context(|| format!("unreadable price \"{}\"", &caps[1]))?;
        price = display_price(base + MARKUP_EUR);
        rest = PRICE_STRIP_RE.replace(&rest, "").trim().to_string();
    }
    rest = TRAILING_EQ_RE.replace(&rest, "").trim().to_string();

    let mut volume = String::new();
    if let Some(caps) = VOLUME_RE.captures(&rest) {
        volume = caps[1].to_string();
        rest = VOLUME_RE.replace(&rest, "").trim().to_string();
    }

    let extras: Vec<String> = PAREN_RE
        .captures_iter(&rest)
        .map(|c| c[1].to_string())
        .collect();
    let characteristics = extras.join(", ");
    if !extras.is_empty() {
        rest = PAREN_RE.replace_all(&rest, "").trim().to_string();
    }

    let tokens: Vec<&str> = rest.split_whitespace().collect();
    if tokens.len() < 2 {
        return Ok(None);
    }
    let (brand, product_name) = split_brand(&tokens);

    Ok(Some(ProductRecord {
        category: category.to_string(),
        brand,
        product_name,
        characteristics,
        volume,
        price,
        raw_line: line.to_string(),
    }))
}

/// Format a marked-up price: two decimals, whole euros without cents.
fn display_price(value: f64) -> String {
    let amount = format!("{value:.2}");
    let amount = amount.strip_suffix(".00").unwrap_or(&amount);
    format!("{amount}€")
}

/// The first all-caps token after the leading one starts the product name;
/// everything before it is the brand. When the line opens with an all-caps
/// token, or carries no all-caps token at all, the first token is the brand.
fn split_brand(tokens: &[&str]) -> (String, String) {
    match tokens.iter().position(|t| is_product_start(t)) {
        Some(idx) if idx > 0 => (tokens[..idx].join(" "), tokens[idx..].join(" ")),
        _ => (tokens[0].to_string(), tokens[1..].join(" ")),
    }
}

/// All-caps here means uppercase Latin letters, the accented uppercase vowels,
/// Ñ/Ü, digits and hyphens, with at least one actual letter among them.
fn is_product_start(token: &str) -> bool {
    token.chars().count() >= 2
        && token == token.to_uppercase()
        && UPPER_LETTER_RE.is_match(token)
        && CAPS_TOKEN_RE.is_match(token)
}

// ── Tests ──
