//! Text and price filters over the catalog.
//!
//! Filters only select; they never mutate or reorder the products they are
//! given. Each rejected input maps to one `FilterError` variant whose
//! `Display` is the message shown to the shopper.

use sf_catalog::Product;
use tracing::debug;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FilterError {
    #[error("Please enter a search term. Empty or whitespace-only input is not allowed.")]
    EmptySearch,
    #[error("Please enter at least a minimum or maximum price.")]
    NoPriceBounds,
    #[error("Minimum price cannot be negative. Please enter a positive number.")]
    NegativeMin,
    #[error("Maximum price cannot be negative. Please enter a positive number.")]
    NegativeMax,
    #[error("Maximum price must be greater than minimum price.")]
    MaxNotAboveMin,
}

/// Validated, lowercased search term.
pub fn search_term(input: &str) -> Result<String, FilterError> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err(FilterError::EmptySearch);
    }
    Ok(trimmed.to_lowercase())
}

/// Case-insensitive substring match against product titles.
pub fn filter_by_text<'a>(products: &'a [Product], input: &str) -> Result<Vec<&'a Product>, FilterError> {
    let term = search_term(input)?;
    let matched: Vec<&Product> = products
        .iter()
        .filter(|p| p.title.to_lowercase().contains(&term))
        .collect();
    debug!(%term, matched = matched.len(), "text filter applied");
    Ok(matched)
}

/// Inclusive price bounds. A missing minimum is 0, a missing maximum is unbounded.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PriceRange {
    pub min: f64,
    pub max: f64,
}

impl PriceRange {
    /// Validate raw min/max field contents; blank means "not supplied".
    ///
    /// A supplied value without a leading number becomes NaN, which passes
    /// validation and matches no product.
    pub fn parse(min_input: &str, max_input: &str) -> Result<Self, FilterError> {
        let min = parse_bound(min_input);
        let max = parse_bound(max_input);

        if min.is_none() && max.is_none() {
            return Err(FilterError::NoPriceBounds);
        }

        let range = Self {
            min: min.unwrap_or(0.0),
            max: max.unwrap_or(f64::INFINITY),
        };

        if range.min < 0.0 {
            return Err(FilterError::NegativeMin);
        }
        if range.max < 0.0 {
            return Err(FilterError::NegativeMax);
        }
        if min.is_some() && max.is_some() && range.max <= range.min {
            return Err(FilterError::MaxNotAboveMin);
        }

        Ok(range)
    }

    pub fn contains(&self, price: i64) -> bool {
        let price = price as f64;
        price >= self.min && price <= self.max
    }
}

fn parse_bound(input: &str) -> Option<f64> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return None;
    }
    Some(leading_number(trimmed))
}

/// Longest numeric prefix of `input` ("12abc" is 12), or NaN when there is none.
fn leading_number(input: &str) -> f64 {
    let end = input
        .find(|c: char| !matches!(c, '0'..='9' | '+' | '-' | '.' | 'e' | 'E'))
        .unwrap_or(input.len());
    let candidate = &input[..end];
    (1..=candidate.len())
        .rev()
        .find_map(|len| candidate[..len].parse::<f64>().ok())
        .unwrap_or(f64::NAN)
}

pub fn filter_by_price<'a>(
    products: &'a [Product],
    min_input: &str,
    max_input: &str,
) -> Result<Vec<&'a Product>, FilterError> {
    let range = PriceRange::parse(min_input, max_input)?;
    let matched: Vec<&Product> = products
        .iter()
        .filter(|p| range.contains(p.price_after_sale))
        .collect();
    debug!(min = range.min, max = range.max, matched = matched.len(), "price filter applied");
    Ok(matched)
}
