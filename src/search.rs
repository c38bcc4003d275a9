//! Product search over the product cards already rendered in the page.
//!
//! No index is kept: every search re-scans the cards handed over by the page.

use crate::messages;

/// Searchable attributes of one `.product-item`.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ProductNode {
    pub name: String,
    pub model: String,
    pub description: String,
    pub hidden: bool,
}

impl ProductNode {
    /// Attributes are lower-cased on the way in; the backend usually
    /// renders them lower-case already.
    pub fn new(name: &str, model: &str, description: &str) -> Self {
        Self {
            name: name.to_lowercase(),
            model: model.to_lowercase(),
            description: description.to_lowercase(),
            hidden: false,
        }
    }

    pub fn matches(&self, term: &str) -> bool {
        self.name.contains(term) || self.model.contains(term) || self.description.contains(term)
    }
}

/// A `.category-section` and the products it contains (indices into the
/// page-wide product list).
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct CategorySection {
    pub products: Vec<usize>,
    pub hidden: bool,
}

/// Normalized search term.
pub fn normalize_term(raw: &str) -> String {
    raw.trim().to_lowercase()
}

/// Result of filtering, ready to be applied to the page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterOutcome {
    /// Per product: visible or not.
    pub product_visible: Vec<bool>,
    /// Per category: visible product count (0 hides the section).
    pub category_counts: Vec<usize>,
    pub visible_products: usize,
    pub visible_categories: usize,
    pub show_no_results: bool,
}

pub fn filter(term: &str, products: &[ProductNode], categories: &[CategorySection]) -> FilterOutcome {
    let product_visible: Vec<bool> = products
        .iter()
        .map(|p| term.is_empty() || p.matches(term))
        .collect();

    let category_counts: Vec<usize> = categories
        .iter()
        .map(|c| {
            c.products
                .iter()
                .filter(|&&i| product_visible.get(i).copied().unwrap_or(false))
                .count()
        })
        .collect();

    let visible_products = product_visible.iter().filter(|v| **v).count();
    let visible_categories = category_counts.iter().filter(|n| **n > 0).count();

    FilterOutcome {
        product_visible,
        category_counts,
        visible_products,
        visible_categories,
        show_no_results: visible_products == 0 && !term.is_empty(),
    }
}

/// Text for `#searchStats`. `raw_term` is the trimmed input as typed.
pub fn stats_text(raw_term: &str, visible_products: usize, visible_categories: usize) -> String {
    let term = raw_term.trim();
    if term.is_empty() {
        messages::ALL_PRODUCTS_SHOWN.to_string()
    } else {
        messages::search_results(visible_products, visible_categories, term)
    }
}

/// Counts used for the initial stats line: nodes not already hidden.
pub fn initial_counts(products: &[ProductNode], categories: &[CategorySection]) -> (usize, usize) {
    (
        products.iter().filter(|p| !p.hidden).count(),
        categories.iter().filter(|c| !c.hidden).count(),
    )
}
