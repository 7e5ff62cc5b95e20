use rust_decimal::Decimal;

use super::model::Product;

/// Filters for the catalog search. Every filter left as `None` matches all products.
#[derive(Debug, Clone, Default)]
pub struct ProductSearchCriteria {
    /// Case-insensitive substring over name, description and tags.
    pub query: Option<String>,
    pub category: Option<String>,
    pub min_price: Option<Decimal>,
    pub max_price: Option<Decimal>,
}

impl ProductSearchCriteria {
    pub fn matches(&self, product: &Product) -> bool {
        if let Some(query) = self.normalized_query() {
            let in_text = product.name.to_lowercase().contains(&query)
                || product.description.to_lowercase().contains(&query)
                || product
                    .tags
                    .iter()
                    .any(|tag| tag.to_lowercase().contains(&query));
            if !in_text {
                return false;
            }
        }

        if let Some(category) = &self.category
            && &product.category != category
        {
            return false;
        }

        if self.min_price.is_some_and(|min| product.price < min) {
            return false;
        }

        if self.max_price.is_some_and(|max| product.price > max) {
            return false;
        }

        true
    }

    /// Lowercased, trimmed query; `None` when absent or blank.
    pub fn normalized_query(&self) -> Option<String> {
        self.query
            .as_deref()
            .map(str::trim)
            .filter(|q| !q.is_empty())
            .map(str::to_lowercase)
    }
}
