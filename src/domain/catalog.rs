// Product catalog domain model

/// One catalog entry, carried verbatim from the product listing.
#[derive(Debug, Clone, PartialEq)]
pub struct ProductSummary {
    pub id: String,
    pub name: String,
    pub sku: String,
    pub category: Option<String>,
    pub images: Vec<String>,
}
