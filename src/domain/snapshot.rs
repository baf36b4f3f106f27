// Dashboard snapshot - the aggregate root assembled once per aggregation
use super::analytics::{AnalyticsReport, AnalyticsWindow};
use super::billing::{SubscriptionState, Transaction};
use super::catalog::ProductSummary;

/// How many catalog entries the snapshot keeps, in catalog order.
pub const RECENT_PRODUCT_LIMIT: usize = 5;
/// How many purchases the snapshot keeps, in history order.
pub const RECENT_TRANSACTION_LIMIT: usize = 3;

/// Fully-resolved dashboard data for one aggregation call.
/// Built once, never mutated, discarded after presentation.
#[derive(Debug, Clone, PartialEq)]
pub struct DashboardSnapshot {
    pub product_count: usize,
    pub recent_products: Vec<ProductSummary>,
    pub analytics: AnalyticsReport,
    pub subscription: SubscriptionState,
    pub recent_transactions: Vec<Transaction>,
}

impl DashboardSnapshot {
    /// Assemble the snapshot from normalized sub-responses.
    /// `product_count` reflects the full catalog; the recent lists are
    /// prefixes of the order the backends returned.
    pub fn assemble(
        catalog: Vec<ProductSummary>,
        window: AnalyticsWindow,
        subscription: SubscriptionState,
        transactions: Vec<Transaction>,
    ) -> Self {
        let product_count = catalog.len();
        let mut recent_products = catalog;
        recent_products.truncate(RECENT_PRODUCT_LIMIT);
        let mut recent_transactions = transactions;
        recent_transactions.truncate(RECENT_TRANSACTION_LIMIT);

        Self {
            product_count,
            recent_products,
            analytics: AnalyticsReport::new(window),
            subscription,
            recent_transactions,
        }
    }
}
