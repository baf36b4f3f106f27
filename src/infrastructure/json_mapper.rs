// Mapper to convert the domain snapshot to the JSON view
use crate::domain::snapshot::DashboardSnapshot;
use crate::infrastructure::image_url::resolve_image_url;
use chrono::NaiveDate;
use serde::Serialize;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardView {
    pub products: ProductsView,
    pub analytics: AnalyticsView,
    pub subscription: SubscriptionView,
    pub recent_transactions: Vec<TransactionView>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductsView {
    pub total: usize,
    pub recent: Vec<ProductView>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductView {
    pub id: String,
    pub name: String,
    pub sku: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    pub images: Vec<String>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalyticsView {
    pub total_try_ons: u64,
    pub widget_opens: u64,
    pub conversion_rate: f64,
    pub error_rate: f64,
    pub unique_visitors: u64,
    pub unique_sessions: u64,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SubscriptionView {
    pub current_credits: f64,
    pub total_credits: f64,
    pub used_this_period: f64,
    pub cost_per_credit: f64,
    pub total_spent: f64,
    pub estimated_balance_value: f64,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TransactionView {
    pub id: String,
    pub date: NaiveDate,
    pub amount: f64,
    pub description: String,
}

/// Flatten the snapshot into the wire shape the dashboard page consumes.
/// Image references are resolved for display here; the snapshot keeps
/// them verbatim.
pub fn snapshot_to_view(snapshot: DashboardSnapshot, api_base: &str) -> DashboardView {
    let recent = snapshot
        .recent_products
        .into_iter()
        .map(|product| ProductView {
            id: product.id,
            name: product.name,
            sku: product.sku,
            category: product.category,
            images: product
                .images
                .iter()
                .map(|url| resolve_image_url(api_base, url))
                .collect(),
        })
        .collect();

    let analytics = AnalyticsView {
        total_try_ons: snapshot.analytics.window.total_try_ons,
        widget_opens: snapshot.analytics.window.widget_opens,
        conversion_rate: snapshot.analytics.conversion_rate,
        error_rate: snapshot.analytics.error_rate,
        unique_visitors: snapshot.analytics.window.unique_visitors,
        unique_sessions: snapshot.analytics.window.unique_sessions,
    };

    let subscription = SubscriptionView {
        estimated_balance_value: snapshot.subscription.estimated_balance_value(),
        current_credits: snapshot.subscription.current_credits,
        total_credits: snapshot.subscription.total_credits,
        used_this_period: snapshot.subscription.used_this_period,
        cost_per_credit: snapshot.subscription.cost_per_credit,
        total_spent: snapshot.subscription.total_spent,
    };

    let recent_transactions = snapshot
        .recent_transactions
        .into_iter()
        .map(|transaction| TransactionView {
            id: transaction.id,
            date: transaction.date,
            amount: transaction.amount,
            description: transaction.description,
        })
        .collect();

    DashboardView {
        products: ProductsView {
            total: snapshot.product_count,
            recent,
        },
        analytics,
        subscription,
        recent_transactions,
    }
}
