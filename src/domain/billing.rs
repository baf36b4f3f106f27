// Subscription and purchase history domain models
use chrono::NaiveDate;

/// Credit balance and spend figures for the current billing period.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SubscriptionState {
    pub current_credits: f64,
    pub total_credits: f64,
    pub used_this_period: f64,
    pub cost_per_credit: f64,
    pub total_spent: f64,
}

impl SubscriptionState {
    /// Approximate monetary value of the remaining balance.
    pub fn estimated_balance_value(&self) -> f64 {
        self.current_credits * self.cost_per_credit
    }
}

/// One credit purchase from the transaction history.
#[derive(Debug, Clone, PartialEq)]
pub struct Transaction {
    pub id: String,
    pub date: NaiveDate,
    pub amount: f64,
    pub description: String,
}
