// Defensive normalization of loosely-typed backend responses.
// A missing or null field is the default case (zero / empty); a field
// whose type contradicts the model is a malformed response.
use crate::application::data_source::FetchError;
use crate::domain::analytics::AnalyticsWindow;
use crate::domain::billing::{SubscriptionState, Transaction};
use crate::domain::catalog::ProductSummary;
use chrono::NaiveDate;
use serde_json::{Map, Value};

type JsonObject = Map<String, Value>;

/// Product listing: a JSON array of catalog entries.
pub fn products(value: &Value) -> Result<Vec<ProductSummary>, FetchError> {
    let items = value
        .as_array()
        .ok_or_else(|| malformed("product listing is not an array"))?;
    items.iter().map(product).collect()
}

fn product(value: &Value) -> Result<ProductSummary, FetchError> {
    let obj = object(value, "product entry")?;
    Ok(ProductSummary {
        id: text_field(obj, "id")?,
        name: text_field(obj, "name")?,
        sku: text_field(obj, "sku")?,
        category: optional_text_field(obj, "category")?,
        images: text_list_field(obj, "images")?,
    })
}

/// Analytics summary: counters live under an optional `kpis` object.
/// An absent `kpis` means no events in the window, not an error.
pub fn analytics_summary(value: &Value) -> Result<AnalyticsWindow, FetchError> {
    let obj = object(value, "analytics summary")?;
    let kpis = match obj.get("kpis") {
        None | Some(Value::Null) => return Ok(AnalyticsWindow::default()),
        Some(value) => object(value, "`kpis`")?,
    };
    Ok(AnalyticsWindow {
        total_try_ons: count_field(kpis, "totalTryOns")?,
        widget_opens: count_field(kpis, "widgetOpens")?,
        unique_visitors: count_field(kpis, "uniqueVisitors")?,
        unique_sessions: count_field(kpis, "uniqueSessions")?,
        total_events: count_field(kpis, "totalEvents")?,
        total_errors: count_field(kpis, "totalErrors")?,
    })
}

/// Credit balance: the remaining balance under `credits`.
pub fn credit_balance(value: &Value) -> Result<f64, FetchError> {
    let obj = object(value, "credit balance")?;
    amount_field(obj, "credits")
}

/// Usage analytics for the billing period, combined with the separately
/// fetched balance into one subscription state.
pub fn usage_analytics(
    value: &Value,
    current_credits: f64,
) -> Result<SubscriptionState, FetchError> {
    let obj = object(value, "usage analytics")?;
    Ok(SubscriptionState {
        current_credits,
        total_credits: amount_field(obj, "totalCredits")?,
        used_this_period: amount_field(obj, "usedThisPeriod")?,
        cost_per_credit: amount_field(obj, "costPerCredit")?,
        total_spent: amount_field(obj, "totalMoney")?,
    })
}

/// Purchase history: a JSON array of transactions.
pub fn transactions(value: &Value) -> Result<Vec<Transaction>, FetchError> {
    let items = value
        .as_array()
        .ok_or_else(|| malformed("purchase history is not an array"))?;
    items.iter().map(transaction).collect()
}

fn transaction(value: &Value) -> Result<Transaction, FetchError> {
    let obj = object(value, "transaction entry")?;
    Ok(Transaction {
        id: text_field(obj, "id")?,
        date: date_field(obj, "date")?,
        amount: amount_field(obj, "amount")?,
        description: text_field(obj, "description")?,
    })
}

fn malformed(message: impl Into<String>) -> FetchError {
    FetchError::Malformed(message.into())
}

fn object<'a>(value: &'a Value, what: &str) -> Result<&'a JsonObject, FetchError> {
    value
        .as_object()
        .ok_or_else(|| malformed(format!("{} is not an object", what)))
}

/// Non-negative integer counter; missing or null defaults to zero.
fn count_field(obj: &JsonObject, key: &str) -> Result<u64, FetchError> {
    match obj.get(key) {
        None | Some(Value::Null) => Ok(0),
        Some(value) => value
            .as_u64()
            .ok_or_else(|| malformed(format!("`{}` is not a non-negative integer", key))),
    }
}

/// Non-negative number; missing or null defaults to zero.
fn amount_field(obj: &JsonObject, key: &str) -> Result<f64, FetchError> {
    match obj.get(key) {
        None | Some(Value::Null) => Ok(0.0),
        Some(value) => value
            .as_f64()
            .filter(|amount| *amount >= 0.0)
            .ok_or_else(|| malformed(format!("`{}` is not a non-negative number", key))),
    }
}

/// Text value; missing or null defaults to the empty string.
fn text_field(obj: &JsonObject, key: &str) -> Result<String, FetchError> {
    match obj.get(key) {
        None | Some(Value::Null) => Ok(String::new()),
        Some(Value::String(text)) => Ok(text.clone()),
        Some(_) => Err(malformed(format!("`{}` is not a string", key))),
    }
}

fn optional_text_field(obj: &JsonObject, key: &str) -> Result<Option<String>, FetchError> {
    match obj.get(key) {
        None | Some(Value::Null) => Ok(None),
        Some(Value::String(text)) => Ok(Some(text.clone())),
        Some(_) => Err(malformed(format!("`{}` is not a string", key))),
    }
}

fn text_list_field(obj: &JsonObject, key: &str) -> Result<Vec<String>, FetchError> {
    let items = match obj.get(key) {
        None | Some(Value::Null) => return Ok(Vec::new()),
        Some(Value::Array(items)) => items,
        Some(_) => return Err(malformed(format!("`{}` is not an array", key))),
    };
    items
        .iter()
        .map(|item| match item {
            Value::String(text) => Ok(text.clone()),
            _ => Err(malformed(format!("`{}` entry is not a string", key))),
        })
        .collect()
}

/// Calendar date; missing or null defaults to the epoch date. Accepts a
/// bare date or an ISO timestamp and keeps the date part.
fn date_field(obj: &JsonObject, key: &str) -> Result<NaiveDate, FetchError> {
    match obj.get(key) {
        None | Some(Value::Null) => Ok(NaiveDate::default()),
        Some(Value::String(text)) => parse_date(text)
            .ok_or_else(|| malformed(format!("`{}` is not a calendar date: {}", key, text))),
        Some(_) => Err(malformed(format!("`{}` is not a date string", key))),
    }
}

fn parse_date(text: &str) -> Option<NaiveDate> {
    let head = text.get(..10).unwrap_or(text);
    NaiveDate::parse_from_str(head, "%Y-%m-%d").ok()
}
