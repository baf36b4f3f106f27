// Widget analytics domain models

/// Raw event counters for the reporting window. Missing counters
/// normalize to zero before this type is built.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AnalyticsWindow {
    pub total_try_ons: u64,
    pub widget_opens: u64,
    pub unique_visitors: u64,
    pub unique_sessions: u64,
    pub total_events: u64,
    pub total_errors: u64,
}

/// Window counters plus the rates derived from them.
#[derive(Debug, Clone, PartialEq)]
pub struct AnalyticsReport {
    pub window: AnalyticsWindow,
    pub conversion_rate: f64,
    pub error_rate: f64,
}

impl AnalyticsReport {
    /// Derive conversion and error rates, guarding zero denominators.
    pub fn new(window: AnalyticsWindow) -> Self {
        let conversion_rate = if window.widget_opens > 0 {
            window.total_try_ons as f64 / window.widget_opens as f64 * 100.0
        } else {
            0.0
        };
        let error_rate = if window.total_events > 0 {
            window.total_errors as f64 / window.total_events as f64 * 100.0
        } else {
            0.0
        };
        Self {
            window,
            conversion_rate,
            error_rate,
        }
    }
}
