// Application layer - Aggregation use case and consumed interfaces
pub mod dashboard_service;
pub mod data_source;
pub mod normalize;
