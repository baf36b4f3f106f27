// Dashboard aggregation service - layered library surface
pub mod application;
pub mod domain;
pub mod infrastructure;
pub mod presentation;
