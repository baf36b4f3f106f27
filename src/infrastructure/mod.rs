// Infrastructure layer - External dependencies and adapters
pub mod config;
pub mod http_data_source;
pub mod image_url;
pub mod json_mapper;
