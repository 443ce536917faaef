// Presentation layer - JSON HTTP surface over the services
pub mod app_state;
pub mod error;
pub mod handlers;
