//! Inventaris Dashboard
//!
//! Client core for the Inventaris asset inventory backend: a typed REST client,
//! presentation helpers for the dashboard views, and form state with validation.

pub mod api;
pub mod config;
pub mod dashboard;
pub mod error;
pub mod forms;
pub mod models;
pub mod presenter;
pub mod reports;

pub use api::ApiClient;
pub use config::AppConfig;
pub use dashboard::Dashboard;
pub use error::{AppError, AppResult};
