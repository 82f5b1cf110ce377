// Module declarations
pub mod client;
pub mod commands;
pub mod config;
pub mod constants;
pub mod context;
pub mod dashboard;
pub mod error;
pub mod formatting;
pub mod forms;
pub mod interactive;
pub mod logging;
pub mod models;
pub mod routes;
pub mod session;

#[cfg(test)]
mod tests;

// Re-export commonly used items
pub use client::ApiClient;
pub use config::{api_url, load_config, save_config, Config};
pub use context::{AppContext, AppContextBuilder};
pub use dashboard::{Dashboard, FetchReport};
pub use error::{DashboardError, DashboardResult};
pub use models::*;
pub use routes::Route;
pub use session::{Session, SessionStore};
