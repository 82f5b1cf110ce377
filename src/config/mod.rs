#[allow(clippy::module_inception)]
pub mod config;

pub use config::{api_url, load_config, save_config, session_file_path, Config};
