use clap::ArgMatches;

use crate::config::{api_url, load_config, save_config, session_file_path};
use crate::error::{DashboardError, DashboardResult};

pub async fn handle_config(matches: &ArgMatches) -> DashboardResult<()> {
    if let Some(url) = matches.get_one::<String>("api-url") {
        if !(url.starts_with("http://") || url.starts_with("https://")) {
            return Err(DashboardError::InvalidInput(format!(
                "API URL must start with http:// or https://, got '{}'",
                url
            )));
        }
        let mut config = load_config();
        config.api_url = Some(url.trim_end_matches('/').to_string());
        save_config(&config)?;
        println!("API URL saved: {}", url);
    } else if matches.get_flag("show") {
        println!("API URL: {}", api_url());
        println!("Session file: {}", session_file_path()?.display());
    } else {
        println!("Usage: evallo config --api-url <URL> or evallo config --show");
    }
    Ok(())
}
