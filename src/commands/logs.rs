use clap::ArgMatches;

use super::output_format;
use crate::context::AppContext;
use crate::dashboard::Dashboard;
use crate::error::{DashboardResult, ErrorContext};
use crate::formatting::print_logs;

pub async fn handle_logs(matches: &ArgMatches) -> DashboardResult<()> {
    let format = output_format(matches)?;
    let mut context = AppContext::load().context("Failed to load session")?;
    let client = context.verified_client()?;

    let mut dashboard = Dashboard::new();
    dashboard.refresh_logs(client).await?;
    print_logs(&dashboard.logs, format)
}
