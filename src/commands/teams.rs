use clap::ArgMatches;
use colored::*;

use super::{output_format, parse_id, report_validation};
use crate::context::AppContext;
use crate::dashboard::Dashboard;
use crate::error::{DashboardError, DashboardResult, ErrorContext};
use crate::formatting::print_teams;

pub async fn handle_list_teams(matches: &ArgMatches) -> DashboardResult<()> {
    let format = output_format(matches)?;
    let mut context = AppContext::load().context("Failed to load session")?;
    let client = context.verified_client()?;

    let mut dashboard = Dashboard::new();
    dashboard.refresh_teams(client).await?;
    print_teams(&dashboard.teams, format)
}

pub async fn handle_show_team(matches: &ArgMatches) -> DashboardResult<()> {
    let team_id = parse_id(matches, "Team")?;
    let mut context = AppContext::load().context("Failed to load session")?;
    let client = context.verified_client()?;

    let team = client.get_team(team_id).await?;
    println!("{}: {}", "ID".bold(), team.id.to_string().cyan());
    println!("{}: {}", "Name".bold(), team.name);
    println!("{}: {}", "Members".bold(), team.member_count);
    Ok(())
}

pub async fn handle_create_team(matches: &ArgMatches) -> DashboardResult<()> {
    let name = matches
        .get_one::<String>("name")
        .ok_or_else(|| DashboardError::InvalidInput("Team name is required".to_string()))?;

    let mut context = AppContext::load().context("Failed to load session")?;
    let client = context.verified_client()?;

    let mut dashboard = Dashboard::new();
    dashboard.open_create_team();
    dashboard.team_form.fields.team_name = name.clone();
    report_validation(dashboard.submit_team(client).await)
}

pub async fn handle_update_team(matches: &ArgMatches) -> DashboardResult<()> {
    let team_id = parse_id(matches, "Team")?;
    let mut context = AppContext::load().context("Failed to load session")?;
    let client = context.verified_client()?;

    // start from the server's values, then apply what was given
    let mut dashboard = Dashboard::new();
    dashboard.open_edit_team(client, team_id).await?;
    if let Some(name) = matches.get_one::<String>("name") {
        dashboard.team_form.fields.team_name = name.clone();
    }
    report_validation(dashboard.submit_team(client).await)
}

pub async fn handle_delete_team(matches: &ArgMatches) -> DashboardResult<()> {
    let team_id = parse_id(matches, "Team")?;
    let mut context = AppContext::load().context("Failed to load session")?;
    let client = context.verified_client()?;

    let mut dashboard = Dashboard::new();
    let message = dashboard.delete_team(client, team_id).await?;
    println!("{} {}", "✅".green(), message.green().bold());
    Ok(())
}
