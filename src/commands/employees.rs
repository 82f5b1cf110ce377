use clap::ArgMatches;
use colored::*;

use super::{output_format, parse_id, report_validation};
use crate::context::AppContext;
use crate::dashboard::Dashboard;
use crate::error::{DashboardError, DashboardResult, ErrorContext};
use crate::formatting::print_employees;

pub async fn handle_list_employees(matches: &ArgMatches) -> DashboardResult<()> {
    let format = output_format(matches)?;
    let mut context = AppContext::load().context("Failed to load session")?;
    let client = context.verified_client()?;

    let mut dashboard = Dashboard::new();
    dashboard.refresh_employees(client).await?;
    print_employees(&dashboard.employees, format)
}

pub async fn handle_show_employee(matches: &ArgMatches) -> DashboardResult<()> {
    let employee_id = parse_id(matches, "Employee")?;
    let mut context = AppContext::load().context("Failed to load session")?;
    let client = context.verified_client()?;

    let employee = client.get_employee(employee_id).await?;
    println!("{}: {}", "ID".bold(), employee.id.to_string().cyan());
    println!("{}: {}", "Name".bold(), employee.name);
    println!("{}: {}", "Email".bold(), employee.email);
    println!("{}: {}", "Designation".bold(), employee.designation);
    println!("{}: {}", "Team".bold(), employee.team_name.bright_blue());
    Ok(())
}

fn apply_field_args(dashboard: &mut Dashboard, matches: &ArgMatches) {
    let fields = &mut dashboard.employee_form.fields;
    if let Some(name) = matches.get_one::<String>("name") {
        fields.name = name.clone();
    }
    if let Some(email) = matches.get_one::<String>("email") {
        fields.email = email.clone();
    }
    if let Some(designation) = matches.get_one::<String>("designation") {
        fields.designation = designation.clone();
    }
    if let Some(team) = matches.get_one::<String>("team") {
        fields.team_name = team.clone();
    }
}

pub async fn handle_create_employee(matches: &ArgMatches) -> DashboardResult<()> {
    let mut context = AppContext::load().context("Failed to load session")?;
    let client = context.verified_client()?;

    let mut dashboard = Dashboard::new();
    dashboard
        .refresh_teams(client)
        .await
        .map_err(|e| DashboardError::ApiError(format!("Failed to get teams: {}", e)))?;

    dashboard.open_create_employee();
    apply_field_args(&mut dashboard, matches);
    report_validation(dashboard.submit_employee(client).await)
}

pub async fn handle_update_employee(matches: &ArgMatches) -> DashboardResult<()> {
    let employee_id = parse_id(matches, "Employee")?;
    let mut context = AppContext::load().context("Failed to load session")?;
    let client = context.verified_client()?;

    let mut dashboard = Dashboard::new();
    dashboard
        .refresh_teams(client)
        .await
        .map_err(|e| DashboardError::ApiError(format!("Failed to get teams: {}", e)))?;

    dashboard.open_edit_employee(client, employee_id).await?;
    apply_field_args(&mut dashboard, matches);
    report_validation(dashboard.submit_employee(client).await)
}

pub async fn handle_delete_employee(matches: &ArgMatches) -> DashboardResult<()> {
    let employee_id = parse_id(matches, "Employee")?;
    let mut context = AppContext::load().context("Failed to load session")?;
    let client = context.verified_client()?;

    let mut dashboard = Dashboard::new();
    let message = dashboard.delete_employee(client, employee_id).await?;
    println!("{} {}", "✅".green(), message.green().bold());
    Ok(())
}
