use std::str::FromStr;

use colored::*;

use super::utils::truncate;
use crate::error::DashboardError;
use crate::models::{ActivityLog, Employee, Team, UserProfile};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Simple,
    Table,
    Json,
}

impl FromStr for OutputFormat {
    type Err = DashboardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "simple" => Ok(OutputFormat::Simple),
            "table" => Ok(OutputFormat::Table),
            "json" => Ok(OutputFormat::Json),
            other => Err(DashboardError::InvalidInput(format!(
                "Unknown format '{}'. Use simple, table or json",
                other
            ))),
        }
    }
}

fn print_json<T: serde::Serialize + ?Sized>(value: &T) -> Result<(), DashboardError> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

pub fn print_teams(teams: &[Team], format: OutputFormat) -> Result<(), DashboardError> {
    match format {
        OutputFormat::Json => return print_json(teams),
        _ if teams.is_empty() => {
            println!("{}", "No teams found".dimmed());
        }
        OutputFormat::Simple => {
            println!("{}", "Teams:".bold());
            for team in teams {
                println!(
                    "  {} {}  {}",
                    format!("#{}", team.id).cyan(),
                    team.name.bold(),
                    format!("Members: {}", team.member_count).dimmed().italic()
                );
            }
        }
        OutputFormat::Table => {
            println!("{:<8} {:<40} {:>8}", "ID".bold(), "NAME".bold(), "MEMBERS".bold());
            println!("{}", "─".repeat(58).dimmed());
            for team in teams {
                println!(
                    "{:<8} {:<40} {:>8}",
                    team.id.to_string().cyan(),
                    truncate(&team.name, 40),
                    team.member_count
                );
            }
        }
    }
    Ok(())
}

pub fn print_employees(employees: &[Employee], format: OutputFormat) -> Result<(), DashboardError> {
    match format {
        OutputFormat::Json => return print_json(employees),
        _ if employees.is_empty() => {
            println!("{}", "No employees record found".dimmed());
        }
        OutputFormat::Simple => {
            println!("{}", "Employees:".bold());
            for employee in employees {
                println!(
                    "  {} {} {}",
                    format!("#{}", employee.id).cyan(),
                    employee.name.bold(),
                    format!("<{}>", employee.email).dimmed()
                );
                println!(
                    "      {}  {}",
                    employee.designation,
                    format!("[{}]", employee.team_name).bright_blue()
                );
            }
        }
        OutputFormat::Table => {
            println!(
                "{:<8} {:<24} {:<30} {:<20} {:<16}",
                "ID".bold(),
                "NAME".bold(),
                "EMAIL".bold(),
                "DESIGNATION".bold(),
                "TEAM".bold()
            );
            println!("{}", "─".repeat(102).dimmed());
            for employee in employees {
                println!(
                    "{:<8} {:<24} {:<30} {:<20} {:<16}",
                    employee.id.to_string().cyan(),
                    truncate(&employee.name, 24),
                    truncate(&employee.email, 30),
                    truncate(&employee.designation, 20),
                    truncate(&employee.team_name, 16)
                );
            }
        }
    }
    Ok(())
}

pub fn print_logs(logs: &[ActivityLog], format: OutputFormat) -> Result<(), DashboardError> {
    if format == OutputFormat::Json {
        return print_json(logs);
    }
    if logs.is_empty() {
        println!("{}", "No activity yet".dimmed());
        return Ok(());
    }
    println!("{}", "Activity Log:".bold());
    for entry in logs {
        println!("  {}", entry.to_string().bright_black());
    }
    Ok(())
}

pub fn print_profile(user: &UserProfile) {
    println!("Logged in as: {} ({})", user.name.bold(), user.email);
    if let Some(org) = &user.org_name {
        println!("Organization: {}", org.bright_blue());
    }
    if let Some(id) = &user.id {
        println!("User ID: {}", id.dimmed());
    }
}
