pub mod auth;
pub mod configure;
pub mod employees;
pub mod logs;
pub mod teams;

use std::io::{self, BufRead, Write};

use clap::ArgMatches;
use colored::*;

use crate::dashboard_error;
use crate::error::{DashboardError, DashboardResult};
use crate::forms::FieldErrors;
use crate::formatting::OutputFormat;

/// Read one line from stdin after printing a label.
pub(crate) fn prompt(label: &str) -> DashboardResult<String> {
    print!("{}: ", label);
    io::stdout().flush()?;
    let mut line = String::new();
    io::stdin().lock().read_line(&mut line)?;
    Ok(line.trim_end_matches(['\r', '\n']).to_string())
}

/// Value from the command line, or prompted for when absent.
pub(crate) fn arg_or_prompt(matches: &ArgMatches, id: &str, label: &str) -> DashboardResult<String> {
    match matches.get_one::<String>(id) {
        Some(value) => Ok(value.clone()),
        None => prompt(label),
    }
}

pub(crate) fn parse_id(matches: &ArgMatches, what: &str) -> DashboardResult<i64> {
    let raw = matches
        .get_one::<String>("id")
        .ok_or_else(|| dashboard_error!(InvalidInput, "{} ID is required", what))?;
    raw.parse::<i64>()
        .map_err(|_| dashboard_error!(InvalidInput, "'{}' is not a valid {} ID", raw, what.to_lowercase()))
}

pub(crate) fn output_format(matches: &ArgMatches) -> DashboardResult<OutputFormat> {
    matches
        .get_one::<String>("format")
        .map(|s| s.parse())
        .unwrap_or(Ok(OutputFormat::Simple))
}

pub(crate) fn print_field_errors(errors: &FieldErrors) {
    for (field, message) in errors.iter() {
        eprintln!("  {} {}", format!("{}:", field).red().bold(), message.red());
    }
}

/// Print validation problems inline; pass every other error through.
pub(crate) fn report_validation(result: DashboardResult<String>) -> DashboardResult<()> {
    match result {
        Ok(message) => {
            println!("{} {}", "✅".green(), message.green().bold());
            Ok(())
        }
        Err(DashboardError::Validation(errors)) => {
            print_field_errors(&errors);
            Err(DashboardError::Validation(errors))
        }
        Err(e) => Err(e),
    }
}
