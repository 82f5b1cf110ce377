use std::process;

use clap::{Arg, ArgAction, ArgMatches, Command};

use evallo::commands::auth::{handle_login, handle_logout, handle_register, handle_whoami};
use evallo::commands::configure::handle_config;
use evallo::commands::employees::{
    handle_create_employee, handle_delete_employee, handle_list_employees, handle_show_employee,
    handle_update_employee,
};
use evallo::commands::logs::handle_logs;
use evallo::commands::teams::{
    handle_create_team, handle_delete_team, handle_list_teams, handle_show_team, handle_update_team,
};
use evallo::context::AppContext;
use evallo::error::{DashboardError, DashboardResult};
use evallo::interactive::run_interactive_mode;
use evallo::logging::{init_logging, log_error, log_info};
use evallo::routes::Route;

fn format_arg() -> Arg {
    Arg::new("format")
        .long("format")
        .short('f')
        .value_name("FORMAT")
        .help("Output format: simple, table, json")
        .default_value("simple")
}

fn id_arg(what: &str) -> Arg {
    Arg::new("id")
        .value_name("ID")
        .help(format!("{} ID", what))
        .required(true)
        .index(1)
}

fn employee_field_args(cmd: Command) -> Command {
    cmd.arg(
        Arg::new("name")
            .long("name")
            .short('n')
            .value_name("NAME")
            .help("Employee name"),
    )
    .arg(
        Arg::new("email")
            .long("email")
            .short('e')
            .value_name("EMAIL")
            .help("Employee email"),
    )
    .arg(
        Arg::new("designation")
            .long("designation")
            .short('d')
            .value_name("DESIGNATION")
            .help("Job title"),
    )
    .arg(
        Arg::new("team")
            .long("team")
            .short('t')
            .value_name("TEAM_NAME")
            .help("Name of the team the employee belongs to"),
    )
}

fn build_cli() -> Command {
    Command::new("evallo")
        .about("Evallo - manage your organization's teams and employees from the terminal")
        .version(env!("CARGO_PKG_VERSION"))
        .subcommand_required(true)
        .arg_required_else_help(true)
        .subcommand(
            Command::new("login")
                .about("Log in and store the session")
                .arg(Arg::new("email").long("email").value_name("EMAIL").help("Account email"))
                .arg(
                    Arg::new("password")
                        .long("password")
                        .value_name("PASSWORD")
                        .help("Account password (prompted when omitted)"),
                ),
        )
        .subcommand(
            Command::new("register")
                .about("Create a new account")
                .arg(Arg::new("name").long("name").value_name("NAME").help("Your name"))
                .arg(Arg::new("email").long("email").value_name("EMAIL").help("Account email"))
                .arg(
                    Arg::new("password")
                        .long("password")
                        .value_name("PASSWORD")
                        .help("Account password (prompted when omitted)"),
                ),
        )
        .subcommand(Command::new("logout").about("Clear the stored session"))
        .subcommand(Command::new("whoami").about("Show the logged in user"))
        .subcommand(
            Command::new("config")
                .about("Show or change client configuration")
                .arg(
                    Arg::new("api-url")
                        .long("api-url")
                        .value_name("URL")
                        .help("Base URL of the backend"),
                )
                .arg(
                    Arg::new("show")
                        .long("show")
                        .help("Show the current configuration")
                        .action(ArgAction::SetTrue),
                ),
        )
        .subcommand(
            Command::new("teams")
                .about("List and manage teams")
                .subcommand_required(true)
                .subcommand(Command::new("list").about("List teams with member counts").arg(format_arg()))
                .subcommand(Command::new("show").about("Show a team").arg(id_arg("Team")))
                .subcommand(
                    Command::new("create").about("Create a team").arg(
                        Arg::new("name")
                            .value_name("NAME")
                            .help("Team name")
                            .required(true)
                            .index(1),
                    ),
                )
                .subcommand(
                    Command::new("update")
                        .about("Rename a team")
                        .arg(id_arg("Team"))
                        .arg(
                            Arg::new("name")
                                .long("name")
                                .short('n')
                                .value_name("NAME")
                                .help("New team name"),
                        ),
                )
                .subcommand(Command::new("delete").about("Delete a team").arg(id_arg("Team"))),
        )
        .subcommand(
            Command::new("employees")
                .about("List and manage employees")
                .subcommand_required(true)
                .subcommand(Command::new("list").about("List employees").arg(format_arg()))
                .subcommand(Command::new("show").about("Show an employee").arg(id_arg("Employee")))
                .subcommand(employee_field_args(Command::new("create").about("Add an employee")))
                .subcommand(employee_field_args(
                    Command::new("update")
                        .about("Update an employee")
                        .arg(id_arg("Employee")),
                ))
                .subcommand(
                    Command::new("delete")
                        .about("Delete an employee")
                        .arg(id_arg("Employee")),
                ),
        )
        .subcommand(Command::new("logs").about("Show the activity log").arg(format_arg()))
        .subcommand(
            Command::new("dashboard")
                .about("Open the interactive dashboard")
                .arg(
                    Arg::new("route")
                        .value_name("PATH")
                        .help("Start at /login, /register or /dashboard")
                        .index(1),
                ),
        )
}

async fn handle_dashboard(matches: &ArgMatches) -> DashboardResult<()> {
    let mut context = AppContext::load()?;
    if let Some(path) = matches.get_one::<String>("route") {
        let requested = Route::parse(path)
            .ok_or_else(|| DashboardError::InvalidInput(format!("Unknown route '{}'", path)))?;
        let landed = context.navigate(requested);
        if landed != requested {
            log_info(&format!("{} redirected to {}", requested, landed));
        }
    }
    run_interactive_mode(context).await
}

fn unknown(scope: &str) -> ! {
    eprintln!("Unknown {} subcommand. Use 'evallo {} --help' for available options.", scope, scope);
    process::exit(1);
}

#[tokio::main]
async fn main() {
    if let Err(e) = init_logging() {
        eprintln!("Warning: file logging disabled: {}", e);
    }

    let matches = build_cli().get_matches();

    let result = match matches.subcommand() {
        Some(("login", sub_matches)) => handle_login(sub_matches).await,
        Some(("register", sub_matches)) => handle_register(sub_matches).await,
        Some(("logout", sub_matches)) => handle_logout(sub_matches).await,
        Some(("whoami", sub_matches)) => handle_whoami(sub_matches).await,
        Some(("config", sub_matches)) => handle_config(sub_matches).await,
        Some(("teams", sub_matches)) => match sub_matches.subcommand() {
            Some(("list", m)) => handle_list_teams(m).await,
            Some(("show", m)) => handle_show_team(m).await,
            Some(("create", m)) => handle_create_team(m).await,
            Some(("update", m)) => handle_update_team(m).await,
            Some(("delete", m)) => handle_delete_team(m).await,
            _ => unknown("teams"),
        },
        Some(("employees", sub_matches)) => match sub_matches.subcommand() {
            Some(("list", m)) => handle_list_employees(m).await,
            Some(("show", m)) => handle_show_employee(m).await,
            Some(("create", m)) => handle_create_employee(m).await,
            Some(("update", m)) => handle_update_employee(m).await,
            Some(("delete", m)) => handle_delete_employee(m).await,
            _ => unknown("employees"),
        },
        Some(("logs", sub_matches)) => handle_logs(sub_matches).await,
        Some(("dashboard", sub_matches)) => handle_dashboard(sub_matches).await,
        _ => {
            eprintln!("Unknown command. Use 'evallo --help' for available commands.");
            process::exit(1);
        }
    };

    if let Err(e) = result {
        log_error(&format!("Command failed: {}", e));
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}

#[cfg(test)]
mod tests {
    use super::build_cli;

    #[test]
    fn cli_definition_is_consistent() {
        build_cli().debug_assert();
    }

    #[test]
    fn employee_update_takes_id_and_fields() {
        let matches = build_cli()
            .try_get_matches_from(["evallo", "employees", "update", "4", "--team", "Ops"])
            .unwrap();
        let (_, employees) = matches.subcommand().unwrap();
        let (name, update) = employees.subcommand().unwrap();
        assert_eq!(name, "update");
        assert_eq!(update.get_one::<String>("id").map(String::as_str), Some("4"));
        assert_eq!(update.get_one::<String>("team").map(String::as_str), Some("Ops"));
    }
}
