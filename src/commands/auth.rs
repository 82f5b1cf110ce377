use clap::ArgMatches;
use colored::*;

use super::{arg_or_prompt, print_field_errors};
use crate::context::AppContext;
use crate::error::{DashboardError, DashboardResult, ErrorContext};
use crate::formatting::{extract_first_name, print_profile};
use crate::forms::{FormState, LoginFields, RegisterFields};
use crate::routes::Route;

pub async fn handle_login(matches: &ArgMatches) -> DashboardResult<()> {
    let mut context = AppContext::load().context("Failed to load session")?;

    if context.navigate(Route::Login) == Route::Dashboard {
        let user = &context.session().user;
        println!(
            "Already logged in{}. Run 'evallo logout' to switch accounts.",
            if user.email.is_empty() { String::new() } else { format!(" as {}", user.email) }
        );
        return Ok(());
    }

    let mut form: FormState<LoginFields> = FormState::new();
    form.open_create();
    form.fields.email = arg_or_prompt(matches, "email", "Email")?;
    form.fields.password = arg_or_prompt(matches, "password", "Password")?;

    match context.login(&mut form).await {
        Ok(()) => {
            println!("{} {}", "✅".green(), "Login successfully".green().bold());
            // profile is best effort; the token is what matters
            let profile = match context.verified_client() {
                Ok(client) => client.get_profile().await.ok(),
                Err(_) => None,
            };
            if let Some(user) = profile {
                println!("Welcome, {}!", extract_first_name(&user.name).bold());
                print_profile(&user);
                context.set_user(user)?;
            }
            Ok(())
        }
        Err(DashboardError::Validation(errors)) => {
            print_field_errors(&errors);
            Err(DashboardError::Validation(errors))
        }
        Err(e) => Err(e),
    }
}

pub async fn handle_register(matches: &ArgMatches) -> DashboardResult<()> {
    let mut context = AppContext::load().context("Failed to load session")?;

    if context.navigate(Route::Register) == Route::Dashboard {
        println!("Already logged in. Run 'evallo logout' before registering a new account.");
        return Ok(());
    }

    let mut form: FormState<RegisterFields> = FormState::new();
    form.open_create();
    form.fields.name = arg_or_prompt(matches, "name", "Name")?;
    form.fields.email = arg_or_prompt(matches, "email", "Email")?;
    form.fields.password = arg_or_prompt(matches, "password", "Password")?;

    match context.register(&mut form).await {
        Ok(()) => {
            println!("{} {}", "✅".green(), "Registered successfully".green().bold());
            println!("Run 'evallo login' to sign in.");
            Ok(())
        }
        Err(DashboardError::Validation(errors)) => {
            print_field_errors(&errors);
            Err(DashboardError::Validation(errors))
        }
        Err(e) => Err(e),
    }
}

pub async fn handle_logout(_matches: &ArgMatches) -> DashboardResult<()> {
    let mut context = AppContext::load().context("Failed to load session")?;
    let was_authenticated = context.is_authenticated();
    context.logout()?;

    if was_authenticated {
        println!("Logged out.");
    } else {
        println!("No active session.");
    }
    Ok(())
}

pub async fn handle_whoami(_matches: &ArgMatches) -> DashboardResult<()> {
    let mut context = AppContext::load().context("Failed to load session")?;
    let client = context.verified_client()?;

    let user = client.get_profile().await?;
    print_profile(&user);
    context.set_user(user)?;

    Ok(())
}
