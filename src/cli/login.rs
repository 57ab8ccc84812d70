//! Login command implementation

use colored::Colorize;
use dialoguer::{theme::ColorfulTheme, Input, Password};

use crate::cli::args::GlobalOptions;
use crate::cli::context::CommandContext;
use crate::error::Result;

/// Run the login command.
///
/// Credentials come from flags when supplied (scripting) and interactive
/// prompts otherwise.
pub async fn run(
    opts: &GlobalOptions,
    username: Option<String>,
    password: Option<String>,
) -> Result<()> {
    let ctx = CommandContext::new(opts.config_ref())?;
    let bridge = ctx.auth_bridge()?;

    let username = match username {
        Some(u) => u,
        None => Input::with_theme(&ColorfulTheme::default())
            .with_prompt("Username or email")
            .interact_text()?,
    };

    let password = match password {
        Some(p) => p,
        None => Password::with_theme(&ColorfulTheme::default())
            .with_prompt("Password")
            .interact()?,
    };

    println!("{}", "Signing in...".cyan());
    let identity = bridge.authenticate(&username, &password).await?;

    println!(
        "{} Signed in as {} ({})",
        "✓".green(),
        identity.display_name.bold(),
        identity.email
    );
    Ok(())
}
