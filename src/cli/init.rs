//! Init command implementation

use colored::Colorize;
use dialoguer::{theme::ColorfulTheme, Input, Password};

use crate::cli::args::GlobalOptions;
use crate::config::Config;
use crate::error::Result;

/// Run the init command.
///
/// Existing configuration values are offered as defaults so re-running init
/// only changes what the user edits. Values can also be supplied through
/// `TALENTSCOUT_*` environment variables instead of the file.
pub fn run(opts: &GlobalOptions) -> Result<()> {
    println!("{}", "Welcome to talentscout!".bold().green());
    println!("Let's set up your configuration.\n");

    let mut config = Config::load_at(opts.config_ref())?;

    let backend_url: String = Input::with_theme(&ColorfulTheme::default())
        .with_prompt("Candidate search backend URL")
        .default(
            config
                .backend_url
                .clone()
                .unwrap_or_else(|| "http://127.0.0.1:5000".to_string()),
        )
        .interact_text()?;

    let login_url: String = Input::with_theme(&ColorfulTheme::default())
        .with_prompt("Credential login endpoint URL")
        .default(
            config
                .login_url
                .clone()
                .unwrap_or_else(|| format!("{}/login", backend_url.trim_end_matches('/'))),
        )
        .interact_text()?;

    let session_secret: String = if config.session_secret.is_some() {
        let keep = dialoguer::Confirm::with_theme(&ColorfulTheme::default())
            .with_prompt("Keep the existing session secret?")
            .default(true)
            .interact()?;
        if keep {
            config.session_secret.clone().unwrap_or_default()
        } else {
            prompt_secret()?
        }
    } else {
        prompt_secret()?
    };

    config.backend_url = Some(backend_url);
    config.login_url = Some(login_url);
    config.session_secret = Some(session_secret);
    config.save_at(opts.config_ref())?;

    let path = Config::resolve_path(opts.config_ref())?;
    println!(
        "\n{} Configuration saved to {}",
        "✓".green(),
        path.display().to_string().cyan()
    );
    println!("Run {} to sign in.", "talentscout login".bold());

    Ok(())
}

fn prompt_secret() -> Result<String> {
    let secret = Password::with_theme(&ColorfulTheme::default())
        .with_prompt("Session signing secret")
        .with_confirmation("Confirm secret", "Secrets do not match")
        .interact()?;
    Ok(secret)
}
