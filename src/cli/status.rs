//! Status command implementation

use colored::Colorize;

use crate::cli::args::GlobalOptions;
use crate::config::Config;
use crate::error::Result;
use crate::session::{SessionStore, TokenCodec};

/// Run the status command to display configuration and session state
pub fn run(opts: &GlobalOptions) -> Result<()> {
    println!("{}\n", "talentscout Status".bold());

    let config_path = Config::resolve_path(opts.config_ref())?;
    println!("Config file: {}", config_path.display().to_string().cyan());
    if !config_path.exists() {
        println!("  (file not present; environment variables may still apply)");
    }
    println!();

    let config = Config::load_at(opts.config_ref())?;

    match config.backend_url {
        Some(ref url) => println!("{} Backend URL: {}", "✓".green(), url),
        None => {
            println!("{} Backend URL not configured", "✗".red());
            println!("  → Run 'talentscout init' to configure");
        }
    }

    match config.login_url {
        Some(ref url) => println!("{} Login endpoint: {}", "✓".green(), url),
        None => {
            println!("{} Login endpoint not configured", "✗".red());
            println!("  → Run 'talentscout init' to configure");
        }
    }

    let Some(ref secret) = config.session_secret else {
        println!("{} Session secret not configured", "✗".red());
        println!("  → Run 'talentscout init' to configure");
        return Ok(());
    };
    println!("{} Session secret configured", "✓".green());

    // Session state
    let codec = TokenCodec::new(secret);
    let session_path = Config::session_path(opts.config_ref())?;
    let session_path_existed = session_path.exists();
    let store = SessionStore::open(session_path, &codec);

    match store.current_token() {
        Some(token) => {
            let remaining = token.expires_at.signed_duration_since(chrono::Utc::now());
            let hours = remaining.num_hours();
            let mins = remaining.num_minutes() % 60;
            println!(
                "{} Signed in as {} (session expires in {}h {}m)",
                "✓".green(),
                token.identity.display_name.bold(),
                hours,
                mins
            );
        }
        // An expired or tampered persisted session is dropped on open
        None if session_path_existed => {
            println!("{} Session expired", "⚠".yellow());
            println!("  → Run 'talentscout login' to sign in again");
        }
        None => {
            println!("{} Not signed in", "✗".red());
            println!("  → Run 'talentscout login' to sign in");
        }
    }

    Ok(())
}
