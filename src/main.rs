//! talentscout CLI - recruiter companion for the HLG candidate search platform

use clap::Parser;

mod auth;
mod cli;
mod client;
mod config;
mod error;
mod models;
mod output;
mod search;
mod session;

use cli::{Cli, Commands, GlobalOptions};
use error::{AuthError, Error, Result};

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    let mut logger = env_logger::Builder::from_default_env();
    if cli.debug {
        logger.filter_level(log::LevelFilter::Debug);
    }
    logger.init();

    if let Err(err) = run(cli).await {
        report_error(&err);
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> Result<()> {
    let opts = GlobalOptions::from_cli(&cli);

    match cli.command {
        Commands::Init => cli::init::run(&opts),
        Commands::Login { username, password } => cli::login::run(&opts, username, password).await,
        Commands::Logout => cli::logout::run(&opts),
        Commands::Status => cli::status::run(&opts),
        Commands::Search {
            query,
            page,
            url,
            interactive,
        } => cli::search::run(&opts, query, page, url, interactive).await,
        Commands::Version => {
            println!("talentscout version {}", env!("CARGO_PKG_VERSION"));
            Ok(())
        }
    }
}

/// Print an error for the user.
///
/// Credential rejections and missing-input errors are shown verbatim; other
/// auth failures get a generic line with the detail kept at debug level, so
/// backend internals never reach the user by accident.
fn report_error(err: &Error) {
    match err {
        Error::Auth(AuthError::InvalidCredentials) | Error::Auth(AuthError::MissingCredentials) => {
            eprintln!("Error: {}", err);
        }
        Error::Auth(detail) => {
            log::debug!("Sign-in failure: {}", detail);
            eprintln!("Error: Sign-in failed. Check your network and configuration, then retry.");
        }
        _ => eprintln!("Error: {}", err),
    }
}
