//! Logout command implementation

use colored::Colorize;

use crate::cli::args::GlobalOptions;
use crate::cli::context::CommandContext;
use crate::error::Result;

/// Run the logout command.
///
/// Works even when the login endpoint is not configured; dropping a session
/// needs no network.
pub fn run(opts: &GlobalOptions) -> Result<()> {
    let ctx = CommandContext::new(opts.config_ref())?;
    let session = ctx.session();
    let was_signed_in = session.current_identity().is_some();

    session.clear();

    if was_signed_in {
        println!("{} Signed out.", "✓".green());
    } else {
        println!("No active session.");
    }
    Ok(())
}
