//! Search command implementation

use std::time::Duration;

use colored::Colorize;
use dialoguer::{theme::ColorfulTheme, Select};
use indicatif::{ProgressBar, ProgressStyle};

use crate::cli::args::{GlobalOptions, OutputFormat};
use crate::cli::context::CommandContext;
use crate::client::{BackendClient, Candidate};
use crate::error::Result;
use crate::models::display::{profile_preview, CandidateDisplay};
use crate::output::json::SearchDocument;
use crate::output::{json, table};
use crate::search::{Phase, SearchController, SearchRoute};

/// Run the search command
pub async fn run(
    opts: &GlobalOptions,
    query: Option<String>,
    page: Option<u32>,
    url: Option<String>,
    interactive: bool,
) -> Result<()> {
    let ctx = CommandContext::new(opts.config_ref())?;
    let mut controller = ctx.search_controller()?;

    let route = match url {
        // Restore a shared view verbatim
        Some(ref shared) => SearchRoute::parse(shared),
        None => {
            controller.set_query_text(query.as_deref().unwrap_or_default());
            let mut route = controller.submit()?;
            if let Some(p) = page {
                route.page = p.max(1);
            }
            route
        }
    };

    fetch(&mut controller, &route).await?;
    render(&controller, opts.format)?;

    if controller.state().phase() == Phase::Failed {
        // Message already rendered; fail the invocation
        std::process::exit(1);
    }

    if interactive {
        interactive_loop(&mut controller, opts.format).await?;
    }

    Ok(())
}

/// Navigate with a spinner while the fetch is in flight
async fn fetch(
    controller: &mut SearchController<BackendClient>,
    route: &SearchRoute,
) -> Result<()> {
    let spinner = ProgressBar::new_spinner();
    spinner.set_style(
        ProgressStyle::with_template("{spinner} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner()),
    );
    spinner.set_message("Searching candidates...");
    spinner.enable_steady_tick(Duration::from_millis(100));

    let outcome = controller.navigate(route).await;
    spinner.finish_and_clear();

    outcome?;
    Ok(())
}

/// Render the current view state
fn render(controller: &SearchController<BackendClient>, format: OutputFormat) -> Result<()> {
    let state = controller.state();

    match state.phase() {
        Phase::Idle => {
            println!("Enter a search term to begin.");
            return Ok(());
        }
        // navigate() has completed by the time render runs
        Phase::Loading => return Ok(()),
        Phase::Failed => {
            let message = state.error_message.as_deref().unwrap_or("unknown error");
            eprintln!("{} {}", "✗".red(), message.red());
            return Ok(());
        }
        Phase::Loaded => {}
    }

    if state.results.is_empty() {
        println!("No candidates matched your search.");
        return Ok(());
    }

    match format {
        OutputFormat::Json => {
            let doc = SearchDocument::new(
                &state.query_text,
                state.page_number,
                state.total_pages,
                &state.results,
            );
            println!("{}", json::format_search_json(&doc)?);
        }
        OutputFormat::Table => {
            println!("{}", table::candidate_table(&state.results));
            print_footer(controller);
        }
        OutputFormat::Pretty => {
            for candidate in &state.results {
                print_card(candidate);
            }
            print_footer(controller);
        }
    }

    Ok(())
}

fn print_card(candidate: &Candidate) {
    let display = CandidateDisplay::from(candidate);

    println!("{}", display.name.bold());
    println!("  Email:    {}", display.email);
    println!("  Company:  {}", display.company);
    println!("  Location: {}", display.location);
    println!("  Skills:   {}", display.skills);
    if let Some(ref website) = candidate.website_url {
        println!("  Website:  {}", website.cyan());
    }
    if let Some(ref github) = candidate.github_url {
        println!("  GitHub:   {}", github.cyan());
    }
    if let Some(preview) = profile_preview(candidate) {
        println!("  Profile:  {}", preview.dimmed());
    }
    println!();
}

fn print_footer(controller: &SearchController<BackendClient>) {
    let state = controller.state();
    println!(
        "Page {} of {}",
        state.page_number.to_string().bold(),
        state.total_pages
    );
    if let Some(route) = controller.current_route() {
        println!("Share this view: {}", route.to_query_string().dimmed());
    }
}

/// Prompt-driven paging after the first page is rendered.
///
/// Options mirror the web UI's pagination buttons: previous is withheld on
/// page 1 and next on the last page.
async fn interactive_loop(
    controller: &mut SearchController<BackendClient>,
    format: OutputFormat,
) -> Result<()> {
    loop {
        let mut options: Vec<&str> = Vec::new();
        if controller.has_prev_page() {
            options.push("Previous page");
        }
        if controller.has_next_page() {
            options.push("Next page");
        }
        if options.is_empty() {
            break;
        }
        options.push("Quit");

        let selection = Select::with_theme(&ColorfulTheme::default())
            .items(&options)
            .default(0)
            .interact_opt()?;

        let current = controller.state().page_number;
        let target = match selection.map(|idx| options[idx]) {
            Some("Previous page") => current - 1,
            Some("Next page") => current + 1,
            _ => break,
        };

        // change_page refuses out-of-range targets; the option list already
        // prevents them, so None here just ends the loop
        let Some(route) = controller.change_page(target) else {
            break;
        };

        fetch(controller, &route).await?;
        render(controller, format)?;
    }

    Ok(())
}
