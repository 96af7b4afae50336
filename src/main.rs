use anyhow::{Context, Result};
use clap::Parser;
use std::sync::Arc;
use tingly_landing::app::AppState;
use tingly_landing::cli::{Cli, Commands};
use tingly_landing::clipboard::{SystemClipboard, copy_to_clipboard};
use tingly_landing::config::Config;
use tingly_landing::content::{CopyTarget, LinkTarget, Page};
use tingly_landing::links::open_in_browser;
use tingly_landing::logging::{self, LogTarget};
use tingly_landing::ui::{self, theme::Theme};
use tracing::{error, info};

fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = Config::load()?;
    let page = Page::new(&config.repository_url);

    match cli.command {
        Some(Commands::Show { json }) => {
            let _log_guard = logging::init(&config, LogTarget::Stderr)?;
            handle_show(&page, json)?;
        }
        Some(Commands::Copy { target }) => {
            let _log_guard = logging::init(&config, LogTarget::Stderr)?;
            handle_copy(target)?;
        }
        Some(Commands::Open { target }) => {
            let _log_guard = logging::init(&config, LogTarget::Stderr)?;
            handle_open(&page, target)?;
        }
        None => {
            // No command - launch TUI
            let _log_guard = logging::init(&config, LogTarget::File)?;
            run_page(page, &config)?;
        }
    }

    Ok(())
}

fn run_page(page: Page, config: &Config) -> Result<()> {
    let runtime = tokio::runtime::Runtime::new().context("Failed to start async runtime")?;
    let _enter = runtime.enter();

    let theme = Theme::from_config(config);
    let state = AppState::new(page, theme, Arc::new(SystemClipboard))?;

    let result = ui::run_tui(state);
    if let Err(err) = &result {
        error!(error = %format!("{err:#}"), "terminal UI failed");
    }
    result
}

fn handle_show(page: &Page, json: bool) -> Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(page)?);
    } else {
        print!("{}", page.plain_text());
    }

    Ok(())
}

fn handle_copy(target: CopyTarget) -> Result<()> {
    copy_to_clipboard(target.payload())?;
    info!(control = target.label(), "copied from command line");

    println!("✓ {}: copied to clipboard", target.label());

    Ok(())
}

fn handle_open(page: &Page, target: LinkTarget) -> Result<()> {
    let link = page.link(target);
    open_in_browser(&link.url)?;

    println!("✓ Opened {} ({})", link.label, link.url);

    Ok(())
}
