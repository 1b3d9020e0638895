//! # CLI Layer
//!
//! This module is one possible UI client for coursenav; it is not the
//! application itself. It is the only place that knows about terminal I/O,
//! argument parsing and process exit codes.
//!
//! 1. Parse arguments into typed commands via clap
//! 2. Build an `AppContext` (session directory, config, history mode)
//! 3. Dispatch to the matching `NavApi` method
//! 4. Turn the `CmdResult` into terminal output
//!
//! Business logic is tested in the command layer; tests here cover argument
//! handling and output only.

use super::logging::{init_logging, LogConfig};
use super::render::{print_messages, render_config, render_history, render_location};
use super::setup::{Cli, Commands, DayCommand};
use chrono::Utc;
use clap::Parser;
use coursenav::api::{CmdResult, ConfigAction, DayAction, NavApi, NavPaths};
use coursenav::config::NavConfig;
use coursenav::error::{NavError, Result};
use coursenav::history::fs::FileHistory;
use coursenav::history::HistoryMode;
use coursenav::query::Location;
use directories::ProjectDirs;
use std::path::PathBuf;

const HOME_ENV: &str = "COURSENAV_HOME";

struct AppContext {
    api: NavApi<FileHistory>,
    mode: HistoryMode,
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();
    init_logging(&LogConfig::from_verbosity(cli.verbose));

    let mut ctx = init_context(&cli)?;

    match cli.command {
        Some(Commands::Show) | None => handle_show(&ctx),
        Some(Commands::Open { href }) => handle_open(&mut ctx, &href),
        Some(Commands::Set { assignments }) => handle_set(&mut ctx, &assignments),
        Some(Commands::Day { action }) => handle_day(&mut ctx, action),
        Some(Commands::Back) => handle_back(&mut ctx),
        Some(Commands::Forward) => handle_forward(&mut ctx),
        Some(Commands::History) => handle_history(&ctx),
        Some(Commands::Config { key, value }) => handle_config(&ctx, key, value),
    }
}

fn init_context(cli: &Cli) -> Result<AppContext> {
    let home = resolve_home()?;
    let config = NavConfig::load(&home)?;
    let mode = cli.mode_override().unwrap_or(config.history_mode);
    tracing::debug!(home = %home.display(), %mode, "session context");

    let history = FileHistory::open(&home, Location::default(), config.history_limit)?;
    let api = NavApi::new(history, NavPaths { home });
    Ok(AppContext { api, mode })
}

fn resolve_home() -> Result<PathBuf> {
    if let Some(home) = std::env::var_os(HOME_ENV).filter(|v| !v.is_empty()) {
        return Ok(PathBuf::from(home));
    }
    ProjectDirs::from("com", "coursenav", "coursenav")
        .map(|dirs| dirs.data_dir().to_path_buf())
        .ok_or_else(|| {
            NavError::Config(format!(
                "Could not determine data directory; set {}",
                HOME_ENV
            ))
        })
}

fn print_location(result: &CmdResult) {
    if let (Some(location), Some(lesson)) = (&result.location, &result.lesson) {
        print!("{}", render_location(location, lesson));
    }
    print_messages(&result.messages);
}

fn handle_show(ctx: &AppContext) -> Result<()> {
    let result = ctx.api.show()?;
    print_location(&result);
    Ok(())
}

fn handle_open(ctx: &mut AppContext, href: &str) -> Result<()> {
    let result = ctx.api.open(href)?;
    print_location(&result);
    Ok(())
}

fn handle_set(ctx: &mut AppContext, assignments: &[String]) -> Result<()> {
    let result = ctx.api.set_params(ctx.mode, assignments)?;
    print_location(&result);
    Ok(())
}

fn handle_day(ctx: &mut AppContext, command: DayCommand) -> Result<()> {
    let action = match command {
        DayCommand::Next => DayAction::Next,
        DayCommand::Prev => DayAction::Prev,
        DayCommand::Reset => DayAction::Reset,
        DayCommand::Seek { day } => DayAction::Seek(day),
    };
    let result = ctx.api.day(ctx.mode, action)?;
    print_location(&result);
    Ok(())
}

fn handle_back(ctx: &mut AppContext) -> Result<()> {
    let result = ctx.api.back()?;
    print_location(&result);
    Ok(())
}

fn handle_forward(ctx: &mut AppContext) -> Result<()> {
    let result = ctx.api.forward()?;
    print_location(&result);
    Ok(())
}

fn handle_history(ctx: &AppContext) -> Result<()> {
    let result = ctx.api.history()?;
    let active = result.active.unwrap_or_default();
    print!("{}", render_history(&result.entries, active, Utc::now()));
    print_messages(&result.messages);
    Ok(())
}

fn handle_config(ctx: &AppContext, key: Option<String>, value: Option<String>) -> Result<()> {
    let action = match (key, value) {
        (None, _) => ConfigAction::ShowAll,
        (Some(k), None) => ConfigAction::ShowKey(k),
        (Some(k), Some(v)) => ConfigAction::Set(k, v),
    };
    let show_all = matches!(action, ConfigAction::ShowAll);

    let result = ctx.api.config(action)?;
    if show_all {
        if let Some(config) = &result.config {
            print!("{}", render_config(config));
        }
    }
    print_messages(&result.messages);
    Ok(())
}
