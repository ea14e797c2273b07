//! Tiffin Console CLI - inspect roles, menus, screen access and navigation.
//!
//! Runs the console's access-control core against a local session file, so a
//! role can be logged in once and every later command acts as that role.

mod commands;
mod output;

use anyhow::{Context as _, Result};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

use commands::{access, menu, nav, roles, session, Context};
use output::OutputFormat;
use tiffin_console_core::auth::FileStore;
use tiffin_console_core::config::ConsoleConfig;
use tiffin_console_core::telemetry::init_logging;
use tiffin_console_core::ConsoleError;

/// Tiffin Console - admin console access control and navigation
#[derive(Parser)]
#[command(
    name = "tiffin-console",
    version,
    about = "Tiffin Console - role, menu and navigation inspector",
    long_about = "CLI for the tiffin delivery admin console: log in as a role, list its menu, check screen access and replay navigation.",
    propagate_version = true
)]
pub struct Cli {
    /// Output format
    #[arg(short, long, global = true, default_value = "table")]
    output: OutputFormat,

    /// Configuration file (TOML, YAML or JSON)
    #[arg(short, long, global = true, env = "TIFFIN_CONFIG")]
    config: Option<String>,

    /// Session file holding the logged-in role
    #[arg(long, global = true, env = "TIFFIN_SESSION_FILE")]
    session_file: Option<PathBuf>,

    /// Disable colored output
    #[arg(long, global = true)]
    no_color: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Log in, log out and show the current session
    #[command(subcommand)]
    Session(session::SessionCommands),

    /// Role mapping and role overview
    #[command(subcommand)]
    Roles(roles::RoleCommands),

    /// Show the sidebar menu for a role
    Menu(menu::MenuArgs),

    /// Run the permission guard for a screen
    Access(access::AccessArgs),

    /// Replay a sequence of navigation steps
    Nav(nav::NavArgs),
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    if cli.no_color {
        colored::control::set_override(false);
    }

    let config = match &cli.config {
        Some(path) => ConsoleConfig::from_file(path)
            .with_context(|| format!("Failed to load config from {}", path))?,
        None => ConsoleConfig::load().unwrap_or_else(|e| {
            eprintln!("Warning: Could not load config: {}. Using defaults.", e);
            ConsoleConfig::default()
        }),
    };

    init_logging(&config.logging)?;

    let session_file = cli
        .session_file
        .clone()
        .or_else(|| config.storage.session_file.clone())
        .or_else(|| FileStore::default_path(dirs::home_dir().as_deref()))
        .context("Could not determine session file location; pass --session-file")?;

    let ctx = Context {
        format: cli.output,
        config,
        session_file,
    };

    let result = match cli.command {
        Commands::Session(cmd) => session::execute(cmd, &ctx).await,
        Commands::Roles(cmd) => roles::execute(cmd, &ctx).await,
        Commands::Menu(args) => menu::execute(args, &ctx).await,
        Commands::Access(args) => access::execute(args, &ctx).await,
        Commands::Nav(args) => nav::execute(args, &ctx).await,
    };

    if let Err(e) = result {
        if let Some(console_err) = e.downcast_ref::<ConsoleError>() {
            console_err.log();
        }
        output::print_error(&format!("{:#}", e));
        std::process::exit(1);
    }

    Ok(())
}
