//! Session commands: log in as a backend role, log out, show the current role.

use anyhow::Result;
use clap::Subcommand;
use serde::Serialize;

use super::{role_label, Context};
use crate::output::{self, OutputFormat};
use tiffin_console_core::auth::{AuthResponse, AuthUser};
use tiffin_console_core::rbac::{default_screen_for_role, Role, ScreenName};

#[derive(Subcommand)]
pub enum SessionCommands {
    /// Apply a login with the role string the backend returned
    Login {
        /// Raw backend role (e.g. admin, KITCHEN_STAFF)
        role: String,

        /// Auth token to store alongside the role
        #[arg(long)]
        token: Option<String>,

        /// Backend user id, for logging
        #[arg(long)]
        user_id: Option<String>,
    },

    /// Clear the stored session
    Logout,

    /// Show the logged-in role and its landing screen
    Whoami,
}

#[derive(Serialize)]
struct SessionInfo {
    logged_in: bool,
    role: Option<Role>,
    landing_screen: ScreenName,
    session_file: String,
}

pub async fn execute(cmd: SessionCommands, ctx: &Context) -> Result<()> {
    match cmd {
        SessionCommands::Login {
            role,
            token,
            user_id,
        } => login(ctx, role, token, user_id).await,
        SessionCommands::Logout => logout(ctx).await,
        SessionCommands::Whoami => whoami(ctx).await,
    }
}

async fn login(
    ctx: &Context,
    raw_role: String,
    token: Option<String>,
    user_id: Option<String>,
) -> Result<()> {
    let response = AuthResponse {
        token,
        user: AuthUser {
            id: user_id,
            name: None,
            role: raw_role,
        },
    };

    let mut auth = ctx.auth();
    let role = auth.login(&response).await?;
    let landing = default_screen_for_role(Some(role));

    match ctx.format {
        OutputFormat::Table => {
            output::print_success(&format!("Logged in as {}", role));
            output::print_detail("Landing screen", landing.as_str());
            output::print_detail("Session file", &ctx.session_file.display().to_string());
        }
        _ => output::print_item(&info(ctx, Some(role)), ctx.format)?,
    }
    Ok(())
}

async fn logout(ctx: &Context) -> Result<()> {
    let mut auth = ctx.auth();
    auth.restore().await?;
    let previous = auth.role();
    auth.logout().await?;

    match ctx.format {
        OutputFormat::Table => match previous {
            Some(role) => output::print_success(&format!("Logged out ({})", role)),
            None => output::print_warning("No active session"),
        },
        _ => output::print_item(&info(ctx, None), ctx.format)?,
    }
    Ok(())
}

async fn whoami(ctx: &Context) -> Result<()> {
    let mut auth = ctx.auth();
    let role = auth.restore().await?;
    let session = info(ctx, role);

    match ctx.format {
        OutputFormat::Table => {
            output::print_header("Session");
            output::print_detail("Logged in", if session.logged_in { "yes" } else { "no" });
            output::print_detail("Role", &role_label(role));
            output::print_detail("Landing screen", session.landing_screen.as_str());
            output::print_detail("Session file", &session.session_file);
        }
        _ => output::print_item(&session, ctx.format)?,
    }
    Ok(())
}

fn info(ctx: &Context, role: Option<Role>) -> SessionInfo {
    SessionInfo {
        logged_in: role.is_some(),
        role,
        landing_screen: default_screen_for_role(role),
        session_file: ctx.session_file.display().to_string(),
    }
}
