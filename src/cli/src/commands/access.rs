//! Run the permission guard for one screen.

use anyhow::{bail, Result};
use clap::Args;
use colored::*;
use serde::Serialize;

use super::{parse_role, role_label, Context};
use crate::output::{self, OutputFormat};
use tiffin_console_core::rbac::{
    resolve_role, AccessDenied, AccessPolicy, GuardView, PermissionGuard, Role, RoleState,
    ScreenName,
};

#[derive(Args)]
pub struct AccessArgs {
    /// Screen to open (e.g. Zones, MyKitchen)
    screen: ScreenName,

    /// Role to check; defaults to the logged-in role
    #[arg(long, value_parser = parse_role)]
    role: Option<Role>,

    /// Required roles; when omitted the screen's registry entry decides
    #[arg(long, value_parser = parse_role, num_args = 1..)]
    required: Vec<Role>,
}

#[derive(Serialize)]
struct AccessReport {
    screen: ScreenName,
    role: Option<Role>,
    required: Vec<Role>,
    granted: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    denied: Option<AccessDenied>,
}

pub async fn execute(args: AccessArgs, ctx: &Context) -> Result<()> {
    let state = match args.role {
        Some(role) => RoleState::Resolved(Some(role)),
        None => resolve_role(&ctx.store()).await,
    };

    // Explicit required roles switch the guard to a plain membership check.
    let guard: PermissionGuard<ScreenName> = if args.required.is_empty() {
        PermissionGuard::new(AccessPolicy::standard().required_roles(args.screen))
            .for_screen(args.screen)
    } else {
        PermissionGuard::new(args.required)
    };
    let required = guard.required().to_vec();

    let role = match state {
        RoleState::Resolved(role) => role,
        RoleState::Loading => None,
    };

    let report = match guard.render(state, args.screen) {
        GuardView::Content(_) => AccessReport {
            screen: args.screen,
            role,
            required,
            granted: true,
            denied: None,
        },
        GuardView::AccessDenied(denied) => AccessReport {
            screen: args.screen,
            role,
            required,
            granted: false,
            denied: Some(denied),
        },
        GuardView::Pending | GuardView::Fallback(_) => bail!("role could not be resolved"),
    };

    match ctx.format {
        OutputFormat::Table => match &report.denied {
            None => output::print_success(&format!(
                "{} may open {}",
                role_label(report.role),
                report.screen
            )),
            Some(denied) => {
                println!("{}", "Access Denied".red().bold());
                println!("You do not have permission to view this screen.");
                println!("{}", denied.role_line());
                println!("{}", denied.required_line());
            }
        },
        _ => output::print_item(&report, ctx.format)?,
    }
    Ok(())
}
