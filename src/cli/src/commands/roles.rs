//! Role commands: map backend role strings and list the console roles.

use anyhow::Result;
use clap::Subcommand;
use serde::Serialize;
use tabled::Tabled;

use super::Context;
use crate::output::{self, OutputFormat};
use tiffin_console_core::rbac::{
    default_screen_for_role, map_backend_role, menu_items_for_role, Role, RoleMapping, ScreenName,
};

#[derive(Subcommand)]
pub enum RoleCommands {
    /// Map a raw backend role string to a console role
    Map {
        /// Raw role string as returned by the backend
        raw: String,
    },

    /// List console roles with their landing screen and menu size
    List,
}

#[derive(Serialize)]
struct MappingResult {
    raw: String,
    mapped: bool,
    role: Option<Role>,
}

#[derive(Tabled, Serialize)]
struct RoleRow {
    #[tabled(rename = "Role")]
    role: Role,
    #[tabled(rename = "Landing Screen")]
    landing_screen: ScreenName,
    #[tabled(rename = "Menu Items")]
    menu_items: usize,
}

pub async fn execute(cmd: RoleCommands, ctx: &Context) -> Result<()> {
    match cmd {
        RoleCommands::Map { raw } => map(ctx, &raw),
        RoleCommands::List => list(ctx),
    }
}

fn map(ctx: &Context, raw: &str) -> Result<()> {
    let result = match map_backend_role(raw) {
        RoleMapping::Mapped(role) => MappingResult {
            raw: raw.to_string(),
            mapped: true,
            role: Some(role),
        },
        RoleMapping::Unmapped(raw) => MappingResult {
            raw,
            mapped: false,
            role: None,
        },
    };

    match (ctx.format, result.role) {
        (OutputFormat::Table, Some(role)) => {
            output::print_success(&format!("{:?} maps to {}", result.raw, role));
        }
        (OutputFormat::Table, None) => {
            output::print_warning(&format!("{:?} is not a recognized role", result.raw));
        }
        _ => output::print_item(&result, ctx.format)?,
    }
    Ok(())
}

fn list(ctx: &Context) -> Result<()> {
    let rows: Vec<RoleRow> = Role::all()
        .into_iter()
        .map(|role| RoleRow {
            role,
            landing_screen: default_screen_for_role(Some(role)),
            menu_items: menu_items_for_role(Some(role)).len(),
        })
        .collect();

    output::print_list(&rows, &rows, ctx.format)
}
