//! Render the grouped sidebar for a role.

use anyhow::Result;
use clap::Args;
use colored::*;
use serde::Serialize;
use tabled::Tabled;

use super::{parse_role, role_label, Context};
use crate::output::{self, OutputFormat};
use tiffin_console_core::rbac::{AccessPolicy, MenuItem, Role};

#[derive(Args)]
pub struct MenuArgs {
    /// Role to render the menu for; defaults to the logged-in role
    #[arg(long, value_parser = parse_role)]
    role: Option<Role>,
}

#[derive(Tabled, Serialize)]
struct MenuRow {
    #[tabled(rename = "ID")]
    id: &'static str,
    #[tabled(rename = "Label")]
    label: &'static str,
    #[tabled(rename = "Screen")]
    screen: String,
    #[tabled(rename = "Icon")]
    icon: &'static str,
}

impl From<&MenuItem> for MenuRow {
    fn from(item: &MenuItem) -> Self {
        Self {
            id: item.id,
            label: item.label,
            screen: item.screen.to_string(),
            icon: item.icon,
        }
    }
}

pub async fn execute(args: MenuArgs, ctx: &Context) -> Result<()> {
    let role = ctx.role_or_stored(args.role).await?;
    let sections = AccessPolicy::standard().grouped_menu(role);

    if !matches!(ctx.format, OutputFormat::Table) {
        return output::print_item(&sections, ctx.format);
    }

    output::print_header(&format!("Menu for {}", role_label(role)));
    if sections.is_empty() {
        println!("{}", "No menu items for this role.".dimmed());
        return Ok(());
    }

    for section in &sections {
        match section.group {
            Some(group) => {
                let icon = format!("({})", group.icon());
                println!("{} {}", group.label().bold(), icon.as_str().dimmed());
            }
            None => println!("{}", "General".bold()),
        }
        let rows: Vec<MenuRow> = section.items.iter().copied().map(MenuRow::from).collect();
        output::print_list(&rows, &rows, ctx.format)?;
        println!();
    }
    Ok(())
}
