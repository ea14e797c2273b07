//! Replay navigation steps against a fresh session.

use anyhow::Result;
use clap::Args;
use serde::Serialize;
use std::str::FromStr;
use tabled::Tabled;

use super::{parse_role, role_label, Context};
use crate::output::{self, OutputFormat};
use tiffin_console_core::navigation::{BackAction, NavigationSession};
use tiffin_console_core::rbac::{can_access_screen, Role, ScreenName};

#[derive(Args)]
pub struct NavArgs {
    /// Role to navigate as; defaults to the logged-in role
    #[arg(long, value_parser = parse_role)]
    role: Option<Role>,

    /// Steps to apply in order: a screen name or `back`
    #[arg(required = true, value_parser = parse_step)]
    steps: Vec<Step>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Step {
    Back,
    Open(ScreenName),
}

fn parse_step(raw: &str) -> std::result::Result<Step, String> {
    if raw.eq_ignore_ascii_case("back") {
        return Ok(Step::Back);
    }
    ScreenName::from_str(raw)
        .map(Step::Open)
        .map_err(|e| e.user_message().to_string())
}

#[derive(Tabled, Serialize)]
struct StepRow {
    #[tabled(rename = "#")]
    index: usize,
    #[tabled(rename = "Step")]
    step: String,
    #[tabled(rename = "Current")]
    current: ScreenName,
    #[tabled(rename = "Depth")]
    depth: usize,
    #[tabled(rename = "Note")]
    note: String,
}

#[derive(Serialize)]
struct NavReport {
    role: Option<Role>,
    steps: Vec<StepRow>,
    stack: Vec<ScreenName>,
}

pub async fn execute(args: NavArgs, ctx: &Context) -> Result<()> {
    let role = ctx.role_or_stored(args.role).await?;
    let mut nav = NavigationSession::new(role, &ctx.config.navigation);

    let mut rows = Vec::with_capacity(args.steps.len());
    for (i, step) in args.steps.iter().enumerate() {
        let (label, note) = match *step {
            Step::Back => match nav.handle_back_button() {
                BackAction::Handled => ("back".to_string(), String::new()),
                BackAction::Unhandled => ("back".to_string(), "at root".to_string()),
            },
            Step::Open(screen) => {
                let note = if can_access_screen(role, screen) {
                    String::new()
                } else {
                    "guard will deny".to_string()
                };
                nav.navigate(screen);
                (screen.to_string(), note)
            }
        };
        rows.push(StepRow {
            index: i + 1,
            step: label,
            current: nav.current(),
            depth: nav.depth(),
            note,
        });
    }

    let report = NavReport {
        role,
        stack: nav.state().stack().to_vec(),
        steps: rows,
    };

    if matches!(ctx.format, OutputFormat::Table) {
        output::print_header(&format!("Navigation as {}", role_label(role)));
    }
    output::print_list(&report.steps, &report, ctx.format)?;
    if matches!(ctx.format, OutputFormat::Table) {
        let stack: Vec<&str> = report.stack.iter().map(ScreenName::as_str).collect();
        output::print_detail("Stack", &stack.join(" > "));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_step() {
        assert_eq!(parse_step("back"), Ok(Step::Back));
        assert_eq!(parse_step("BACK"), Ok(Step::Back));
        assert_eq!(parse_step("Zones"), Ok(Step::Open(ScreenName::Zones)));
        assert!(parse_step("Nowhere").is_err());
    }
}
