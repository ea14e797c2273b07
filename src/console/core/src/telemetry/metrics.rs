//! Console counters.
//!
//! Recorded through the `metrics` facade. Without an installed recorder these
//! calls are no-ops.

use metrics::{counter, describe_counter};

pub const ACCESS_CHECKS_TOTAL: &str = "console_access_checks_total";
pub const NAVIGATION_TRANSITIONS_TOTAL: &str = "console_navigation_transitions_total";
pub const LOGINS_TOTAL: &str = "console_logins_total";

/// Register metric descriptions with the installed recorder.
pub fn describe() {
    describe_counter!(ACCESS_CHECKS_TOTAL, "Screen access checks by decision");
    describe_counter!(
        NAVIGATION_TRANSITIONS_TOTAL,
        "Navigation stack transitions by kind"
    );
    describe_counter!(LOGINS_TOTAL, "Login attempts by outcome");
    describe_counter!("console_errors_total", "Errors by code and category");
}

pub fn record_access_check(allowed: bool) {
    let decision = if allowed { "allow" } else { "deny" };
    counter!(ACCESS_CHECKS_TOTAL, "decision" => decision).increment(1);
}

/// `kind` is one of `navigate`, `back`, `reset`.
pub fn record_navigation(kind: &'static str) {
    counter!(NAVIGATION_TRANSITIONS_TOTAL, "kind" => kind).increment(1);
}

/// `outcome` is one of `success`, `unmapped_role`, `storage_error`.
pub fn record_login(outcome: &'static str) {
    counter!(LOGINS_TOTAL, "outcome" => outcome).increment(1);
}
