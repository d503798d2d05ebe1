//! User interface module - terminal output for unattended runs.
//!
//! Diagnostics for operators go through `tracing`; this module prints the
//! human-facing summary of what was computed.

pub mod formatter;

pub use formatter::{
    display_boundary_warning, display_bump_decision, display_bump_groups, display_config,
    display_error, display_release_summary, display_status, display_success, format_bump_groups,
    format_config, format_release_summary,
};
