//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render dashboard chrome and form inputs, reading session state
//! through `use_session` and shell chrome from local signals.

pub mod auth_input;
pub mod dashboard_layout;
pub mod require_auth;
pub mod toaster;
