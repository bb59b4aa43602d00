//! Reactive application state shared through Leptos context.
//!
//! SYSTEM CONTEXT
//! ==============
//! `session` binds the session store to the component tree, `notifications`
//! holds on-screen toasts, and `ui` holds local shell chrome.

pub mod notifications;
pub mod session;
pub mod ui;
