//! Shared auth routing helpers.
//!
//! SYSTEM CONTEXT
//! ==============
//! Route components should apply identical redirect behavior: dashboard routes
//! bounce anonymous visitors to `/login`, and the login page bounces signed-in
//! students to the dashboard.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;

use crate::session::Session;

/// Whether `path` lies inside the area rooted at `area_root`.
///
/// Matches on whole segments: `/dashboard` and `/dashboard/books` are inside
/// `/dashboard`, `/dashboards` is not.
pub fn is_protected_path(path: &str, area_root: &str) -> bool {
    let root = area_root.trim_end_matches('/');
    match path.strip_prefix(root) {
        Some(rest) => rest.is_empty() || rest.starts_with('/'),
        None => false,
    }
}

/// Anonymous visitor, and the initial fetch has settled.
pub fn should_redirect_unauth(state: &Session) -> bool {
    !state.initial_loading && !state.is_authenticated()
}

/// Signed-in student sitting on a public auth page.
pub fn should_redirect_authed(state: &Session) -> bool {
    state.is_authenticated()
}

/// Redirect to `login_path` whenever loading is done and no student is present.
pub fn install_unauth_redirect<F>(state: ReadSignal<Session>, login_path: String, navigate: F)
where
    F: Fn(&str, NavigateOptions) + Clone + 'static,
{
    Effect::new(move || {
        if should_redirect_unauth(&state.get()) {
            navigate(&login_path, NavigateOptions::default());
        }
    });
}

/// Redirect to `dashboard_path` as soon as a student is signed in.
pub fn install_authed_redirect<F>(state: ReadSignal<Session>, dashboard_path: String, navigate: F)
where
    F: Fn(&str, NavigateOptions) + Clone + 'static,
{
    Effect::new(move || {
        if should_redirect_authed(&state.get()) {
            navigate(&dashboard_path, NavigateOptions::default());
        }
    });
}
