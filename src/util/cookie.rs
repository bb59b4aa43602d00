//! Auth token cookie persistence.
//!
//! SYSTEM CONTEXT
//! ==============
//! The token issued at login outlives the tab in a first-party cookie. Header
//! strings are built by pure functions; only `CookieTokenStore` touches
//! `document.cookie`, and only in the browser.

#[cfg(test)]
#[path = "cookie_test.rs"]
mod cookie_test;

use ::cookie::{Cookie, SameSite};
use time::Duration;

use crate::session::TokenStore;

/// `document.cookie` assignment that sets `name` for `max_age_secs`.
///
/// The value is percent-encoded, so any token survives the round trip.
pub fn set_cookie_string(name: &str, value: &str, max_age_secs: u64) -> String {
    let max_age = Duration::seconds(i64::try_from(max_age_secs).unwrap_or(i64::MAX));
    Cookie::build((name, value))
        .path("/")
        .same_site(SameSite::Lax)
        .max_age(max_age)
        .build()
        .encoded()
        .to_string()
}

/// `document.cookie` assignment that expires `name` immediately.
pub fn delete_cookie_string(name: &str) -> String {
    Cookie::build((name, ""))
        .path("/")
        .same_site(SameSite::Lax)
        .max_age(Duration::ZERO)
        .build()
        .encoded()
        .to_string()
}

/// `TokenStore` writing a first-party cookie.
#[derive(Clone, Debug)]
pub struct CookieTokenStore {
    name: String,
}

impl CookieTokenStore {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }

    #[cfg(feature = "hydrate")]
    fn write(raw: &str) {
        use wasm_bindgen::JsCast as _;

        let Some(doc) = web_sys::window().and_then(|w| w.document()) else {
            return;
        };
        let Ok(html) = doc.dyn_into::<web_sys::HtmlDocument>() else {
            return;
        };
        if let Err(e) = html.set_cookie(raw) {
            leptos::logging::warn!("cookie write failed: {e:?}");
        }
    }

    #[cfg(not(feature = "hydrate"))]
    fn write(raw: &str) {
        let _ = raw;
    }
}

impl TokenStore for CookieTokenStore {
    fn store(&self, token: &str, max_age_secs: u64) {
        Self::write(&set_cookie_string(&self.name, token, max_age_secs));
    }

    fn clear(&self) {
        Self::write(&delete_cookie_string(&self.name));
    }
}
