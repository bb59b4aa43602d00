//! Client configuration resolved at build time.
//!
//! SYSTEM CONTEXT
//! ==============
//! The frontend is compiled to WASM, so there is no process environment at
//! runtime. The API base URL is baked in from `STUDENT_API_URL` when the crate
//! is built; everything else has fixed defaults.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

pub const DEFAULT_API_BASE_URL: &str = "http://localhost:5000/api";
pub const DEFAULT_TOKEN_COOKIE: &str = "token";
pub const DEFAULT_TOKEN_TTL_DAYS: u32 = 7;
pub const LOGIN_PATH: &str = "/login";
pub const DASHBOARD_PATH: &str = "/dashboard";

const SECS_PER_DAY: u64 = 86_400;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    /// Base URL every student API path is appended to.
    pub api_base_url: String,
    /// Name of the cookie holding the auth token.
    pub token_cookie: String,
    /// Lifetime of the auth token cookie.
    pub token_ttl_days: u32,
    /// Where unauthenticated visitors and logged-out students are sent.
    pub login_path: String,
    /// Root of the protected area; also the post-login landing route.
    pub dashboard_path: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            api_base_url: option_env!("STUDENT_API_URL")
                .filter(|v| !v.trim().is_empty())
                .unwrap_or(DEFAULT_API_BASE_URL)
                .to_owned(),
            token_cookie: DEFAULT_TOKEN_COOKIE.to_owned(),
            token_ttl_days: DEFAULT_TOKEN_TTL_DAYS,
            login_path: LOGIN_PATH.to_owned(),
            dashboard_path: DASHBOARD_PATH.to_owned(),
        }
    }
}

impl ClientConfig {
    /// Config pointing at an explicit API base URL.
    pub fn with_api_base_url(api_base_url: impl Into<String>) -> Self {
        Self { api_base_url: api_base_url.into(), ..Self::default() }
    }

    /// Token cookie lifetime in seconds, for the `max-age` attribute.
    pub fn token_max_age_secs(&self) -> u64 {
        u64::from(self.token_ttl_days) * SECS_PER_DAY
    }

    /// Absolute URL for an API path such as `/students/me`.
    pub fn endpoint(&self, path: &str) -> String {
        format!(
            "{}/{}",
            self.api_base_url.trim_end_matches('/'),
            path.trim_start_matches('/')
        )
    }
}
