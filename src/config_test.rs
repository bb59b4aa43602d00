use super::*;

#[test]
fn default_paths_and_cookie() {
    let config = ClientConfig::default();
    assert_eq!(config.token_cookie, "token");
    assert_eq!(config.token_ttl_days, 7);
    assert_eq!(config.login_path, "/login");
    assert_eq!(config.dashboard_path, "/dashboard");
    assert!(!config.api_base_url.is_empty());
}

#[test]
fn token_max_age_is_seven_days_in_seconds() {
    assert_eq!(ClientConfig::default().token_max_age_secs(), 604_800);
}

#[test]
fn endpoint_joins_without_double_slash() {
    let config = ClientConfig::with_api_base_url("https://api.example.com/v1/");
    assert_eq!(config.endpoint("/students/me"), "https://api.example.com/v1/students/me");
    assert_eq!(config.endpoint("students/login"), "https://api.example.com/v1/students/login");
}

#[test]
fn endpoint_accepts_relative_base() {
    let config = ClientConfig::with_api_base_url("/api");
    assert_eq!(config.endpoint("/students/logout"), "/api/students/logout");
}
