use slcat::config;
use std::env;

#[test]
fn test_sanitize_base_url_removes_trailing_slash() {
    assert_eq!(
        config::sanitize_base_url("https://api.softlayer.com/rest/v3/"),
        "https://api.softlayer.com/rest/v3"
    );
}

#[test]
fn test_sanitize_base_url_no_trailing_slash() {
    assert_eq!(
        config::sanitize_base_url("https://api.softlayer.com/rest/v3"),
        "https://api.softlayer.com/rest/v3"
    );
}

#[test]
fn test_sanitize_base_url_with_whitespace() {
    assert_eq!(
        config::sanitize_base_url("  https://api.softlayer.com/rest/v3/  "),
        "https://api.softlayer.com/rest/v3"
    );
}

#[test]
fn test_sanitize_base_url_empty_string_uses_default() {
    assert_eq!(config::sanitize_base_url(""), config::DEFAULT_API_BASE_URL);
}

#[test]
fn test_get_api_base_url_with_trailing_slash() {
    env::set_var("SL_API_BASE_URL", "https://sandbox.softlayer.com/rest/v3/");

    let result = config::get_api_base_url();

    assert_eq!(result, "https://sandbox.softlayer.com/rest/v3");

    // Clean up
    env::remove_var("SL_API_BASE_URL");
}
