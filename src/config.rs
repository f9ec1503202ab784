use std::env;
use std::path::Path;

// Default configuration constants
pub const DEFAULT_API_BASE_URL: &str = "https://api.softlayer.com/rest/v3";
pub const DEFAULT_USERNAME: &str = "";
pub const DEFAULT_API_KEY: &str = "";

pub fn load_env_file(env_file: Option<&str>) {
    if let Some(path) = env_file {
        dotenvy::from_path(Path::new(path)).ok();
    } else {
        dotenvy::dotenv().ok();
    }
}

pub fn get_api_base_url() -> String {
    sanitize_base_url(&env::var("SL_API_BASE_URL").unwrap_or_else(|_| DEFAULT_API_BASE_URL.to_string()))
}

pub fn get_username() -> String {
    env::var("SL_USERNAME").unwrap_or_else(|_| DEFAULT_USERNAME.to_string())
}

pub fn get_api_key() -> String {
    env::var("SL_API_KEY").unwrap_or_else(|_| DEFAULT_API_KEY.to_string())
}

pub fn sanitize_base_url(raw: &str) -> String {
    let trimmed = raw.trim().trim_end_matches('/');
    if trimmed.is_empty() {
        DEFAULT_API_BASE_URL.to_string()
    } else {
        trimmed.to_string()
    }
}
