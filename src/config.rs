use std::env;
use std::path::Path;

// Default configuration constants
pub const DEFAULT_HOST: &str = "127.0.0.1";
pub const DEFAULT_PORT: u16 = 8080;
pub const DEFAULT_USERS_ENDPOINT: &str = "https://jsonplaceholder.typicode.com/users";
pub const AVATAR_BASE_URL: &str = "https://avatars.dicebear.com/v2/avataaars";
pub const AVATAR_QUERY: &str = "options[mood][]=happy";

pub fn load_env_file(env_file: Option<&str>) {
    if let Some(path) = env_file {
        dotenvy::from_path(Path::new(path)).ok();
    } else {
        dotenvy::dotenv().ok();
    }
}

/// Endpoint the loader reads the user list from. `USERS_ENDPOINT` wins when set.
pub fn get_users_endpoint() -> String {
    sanitize_endpoint(&env::var("USERS_ENDPOINT").unwrap_or_else(|_| DEFAULT_USERS_ENDPOINT.to_string()))
}

pub fn sanitize_endpoint(raw: &str) -> String {
    let trimmed = raw.trim().trim_end_matches('/');
    if trimmed.is_empty() {
        DEFAULT_USERS_ENDPOINT.to_string()
    } else {
        trimmed.to_string()
    }
}
