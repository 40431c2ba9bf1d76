use crate::config::{AVATAR_BASE_URL, AVATAR_QUERY};

/// Avatar image for a username. Same username, same picture.
pub fn avatar_url(username: &str) -> String {
    format!("{}/{}.svg?{}", AVATAR_BASE_URL, urlencoding::encode(username), AVATAR_QUERY)
}
