// URL handling utilities
pub mod avatar_url;
pub mod url_parser;

pub use avatar_url::avatar_url;
pub use url_parser::hostname_from_url;
