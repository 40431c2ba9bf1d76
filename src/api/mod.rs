pub mod client;
pub mod error;

pub use client::{fetch_users, set_silent};
pub use error::ApiError;
