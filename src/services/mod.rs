pub mod loader;

pub use loader::{load_users, spawn_initial_load};
