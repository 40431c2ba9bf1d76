//! Single-screen user directory: fetches a list of user records once, shows
//! them as cards, and lets the operator edit, delete and like them in memory.

pub mod api;
pub mod config;
pub mod handlers;
pub mod models;
pub mod routes;
pub mod services;
pub mod store;
pub mod templates;
pub mod utils;
