use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use crate::store::Store;

#[derive(Clone)]
pub struct AppState {
    pub store: Store,
    pub users_endpoint: String,
    pub client: reqwest::Client,
    pub custom_css: Option<String>,
    /// Set once the startup fetch has been spawned; a session gets one.
    load_started: Arc<AtomicBool>,
}

impl AppState {
    pub fn new(users_endpoint: String, client: reqwest::Client) -> Self {
        Self {
            store: Store::new(),
            users_endpoint,
            client,
            custom_css: None,
            load_started: Arc::new(AtomicBool::new(false)),
        }
    }

    /// Claims the one load this session is allowed. Returns false if it was already claimed.
    pub fn claim_load(&self) -> bool {
        self.load_started
            .compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .is_ok()
    }
}

pub fn build_http_client() -> Result<reqwest::Client, reqwest::Error> {
    reqwest::Client::builder()
        .user_agent(format!("userdeck/{}", env!("CARGO_PKG_VERSION")))
        .build()
}
