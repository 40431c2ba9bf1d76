use tokio::task::JoinHandle;

use crate::api::fetch_users;
use crate::models::AppState;
use crate::store::Action;

/// Run the fetch and hand its outcome to the store.
pub async fn load_users(state: &AppState) {
    match fetch_users(&state.client, &state.users_endpoint).await {
        Ok(users) => {
            tracing::info!(count = users.len(), endpoint = %state.users_endpoint, "Loaded users");
            state.store.dispatch(Action::Loaded(users));
        }
        Err(e) => {
            tracing::error!(%e, endpoint = %state.users_endpoint, "Failed to load users");
            state.store.dispatch(Action::LoadFailed(e.to_string()));
        }
    }
}

/// Start the session's only load in the background.
/// Returns `None` if a load was already started for this state.
pub fn spawn_initial_load(state: AppState) -> Option<JoinHandle<()>> {
    if !state.claim_load() {
        tracing::warn!("Initial load already started; not fetching again");
        return None;
    }
    Some(tokio::spawn(async move { load_users(&state).await }))
}
