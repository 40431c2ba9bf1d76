use crate::models::{EditForm, UserRecord};

use super::action::{Action, Effect};
use super::state::{Editor, ProfilesState};
use super::validation::validate;

/// Apply one action to the state. This is the only place state changes.
pub fn update(state: &mut ProfilesState, action: Action) -> Effect {
    match action {
        Action::Loaded(users) => {
            if !state.loading {
                tracing::debug!("ignoring late load result");
                return Effect::None;
            }
            state.users = users;
            state.loading = false;
        }
        Action::LoadFailed(reason) => {
            if !state.loading {
                tracing::debug!(%reason, "ignoring late load failure");
                return Effect::None;
            }
            state.loading = false;
        }
        Action::Edit(id) => {
            let opened = state.find(id).map(Editor::open);
            match opened {
                Some(editor) => state.editor = Some(editor),
                None => tracing::debug!(id, "edit requested for unknown user"),
            }
        }
        Action::Save { id, form } => save(state, id, form),
        Action::Cancel => state.editor = None,
        Action::Delete(id) => {
            if !remove_user(&mut state.users, id) {
                tracing::debug!(id, "delete requested for unknown user");
            }
        }
        Action::Like(id) => return Effect::Notify(format!("You liked user ID: {}", id)),
    }
    Effect::None
}

fn save(state: &mut ProfilesState, id: i64, form: EditForm) {
    let Some(editor) = state.editor.as_mut() else {
        tracing::debug!(id, "save with no open editor");
        return;
    };
    if editor.target_id() != id {
        tracing::warn!(id, open = editor.target_id(), "stale save for a user whose editor is no longer open; ignoring it");
        return;
    }
    if let Err(errors) = validate(&form) {
        editor.fields = form;
        editor.errors = errors;
        return;
    }
    if !merge_edit(&mut state.users, id, &form) {
        tracing::warn!(id, "saved edit targets a user that is no longer listed; dropping it");
    }
    state.editor = None;
}

/// Removes the user with `id`. Order of the rest is kept.
pub fn remove_user(users: &mut Vec<UserRecord>, id: i64) -> bool {
    let before = users.len();
    users.retain(|u| u.id != id);
    users.len() != before
}

/// Writes the editable fields onto the user with `id`, if it is still there.
pub fn merge_edit(users: &mut [UserRecord], id: i64, form: &EditForm) -> bool {
    match users.iter_mut().find(|u| u.id == id) {
        Some(user) => {
            form.apply_to(user);
            true
        }
        None => false,
    }
}
