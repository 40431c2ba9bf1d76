/// Behaviour of the state container, driven purely through actions
use serde_json::json;
use userdeck::models::{EditForm, UserRecord};
use userdeck::store::{update, Action, Effect, ProfilesState, Store};

fn user(id: i64, name: &str, email: &str, username: &str) -> UserRecord {
    serde_json::from_value(json!({
        "id": id,
        "name": name,
        "username": username,
        "email": email,
        "phone": "1-770-736-8031 x56442",
        "website": "hildegard.org",
        "address": {
            "suite": "Apt. 556",
            "street": "Kulas Light",
            "city": "Gwenborough",
            "zipcode": "92998-3874",
            "geo": {"lat": "-37.3159", "lng": "81.1496"}
        },
        "company": {"name": "Romaguera-Crona", "catchPhrase": "Multi-layered client-server neural-net"}
    }))
    .unwrap()
}

fn loaded(users: Vec<UserRecord>) -> ProfilesState {
    let mut state = ProfilesState::default();
    update(&mut state, Action::Loaded(users));
    state
}

fn three_users() -> Vec<UserRecord> {
    vec![
        user(1, "Leanne Graham", "Sincere@april.biz", "Bret"),
        user(2, "Ervin Howell", "Shanna@melissa.tv", "Antonette"),
        user(3, "Clementine Bauch", "Nathan@yesenia.net", "Samantha"),
    ]
}

fn form(name: &str, email: &str, phone: &str, website: &str) -> EditForm {
    EditForm {
        name: name.into(),
        email: email.into(),
        phone: phone.into(),
        website: website.into(),
    }
}

fn save(id: i64, name: &str, email: &str, phone: &str, website: &str) -> Action {
    Action::Save {
        id,
        form: form(name, email, phone, website),
    }
}

fn ids(state: &ProfilesState) -> Vec<i64> {
    state.users.iter().map(|u| u.id).collect()
}

#[test]
fn test_initial_state_is_loading_and_empty() {
    let state = ProfilesState::default();
    assert!(state.loading);
    assert!(state.users.is_empty());
    assert!(!state.is_editor_open());
}

#[test]
fn test_load_keeps_response_order() {
    let state = loaded(three_users());
    assert!(!state.loading);
    assert_eq!(ids(&state), vec![1, 2, 3]);
}

#[test]
fn test_load_failure_clears_loading_and_leaves_list_empty() {
    let mut state = ProfilesState::default();
    update(&mut state, Action::LoadFailed("connection refused".into()));
    assert!(!state.loading);
    assert!(state.users.is_empty());
}

#[test]
fn test_late_load_result_is_ignored() {
    let mut state = loaded(three_users());
    update(&mut state, Action::Delete(2));
    update(&mut state, Action::Loaded(three_users()));
    assert_eq!(ids(&state), vec![1, 3]);

    let mut failed = ProfilesState::default();
    update(&mut failed, Action::LoadFailed("timeout".into()));
    update(&mut failed, Action::Loaded(three_users()));
    assert!(failed.users.is_empty());
}

#[test]
fn test_delete_removes_only_target_and_keeps_order() {
    let mut state = loaded(three_users());
    let before = state.users.clone();
    update(&mut state, Action::Delete(2));
    assert_eq!(ids(&state), vec![1, 3]);
    assert_eq!(state.users[0], before[0]);
    assert_eq!(state.users[1], before[2]);
}

#[test]
fn test_delete_from_two_records_leaves_the_other() {
    let mut state = loaded(three_users().into_iter().take(2).collect());
    update(&mut state, Action::Delete(1));
    assert_eq!(ids(&state), vec![2]);
}

#[test]
fn test_delete_unknown_id_is_noop() {
    let mut state = loaded(three_users());
    let before = state.clone();
    update(&mut state, Action::Delete(42));
    assert_eq!(state, before);
}

#[test]
fn test_edit_opens_editor_prefilled() {
    let mut state = loaded(three_users());
    update(&mut state, Action::Edit(2));
    let editor = state.editor.as_ref().unwrap();
    assert_eq!(editor.target_id(), 2);
    assert_eq!(editor.fields, form("Ervin Howell", "Shanna@melissa.tv", "1-770-736-8031 x56442", "hildegard.org"));
    assert!(editor.errors.is_empty());
}

#[test]
fn test_edit_unknown_id_keeps_editor_closed() {
    let mut state = loaded(three_users());
    update(&mut state, Action::Edit(99));
    assert!(!state.is_editor_open());
}

#[test]
fn test_edit_replaces_open_buffer() {
    let mut state = loaded(three_users());
    update(&mut state, Action::Edit(1));
    update(&mut state, Action::Edit(3));
    assert_eq!(state.editor.as_ref().unwrap().target_id(), 3);
}

#[test]
fn test_save_changes_only_editable_fields() {
    let mut state = loaded(three_users());
    let before = state.users.clone();
    update(&mut state, Action::Edit(1));
    update(&mut state, save(1, "Leanne G.", "leanne@example.org", "555-0100", "leanne.dev"));

    assert!(!state.is_editor_open());
    let saved = &state.users[0];
    assert_eq!(saved.name, "Leanne G.");
    assert_eq!(saved.email, "leanne@example.org");
    assert_eq!(saved.phone, "555-0100");
    assert_eq!(saved.website, "leanne.dev");
    assert_eq!(saved.id, before[0].id);
    assert_eq!(saved.username, before[0].username);
    assert_eq!(saved.address, before[0].address);
    assert_eq!(saved.company, before[0].company);
    assert_eq!(saved.extra, before[0].extra);
    assert_eq!(&state.users[1..], &before[1..]);
}

#[test]
fn test_save_with_empty_name_keeps_editor_open() {
    let mut state = loaded(three_users());
    update(&mut state, Action::Edit(1));
    update(&mut state, save(1, "", "Sincere@april.biz", "", ""));

    assert_eq!(state.users[0].name, "Leanne Graham");
    let editor = state.editor.as_ref().unwrap();
    assert_eq!(editor.errors.name.as_deref(), Some("'Name' is required"));
    assert!(editor.errors.email.is_none());
    // The rejected values stay in the editor for correction.
    assert_eq!(editor.fields.name, "");
}

#[test]
fn test_save_with_empty_email_does_not_mutate() {
    let mut state = loaded(three_users());
    let before = state.users.clone();
    update(&mut state, Action::Edit(2));
    update(&mut state, save(2, "Ervin", "", "", ""));
    assert_eq!(state.users, before);
    assert!(state.editor.as_ref().unwrap().errors.email.is_some());
}

#[test]
fn test_failed_save_can_be_corrected() {
    let mut state = loaded(three_users());
    update(&mut state, Action::Edit(1));
    update(&mut state, save(1, "", "", "", ""));
    update(&mut state, save(1, "Leanne", "Sincere@april.biz", "", ""));
    assert!(!state.is_editor_open());
    assert_eq!(state.users[0].name, "Leanne");
}

#[test]
fn test_cancel_discards_buffer() {
    let mut state = loaded(three_users());
    let before = state.users.clone();
    update(&mut state, Action::Edit(1));
    update(&mut state, Action::Cancel);
    assert!(!state.is_editor_open());
    assert_eq!(state.users, before);
}

#[test]
fn test_save_after_target_deleted_is_noop_and_closes() {
    let mut state = loaded(three_users());
    update(&mut state, Action::Edit(2));
    update(&mut state, Action::Delete(2));
    let before = state.users.clone();
    update(&mut state, save(2, "Ghost", "ghost@example.org", "", ""));
    assert_eq!(state.users, before);
    assert!(!state.is_editor_open());
}

#[test]
fn test_save_for_other_record_than_open_editor_is_ignored() {
    let mut state = loaded(three_users().into_iter().take(2).collect());
    update(&mut state, Action::Edit(1));
    update(&mut state, Action::Edit(2));
    let before = state.clone();
    // A page still showing user 1's editor submits after user 2's editor was opened.
    update(&mut state, save(1, "Leanne Hart", "leanne@example.org", "", ""));
    assert_eq!(state, before);
    assert_eq!(state.users[1].name, "Ervin Howell");
    assert_eq!(state.editor.as_ref().unwrap().target_id(), 2);
}

#[test]
fn test_save_for_other_record_skips_validation() {
    let mut state = loaded(three_users());
    update(&mut state, Action::Edit(3));
    update(&mut state, save(1, "", "", "", ""));
    assert!(state.editor.as_ref().unwrap().errors.is_empty());
}

#[test]
fn test_save_without_editor_is_noop() {
    let mut state = loaded(three_users());
    let before = state.clone();
    update(&mut state, save(1, "X", "x@example.org", "", ""));
    assert_eq!(state, before);
}

#[test]
fn test_like_notifies_without_changing_state() {
    let mut state = loaded(three_users());
    update(&mut state, Action::Edit(3));
    let before = state.clone();
    let effect = update(&mut state, Action::Like(3));
    assert_eq!(effect, Effect::Notify("You liked user ID: 3".into()));
    assert_eq!(state, before);
}

#[test]
fn test_store_dispatch_is_shared_between_clones() {
    let store = Store::new();
    let other = store.clone();
    store.dispatch(Action::Loaded(three_users()));
    other.dispatch(Action::Delete(1));
    let snapshot = store.snapshot();
    assert!(!snapshot.loading);
    assert_eq!(ids(&snapshot), vec![2, 3]);
}
