use axum::{
    extract::{Form, Path, State},
    response::Response,
};

use crate::models::{AppState, CardView, SaveForm};
use crate::store::{Action, Effect, ProfilesState};
use crate::templates::{EditorView, IndexTemplate, LoadingTemplate};

use super::helpers::{back_home, render_template, source_host};

pub async fn index_get(State(state): State<AppState>) -> Response {
    render_screen(&state, &state.store.snapshot(), None)
}

pub async fn edit_post(State(state): State<AppState>, Path(id): Path<i64>) -> Response {
    state.store.dispatch(Action::Edit(id));
    back_home()
}

pub async fn delete_post(State(state): State<AppState>, Path(id): Path<i64>) -> Response {
    state.store.dispatch(Action::Delete(id));
    back_home()
}

pub async fn like_post(State(state): State<AppState>, Path(id): Path<i64>) -> Response {
    match state.store.dispatch(Action::Like(id)) {
        Effect::Notify(message) => render_screen(&state, &state.store.snapshot(), Some(message)),
        Effect::None => back_home(),
    }
}

pub async fn save_post(State(state): State<AppState>, Form(form): Form<SaveForm>) -> Response {
    let (id, form) = form.into_parts();
    state.store.dispatch(Action::Save { id, form });
    back_home()
}

pub async fn cancel_post(State(state): State<AppState>) -> Response {
    state.store.dispatch(Action::Cancel);
    back_home()
}

fn render_screen(state: &AppState, snapshot: &ProfilesState, notice: Option<String>) -> Response {
    let source_host = source_host(state);
    if snapshot.loading {
        return render_template(LoadingTemplate { source_host });
    }
    let cards: Vec<CardView> = snapshot.users.iter().map(CardView::from_record).collect();
    let editor = snapshot.editor.as_ref().map(EditorView::from_editor);
    let notice = notice.unwrap_or_default();
    render_template(IndexTemplate {
        source_host,
        has_notice: !notice.is_empty(),
        notice,
        cards: &cards,
        show_editor: editor.is_some(),
        editor: editor.unwrap_or_default(),
    })
}
