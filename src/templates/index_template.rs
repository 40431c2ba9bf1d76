use askama::Template;

use crate::models::CardView;
use crate::store::Editor;

#[derive(Template)]
#[template(path = "index.html")]
pub struct IndexTemplate<'a> {
    pub source_host: String,
    pub notice: String,
    pub has_notice: bool,
    pub cards: &'a [CardView],
    pub show_editor: bool,
    pub editor: EditorView,
}

/// Editor dialog contents, flattened for the template.
#[derive(Debug, Clone, Default)]
pub struct EditorView {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub website: String,
    pub name_error: String,
    pub has_name_error: bool,
    pub email_error: String,
    pub has_email_error: bool,
}

impl EditorView {
    pub fn from_editor(editor: &Editor) -> Self {
        let name_error = editor.errors.name.clone().unwrap_or_default();
        let email_error = editor.errors.email.clone().unwrap_or_default();
        Self {
            id: editor.target_id(),
            name: editor.fields.name.clone(),
            email: editor.fields.email.clone(),
            phone: editor.fields.phone.clone(),
            website: editor.fields.website.clone(),
            has_name_error: !name_error.is_empty(),
            name_error,
            has_email_error: !email_error.is_empty(),
            email_error,
        }
    }
}
