use crate::models::{EditForm, FieldErrors, UserRecord};

/// Everything the screen shows, owned in one place.
#[derive(Debug, Clone, PartialEq)]
pub struct ProfilesState {
    pub users: Vec<UserRecord>,
    pub loading: bool,
    /// `Some` while the editor is open.
    pub editor: Option<Editor>,
}

impl Default for ProfilesState {
    fn default() -> Self {
        Self {
            users: Vec::new(),
            loading: true,
            editor: None,
        }
    }
}

impl ProfilesState {
    pub fn is_editor_open(&self) -> bool {
        self.editor.is_some()
    }

    pub fn find(&self, id: i64) -> Option<&UserRecord> {
        self.users.iter().find(|u| u.id == id)
    }
}

/// Edit buffer plus what the editor currently displays.
#[derive(Debug, Clone, PartialEq)]
pub struct Editor {
    /// Copy of the record taken when the editor opened.
    pub buffer: UserRecord,
    pub fields: EditForm,
    pub errors: FieldErrors,
}

impl Editor {
    pub fn open(user: &UserRecord) -> Self {
        Self {
            buffer: user.clone(),
            fields: EditForm::from_record(user),
            errors: FieldErrors::default(),
        }
    }

    pub fn target_id(&self) -> i64 {
        self.buffer.id
    }
}
