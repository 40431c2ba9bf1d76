use crate::models::{EditForm, UserRecord};

/// Every way the state can be asked to change.
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    /// The startup fetch succeeded.
    Loaded(Vec<UserRecord>),
    /// The startup fetch failed; carries the reason for the log.
    LoadFailed(String),
    Edit(i64),
    /// Submit the editor for the record `id`.
    Save { id: i64, form: EditForm },
    Cancel,
    Delete(i64),
    Like(i64),
}

impl Action {
    pub fn name(&self) -> &'static str {
        match self {
            Action::Loaded(_) => "loaded",
            Action::LoadFailed(_) => "load_failed",
            Action::Edit(_) => "edit",
            Action::Save { .. } => "save",
            Action::Cancel => "cancel",
            Action::Delete(_) => "delete",
            Action::Like(_) => "like",
        }
    }
}

/// What the caller should do after an action was applied.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    None,
    /// Show a blocking notification with this text.
    Notify(String),
}
