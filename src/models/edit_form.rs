use serde::Deserialize;

use crate::models::UserRecord;

/// The four values the editor exposes.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EditForm {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub website: String,
}

impl EditForm {
    pub fn from_record(user: &UserRecord) -> Self {
        Self {
            name: user.name.clone(),
            email: user.email.clone(),
            phone: user.phone.clone(),
            website: user.website.clone(),
        }
    }

    /// Overwrite the editable fields of `user`; everything else is left alone.
    pub fn apply_to(&self, user: &mut UserRecord) {
        user.name.clone_from(&self.name);
        user.email.clone_from(&self.email);
        user.phone.clone_from(&self.phone);
        user.website.clone_from(&self.website);
    }
}

/// Body of the editor's save request. `id` pins the save to the record the page was showing.
#[derive(Debug, Clone, Deserialize)]
pub struct SaveForm {
    pub id: i64,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub website: String,
}

impl SaveForm {
    pub fn into_parts(self) -> (i64, EditForm) {
        let fields = EditForm {
            name: self.name,
            email: self.email,
            phone: self.phone,
            website: self.website,
        };
        (self.id, fields)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldErrors {
    pub name: Option<String>,
    pub email: Option<String>,
}

impl FieldErrors {
    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.email.is_none()
    }
}
