use crate::models::UserRecord;
use crate::utils::avatar_url;

/// Flattened, display-ready form of a [`UserRecord`].
#[derive(Debug, Clone)]
pub struct CardView {
    pub id: i64,
    pub name: String,
    pub username: String,
    pub email: String,
    pub phone: String,
    pub website: String,
    pub company: String,
    pub address: String,
    pub avatar_url: String,
}

impl CardView {
    pub fn from_record(user: &UserRecord) -> Self {
        Self {
            id: user.id,
            name: user.name.clone(),
            username: user.username.clone(),
            email: user.email.clone(),
            phone: user.phone.clone(),
            website: user.website.clone(),
            company: user.company.name.clone(),
            address: user.address.composed(),
            avatar_url: avatar_url(&user.username),
        }
    }
}
