use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// One user as served by the data source.
///
/// Only the fields the screen reads are typed; anything else the source sends
/// lands in `extra` and is carried along untouched.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserRecord {
    pub id: i64,
    pub name: String,
    pub username: String,
    pub email: String,
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub website: String,
    pub address: Address,
    pub company: Company,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Address {
    pub suite: String,
    pub street: String,
    pub city: String,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Company {
    pub name: String,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Address {
    pub fn composed(&self) -> String {
        format!("{}, {}, {}", self.suite, self.street, self.city)
    }
}
