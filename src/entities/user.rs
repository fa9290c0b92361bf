use serde::{Deserialize, Serialize};

/// A registered level author.
///
/// Passwords are stored as opaque strings; there is no authentication layer
/// in front of this API, the field only exists so seeded demo profiles
/// round-trip.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: i32,
    pub username: String,
    pub password: String,
    pub display_name: Option<String>,
    pub avatar_url: Option<String>,
}

/// Payload for creating a user; the store assigns the id.
#[derive(Clone, Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewUser {
    pub username: String,
    pub password: String,
    #[serde(default)]
    pub display_name: Option<String>,
    #[serde(default)]
    pub avatar_url: Option<String>,
}
