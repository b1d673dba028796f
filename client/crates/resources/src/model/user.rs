//! User model (administration endpoints)

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    #[serde(rename = "userID")]
    pub user_id: i64,
    pub name: String,
    pub email: String,
    /// Role code as the API stores it
    #[serde(default)]
    pub role: String,
    #[serde(rename = "contactNumber", default)]
    pub contact_number: Option<String>,
}

impl User {
    pub fn is_manager(&self) -> bool {
        self.role.eq_ignore_ascii_case("manager")
    }
}

/// Body of `PUT /User/{id}`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UserUpdate {
    pub name: String,
    pub email: String,
    pub contact_number: String,
    pub role: String,
}

/// Body of `POST /User/assign-manager`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ManagerAssignment {
    pub hotel_id: i64,
    pub manager_id: i64,
}
