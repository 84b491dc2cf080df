use serde::{Deserialize, Serialize};

/// Whether a user browses the catalog or runs the back office.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UserRole {
    Client,
    Admin,
}

/// Represents an account that can log in.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: String,
    #[serde(rename = "nome")]
    pub name: String,
    pub email: String,
    pub role: UserRole,
}

impl User {
    pub fn is_admin(&self) -> bool {
        self.role == UserRole::Admin
    }
}

/// Lookup of users by exact email.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UserFilter {
    pub email: Option<String>,
}

impl UserFilter {
    pub fn email(email: impl Into<String>) -> Self {
        Self {
            email: Some(email.into()),
        }
    }

    pub fn matches(&self, user: &User) -> bool {
        self.email.as_deref().map_or(true, |email| user.email == email)
    }
}
