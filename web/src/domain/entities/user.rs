//! User and session
//!
//! The signed-in user travels as an explicit `Session` value instead of
//! ambient browser storage.

use serde::{Deserialize, Serialize};

/// Account role
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum UserType {
    Employee,
    Admin,
}

impl std::fmt::Display for UserType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            UserType::Employee => write!(f, "Employee"),
            UserType::Admin => write!(f, "Admin"),
        }
    }
}

/// The `user` blob stored client-side after login
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    #[serde(rename = "type")]
    pub user_type: UserType,
    #[serde(default)]
    pub email: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
}

/// Who is using the app, plus the backend token if any
#[derive(Debug, Clone, PartialEq)]
pub struct Session {
    pub user: User,
    pub jwt: Option<String>,
}

impl Session {
    pub fn new(user: User, jwt: Option<String>) -> Self {
        Self { user, jwt }
    }

    pub fn employee(email: &str) -> Self {
        Self::new(
            User {
                user_type: UserType::Employee,
                email: email.to_string(),
                status: Some("connected".to_string()),
            },
            None,
        )
    }

    pub fn admin(email: &str) -> Self {
        Self::new(
            User {
                user_type: UserType::Admin,
                email: email.to_string(),
                status: Some("connected".to_string()),
            },
            None,
        )
    }

    pub fn email(&self) -> &str {
        &self.user.email
    }

    pub fn is_employee(&self) -> bool {
        self.user.user_type == UserType::Employee
    }

    /// Parse the JSON `user` blob
    pub fn from_user_json(json: &str, jwt: Option<String>) -> Result<Self, serde_json::Error> {
        let user: User = serde_json::from_str(json)?;
        Ok(Self::new(user, jwt))
    }
}
