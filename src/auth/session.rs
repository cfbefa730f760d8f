//! Authenticated user and session view
//!
//! The portal does not authenticate anyone itself; the session store hands it
//! "current user or none" and the user's role drives every access decision.

use crate::auth::rbac::Role;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Authenticated portal user
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// User ID
    pub id: Uuid,
    /// Email address
    pub email: String,
    /// Display name
    #[serde(default)]
    pub name: Option<String>,
    /// Portal role
    pub role: Role,
    /// Company the user belongs to (company and guest users)
    #[serde(default)]
    pub company_name: Option<String>,
    /// Company logo URL (company and guest users)
    #[serde(default)]
    pub company_logo: Option<String>,
}

impl User {
    /// Create a new user with a random ID
    pub fn new(email: impl Into<String>, role: Role) -> Self {
        Self {
            id: Uuid::new_v4(),
            email: email.into(),
            name: None,
            role,
            company_name: None,
            company_logo: None,
        }
    }

    /// Set the display name
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Set the company name
    pub fn with_company_name(mut self, company_name: impl Into<String>) -> Self {
        self.company_name = Some(company_name.into());
        self
    }

    /// Set the company logo
    pub fn with_company_logo(mut self, company_logo: impl Into<String>) -> Self {
        self.company_logo = Some(company_logo.into());
        self
    }
}

/// Current session: a user once logged in, nothing otherwise
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    user: Option<User>,
}

impl Session {
    /// Session with no authenticated user
    pub fn anonymous() -> Self {
        Self { user: None }
    }

    /// Session for an authenticated user
    pub fn authenticated(user: User) -> Self {
        Self { user: Some(user) }
    }

    /// Current user, if any
    pub fn current_user(&self) -> Option<&User> {
        self.user.as_ref()
    }

    /// Role of the current user, if any
    pub fn role(&self) -> Option<Role> {
        self.user.as_ref().map(|u| u.role)
    }

    pub fn is_authenticated(&self) -> bool {
        self.user.is_some()
    }

    /// Drop the current user
    pub fn clear(&mut self) {
        self.user = None;
    }
}
