//! Test fixtures and data factories
//!
//! All factories create real objects, not mocks.

use talentree_portal::{Role, Session, User};

/// Factory for creating portal users
pub struct UserFactory;

impl UserFactory {
    /// A user with the given role and a unique email
    pub fn with_role(role: Role) -> User {
        let tag = &uuid::Uuid::new_v4().to_string()[..8];
        User::new(format!("{}-{}@talentree.test", role, tag), role)
    }

    pub fn admin() -> User {
        Self::with_role(Role::AdminTalentree).with_name("Admin Talentree")
    }

    /// Company user belonging to "Acme Corp"
    pub fn company() -> User {
        Self::with_role(Role::Company)
            .with_name("Ana Rojas")
            .with_company_name("Acme Corp")
            .with_company_logo("https://cdn.acme.test/logo.png")
    }

    pub fn evaluator() -> User {
        Self::with_role(Role::Evaluator).with_name("Eva Soto")
    }

    pub fn worker() -> User {
        Self::with_role(Role::Worker).with_name("Juan Pérez")
    }

    /// Guest user invited by "Acme Corp"
    pub fn guest() -> User {
        Self::with_role(Role::Guest).with_company_name("Acme Corp")
    }

    /// One user per role, in declaration order
    pub fn one_per_role() -> Vec<User> {
        vec![
            Self::admin(),
            Self::company(),
            Self::evaluator(),
            Self::worker(),
            Self::guest(),
        ]
    }
}

/// Authenticated session for `user`
pub fn session_for(user: User) -> Session {
    Session::authenticated(user)
}

/// Whether `needle` appears in `haystack` in the same relative order
pub fn is_subsequence<T: PartialEq>(needle: &[T], haystack: &[T]) -> bool {
    let mut rest = haystack.iter();
    needle.iter().all(|item| rest.any(|candidate| candidate == item))
}
