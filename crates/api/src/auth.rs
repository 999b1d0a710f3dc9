// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Authentication and authorization types and services.

use attendance_domain::{Role, Scope};
use attendance_persistence::Persistence;
use tracing::{info, warn};

use crate::error::{ApiError, AuthError, translate_persistence_error};

/// The reason reported for every failed login.
///
/// Unknown usernames and wrong passwords are indistinguishable to the caller.
pub const LOGIN_FAILED_REASON: &str = "no match";

/// A signed-in user.
///
/// The role is resolved once at login; every later operation dispatches on it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    /// The login name of the signed-in user.
    pub username: String,
    /// The role of the signed-in user.
    pub role: Role,
}

impl Session {
    /// Creates a new session.
    ///
    /// # Arguments
    ///
    /// * `username` - The login name of the signed-in user
    /// * `role` - The role of the signed-in user
    #[must_use]
    pub const fn new(username: String, role: Role) -> Self {
        Self { username, role }
    }

    /// Returns the row-ownership scope for student and attendance operations.
    ///
    /// Administrators are unscoped; instructors only see their own students.
    #[must_use]
    pub fn scope(&self) -> Scope {
        match self.role {
            Role::Admin => Scope::All,
            Role::Instructor => Scope::Instructor(self.username.clone()),
        }
    }

    /// Returns `true` for administrator sessions.
    #[must_use]
    pub const fn is_admin(&self) -> bool {
        matches!(self.role, Role::Admin)
    }
}

/// Authorization service for enforcing role-based access control.
pub struct AuthorizationService;

impl AuthorizationService {
    /// Checks that the session may perform an administrator-only action.
    ///
    /// # Arguments
    ///
    /// * `session` - The signed-in user
    /// * `action` - The action being attempted (for error reporting)
    ///
    /// # Errors
    ///
    /// Returns an error if the session does not have the Admin role.
    pub fn require_admin(session: &Session, action: &str) -> Result<(), AuthError> {
        match session.role {
            Role::Admin => Ok(()),
            Role::Instructor => {
                warn!(username = %session.username, action, "Denied administrator action");
                Err(AuthError::Unauthorized {
                    action: action.to_string(),
                    required_role: Role::Admin.to_string(),
                })
            }
        }
    }
}

/// Authentication service.
///
/// Owns the data store for its whole lifetime; dropping the service closes
/// the connection.
#[derive(Debug)]
pub struct AuthService {
    persistence: Persistence,
}

impl AuthService {
    /// Creates an authentication service over an opened store.
    #[must_use]
    pub const fn new(persistence: Persistence) -> Self {
        Self { persistence }
    }

    /// Checks a username and password pair.
    ///
    /// The username must match exactly. Returns the user's role on success
    /// and `None` when the user is unknown or the password is wrong; the two
    /// cases are not distinguished.
    ///
    /// # Errors
    ///
    /// Returns an error only when the store itself fails.
    pub fn login(&mut self, username: &str, password: &str) -> Result<Option<Role>, ApiError> {
        let role: Option<Role> = self
            .persistence
            .verify_password(username, password)
            .map_err(translate_persistence_error)?;

        match role {
            Some(role) => info!(username, %role, "Login succeeded"),
            None => warn!(username, "Login failed"),
        }
        Ok(role)
    }

    /// Checks a username and password pair and opens a session.
    ///
    /// # Errors
    ///
    /// Returns `ApiError::AuthenticationFailed` with the same reason for an
    /// unknown user and a wrong password, or an error if the store fails.
    pub fn authenticate(&mut self, username: &str, password: &str) -> Result<Session, ApiError> {
        self.login(username, password)?
            .map(|role| Session::new(username.to_string(), role))
            .ok_or_else(|| {
                AuthError::AuthenticationFailed {
                    reason: LOGIN_FAILED_REASON.to_string(),
                }
                .into()
            })
    }

    /// Returns the data store for record-manager calls.
    pub const fn persistence_mut(&mut self) -> &mut Persistence {
        &mut self.persistence
    }

    /// Consumes the service and returns its data store.
    #[must_use]
    pub fn into_persistence(self) -> Persistence {
        self.persistence
    }
}
