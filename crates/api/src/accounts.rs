// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Account management: admin registration, password and username changes.

use attendance_domain::{Role, validate_username};
use attendance_persistence::Persistence;
use tracing::info;

use crate::auth::Session;
use crate::error::{ApiError, translate_domain_error, translate_persistence_error};
use crate::fields;
use crate::password_policy::PasswordPolicy;
use crate::request_response::{ChangePasswordRequest, RegisterAdminRequest};

/// Registers a new administrator account.
///
/// Returns a session for the new account.
///
/// # Arguments
///
/// * `persistence` - The data store
/// * `request` - The registration request
///
/// # Errors
///
/// Returns an error if:
/// - The username is empty
/// - The password violates the password policy
/// - The username is already taken
pub fn register_admin(
    persistence: &mut Persistence,
    request: &RegisterAdminRequest,
) -> Result<Session, ApiError> {
    validate_username(&request.username).map_err(translate_domain_error)?;
    let username: String = fields::required(&request.username);

    PasswordPolicy::default().validate(&request.password, &request.confirmation, &username)?;

    if persistence
        .username_exists(&username)
        .map_err(translate_persistence_error)?
    {
        return Err(ApiError::ConstraintViolation {
            message: format!("Username '{username}' already exists"),
        });
    }

    persistence
        .create_user(&username, &request.password, Role::Admin)
        .map_err(translate_persistence_error)?;

    info!(username = %username, "Registered administrator");
    Ok(Session::new(username, Role::Admin))
}

/// Changes the signed-in user's password.
///
/// # Errors
///
/// Returns an error if:
/// - The current password is wrong
/// - The new password violates the password policy
/// - The account no longer exists
pub fn change_password(
    persistence: &mut Persistence,
    session: &Session,
    request: &ChangePasswordRequest,
) -> Result<(), ApiError> {
    let verified = persistence
        .verify_password(&session.username, &request.current_password)
        .map_err(translate_persistence_error)?;

    if verified.is_none() {
        return Err(ApiError::AuthenticationFailed {
            reason: String::from("Current password is incorrect"),
        });
    }

    PasswordPolicy::default().validate(
        &request.new_password,
        &request.new_password_confirmation,
        &session.username,
    )?;

    let affected: usize = persistence
        .update_password(&session.username, &request.new_password)
        .map_err(translate_persistence_error)?;

    if affected == 0 {
        return Err(ApiError::ResourceNotFound {
            resource_type: String::from("User"),
            message: format!("User '{}' does not exist", session.username),
        });
    }

    info!(username = %session.username, "Password changed");
    Ok(())
}

/// Changes the signed-in user's username.
///
/// Students owned by the user follow the rename. Returns the updated session.
///
/// # Errors
///
/// Returns an error if:
/// - The new username is empty
/// - The new username is already taken
/// - The account no longer exists
pub fn update_username(
    persistence: &mut Persistence,
    session: &Session,
    new_username: &str,
) -> Result<Session, ApiError> {
    validate_username(new_username).map_err(translate_domain_error)?;
    let new_username: String = fields::required(new_username);

    if new_username == session.username {
        return Ok(session.clone());
    }

    if persistence
        .username_exists(&new_username)
        .map_err(translate_persistence_error)?
    {
        return Err(ApiError::ConstraintViolation {
            message: format!("Username '{new_username}' already exists"),
        });
    }

    let affected: usize = persistence
        .update_username(&session.username, &new_username)
        .map_err(translate_persistence_error)?;

    if affected == 0 {
        return Err(ApiError::ResourceNotFound {
            resource_type: String::from("User"),
            message: format!("User '{}' does not exist", session.username),
        });
    }

    Ok(Session::new(new_username, session.role))
}
