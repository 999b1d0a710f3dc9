// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Class management.
//!
//! Any session may list classes; changes require an administrator.
//! Students and instructors refer to classes by name, and those references
//! are not rewritten when a class is renamed or deleted.

use attendance_domain::{SchoolClass, validate_class_name};
use attendance_persistence::Persistence;

use crate::auth::{AuthorizationService, Session};
use crate::error::{ApiError, translate_domain_error, translate_persistence_error};

/// Creates a class.
///
/// # Errors
///
/// Returns an error if the session is not an administrator, the name is
/// empty, or the name is already taken.
pub fn create_class(
    persistence: &mut Persistence,
    session: &Session,
    class_name: &str,
) -> Result<i64, ApiError> {
    AuthorizationService::require_admin(session, "create_class")?;
    validate_class_name(class_name).map_err(translate_domain_error)?;

    persistence
        .create_class(class_name.trim())
        .map_err(translate_persistence_error)
}

/// Lists all classes ordered by name.
///
/// # Errors
///
/// Returns an error if the store fails.
pub fn list_classes(
    persistence: &mut Persistence,
    _session: &Session,
) -> Result<Vec<SchoolClass>, ApiError> {
    persistence.list_classes().map_err(translate_persistence_error)
}

/// Renames a class. Returns the number of rows affected.
///
/// # Errors
///
/// Returns an error if the session is not an administrator, the new name is
/// empty, or the new name is already taken.
pub fn rename_class(
    persistence: &mut Persistence,
    session: &Session,
    old_name: &str,
    new_name: &str,
) -> Result<usize, ApiError> {
    AuthorizationService::require_admin(session, "rename_class")?;
    validate_class_name(new_name).map_err(translate_domain_error)?;

    persistence
        .rename_class(old_name.trim(), new_name.trim())
        .map_err(translate_persistence_error)
}

/// Deletes a class by name. Returns the number of rows affected.
///
/// # Errors
///
/// Returns an error if the session is not an administrator or the store fails.
pub fn delete_class(
    persistence: &mut Persistence,
    session: &Session,
    class_name: &str,
) -> Result<usize, ApiError> {
    AuthorizationService::require_admin(session, "delete_class")?;
    persistence
        .delete_class(class_name.trim())
        .map_err(translate_persistence_error)
}
