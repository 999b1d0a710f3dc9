// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Instructor management. Every operation requires an administrator session.

use attendance_domain::{Instructor, require_non_empty, validate_class_name, validate_instructor_fields};
use attendance_persistence::{InstructorChanges, NewInstructor, Persistence};

use crate::auth::{AuthorizationService, Session};
use crate::error::{ApiError, translate_domain_error, translate_persistence_error};
use crate::fields;
use crate::request_response::{
    CreateInstructorRequest, CreateInstructorResponse, UpdateInstructorRequest,
};

/// Initial password of the login account created with each instructor.
pub const DEFAULT_INSTRUCTOR_PASSWORD: &str = "12345";

/// Creates an instructor and a paired login account.
///
/// The account's username is the instructor's name and its password is
/// [`DEFAULT_INSTRUCTOR_PASSWORD`]. Both rows are written together or not
/// at all.
///
/// # Errors
///
/// Returns an error if:
/// - The session is not an administrator
/// - The name or instructor id is empty
/// - The instructor id or username is already taken
pub fn create_instructor(
    persistence: &mut Persistence,
    session: &Session,
    request: &CreateInstructorRequest,
) -> Result<CreateInstructorResponse, ApiError> {
    AuthorizationService::require_admin(session, "create_instructor")?;
    validate_instructor_fields(&request.name, &request.instructor_id)
        .map_err(translate_domain_error)?;

    let instructor = NewInstructor {
        name: fields::required(&request.name),
        instructor_id: fields::required(&request.instructor_id),
        email: fields::optional(request.email.as_deref()),
        department: fields::optional(request.department.as_deref()),
    };

    let id: i64 = persistence
        .create_instructor(&instructor, DEFAULT_INSTRUCTOR_PASSWORD)
        .map_err(translate_persistence_error)?;

    Ok(CreateInstructorResponse {
        id,
        username: instructor.name,
        initial_password: DEFAULT_INSTRUCTOR_PASSWORD.to_string(),
    })
}

/// Lists all instructors ordered by name.
///
/// # Errors
///
/// Returns an error if the session is not an administrator or the store fails.
pub fn list_instructors(
    persistence: &mut Persistence,
    session: &Session,
) -> Result<Vec<Instructor>, ApiError> {
    AuthorizationService::require_admin(session, "list_instructors")?;
    persistence
        .list_instructors()
        .map_err(translate_persistence_error)
}

/// Retrieves an instructor by instructor id.
///
/// # Errors
///
/// Returns `ApiError::ResourceNotFound` if no such instructor exists.
pub fn get_instructor(
    persistence: &mut Persistence,
    session: &Session,
    instructor_id: &str,
) -> Result<Instructor, ApiError> {
    AuthorizationService::require_admin(session, "get_instructor")?;
    persistence
        .get_instructor(instructor_id.trim())
        .map_err(translate_persistence_error)?
        .ok_or_else(|| ApiError::ResourceNotFound {
            resource_type: String::from("Instructor"),
            message: format!("Instructor '{instructor_id}' does not exist"),
        })
}

/// Updates an instructor's editable fields by instructor id.
///
/// The paired login account keeps its username. Returns the number of rows
/// affected (zero for an unknown id).
///
/// # Errors
///
/// Returns an error if the session is not an administrator, the name is
/// empty, or the store fails.
pub fn update_instructor(
    persistence: &mut Persistence,
    session: &Session,
    instructor_id: &str,
    request: &UpdateInstructorRequest,
) -> Result<usize, ApiError> {
    AuthorizationService::require_admin(session, "update_instructor")?;
    require_non_empty("name", &request.name).map_err(translate_domain_error)?;

    let changes = InstructorChanges {
        name: fields::required(&request.name),
        email: fields::optional(request.email.as_deref()),
        department: fields::optional(request.department.as_deref()),
    };

    persistence
        .update_instructor(instructor_id.trim(), &changes)
        .map_err(translate_persistence_error)
}

/// Deletes an instructor by instructor id.
///
/// The paired login account is kept. Returns the number of rows affected.
///
/// # Errors
///
/// Returns an error if the session is not an administrator or the store fails.
pub fn delete_instructor(
    persistence: &mut Persistence,
    session: &Session,
    instructor_id: &str,
) -> Result<usize, ApiError> {
    AuthorizationService::require_admin(session, "delete_instructor")?;
    persistence
        .delete_instructor(instructor_id.trim())
        .map_err(translate_persistence_error)
}

/// Assigns a class to the instructor with the given name.
///
/// The class name is stored in the instructor's `department`.
///
/// # Errors
///
/// Returns `ApiError::ResourceNotFound` if no instructor has that name.
pub fn assign_class(
    persistence: &mut Persistence,
    session: &Session,
    instructor_name: &str,
    class_name: &str,
) -> Result<(), ApiError> {
    AuthorizationService::require_admin(session, "assign_class")?;
    require_non_empty("instructor_name", instructor_name).map_err(translate_domain_error)?;
    validate_class_name(class_name).map_err(translate_domain_error)?;

    let affected: usize = persistence
        .assign_class_to_instructor(instructor_name.trim(), class_name.trim())
        .map_err(translate_persistence_error)?;

    if affected == 0 {
        return Err(ApiError::ResourceNotFound {
            resource_type: String::from("Instructor"),
            message: format!("Instructor '{instructor_name}' does not exist"),
        });
    }
    Ok(())
}
