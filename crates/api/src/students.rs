// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Student management.
//!
//! Every operation is scoped by the session: instructors only ever read or
//! change their own students, administrators see all of them.

use attendance_domain::{
    DomainError, Role, Student, require_non_empty, validate_student_fields,
};
use attendance_persistence::{NewStudent, Persistence, StudentChanges, StudentFilter};

use crate::auth::Session;
use crate::error::{ApiError, translate_domain_error, translate_persistence_error};
use crate::fields;
use crate::request_response::{CreateStudentRequest, UpdateStudentRequest};

/// Creates a student. Returns the store-assigned id.
///
/// Instructor sessions always own the students they create and must give
/// a class. Administrator sessions take the owner from the request.
///
/// # Errors
///
/// Returns an error if:
/// - The name or roll number is empty
/// - An instructor session gives no class
/// - The roll number is already taken
pub fn create_student(
    persistence: &mut Persistence,
    session: &Session,
    request: &CreateStudentRequest,
) -> Result<i64, ApiError> {
    validate_student_fields(&request.name, &request.roll_number)
        .map_err(translate_domain_error)?;

    let class_name: Option<String> = fields::optional(request.class_name.as_deref());
    let instructor_username: Option<String> = match session.role {
        Role::Admin => fields::optional(request.instructor_username.as_deref()),
        Role::Instructor => {
            if class_name.is_none() {
                return Err(translate_domain_error(DomainError::MissingField {
                    field: "class_name",
                }));
            }
            Some(session.username.clone())
        }
    };

    let student = NewStudent {
        name: fields::required(&request.name),
        roll_number: fields::required(&request.roll_number),
        email: fields::optional(request.email.as_deref()),
        class_name,
        instructor_username,
    };

    persistence
        .create_student(&student)
        .map_err(translate_persistence_error)
}

/// Lists students visible to the session, ordered by name.
///
/// # Arguments
///
/// * `class_name` - Restrict to one class
///
/// # Errors
///
/// Returns an error if the store fails.
pub fn list_students(
    persistence: &mut Persistence,
    session: &Session,
    class_name: Option<&str>,
) -> Result<Vec<Student>, ApiError> {
    let filter = StudentFilter {
        scope: session.scope(),
        class_name: fields::optional(class_name),
    };
    persistence
        .list_students(&filter)
        .map_err(translate_persistence_error)
}

/// Retrieves a student visible to the session by roll number.
///
/// # Errors
///
/// Returns `ApiError::ResourceNotFound` if the student does not exist or
/// belongs to another instructor.
pub fn get_student(
    persistence: &mut Persistence,
    session: &Session,
    roll_number: &str,
) -> Result<Student, ApiError> {
    persistence
        .get_student_by_roll(roll_number.trim(), &session.scope())
        .map_err(translate_persistence_error)?
        .ok_or_else(|| ApiError::ResourceNotFound {
            resource_type: String::from("Student"),
            message: format!("Student '{roll_number}' does not exist"),
        })
}

/// Updates a student's editable fields by roll number.
///
/// Returns the number of rows affected; a student outside the session's
/// scope counts as absent.
///
/// # Errors
///
/// Returns an error if the name is empty or the store fails.
pub fn update_student(
    persistence: &mut Persistence,
    session: &Session,
    roll_number: &str,
    request: &UpdateStudentRequest,
) -> Result<usize, ApiError> {
    require_non_empty("name", &request.name).map_err(translate_domain_error)?;

    let changes = StudentChanges {
        name: fields::required(&request.name),
        email: fields::optional(request.email.as_deref()),
        class_name: fields::optional(request.class_name.as_deref()),
    };

    persistence
        .update_student(roll_number.trim(), &changes, &session.scope())
        .map_err(translate_persistence_error)
}

/// Deletes a student by roll number, together with its attendance.
///
/// Returns the number of rows affected; a student outside the session's
/// scope counts as absent.
///
/// # Errors
///
/// Returns an error if the store fails.
pub fn delete_student(
    persistence: &mut Persistence,
    session: &Session,
    roll_number: &str,
) -> Result<usize, ApiError> {
    persistence
        .delete_student(roll_number.trim(), &session.scope())
        .map_err(translate_persistence_error)
}

/// Lists the distinct class names of students visible to the session.
///
/// # Errors
///
/// Returns an error if the store fails.
pub fn list_student_classes(
    persistence: &mut Persistence,
    session: &Session,
) -> Result<Vec<String>, ApiError> {
    persistence
        .list_student_class_names(&session.scope())
        .map_err(translate_persistence_error)
}
