// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::DomainError;

/// Validates that a required field is present.
///
/// Whitespace-only values count as empty.
///
/// # Errors
///
/// Returns `DomainError::MissingField` if the value is empty.
pub fn require_non_empty(field: &'static str, value: &str) -> Result<(), DomainError> {
    if value.trim().is_empty() {
        return Err(DomainError::MissingField { field });
    }
    Ok(())
}

/// Validates the required fields of a student record.
///
/// # Errors
///
/// Returns an error if:
/// - The name is empty
/// - The roll number is empty
pub fn validate_student_fields(name: &str, roll_number: &str) -> Result<(), DomainError> {
    require_non_empty("name", name)?;
    require_non_empty("roll_number", roll_number)?;
    Ok(())
}

/// Validates the required fields of an instructor record.
///
/// # Errors
///
/// Returns an error if:
/// - The name is empty
/// - The instructor id is empty
pub fn validate_instructor_fields(name: &str, instructor_id: &str) -> Result<(), DomainError> {
    require_non_empty("name", name)?;
    require_non_empty("instructor_id", instructor_id)?;
    Ok(())
}

/// Validates a class name.
///
/// # Errors
///
/// Returns an error if the class name is empty.
pub fn validate_class_name(class_name: &str) -> Result<(), DomainError> {
    require_non_empty("class_name", class_name)
}

/// Validates a login username.
///
/// # Errors
///
/// Returns an error if the username is empty.
pub fn validate_username(username: &str) -> Result<(), DomainError> {
    require_non_empty("username", username)
}
