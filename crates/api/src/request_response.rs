// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! API request and response data transfer objects.

use attendance_domain::Role;
use serde::{Deserialize, Serialize};
use time::Date;

/// Request to register a new administrator account.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegisterAdminRequest {
    pub username: String,
    pub password: String,
    pub confirmation: String,
}

/// Request to change the signed-in user's password.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChangePasswordRequest {
    pub current_password: String,
    pub new_password: String,
    pub new_password_confirmation: String,
}

/// Request to create an instructor.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateInstructorRequest {
    pub name: String,
    /// Natural key; unique across all instructors.
    pub instructor_id: String,
    pub email: Option<String>,
    pub department: Option<String>,
}

/// Response for a successful instructor creation.
///
/// Carries the login generated for the instructor so it can be handed over.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateInstructorResponse {
    /// The store-assigned id of the instructor row.
    pub id: i64,
    /// The login name of the paired account (the instructor's name).
    pub username: String,
    /// The initial password of the paired account.
    pub initial_password: String,
}

/// Request to update an instructor's editable fields.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UpdateInstructorRequest {
    pub name: String,
    pub email: Option<String>,
    pub department: Option<String>,
}

/// Request to create a student.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateStudentRequest {
    pub name: String,
    /// Natural key; unique across all students.
    pub roll_number: String,
    pub email: Option<String>,
    /// Required for instructor sessions.
    pub class_name: Option<String>,
    /// Owner of the student. Ignored for instructor sessions, which always
    /// own the students they create.
    pub instructor_username: Option<String>,
}

/// Request to update a student's editable fields.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UpdateStudentRequest {
    pub name: String,
    pub email: Option<String>,
    pub class_name: Option<String>,
}

/// Filter for attendance reports.
///
/// The date range only applies when both `from` and `to` are given.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportFilter {
    pub class_name: Option<String>,
    pub from: Option<Date>,
    pub to: Option<Date>,
}

/// Record counts shown on the dashboard.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DashboardStats {
    /// The role the counts were computed for.
    pub role: Role,
    /// Students visible to the session.
    pub students: i64,
    /// Total instructors; only reported to administrators.
    pub instructors: Option<i64>,
    /// Admin: all classes. Instructor: distinct classes among own students.
    pub classes: i64,
    /// Attendance rows visible to the session.
    pub attendance_records: i64,
}
