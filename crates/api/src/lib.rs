// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Authentication and record managers for the attendance tracker.
//!
//! A caller signs in through [`AuthService`], receives a [`Session`], and
//! passes the store handle plus the session to the record-manager
//! functions. The session's role decides what each call may see and do:
//! administrators manage instructors and classes and see every student,
//! instructors only see and change their own students.
//!
//! Every failure is reported as an [`ApiError`].

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all,
    clippy::suspicious,
    clippy::complexity,
    clippy::perf,
    clippy::unwrap_used,
    clippy::expect_used
)]
#![allow(clippy::multiple_crate_versions)]

mod accounts;
mod attendance;
mod auth;
mod classes;
mod dashboard;
mod error;
mod fields;
mod instructors;
mod password_policy;
mod request_response;
mod students;

#[cfg(test)]
mod tests;

pub use accounts::{change_password, register_admin, update_username};
pub use attendance::{
    attendance_report, mark_attendance, mark_attendance_by_roll, mark_attendance_on,
};
pub use auth::{AuthService, AuthorizationService, LOGIN_FAILED_REASON, Session};
pub use classes::{create_class, delete_class, list_classes, rename_class};
pub use dashboard::dashboard_stats;
pub use error::{ApiError, AuthError, translate_domain_error, translate_persistence_error};
pub use instructors::{
    DEFAULT_INSTRUCTOR_PASSWORD, assign_class, create_instructor, delete_instructor,
    get_instructor, list_instructors, update_instructor,
};
pub use password_policy::{PasswordPolicy, PasswordPolicyError};
pub use request_response::{
    ChangePasswordRequest, CreateInstructorRequest, CreateInstructorResponse,
    CreateStudentRequest, DashboardStats, RegisterAdminRequest, ReportFilter,
    UpdateInstructorRequest, UpdateStudentRequest,
};
pub use students::{
    create_student, delete_student, get_student, list_student_classes, list_students,
    update_student,
};
