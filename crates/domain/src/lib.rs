// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

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

mod dates;
mod error;
mod types;
mod validation;

#[cfg(test)]
mod tests;

pub use dates::{format_date, parse_date, today};
pub use error::DomainError;
pub use types::{
    AttendanceEntry, AttendanceReportRow, AttendanceStatus, Instructor, Role, SchoolClass,
    Scope, Student,
};
pub use validation::{
    require_non_empty, validate_class_name, validate_instructor_fields, validate_student_fields,
    validate_username,
};
