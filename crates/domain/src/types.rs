// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::DomainError;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// The role attached to a user account.
///
/// The role is resolved once at login and decides which operation set
/// the caller may invoke.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Role {
    /// Administrators manage instructors, students and classes and may
    /// read every attendance record.
    Admin,
    /// Instructors manage and take attendance for their own students.
    Instructor,
}

impl Role {
    /// Returns the string stored in the `users.role` column.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Admin => "Admin",
            Self::Instructor => "Instructor",
        }
    }
}

impl FromStr for Role {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Admin" => Ok(Self::Admin),
            "Instructor" => Ok(Self::Instructor),
            _ => Err(DomainError::InvalidRole(s.to_string())),
        }
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Attendance status recorded for a student on a given day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AttendanceStatus {
    Present,
    Absent,
}

impl AttendanceStatus {
    /// Returns the string stored in the `attendance.status` column.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Present => "Present",
            Self::Absent => "Absent",
        }
    }
}

impl FromStr for AttendanceStatus {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Present" => Ok(Self::Present),
            "Absent" => Ok(Self::Absent),
            _ => Err(DomainError::InvalidAttendanceStatus(s.to_string())),
        }
    }
}

impl std::fmt::Display for AttendanceStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Row-ownership scope applied to student and attendance queries.
///
/// `All` is unscoped (administrators). `Instructor` restricts every read
/// and write to rows whose `instructor_username` matches.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Scope {
    All,
    Instructor(String),
}

impl Scope {
    /// Returns the owning instructor's username, if this scope is restricted.
    #[must_use]
    pub fn instructor_username(&self) -> Option<&str> {
        match self {
            Self::All => None,
            Self::Instructor(username) => Some(username.as_str()),
        }
    }
}

/// A student record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Student {
    /// Surrogate key assigned by the store.
    pub id: i64,
    pub name: String,
    /// Natural key; unique across all students.
    pub roll_number: String,
    pub email: Option<String>,
    /// Name of the class the student belongs to.
    pub class_name: Option<String>,
    /// Username of the owning instructor.
    pub instructor_username: Option<String>,
}

/// An instructor record.
///
/// `department` doubles as the instructor's assigned class name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Instructor {
    pub id: i64,
    pub name: String,
    /// Natural key; unique across all instructors.
    pub instructor_id: String,
    pub email: Option<String>,
    pub department: Option<String>,
}

/// A class, addressed by its unique name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SchoolClass {
    pub id: i64,
    pub class_name: String,
}

/// A single attendance mark to be recorded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttendanceEntry {
    pub student_id: i64,
    pub status: AttendanceStatus,
}

impl AttendanceEntry {
    #[must_use]
    pub const fn new(student_id: i64, status: AttendanceStatus) -> Self {
        Self { student_id, status }
    }
}

/// One line of an attendance report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttendanceReportRow {
    /// ISO calendar date (`YYYY-MM-DD`).
    pub date: String,
    pub student_name: String,
    pub roll_number: String,
    pub status: AttendanceStatus,
}
