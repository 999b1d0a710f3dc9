// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use attendance_domain::{Role, Scope};
use serde::{Deserialize, Serialize};
use time::Date;

/// A stored user account.
///
/// `password_hash` is the bcrypt digest; it never leaves the persistence
/// and auth layers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserData {
    pub id: i64,
    pub username: String,
    pub password_hash: String,
    pub role: Role,
}

/// Fields for a new student row.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewStudent {
    pub name: String,
    pub roll_number: String,
    pub email: Option<String>,
    pub class_name: Option<String>,
    pub instructor_username: Option<String>,
}

/// Editable student fields.
///
/// Every field is written; `None` clears the column.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StudentChanges {
    pub name: String,
    pub email: Option<String>,
    pub class_name: Option<String>,
}

/// Fields for a new instructor row.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewInstructor {
    pub name: String,
    pub instructor_id: String,
    pub email: Option<String>,
    pub department: Option<String>,
}

/// Editable instructor fields.
///
/// Every field is written; `None` clears the column.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct InstructorChanges {
    pub name: String,
    pub email: Option<String>,
    pub department: Option<String>,
}

/// Filter for student listings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StudentFilter {
    pub scope: Scope,
    /// Restrict to one class.
    pub class_name: Option<String>,
}

impl StudentFilter {
    /// Matches every student visible within `scope`.
    #[must_use]
    pub const fn scoped(scope: Scope) -> Self {
        Self {
            scope,
            class_name: None,
        }
    }
}

/// An inclusive calendar date range.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateRange {
    pub start: Date,
    pub end: Date,
}

/// Filter for attendance reports.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AttendanceFilter {
    pub scope: Scope,
    /// Restrict to students of one class.
    pub class_name: Option<String>,
    /// Restrict to dates within this inclusive range.
    pub date_range: Option<DateRange>,
}

impl AttendanceFilter {
    /// Matches every attendance row visible within `scope`.
    #[must_use]
    pub const fn scoped(scope: Scope) -> Self {
        Self {
            scope,
            class_name: None,
            date_range: None,
        }
    }
}
