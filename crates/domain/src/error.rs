// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

/// Errors that can occur during domain validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// A required field was empty (or only whitespace).
    MissingField {
        /// The name of the missing field.
        field: &'static str,
    },
    /// A role string did not name a known role.
    InvalidRole(String),
    /// An attendance status string did not name a known status.
    InvalidAttendanceStatus(String),
    /// A date string could not be parsed as an ISO calendar date.
    InvalidDate {
        /// The offending value.
        value: String,
        /// Why parsing failed.
        reason: String,
    },
    /// A date range whose start is after its end.
    InvalidDateRange {
        /// The start of the range.
        start: String,
        /// The end of the range.
        end: String,
    },
}

impl std::fmt::Display for DomainError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::MissingField { field } => write!(f, "Field '{field}' is required"),
            Self::InvalidRole(role) => write!(f, "Invalid role: {role}"),
            Self::InvalidAttendanceStatus(status) => {
                write!(f, "Invalid attendance status: {status}")
            }
            Self::InvalidDate { value, reason } => {
                write!(f, "Invalid date '{value}': {reason}")
            }
            Self::InvalidDateRange { start, end } => {
                write!(f, "Invalid date range: {start} is after {end}")
            }
        }
    }
}

impl std::error::Error for DomainError {}
