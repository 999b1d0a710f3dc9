// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Attendance taking and reporting.

use attendance_domain::{
    AttendanceEntry, AttendanceReportRow, AttendanceStatus, DomainError, format_date, today,
};
use attendance_persistence::{AttendanceFilter, DateRange, Persistence, PersistenceError};
use time::Date;

use crate::auth::Session;
use crate::error::{ApiError, translate_domain_error, translate_persistence_error};
use crate::fields;
use crate::request_response::ReportFilter;

fn translate_mark_error(err: PersistenceError) -> ApiError {
    match err {
        PersistenceError::NotFound(message) => ApiError::ResourceNotFound {
            resource_type: String::from("Student"),
            message,
        },
        other => translate_persistence_error(other),
    }
}

/// Records attendance for today's local date.
///
/// See [`mark_attendance_on`].
///
/// # Errors
///
/// Returns an error if a student is not visible to the session or the
/// store fails.
pub fn mark_attendance(
    persistence: &mut Persistence,
    session: &Session,
    entries: &[AttendanceEntry],
) -> Result<usize, ApiError> {
    mark_attendance_on(persistence, session, entries, today())
}

/// Records one attendance row per entry, all on `date`.
///
/// The batch is written in one transaction. Instructors may only mark
/// their own students; if any entry names a student outside the session's
/// scope nothing is written. Returns the number of rows inserted.
///
/// # Errors
///
/// Returns `ApiError::ResourceNotFound` if a student is unknown or not
/// visible to the session, or an error if the store fails.
pub fn mark_attendance_on(
    persistence: &mut Persistence,
    session: &Session,
    entries: &[AttendanceEntry],
    date: Date,
) -> Result<usize, ApiError> {
    persistence
        .mark_attendance(entries, date, &session.scope())
        .map_err(translate_mark_error)
}

/// Records attendance for one student addressed by roll number.
///
/// # Errors
///
/// Returns `ApiError::ResourceNotFound` if the student is unknown or not
/// visible to the session.
pub fn mark_attendance_by_roll(
    persistence: &mut Persistence,
    session: &Session,
    roll_number: &str,
    status: AttendanceStatus,
    date: Date,
) -> Result<(), ApiError> {
    let scope = session.scope();
    let student = persistence
        .get_student_by_roll(roll_number.trim(), &scope)
        .map_err(translate_persistence_error)?
        .ok_or_else(|| ApiError::ResourceNotFound {
            resource_type: String::from("Student"),
            message: format!("Student '{roll_number}' does not exist"),
        })?;

    persistence
        .mark_attendance(&[AttendanceEntry::new(student.id, status)], date, &scope)
        .map_err(translate_mark_error)?;
    Ok(())
}

/// Returns attendance rows visible to the session, newest date first.
///
/// The date range applies (inclusively) only when both ends are given.
///
/// # Errors
///
/// Returns an error if the range is inverted or the store fails.
pub fn attendance_report(
    persistence: &mut Persistence,
    session: &Session,
    filter: &ReportFilter,
) -> Result<Vec<AttendanceReportRow>, ApiError> {
    let date_range: Option<DateRange> = match (filter.from, filter.to) {
        (Some(start), Some(end)) => {
            if start > end {
                return Err(translate_domain_error(DomainError::InvalidDateRange {
                    start: format_date(start),
                    end: format_date(end),
                }));
            }
            Some(DateRange { start, end })
        }
        _ => None,
    };

    let filter = AttendanceFilter {
        scope: session.scope(),
        class_name: fields::optional(filter.class_name.as_deref()),
        date_range,
    };

    persistence
        .list_attendance(&filter)
        .map_err(translate_persistence_error)
}
