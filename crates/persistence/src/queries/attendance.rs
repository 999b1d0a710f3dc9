// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Attendance report queries.
//!
//! Reports join attendance to students so that the class filter and the
//! instructor scope can both be applied on the student side.

use std::str::FromStr;

use attendance_domain::{AttendanceReportRow, AttendanceStatus, Scope, format_date};
use diesel::SqliteConnection;
use diesel::prelude::*;
use diesel::sqlite::Sqlite;
use tracing::debug;

use crate::data_models::AttendanceFilter;
use crate::diesel_schema::{attendance, students};
use crate::error::PersistenceError;

/// Lists attendance rows matching a filter.
///
/// Rows are ordered by date, newest first; rows sharing a date are ordered
/// newest insert first. The date range is inclusive on both ends.
///
/// # Errors
///
/// Returns an error if the query fails or a stored status is unknown.
pub fn list_attendance(
    conn: &mut SqliteConnection,
    filter: &AttendanceFilter,
) -> Result<Vec<AttendanceReportRow>, PersistenceError> {
    let mut query = attendance::table
        .inner_join(students::table)
        .select((
            attendance::date,
            students::name,
            students::roll_number,
            attendance::status,
        ))
        .into_boxed::<Sqlite>();

    if let Some(owner) = filter.scope.instructor_username() {
        query = query.filter(students::instructor_username.eq(owner));
    }
    if let Some(class_name) = filter.class_name.as_deref() {
        query = query.filter(students::class_name.eq(class_name));
    }
    if let Some(range) = filter.date_range {
        query = query.filter(
            attendance::date.between(format_date(range.start), format_date(range.end)),
        );
    }

    let rows: Vec<(String, String, String, String)> = query
        .order((attendance::date.desc(), attendance::id.desc()))
        .load(conn)?;

    debug!("Loaded {} attendance row(s)", rows.len());

    rows.into_iter()
        .map(|(date, student_name, roll_number, status)| {
            Ok(AttendanceReportRow {
                date,
                student_name,
                roll_number,
                status: AttendanceStatus::from_str(&status)?,
            })
        })
        .collect()
}

/// Counts attendance rows within a scope.
///
/// # Errors
///
/// Returns an error if the query fails.
pub fn count_attendance(conn: &mut SqliteConnection, scope: &Scope) -> Result<i64, PersistenceError> {
    let count: i64 = match scope.instructor_username() {
        None => attendance::table.count().get_result(conn)?,
        Some(owner) => attendance::table
            .inner_join(students::table)
            .filter(students::instructor_username.eq(owner))
            .count()
            .get_result(conn)?,
    };
    Ok(count)
}
