// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use attendance_domain::{AttendanceEntry, Scope, format_date};
use diesel::SqliteConnection;
use diesel::prelude::*;
use time::Date;
use tracing::{info, warn};

use crate::diesel_schema::attendance;
use crate::error::PersistenceError;
use crate::queries::students::student_in_scope;

/// Records one attendance row per entry, all dated `date`.
///
/// Runs in one transaction. Every student must exist within `scope`;
/// otherwise nothing is written. Repeated marks for the same student and
/// date are kept as separate rows.
///
/// # Errors
///
/// Returns `PersistenceError::NotFound` if a student is unknown or outside
/// the scope, or an error if an insert fails.
pub fn mark_attendance(
    conn: &mut SqliteConnection,
    entries: &[AttendanceEntry],
    date: Date,
    scope: &Scope,
) -> Result<usize, PersistenceError> {
    let date_text: String = format_date(date);

    conn.transaction::<_, PersistenceError, _>(|conn| {
        for entry in entries {
            if !student_in_scope(conn, entry.student_id, scope)? {
                warn!(student_id = entry.student_id, "Attendance rejected: student not in scope");
                return Err(PersistenceError::NotFound(format!(
                    "Student {} not found",
                    entry.student_id
                )));
            }

            diesel::insert_into(attendance::table)
                .values((
                    attendance::student_id.eq(entry.student_id),
                    attendance::date.eq(&date_text),
                    attendance::status.eq(entry.status.as_str()),
                ))
                .execute(conn)?;
        }

        info!(count = entries.len(), date = %date_text, "Recorded attendance");
        Ok(entries.len())
    })
}
