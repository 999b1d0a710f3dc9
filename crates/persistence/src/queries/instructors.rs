// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use attendance_domain::Instructor;
use diesel::prelude::*;
use diesel::SqliteConnection;
use tracing::debug;

use crate::diesel_schema::instructors;
use crate::error::PersistenceError;

/// Diesel Queryable struct for instructor rows.
#[derive(Queryable, Selectable)]
#[diesel(table_name = instructors)]
struct InstructorRow {
    id: i64,
    name: String,
    instructor_id: String,
    email: Option<String>,
    department: Option<String>,
}

impl From<InstructorRow> for Instructor {
    fn from(row: InstructorRow) -> Self {
        Self {
            id: row.id,
            name: row.name,
            instructor_id: row.instructor_id,
            email: row.email,
            department: row.department,
        }
    }
}

/// Lists all instructors ordered by name.
///
/// # Errors
///
/// Returns an error if the query fails.
pub fn list_instructors(conn: &mut SqliteConnection) -> Result<Vec<Instructor>, PersistenceError> {
    let rows: Vec<InstructorRow> = instructors::table
        .select(InstructorRow::as_select())
        .order((instructors::name.asc(), instructors::id.asc()))
        .load(conn)?;

    Ok(rows.into_iter().map(Instructor::from).collect())
}

/// Retrieves an instructor by instructor id.
///
/// # Errors
///
/// Returns an error if the query fails.
/// Returns `Ok(None)` if no such instructor exists.
pub fn get_instructor(
    conn: &mut SqliteConnection,
    instructor_id: &str,
) -> Result<Option<Instructor>, PersistenceError> {
    debug!("Looking up instructor: {}", instructor_id);

    Ok(instructors::table
        .filter(instructors::instructor_id.eq(instructor_id))
        .select(InstructorRow::as_select())
        .first(conn)
        .optional()?
        .map(Instructor::from))
}

/// Counts all instructors.
///
/// # Errors
///
/// Returns an error if the query fails.
pub fn count_instructors(conn: &mut SqliteConnection) -> Result<i64, PersistenceError> {
    Ok(instructors::table.count().get_result(conn)?)
}
