// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Student queries.
//!
//! Every query honours the caller's `Scope`: a restricted scope only ever
//! sees rows whose `instructor_username` matches.

use attendance_domain::{Scope, Student};
use diesel::SqliteConnection;
use diesel::prelude::*;
use diesel::sqlite::Sqlite;
use tracing::debug;

use crate::data_models::StudentFilter;
use crate::diesel_schema::students;
use crate::error::PersistenceError;

/// Diesel Queryable struct for student rows.
///
/// The unused `photo` column is never loaded.
#[derive(Queryable, Selectable)]
#[diesel(table_name = students)]
struct StudentRow {
    id: i64,
    name: String,
    roll_number: String,
    email: Option<String>,
    class_name: Option<String>,
    instructor_username: Option<String>,
}

impl From<StudentRow> for Student {
    fn from(row: StudentRow) -> Self {
        Self {
            id: row.id,
            name: row.name,
            roll_number: row.roll_number,
            email: row.email,
            class_name: row.class_name,
            instructor_username: row.instructor_username,
        }
    }
}

/// Lists students matching a filter, ordered by name.
///
/// # Errors
///
/// Returns an error if the query fails.
pub fn list_students(
    conn: &mut SqliteConnection,
    filter: &StudentFilter,
) -> Result<Vec<Student>, PersistenceError> {
    let mut query = students::table
        .select(StudentRow::as_select())
        .into_boxed::<Sqlite>();

    if let Some(owner) = filter.scope.instructor_username() {
        query = query.filter(students::instructor_username.eq(owner));
    }
    if let Some(class_name) = filter.class_name.as_deref() {
        query = query.filter(students::class_name.eq(class_name));
    }

    let rows: Vec<StudentRow> = query
        .order((students::name.asc(), students::id.asc()))
        .load(conn)?;

    debug!("Loaded {} student(s)", rows.len());
    Ok(rows.into_iter().map(Student::from).collect())
}

/// Retrieves a student by roll number within a scope.
///
/// # Errors
///
/// Returns an error if the query fails.
/// Returns `Ok(None)` if the student does not exist or is outside the scope.
pub fn get_student_by_roll(
    conn: &mut SqliteConnection,
    roll_number: &str,
    scope: &Scope,
) -> Result<Option<Student>, PersistenceError> {
    let mut query = students::table
        .filter(students::roll_number.eq(roll_number))
        .select(StudentRow::as_select())
        .into_boxed::<Sqlite>();

    if let Some(owner) = scope.instructor_username() {
        query = query.filter(students::instructor_username.eq(owner));
    }

    Ok(query.first(conn).optional()?.map(Student::from))
}

/// Checks whether a student id exists within a scope.
///
/// # Errors
///
/// Returns an error if the query fails.
pub fn student_in_scope(
    conn: &mut SqliteConnection,
    student_id: i64,
    scope: &Scope,
) -> Result<bool, PersistenceError> {
    let exists: bool = match scope.instructor_username() {
        None => diesel::select(diesel::dsl::exists(
            students::table.filter(students::id.eq(student_id)),
        ))
        .get_result(conn)?,
        Some(owner) => diesel::select(diesel::dsl::exists(
            students::table
                .filter(students::id.eq(student_id))
                .filter(students::instructor_username.eq(owner)),
        ))
        .get_result(conn)?,
    };
    Ok(exists)
}

/// Lists the distinct, non-null class names of students within a scope.
///
/// # Errors
///
/// Returns an error if the query fails.
pub fn list_student_class_names(
    conn: &mut SqliteConnection,
    scope: &Scope,
) -> Result<Vec<String>, PersistenceError> {
    let mut query = students::table
        .select(students::class_name)
        .filter(students::class_name.is_not_null())
        .distinct()
        .into_boxed::<Sqlite>();

    if let Some(owner) = scope.instructor_username() {
        query = query.filter(students::instructor_username.eq(owner));
    }

    let names: Vec<Option<String>> = query.order(students::class_name.asc()).load(conn)?;
    Ok(names.into_iter().flatten().collect())
}

/// Counts students within a scope.
///
/// # Errors
///
/// Returns an error if the query fails.
pub fn count_students(conn: &mut SqliteConnection, scope: &Scope) -> Result<i64, PersistenceError> {
    let count: i64 = match scope.instructor_username() {
        None => students::table.count().get_result(conn)?,
        Some(owner) => students::table
            .filter(students::instructor_username.eq(owner))
            .count()
            .get_result(conn)?,
    };
    Ok(count)
}
