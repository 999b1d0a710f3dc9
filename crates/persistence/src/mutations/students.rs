// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use attendance_domain::Scope;
use diesel::SqliteConnection;
use diesel::sqlite::Sqlite;
use diesel::prelude::*;
use tracing::info;

use crate::backend::sqlite::get_last_insert_rowid;
use crate::data_models::{NewStudent, StudentChanges};
use crate::diesel_schema::{attendance, students};
use crate::error::PersistenceError;

#[derive(Insertable)]
#[diesel(table_name = students)]
struct NewStudentRow<'a> {
    name: &'a str,
    roll_number: &'a str,
    email: Option<&'a str>,
    class_name: Option<&'a str>,
    instructor_username: Option<&'a str>,
}

#[derive(AsChangeset)]
#[diesel(table_name = students, treat_none_as_null = true)]
struct StudentChangeset<'a> {
    name: &'a str,
    email: Option<&'a str>,
    class_name: Option<&'a str>,
}

/// Inserts a student.
///
/// # Errors
///
/// Returns `PersistenceError::ConstraintViolation` if the roll number is taken.
pub fn create_student(
    conn: &mut SqliteConnection,
    student: &NewStudent,
) -> Result<i64, PersistenceError> {
    diesel::insert_into(students::table)
        .values(NewStudentRow {
            name: &student.name,
            roll_number: &student.roll_number,
            email: student.email.as_deref(),
            class_name: student.class_name.as_deref(),
            instructor_username: student.instructor_username.as_deref(),
        })
        .execute(conn)?;

    let student_id: i64 = get_last_insert_rowid(conn)?;
    info!(student_id, roll_number = %student.roll_number, "Created student");
    Ok(student_id)
}

/// Updates a student's editable fields within a scope.
///
/// A student outside the scope is left untouched and counts as absent.
///
/// # Errors
///
/// Returns an error if the update fails.
pub fn update_student(
    conn: &mut SqliteConnection,
    roll_number: &str,
    changes: &StudentChanges,
    scope: &Scope,
) -> Result<usize, PersistenceError> {
    let changeset = StudentChangeset {
        name: &changes.name,
        email: changes.email.as_deref(),
        class_name: changes.class_name.as_deref(),
    };
    let target = students::table.filter(students::roll_number.eq(roll_number));

    let affected: usize = match scope.instructor_username() {
        None => diesel::update(target).set(&changeset).execute(conn)?,
        Some(owner) => diesel::update(target.filter(students::instructor_username.eq(owner)))
            .set(&changeset)
            .execute(conn)?,
    };

    info!(roll_number, affected, "Updated student");
    Ok(affected)
}

/// Deletes a student and its attendance rows within a scope.
///
/// Attendance is removed explicitly in the same transaction, so files whose
/// `attendance` table predates the cascading foreign key behave the same.
///
/// # Errors
///
/// Returns an error if the delete fails.
pub fn delete_student(
    conn: &mut SqliteConnection,
    roll_number: &str,
    scope: &Scope,
) -> Result<usize, PersistenceError> {
    conn.transaction::<_, PersistenceError, _>(|conn| {
        let mut query = students::table
            .filter(students::roll_number.eq(roll_number))
            .select(students::id)
            .into_boxed::<Sqlite>();
        if let Some(owner) = scope.instructor_username() {
            query = query.filter(students::instructor_username.eq(owner));
        }
        let student_ids: Vec<i64> = query.load(conn)?;
        if student_ids.is_empty() {
            info!(roll_number, affected = 0, "Deleted student");
            return Ok(0);
        }

        let removed_marks: usize = diesel::delete(
            attendance::table.filter(attendance::student_id.eq_any(student_ids.clone())),
        )
        .execute(conn)?;
        let affected: usize =
            diesel::delete(students::table.filter(students::id.eq_any(student_ids)))
                .execute(conn)?;

        info!(roll_number, affected, removed_marks, "Deleted student");
        Ok(affected)
    })
}
