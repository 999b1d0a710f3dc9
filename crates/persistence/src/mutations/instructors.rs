// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use attendance_domain::Role;
use diesel::SqliteConnection;
use diesel::prelude::*;
use tracing::info;

use crate::backend::sqlite::get_last_insert_rowid;
use crate::data_models::{InstructorChanges, NewInstructor};
use crate::diesel_schema::{instructors, users};
use crate::error::PersistenceError;

#[derive(Insertable)]
#[diesel(table_name = instructors)]
struct NewInstructorRow<'a> {
    name: &'a str,
    instructor_id: &'a str,
    email: Option<&'a str>,
    department: Option<&'a str>,
}

#[derive(AsChangeset)]
#[diesel(table_name = instructors, treat_none_as_null = true)]
struct InstructorChangeset<'a> {
    name: &'a str,
    email: Option<&'a str>,
    department: Option<&'a str>,
}

/// Inserts an instructor together with its login account.
///
/// Both rows are written in one transaction; if either insert fails
/// neither row is kept.
///
/// # Arguments
///
/// * `conn` - The database connection
/// * `instructor` - The instructor fields
/// * `username` - The login name of the paired account
/// * `password_hash` - The digest of the paired account's initial password
///
/// # Errors
///
/// Returns `PersistenceError::ConstraintViolation` if the instructor id or
/// the username is taken.
pub fn create_instructor(
    conn: &mut SqliteConnection,
    instructor: &NewInstructor,
    username: &str,
    password_hash: &str,
) -> Result<i64, PersistenceError> {
    conn.transaction::<_, PersistenceError, _>(|conn| {
        diesel::insert_into(instructors::table)
            .values(NewInstructorRow {
                name: &instructor.name,
                instructor_id: &instructor.instructor_id,
                email: instructor.email.as_deref(),
                department: instructor.department.as_deref(),
            })
            .execute(conn)?;
        let id: i64 = get_last_insert_rowid(conn)?;

        diesel::insert_into(users::table)
            .values((
                users::username.eq(username),
                users::password.eq(password_hash),
                users::role.eq(Role::Instructor.as_str()),
            ))
            .execute(conn)?;

        info!(
            id,
            instructor_id = %instructor.instructor_id,
            username,
            "Created instructor with login account"
        );
        Ok(id)
    })
}

/// Updates an instructor's editable fields.
///
/// # Errors
///
/// Returns an error if the update fails.
pub fn update_instructor(
    conn: &mut SqliteConnection,
    instructor_id: &str,
    changes: &InstructorChanges,
) -> Result<usize, PersistenceError> {
    let affected: usize = diesel::update(
        instructors::table.filter(instructors::instructor_id.eq(instructor_id)),
    )
    .set(InstructorChangeset {
        name: &changes.name,
        email: changes.email.as_deref(),
        department: changes.department.as_deref(),
    })
    .execute(conn)?;

    info!(instructor_id, affected, "Updated instructor");
    Ok(affected)
}

/// Deletes an instructor. The paired login account is kept.
///
/// # Errors
///
/// Returns an error if the delete fails.
pub fn delete_instructor(
    conn: &mut SqliteConnection,
    instructor_id: &str,
) -> Result<usize, PersistenceError> {
    let affected: usize =
        diesel::delete(instructors::table.filter(instructors::instructor_id.eq(instructor_id)))
            .execute(conn)?;

    info!(instructor_id, affected, "Deleted instructor");
    Ok(affected)
}

/// Records a class assignment in the instructor's `department` column.
///
/// # Errors
///
/// Returns an error if the update fails.
pub fn assign_class(
    conn: &mut SqliteConnection,
    instructor_name: &str,
    class_name: &str,
) -> Result<usize, PersistenceError> {
    let affected: usize =
        diesel::update(instructors::table.filter(instructors::name.eq(instructor_name)))
            .set(instructors::department.eq(class_name))
            .execute(conn)?;

    info!(instructor_name, class_name, affected, "Assigned class to instructor");
    Ok(affected)
}
