// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use attendance_domain::Role;
use diesel::SqliteConnection;
use diesel::prelude::*;
use tracing::info;

use crate::backend::sqlite::get_last_insert_rowid;
use crate::diesel_schema::{students, users};
use crate::error::PersistenceError;

/// Inserts a user account.
///
/// # Arguments
///
/// * `conn` - The database connection
/// * `username` - The unique login name
/// * `password_hash` - The bcrypt digest (never the plaintext)
/// * `role` - The account role
///
/// # Errors
///
/// Returns `PersistenceError::ConstraintViolation` if the username is taken.
pub fn create_user(
    conn: &mut SqliteConnection,
    username: &str,
    password_hash: &str,
    role: Role,
) -> Result<i64, PersistenceError> {
    diesel::insert_into(users::table)
        .values((
            users::username.eq(username),
            users::password.eq(password_hash),
            users::role.eq(role.as_str()),
        ))
        .execute(conn)?;

    let user_id: i64 = get_last_insert_rowid(conn)?;
    info!(user_id, username, %role, "Created user");
    Ok(user_id)
}

/// Renames a user.
///
/// Students owned by the old username move to the new one in the same
/// transaction.
///
/// # Errors
///
/// Returns `PersistenceError::ConstraintViolation` if the new username is taken.
pub fn update_username(
    conn: &mut SqliteConnection,
    old_username: &str,
    new_username: &str,
) -> Result<usize, PersistenceError> {
    conn.transaction::<_, PersistenceError, _>(|conn| {
        let affected: usize = diesel::update(users::table.filter(users::username.eq(old_username)))
            .set(users::username.eq(new_username))
            .execute(conn)?;

        if affected > 0 {
            let moved: usize = diesel::update(
                students::table.filter(students::instructor_username.eq(old_username)),
            )
            .set(students::instructor_username.eq(new_username))
            .execute(conn)?;
            info!(old_username, new_username, moved, "Renamed user");
        }

        Ok(affected)
    })
}

/// Replaces a user's password digest.
///
/// # Errors
///
/// Returns an error if the update fails.
pub fn update_password(
    conn: &mut SqliteConnection,
    username: &str,
    password_hash: &str,
) -> Result<usize, PersistenceError> {
    let affected: usize = diesel::update(users::table.filter(users::username.eq(username)))
        .set(users::password.eq(password_hash))
        .execute(conn)?;

    info!(username, affected, "Updated password");
    Ok(affected)
}
