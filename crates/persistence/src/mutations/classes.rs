// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Class mutations.
//!
//! Students and instructors refer to classes by name. Renaming or deleting
//! a class leaves those references untouched.

use diesel::SqliteConnection;
use diesel::prelude::*;
use tracing::info;

use crate::backend::sqlite::get_last_insert_rowid;
use crate::diesel_schema::classes;
use crate::error::PersistenceError;

/// Inserts a class.
///
/// # Errors
///
/// Returns `PersistenceError::ConstraintViolation` if the name is taken.
pub fn create_class(conn: &mut SqliteConnection, class_name: &str) -> Result<i64, PersistenceError> {
    diesel::insert_into(classes::table)
        .values(classes::class_name.eq(class_name))
        .execute(conn)?;

    let class_id: i64 = get_last_insert_rowid(conn)?;
    info!(class_id, class_name, "Created class");
    Ok(class_id)
}

/// Renames a class.
///
/// # Errors
///
/// Returns `PersistenceError::ConstraintViolation` if the new name is taken.
pub fn rename_class(
    conn: &mut SqliteConnection,
    old_name: &str,
    new_name: &str,
) -> Result<usize, PersistenceError> {
    let affected: usize = diesel::update(classes::table.filter(classes::class_name.eq(old_name)))
        .set(classes::class_name.eq(new_name))
        .execute(conn)?;

    info!(old_name, new_name, affected, "Renamed class");
    Ok(affected)
}

/// Deletes a class by name.
///
/// # Errors
///
/// Returns an error if the delete fails.
pub fn delete_class(conn: &mut SqliteConnection, class_name: &str) -> Result<usize, PersistenceError> {
    let affected: usize =
        diesel::delete(classes::table.filter(classes::class_name.eq(class_name))).execute(conn)?;

    info!(class_name, affected, "Deleted class");
    Ok(affected)
}
