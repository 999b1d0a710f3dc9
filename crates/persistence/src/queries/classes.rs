// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use attendance_domain::SchoolClass;
use diesel::prelude::*;
use diesel::SqliteConnection;

use crate::diesel_schema::classes;
use crate::error::PersistenceError;

#[derive(Queryable, Selectable)]
#[diesel(table_name = classes)]
struct ClassRow {
    id: i64,
    class_name: String,
}

/// Lists all classes ordered by name.
///
/// # Errors
///
/// Returns an error if the query fails.
pub fn list_classes(conn: &mut SqliteConnection) -> Result<Vec<SchoolClass>, PersistenceError> {
    let rows: Vec<ClassRow> = classes::table
        .select(ClassRow::as_select())
        .order(classes::class_name.asc())
        .load(conn)?;

    Ok(rows
        .into_iter()
        .map(|row| SchoolClass {
            id: row.id,
            class_name: row.class_name,
        })
        .collect())
}

/// Counts all classes.
///
/// # Errors
///
/// Returns an error if the query fails.
pub fn count_classes(conn: &mut SqliteConnection) -> Result<i64, PersistenceError> {
    Ok(classes::table.count().get_result(conn)?)
}
