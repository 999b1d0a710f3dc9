// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use attendance_domain::{Role, Scope};
use attendance_persistence::Persistence;

use crate::auth::Session;
use crate::error::{ApiError, translate_persistence_error};
use crate::request_response::DashboardStats;

/// Computes the record counts shown on the dashboard.
///
/// Administrators get totals for students, instructors, classes and
/// attendance rows. Instructors get counts of their own students and
/// attendance rows, and the number of distinct classes among their students.
///
/// # Errors
///
/// Returns an error if the store fails.
pub fn dashboard_stats(
    persistence: &mut Persistence,
    session: &Session,
) -> Result<DashboardStats, ApiError> {
    let scope: Scope = session.scope();

    let students: i64 = persistence
        .count_students(&scope)
        .map_err(translate_persistence_error)?;
    let attendance_records: i64 = persistence
        .count_attendance(&scope)
        .map_err(translate_persistence_error)?;

    let (instructors, classes): (Option<i64>, i64) = match session.role {
        Role::Admin => (
            Some(
                persistence
                    .count_instructors()
                    .map_err(translate_persistence_error)?,
            ),
            persistence
                .count_classes()
                .map_err(translate_persistence_error)?,
        ),
        Role::Instructor => {
            let names: Vec<String> = persistence
                .list_student_class_names(&scope)
                .map_err(translate_persistence_error)?;
            (None, i64::try_from(names.len()).unwrap_or(i64::MAX))
        }
    };

    Ok(DashboardStats {
        role: session.role,
        students,
        instructors,
        classes,
        attendance_records,
    })
}
