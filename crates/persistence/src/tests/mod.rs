// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

mod class_tests;
mod instructor_tests;

use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicU64, Ordering};

use attendance_domain::Scope;
use time::{Date, Month};

use crate::{Credentials, MIN_COST, NewStudent, Persistence};

static TEMP_COUNTER: AtomicU64 = AtomicU64::new(0);

/// Creates an in-memory store that hashes with the cheapest bcrypt cost.
pub fn create_test_store() -> Persistence {
    Persistence::new_in_memory()
        .unwrap()
        .with_credentials(Credentials::with_cost(MIN_COST).unwrap())
}

/// A database file under the temp directory, removed again on drop
/// together with its `-wal` and `-shm` companions.
pub struct TempDb {
    path: PathBuf,
}

impl TempDb {
    pub fn new(prefix: &str) -> Self {
        let path = std::env::temp_dir().join(format!(
            "{prefix}-{}-{}.db",
            std::process::id(),
            TEMP_COUNTER.fetch_add(1, Ordering::SeqCst)
        ));
        Self { path }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Drop for TempDb {
    fn drop(&mut self) {
        for suffix in ["", "-wal", "-shm"] {
            let mut file = self.path.as_os_str().to_os_string();
            file.push(suffix);
            let _ = std::fs::remove_file(file);
        }
    }
}

pub fn test_date(day: u8) -> Date {
    Date::from_calendar_date(2026, Month::March, day).unwrap()
}

pub fn instructor_scope(username: &str) -> Scope {
    Scope::Instructor(username.to_string())
}

pub fn new_student(name: &str, roll_number: &str, class_name: &str, owner: &str) -> NewStudent {
    NewStudent {
        name: name.to_string(),
        roll_number: roll_number.to_string(),
        email: None,
        class_name: Some(class_name.to_string()),
        instructor_username: Some(owner.to_string()),
    }
}
