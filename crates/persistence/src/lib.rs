// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Persistence layer for the attendance tracker.
//!
//! This crate owns the credential service (bcrypt hashing and verification)
//! and the SQLite data store holding users, instructors, students, classes
//! and attendance.
//!
//! ## Connection Lifecycle
//!
//! A `Persistence` holds at most one live connection. Every operation
//! acquires it through [`Persistence::connect`], which opens the backing
//! database on first use (and again after [`Persistence::close`]).
//! Dropping the store closes the connection.
//!
//! Foreign key enforcement is switched on and verified for every new
//! connection. File-backed stores also use WAL journaling.
//!
//! ## Schema
//!
//! The schema is applied by embedded Diesel migrations written with
//! `CREATE TABLE IF NOT EXISTS`, so [`Persistence::init_schema`] is safe on
//! every startup and on files created by earlier releases.
//!
//! ## Testing
//!
//! [`Persistence::new_in_memory`] creates a uniquely named shared-cache
//! in-memory database per call. Its contents are discarded on `close()`;
//! the schema is recreated when the store reconnects.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all,
    clippy::suspicious,
    clippy::complexity,
    clippy::perf,
    clippy::unwrap_used,
    clippy::expect_used
)]
#![allow(clippy::multiple_crate_versions)]

use attendance_domain::{
    AttendanceEntry, AttendanceReportRow, Instructor, Role, SchoolClass, Scope, Student,
};
use diesel::SqliteConnection;
use std::path::Path;
use std::sync::atomic::{AtomicU64, Ordering};
use time::Date;
use tracing::{debug, info};

mod backend;
mod credentials;
mod data_models;
mod diesel_schema;
mod error;
mod mutations;
mod queries;

#[cfg(test)]
mod tests;

pub use credentials::{Credentials, MAX_COST, MIN_COST};
pub use data_models::{
    AttendanceFilter, DateRange, InstructorChanges, NewInstructor, NewStudent, StudentChanges,
    StudentFilter, UserData,
};
pub use error::PersistenceError;

/// Plaintext behind the digest checked for unknown usernames.
const ABSENT_USER_PASSWORD: &str = "absent-user";

/// Atomic counter for generating unique in-memory database names.
static DB_COUNTER: AtomicU64 = AtomicU64::new(0);

/// The SQLite data store.
///
/// Exclusively owns its connection and is the only writer of the backing
/// database.
pub struct Persistence {
    database_url: String,
    file_backed: bool,
    conn: Option<SqliteConnection>,
    credentials: Credentials,
    /// Digest checked when a login names an unknown user, built on first use
    /// with the configured cost.
    absent_user_digest: Option<String>,
}

impl std::fmt::Debug for Persistence {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Persistence")
            .field("database_url", &self.database_url)
            .field("connected", &self.conn.is_some())
            .field("credentials", &self.credentials)
            .finish_non_exhaustive()
    }
}

impl Drop for Persistence {
    fn drop(&mut self) {
        self.close();
    }
}

impl Persistence {
    fn unopened(database_url: String, file_backed: bool) -> Self {
        Self {
            database_url,
            file_backed,
            conn: None,
            credentials: Credentials::default(),
            absent_user_digest: None,
        }
    }

    /// Creates a store backed by a fresh in-memory database.
    ///
    /// Each call receives a unique database, so tests are isolated from
    /// one another.
    ///
    /// # Errors
    ///
    /// Returns an error if the database cannot be opened or initialized.
    pub fn new_in_memory() -> Result<Self, PersistenceError> {
        let db_id = DB_COUNTER.fetch_add(1, Ordering::SeqCst);
        let shared_memory_url = format!("file:attendance_memdb_{db_id}?mode=memory&cache=shared");

        let mut store = Self::unopened(shared_memory_url, false);
        store.init_schema()?;
        Ok(store)
    }

    /// Creates a store backed by a database file, creating it if needed.
    ///
    /// # Arguments
    ///
    /// * `path` - The path to the `SQLite` database file
    ///
    /// # Errors
    ///
    /// Returns an error if the database cannot be opened or initialized.
    pub fn new_with_file<P: AsRef<Path>>(path: P) -> Result<Self, PersistenceError> {
        let path_str = path.as_ref().to_str().ok_or_else(|| {
            PersistenceError::InitializationError("Invalid database path".to_string())
        })?;

        let mut store = Self::unopened(path_str.to_string(), true);
        store.init_schema()?;
        Ok(store)
    }

    /// Replaces the credential service used to hash new passwords.
    #[must_use]
    pub fn with_credentials(mut self, credentials: Credentials) -> Self {
        self.credentials = credentials;
        self.absent_user_digest = None;
        self
    }

    /// Returns the credential service used to hash new passwords.
    #[must_use]
    pub const fn credentials(&self) -> &Credentials {
        &self.credentials
    }

    /// Returns `true` while a connection is open.
    #[must_use]
    pub const fn is_connected(&self) -> bool {
        self.conn.is_some()
    }

    /// Returns the live connection, opening it first if necessary.
    ///
    /// Calling this on an open store returns the existing connection.
    ///
    /// # Errors
    ///
    /// Returns an error if the database cannot be opened or foreign key
    /// enforcement cannot be enabled.
    pub fn connect(&mut self) -> Result<&mut SqliteConnection, PersistenceError> {
        let conn = match self.conn.take() {
            Some(conn) => conn,
            None => self.open()?,
        };
        Ok(self.conn.insert(conn))
    }

    fn open(&self) -> Result<SqliteConnection, PersistenceError> {
        let mut conn = backend::sqlite::establish(&self.database_url)?;
        if self.file_backed {
            backend::sqlite::enable_wal_mode(&mut conn)?;
        }
        backend::sqlite::verify_foreign_key_enforcement(&mut conn)?;
        if !self.file_backed {
            // A shared-cache memory database vanishes with its last
            // connection, so a reopened one starts without tables.
            backend::sqlite::run_migrations(&mut conn)?;
        }
        info!("Opened database {}", self.database_url);
        Ok(conn)
    }

    /// Creates any missing tables.
    ///
    /// Safe to call on every startup.
    ///
    /// # Errors
    ///
    /// Returns an error if the migrations cannot be applied.
    pub fn init_schema(&mut self) -> Result<(), PersistenceError> {
        let conn = self.connect()?;
        backend::sqlite::run_migrations(conn)
    }

    /// Closes the connection. Calling this on a closed store does nothing.
    pub fn close(&mut self) {
        if self.conn.take().is_some() {
            info!("Closed database {}", self.database_url);
        }
    }

    // ========================================================================
    // Users
    // ========================================================================

    /// Creates a user account, hashing the password first.
    ///
    /// # Errors
    ///
    /// Returns `PersistenceError::ConstraintViolation` if the username is taken.
    pub fn create_user(
        &mut self,
        username: &str,
        password: &str,
        role: Role,
    ) -> Result<i64, PersistenceError> {
        let digest = self.credentials.hash(password)?;
        let conn = self.connect()?;
        mutations::users::create_user(conn, username, &digest, role)
    }

    /// Retrieves a user account by exact username.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub fn get_user_by_username(
        &mut self,
        username: &str,
    ) -> Result<Option<UserData>, PersistenceError> {
        let conn = self.connect()?;
        queries::users::get_user_by_username(conn, username)
    }

    /// Checks whether a username is already taken.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub fn username_exists(&mut self, username: &str) -> Result<bool, PersistenceError> {
        let conn = self.connect()?;
        queries::users::username_exists(conn, username)
    }

    /// Checks a username and password pair.
    ///
    /// Returns the account's role on a match, `None` for an unknown user or
    /// a wrong password alike.
    ///
    /// # Errors
    ///
    /// Returns an error only if the lookup itself fails.
    pub fn verify_password(
        &mut self,
        username: &str,
        password: &str,
    ) -> Result<Option<Role>, PersistenceError> {
        let Some(user) = self.get_user_by_username(username)? else {
            // Pay the same bcrypt cost as a wrong password.
            let _ = Credentials::verify(password, self.absent_user_digest()?);
            debug!("Credential check failed");
            return Ok(None);
        };

        if Credentials::verify(password, &user.password_hash) {
            Ok(Some(user.role))
        } else {
            debug!("Credential check failed");
            Ok(None)
        }
    }

    fn absent_user_digest(&mut self) -> Result<&str, PersistenceError> {
        let digest = match self.absent_user_digest.take() {
            Some(digest) => digest,
            None => self.credentials.hash(ABSENT_USER_PASSWORD)?,
        };
        Ok(self.absent_user_digest.insert(digest).as_str())
    }

    /// Renames a user. Students owned by the old name follow.
    ///
    /// # Errors
    ///
    /// Returns `PersistenceError::ConstraintViolation` if the new username is taken.
    pub fn update_username(
        &mut self,
        old_username: &str,
        new_username: &str,
    ) -> Result<usize, PersistenceError> {
        let conn = self.connect()?;
        mutations::users::update_username(conn, old_username, new_username)
    }

    /// Replaces a user's password with a fresh digest of `new_password`.
    ///
    /// # Errors
    ///
    /// Returns an error if hashing or the update fails.
    pub fn update_password(
        &mut self,
        username: &str,
        new_password: &str,
    ) -> Result<usize, PersistenceError> {
        let digest = self.credentials.hash(new_password)?;
        let conn = self.connect()?;
        mutations::users::update_password(conn, username, &digest)
    }

    // ========================================================================
    // Instructors
    // ========================================================================

    /// Creates an instructor and its login account in one transaction.
    ///
    /// The account's username is the instructor's name.
    ///
    /// # Errors
    ///
    /// Returns `PersistenceError::ConstraintViolation` if the instructor id or
    /// username is taken; in that case neither row is written.
    pub fn create_instructor(
        &mut self,
        instructor: &NewInstructor,
        initial_password: &str,
    ) -> Result<i64, PersistenceError> {
        let digest = self.credentials.hash(initial_password)?;
        let conn = self.connect()?;
        mutations::instructors::create_instructor(conn, instructor, &instructor.name, &digest)
    }

    /// Lists all instructors ordered by name.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub fn list_instructors(&mut self) -> Result<Vec<Instructor>, PersistenceError> {
        let conn = self.connect()?;
        queries::instructors::list_instructors(conn)
    }

    /// Retrieves an instructor by instructor id.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub fn get_instructor(
        &mut self,
        instructor_id: &str,
    ) -> Result<Option<Instructor>, PersistenceError> {
        let conn = self.connect()?;
        queries::instructors::get_instructor(conn, instructor_id)
    }

    /// Updates an instructor's editable fields.
    ///
    /// # Errors
    ///
    /// Returns an error if the update fails.
    pub fn update_instructor(
        &mut self,
        instructor_id: &str,
        changes: &InstructorChanges,
    ) -> Result<usize, PersistenceError> {
        let conn = self.connect()?;
        mutations::instructors::update_instructor(conn, instructor_id, changes)
    }

    /// Deletes an instructor by instructor id.
    ///
    /// # Errors
    ///
    /// Returns an error if the delete fails.
    pub fn delete_instructor(&mut self, instructor_id: &str) -> Result<usize, PersistenceError> {
        let conn = self.connect()?;
        mutations::instructors::delete_instructor(conn, instructor_id)
    }

    /// Records a class assignment for the instructor with the given name.
    ///
    /// # Errors
    ///
    /// Returns an error if the update fails.
    pub fn assign_class_to_instructor(
        &mut self,
        instructor_name: &str,
        class_name: &str,
    ) -> Result<usize, PersistenceError> {
        let conn = self.connect()?;
        mutations::instructors::assign_class(conn, instructor_name, class_name)
    }

    /// Counts all instructors.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub fn count_instructors(&mut self) -> Result<i64, PersistenceError> {
        let conn = self.connect()?;
        queries::instructors::count_instructors(conn)
    }

    // ========================================================================
    // Students
    // ========================================================================

    /// Creates a student.
    ///
    /// # Errors
    ///
    /// Returns `PersistenceError::ConstraintViolation` if the roll number is taken.
    pub fn create_student(&mut self, student: &NewStudent) -> Result<i64, PersistenceError> {
        let conn = self.connect()?;
        mutations::students::create_student(conn, student)
    }

    /// Lists students matching a filter, ordered by name.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub fn list_students(&mut self, filter: &StudentFilter) -> Result<Vec<Student>, PersistenceError> {
        let conn = self.connect()?;
        queries::students::list_students(conn, filter)
    }

    /// Retrieves a student by roll number within a scope.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub fn get_student_by_roll(
        &mut self,
        roll_number: &str,
        scope: &Scope,
    ) -> Result<Option<Student>, PersistenceError> {
        let conn = self.connect()?;
        queries::students::get_student_by_roll(conn, roll_number, scope)
    }

    /// Updates a student's editable fields within a scope.
    ///
    /// # Errors
    ///
    /// Returns an error if the update fails.
    pub fn update_student(
        &mut self,
        roll_number: &str,
        changes: &StudentChanges,
        scope: &Scope,
    ) -> Result<usize, PersistenceError> {
        let conn = self.connect()?;
        mutations::students::update_student(conn, roll_number, changes, scope)
    }

    /// Deletes a student (and its attendance rows) within a scope.
    ///
    /// # Errors
    ///
    /// Returns an error if the delete fails.
    pub fn delete_student(
        &mut self,
        roll_number: &str,
        scope: &Scope,
    ) -> Result<usize, PersistenceError> {
        let conn = self.connect()?;
        mutations::students::delete_student(conn, roll_number, scope)
    }

    /// Lists distinct class names used by students within a scope.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub fn list_student_class_names(
        &mut self,
        scope: &Scope,
    ) -> Result<Vec<String>, PersistenceError> {
        let conn = self.connect()?;
        queries::students::list_student_class_names(conn, scope)
    }

    /// Counts students within a scope.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub fn count_students(&mut self, scope: &Scope) -> Result<i64, PersistenceError> {
        let conn = self.connect()?;
        queries::students::count_students(conn, scope)
    }

    // ========================================================================
    // Classes
    // ========================================================================

    /// Creates a class.
    ///
    /// # Errors
    ///
    /// Returns `PersistenceError::ConstraintViolation` if the name is taken.
    pub fn create_class(&mut self, class_name: &str) -> Result<i64, PersistenceError> {
        let conn = self.connect()?;
        mutations::classes::create_class(conn, class_name)
    }

    /// Lists all classes ordered by name.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub fn list_classes(&mut self) -> Result<Vec<SchoolClass>, PersistenceError> {
        let conn = self.connect()?;
        queries::classes::list_classes(conn)
    }

    /// Renames a class. References held by students and instructors are
    /// not rewritten.
    ///
    /// # Errors
    ///
    /// Returns `PersistenceError::ConstraintViolation` if the new name is taken.
    pub fn rename_class(&mut self, old_name: &str, new_name: &str) -> Result<usize, PersistenceError> {
        let conn = self.connect()?;
        mutations::classes::rename_class(conn, old_name, new_name)
    }

    /// Deletes a class by name.
    ///
    /// # Errors
    ///
    /// Returns an error if the delete fails.
    pub fn delete_class(&mut self, class_name: &str) -> Result<usize, PersistenceError> {
        let conn = self.connect()?;
        mutations::classes::delete_class(conn, class_name)
    }

    /// Counts all classes.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub fn count_classes(&mut self) -> Result<i64, PersistenceError> {
        let conn = self.connect()?;
        queries::classes::count_classes(conn)
    }

    // ========================================================================
    // Attendance
    // ========================================================================

    /// Records attendance for a batch of students on one date.
    ///
    /// # Errors
    ///
    /// Returns `PersistenceError::NotFound` if any student is unknown or
    /// outside `scope`; nothing is written in that case.
    pub fn mark_attendance(
        &mut self,
        entries: &[AttendanceEntry],
        date: Date,
        scope: &Scope,
    ) -> Result<usize, PersistenceError> {
        let conn = self.connect()?;
        mutations::attendance::mark_attendance(conn, entries, date, scope)
    }

    /// Lists attendance rows matching a filter, newest first.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub fn list_attendance(
        &mut self,
        filter: &AttendanceFilter,
    ) -> Result<Vec<AttendanceReportRow>, PersistenceError> {
        let conn = self.connect()?;
        queries::attendance::list_attendance(conn, filter)
    }

    /// Counts attendance rows within a scope.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub fn count_attendance(&mut self, scope: &Scope) -> Result<i64, PersistenceError> {
        let conn = self.connect()?;
        queries::attendance::count_attendance(conn, scope)
    }
}
