// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Test helper functions and fixtures.

use attendance_domain::Role;
use attendance_persistence::{Credentials, MIN_COST, Persistence};
use time::{Date, Month};

use crate::{CreateInstructorRequest, CreateStudentRequest, Session, create_instructor};

/// Creates an in-memory store that hashes with the cheapest bcrypt cost.
pub fn create_test_store() -> Persistence {
    Persistence::new_in_memory()
        .unwrap()
        .with_credentials(Credentials::with_cost(MIN_COST).unwrap())
}

pub fn create_test_admin() -> Session {
    Session::new(String::from("admin"), Role::Admin)
}

pub fn create_test_instructor_session(username: &str) -> Session {
    Session::new(username.to_string(), Role::Instructor)
}

/// Creates an instructor (and its login account) through the admin API.
pub fn seed_instructor(persistence: &mut Persistence, name: &str, instructor_id: &str) {
    let request = CreateInstructorRequest {
        name: name.to_string(),
        instructor_id: instructor_id.to_string(),
        email: None,
        department: None,
    };
    create_instructor(persistence, &create_test_admin(), &request).unwrap();
}

pub fn student_request(name: &str, roll_number: &str, class_name: &str) -> CreateStudentRequest {
    CreateStudentRequest {
        name: name.to_string(),
        roll_number: roll_number.to_string(),
        email: None,
        class_name: Some(class_name.to_string()),
        instructor_username: None,
    }
}

pub fn test_date(day: u8) -> Date {
    Date::from_calendar_date(2026, Month::March, day).unwrap()
}
