// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use attendance_domain::Role;

use super::create_test_store;
use crate::{InstructorChanges, NewInstructor, PersistenceError};

fn new_instructor(name: &str, instructor_id: &str) -> NewInstructor {
    NewInstructor {
        name: name.to_string(),
        instructor_id: instructor_id.to_string(),
        email: Some(format!("{instructor_id}@school.example")),
        department: None,
    }
}

#[test]
fn test_create_instructor_creates_login_account() {
    let mut persistence = create_test_store();

    persistence
        .create_instructor(&new_instructor("Dr. A", "I1"), "12345")
        .unwrap();

    let instructor = persistence.get_instructor("I1").unwrap().unwrap();
    assert_eq!(instructor.name, "Dr. A");
    assert_eq!(instructor.email.as_deref(), Some("I1@school.example"));
    assert_eq!(
        persistence.verify_password("Dr. A", "12345").unwrap(),
        Some(Role::Instructor)
    );
}

#[test]
fn test_create_instructor_with_duplicate_id_writes_nothing() {
    let mut persistence = create_test_store();
    persistence
        .create_instructor(&new_instructor("Dr. A", "I1"), "12345")
        .unwrap();

    let result = persistence.create_instructor(&new_instructor("Dr. B", "I1"), "12345");

    assert!(matches!(
        result,
        Err(PersistenceError::ConstraintViolation { .. })
    ));
    assert!(persistence.get_user_by_username("Dr. B").unwrap().is_none());
    assert_eq!(persistence.count_instructors().unwrap(), 1);
}

#[test]
fn test_create_instructor_rolls_back_when_username_taken() {
    let mut persistence = create_test_store();
    persistence.create_user("Dr. A", "pw", Role::Admin).unwrap();

    let result = persistence.create_instructor(&new_instructor("Dr. A", "I1"), "12345");

    assert!(matches!(
        result,
        Err(PersistenceError::ConstraintViolation { .. })
    ));
    assert!(persistence.get_instructor("I1").unwrap().is_none());
    assert_eq!(persistence.count_instructors().unwrap(), 0);
}

#[test]
fn test_list_instructors_is_ordered_by_name() {
    let mut persistence = create_test_store();
    persistence
        .create_instructor(&new_instructor("Zed", "I1"), "12345")
        .unwrap();
    persistence
        .create_instructor(&new_instructor("Amy", "I2"), "12345")
        .unwrap();

    let names: Vec<String> = persistence
        .list_instructors()
        .unwrap()
        .into_iter()
        .map(|i| i.name)
        .collect();

    assert_eq!(names, vec!["Amy", "Zed"]);
}

#[test]
fn test_update_instructor_by_id() {
    let mut persistence = create_test_store();
    persistence
        .create_instructor(&new_instructor("Dr. A", "I1"), "12345")
        .unwrap();

    let changes = InstructorChanges {
        name: String::from("Dr. Alpha"),
        email: None,
        department: Some(String::from("Physics")),
    };
    let affected = persistence.update_instructor("I1", &changes).unwrap();

    assert_eq!(affected, 1);
    let instructor = persistence.get_instructor("I1").unwrap().unwrap();
    assert_eq!(instructor.name, "Dr. Alpha");
    assert_eq!(instructor.email, None);
    assert_eq!(instructor.department.as_deref(), Some("Physics"));
    // The login account keeps its original name.
    assert!(persistence.get_user_by_username("Dr. A").unwrap().is_some());
}

#[test]
fn test_update_unknown_instructor_affects_nothing() {
    let mut persistence = create_test_store();
    let changes = InstructorChanges {
        name: String::from("Nobody"),
        ..InstructorChanges::default()
    };

    assert_eq!(persistence.update_instructor("I404", &changes).unwrap(), 0);
}

#[test]
fn test_delete_instructor_is_idempotent_and_keeps_account() {
    let mut persistence = create_test_store();
    persistence
        .create_instructor(&new_instructor("Dr. A", "I1"), "12345")
        .unwrap();

    assert_eq!(persistence.delete_instructor("I1").unwrap(), 1);
    assert_eq!(persistence.delete_instructor("I1").unwrap(), 0);
    assert!(persistence.get_instructor("I1").unwrap().is_none());
    assert!(persistence.get_user_by_username("Dr. A").unwrap().is_some());
}

#[test]
fn test_assign_class_writes_department() {
    let mut persistence = create_test_store();
    persistence
        .create_instructor(&new_instructor("Dr. A", "I1"), "12345")
        .unwrap();

    assert_eq!(
        persistence
            .assign_class_to_instructor("Dr. A", "CS101")
            .unwrap(),
        1
    );
    assert_eq!(
        persistence
            .assign_class_to_instructor("Dr. Nobody", "CS101")
            .unwrap(),
        0
    );

    let instructor = persistence.get_instructor("I1").unwrap().unwrap();
    assert_eq!(instructor.department.as_deref(), Some("CS101"));
}
