// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use attendance_domain::Scope;

use super::{create_test_store, new_student};
use crate::{PersistenceError, StudentFilter};

#[test]
fn test_list_classes_is_ordered_by_name() {
    let mut persistence = create_test_store();
    persistence.create_class("MATH200").unwrap();
    persistence.create_class("CS101").unwrap();
    persistence.create_class("BIO150").unwrap();

    let names: Vec<String> = persistence
        .list_classes()
        .unwrap()
        .into_iter()
        .map(|c| c.class_name)
        .collect();

    assert_eq!(names, vec!["BIO150", "CS101", "MATH200"]);
}

#[test]
fn test_duplicate_class_is_constraint_violation() {
    let mut persistence = create_test_store();
    persistence.create_class("CS101").unwrap();

    let result = persistence.create_class("CS101");

    assert!(matches!(
        result,
        Err(PersistenceError::ConstraintViolation { .. })
    ));
    assert_eq!(persistence.count_classes().unwrap(), 1);
}

#[test]
fn test_delete_absent_class_returns_zero() {
    let mut persistence = create_test_store();
    persistence.create_class("CS101").unwrap();

    assert_eq!(persistence.delete_class("CS999").unwrap(), 0);
    assert_eq!(persistence.delete_class("CS101").unwrap(), 1);
    assert_eq!(persistence.delete_class("CS101").unwrap(), 0);
}

#[test]
fn test_rename_class() {
    let mut persistence = create_test_store();
    persistence.create_class("CS101").unwrap();

    assert_eq!(persistence.rename_class("CS101", "CS102").unwrap(), 1);
    assert_eq!(persistence.rename_class("CS101", "CS103").unwrap(), 0);

    let classes = persistence.list_classes().unwrap();
    assert_eq!(classes.len(), 1);
    assert_eq!(classes[0].class_name, "CS102");
}

#[test]
fn test_rename_class_to_existing_name_is_constraint_violation() {
    let mut persistence = create_test_store();
    persistence.create_class("CS101").unwrap();
    persistence.create_class("CS102").unwrap();

    let result = persistence.rename_class("CS101", "CS102");

    assert!(matches!(
        result,
        Err(PersistenceError::ConstraintViolation { .. })
    ));
}

#[test]
fn test_rename_class_leaves_student_references() {
    let mut persistence = create_test_store();
    persistence.create_class("CS101").unwrap();
    persistence
        .create_student(&new_student("Bob", "R1", "CS101", "Dr. A"))
        .unwrap();

    persistence.rename_class("CS101", "CS102").unwrap();

    let students = persistence
        .list_students(&StudentFilter::scoped(Scope::All))
        .unwrap();
    assert_eq!(students[0].class_name.as_deref(), Some("CS101"));
}
