// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Tests for role-based authorization of administrator actions.

use crate::tests::helpers::{
    create_test_admin, create_test_instructor_session, create_test_store, seed_instructor,
};
use crate::{
    ApiError, AuthError, AuthorizationService, CreateInstructorRequest, assign_class,
    create_class, create_instructor, delete_class, delete_instructor, list_classes,
    list_instructors, rename_class,
};

fn assert_unauthorized<T: std::fmt::Debug>(result: Result<T, ApiError>, expected_action: &str) {
    match result {
        Err(ApiError::Unauthorized {
            action,
            required_role,
        }) => {
            assert_eq!(action, expected_action);
            assert_eq!(required_role, "Admin");
        }
        other => panic!("Expected Unauthorized, got {other:?}"),
    }
}

#[test]
fn test_require_admin() {
    assert!(AuthorizationService::require_admin(&create_test_admin(), "anything").is_ok());

    let err =
        AuthorizationService::require_admin(&create_test_instructor_session("Dr. A"), "anything")
            .unwrap_err();
    assert_eq!(
        err,
        AuthError::Unauthorized {
            action: String::from("anything"),
            required_role: String::from("Admin"),
        }
    );
}

#[test]
fn test_instructor_cannot_manage_instructors() {
    let mut persistence = create_test_store();
    seed_instructor(&mut persistence, "Dr. A", "I1");
    let session = create_test_instructor_session("Dr. A");

    let request = CreateInstructorRequest {
        name: String::from("Dr. B"),
        instructor_id: String::from("I2"),
        ..CreateInstructorRequest::default()
    };
    assert_unauthorized(
        create_instructor(&mut persistence, &session, &request),
        "create_instructor",
    );
    assert_unauthorized(
        list_instructors(&mut persistence, &session),
        "list_instructors",
    );
    assert_unauthorized(
        delete_instructor(&mut persistence, &session, "I1"),
        "delete_instructor",
    );
    assert_unauthorized(
        assign_class(&mut persistence, &session, "Dr. A", "CS101"),
        "assign_class",
    );

    assert_eq!(persistence.count_instructors().unwrap(), 1);
}

#[test]
fn test_instructor_cannot_change_classes_but_can_list_them() {
    let mut persistence = create_test_store();
    create_class(&mut persistence, &create_test_admin(), "CS101").unwrap();
    let session = create_test_instructor_session("Dr. A");

    assert_unauthorized(
        create_class(&mut persistence, &session, "CS102"),
        "create_class",
    );
    assert_unauthorized(
        rename_class(&mut persistence, &session, "CS101", "CS102"),
        "rename_class",
    );
    assert_unauthorized(
        delete_class(&mut persistence, &session, "CS101"),
        "delete_class",
    );

    let classes = list_classes(&mut persistence, &session).unwrap();
    assert_eq!(classes.len(), 1);
    assert_eq!(classes[0].class_name, "CS101");
}
