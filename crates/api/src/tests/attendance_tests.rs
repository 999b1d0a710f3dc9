// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Tests for attendance taking and reports, including the full
//! class → instructor → login → student → attendance flow.

use attendance_domain::{AttendanceEntry, AttendanceReportRow, AttendanceStatus, Role, today};
use attendance_persistence::Persistence;

use crate::tests::helpers::{
    create_test_admin, create_test_instructor_session, create_test_store, student_request,
    test_date,
};
use crate::{
    ApiError, AuthService, CreateInstructorRequest, ReportFilter, attendance_report,
    create_class, create_instructor, create_student, mark_attendance, mark_attendance_by_roll,
    mark_attendance_on,
};

/// Returns the ids of Bob (Dr. A, CS101) and Carol (Dr. B, MATH200).
fn seed(persistence: &mut Persistence) -> (i64, i64) {
    let bob = create_student(
        persistence,
        &create_test_instructor_session("Dr. A"),
        &student_request("Bob", "R1", "CS101"),
    )
    .unwrap();
    let carol = create_student(
        persistence,
        &create_test_instructor_session("Dr. B"),
        &student_request("Carol", "R3", "MATH200"),
    )
    .unwrap();
    (bob, carol)
}

#[test]
fn test_end_to_end_instructor_flow() {
    let mut persistence = create_test_store();
    let admin = create_test_admin();
    create_class(&mut persistence, &admin, "CS101").unwrap();
    let request = CreateInstructorRequest {
        name: String::from("Dr. A"),
        instructor_id: String::from("I1"),
        ..CreateInstructorRequest::default()
    };
    create_instructor(&mut persistence, &admin, &request).unwrap();

    let mut service = AuthService::new(persistence);
    assert_eq!(
        service.login("Dr. A", "12345").unwrap(),
        Some(Role::Instructor)
    );
    let session = service.authenticate("Dr. A", "12345").unwrap();

    let persistence = service.persistence_mut();
    let bob = create_student(persistence, &session, &student_request("Bob", "R1", "CS101"))
        .unwrap();
    let day = test_date(2);
    mark_attendance_on(
        persistence,
        &session,
        &[AttendanceEntry::new(bob, AttendanceStatus::Present)],
        day,
    )
    .unwrap();

    let rows = attendance_report(persistence, &session, &ReportFilter::default()).unwrap();
    assert_eq!(
        rows,
        vec![AttendanceReportRow {
            date: String::from("2026-03-02"),
            student_name: String::from("Bob"),
            roll_number: String::from("R1"),
            status: AttendanceStatus::Present,
        }]
    );
}

#[test]
fn test_mark_attendance_uses_today() {
    let mut persistence = create_test_store();
    let (bob, _) = seed(&mut persistence);
    let before = attendance_domain::format_date(today());

    mark_attendance(
        &mut persistence,
        &create_test_admin(),
        &[AttendanceEntry::new(bob, AttendanceStatus::Absent)],
    )
    .unwrap();

    let after = attendance_domain::format_date(today());
    let rows = attendance_report(&mut persistence, &create_test_admin(), &ReportFilter::default())
        .unwrap();
    assert_eq!(rows.len(), 1);
    assert!(rows[0].date == before || rows[0].date == after);
}

#[test]
fn test_instructor_cannot_mark_other_students() {
    let mut persistence = create_test_store();
    let (bob, carol) = seed(&mut persistence);

    let result = mark_attendance_on(
        &mut persistence,
        &create_test_instructor_session("Dr. A"),
        &[
            AttendanceEntry::new(bob, AttendanceStatus::Present),
            AttendanceEntry::new(carol, AttendanceStatus::Present),
        ],
        test_date(2),
    );

    assert!(matches!(
        result,
        Err(ApiError::ResourceNotFound { ref resource_type, .. }) if resource_type == "Student"
    ));
    assert!(
        attendance_report(&mut persistence, &create_test_admin(), &ReportFilter::default())
            .unwrap()
            .is_empty()
    );
}

#[test]
fn test_mark_attendance_by_roll() {
    let mut persistence = create_test_store();
    seed(&mut persistence);
    let dr_b = create_test_instructor_session("Dr. B");

    mark_attendance_by_roll(
        &mut persistence,
        &dr_b,
        "R3",
        AttendanceStatus::Absent,
        test_date(4),
    )
    .unwrap();

    let result = mark_attendance_by_roll(
        &mut persistence,
        &dr_b,
        "R1",
        AttendanceStatus::Present,
        test_date(4),
    );
    assert!(matches!(result, Err(ApiError::ResourceNotFound { .. })));

    let rows = attendance_report(&mut persistence, &dr_b, &ReportFilter::default()).unwrap();
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].status, AttendanceStatus::Absent);
}

#[test]
fn test_report_is_scoped_and_newest_first() {
    let mut persistence = create_test_store();
    let (bob, carol) = seed(&mut persistence);
    let admin = create_test_admin();
    for (day, status) in [(2, AttendanceStatus::Present), (9, AttendanceStatus::Absent)] {
        mark_attendance_on(
            &mut persistence,
            &admin,
            &[
                AttendanceEntry::new(bob, status),
                AttendanceEntry::new(carol, status),
            ],
            test_date(day),
        )
        .unwrap();
    }

    let all = attendance_report(&mut persistence, &admin, &ReportFilter::default()).unwrap();
    let dr_a = attendance_report(
        &mut persistence,
        &create_test_instructor_session("Dr. A"),
        &ReportFilter::default(),
    )
    .unwrap();

    assert_eq!(all.len(), 4);
    assert_eq!(all[0].date, "2026-03-09");
    assert_eq!(all[3].date, "2026-03-02");
    assert_eq!(dr_a.len(), 2);
    assert!(dr_a.iter().all(|row| row.roll_number == "R1"));
    assert_eq!(dr_a[0].status, AttendanceStatus::Absent);
}

#[test]
fn test_report_filters() {
    let mut persistence = create_test_store();
    let (bob, carol) = seed(&mut persistence);
    let admin = create_test_admin();
    for day in [1, 5, 10] {
        mark_attendance_on(
            &mut persistence,
            &admin,
            &[
                AttendanceEntry::new(bob, AttendanceStatus::Present),
                AttendanceEntry::new(carol, AttendanceStatus::Present),
            ],
            test_date(day),
        )
        .unwrap();
    }

    let by_class = ReportFilter {
        class_name: Some(String::from("CS101")),
        ..ReportFilter::default()
    };
    assert_eq!(
        attendance_report(&mut persistence, &admin, &by_class)
            .unwrap()
            .len(),
        3
    );

    let by_range = ReportFilter {
        class_name: Some(String::from("MATH200")),
        from: Some(test_date(5)),
        to: Some(test_date(10)),
    };
    let dates: Vec<String> = attendance_report(&mut persistence, &admin, &by_range)
        .unwrap()
        .into_iter()
        .map(|row| row.date)
        .collect();
    assert_eq!(dates, vec!["2026-03-10", "2026-03-05"]);

    let open_ended = ReportFilter {
        from: Some(test_date(5)),
        ..ReportFilter::default()
    };
    assert_eq!(
        attendance_report(&mut persistence, &admin, &open_ended)
            .unwrap()
            .len(),
        6
    );
}

#[test]
fn test_report_rejects_inverted_range() {
    let mut persistence = create_test_store();
    let filter = ReportFilter {
        class_name: None,
        from: Some(test_date(10)),
        to: Some(test_date(1)),
    };

    let result = attendance_report(&mut persistence, &create_test_admin(), &filter);

    assert!(matches!(
        result,
        Err(ApiError::InvalidInput { ref field, .. }) if field == "date_range"
    ));
}
