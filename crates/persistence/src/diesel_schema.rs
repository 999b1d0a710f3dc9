// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

diesel::table! {
    attendance (id) {
        id -> BigInt,
        student_id -> BigInt,
        date -> Text,
        status -> Text,
    }
}

diesel::table! {
    classes (id) {
        id -> BigInt,
        class_name -> Text,
    }
}

diesel::table! {
    instructors (id) {
        id -> BigInt,
        name -> Text,
        instructor_id -> Text,
        email -> Nullable<Text>,
        department -> Nullable<Text>,
    }
}

diesel::table! {
    students (id) {
        id -> BigInt,
        name -> Text,
        roll_number -> Text,
        email -> Nullable<Text>,
        class_name -> Nullable<Text>,
        photo -> Nullable<Binary>,
        instructor_username -> Nullable<Text>,
    }
}

diesel::table! {
    users (id) {
        id -> BigInt,
        username -> Text,
        password -> Text,
        role -> Text,
    }
}

diesel::joinable!(attendance -> students (student_id));

diesel::allow_tables_to_appear_in_same_query!(attendance, classes, instructors, students, users,);
