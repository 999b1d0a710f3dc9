// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Write operations.
//!
//! Updates and deletes address rows by natural key and return the number
//! of rows affected; an absent key affects zero rows and is not an error.
//! Multi-row writes run inside a single transaction.

pub mod attendance;
pub mod classes;
pub mod instructors;
pub mod students;
pub mod users;
