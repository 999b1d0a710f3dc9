// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Read-only queries.
//!
//! ## Module Organization
//!
//! - `users` — Account lookups
//! - `instructors` — Instructor listings and lookups
//! - `students` — Scoped student listings and lookups
//! - `classes` — Class listings
//! - `attendance` — Scoped attendance reports and counts
//!
//! Every function takes the live connection and uses Diesel DSL with bound
//! parameters. Student and attendance queries take a `Scope` and filter on
//! the owning instructor when it is restricted.

pub mod attendance;
pub mod classes;
pub mod instructors;
pub mod students;
pub mod users;
