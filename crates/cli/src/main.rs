// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Launcher for the attendance tracker.
//!
//! Opens (or creates) the database file, brings the schema up to date and
//! runs one of a handful of maintenance commands against it.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all,
    clippy::unwrap_used,
    clippy::expect_used
)]
#![allow(clippy::multiple_crate_versions)]

use std::path::PathBuf;

use attendance_api::{
    AuthService, LOGIN_FAILED_REASON, RegisterAdminRequest, ReportFilter, attendance_report,
    register_admin,
};
use attendance_domain::{AttendanceReportRow, parse_date};
use attendance_persistence::{Credentials, Persistence};
use clap::{Parser, Subcommand};
use color_eyre::eyre::{Context, Result, bail};
use time::Date;
use tracing::info;

fn main() -> Result<()> {
    color_eyre::install()?;
    let args: Args = Args::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    for line in args.run()? {
        println!("{line}");
    }
    Ok(())
}

/// Attendance tracker launcher
#[derive(Debug, Parser)]
#[command(name = "attendance", author, version, about, long_about = None)]
struct Args {
    /// Path to the `SQLite` database file. Created on first use.
    #[arg(short, long, env = "ATTENDANCE_DB", default_value = "attendance.db")]
    database: PathBuf,

    /// bcrypt work factor for newly stored passwords
    #[arg(long)]
    hash_cost: Option<u32>,

    #[command(subcommand)]
    command: Command,
}

impl Args {
    fn credentials(&self) -> Result<Credentials> {
        match self.hash_cost {
            Some(cost) => Credentials::with_cost(cost).wrap_err("invalid --hash-cost"),
            None => Ok(Credentials::default()),
        }
    }

    fn open(&self) -> Result<Persistence> {
        info!(database = %self.database.display(), "Opening attendance database");
        let credentials: Credentials = self.credentials()?;
        let persistence: Persistence = Persistence::new_with_file(&self.database)
            .wrap_err_with(|| format!("failed to open {}", self.database.display()))?;
        Ok(persistence.with_credentials(credentials))
    }

    fn run(self) -> Result<Vec<String>> {
        let persistence: Persistence = self.open()?;
        self.command.run(persistence)
    }
}

#[derive(Clone, Debug, Subcommand)]
enum Command {
    /// Create the database tables if they do not exist yet
    Init,

    /// Register an administrator account
    RegisterAdmin { username: String, password: String },

    /// Check a username and password and print the resolved role
    Login { username: String, password: String },

    /// Print the attendance report visible to the given account
    Report {
        username: String,
        password: String,

        /// Only include students of this class
        #[arg(long = "class")]
        class_name: Option<String>,

        /// First day of the range (YYYY-MM-DD)
        #[arg(long, value_parser = parse_date_arg, requires = "to")]
        from: Option<Date>,

        /// Last day of the range (YYYY-MM-DD)
        #[arg(long, value_parser = parse_date_arg, requires = "from")]
        to: Option<Date>,
    },
}

impl Command {
    fn run(self, mut persistence: Persistence) -> Result<Vec<String>> {
        match self {
            Self::Init => {
                persistence.init_schema().wrap_err("schema initialisation failed")?;
                Ok(vec![String::from("Database ready")])
            }
            Self::RegisterAdmin { username, password } => {
                let request: RegisterAdminRequest = RegisterAdminRequest {
                    username,
                    confirmation: password.clone(),
                    password,
                };
                let session = register_admin(&mut persistence, &request)?;
                Ok(vec![format!("Registered administrator '{}'", session.username)])
            }
            Self::Login { username, password } => {
                let mut service: AuthService = AuthService::new(persistence);
                match service.login(&username, &password)? {
                    Some(role) => Ok(vec![format!("{username}: {role}")]),
                    None => bail!("Login failed: {LOGIN_FAILED_REASON}"),
                }
            }
            Self::Report {
                username,
                password,
                class_name,
                from,
                to,
            } => {
                let mut service: AuthService = AuthService::new(persistence);
                let session = service.authenticate(&username, &password)?;
                let filter: ReportFilter = ReportFilter {
                    class_name,
                    from,
                    to,
                };
                let rows: Vec<AttendanceReportRow> =
                    attendance_report(service.persistence_mut(), &session, &filter)?;
                Ok(rows.iter().map(format_report_row).collect())
            }
        }
    }
}

fn parse_date_arg(value: &str) -> Result<Date, String> {
    parse_date(value).map_err(|e| e.to_string())
}

fn format_report_row(row: &AttendanceReportRow) -> String {
    format!(
        "{}\t{}\t{}\t{}",
        row.date, row.student_name, row.roll_number, row.status
    )
}

#[cfg(test)]
mod tests {
    #![allow(clippy::expect_used, clippy::unwrap_used)]

    use super::*;
    use attendance_api::{
        CreateInstructorRequest, CreateStudentRequest, Session, create_class, create_instructor,
        create_student, mark_attendance_by_roll,
    };
    use attendance_domain::{AttendanceStatus, Role};
    use attendance_persistence::MIN_COST;
    use std::path::Path;
    use std::sync::atomic::{AtomicU64, Ordering};

    static DB_COUNTER: AtomicU64 = AtomicU64::new(0);

    /// Returns a fresh database path under the system temp directory.
    fn temp_db_path() -> PathBuf {
        let id: u64 = DB_COUNTER.fetch_add(1, Ordering::SeqCst);
        std::env::temp_dir().join(format!("attendance_cli_{}_{id}.db", std::process::id()))
    }

    fn remove_db(path: &Path) {
        for suffix in ["", "-wal", "-shm"] {
            let mut file = path.as_os_str().to_os_string();
            file.push(suffix);
            let _ = std::fs::remove_file(file);
        }
    }

    fn parse(path: &Path, rest: &[&str]) -> Args {
        let cost: String = MIN_COST.to_string();
        let mut argv: Vec<&str> = vec![
            "attendance",
            "--database",
            path.to_str().unwrap(),
            "--hash-cost",
            &cost,
        ];
        argv.extend_from_slice(rest);
        Args::try_parse_from(argv).unwrap()
    }

    #[test]
    fn test_default_database_path() {
        let args: Args = Args::try_parse_from(["attendance", "init"]).unwrap();
        if std::env::var_os("ATTENDANCE_DB").is_none() {
            assert_eq!(args.database, PathBuf::from("attendance.db"));
        }
        assert!(args.hash_cost.is_none());
        assert!(matches!(args.command, Command::Init));
    }

    #[test]
    fn test_report_range_requires_both_ends() {
        let result = Args::try_parse_from([
            "attendance",
            "report",
            "admin",
            "secret",
            "--from",
            "2026-03-01",
        ]);
        assert!(result.is_err());
    }

    #[test]
    fn test_report_rejects_malformed_date() {
        let result = Args::try_parse_from([
            "attendance",
            "report",
            "admin",
            "secret",
            "--from",
            "03/01/2026",
            "--to",
            "2026-03-31",
        ]);
        assert!(result.is_err());
    }

    #[test]
    fn test_invalid_hash_cost_is_rejected() {
        let path: PathBuf = temp_db_path();
        let args: Args = Args::try_parse_from([
            "attendance",
            "--database",
            path.to_str().unwrap(),
            "--hash-cost",
            "99",
            "init",
        ])
        .unwrap();
        assert!(args.run().is_err());
        remove_db(&path);
    }

    #[test]
    fn test_init_is_repeatable() {
        let path: PathBuf = temp_db_path();
        let first: Vec<String> = parse(&path, &["init"]).run().unwrap();
        let second: Vec<String> = parse(&path, &["init"]).run().unwrap();
        assert_eq!(first, vec![String::from("Database ready")]);
        assert_eq!(first, second);
        remove_db(&path);
    }

    #[test]
    fn test_register_then_login() {
        let path: PathBuf = temp_db_path();
        let registered: Vec<String> = parse(&path, &["register-admin", "admin", "s3cret!"])
            .run()
            .unwrap();
        assert_eq!(registered, vec![String::from("Registered administrator 'admin'")]);

        let login: Vec<String> = parse(&path, &["login", "admin", "s3cret!"]).run().unwrap();
        assert_eq!(login, vec![String::from("admin: Admin")]);

        assert!(parse(&path, &["login", "admin", "wrong"]).run().is_err());
        assert!(parse(&path, &["login", "nobody", "s3cret!"]).run().is_err());
        remove_db(&path);
    }

    #[test]
    fn test_duplicate_admin_is_rejected() {
        let path: PathBuf = temp_db_path();
        parse(&path, &["register-admin", "admin", "s3cret!"])
            .run()
            .unwrap();
        assert!(
            parse(&path, &["register-admin", "admin", "other-pass"])
                .run()
                .is_err()
        );
        remove_db(&path);
    }

    #[test]
    fn test_report_lists_instructor_rows() {
        let path: PathBuf = temp_db_path();
        {
            let mut persistence: Persistence = Persistence::new_with_file(&path)
                .unwrap()
                .with_credentials(Credentials::with_cost(MIN_COST).unwrap());
            let admin: Session = Session::new(String::from("admin"), Role::Admin);
            create_class(&mut persistence, &admin, "CS101").unwrap();
            create_instructor(
                &mut persistence,
                &admin,
                &CreateInstructorRequest {
                    name: String::from("Dr. A"),
                    instructor_id: String::from("I-1"),
                    email: None,
                    department: Some(String::from("CS101")),
                },
            )
            .unwrap();

            let instructor: Session = Session::new(String::from("Dr. A"), Role::Instructor);
            create_student(
                &mut persistence,
                &instructor,
                &CreateStudentRequest {
                    name: String::from("Bob"),
                    roll_number: String::from("R1"),
                    email: None,
                    class_name: Some(String::from("CS101")),
                    instructor_username: None,
                },
            )
            .unwrap();
            mark_attendance_by_roll(
                &mut persistence,
                &instructor,
                "R1",
                AttendanceStatus::Present,
                parse_date("2026-03-02").unwrap(),
            )
            .unwrap();
        }

        let rows: Vec<String> = parse(
            &path,
            &[
                "report",
                "Dr. A",
                "12345",
                "--class",
                "CS101",
                "--from",
                "2026-03-01",
                "--to",
                "2026-03-31",
            ],
        )
        .run()
        .unwrap();
        assert_eq!(rows, vec![String::from("2026-03-02\tBob\tR1\tPresent")]);

        assert!(parse(&path, &["report", "Dr. A", "wrong"]).run().is_err());
        remove_db(&path);
    }
}
