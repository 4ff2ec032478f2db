//! SQLite persistence for rollcall.
//!
//! Every table type opens its own connection to `rollcall.db` in the data
//! directory and creates its schema on construction, so a fresh install needs
//! no setup step.
//!
//! ```rust,no_run
//! use rollcall::db::employees::Employees;
//!
//! let mut employees = Employees::new()?;
//! for employee in employees.list()? {
//!     println!("{} {}", employee.id, employee.name);
//! }
//! # Ok::<(), anyhow::Error>(())
//! ```

/// Connection setup and shared column helpers.
pub mod db;

/// Attendance records, one per employee and date.
pub mod attendance;

/// Registered employees.
pub mod employees;

/// Named holidays.
pub mod holidays;

/// Source and sink implementations over the tables.
pub mod store;
