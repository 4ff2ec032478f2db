//! Core library modules for rollcall.
//!
//! ## Features
//!
//! - **Rules**: working-hours computation and attendance summaries
//! - **Forms**: single and bulk attendance entry, employee registration
//! - **Reporting**: dashboard aggregation, terminal tables and export
//! - **Infrastructure**: configuration, data storage and messaging
//!
//! ## Usage
//!
//! ```rust
//! use rollcall::libs::attendance::AttendanceRecord;
//! use rollcall::libs::summary::summarize;
//!
//! let date = chrono::NaiveDate::from_ymd_opt(2025, 6, 2).unwrap();
//! let records = vec![AttendanceRecord::new(1, date)];
//! assert_eq!(summarize(&records, 1).days_present, 1);
//! ```

pub mod attendance;
pub mod bulk;
pub mod config;
pub mod dashboard;
pub mod data_storage;
pub mod employee;
pub mod entry;
pub mod export;
pub mod formatter;
pub mod holiday;
pub mod messages;
pub mod source;
pub mod summary;
pub mod time;
pub mod validation;
pub mod view;
pub mod working_hours;
