//! # Rollcall - employee attendance tracking
//!
//! A command-line utility for registering employees, recording daily and bulk
//! attendance, and producing monthly attendance summaries.
//!
//! ## Features
//!
//! - **Working-hours rules**: overnight shifts, Sunday credit and a tolerance
//!   window for small shortfalls
//! - **Attendance entry**: single-employee and bulk forms with field-level
//!   validation
//! - **Summaries**: presence, absences, overtime and a signed day balance
//! - **Dashboard**: organization and per-department daily figures
//! - **Data Export**: CSV, JSON and Excel
//!
//! ## Usage
//!
//! ```rust,no_run
//! use rollcall::commands::Cli;
//!
//! fn main() -> anyhow::Result<()> {
//!     Cli::menu()
//! }
//! ```

pub mod commands;
pub mod db;
pub mod libs;
