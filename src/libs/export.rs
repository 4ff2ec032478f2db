//! Export of attendance data to CSV, JSON and Excel.
//!
//! Two data sets are available:
//!
//! - **Summary**: one row per employee with the statistics of
//!   [`summary`](super::summary) for the selected month.
//! - **Records**: every attendance record of the month with the employee name.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use rollcall::libs::export::{ExportData, ExportFormat, Exporter};
//! use rollcall::libs::summary::SummaryRules;
//!
//! let exporter = Exporter::new(ExportFormat::Csv, None);
//! let month = chrono::NaiveDate::from_ymd_opt(2025, 6, 1).unwrap();
//! let path = exporter.export(ExportData::Summary, month, &[], &[], &SummaryRules::default())?;
//! println!("{}", path.display());
//! # Ok::<(), anyhow::Error>(())
//! ```

use super::attendance::AttendanceRecord;
use super::employee::{self, Employee};
use super::formatter::format_duration;
use super::summary::SummaryRules;
use super::time;
use anyhow::Result;
use chrono::{Local, NaiveDate};
use rust_xlsxwriter::{Format, Workbook};
use serde::Serialize;
use std::fs::File;
use std::io::Write;
use std::path::PathBuf;

#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum ExportFormat {
    Csv,
    Json,
    /// `.xlsx` workbook with a bold header row.
    Excel,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum ExportData {
    /// Per-employee statistics for the month.
    Summary,
    /// Every record of the month.
    Records,
}

const SUMMARY_HEADERS: [&str; 9] = [
    "ID",
    "Name",
    "Department",
    "Days Present",
    "Absences",
    "Late Days",
    "Overtime",
    "Sundays Impacted",
    "Balance",
];

const RECORD_HEADERS: [&str; 9] = [
    "Employee ID",
    "Name",
    "Date",
    "In",
    "Out",
    "Working Hours",
    "Overtime",
    "Status",
    "Sunday",
];

#[derive(Debug, Serialize)]
struct ExportSummaryRow {
    id: i64,
    name: String,
    department: String,
    days_present: usize,
    absents: usize,
    late_days: usize,
    overtime: String,
    sundays_impacted: usize,
    balance: i64,
}

impl ExportSummaryRow {
    fn cells(&self) -> Vec<String> {
        vec![
            self.id.to_string(),
            self.name.clone(),
            self.department.clone(),
            self.days_present.to_string(),
            self.absents.to_string(),
            self.late_days.to_string(),
            self.overtime.clone(),
            self.sundays_impacted.to_string(),
            self.balance.to_string(),
        ]
    }
}

#[derive(Debug, Serialize)]
struct ExportRecordRow {
    employee_id: i64,
    name: String,
    date: String,
    in_time: String,
    out_time: String,
    working_hours: String,
    overtime: String,
    status: String,
    is_sunday: bool,
}

impl ExportRecordRow {
    fn cells(&self) -> Vec<String> {
        vec![
            self.employee_id.to_string(),
            self.name.clone(),
            self.date.clone(),
            self.in_time.clone(),
            self.out_time.clone(),
            self.working_hours.clone(),
            self.overtime.clone(),
            self.status.clone(),
            if self.is_sunday { "yes".to_string() } else { "no".to_string() },
        ]
    }
}

#[derive(Debug, Serialize)]
struct ExportDocument<T> {
    month: String,
    rows: Vec<T>,
}

pub struct Exporter {
    format: ExportFormat,
    output_path: PathBuf,
}

impl Exporter {
    /// Creates an exporter writing to `output_path`, or to
    /// `rollcall_export_<timestamp>.<ext>` in the working directory.
    pub fn new(format: ExportFormat, output_path: Option<PathBuf>) -> Self {
        let output_path = output_path.unwrap_or_else(|| {
            let extension = match format {
                ExportFormat::Csv => "csv",
                ExportFormat::Json => "json",
                ExportFormat::Excel => "xlsx",
            };
            PathBuf::from(format!("rollcall_export_{}.{}", Local::now().format("%Y%m%d_%H%M%S"), extension))
        });

        Self { format, output_path }
    }

    pub fn output_path(&self) -> &PathBuf {
        &self.output_path
    }

    /// Writes the selected data set and returns the path of the written file.
    pub fn export(
        &self,
        data: ExportData,
        month: NaiveDate,
        employees: &[Employee],
        records: &[AttendanceRecord],
        rules: &SummaryRules,
    ) -> Result<PathBuf> {
        let month_label = month.format("%m-%Y").to_string();

        match data {
            ExportData::Summary => {
                let rows = gather_summary_rows(employees, records, rules);
                let cells: Vec<Vec<String>> = rows.iter().map(ExportSummaryRow::cells).collect();
                self.write(&SUMMARY_HEADERS, &cells, &ExportDocument { month: month_label, rows })?;
            }
            ExportData::Records => {
                let rows = gather_record_rows(employees, records);
                let cells: Vec<Vec<String>> = rows.iter().map(ExportRecordRow::cells).collect();
                self.write(&RECORD_HEADERS, &cells, &ExportDocument { month: month_label, rows })?;
            }
        }

        tracing::debug!(path = %self.output_path.display(), "export written");
        Ok(self.output_path.clone())
    }

    fn write<T: Serialize>(&self, headers: &[&str], cells: &[Vec<String>], document: &T) -> Result<()> {
        match self.format {
            ExportFormat::Csv => self.write_csv(headers, cells),
            ExportFormat::Json => {
                let json = serde_json::to_string_pretty(document)?;
                File::create(&self.output_path)?.write_all(json.as_bytes())?;
                Ok(())
            }
            ExportFormat::Excel => self.write_excel(headers, cells),
        }
    }

    fn write_csv(&self, headers: &[&str], cells: &[Vec<String>]) -> Result<()> {
        let mut wtr = csv::Writer::from_path(&self.output_path)?;
        wtr.write_record(headers)?;
        for row in cells {
            wtr.write_record(row)?;
        }
        wtr.flush()?;
        Ok(())
    }

    fn write_excel(&self, headers: &[&str], cells: &[Vec<String>]) -> Result<()> {
        let mut workbook = Workbook::new();
        let worksheet = workbook.add_worksheet();

        let header_format = Format::new().set_bold().set_background_color(rust_xlsxwriter::Color::Gray);

        for (col, header) in headers.iter().enumerate() {
            worksheet.write_string_with_format(0, col as u16, *header, &header_format)?;
        }
        for (index, row) in cells.iter().enumerate() {
            for (col, value) in row.iter().enumerate() {
                worksheet.write_string(index as u32 + 1, col as u16, value)?;
            }
        }

        worksheet.autofit();

        workbook.save(&self.output_path)?;
        Ok(())
    }
}

fn gather_summary_rows(employees: &[Employee], records: &[AttendanceRecord], rules: &SummaryRules) -> Vec<ExportSummaryRow> {
    rules
        .summarize_all(employees, records)
        .into_iter()
        .map(|(employee, summary)| ExportSummaryRow {
            id: employee.id,
            name: employee.name.clone(),
            department: employee.department.clone(),
            days_present: summary.days_present,
            absents: summary.absents,
            late_days: summary.late_days,
            overtime: summary.overtime_display(),
            sundays_impacted: summary.sundays_impacted,
            balance: summary.balance,
        })
        .collect()
}

fn gather_record_rows(employees: &[Employee], records: &[AttendanceRecord]) -> Vec<ExportRecordRow> {
    records
        .iter()
        .map(|record| ExportRecordRow {
            employee_id: record.employee_id,
            name: employee::find(employees, record.employee_id)
                .map(|e| e.name.clone())
                .unwrap_or_default(),
            date: time::format_form_date(&record.date),
            in_time: record.in_time.as_ref().map(time::format_clock).unwrap_or_default(),
            out_time: record.out_time.as_ref().map(time::format_clock).unwrap_or_default(),
            working_hours: format_duration(&record.working_hours),
            overtime: format_duration(&record.overtime),
            status: record.status.to_string(),
            is_sunday: record.is_sunday,
        })
        .collect()
}
