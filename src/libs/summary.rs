//! Per-employee attendance statistics.
//!
//! A summary is derived from the full record set every time it is needed;
//! nothing is cached, so callers simply call [`summarize`] again after the
//! records change.
//!
//! ## Balance
//!
//! ```text
//! balance = days present - absences + floor(total overtime / overtime day)
//! ```
//!
//! With the default rules an overtime day is 8 hours: every 8 accumulated
//! overtime hours are credited as one extra day.

use anyhow::Result;
use chrono::Duration;
use serde::Serialize;

use super::{
    attendance::AttendanceRecord,
    config::RulesConfig,
    employee::{Employee, EmployeeId},
    formatter::{format_total, serialize_total},
    messages::Message,
};
use crate::msg_error_anyhow;

pub const DEFAULT_OVERTIME_DAY_HOURS: i64 = 8;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AttendanceSummary {
    pub days_present: usize,
    pub absents: usize,
    pub late_days: usize,
    #[serde(serialize_with = "serialize_total")]
    pub overtime: Duration,
    pub sundays_impacted: usize,
    pub balance: i64,
}

impl AttendanceSummary {
    /// Total overtime as `H:MM`.
    pub fn overtime_display(&self) -> String {
        format_total(&self.overtime)
    }

    /// Balance with an explicit sign for non-negative values, e.g. `+3`.
    pub fn balance_display(&self) -> String {
        if self.balance >= 0 {
            format!("+{}", self.balance)
        } else {
            self.balance.to_string()
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SummaryRules {
    overtime_day: Duration,
}

impl Default for SummaryRules {
    fn default() -> Self {
        Self::new(Duration::hours(DEFAULT_OVERTIME_DAY_HOURS))
    }
}

impl SummaryRules {
    pub fn new(overtime_day: Duration) -> Self {
        Self { overtime_day }
    }

    pub fn from_rules(rules: &RulesConfig) -> Result<Self> {
        let overtime_day = i64::try_from(rules.overtime_day_hours)
            .ok()
            .and_then(Duration::try_hours)
            .ok_or_else(|| {
                msg_error_anyhow!(Message::RuleOutOfRange(
                    "overtime_day_hours".to_string(),
                    rules.overtime_day_hours
                ))
            })?;
        Ok(Self::new(overtime_day))
    }

    pub fn summarize(&self, records: &[AttendanceRecord], employee_id: EmployeeId) -> AttendanceSummary {
        let own: Vec<&AttendanceRecord> = records.iter().filter(|r| r.employee_id == employee_id).collect();

        let days_present = own.iter().filter(|r| r.is_present()).count();
        let late_days = own.iter().filter(|r| r.is_late).count();
        let sundays_impacted = own.iter().filter(|r| r.is_sunday && !r.is_present()).count();
        let absents = own.len() - days_present;

        let overtime_minutes: i64 = own.iter().map(|r| r.overtime.num_minutes()).sum();
        let day_minutes = self.overtime_day.num_minutes();
        let overtime_days = if day_minutes > 0 { overtime_minutes.div_euclid(day_minutes) } else { 0 };

        AttendanceSummary {
            days_present,
            absents,
            late_days,
            overtime: Duration::minutes(overtime_minutes),
            sundays_impacted,
            balance: days_present as i64 - absents as i64 + overtime_days,
        }
    }

    /// One summary per employee, in roster order.
    pub fn summarize_all<'a>(
        &self,
        employees: &'a [Employee],
        records: &[AttendanceRecord],
    ) -> Vec<(&'a Employee, AttendanceSummary)> {
        employees.iter().map(|e| (e, self.summarize(records, e.id))).collect()
    }
}

/// [`SummaryRules::summarize`] with the default 8-hour overtime day.
pub fn summarize(records: &[AttendanceRecord], employee_id: EmployeeId) -> AttendanceSummary {
    SummaryRules::default().summarize(records, employee_id)
}

pub fn summarize_all<'a>(
    employees: &'a [Employee],
    records: &[AttendanceRecord],
) -> Vec<(&'a Employee, AttendanceSummary)> {
    SummaryRules::default().summarize_all(employees, records)
}
