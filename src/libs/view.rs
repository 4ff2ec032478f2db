use super::attendance::AttendanceRecord;
use super::bulk::BulkRow;
use super::dashboard::{DashboardStats, DepartmentSummary};
use super::employee::{self, Employee};
use super::formatter::format_duration;
use super::holiday::Holiday;
use super::summary::AttendanceSummary;
use super::time;
use anyhow::Result;
use prettytable::{format, row, Table};

fn clock_or_dash(clock: &Option<chrono::NaiveTime>) -> String {
    clock.as_ref().map(time::format_clock).unwrap_or_else(|| "-".to_string())
}

fn yes_no(flag: bool) -> &'static str {
    if flag {
        "yes"
    } else {
        "no"
    }
}

pub struct View {}

impl View {
    pub fn employees(employees: &[Employee]) -> Result<()> {
        let mut table = Table::new();

        table.add_row(row!["ID", "NAME", "DEPARTMENT", "STATUS", "JOINED", "HOURS", "SHIFT"]);
        for employee in employees {
            table.add_row(row![
                employee.id,
                employee.name,
                employee.department,
                employee.status,
                time::format_form_date(&employee.date_of_joining),
                employee.allocated_hours.as_ref().map(format_duration).unwrap_or_else(|| "-".to_string()),
                format!("{} - {}", clock_or_dash(&employee.shift_start), clock_or_dash(&employee.shift_end)),
            ]);
        }
        table.printstd();

        Ok(())
    }

    /// An employee's details followed by their attendance statistics.
    pub fn employee_card(employee: &Employee, summary: &AttendanceSummary) -> Result<()> {
        let mut table = Table::new();
        table.set_format(*format::consts::FORMAT_NO_BORDER_LINE_SEPARATOR);

        table.add_row(row!["Department", employee.department]);
        table.add_row(row!["Status", employee.status]);
        table.add_row(row!["Joined", time::format_form_date(&employee.date_of_joining)]);
        table.add_row(row!["Days present", summary.days_present]);
        table.add_row(row!["Absences", summary.absents]);
        table.add_row(row!["Late days", summary.late_days]);
        table.add_row(row!["Overtime", summary.overtime_display()]);
        table.add_row(row!["Sundays impacted", summary.sundays_impacted]);
        table.add_row(row!["Balance", summary.balance_display()]);
        table.printstd();

        Ok(())
    }

    pub fn records(records: &[AttendanceRecord], employees: &[Employee]) -> Result<()> {
        let mut table = Table::new();

        table.add_row(row!["ID", "NAME", "DATE", "IN", "OUT", "HOURS", "OVERTIME", "STATUS", "SUNDAY"]);
        for record in records {
            let name = employee::find(employees, record.employee_id)
                .map(|e| e.name.as_str())
                .unwrap_or("-");
            table.add_row(row![
                record.employee_id,
                name,
                time::format_form_date(&record.date),
                clock_or_dash(&record.in_time),
                clock_or_dash(&record.out_time),
                format_duration(&record.working_hours),
                format_duration(&record.overtime),
                record.status,
                yes_no(record.is_sunday),
            ]);
        }
        table.printstd();

        Ok(())
    }

    pub fn bulk_rows(rows: &[&BulkRow]) -> Result<()> {
        let mut table = Table::new();

        table.add_row(row!["", "ID", "NAME", "DEPARTMENT", "IN", "OUT", "ATTENDANCE"]);
        for bulk_row in rows {
            let mark = if bulk_row.selected { "x" } else { " " };
            table.add_row(row![
                mark,
                bulk_row.employee_id,
                bulk_row.name,
                bulk_row.department,
                clock_or_dash(&bulk_row.in_time),
                clock_or_dash(&bulk_row.out_time),
                bulk_row.attendance,
            ]);
        }
        table.printstd();

        Ok(())
    }

    pub fn summaries(summaries: &[(&Employee, AttendanceSummary)]) -> Result<()> {
        let mut table = Table::new();

        table.add_row(row!["ID", "NAME", "DEPARTMENT", "PRESENT", "ABSENT", "LATE", "OVERTIME", "SUNDAYS", "BALANCE"]);
        for (employee, summary) in summaries {
            table.add_row(row![
                employee.id,
                employee.name,
                employee.department,
                summary.days_present,
                summary.absents,
                summary.late_days,
                summary.overtime_display(),
                summary.sundays_impacted,
                summary.balance_display(),
            ]);
        }
        table.printstd();

        Ok(())
    }

    pub fn dashboard(stats: &DashboardStats) -> Result<()> {
        let mut table = Table::new();

        table.add_row(row!["PRESENT", "ABSENT", "LATE", "OVERTIME", "SUNDAYS WORKED", "RATE"]);
        table.add_row(row![
            stats.present,
            stats.absent,
            stats.late,
            stats.overtime_records,
            stats.sundays_worked,
            format!("{}%", stats.attendance_rate),
        ]);
        table.printstd();

        Ok(())
    }

    pub fn departments(departments: &[DepartmentSummary]) -> Result<()> {
        let mut table = Table::new();

        table.add_row(row!["DEPARTMENT", "EMPLOYEES", "PRESENT", "ABSENT", "LATE"]);
        for department in departments {
            table.add_row(row![
                department.name,
                department.total_employees,
                department.present_today,
                department.absent_today,
                department.late_today,
            ]);
        }
        table.printstd();

        Ok(())
    }

    pub fn holidays(holidays: &[Holiday]) -> Result<()> {
        let mut table = Table::new();

        table.add_row(row!["DATE", "NAME"]);
        for holiday in holidays {
            table.add_row(row![time::format_form_date(&holiday.date), holiday.name]);
        }
        table.printstd();

        Ok(())
    }
}
