use crate::db::db::{conversion_error, Db, DATE_COLUMN_FORMAT};
use crate::db::employees::optional_clock;
use crate::libs::attendance::{AttendanceRecord, AttendanceStatus};
use crate::libs::employee::EmployeeId;
use crate::libs::time;
use anyhow::Result;
use chrono::{Duration, NaiveDate};
use rusqlite::{params, Connection, Row};

const SCHEMA_ATTENDANCE: &str = "CREATE TABLE IF NOT EXISTS attendance (
    id INTEGER PRIMARY KEY,
    employee_id INTEGER NOT NULL,
    date DATE NOT NULL,
    in_time TEXT,
    out_time TEXT,
    working_minutes INTEGER NOT NULL DEFAULT 0,
    overtime_minutes INTEGER NOT NULL DEFAULT 0,
    status TEXT NOT NULL,
    is_late BOOLEAN NOT NULL DEFAULT 0,
    is_holiday BOOLEAN NOT NULL DEFAULT 0,
    is_sunday BOOLEAN NOT NULL DEFAULT 0,
    FOREIGN KEY (employee_id) REFERENCES employees(id) ON DELETE CASCADE
)";
const INDEX_EMPLOYEE_DATE: &str =
    "CREATE UNIQUE INDEX IF NOT EXISTS idx_attendance_employee_date ON attendance (employee_id, date)";
const UPSERT_RECORD: &str = "INSERT INTO attendance
    (employee_id, date, in_time, out_time, working_minutes, overtime_minutes, status, is_late, is_holiday, is_sunday)
    VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10)
    ON CONFLICT (employee_id, date) DO UPDATE SET
        in_time = excluded.in_time,
        out_time = excluded.out_time,
        working_minutes = excluded.working_minutes,
        overtime_minutes = excluded.overtime_minutes,
        status = excluded.status,
        is_late = excluded.is_late,
        is_holiday = excluded.is_holiday,
        is_sunday = excluded.is_sunday";
const SELECT_COLUMNS: &str = "SELECT employee_id, date, in_time, out_time, working_minutes, overtime_minutes,
    status, is_late, is_holiday, is_sunday FROM attendance";

pub struct AttendanceRecords {
    conn: Connection,
}

impl AttendanceRecords {
    pub fn new() -> Result<Self> {
        let db = Db::new()?;
        db.conn.execute(SCHEMA_ATTENDANCE, [])?;
        db.conn.execute(INDEX_EMPLOYEE_DATE, [])?;
        Ok(AttendanceRecords { conn: db.conn })
    }

    /// Inserts a record, replacing any existing record for the same employee
    /// and date.
    pub fn upsert(&mut self, record: &AttendanceRecord) -> Result<()> {
        upsert_with(&self.conn, record)?;
        Ok(())
    }

    /// Upserts all records in a single transaction.
    pub fn save_all(&mut self, records: &[AttendanceRecord]) -> Result<usize> {
        let tx = self.conn.transaction()?;
        for record in records {
            upsert_with(&tx, record)?;
        }
        tx.commit()?;
        tracing::debug!(count = records.len(), "attendance records saved");
        Ok(records.len())
    }

    pub fn fetch_day(&mut self, date: NaiveDate) -> Result<Vec<AttendanceRecord>> {
        self.query(
            &format!("{SELECT_COLUMNS} WHERE date = ?1 ORDER BY employee_id"),
            params![date.format(DATE_COLUMN_FORMAT).to_string()],
        )
    }

    /// Records of the calendar month containing `date`.
    pub fn fetch_month(&mut self, date: NaiveDate) -> Result<Vec<AttendanceRecord>> {
        self.query(
            &format!("{SELECT_COLUMNS} WHERE strftime('%Y-%m', date) = strftime('%Y-%m', ?1) ORDER BY date, employee_id"),
            params![date.format(DATE_COLUMN_FORMAT).to_string()],
        )
    }

    pub fn fetch_for_employee(&mut self, employee_id: EmployeeId) -> Result<Vec<AttendanceRecord>> {
        self.query(
            &format!("{SELECT_COLUMNS} WHERE employee_id = ?1 ORDER BY date"),
            params![employee_id],
        )
    }

    pub fn fetch_all(&mut self) -> Result<Vec<AttendanceRecord>> {
        self.query(&format!("{SELECT_COLUMNS} ORDER BY date, employee_id"), params![])
    }

    fn query(&mut self, sql: &str, params: &[&dyn rusqlite::ToSql]) -> Result<Vec<AttendanceRecord>> {
        let mut stmt = self.conn.prepare(sql)?;
        let record_iter = stmt.query_map(params, map_record)?;

        let mut records = Vec::new();
        for record in record_iter {
            records.push(record?);
        }
        Ok(records)
    }
}

fn upsert_with(conn: &Connection, record: &AttendanceRecord) -> rusqlite::Result<usize> {
    conn.execute(
        UPSERT_RECORD,
        params![
            record.employee_id,
            record.date.format(DATE_COLUMN_FORMAT).to_string(),
            record.in_time.as_ref().map(time::format_clock),
            record.out_time.as_ref().map(time::format_clock),
            record.working_hours.num_minutes(),
            record.overtime.num_minutes(),
            record.status.as_str(),
            record.is_late,
            record.is_holiday,
            record.is_sunday,
        ],
    )
}

fn map_record(row: &Row) -> rusqlite::Result<AttendanceRecord> {
    let date: String = row.get(1)?;
    let status: String = row.get(6)?;

    Ok(AttendanceRecord {
        employee_id: row.get(0)?,
        date: NaiveDate::parse_from_str(&date, DATE_COLUMN_FORMAT).map_err(|_| conversion_error(1, &date, "date"))?,
        in_time: optional_clock(2, row.get(2)?)?,
        out_time: optional_clock(3, row.get(3)?)?,
        working_hours: Duration::minutes(row.get(4)?),
        overtime: Duration::minutes(row.get(5)?),
        status: AttendanceStatus::parse(&status).ok_or_else(|| conversion_error(6, &status, "attendance status"))?,
        is_late: row.get(7)?,
        is_holiday: row.get(8)?,
        is_sunday: row.get(9)?,
    })
}
