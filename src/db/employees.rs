use crate::db::db::{conversion_error, Db, DATE_COLUMN_FORMAT};
use crate::libs::employee::{Employee, EmployeeId, EmploymentStatus, NewEmployee};
use crate::libs::messages::Message;
use crate::libs::time;
use crate::msg_error_anyhow;
use anyhow::Result;
use chrono::{Duration, NaiveDate};
use rusqlite::{params, Connection, OptionalExtension, Row};

const SCHEMA_EMPLOYEES: &str = "CREATE TABLE IF NOT EXISTS employees (
    id INTEGER PRIMARY KEY,
    name TEXT NOT NULL,
    department TEXT NOT NULL,
    status TEXT NOT NULL,
    date_of_joining DATE NOT NULL,
    allocated_minutes INTEGER,
    shift_start TEXT,
    shift_end TEXT
)";
const INSERT_EMPLOYEE: &str = "INSERT INTO employees
    (name, department, status, date_of_joining, allocated_minutes, shift_start, shift_end)
    VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)";
const SELECT_ALL: &str = "SELECT id, name, department, status, date_of_joining, allocated_minutes, shift_start, shift_end
    FROM employees ORDER BY id";
const SELECT_BY_ID: &str = "SELECT id, name, department, status, date_of_joining, allocated_minutes, shift_start, shift_end
    FROM employees WHERE id = ?1";

pub struct Employees {
    conn: Connection,
}

impl Employees {
    pub fn new() -> Result<Self> {
        let db = Db::new()?;
        db.conn.execute(SCHEMA_EMPLOYEES, [])?;
        Ok(Employees { conn: db.conn })
    }

    /// Stores a validated registration and returns it with its new identifier.
    pub fn insert(&mut self, employee: &NewEmployee) -> Result<Employee> {
        self.conn.execute(
            INSERT_EMPLOYEE,
            params![
                employee.name,
                employee.department,
                employee.status.as_str(),
                employee.date_of_joining.format(DATE_COLUMN_FORMAT).to_string(),
                employee.allocated_hours.map(|d| d.num_minutes()),
                employee.shift_start.as_ref().map(time::format_clock),
                employee.shift_end.as_ref().map(time::format_clock),
            ],
        )?;
        let id = self.conn.last_insert_rowid();
        tracing::debug!(id, name = %employee.name, "employee inserted");
        Ok(employee.clone().with_id(id))
    }

    pub fn fetch(&mut self, id: EmployeeId) -> Result<Option<Employee>> {
        self.conn
            .query_row(SELECT_BY_ID, params![id], map_employee)
            .optional()
            .map_err(Into::into)
    }

    /// Like [`Employees::fetch`], but a missing employee is an error.
    pub fn get(&mut self, id: EmployeeId) -> Result<Employee> {
        self.fetch(id)?
            .ok_or_else(|| msg_error_anyhow!(Message::EmployeeNotFound(id)))
    }

    /// The whole roster in registration order.
    pub fn list(&mut self) -> Result<Vec<Employee>> {
        let mut stmt = self.conn.prepare(SELECT_ALL)?;
        let employee_iter = stmt.query_map([], map_employee)?;

        let mut employees = Vec::new();
        for employee in employee_iter {
            employees.push(employee?);
        }
        Ok(employees)
    }
}

fn map_employee(row: &Row) -> rusqlite::Result<Employee> {
    let status: String = row.get(3)?;
    let date_of_joining: String = row.get(4)?;
    let shift_start: Option<String> = row.get(6)?;
    let shift_end: Option<String> = row.get(7)?;

    Ok(Employee {
        id: row.get(0)?,
        name: row.get(1)?,
        department: row.get(2)?,
        status: EmploymentStatus::parse(&status).ok_or_else(|| conversion_error(3, &status, "employment status"))?,
        date_of_joining: NaiveDate::parse_from_str(&date_of_joining, DATE_COLUMN_FORMAT)
            .map_err(|_| conversion_error(4, &date_of_joining, "date"))?,
        allocated_hours: row.get::<_, Option<i64>>(5)?.map(Duration::minutes),
        shift_start: optional_clock(6, shift_start)?,
        shift_end: optional_clock(7, shift_end)?,
    })
}

pub(crate) fn optional_clock(column: usize, value: Option<String>) -> rusqlite::Result<Option<chrono::NaiveTime>> {
    match value {
        None => Ok(None),
        Some(text) => time::parse_clock(&text)
            .map(Some)
            .ok_or_else(|| conversion_error(column, &text, "time")),
    }
}
