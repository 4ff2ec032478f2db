use crate::db::db::{conversion_error, Db, DATE_COLUMN_FORMAT};
use crate::libs::holiday::Holiday;
use crate::libs::messages::Message;
use crate::libs::time;
use crate::msg_error_anyhow;
use anyhow::Result;
use chrono::NaiveDate;
use rusqlite::{params, Connection, OptionalExtension, Row};

const SCHEMA_HOLIDAYS: &str = "CREATE TABLE IF NOT EXISTS holidays (
    date DATE PRIMARY KEY,
    name TEXT NOT NULL
)";
const INSERT_HOLIDAY: &str = "INSERT OR REPLACE INTO holidays (date, name) VALUES (?1, ?2)";
const DELETE_HOLIDAY: &str = "DELETE FROM holidays WHERE date = ?1";
const SELECT_ALL: &str = "SELECT date, name FROM holidays ORDER BY date";
const SELECT_BY_DATE: &str = "SELECT date, name FROM holidays WHERE date = ?1";

pub struct Holidays {
    conn: Connection,
}

impl Holidays {
    pub fn new() -> Result<Self> {
        let db = Db::new()?;
        db.conn.execute(SCHEMA_HOLIDAYS, [])?;
        Ok(Holidays { conn: db.conn })
    }

    /// Adds a holiday. An existing holiday on the same date is renamed.
    pub fn insert(&mut self, holiday: &Holiday) -> Result<()> {
        self.conn.execute(
            INSERT_HOLIDAY,
            params![holiday.date.format(DATE_COLUMN_FORMAT).to_string(), holiday.name],
        )?;
        Ok(())
    }

    pub fn delete(&mut self, date: NaiveDate) -> Result<()> {
        let affected = self
            .conn
            .execute(DELETE_HOLIDAY, params![date.format(DATE_COLUMN_FORMAT).to_string()])?;
        if affected == 0 {
            return Err(msg_error_anyhow!(Message::HolidayNotFound(time::format_form_date(&date))));
        }
        Ok(())
    }

    pub fn fetch(&mut self, date: NaiveDate) -> Result<Option<Holiday>> {
        self.conn
            .query_row(
                SELECT_BY_DATE,
                params![date.format(DATE_COLUMN_FORMAT).to_string()],
                map_holiday,
            )
            .optional()
            .map_err(Into::into)
    }

    /// All holidays in date order.
    pub fn list(&mut self) -> Result<Vec<Holiday>> {
        let mut stmt = self.conn.prepare(SELECT_ALL)?;
        let holiday_iter = stmt.query_map([], map_holiday)?;

        let mut holidays = Vec::new();
        for holiday in holiday_iter {
            holidays.push(holiday?);
        }
        Ok(holidays)
    }
}

fn map_holiday(row: &Row) -> rusqlite::Result<Holiday> {
    let date: String = row.get(0)?;
    Ok(Holiday {
        date: NaiveDate::parse_from_str(&date, DATE_COLUMN_FORMAT).map_err(|_| conversion_error(0, &date, "date"))?,
        name: row.get(1)?,
    })
}
