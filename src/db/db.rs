use crate::libs::data_storage::DataStorage;
use anyhow::Result;
use rusqlite::{types::Type, Connection};

pub const DB_FILE_NAME: &str = "rollcall.db";

/// Calendar dates are stored as ISO `YYYY-MM-DD` text.
pub const DATE_COLUMN_FORMAT: &str = "%Y-%m-%d";

pub struct Db {
    pub conn: Connection,
}

impl Db {
    pub fn new() -> Result<Db> {
        let db_file_path = DataStorage::new().get_path(DB_FILE_NAME)?;
        let conn: Connection = Connection::open(db_file_path)?;

        Ok(Db { conn })
    }
}

/// Converts a column value that did not parse into a rusqlite error.
pub(crate) fn conversion_error(column: usize, value: &str, expected: &str) -> rusqlite::Error {
    rusqlite::Error::FromSqlConversionFailure(
        column,
        Type::Text,
        format!("invalid {expected}: '{value}'").into(),
    )
}
