use crate::libs::data_storage::DataStorage;
use crate::libs::error::StorageError;
use rusqlite::Connection;
use std::path::{Path, PathBuf};

pub const DB_FILE_NAME: &str = "payr.db";

pub struct Db {
    pub conn: Connection,
}

impl Db {
    /// Opens the database at the default application data path.
    pub fn new() -> Result<Db, StorageError> {
        let db_file_path = DataStorage::new().get_path(DB_FILE_NAME)?;
        Self::open(db_file_path)
    }

    /// Opens the database at an explicit path, e.g. the configured address.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Db, StorageError> {
        let conn = Connection::open(path.as_ref()).map_err(|source| StorageError::Connection {
            path: PathBuf::from(path.as_ref()),
            source,
        })?;
        Ok(Db { conn })
    }
}
