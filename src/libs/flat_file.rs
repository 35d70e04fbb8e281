//! Flat-file storage backend.
//!
//! One employee per line in a fixed field order: id, name, salary, start
//! date, gender. Salaries are written with exactly two decimal places and
//! dates in ISO-8601 (`%Y-%m-%d`); absent optional fields serialize as an
//! empty string. `write` always replaces the whole file, so a `read_all`
//! after a `write` reproduces the written sequence up to the pinned salary
//! precision.

use super::employee::Employee;
use super::error::StorageError;
use crate::msg_print;
use chrono::NaiveDate;
use csv::{ReaderBuilder, StringRecord, WriterBuilder};
use std::fs;
use std::path::{Path, PathBuf};

pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Rounds a salary to the two decimal places the file format carries.
///
/// A pinned value survives the write/read round trip unchanged, so storing
/// pinned salaries keeps in-process copies equal to what a re-read returns.
pub fn pin_salary(salary: f64) -> f64 {
    (salary * 100.0).round() / 100.0
}

pub struct FlatFile {
    path: PathBuf,
}

impl FlatFile {
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        FlatFile {
            path: path.as_ref().to_path_buf(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Serializes the full sequence, overwriting any prior contents.
    pub fn write(&self, employees: &[Employee]) -> Result<(), StorageError> {
        let mut wtr = WriterBuilder::new().has_headers(false).from_path(&self.path)?;
        for employee in employees {
            wtr.write_record(&[
                employee.id.to_string(),
                employee.name.clone(),
                format!("{:.2}", employee.salary),
                employee.start_date.map(|d| d.format(DATE_FORMAT).to_string()).unwrap_or_default(),
                employee.gender.map(String::from).unwrap_or_default(),
            ])?;
        }
        wtr.flush()?;
        Ok(())
    }

    /// Parses every line back into records.
    ///
    /// Strict by contract: the first malformed line fails the whole read
    /// with [`StorageError::Parse`] naming the offending line.
    pub fn read_all(&self) -> Result<Vec<Employee>, StorageError> {
        let mut employees = Vec::new();
        for (index, record) in self.records()?.enumerate() {
            employees.push(parse_record(&record?, index + 1)?);
        }
        Ok(employees)
    }

    /// Number of well-formed lines. Unlike `read_all`, lines that do not
    /// parse are skipped rather than failing the count. Only per-line field
    /// failures are skipped; a reader error still fails the whole count.
    pub fn count(&self) -> Result<usize, StorageError> {
        let mut count = 0;
        for (index, record) in self.records()?.enumerate() {
            if parse_record(&record?, index + 1).is_ok() {
                count += 1;
            }
        }
        Ok(count)
    }

    /// Emits the raw file contents for diagnostics.
    pub fn print(&self) -> Result<(), StorageError> {
        let contents = fs::read_to_string(&self.path)?;
        msg_print!(contents.trim_end());
        Ok(())
    }

    fn records(&self) -> Result<csv::StringRecordsIntoIter<fs::File>, StorageError> {
        let rdr = ReaderBuilder::new().has_headers(false).flexible(true).from_path(&self.path)?;
        Ok(rdr.into_records())
    }
}

fn parse_record(record: &StringRecord, line: usize) -> Result<Employee, StorageError> {
    if record.len() != 5 {
        return Err(StorageError::Parse {
            line,
            reason: format!("expected 5 fields, found {}", record.len()),
        });
    }
    let id = record[0].parse::<i64>().map_err(|e| StorageError::Parse {
        line,
        reason: format!("invalid id '{}': {}", &record[0], e),
    })?;
    let salary = record[2].parse::<f64>().map_err(|e| StorageError::Parse {
        line,
        reason: format!("invalid salary '{}': {}", &record[2], e),
    })?;
    let start_date = match &record[3] {
        "" => None,
        s => Some(NaiveDate::parse_from_str(s, DATE_FORMAT).map_err(|e| StorageError::Parse {
            line,
            reason: format!("invalid start date '{}': {}", s, e),
        })?),
    };
    let gender = record[4].chars().next();

    Ok(Employee {
        id,
        name: record[1].to_string(),
        salary,
        start_date,
        gender,
    })
}
