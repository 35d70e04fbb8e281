//! Backend selection and dispatch.
//!
//! The three storage variants form a closed set, so dispatch is a tagged
//! union chosen once at construction rather than a mode flag re-checked on
//! every call. All variants answer the same operation set: the database
//! runs one SQL statement per operation, while the memory and file variants
//! answer with linear scans (a file update reads, modifies and rewrites the
//! whole file).

use super::config::Config;
use super::employee::Employee;
use super::error::StorageError;
use super::flat_file::{pin_salary, FlatFile};
use super::memory::MemoryStore;
use crate::db::employees::Employees;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Storage-mode selector carried in configuration and on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum StorageMode {
    /// Process-local roster, discarded on exit.
    Memory,
    /// Flat file, one record per line.
    File,
    /// Embedded relational database.
    Database,
}

impl StorageMode {
    /// Lowercase label, identical to the serialized and command-line form.
    pub fn as_str(&self) -> &'static str {
        match self {
            StorageMode::Memory => "memory",
            StorageMode::File => "file",
            StorageMode::Database => "database",
        }
    }
}

pub enum Backend {
    Memory(MemoryStore),
    File(FlatFile),
    Database(Employees),
}

impl Backend {
    /// Builds the backend named by `mode` (or by the configuration when no
    /// override is given) from the configured paths.
    pub fn from_config(config: &Config, mode: Option<StorageMode>) -> Result<Self, StorageError> {
        let mode = mode.or(config.mode).unwrap_or(StorageMode::Database);
        match mode {
            StorageMode::Memory => Ok(Backend::Memory(MemoryStore::new())),
            StorageMode::File => Ok(Backend::File(FlatFile::new(config.file_path()?))),
            StorageMode::Database => {
                let employees = match config.database_address() {
                    Some(address) => Employees::open(address)?,
                    None => Employees::new()?,
                };
                Ok(Backend::Database(employees))
            }
        }
    }

    /// The salary exactly as this backend will persist it. The flat file
    /// pins salaries to two decimal places; the other backends store the
    /// full value.
    pub fn stored_salary(&self, salary: f64) -> f64 {
        match self {
            Backend::File(_) => pin_salary(salary),
            Backend::Memory(_) | Backend::Database(_) => salary,
        }
    }

    pub fn insert(&mut self, employee: Employee) -> Result<(), StorageError> {
        if employee.salary < 0.0 {
            return Err(StorageError::NegativeSalary(employee.salary));
        }
        match self {
            Backend::Memory(store) => {
                store.append(employee);
                Ok(())
            }
            Backend::File(file) => {
                let mut employees = if file.path().exists() { file.read_all()? } else { Vec::new() };
                let mut employee = employee;
                employee.salary = pin_salary(employee.salary);
                employees.push(employee);
                file.write(&employees)
            }
            Backend::Database(db) => db.insert(&employee),
        }
    }

    pub fn read_all(&mut self) -> Result<Vec<Employee>, StorageError> {
        match self {
            Backend::Memory(store) => Ok(store.all().to_vec()),
            Backend::File(file) => file.read_all(),
            Backend::Database(db) => db.fetch_all(),
        }
    }

    pub fn find_by_name(&mut self, name: &str) -> Result<Vec<Employee>, StorageError> {
        match self {
            Backend::Memory(store) => Ok(store.all().iter().filter(|e| e.name == name).cloned().collect()),
            Backend::File(file) => Ok(file.read_all()?.into_iter().filter(|e| e.name == name).collect()),
            Backend::Database(db) => db.fetch_by_name(name),
        }
    }

    /// Employees whose start date lies within the range, bounds inclusive.
    /// Records without a start date never match.
    pub fn find_by_date_range(&mut self, start: NaiveDate, end: NaiveDate) -> Result<Vec<Employee>, StorageError> {
        match self {
            Backend::Memory(store) => Ok(filter_range(store.all().iter().cloned(), start, end)),
            Backend::File(file) => Ok(filter_range(file.read_all()?.into_iter(), start, end)),
            Backend::Database(db) => db.fetch_by_date_range(start, end),
        }
    }

    /// Sets the salary of every employee with the given name and returns
    /// how many records were touched. Zero means the name matched nothing.
    pub fn update_salary(&mut self, name: &str, salary: f64) -> Result<usize, StorageError> {
        if salary < 0.0 {
            return Err(StorageError::NegativeSalary(salary));
        }
        match self {
            Backend::Memory(store) => {
                let mut affected = 0;
                for employee in store.all_mut().iter_mut().filter(|e| e.name == name) {
                    employee.salary = salary;
                    affected += 1;
                }
                Ok(affected)
            }
            Backend::File(file) => {
                let mut employees = file.read_all()?;
                let salary = pin_salary(salary);
                let mut affected = 0;
                for employee in employees.iter_mut().filter(|e| e.name == name) {
                    employee.salary = salary;
                    affected += 1;
                }
                if affected > 0 {
                    file.write(&employees)?;
                }
                Ok(affected)
            }
            Backend::Database(db) => db.update_salary(name, salary),
        }
    }

    pub fn average_salary_by_gender(&mut self) -> Result<HashMap<char, f64>, StorageError> {
        match self {
            Backend::Memory(store) => Ok(average_by_gender(store.all())),
            Backend::File(file) => Ok(average_by_gender(&file.read_all()?)),
            Backend::Database(db) => db.average_salary_by_gender(),
        }
    }
}

fn filter_range<I: Iterator<Item = Employee>>(employees: I, start: NaiveDate, end: NaiveDate) -> Vec<Employee> {
    employees
        .filter(|e| e.start_date.map(|d| d >= start && d <= end).unwrap_or(false))
        .collect()
}

fn average_by_gender(employees: &[Employee]) -> HashMap<char, f64> {
    let mut sums: HashMap<char, (f64, usize)> = HashMap::new();
    for employee in employees {
        if let Some(gender) = employee.gender {
            let entry = sums.entry(gender).or_insert((0.0, 0));
            entry.0 += employee.salary;
            entry.1 += 1;
        }
    }
    sums.into_iter().map(|(gender, (sum, count))| (gender, sum / count as f64)).collect()
}
