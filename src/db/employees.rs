//! Relational storage backend for employee payroll records.
//!
//! Every statement uses bound parameters; caller-supplied names, salaries
//! and dates are never formatted into SQL text. The connection is opened at
//! construction and released by drop on every exit path. Row order from
//! `fetch_all` is whatever SQLite returns; callers must not depend on it.

use super::db::Db;
use crate::libs::employee::Employee;
use crate::libs::error::StorageError;
use chrono::NaiveDate;
use rusqlite::{params, Connection, Row};
use std::collections::HashMap;
use std::path::Path;

const SCHEMA_EMPLOYEES: &str = "CREATE TABLE IF NOT EXISTS employees (
    id INTEGER NOT NULL PRIMARY KEY,
    name TEXT NOT NULL,
    salary REAL NOT NULL,
    start DATE,
    gender TEXT
);";
const INSERT_EMPLOYEE: &str = "INSERT INTO employees (id, name, salary, start, gender) VALUES (?1, ?2, ?3, ?4, ?5)";
const SELECT_EMPLOYEES: &str = "SELECT id, name, salary, start, gender FROM employees";
const SELECT_BY_NAME: &str = "SELECT id, name, salary, start, gender FROM employees WHERE name = ?1";
const SELECT_BY_RANGE: &str = "SELECT id, name, salary, start, gender FROM employees WHERE start BETWEEN ?1 AND ?2";
const UPDATE_SALARY: &str = "UPDATE employees SET salary = ?1 WHERE name = ?2";
const AVG_BY_GENDER: &str = "SELECT gender, AVG(salary) FROM employees WHERE gender IS NOT NULL GROUP BY gender";

pub struct Employees {
    conn: Connection,
}

impl Employees {
    pub fn new() -> Result<Employees, StorageError> {
        let db = Db::new()?;
        db.conn.execute(SCHEMA_EMPLOYEES, [])?;
        Ok(Employees { conn: db.conn })
    }

    pub fn open<P: AsRef<Path>>(path: P) -> Result<Employees, StorageError> {
        let db = Db::open(path)?;
        db.conn.execute(SCHEMA_EMPLOYEES, [])?;
        Ok(Employees { conn: db.conn })
    }

    pub fn insert(&mut self, employee: &Employee) -> Result<(), StorageError> {
        self.conn.execute(
            INSERT_EMPLOYEE,
            params![
                employee.id,
                employee.name,
                employee.salary,
                employee.start_date,
                employee.gender.map(String::from)
            ],
        )?;
        Ok(())
    }

    pub fn fetch_all(&mut self) -> Result<Vec<Employee>, StorageError> {
        let mut stmt = self.conn.prepare(SELECT_EMPLOYEES)?;
        let employee_iter = stmt.query_map([], map_employee)?;
        let mut employees = Vec::new();
        for employee in employee_iter {
            employees.push(employee?);
        }
        Ok(employees)
    }

    /// Zero or more records matching the exact name.
    pub fn fetch_by_name(&mut self, name: &str) -> Result<Vec<Employee>, StorageError> {
        let mut stmt = self.conn.prepare(SELECT_BY_NAME)?;
        let employee_iter = stmt.query_map([name], map_employee)?;
        let mut employees = Vec::new();
        for employee in employee_iter {
            employees.push(employee?);
        }
        Ok(employees)
    }

    /// Records whose start date falls within the range, both bounds inclusive.
    pub fn fetch_by_date_range(&mut self, start: NaiveDate, end: NaiveDate) -> Result<Vec<Employee>, StorageError> {
        let mut stmt = self.conn.prepare(SELECT_BY_RANGE)?;
        let employee_iter = stmt.query_map(params![start, end], map_employee)?;
        let mut employees = Vec::new();
        for employee in employee_iter {
            employees.push(employee?);
        }
        Ok(employees)
    }

    /// Returns the number of rows the update touched. SQLite counts a row
    /// as changed whenever the WHERE clause matches it, even if the stored
    /// salary is already equal to the new value.
    pub fn update_salary(&mut self, name: &str, salary: f64) -> Result<usize, StorageError> {
        let affected = self.conn.execute(UPDATE_SALARY, params![salary, name])?;
        Ok(affected)
    }

    /// Grouped aggregate over the gender column. Rows with no gender are
    /// excluded; averages are returned as SQLite computes them, unrounded.
    pub fn average_salary_by_gender(&mut self) -> Result<HashMap<char, f64>, StorageError> {
        let mut stmt = self.conn.prepare(AVG_BY_GENDER)?;
        let row_iter = stmt.query_map([], |row| Ok((row.get::<_, String>(0)?, row.get::<_, f64>(1)?)))?;
        let mut averages = HashMap::new();
        for row in row_iter {
            let (gender, average) = row?;
            if let Some(code) = gender.chars().next() {
                averages.insert(code, average);
            }
        }
        Ok(averages)
    }
}

fn map_employee(row: &Row<'_>) -> rusqlite::Result<Employee> {
    Ok(Employee {
        id: row.get(0)?,
        name: row.get(1)?,
        salary: row.get(2)?,
        start_date: row.get(3)?,
        gender: row.get::<_, Option<String>>(4)?.and_then(|g| g.chars().next()),
    })
}
