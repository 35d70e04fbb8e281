//! Payroll service: one injected backend plus the in-process roster.
//!
//! The roster is the caller's current view of the backend. It is filled by
//! `load`, kept consistent on successful salary updates, and may otherwise
//! drift until the next load. `is_synced_with_backend` only reports drift;
//! it never writes.

use super::employee::Employee;
use super::error::StorageError;
use super::storage::Backend;
use chrono::NaiveDate;
use std::collections::HashMap;

pub struct PayrollService {
    backend: Backend,
    roster: Vec<Employee>,
}

impl PayrollService {
    pub fn new(backend: Backend) -> Self {
        PayrollService { backend, roster: Vec::new() }
    }

    /// Replaces the roster with the backend's current contents.
    pub fn load(&mut self) -> Result<&[Employee], StorageError> {
        self.roster = self.backend.read_all()?;
        Ok(&self.roster)
    }

    pub fn roster(&self) -> &[Employee] {
        &self.roster
    }

    /// Writes one employee to the backend and mirrors it in the roster.
    /// The roster copy carries the salary as the backend persisted it.
    pub fn add(&mut self, employee: Employee) -> Result<(), StorageError> {
        let mut employee = employee;
        employee.salary = self.backend.stored_salary(employee.salary);
        self.backend.insert(employee.clone())?;
        self.roster.push(employee);
        Ok(())
    }

    /// Updates the salary in the backend, then brings the roster copy along.
    /// Zero affected rows is a failure, not a silent no-op.
    pub fn update_salary(&mut self, name: &str, salary: f64) -> Result<(), StorageError> {
        let salary = self.backend.stored_salary(salary);
        let affected = self.backend.update_salary(name, salary)?;
        if affected == 0 {
            return Err(StorageError::UpdateFailed(name.to_string()));
        }
        if let Some(employee) = self.roster.iter_mut().find(|e| e.name == name) {
            employee.salary = salary;
        }
        Ok(())
    }

    /// Re-reads the named record and compares it against the roster copy.
    ///
    /// `Ok(true)` only when every sync-relevant field matches exactly.
    /// A name the backend does not know is an error; a name the roster does
    /// not hold is merely out of sync.
    pub fn is_synced_with_backend(&mut self, name: &str) -> Result<bool, StorageError> {
        let records = self.backend.find_by_name(name)?;
        let backend_copy = records.first().ok_or_else(|| StorageError::NotFound(name.to_string()))?;
        Ok(self
            .roster
            .iter()
            .find(|e| e.name == name)
            .map(|local| local.same_record(backend_copy))
            .unwrap_or(false))
    }

    pub fn employees_in_date_range(&mut self, start: NaiveDate, end: NaiveDate) -> Result<Vec<Employee>, StorageError> {
        self.backend.find_by_date_range(start, end)
    }

    pub fn average_salary_by_gender(&mut self) -> Result<HashMap<char, f64>, StorageError> {
        self.backend.average_salary_by_gender()
    }
}
