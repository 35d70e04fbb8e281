//! Human-readable text for every [`Message`] variant.
//!
//! All user-facing wording lives here, so command modules never hard-code
//! strings and the text can be adjusted (or localized) in one place.

use super::types::Message;
use std::fmt;

impl fmt::Display for Message {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            // Configuration
            Message::ConfigIntro => "Configure payroll storage".to_string(),
            Message::ConfigSaved => "Configuration saved".to_string(),
            Message::PromptStorageMode => "Default storage mode".to_string(),
            Message::PromptDatabaseAddress => "Database file path".to_string(),
            Message::PromptFilePath => "Payroll file path".to_string(),

            // Employees
            Message::PromptEmployeeId => "Employee ID".to_string(),
            Message::PromptEmployeeName => "Employee name".to_string(),
            Message::PromptEmployeeSalary => "Employee salary".to_string(),
            Message::PromptStartDate => "Start date (YYYY-MM-DD, empty to skip)".to_string(),
            Message::PromptGender => "Gender code (single character, empty to skip)".to_string(),
            Message::EmployeeAdded(name) => format!("Employee '{}' added", name),
            Message::EmployeesLoaded(count) => format!("Loaded {} employee(s)", count),
            Message::RosterEmpty => "No employee records found".to_string(),
            Message::MemoryNotPersistent => "In-memory records are discarded when the process exits".to_string(),

            // Salary
            Message::SalaryUpdated(name, salary) => format!("Salary for '{}' updated to {:.2}", name, salary),
            Message::RosterInSync(name) => format!("'{}' is in sync with the backend", name),
            Message::RosterOutOfSync(name) => format!("'{}' is out of sync with the backend", name),

            // Queries
            Message::EmployeesInRange(count, start, end) => format!("{} employee(s) started between {} and {}", count, start, end),
            Message::NoEmployeesInRange(start, end) => format!("No employees started between {} and {}", start, end),
            Message::AverageSalaryHeader => "Average salary by gender".to_string(),
            Message::NoGenderData => "No records carry a gender code".to_string(),

            // Files
            Message::FileContentsHeader(path) => format!("Contents of {}", path),
            Message::FileRecordCount(count) => format!("{} well-formed record(s)", count),
        };
        write!(f, "{}", text)
    }
}
