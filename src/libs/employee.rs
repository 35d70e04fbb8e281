use chrono::NaiveDate;

/// One employee payroll record.
///
/// `id` is assigned at creation and never changes. `start_date` is only
/// required for date-range queries and `gender` only for the gender
/// aggregate, so both are optional.
#[derive(Debug, Clone, PartialEq)]
pub struct Employee {
    pub id: i64,
    pub name: String,
    pub salary: f64,
    pub start_date: Option<NaiveDate>,
    pub gender: Option<char>,
}

impl Employee {
    pub fn new(id: i64, name: &str, salary: f64) -> Self {
        Employee {
            id,
            name: name.to_string(),
            salary,
            start_date: None,
            gender: None,
        }
    }

    /// Equality used by the roster sync check: id, name, salary and start
    /// date must match exactly. Gender is not part of the sync contract.
    pub fn same_record(&self, other: &Employee) -> bool {
        self.id == other.id && self.name == other.name && self.salary == other.salary && self.start_date == other.start_date
    }
}
