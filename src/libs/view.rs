use super::employee::Employee;
use prettytable::{row, Table};
use std::collections::HashMap;

pub struct View {}

impl View {
    pub fn employees(employees: &[Employee]) {
        let mut table = Table::new();

        table.add_row(row!["ID", "NAME", "SALARY", "START DATE", "GENDER"]);
        for employee in employees {
            table.add_row(row![
                employee.id,
                employee.name,
                format!("{:.2}", employee.salary),
                employee.start_date.map(|d| d.to_string()).unwrap_or_default(),
                employee.gender.map(String::from).unwrap_or_default()
            ]);
        }
        table.printstd();
    }

    pub fn averages(averages: &HashMap<char, f64>) {
        let mut table = Table::new();

        table.add_row(row!["GENDER", "AVERAGE SALARY"]);
        // Stable output order for a HashMap source.
        let mut rows: Vec<_> = averages.iter().collect();
        rows.sort_by_key(|(gender, _)| **gender);
        for (gender, average) in rows {
            table.add_row(row![gender, format!("{:.2}", average)]);
        }
        table.printstd();
    }
}
