use super::employee::Employee;

/// Process-local ordered roster with no persistence.
///
/// Records live for as long as the host process; `append` performs no
/// id-uniqueness check and `all` preserves insertion order.
#[derive(Debug, Default)]
pub struct MemoryStore {
    employees: Vec<Employee>,
}

impl MemoryStore {
    pub fn new() -> Self {
        MemoryStore { employees: Vec::new() }
    }

    pub fn append(&mut self, employee: Employee) {
        self.employees.push(employee);
    }

    pub fn all(&self) -> &[Employee] {
        &self.employees
    }

    pub fn all_mut(&mut self) -> &mut [Employee] {
        &mut self.employees
    }
}
