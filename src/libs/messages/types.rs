#[derive(Debug, Clone)]
pub enum Message {
    // === CONFIGURATION MESSAGES ===
    ConfigIntro,
    ConfigSaved,
    PromptStorageMode,
    PromptDatabaseAddress,
    PromptFilePath,

    // === EMPLOYEE MESSAGES ===
    PromptEmployeeId,
    PromptEmployeeName,
    PromptEmployeeSalary,
    PromptStartDate,
    PromptGender,
    EmployeeAdded(String),
    EmployeesLoaded(usize),
    RosterEmpty,
    MemoryNotPersistent,

    // === SALARY MESSAGES ===
    SalaryUpdated(String, f64),
    RosterInSync(String),
    RosterOutOfSync(String),

    // === QUERY MESSAGES ===
    EmployeesInRange(usize, String, String), // count, start, end
    NoEmployeesInRange(String, String),      // start, end
    AverageSalaryHeader,
    NoGenderData,

    // === FILE MESSAGES ===
    FileContentsHeader(String), // path
    FileRecordCount(usize),
}
