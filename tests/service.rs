#[cfg(test)]
mod tests {
    use chrono::NaiveDate;
    use payr::db::employees::Employees;
    use payr::libs::employee::Employee;
    use payr::libs::error::StorageError;
    use payr::libs::flat_file::FlatFile;
    use payr::libs::memory::MemoryStore;
    use payr::libs::service::PayrollService;
    use payr::libs::storage::Backend;
    use tempfile::TempDir;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn employee(id: i64, name: &str, salary: f64, start: Option<NaiveDate>, gender: Option<char>) -> Employee {
        Employee {
            id,
            name: name.to_string(),
            salary,
            start_date: start,
            gender,
        }
    }

    fn seeded_service(backend: Backend) -> PayrollService {
        let mut service = PayrollService::new(backend);
        service.add(employee(1, "BILL", 100000.0, Some(date(2018, 1, 1)), Some('F'))).unwrap();
        service.add(employee(2, "Terisa", 200000.0, Some(date(2019, 11, 15)), Some('M'))).unwrap();
        service.add(employee(3, "Charlie", 300000.0, Some(date(2020, 5, 4)), Some('F'))).unwrap();
        service
    }

    #[test]
    fn test_memory_backend_preserves_insertion_order() {
        let mut service = seeded_service(Backend::Memory(MemoryStore::new()));

        let roster: Vec<String> = service.load().unwrap().iter().map(|e| e.name.clone()).collect();
        assert_eq!(roster, vec!["BILL", "Terisa", "Charlie"]);
    }

    #[test]
    fn test_update_salary_keeps_roster_consistent() {
        let mut service = seeded_service(Backend::Memory(MemoryStore::new()));
        service.load().unwrap();

        service.update_salary("Terisa", 3000000.0).unwrap();
        let local = service.roster().iter().find(|e| e.name == "Terisa").unwrap();
        assert_eq!(local.salary, 3000000.0);
        assert!(service.is_synced_with_backend("Terisa").unwrap());
    }

    #[test]
    fn test_update_salary_unknown_name_fails() {
        let mut service = seeded_service(Backend::Memory(MemoryStore::new()));
        service.load().unwrap();

        let err = service.update_salary("Nobody", 500000.0).unwrap_err();
        assert!(matches!(err, StorageError::UpdateFailed(name) if name == "Nobody"));
    }

    #[test]
    fn test_negative_salary_is_rejected() {
        let mut service = seeded_service(Backend::Memory(MemoryStore::new()));

        let err = service.update_salary("BILL", -1.0).unwrap_err();
        assert!(matches!(err, StorageError::NegativeSalary(_)));

        let err = service.add(employee(9, "Mallory", -5.0, None, None)).unwrap_err();
        assert!(matches!(err, StorageError::NegativeSalary(_)));
    }

    #[test]
    fn test_date_range_is_inclusive_on_both_ends() {
        let mut service = seeded_service(Backend::Memory(MemoryStore::new()));

        let hits = service.employees_in_date_range(date(2018, 1, 1), date(2019, 11, 15)).unwrap();
        assert_eq!(hits.len(), 2);
    }

    #[test]
    fn test_average_salary_by_gender_via_service() {
        let mut service = seeded_service(Backend::Memory(MemoryStore::new()));

        let averages = service.average_salary_by_gender().unwrap();
        assert_eq!(averages[&'F'], 200000.0);
        assert_eq!(averages[&'M'], 200000.0);
    }

    #[test]
    fn test_database_update_then_sync_check_passes() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("payr.db");
        let mut service = seeded_service(Backend::Database(Employees::open(&path).unwrap()));
        service.load().unwrap();

        service.update_salary("Terisa", 3000000.0).unwrap();
        assert!(service.is_synced_with_backend("Terisa").unwrap());
    }

    #[test]
    fn test_stale_roster_is_detected() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("payr.db");
        let mut service = seeded_service(Backend::Database(Employees::open(&path).unwrap()));
        service.load().unwrap();

        // Another writer changes the backend behind the service's back.
        let mut other = Employees::open(&path).unwrap();
        other.update_salary("Terisa", 999999.0).unwrap();

        assert!(!service.is_synced_with_backend("Terisa").unwrap());
    }

    #[test]
    fn test_sync_check_for_unknown_name_is_not_found() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("payr.db");
        let mut service = seeded_service(Backend::Database(Employees::open(&path).unwrap()));
        service.load().unwrap();

        let err = service.is_synced_with_backend("Nobody").unwrap_err();
        assert!(matches!(err, StorageError::NotFound(name) if name == "Nobody"));
    }

    #[test]
    fn test_sync_check_never_repairs_the_roster() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("payr.db");
        let mut service = seeded_service(Backend::Database(Employees::open(&path).unwrap()));
        service.load().unwrap();

        let mut other = Employees::open(&path).unwrap();
        other.update_salary("BILL", 777777.0).unwrap();

        assert!(!service.is_synced_with_backend("BILL").unwrap());
        // The local copy is untouched by the check.
        let local = service.roster().iter().find(|e| e.name == "BILL").unwrap();
        assert_eq!(local.salary, 100000.0);
    }

    #[test]
    fn test_file_backend_update_rewrites_the_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("payroll.csv");
        let mut service = seeded_service(Backend::File(FlatFile::new(&path)));
        service.load().unwrap();

        service.update_salary("Charlie", 350000.0).unwrap();
        assert!(service.is_synced_with_backend("Charlie").unwrap());

        // A fresh reader sees the rewritten contents.
        let on_disk = FlatFile::new(&path).read_all().unwrap();
        let charlie = on_disk.iter().find(|e| e.name == "Charlie").unwrap();
        assert_eq!(charlie.salary, 350000.0);
    }

    #[test]
    fn test_file_backend_is_synced_after_fractional_update() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("payroll.csv");
        let mut service = seeded_service(Backend::File(FlatFile::new(&path)));
        service.load().unwrap();

        // A third decimal place does not survive the file format, so the
        // roster must carry the salary as persisted, not as requested.
        service.update_salary("Charlie", 350000.555).unwrap();
        assert!(service.is_synced_with_backend("Charlie").unwrap());

        let local = service.roster().iter().find(|e| e.name == "Charlie").unwrap();
        let on_disk = FlatFile::new(&path).read_all().unwrap();
        let stored = on_disk.iter().find(|e| e.name == "Charlie").unwrap();
        assert_eq!(local.salary, stored.salary);
    }

    #[test]
    fn test_file_backend_is_synced_after_fractional_add() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("payroll.csv");
        let mut service = seeded_service(Backend::File(FlatFile::new(&path)));

        service.add(employee(4, "Dana", 123456.789, None, None)).unwrap();
        assert!(service.is_synced_with_backend("Dana").unwrap());

        let local = service.roster().iter().find(|e| e.name == "Dana").unwrap();
        assert_eq!(local.salary, 123456.79);
    }

    #[test]
    fn test_file_backend_round_trip_through_service() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("payroll.csv");
        let mut service = seeded_service(Backend::File(FlatFile::new(&path)));

        let roster = service.load().unwrap();
        assert_eq!(roster.len(), 3);
        assert_eq!(FlatFile::new(&path).count().unwrap(), 3);
    }
}
