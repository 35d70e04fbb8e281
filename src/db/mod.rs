pub mod db;
pub mod employees;
