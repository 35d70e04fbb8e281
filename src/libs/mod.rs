pub mod config;
pub mod data_storage;
pub mod employee;
pub mod error;
pub mod flat_file;
pub mod memory;
pub mod messages;
pub mod service;
pub mod storage;
pub mod view;
