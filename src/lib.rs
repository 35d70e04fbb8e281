//! # Payr - Employee Payroll Manager
//!
//! A command-line utility for managing employee payroll records across
//! interchangeable storage backends.
//!
//! ## Features
//!
//! - **Pluggable Storage**: In-memory roster, flat file, or embedded database
//! - **Parameterized Queries**: Name lookup, date-range filter, gender aggregate
//! - **Salary Updates**: Backed by an explicit zero-rows-affected failure
//! - **Sync Checking**: Read-only comparison between roster and backend
//! - **Interactive Setup**: Guided configuration of mode and storage paths
//!
//! ## Usage
//!
//! ```rust,no_run
//! use payr::commands::Cli;
//!
//! fn main() -> anyhow::Result<()> {
//!     Cli::menu()
//! }
//! ```

pub mod commands;
pub mod db;
pub mod libs;
