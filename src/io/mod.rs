//! Tabular input handling
//!
//! CSV parsing and column selection for the batch labelling variant.

pub mod csv;

pub use csv::CsvTable;
