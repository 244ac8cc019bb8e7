//! # LabelKit Core
//!
//! Core types and utilities shared by the LabelKit crates.
//! Provides the error hierarchy, measurement units, print sheet options
//! and designer defaults.

pub mod constants;
pub mod error;
pub mod print;
pub mod units;

pub use error::{Error, Result, StoreError, SymbolError, TemplateError};
pub use print::{CopiesPerPage, PrintDensity};
pub use units::{MeasurementSystem, WeightUnit};
