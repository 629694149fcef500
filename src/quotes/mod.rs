//! Quote records and the plain-text input reader.

pub mod reader;
pub mod types;
