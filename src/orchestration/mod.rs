//! End-to-end conversion: load, group, resolve, write.

pub mod converter;

pub use converter::{create_cryptact_custom_file, print_records, Converter};
