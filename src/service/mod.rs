//! Protocol services discovered for a device

#[cfg(test)]
mod merge_proptest;
pub mod parser;
mod record;

pub use parser::{parse_txt_records, property_keys};
pub use record::{Properties, ServiceRecord};
