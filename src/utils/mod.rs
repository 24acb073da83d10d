//! Module for helper functionality shared across the crate
pub mod test_helper;
