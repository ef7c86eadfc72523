//! Integration tests for manifest generation

mod hasher_verification;
mod report_end_to_end;
mod scan_filtering;
mod tree_properties;
