//! Fuzz target for stored equipment document parsing.
//!
//! Tests that equipment record deserialization handles arbitrary input
//! without panicking.

#![no_main]

use fc_common::record::EquipmentRecord;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    // Try to parse as JSON - should never panic, only return an error
    let _ = serde_json::from_slice::<EquipmentRecord>(data);
});
