//! Fuzz target for engine configuration parsing.
//!
//! Tests that JSON configuration parsing and semantic validation handle
//! arbitrary input without panicking.

#![no_main]

use fc_config::params::EngineConfig;
use fc_config::validate::validate_config;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    // Parse then validate - should never panic, only return an error
    if let Ok(config) = serde_json::from_slice::<EngineConfig>(data) {
        let _ = validate_config(&config);
    }
});
