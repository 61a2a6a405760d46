//! Fuzz target for advisory-reply extraction.
//!
//! Tests that pulling the JSON advisory out of free-form generator text
//! handles arbitrary input without panicking.

#![no_main]

use fc_core::generator::AdvisoryReply;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &str| {
    let _ = AdvisoryReply::parse(data);
});
