#![no_main]

use libfuzzer_sys::fuzz_target;
use sanitize_errors::{BasicError, MAX_FIELD_OUTPUT_LEN};

fuzz_target!(|data: &[u8]| {
    let text = String::from_utf8_lossy(data);
    let err = BasicError::new("msg", text.as_ref());

    let mut line = String::new();
    err.internal_log().write_to(&mut line).ok();

    // Two bounded fields plus fixed framing
    assert!(line.len() <= 2 * MAX_FIELD_OUTPUT_LEN + 64);
});
