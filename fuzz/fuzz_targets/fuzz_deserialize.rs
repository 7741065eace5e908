#![no_main]

use libfuzzer_sys::fuzz_target;
use sanitize_errors::{ErrorCollection, ExtendedError};

fuzz_target!(|data: &[u8]| {
    if let Ok(err) = serde_json::from_slice::<ExtendedError>(data) {
        assert!(err.internal_extra().is_none());
        let _ = err.to_json();
    }
    if let Ok(errs) = serde_json::from_slice::<ErrorCollection<ExtendedError>>(data) {
        let _ = errs.to_string();
    }
});
