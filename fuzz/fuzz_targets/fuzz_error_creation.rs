#![no_main]

use libfuzzer_sys::fuzz_target;
use sanitize_errors::{BasicError, ErrorCollection, ExtendedError, Fault, Sanitize, with_description};

fuzz_target!(|data: &[u8]| {
    let text = String::from_utf8_lossy(data);
    let (message, description) = text.split_once('|').unwrap_or((&text, ""));

    let mut basic = BasicError::new(message, description);
    let mut extended = ExtendedError::new(message, [with_description(description)]);

    let _ = basic.render();
    let _ = extended.render();

    basic.sanitize();
    extended.sanitize();
    assert_eq!(basic.render(), format!("{message}:"));
    assert!(extended.description().is_empty());

    let mut errs: ErrorCollection<ExtendedError> = ErrorCollection::new();
    errs.add([extended]);
    errs.sanitize();
    let _ = errs.render();
});
