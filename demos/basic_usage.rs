use sanitize_errors::{
    ErrorCollection, ExtendedError, Extra, Fault, Sanitize, http, with_description, with_extra,
};
use serde_json::json;
use std::io;

fn load_user(id: u64) -> Result<(), io::Error> {
    // Simulate a storage failure carrying sensitive detail
    Err(io::Error::other(format!(
        "SELECT * FROM users WHERE id = {id}: sql: no rows in result set"
    )))
}

fn validate(name: &str) -> Option<ExtendedError> {
    if name.is_empty() {
        return Some(ExtendedError::new(
            "Validation failed",
            [
                with_description("users.name violates NOT NULL"),
                with_extra(Extra::from([("field".to_string(), json!("name"))])),
            ],
        ));
    }
    None
}

fn main() {
    println!("--- Basic Usage Example ---\n");

    let mut errs: ErrorCollection<ExtendedError> = ErrorCollection::new();
    errs.add(validate(""));
    if let Err(e) = load_user(42) {
        errs.add(http::not_found_error(
            Some(e),
            [with_description("user 42 missing")],
        ));
    }

    // SCENARIO 1: The internal log (trusted)
    println!("1. [INTERNAL LOG] What the operator sees:");
    for err in &errs {
        err.with_internal_log(|log| println!("   {log}"));
    }

    // SCENARIO 2: The external response
    errs.sanitize();
    println!("\n2. [EXTERNAL RESPONSE] What the client sees:");
    println!("   \"{}\"", errs.render());
    for err in &errs {
        println!("   {}", err.to_json());
    }
}
