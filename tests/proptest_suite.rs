//! Property-based tests for sanitize_errors
//!
//! These tests use proptest to generate random inputs and verify invariants hold.

use proptest::prelude::*;
use sanitize_errors::{
    BasicError, Described, ErrorCollection, ExtendedError, Extra, Fault, InternalExtra,
    InternalValue, MaybeCollection, Sanitize, http, with_description, with_extra,
    with_internal_extra, with_message,
};
use serde_json::json;
use std::io;

fn extra_strategy() -> impl Strategy<Value = Option<Extra>> {
    proptest::option::of(proptest::collection::btree_map(
        "[a-z_]{1,12}",
        "\\PC{0,20}".prop_map(serde_json::Value::from),
        0..4,
    ))
}

fn internal_strategy() -> impl Strategy<Value = Option<InternalExtra>> {
    proptest::option::of(proptest::collection::btree_map(
        "[a-z_]{1,12}",
        "\\PC{0,20}".prop_map(InternalValue::from),
        0..4,
    ))
}

// ============================================================================
// SANITIZE PROPERTIES
// ============================================================================

proptest! {
    /// Sanitized basic errors render as "<message>:" and stay that way
    #[test]
    fn basic_sanitize_is_idempotent(message in "\\PC{0,100}", description in "\\PC{0,100}") {
        let mut err = BasicError::new(message.clone(), description);
        err.sanitize();
        let once = err.render();
        prop_assert_eq!(&once, &format!("{message}:"));

        err.sanitize();
        prop_assert_eq!(err.render(), once);
    }

    /// Sanitize touches only the description of an extended error
    #[test]
    fn extended_sanitize_keeps_metadata(
        message in "\\PC{0,50}",
        description in "\\PC{0,50}",
        extra in extra_strategy(),
        internal in internal_strategy(),
    ) {
        let mut err = ExtendedError::with_fields(message.clone(), description, extra.clone(), internal.clone());
        err.sanitize();

        prop_assert_eq!(err.description(), "");
        prop_assert_eq!(err.message(), message.as_str());
        prop_assert_eq!(err.extra(), extra.as_ref());
        prop_assert_eq!(err.internal_extra(), internal.as_ref());
    }

    /// Sanitized extended errors never render their old description
    #[test]
    fn sanitized_render_has_empty_description_segment(
        message in "[A-Za-z ]{1,30}",
        description in "[0-9]{5,30}",
    ) {
        let mut err = ExtendedError::with_fields(message.clone(), description.clone(), None, None);
        err.sanitize();
        prop_assert_eq!(err.render(), format!("{message}: ; map[]"));
        prop_assert!(!err.to_json().contains(&description));
    }
}

// ============================================================================
// CONSTRUCTION PROPERTIES
// ============================================================================

proptest! {
    /// The last message option decides the message
    #[test]
    fn last_message_option_wins(
        initial in "\\PC{0,20}",
        messages in proptest::collection::vec("\\PC{0,20}", 1..8),
    ) {
        let options = messages.iter().cloned().map(with_message);
        let err = ExtendedError::new(initial, options);
        prop_assert_eq!(err.message(), messages.last().map(String::as_str).unwrap_or_default());
    }

    /// `with_fields` equals the equivalent option list
    #[test]
    fn with_fields_equals_options(
        message in "\\PC{0,30}",
        description in "\\PC{0,30}",
        extra in extra_strategy(),
        internal in internal_strategy(),
    ) {
        let by_fields = ExtendedError::with_fields(message.clone(), description.clone(), extra.clone(), internal.clone());
        let by_options = ExtendedError::new(
            message,
            [with_description(description), with_extra(extra), with_internal_extra(internal)],
        );
        prop_assert_eq!(by_fields, by_options);
    }

    /// Internal extra never appears in Display or JSON
    #[test]
    fn internal_extra_never_rendered(secret in "[a-z]{12,24}") {
        let internal = InternalExtra::from([("token".to_string(), InternalValue::from(secret.clone()))]);
        let err = ExtendedError::with_fields("msg", "", None, internal);

        let rendered = err.render();
        let json = err.to_json();
        let debug = format!("{err:?}");
        prop_assert!(!rendered.contains(&secret));
        prop_assert!(!json.contains(&secret));
        prop_assert!(!debug.contains(&secret));
    }
}

// ============================================================================
// COLLECTION PROPERTIES
// ============================================================================

proptest! {
    /// add() then errors() preserves order and length
    #[test]
    fn collection_preserves_order(
        pairs in proptest::collection::vec(("\\PC{0,10}", "\\PC{0,10}"), 0..16),
    ) {
        let items: Vec<BasicError> = pairs.iter().map(|(m, d)| BasicError::new(m.clone(), d.clone())).collect();
        let mut errs = ErrorCollection::new();
        errs.add(items.clone());

        prop_assert_eq!(errs.errors(), &items[..]);
        prop_assert_eq!(errs.len(), items.len());
    }

    /// Rendering a collection equals joining element renderings
    #[test]
    fn collection_render_joins_elements(
        pairs in proptest::collection::vec(("[a-z]{0,10}", "[a-z]{0,10}"), 0..8),
    ) {
        let basic: ErrorCollection<BasicError> =
            pairs.iter().map(|(m, d)| BasicError::new(m.clone(), d.clone())).collect();
        let expected: Vec<String> = basic.iter().map(Fault::render).collect();
        prop_assert_eq!(basic.render(), expected.join("; "));

        let extended: ErrorCollection<ExtendedError> = pairs
            .iter()
            .map(|(m, d)| ExtendedError::with_fields(m.clone(), d.clone(), None, None))
            .collect();
        let expected: Vec<String> = extended.iter().map(Fault::render).collect();
        prop_assert_eq!(extended.render(), expected.join(";"));
    }

    /// Bulk sanitize clears every description
    #[test]
    fn collection_sanitize_clears_all(
        pairs in proptest::collection::vec(("\\PC{0,10}", "\\PC{1,10}"), 0..8),
    ) {
        let mut errs: ErrorCollection<ExtendedError> = pairs
            .iter()
            .map(|(m, d)| ExtendedError::with_fields(m.clone(), d.clone(), None, None))
            .collect();
        errs.sanitize();
        prop_assert!(errs.iter().all(|e| e.description().is_empty()));
    }

    /// Absent collections ignore writes and report defaults
    #[test]
    fn absent_collection_is_inert(count in 0usize..8) {
        let mut errs: Option<ErrorCollection<BasicError>> = None;
        errs.add((0..count).map(|i| BasicError::new(i.to_string(), "")));
        errs.sanitize();

        prop_assert!(errs.is_none());
        prop_assert_eq!(errs.len(), 0);
        prop_assert!(errs.errors().is_none());
        prop_assert_eq!(errs.render(), "");
    }
}

// ============================================================================
// ABSENT VALUES AND HTTP
// ============================================================================

#[test]
fn absent_values_return_defaults() {
    let mut basic: Option<BasicError> = None;
    let mut extended: Option<ExtendedError> = None;
    basic.sanitize();
    extended.sanitize();

    assert_eq!(basic.render(), "nil error");
    assert_eq!(extended.render(), "");
    assert_eq!(extended.message(), "");
    assert_eq!(extended.description(), "");
}

proptest! {
    /// HTTP constructors keep the cause out of the public rendering
    #[test]
    fn http_error_shape(cause in "cause-[0-9]{12,24}") {
        let err = http::unprocessable_entity_error(Some(io::Error::other(cause.clone())), [])
            .expect("cause present");

        prop_assert_eq!(err.extra().and_then(|e| e.get("http_code")), Some(&json!(422)));
        prop_assert_eq!(err.cause().map(|c| c.to_string()), Some(cause.clone()));
        let rendered = err.render();
        prop_assert!(!rendered.contains(&cause));
    }

    /// Mixed collections render each element with its own format
    #[test]
    fn mixed_collection_renders_each_kind(
        pairs in proptest::collection::vec(("[a-z]{1,8}", "[0-9]{1,8}", any::<bool>()), 0..8),
    ) {
        let mut errs: ErrorCollection<Box<dyn Fault>> = ErrorCollection::new();
        let mut expected = Vec::new();
        for (message, description, extended) in &pairs {
            if *extended {
                expected.push(format!("{message}: {description}; map[]"));
                errs.push(Box::new(ExtendedError::with_fields(message.clone(), description.clone(), None, None)));
            } else {
                expected.push(format!("{message}:{description}"));
                errs.push(Box::new(BasicError::new(message.clone(), description.clone())));
            }
        }
        prop_assert_eq!(errs.render(), expected.join("; "));
    }
}
