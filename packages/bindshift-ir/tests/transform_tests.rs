//! End-to-end transform behavior
//!
//! Exercises parse → detect → rewrite through the public API only.

mod common;

use bindshift_ir::{transform, TransformError, TransformOrchestrator};
use common::*;
use pretty_assertions::assert_eq;

// ============================================================
// No-op behavior
// ============================================================

#[test]
fn test_noop_returns_input_verbatim() {
    let source = fixture_plain_component();
    let result = transform(&source).unwrap();
    assert!(!result.modified);
    assert!(!result.metadata.seen);
    assert_eq!(result.code, source);
}

#[test]
fn test_noop_keeps_odd_formatting() {
    let source = "class   A {  x=1;   y = 2 }\n\n\n// trailing comment";
    let result = transform(source).unwrap();
    assert!(!result.modified);
    assert_eq!(result.code, source);
}

#[test]
fn test_bind_calls_outside_classes_are_ignored() {
    let source = "const bound = bind(sig);\nfunction f() { return bound; }\n";
    let result = transform(source).unwrap();
    assert!(!result.modified);
    assert_eq!(result.code, source);
}

// ============================================================
// Rewrites
// ============================================================

#[test]
fn test_single_occurrence_with_existing_import() {
    let source = fixture_component_with_import("Counter", &["@bind(sig) x;"]);
    let result = transform(&source).unwrap();

    assert!(result.modified);
    assert!(result.code.contains("x = bind(this, \"x\").to(sig);"));
    assert!(!result.code.contains("@bind"));
    assert_eq!(count_bind_imports(&result.code), 1);
    assert!(!result.metadata.import_inserted);
}

#[test]
fn test_import_injected_once_and_second_run_is_noop() {
    let source = fixture_component("Counter", &["@bind(count) total;"]);
    let first = transform(&source).unwrap();
    assert!(first.modified);
    assert_single_leading_import(&first.code);

    let second = transform(&first.code).unwrap();
    assert!(!second.modified);
    assert_eq!(second.code, first.code);
}

#[test]
fn test_two_occurrences_one_class_one_import() {
    let source = fixture_component("Pair", &["@bind(a) left;", "@bind(b) right;"]);
    let result = transform(&source).unwrap();

    assert_eq!(result.metadata.occurrences, 2);
    assert!(result.code.contains("left = bind(this, \"left\").to(a);"));
    assert!(result.code.contains("right = bind(this, \"right\").to(b);"));
    assert_single_leading_import(&result.code);
}

#[test]
fn test_occurrences_across_classes_one_import() {
    let source = "class A {\n  @bind(a) one;\n}\nclass B {\n  @bind(b) two;\n}\n";
    let result = transform(source).unwrap();
    assert_eq!(result.metadata.occurrences, 2);
    assert_single_leading_import(&result.code);
}

#[test]
fn test_full_component_rewrite() {
    let source = fixture_component("Counter", &["@api label;", "@bind(counter) count;"]);
    let result = transform(&source).unwrap();
    let expected = "import { bind } from \"c/signals\";\n\
import { LightningElement } from 'lwc';\n\
\n\
export default class Counter extends LightningElement {\n    \
@api label;\n    \
count = bind(this, \"count\").to(counter);\n\
}\n";
    assert_eq!(result.code, expected);
}

#[test]
fn test_private_field() {
    let result = transform("class C {\n  @bind(sig) #value;\n}\n").unwrap();
    assert!(result.code.contains("#value = bind(this, \"#value\").to(sig);"));
}

// ============================================================
// Failures
// ============================================================

#[test]
fn test_arity_violation_fails_whole_file() {
    let source = fixture_component("Broken", &["@bind(ok) good;", "@bind(a, b) bad;"]);
    let err = transform(&source).unwrap_err();
    match err {
        TransformError::Arity {
            class_name,
            property,
            found,
            ..
        } => {
            assert_eq!(class_name, "Broken");
            assert_eq!(property, "bad");
            assert_eq!(found, 2);
        }
        other => panic!("expected arity error, got {other:?}"),
    }
}

#[test]
fn test_zero_arguments_fails() {
    let source = fixture_component("Empty", &["@bind() nothing;"]);
    assert!(matches!(
        transform(&source),
        Err(TransformError::Arity { found: 0, .. })
    ));
}

#[test]
fn test_literal_argument_fails() {
    let source = fixture_component("Literal", &["@bind('sig') x;"]);
    assert!(matches!(
        transform(&source),
        Err(TransformError::InvalidArgument { .. })
    ));
}

#[test]
fn test_parse_error_names_file() {
    let err = TransformOrchestrator::new()
        .transform_file("export default class {\n  @bind(a x;\n}\n", "lwc/oops/oops.js")
        .unwrap_err();
    assert!(matches!(err, TransformError::Parse { .. }));
    assert!(err.to_string().contains("lwc/oops/oops.js"));
}

#[test]
fn test_default_bind_import_is_not_duplicated() {
    let source = format!(
        "import bind from 'c/signals';\n{}",
        fixture_component("Counter", &["@bind(counter) count;"])
    );
    let err = transform(&source).unwrap_err();
    assert!(matches!(err, TransformError::ConflictingImport { line: 1, .. }));
    assert!(err.is_validation());
}
