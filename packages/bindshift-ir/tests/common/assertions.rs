//! Custom assertions for transform output

use bindshift_ir::BIND_IMPORT;

/// Assert the injected import is the first line and appears exactly once
pub fn assert_single_leading_import(code: &str) {
    assert!(
        code.starts_with(&format!("{BIND_IMPORT}\n")),
        "expected output to start with the bind import:\n{code}"
    );
    assert_eq!(
        count_bind_imports(code),
        1,
        "expected exactly one bind import:\n{code}"
    );
}

/// Number of lines importing from `c/signals`
pub fn count_bind_imports(code: &str) -> usize {
    code.lines()
        .filter(|l| l.trim_start().starts_with("import") && l.contains("c/signals"))
        .count()
}
