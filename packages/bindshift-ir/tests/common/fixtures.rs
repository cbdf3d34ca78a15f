//! Test fixture generators
//!
//! LWC-style component sources with and without `@bind` fields.

/// Component class with the given field lines inside its body
pub fn fixture_component(class_name: &str, fields: &[&str]) -> String {
    let body: String = fields.iter().map(|f| format!("    {f}\n")).collect();
    format!(
        "import {{ LightningElement }} from 'lwc';\n\nexport default class {class_name} extends LightningElement {{\n{body}}}\n"
    )
}

/// Same as `fixture_component` with the `bind` import already present
pub fn fixture_component_with_import(class_name: &str, fields: &[&str]) -> String {
    format!(
        "import {{ bind }} from 'c/signals';\n{}",
        fixture_component(class_name, fields)
    )
}

/// Plain component with no decorators of interest
pub fn fixture_plain_component() -> String {
    fixture_component(
        "Plain",
        &["@api recordId;", "@track state = { loading: false };", "handleClick() {}"],
    )
}
