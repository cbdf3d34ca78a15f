//! Decorator occurrences and the fixed rewrite vocabulary

use crate::shared::models::Span;

/// Decorator name the rewrite reacts to
pub const BIND_DECORATOR: &str = "bind";

/// Module the `bind` helper is imported from
pub const SIGNALS_MODULE: &str = "c/signals";

/// Statement injected when the helper is not imported yet
pub const BIND_IMPORT: &str = "import { bind } from \"c/signals\";";

/// Receiver passed as the first argument of `bind`
pub const SELF_REFERENCE: &str = "this";

/// One validated `@bind(<identifier>)` on a class field
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecoratorOccurrence {
    /// Enclosing class (`<anonymous>` for an unnamed default export)
    pub class_name: String,
    pub property_name: String,
    pub decorator_name: String,
    /// The single identifier the signal is bound to
    pub argument: String,
    pub decorator_span: Span,
    /// Field text after its decorators
    pub body_span: Span,
}

impl DecoratorOccurrence {
    /// `<field> = bind(this, "<field>").to(<argument>)`
    pub fn replacement_code(&self) -> String {
        format!(
            "{prop} = {bind}({this}, \"{prop}\").to({arg})",
            prop = self.property_name,
            bind = BIND_DECORATOR,
            this = SELF_REFERENCE,
            arg = self.argument,
        )
    }
}

/// Everything the detection pass learned about one file
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Detection {
    /// Validated occurrences in document order
    pub occurrences: Vec<DecoratorOccurrence>,

    /// `import { bind } from "c/signals"` already present
    pub has_bind_import: bool,

    /// Where an injected import goes
    pub import_offset: usize,
}

impl Detection {
    pub fn is_empty(&self) -> bool {
        self.occurrences.is_empty()
    }

    pub fn needs_import(&self) -> bool {
        !self.occurrences.is_empty() && !self.has_bind_import
    }
}
