//! Decorator detection
//!
//! Immutable pass over a parsed module. Finds every `@bind` applied to a
//! class member, validates its shape, and scans the imports for an existing
//! `bind` binding from `c/signals`. Nothing is mutated here.

use crate::features::decorator_rewrite::domain::{
    DecoratorOccurrence, Detection, BIND_DECORATOR, SIGNALS_MODULE,
};
use crate::features::parsing::domain::{ClassDecl, ClassMember, Decorator, FieldDecl, ParsedModule};
use crate::shared::models::{Result, TransformError};

/// Finds and validates `@bind` decorators
#[derive(Debug, Default, Clone, Copy)]
pub struct DecoratorDetector;

impl DecoratorDetector {
    pub fn new() -> Self {
        Self
    }

    /// Run the detection pass over a whole module.
    ///
    /// Fails on the first malformed occurrence.
    pub fn detect(&self, module: &ParsedModule) -> Result<Detection> {
        let mut occurrences = Vec::new();
        for class in module.classes() {
            self.detect_in_class(module, class, &mut occurrences)?;
        }
        // Nested classes are listed after their parent; restore document order
        occurrences.sort_by_key(|o: &DecoratorOccurrence| o.decorator_span.start_byte);

        let has_bind_import = self.has_bind_import(module);
        if !occurrences.is_empty() && !has_bind_import {
            self.check_bind_is_free(module)?;
        }

        Ok(Detection {
            occurrences,
            has_bind_import,
            import_offset: module.prologue_end,
        })
    }

    /// `import { bind } from "c/signals"` with the local name left as `bind`
    pub fn has_bind_import(&self, module: &ParsedModule) -> bool {
        module
            .imports()
            .filter(|import| import.source == SIGNALS_MODULE)
            .any(|import| import.binds(BIND_DECORATOR, BIND_DECORATOR))
    }

    /// Injecting the import would redeclare `bind` if another import owns it
    fn check_bind_is_free(&self, module: &ParsedModule) -> Result<()> {
        match module.imports().find(|import| import.binds_local(BIND_DECORATOR)) {
            Some(import) => Err(TransformError::ConflictingImport {
                path: module.file_path.clone(),
                module: import.source.clone(),
                line: import.span.start.line,
            }),
            None => Ok(()),
        }
    }

    fn detect_in_class(
        &self,
        module: &ParsedModule,
        class: &ClassDecl,
        occurrences: &mut Vec<DecoratorOccurrence>,
    ) -> Result<()> {
        for member in &class.members {
            match member {
                ClassMember::Field(field) => {
                    if let Some(occurrence) = self.field_occurrence(module, class, field)? {
                        tracing::trace!(
                            class = %occurrence.class_name,
                            property = %occurrence.property_name,
                            "found @bind occurrence"
                        );
                        occurrences.push(occurrence);
                    }
                }
                ClassMember::Method(method) => {
                    if let Some(decorator) = method.decorators.iter().find(|d| is_bind(d)) {
                        return Err(TransformError::UnsupportedTarget {
                            path: module.file_path.clone(),
                            class_name: class.display_name().to_string(),
                            member: method.name.clone(),
                            line: decorator.span.start.line,
                        });
                    }
                }
                ClassMember::Other(_) => {}
            }
        }
        Ok(())
    }

    fn field_occurrence(
        &self,
        module: &ParsedModule,
        class: &ClassDecl,
        field: &FieldDecl,
    ) -> Result<Option<DecoratorOccurrence>> {
        let mut binds = field.decorators.iter().filter(|d| is_bind(d));
        let decorator = match binds.next() {
            Some(decorator) => decorator,
            None => return Ok(None),
        };

        let path = module.file_path.clone();
        let class_name = class.display_name().to_string();
        let property = field.name.as_str().to_string();
        let line = decorator.span.start.line;

        if binds.next().is_some() {
            return Err(TransformError::DuplicateDecorator {
                path,
                class_name,
                property,
                line,
            });
        }

        if !field.name.is_plain() {
            return Err(TransformError::UnsupportedTarget {
                path,
                class_name,
                member: property,
                line,
            });
        }

        let arguments = decorator.arguments().unwrap_or(&[]);
        if arguments.len() != 1 {
            return Err(TransformError::Arity {
                path,
                class_name,
                property,
                found: arguments.len(),
                line,
            });
        }

        let argument = match arguments[0].as_identifier() {
            Some(name) => name.to_string(),
            None => {
                return Err(TransformError::InvalidArgument {
                    path,
                    class_name,
                    property,
                    found: arguments[0].source_text(),
                    line,
                })
            }
        };

        Ok(Some(DecoratorOccurrence {
            class_name,
            property_name: property,
            decorator_name: BIND_DECORATOR.to_string(),
            argument,
            decorator_span: decorator.span,
            body_span: field.body,
        }))
    }
}

fn is_bind(decorator: &Decorator) -> bool {
    decorator.name() == Some(BIND_DECORATOR)
}
