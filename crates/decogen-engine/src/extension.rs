//! Extension hooks invoked by the emitter.
//!
//! Extensions attach decorators at defined points (per-class, per-field) and
//! may contribute an import resolver that runs over the finished text. All
//! context an extension needs arrives through [`EmitContext`]; nothing here
//! is process-global.

use crate::ir::{ClassDef, ClassGraph, Decorator, FieldDef};
use crate::settings::Settings;

/// Read-only context passed down to every hook invocation.
pub struct EmitContext<'a> {
    pub graph: &'a ClassGraph,
    pub settings: &'a Settings,
}

/// Resolves import statements required by generated text.
///
/// `resolve` receives the raw generated code and returns complete import
/// lines. Within one statement, specifiers must follow the order the
/// extension declares them, never an alphabetized one, so output diffs stay
/// stable.
pub trait ImportResolver {
    fn resolve(&self, code: &str) -> Vec<String>;
}

/// A hook invoked by the engine at defined emission points.
pub trait EmitterExtension {
    /// Extension identifier, for diagnostics.
    fn name(&self) -> &'static str;

    /// Decorators to place above the class declaration.
    fn decorate_class(&self, _class: &ClassDef, _ctx: &EmitContext) -> Vec<Decorator> {
        Vec::new()
    }

    /// Decorators to place above one field.
    fn decorate_field(
        &self,
        _field: &FieldDef,
        _class: &ClassDef,
        _ctx: &EmitContext,
    ) -> Vec<Decorator> {
        Vec::new()
    }

    /// The import resolver for this extension, if it contributes imports.
    fn import_resolver(&self) -> Option<&dyn ImportResolver> {
        None
    }
}
