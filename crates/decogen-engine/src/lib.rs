//! Declarative class-graph IR and deterministic TypeScript emission.
//!
//! `decogen-engine` is the generation engine underneath `decogen`: callers
//! describe their domain as a [`ClassGraph`](ir::ClassGraph) (classes, fields,
//! validation annotations, enums, resolved polymorphic hierarchies) and the
//! engine emits TypeScript source, invoking [`EmitterExtension`] hooks at each
//! class and field so higher layers can attach decorators.
//!
//! # Architecture
//!
//! ```text
//! Class graph IR          Engine                 Extension hooks
//! ──────────────     ─────────────────     ──────────────────────────
//! ClassDef      ─┐                      ┌─ decorate_class(class, ctx)
//! FieldDef      ─┼─> emit(graph, ───────┼─ decorate_field(field, class, ctx)
//! EnumDef       ─┤   settings,          └─ import_resolver()
//! Hierarchy     ─┘   extensions)
//! ```
//!
//! The engine emits declarations in the order it receives them; callers that
//! need a stable order sort the graph before invoking [`emit`]. Field members
//! are always emitted in declaration order.
//!
//! # Example
//!
//! ```
//! use decogen_engine::ir::{Annotation, ClassDef, ClassGraph, FieldDef, TsType};
//! use decogen_engine::{Settings, emit};
//!
//! let mut graph = ClassGraph::new();
//! graph.add_class(
//!     ClassDef::new("User")
//!         .field(FieldDef::new("name", TsType::String).annotate(Annotation::NotEmpty)),
//! );
//!
//! let code = emit(&graph, &Settings::default(), &[]);
//! assert!(code.contains("export class User {"));
//! ```

pub mod emit;
pub mod extension;
pub mod ir;
pub mod settings;

pub use emit::{FILE_HEADER, emit};
pub use extension::{EmitContext, EmitterExtension, ImportResolver};
pub use settings::{EnumMapping, OutputKind, Settings, StringQuotes};
