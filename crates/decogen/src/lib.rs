//! Decorator-annotated TypeScript generation.
//!
//! `decogen` turns a declarative class graph (classes, fields, validation
//! annotations, polymorphic hierarchies) into TypeScript source annotated
//! for the class-validator / class-transformer ecosystem, plus the auxiliary
//! files the generated code references.
//!
//! # Architecture
//!
//! ```text
//! ClassGraph ──> TypeResolver(s) ──> ordered emission ──> import injection
//!                (hierarchies,        (decogen-engine      (anchor line,
//!                 fail fast)          + extensions)         declared order)
//!                                                                │
//!                                              primary file + conditional
//!                                              catalog/localization/custom
//!                                              decorator copies
//! ```
//!
//! The emission engine lives in `decogen-engine`; this crate supplies the
//! extensions (class-validator converter table, class-transformer
//! discriminator decorators, custom decorators), the ordering wrapper, and
//! output assembly.
//!
//! # Example
//!
//! ```no_run
//! use decogen::{GeneratorConfig, TypeScriptFileGenerator};
//! use decogen_engine::ir::{Annotation, ClassDef, ClassGraph, FieldDef, TsType};
//!
//! let mut graph = ClassGraph::new();
//! graph.add_class(
//!     ClassDef::new("Foo")
//!         .field(FieldDef::new("bar", TsType::Any).annotate(Annotation::Max(1))),
//! );
//!
//! let generator = TypeScriptFileGenerator::new(GeneratorConfig {
//!     base_path: "generated".into(),
//!     ..Default::default()
//! })?;
//! let files = generator.generate(&graph)?;
//! assert!(files.code.contains("@Max(1"));
//! # Ok::<(), decogen::GenerateError>(())
//! ```

pub mod custom;
pub mod error;
pub mod generator;
pub mod hierarchy;
pub mod imports;
pub mod ordered;
pub mod transform;
pub mod validation;

pub use custom::{CustomAnnotation, CustomDecorator, CustomDecoratorRegistry};
pub use error::GenerateError;
pub use generator::{GeneratedFiles, GeneratorConfig, TypeScriptFileGenerator};
pub use hierarchy::{ResolveError, TypeResolver};
pub use validation::MessageStyle;

// Re-export the engine surface callers need to build inputs.
pub use decogen_engine::{EnumMapping, OutputKind, Settings, StringQuotes, ir};
