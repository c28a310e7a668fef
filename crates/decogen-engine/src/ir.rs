//! Intermediate representation for decorator-annotated class generation.
//!
//! Callers build a [`ClassGraph`] once per generation run; the graph is
//! read-only from then on. Validation annotations form a closed vocabulary
//! ([`Annotation`]); anything outside it goes through
//! [`Annotation::Custom`] and a caller-side registry.

use serde::{Deserialize, Serialize};

/// A complete input class graph for one generation run.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ClassGraph {
    /// Classes to emit.
    pub classes: Vec<ClassDef>,
    /// String enums to emit.
    pub enums: Vec<EnumDef>,
    /// Resolved polymorphic hierarchies. Subtypes named here get their
    /// discriminator property emitted as a literal type.
    pub hierarchies: Vec<Hierarchy>,
}

/// A class definition.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClassDef {
    /// Class name (e.g., "User", "SmsMessage").
    pub name: String,
    /// Base class, if any.
    pub extends: Option<String>,
    /// Documentation comment.
    pub docs: Option<String>,
    /// Fields in declaration order.
    pub fields: Vec<FieldDef>,
}

/// A field: the annotated member extensions inspect.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FieldDef {
    /// Property name as emitted.
    pub name: String,
    /// Property type.
    pub ty: TsType,
    /// Emit as optional (`name?: type`).
    pub optional: bool,
    /// Validation annotations present on this member.
    pub annotations: Vec<Annotation>,
}

/// The closed validation-annotation vocabulary.
///
/// Unsupported annotation/type combinations produce no decorator; that is
/// silent by design so callers can adopt annotations incrementally.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Annotation {
    /// Nested-object validation.
    Valid,
    /// Presence check (must not be null or undefined).
    NotNull,
    /// Must not be empty.
    NotEmpty,
    /// Length bounds on strings, size bounds on arrays.
    Size { min: Option<u64>, max: Option<u64> },
    /// Minimum numeric value.
    Min(i64),
    /// Maximum numeric value.
    Max(i64),
    /// Caller-registered decorator marker, identified by the annotation's
    /// fully-qualified name.
    Custom { qualified_name: String },
}

/// A string enum definition.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EnumDef {
    pub name: String,
    pub variants: Vec<EnumVariant>,
}

/// One enum variant.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EnumVariant {
    /// Member name.
    pub name: String,
    /// String value.
    pub value: String,
}

/// A resolved polymorphic hierarchy: base type, discriminator field, and the
/// discriminant tag for every subtype.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Hierarchy {
    /// Base class name.
    pub base: String,
    /// Discriminator property name.
    pub discriminator: String,
    /// Subtype-to-tag mapping. Tags are unique within one hierarchy.
    pub variants: Vec<HierarchyVariant>,
}

/// One subtype's discriminant assignment.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HierarchyVariant {
    pub subtype: String,
    pub tag: String,
}

/// A TypeScript type reference.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum TsType {
    String,
    Number,
    Boolean,
    Any,
    /// `T[]`
    Array(Box<TsType>),
    /// `{ [index: string]: V }`
    Map(Box<TsType>),
    /// Reference to another class or enum by name.
    Ref(String),
    /// A string literal type (non-widened).
    StringLiteral(String),
}

impl TsType {
    /// The referenced type name, if this is a direct or array reference.
    pub fn referenced(&self) -> Option<&str> {
        match self {
            TsType::Ref(name) => Some(name),
            TsType::Array(inner) | TsType::Map(inner) => inner.referenced(),
            _ => None,
        }
    }

    pub fn is_array(&self) -> bool {
        matches!(self, TsType::Array(_))
    }
}

impl ClassGraph {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_class(&mut self, class: ClassDef) {
        self.classes.push(class);
    }

    pub fn add_enum(&mut self, def: EnumDef) {
        self.enums.push(def);
    }
}

impl ClassDef {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            extends: None,
            docs: None,
            fields: Vec::new(),
        }
    }

    pub fn extends(mut self, base: impl Into<String>) -> Self {
        self.extends = Some(base.into());
        self
    }

    pub fn with_docs(mut self, docs: impl Into<String>) -> Self {
        self.docs = Some(docs.into());
        self
    }

    pub fn field(mut self, field: FieldDef) -> Self {
        self.fields.push(field);
        self
    }
}

impl FieldDef {
    pub fn new(name: impl Into<String>, ty: TsType) -> Self {
        Self {
            name: name.into(),
            ty,
            optional: false,
            annotations: Vec::new(),
        }
    }

    pub fn optional(name: impl Into<String>, ty: TsType) -> Self {
        Self {
            name: name.into(),
            ty,
            optional: true,
            annotations: Vec::new(),
        }
    }

    pub fn annotate(mut self, annotation: Annotation) -> Self {
        self.annotations.push(annotation);
        self
    }

    /// Whether an annotation matching `predicate` is present on this member.
    pub fn has(&self, predicate: impl Fn(&Annotation) -> bool) -> bool {
        self.annotations.iter().any(predicate)
    }
}

impl EnumDef {
    /// A string enum whose values equal the member names.
    pub fn string_enum(name: impl Into<String>, values: Vec<&str>) -> Self {
        Self {
            name: name.into(),
            variants: values
                .into_iter()
                .map(|v| EnumVariant {
                    name: v.to_string(),
                    value: v.to_string(),
                })
                .collect(),
        }
    }
}

/// A decorator descriptor: name plus ordered argument list, rendered as
/// `@Name(arg1, arg2)`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Decorator {
    pub name: String,
    pub args: Vec<String>,
}

impl Decorator {
    pub fn new(name: impl Into<String>, args: Vec<String>) -> Self {
        Self {
            name: name.into(),
            args,
        }
    }

    pub fn render(&self) -> String {
        format!("@{}({})", self.name, self.args.join(", "))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn build_graph_programmatically() {
        let mut graph = ClassGraph::new();

        graph.add_enum(EnumDef::string_enum("Channel", vec!["SMS", "VIBER"]));

        graph.add_class(
            ClassDef::new("SmsMessage")
                .extends("OutboundMessage")
                .field(
                    FieldDef::new("text", TsType::String)
                        .annotate(Annotation::NotEmpty)
                        .annotate(Annotation::Size {
                            min: None,
                            max: Some(160),
                        }),
                ),
        );

        assert_eq!(graph.classes.len(), 1);
        assert_eq!(graph.enums.len(), 1);
        assert!(graph.classes[0].fields[0].has(|a| matches!(a, Annotation::NotEmpty)));
    }

    #[test]
    fn decorator_renders_args_in_order() {
        let decorator = Decorator::new(
            "Max",
            vec!["1".into(), "{ message: 'too large' }".into()],
        );
        assert_eq!(decorator.render(), "@Max(1, { message: 'too large' })");
    }

    #[test]
    fn referenced_sees_through_arrays() {
        let ty = TsType::Array(Box::new(TsType::Ref("OutboundMessage".into())));
        assert_eq!(ty.referenced(), Some("OutboundMessage"));
        assert!(ty.is_array());
        assert_eq!(TsType::String.referenced(), None);
    }
}
