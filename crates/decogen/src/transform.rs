//! class-transformer decorator emission for polymorphic fields.
//!
//! Any field typed as a hierarchy base (directly or as an array) gets a
//! `@Type` decorator carrying the discriminator mapping, so the runtime can
//! instantiate the concrete subtype during plain-to-class transformation.

use decogen_engine::ir::{ClassDef, Decorator, FieldDef};
use decogen_engine::{EmitContext, EmitterExtension, ImportResolver, StringQuotes};

/// Import source for the `@Type` decorator.
pub const CLASS_TRANSFORMER_MODULE: &str = "class-transformer";

pub struct ClassTransformerExtension {
    quotes: StringQuotes,
}

impl ClassTransformerExtension {
    pub fn new(quotes: StringQuotes) -> Self {
        Self { quotes }
    }
}

impl EmitterExtension for ClassTransformerExtension {
    fn name(&self) -> &'static str {
        "class-transformer"
    }

    fn decorate_field(
        &self,
        field: &FieldDef,
        _class: &ClassDef,
        ctx: &EmitContext,
    ) -> Vec<Decorator> {
        let Some(base) = field.ty.referenced() else {
            return Vec::new();
        };
        let Some(hierarchy) = ctx.graph.hierarchies.iter().find(|h| h.base == base) else {
            return Vec::new();
        };

        let subtypes: Vec<String> = hierarchy
            .variants
            .iter()
            .map(|v| {
                format!(
                    "{{ value: {}, name: {} }}",
                    v.subtype,
                    self.quotes.quote(&v.tag)
                )
            })
            .collect();
        let options = format!(
            "{{ discriminator: {{ property: {}, subTypes: [{}] }}, keepDiscriminatorProperty: true }}",
            self.quotes.quote(&hierarchy.discriminator),
            subtypes.join(", ")
        );

        vec![Decorator::new(
            "Type",
            vec!["() => Object".to_string(), options],
        )]
    }

    fn import_resolver(&self) -> Option<&dyn ImportResolver> {
        Some(self)
    }
}

impl ImportResolver for ClassTransformerExtension {
    fn resolve(&self, code: &str) -> Vec<String> {
        if code.contains("@Type(") {
            vec![format!(
                "import {{ Type }} from '{}';",
                CLASS_TRANSFORMER_MODULE
            )]
        } else {
            Vec::new()
        }
    }
}
