//! Annotation-to-decorator conversion for class-validator.
//!
//! The converter table is a fixed ordered sequence: nested-validation
//! markers first, presence checks next, then length/size/range checks. The
//! order is part of the observable contract (it decides decorator order on a
//! member and import specifier order), so it is encoded literally here
//! rather than left to registration order.
//!
//! Annotations with no converter for the member's type produce no decorator.

pub mod localization;
pub mod messages;

use crate::custom::CustomDecoratorRegistry;
use decogen_engine::ir::{Annotation, ClassDef, Decorator, FieldDef, TsType};
use decogen_engine::{EmitContext, EmitterExtension, ImportResolver, StringQuotes};
use localization::LOCALIZATION_CLASS_NAME;
use messages::COMMON_VALIDATION_MESSAGES_CLASS_NAME;
use serde::{Deserialize, Serialize};

/// Import source for the built-in decorator vocabulary.
pub const CLASS_VALIDATOR_MODULE: &str = "class-validator";

/// The canonical decorator vocabulary, in emission and import order.
pub const CLASS_VALIDATOR_SYMBOLS: [&str; 9] = [
    "ValidateNested",
    "IsDefined",
    "IsNotEmpty",
    "MaxLength",
    "MinLength",
    "Max",
    "Min",
    "ArrayMaxSize",
    "ArrayMinSize",
];

/// How validation-failure messages are rendered.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum MessageStyle {
    /// `{ message: CommonValidationMessages.Max(1) }` — references the
    /// shared catalog, which is then materialized alongside the output.
    #[default]
    SharedCatalog,
    /// `{ message: Localization.getMessage('Max', 1) }` — references the
    /// localization scaffold instead.
    Localized,
    /// No message option.
    Plain,
}

#[derive(Debug, Clone, Copy)]
struct MessageBuilder {
    style: MessageStyle,
    quotes: StringQuotes,
}

impl MessageBuilder {
    /// The options-object argument for a decorator keyed by (kind, params).
    fn option(&self, kind: &str, params: &[String]) -> Option<String> {
        match self.style {
            MessageStyle::SharedCatalog => Some(format!(
                "{{ message: {}.{}({}) }}",
                COMMON_VALIDATION_MESSAGES_CLASS_NAME,
                kind,
                params.join(", ")
            )),
            MessageStyle::Localized => {
                let mut args = vec![self.quotes.quote(kind)];
                args.extend(params.iter().cloned());
                Some(format!(
                    "{{ message: {}.getMessage({}) }}",
                    LOCALIZATION_CLASS_NAME,
                    args.join(", ")
                ))
            }
            MessageStyle::Plain => None,
        }
    }
}

/// One annotation-to-decorator conversion rule: inspect the annotations
/// present on a member and produce at most one decorator.
pub trait DecoratorConverter {
    fn matches(&self, field: &FieldDef) -> Option<Decorator>;
}

fn size_bounds(field: &FieldDef) -> Option<(Option<u64>, Option<u64>)> {
    field.annotations.iter().find_map(|a| match a {
        Annotation::Size { min, max } => Some((*min, *max)),
        _ => None,
    })
}

fn with_message(name: &str, mut args: Vec<String>, message: Option<String>) -> Decorator {
    if let Some(message) = message {
        args.push(message);
    }
    Decorator::new(name, args)
}

struct NestedValidationConverter;

impl DecoratorConverter for NestedValidationConverter {
    fn matches(&self, field: &FieldDef) -> Option<Decorator> {
        if !field.has(|a| matches!(a, Annotation::Valid)) {
            return None;
        }
        let args = if field.ty.is_array() {
            vec!["{ each: true }".to_string()]
        } else {
            Vec::new()
        };
        Some(Decorator::new("ValidateNested", args))
    }
}

struct DefinedConverter(MessageBuilder);

impl DecoratorConverter for DefinedConverter {
    fn matches(&self, field: &FieldDef) -> Option<Decorator> {
        field
            .has(|a| matches!(a, Annotation::NotNull))
            .then(|| with_message("IsDefined", Vec::new(), self.0.option("IsDefined", &[])))
    }
}

struct NotEmptyConverter(MessageBuilder);

impl DecoratorConverter for NotEmptyConverter {
    fn matches(&self, field: &FieldDef) -> Option<Decorator> {
        field
            .has(|a| matches!(a, Annotation::NotEmpty))
            .then(|| with_message("IsNotEmpty", Vec::new(), self.0.option("IsNotEmpty", &[])))
    }
}

struct MaxLengthConverter(MessageBuilder);

impl DecoratorConverter for MaxLengthConverter {
    fn matches(&self, field: &FieldDef) -> Option<Decorator> {
        if field.ty != TsType::String {
            return None;
        }
        let (_, max) = size_bounds(field)?;
        let max = max?.to_string();
        Some(with_message(
            "MaxLength",
            vec![max.clone()],
            self.0.option("MaxLength", &[max]),
        ))
    }
}

struct MinLengthConverter(MessageBuilder);

impl DecoratorConverter for MinLengthConverter {
    fn matches(&self, field: &FieldDef) -> Option<Decorator> {
        if field.ty != TsType::String {
            return None;
        }
        let (min, _) = size_bounds(field)?;
        let min = min?.to_string();
        Some(with_message(
            "MinLength",
            vec![min.clone()],
            self.0.option("MinLength", &[min]),
        ))
    }
}

struct MaxConverter(MessageBuilder);

impl DecoratorConverter for MaxConverter {
    fn matches(&self, field: &FieldDef) -> Option<Decorator> {
        field.annotations.iter().find_map(|a| match a {
            Annotation::Max(value) => {
                let value = value.to_string();
                Some(with_message(
                    "Max",
                    vec![value.clone()],
                    self.0.option("Max", &[value]),
                ))
            }
            _ => None,
        })
    }
}

struct MinConverter(MessageBuilder);

impl DecoratorConverter for MinConverter {
    fn matches(&self, field: &FieldDef) -> Option<Decorator> {
        field.annotations.iter().find_map(|a| match a {
            Annotation::Min(value) => {
                let value = value.to_string();
                Some(with_message(
                    "Min",
                    vec![value.clone()],
                    self.0.option("Min", &[value]),
                ))
            }
            _ => None,
        })
    }
}

struct ArrayMaxSizeConverter(MessageBuilder);

impl DecoratorConverter for ArrayMaxSizeConverter {
    fn matches(&self, field: &FieldDef) -> Option<Decorator> {
        if !field.ty.is_array() {
            return None;
        }
        let (_, max) = size_bounds(field)?;
        let max = max?.to_string();
        Some(with_message(
            "ArrayMaxSize",
            vec![max.clone()],
            self.0.option("ArrayMaxSize", &[max]),
        ))
    }
}

struct ArrayMinSizeConverter(MessageBuilder);

impl DecoratorConverter for ArrayMinSizeConverter {
    fn matches(&self, field: &FieldDef) -> Option<Decorator> {
        if !field.ty.is_array() {
            return None;
        }
        let (min, _) = size_bounds(field)?;
        let min = min?.to_string();
        Some(with_message(
            "ArrayMinSize",
            vec![min.clone()],
            self.0.option("ArrayMinSize", &[min]),
        ))
    }
}

/// The built-in converter sequence, in canonical order.
pub fn converters(style: MessageStyle, quotes: StringQuotes) -> Vec<Box<dyn DecoratorConverter>> {
    let messages = MessageBuilder { style, quotes };
    vec![
        Box::new(NestedValidationConverter),
        Box::new(DefinedConverter(messages)),
        Box::new(NotEmptyConverter(messages)),
        Box::new(MaxLengthConverter(messages)),
        Box::new(MinLengthConverter(messages)),
        Box::new(MaxConverter(messages)),
        Box::new(MinConverter(messages)),
        Box::new(ArrayMaxSizeConverter(messages)),
        Box::new(ArrayMinSizeConverter(messages)),
    ]
}

/// The class-validator emitter extension: converts the annotations present
/// on each field into decorators, built-ins first (canonical order), then
/// registered custom decorators in registry order.
pub struct ClassValidatorExtension {
    converters: Vec<Box<dyn DecoratorConverter>>,
    registry: CustomDecoratorRegistry,
}

impl ClassValidatorExtension {
    pub fn new(
        style: MessageStyle,
        quotes: StringQuotes,
        registry: CustomDecoratorRegistry,
    ) -> Self {
        Self {
            converters: converters(style, quotes),
            registry,
        }
    }
}

impl EmitterExtension for ClassValidatorExtension {
    fn name(&self) -> &'static str {
        "class-validator"
    }

    fn decorate_field(
        &self,
        field: &FieldDef,
        _class: &ClassDef,
        _ctx: &EmitContext,
    ) -> Vec<Decorator> {
        let mut decorators: Vec<Decorator> = self
            .converters
            .iter()
            .filter_map(|converter| converter.matches(field))
            .collect();

        // Registry declaration order, not annotation order on the member.
        for mapping in self.registry.annotations() {
            let present = field.has(|a| {
                matches!(a, Annotation::Custom { qualified_name }
                    if *qualified_name == mapping.qualified_name)
            });
            if !present {
                continue;
            }
            if let Some(custom) = self.registry.decorator_for(&mapping.qualified_name) {
                decorators.push(Decorator::new(custom.name.clone(), Vec::new()));
            }
        }

        decorators
    }

    fn import_resolver(&self) -> Option<&dyn ImportResolver> {
        Some(self)
    }
}

impl ImportResolver for ClassValidatorExtension {
    fn resolve(&self, code: &str) -> Vec<String> {
        let mut imports = Vec::new();

        if code.contains(COMMON_VALIDATION_MESSAGES_CLASS_NAME) {
            imports.push(format!(
                "import {{ {} }} from './{}';",
                COMMON_VALIDATION_MESSAGES_CLASS_NAME, COMMON_VALIDATION_MESSAGES_CLASS_NAME
            ));
        }

        let needed: Vec<&str> = CLASS_VALIDATOR_SYMBOLS
            .iter()
            .filter(|symbol| code.contains(&format!("@{}(", symbol)))
            .copied()
            .collect();
        if !needed.is_empty() {
            imports.push(format!(
                "import {{ {} }} from '{}';",
                needed.join(", "),
                CLASS_VALIDATOR_MODULE
            ));
        }

        if code.contains(LOCALIZATION_CLASS_NAME) {
            imports.push(format!(
                "import {{ {} }} from './{}';",
                LOCALIZATION_CLASS_NAME, LOCALIZATION_CLASS_NAME
            ));
        }

        for decorator in self.registry.decorators() {
            if code.contains(&format!("@{}(", decorator.name)) {
                imports.push(format!(
                    "import {{ {} }} from '{}';",
                    decorator.name,
                    decorator.import_source()
                ));
            }
        }

        imports
    }
}
