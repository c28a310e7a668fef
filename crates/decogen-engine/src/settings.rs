//! Emitter settings.

use serde::{Deserialize, Serialize};

/// Settings for one generation run.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Output module kind.
    pub output_kind: OutputKind,
    /// How enums are emitted.
    pub enum_mapping: EnumMapping,
    /// Quote style for string literals.
    pub quotes: StringQuotes,
    /// Indentation unit. Default: four spaces.
    pub indent: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            output_kind: OutputKind::default(),
            enum_mapping: EnumMapping::default(),
            quotes: StringQuotes::default(),
            indent: "    ".to_string(),
        }
    }
}

/// Output module kind.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputKind {
    /// ES module: declarations carry `export`.
    #[default]
    Module,
    /// Global script: no `export` keywords.
    Global,
}

/// Enum mapping strategy.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EnumMapping {
    /// `enum Channel { SMS = 'SMS' }`
    #[default]
    AsEnum,
    /// `type Channel = 'SMS' | 'VIBER';`
    AsUnion,
}

/// String-quote style.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StringQuotes {
    #[default]
    Single,
    Double,
}

impl StringQuotes {
    /// Quote `value` in this style.
    pub fn quote(&self, value: &str) -> String {
        match self {
            StringQuotes::Single => format!("'{}'", value),
            StringQuotes::Double => format!("\"{}\"", value),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn quote_styles() {
        assert_eq!(StringQuotes::Single.quote("SMS"), "'SMS'");
        assert_eq!(StringQuotes::Double.quote("SMS"), "\"SMS\"");
    }

    #[test]
    fn default_indent_is_four_spaces() {
        assert_eq!(Settings::default().indent, "    ");
    }
}
