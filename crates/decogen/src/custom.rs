//! Custom decorator extraction and registration.
//!
//! Custom decorators live as TypeScript source files under a caller-supplied
//! scan root. Extraction runs once at generator construction: every `.ts`
//! file under the root becomes a [`CustomDecorator`] named after its file
//! stem, with a destination path relative to the root. The registry pairs
//! those files with caller-declared [`CustomAnnotation`] mappings so
//! `Annotation::Custom` members convert to `@Name()` decorators.

use crate::error::GenerateError;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// A custom decorator backed by a TypeScript source file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CustomDecorator {
    /// Decorator name as referenced in generated code.
    pub name: String,
    /// Where the source file lives now.
    pub source_path: PathBuf,
    /// Where it is copied under the output directory, relative.
    pub destination_path: PathBuf,
}

impl CustomDecorator {
    /// The import source for this decorator, relative to the generated file
    /// (destination path without the `.ts` extension).
    pub fn import_source(&self) -> String {
        let stem = self.destination_path.with_extension("");
        format!("./{}", stem.display())
    }
}

/// A caller-declared mapping from a source annotation's fully-qualified name
/// to a custom decorator name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CustomAnnotation {
    pub qualified_name: String,
    pub decorator_name: String,
}

/// Scan `root` for decorator sources. Entries are visited in lexical order
/// so extraction is deterministic.
pub fn extract_custom_decorators(root: &Path) -> Result<Vec<CustomDecorator>, GenerateError> {
    let mut decorators = Vec::new();
    for entry in WalkDir::new(root).sort_by_file_name() {
        let entry = entry.map_err(|e| GenerateError::io(root, e.into()))?;
        if !entry.file_type().is_file() {
            continue;
        }
        let path = entry.path();
        if path.extension().and_then(|e| e.to_str()) != Some("ts") {
            continue;
        }
        let Some(name) = path.file_stem().and_then(|s| s.to_str()) else {
            continue;
        };
        let destination = path
            .strip_prefix(root)
            .map(Path::to_path_buf)
            .unwrap_or_else(|_| path.to_path_buf());
        decorators.push(CustomDecorator {
            name: name.to_string(),
            source_path: path.to_path_buf(),
            destination_path: destination,
        });
    }
    Ok(decorators)
}

/// Immutable registry created once at generator construction.
#[derive(Debug, Clone, Default)]
pub struct CustomDecoratorRegistry {
    decorators: Vec<CustomDecorator>,
    annotations: Vec<CustomAnnotation>,
}

impl CustomDecoratorRegistry {
    /// Pair extracted decorators with declared annotations. An annotation
    /// naming a decorator with no source file under the scan root is a
    /// configuration error.
    pub fn new(
        decorators: Vec<CustomDecorator>,
        annotations: Vec<CustomAnnotation>,
    ) -> Result<Self, GenerateError> {
        for annotation in &annotations {
            if !decorators
                .iter()
                .any(|d| d.name == annotation.decorator_name)
            {
                return Err(GenerateError::UnknownCustomDecorator {
                    annotation: annotation.qualified_name.clone(),
                    decorator: annotation.decorator_name.clone(),
                });
            }
        }
        Ok(Self {
            decorators,
            annotations,
        })
    }

    /// Look up the decorator an annotation's qualifying name maps to.
    /// Unregistered names yield `None` (the annotation is skipped).
    pub fn decorator_for(&self, qualified_name: &str) -> Option<&CustomDecorator> {
        self.annotations
            .iter()
            .find(|a| a.qualified_name == qualified_name)
            .and_then(|a| self.decorators.iter().find(|d| d.name == a.decorator_name))
    }

    /// All extracted decorators, in scan order.
    pub fn decorators(&self) -> &[CustomDecorator] {
        &self.decorators
    }

    /// Declared annotation mappings, in declaration order.
    pub fn annotations(&self) -> &[CustomAnnotation] {
        &self.annotations
    }

    /// Decorators actually referenced by `code`.
    pub fn referenced<'a>(&'a self, code: &str) -> Vec<&'a CustomDecorator> {
        self.decorators
            .iter()
            .filter(|d| code.contains(&format!("@{}(", d.name)))
            .collect()
    }
}
