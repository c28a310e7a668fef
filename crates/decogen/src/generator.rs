//! Output assembly: the end-to-end generation pipeline.
//!
//! One [`TypeScriptFileGenerator`] run takes a class graph to completion
//! synchronously: resolve hierarchies, emit in fixed order, inject imports,
//! write the primary file, then conditionally materialize the shared message
//! catalog, the localization scaffold, and any referenced custom decorator
//! sources. Re-running with the same inputs overwrites the same files with
//! the same bytes. Concurrent runs against overlapping output paths are not
//! supported.

use crate::custom::{CustomAnnotation, CustomDecoratorRegistry, extract_custom_decorators};
use crate::error::GenerateError;
use crate::hierarchy::TypeResolver;
use crate::imports::inject_imports;
use crate::ordered::OrderedGenerator;
use crate::transform::ClassTransformerExtension;
use crate::validation::localization::{
    LOCALIZATION_CLASS_NAME, LOCALIZATION_FILE_NAME, LOCALIZATION_SOURCE_CODE,
};
use crate::validation::messages::{
    COMMON_VALIDATION_MESSAGES_CLASS_NAME, COMMON_VALIDATION_MESSAGES_FILE_NAME,
    COMMON_VALIDATION_MESSAGES_SOURCE_CODE,
};
use crate::validation::{ClassValidatorExtension, MessageStyle};
use decogen_engine::ir::ClassGraph;
use decogen_engine::{EmitterExtension, ImportResolver, Settings};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Configuration for one generator instance.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneratorConfig {
    /// Base output directory.
    pub base_path: PathBuf,
    /// Primary generated file, relative to `base_path`.
    pub output_file: PathBuf,
    /// Emitter settings.
    pub settings: Settings,
    /// How validation-failure messages are rendered.
    pub message_style: MessageStyle,
    /// Root scanned once for custom decorator sources.
    pub custom_decorator_root: Option<PathBuf>,
    /// Mappings from custom annotation qualifying names to decorator names.
    pub custom_annotations: Vec<CustomAnnotation>,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            base_path: PathBuf::from("."),
            output_file: PathBuf::from("index.ts"),
            settings: Settings::default(),
            message_style: MessageStyle::default(),
            custom_decorator_root: None,
            custom_annotations: Vec::new(),
        }
    }
}

/// What one generation run wrote.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedFiles {
    /// Final generated code, byte-identical to the primary file's content.
    pub code: String,
    /// Path of the primary file.
    pub primary: PathBuf,
    /// Auxiliary files written alongside it.
    pub extras: Vec<PathBuf>,
}

/// Whether `code` references the shared message catalog. A marker-string
/// containment check, deliberately lightweight; swap the implementation for
/// semantic reference tracking without touching callers.
pub fn needs_shared_catalog(code: &str) -> bool {
    code.contains(COMMON_VALIDATION_MESSAGES_CLASS_NAME)
}

/// Whether `code` references localization support. Same containment
/// heuristic as [`needs_shared_catalog`].
pub fn needs_localization(code: &str) -> bool {
    code.contains(LOCALIZATION_CLASS_NAME)
}

/// Generates one decorator-annotated TypeScript file plus its auxiliary
/// files from a class graph.
pub struct TypeScriptFileGenerator {
    config: GeneratorConfig,
    registry: CustomDecoratorRegistry,
    resolvers: Vec<TypeResolver>,
}

impl TypeScriptFileGenerator {
    /// Build a generator, extracting custom decorators from the configured
    /// scan root. Extraction happens exactly once; the registry is immutable
    /// for the generator's lifetime.
    pub fn new(config: GeneratorConfig) -> Result<Self, GenerateError> {
        let decorators = match &config.custom_decorator_root {
            Some(root) => extract_custom_decorators(root)?,
            None => Vec::new(),
        };
        let registry = CustomDecoratorRegistry::new(decorators, config.custom_annotations.clone())?;
        Ok(Self {
            config,
            registry,
            resolvers: Vec::new(),
        })
    }

    /// Register a polymorphic hierarchy resolver. Unrelated hierarchies
    /// register independently.
    pub fn with_resolver(mut self, resolver: TypeResolver) -> Self {
        self.resolvers.push(resolver);
        self
    }

    /// Run one generation to completion.
    pub fn generate(&self, graph: &ClassGraph) -> Result<GeneratedFiles, GenerateError> {
        // Hierarchies resolve eagerly; a collision or totality failure aborts
        // before anything is written.
        let mut resolved = graph.clone();
        for resolver in &self.resolvers {
            resolved.hierarchies.push(resolver.resolve(graph)?);
        }

        let extensions = self.create_extensions();
        let generator = OrderedGenerator::new(self.config.settings.clone());
        let raw = generator.generate(&resolved, &extensions);

        let resolvers: Vec<&dyn ImportResolver> = extensions
            .iter()
            .filter_map(|extension| extension.import_resolver())
            .collect();
        let code = inject_imports(&raw, &resolvers);

        let primary = self.config.base_path.join(&self.config.output_file);
        let out_dir = primary
            .parent()
            .map(Path::to_path_buf)
            .unwrap_or_else(|| self.config.base_path.clone());
        fs::create_dir_all(&out_dir).map_err(|e| GenerateError::io(&out_dir, e))?;

        let code = format!("{}\n", code.trim());
        write_file(&primary, &code)?;

        let mut extras = Vec::new();
        if needs_shared_catalog(&code) {
            let path = out_dir.join(COMMON_VALIDATION_MESSAGES_FILE_NAME);
            write_file(&path, COMMON_VALIDATION_MESSAGES_SOURCE_CODE)?;
            extras.push(path);
        }
        if needs_localization(&code) {
            let path = out_dir.join(LOCALIZATION_FILE_NAME);
            write_file(&path, LOCALIZATION_SOURCE_CODE)?;
            extras.push(path);
        }
        for decorator in self.registry.referenced(&code) {
            if !decorator.source_path.exists() {
                return Err(GenerateError::MissingDecoratorSource {
                    name: decorator.name.clone(),
                    path: decorator.source_path.clone(),
                });
            }
            let destination = out_dir.join(&decorator.destination_path);
            if let Some(parent) = destination.parent() {
                fs::create_dir_all(parent).map_err(|e| GenerateError::io(parent, e))?;
            }
            fs::copy(&decorator.source_path, &destination)
                .map_err(|e| GenerateError::io(&destination, e))?;
            debug!(decorator = %decorator.name, path = %destination.display(), "copied custom decorator");
            extras.push(destination);
        }

        info!(
            primary = %primary.display(),
            extras = extras.len(),
            "generation complete"
        );
        Ok(GeneratedFiles {
            code,
            primary,
            extras,
        })
    }

    fn create_extensions(&self) -> Vec<Box<dyn EmitterExtension>> {
        vec![
            Box::new(ClassTransformerExtension::new(self.config.settings.quotes)),
            Box::new(ClassValidatorExtension::new(
                self.config.message_style,
                self.config.settings.quotes,
                self.registry.clone(),
            )),
        ]
    }
}

fn write_file(path: &Path, content: &str) -> Result<(), GenerateError> {
    fs::write(path, content).map_err(|e| GenerateError::io(path, e))?;
    debug!(path = %path.display(), bytes = content.len(), "wrote file");
    Ok(())
}
