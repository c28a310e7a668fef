//! Polymorphic type resolution.
//!
//! A [`TypeResolver`] relates a base class, a discriminator field name, and a
//! selector function from subtype to discriminant tag. Resolution walks the
//! class graph, collects every subtype reachable from the base, and produces
//! the [`Hierarchy`] mapping the emitter needs for literal-typed
//! discriminator properties and `@Type` discriminator decorators.
//!
//! Resolution is eager and total: a subtype without a tag or two subtypes
//! sharing a tag fail the run before any output is written, with enough
//! context to diagnose the configuration.

use decogen_engine::ir::{ClassDef, ClassGraph, Hierarchy, HierarchyVariant};

/// A failed hierarchy resolution. These are configuration errors.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ResolveError {
    #[error("hierarchy base '{base}' has no subtypes in the class graph")]
    NoSubtypes { base: String },

    #[error("subtype '{subtype}' of '{base}' resolved no discriminant value")]
    MissingDiscriminant { base: String, subtype: String },

    #[error(
        "discriminant collision in hierarchy '{base}': tag '{tag}' claimed by both '{first}' and '{second}'"
    )]
    DiscriminantCollision {
        base: String,
        tag: String,
        first: String,
        second: String,
    },
}

/// Resolver for one polymorphic hierarchy.
///
/// Multiple resolvers for unrelated hierarchies register independently on
/// the generator and compose without interference.
pub struct TypeResolver {
    base: String,
    discriminator: String,
    select: Box<dyn Fn(&ClassDef) -> Option<String>>,
}

impl TypeResolver {
    /// A resolver that asks `select` for each registered subtype's tag.
    pub fn new(
        base: impl Into<String>,
        discriminator: impl Into<String>,
        select: impl Fn(&ClassDef) -> Option<String> + 'static,
    ) -> Self {
        Self {
            base: base.into(),
            discriminator: discriminator.into(),
            select: Box::new(select),
        }
    }

    /// A resolver over an explicit subtype-to-tag listing.
    pub fn from_tags(
        base: impl Into<String>,
        discriminator: impl Into<String>,
        tags: &[(&str, &str)],
    ) -> Self {
        let table: Vec<(String, String)> = tags
            .iter()
            .map(|(subtype, tag)| (subtype.to_string(), tag.to_string()))
            .collect();
        Self::new(base, discriminator, move |class| {
            table
                .iter()
                .find(|(subtype, _)| *subtype == class.name)
                .map(|(_, tag)| tag.clone())
        })
    }

    /// The base class this resolver covers.
    pub fn base(&self) -> &str {
        &self.base
    }

    /// Compute the discriminant mapping over every subtype of the base
    /// present in `graph`. Subtypes are ordered lexically so the mapping is
    /// stable across runs.
    pub fn resolve(&self, graph: &ClassGraph) -> Result<Hierarchy, ResolveError> {
        let mut subtypes: Vec<&ClassDef> = graph
            .classes
            .iter()
            .filter(|class| self.is_subtype(graph, class))
            .collect();
        subtypes.sort_by(|a, b| a.name.cmp(&b.name));

        if subtypes.is_empty() {
            return Err(ResolveError::NoSubtypes {
                base: self.base.clone(),
            });
        }

        let mut variants: Vec<HierarchyVariant> = Vec::new();
        for class in subtypes {
            let tag = (self.select)(class).ok_or_else(|| ResolveError::MissingDiscriminant {
                base: self.base.clone(),
                subtype: class.name.clone(),
            })?;
            if let Some(prev) = variants.iter().find(|v| v.tag == tag) {
                return Err(ResolveError::DiscriminantCollision {
                    base: self.base.clone(),
                    tag,
                    first: prev.subtype.clone(),
                    second: class.name.clone(),
                });
            }
            variants.push(HierarchyVariant {
                subtype: class.name.clone(),
                tag,
            });
        }

        Ok(Hierarchy {
            base: self.base.clone(),
            discriminator: self.discriminator.clone(),
            variants,
        })
    }

    fn is_subtype(&self, graph: &ClassGraph, class: &ClassDef) -> bool {
        let mut current = class.extends.as_deref();
        let mut hops = 0;
        while let Some(name) = current {
            if name == self.base {
                return true;
            }
            current = graph
                .classes
                .iter()
                .find(|c| c.name == name)
                .and_then(|c| c.extends.as_deref());
            hops += 1;
            if hops > graph.classes.len() {
                // extends cycle; nothing sensible to resolve
                return false;
            }
        }
        false
    }
}
