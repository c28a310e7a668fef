//! Ordering wrapper over the emission engine.
//!
//! The engine emits declarations in the order it receives them and makes no
//! ordering promise of its own, so determinism is enforced going in: enums
//! first, then classes, each sorted lexically by name. Members stay in
//! declaration order. After invocation no reordering is needed.

use decogen_engine::ir::ClassGraph;
use decogen_engine::{EmitterExtension, Settings, emit};

pub struct OrderedGenerator {
    settings: Settings,
}

impl OrderedGenerator {
    pub fn new(settings: Settings) -> Self {
        Self { settings }
    }

    pub fn generate(&self, graph: &ClassGraph, extensions: &[Box<dyn EmitterExtension>]) -> String {
        let mut ordered = graph.clone();
        ordered.enums.sort_by(|a, b| a.name.cmp(&b.name));
        ordered.classes.sort_by(|a, b| a.name.cmp(&b.name));
        emit(&ordered, &self.settings, extensions)
    }
}
