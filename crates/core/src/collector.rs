//! Type collection.
//!
//! Walks the namespace tree and gathers the user-authored model and enum
//! declarations that get a validator of their own.

use std::collections::HashSet;

use tracing::{debug, warn};
use zodspec_common::{DeclOrigin, EnumDecl, ModelDecl, Namespace, NamespaceEntry};

/// Fully qualified namespaces owned by the host framework. Nothing below
/// them is collected.
pub const INTRINSIC_NAMESPACES: &[&str] = &["TypeSpec"];

/// Declarations selected for emission, in traversal order.
#[derive(Debug, Default, Clone)]
pub struct CollectedTypes<'a> {
    /// Models to emit, before ordering.
    pub models: Vec<&'a ModelDecl>,
    /// Enums to emit.
    pub enums: Vec<&'a EnumDecl>,
}

impl CollectedTypes<'_> {
    /// True when there is nothing to emit.
    pub fn is_empty(&self) -> bool {
        self.models.is_empty() && self.enums.is_empty()
    }
}

/// Collect every emittable declaration reachable from `root`.
///
/// A namespace contributes its own models and enums before its children,
/// depth-first. Names are unique in the result: the first declaration seen wins.
pub fn collect_types(root: &Namespace) -> CollectedTypes<'_> {
    let mut collector = Collector::default();
    collector.visit(root, "");
    debug!(
        models = collector.collected.models.len(),
        enums = collector.collected.enums.len(),
        "Collected declarations"
    );
    collector.collected
}

#[derive(Default)]
struct Collector<'a> {
    collected: CollectedTypes<'a>,
    seen: HashSet<&'a str>,
}

impl<'a> Collector<'a> {
    fn visit(&mut self, namespace: &'a Namespace, parent: &str) {
        let path = qualify(parent, &namespace.name);
        if INTRINSIC_NAMESPACES.contains(&path.as_str()) {
            debug!(namespace = %path, "Skipping framework namespace");
            return;
        }

        for model in &namespace.models {
            if let Some(reason) = model_exclusion(model) {
                debug!(namespace = %path, model = %model.name, reason, "Skipping model");
                continue;
            }
            if self.claim(&model.name, &path) {
                self.collected.models.push(model);
            }
        }

        for decl in &namespace.enums {
            if decl.origin == DeclOrigin::Library {
                debug!(namespace = %path, name = %decl.name, "Skipping library enum");
                continue;
            }
            if self.claim(&decl.name, &path) {
                self.collected.enums.push(decl);
            }
        }

        for entry in &namespace.namespaces {
            match entry {
                NamespaceEntry::Namespace(child) => self.visit(child, &path),
                NamespaceEntry::Malformed(value) => {
                    warn!(namespace = %path, entry = %value, "Skipping malformed namespace entry");
                }
            }
        }
    }

    /// Reserve a name. Returns false (and warns) if it is already taken.
    fn claim(&mut self, name: &'a str, namespace: &str) -> bool {
        if self.seen.insert(name) {
            true
        } else {
            warn!(
                namespace = %namespace,
                name = %name,
                "Duplicate declaration name, keeping the first one"
            );
            false
        }
    }
}

fn model_exclusion(model: &ModelDecl) -> Option<&'static str> {
    if model.is_intrinsic_container() {
        Some("intrinsic container")
    } else if model.origin == DeclOrigin::Library {
        Some("library declaration")
    } else if model.is_template() {
        Some("unbound template parameters")
    } else {
        None
    }
}

fn qualify(parent: &str, name: &str) -> String {
    match (parent.is_empty(), name.is_empty()) {
        (_, true) => parent.to_string(),
        (true, false) => name.to_string(),
        (false, false) => format!("{parent}.{name}"),
    }
}
