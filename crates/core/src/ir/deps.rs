//! Dependency analysis and emission ordering.
//!
//! A model's validator can only refer directly to schemas defined above it,
//! so models are emitted dependencies-first. Cycles cannot be ordered; the
//! edge closing a cycle is dropped and the translator falls back to a lazy
//! reference for it.

use std::collections::HashSet;

use indexmap::{IndexMap, IndexSet};
use tracing::debug;
use zodspec_common::{Container, ModelDecl, TypeNode};

use super::normalize::Scope;
use crate::collector::CollectedTypes;

/// Collected model and enum names `model` refers to, in first-appearance order.
///
/// Looks through properties and the model's own indexer, descending into
/// arrays, maps, unions, anonymous objects and intrinsic container
/// instantiations. The model itself and names outside `scope` are left out.
pub fn model_dependencies<'a>(model: &'a ModelDecl, scope: &Scope<'_>) -> IndexSet<&'a str> {
    let mut deps = IndexSet::new();
    for property in &model.properties {
        collect_node_deps(&property.ty, scope, &mut deps);
    }
    if let Some(indexer) = &model.indexer {
        collect_node_deps(&indexer.value, scope, &mut deps);
    }
    deps.shift_remove(model.name.as_str());
    deps
}

fn collect_node_deps<'a>(node: &'a TypeNode, scope: &Scope<'_>, deps: &mut IndexSet<&'a str>) {
    match node {
        TypeNode::Enum(r) => {
            if scope.is_enum(&r.name) {
                deps.insert(&r.name);
            }
        }
        TypeNode::Model(r) => match r.container() {
            Some(Container::Array(value) | Container::Record(_, value)) => {
                collect_node_deps(value, scope, deps);
            }
            None => {
                if scope.is_model(&r.name) {
                    deps.insert(&r.name);
                }
            }
        },
        TypeNode::Union { variants } => {
            for variant in variants {
                collect_node_deps(variant, scope, deps);
            }
        }
        TypeNode::Array { element } => collect_node_deps(element, scope, deps),
        TypeNode::Map { value, .. } => collect_node_deps(value, scope, deps),
        TypeNode::Object { properties } => {
            for property in properties {
                collect_node_deps(&property.ty, scope, deps);
            }
        }
        TypeNode::Scalar(_)
        | TypeNode::Literal { .. }
        | TypeNode::Intrinsic { .. }
        | TypeNode::Unrecognized => {}
    }
}

/// Dependencies of every collected model, keyed in collection order.
#[derive(Debug, Clone)]
pub struct DependencyGraph<'a> {
    nodes: IndexMap<&'a str, GraphNode<'a>>,
}

#[derive(Debug, Clone)]
struct GraphNode<'a> {
    decl: &'a ModelDecl,
    deps: IndexSet<&'a str>,
}

impl<'a> DependencyGraph<'a> {
    /// Analyze all collected models.
    pub fn build(collected: &CollectedTypes<'a>, scope: &Scope<'_>) -> Self {
        let nodes = collected
            .models
            .iter()
            .map(|&decl| {
                let deps = model_dependencies(decl, scope);
                debug!(model = %decl.name, deps = ?deps, "Analyzed dependencies");
                (decl.name.as_str(), GraphNode { decl, deps })
            })
            .collect();
        Self { nodes }
    }

    /// Dependencies of `name`, or `None` if it is not a collected model.
    pub fn dependencies(&self, name: &str) -> Option<&IndexSet<&'a str>> {
        self.nodes.get(name).map(|node| &node.deps)
    }

    /// Order models so that every dependency precedes its dependents.
    ///
    /// Depth-first over roots in collection order and dependencies in
    /// first-appearance order. An edge back into the active path closes a
    /// cycle and is dropped. Every model appears exactly once.
    pub fn emission_order(&self) -> Vec<&'a ModelDecl> {
        let mut order = Vec::with_capacity(self.nodes.len());
        let mut resolved: HashSet<&'a str> = HashSet::new();
        let mut visiting: HashSet<&'a str> = HashSet::new();

        for &root in self.nodes.keys() {
            if resolved.contains(root) {
                continue;
            }

            // (model, index of the next dependency to look at)
            let mut stack: Vec<(&'a str, usize)> = vec![(root, 0)];
            visiting.insert(root);

            while let Some(&(name, next)) = stack.last() {
                let Some(node) = self.nodes.get(name) else {
                    stack.pop();
                    continue;
                };

                if let Some(&dep) = node.deps.get_index(next) {
                    if let Some(top) = stack.last_mut() {
                        top.1 += 1;
                    }
                    // Enums are emitted up front and never need ordering
                    if !self.nodes.contains_key(dep) || resolved.contains(dep) {
                        continue;
                    }
                    if visiting.contains(dep) {
                        debug!(from = %name, to = %dep, "Dropping cyclic dependency edge");
                        continue;
                    }
                    visiting.insert(dep);
                    stack.push((dep, 0));
                } else {
                    stack.pop();
                    visiting.remove(name);
                    resolved.insert(name);
                    order.push(node.decl);
                }
            }
        }

        order
    }
}

/// Convenience wrapper: analyze `collected` and return the emission order.
pub fn order_models<'a>(collected: &CollectedTypes<'a>) -> Vec<&'a ModelDecl> {
    let scope = Scope::new(collected);
    DependencyGraph::build(collected, &scope).emission_order()
}
