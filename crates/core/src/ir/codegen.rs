//! Code generation from collected declarations to the validator module IR.
//!
//! This module orders the collected models, translates every declaration
//! and lays the results out as a `ZodModule`.
//!
//! The generated module can then be emitted to a string via the `Emit` trait.

use tracing::debug;
use zodspec_common::EmitterOptions;

use super::deps::DependencyGraph;
use super::normalize::{Scope, enum_to_zod, model_to_zod};
use super::types::{ZodDef, ZodImport, ZodMetadata, ZodModule};
use crate::collector::CollectedTypes;

/// Module the generated document imports `z` from.
pub const ZOD_MODULE: &str = "zod";

/// Generate a complete validator module from the collected declarations.
pub fn codegen_module(collected: &CollectedTypes<'_>, options: &EmitterOptions) -> ZodModule {
    let mut scope = Scope::new(collected);
    let order = DependencyGraph::build(collected, &scope).emission_order();

    let enums = collected
        .enums
        .iter()
        .map(|decl| ZodDef {
            name: decl.name.clone(),
            expr: enum_to_zod(decl),
        })
        .collect();

    let mut models = Vec::with_capacity(order.len());
    for model in order {
        let expr = model_to_zod(model, &scope);
        debug!(model = %model.name, "Generated model schema");
        models.push(ZodDef {
            name: model.name.clone(),
            expr,
        });
        // Marked after translation so self-references stay lazy
        scope.mark_defined(&model.name);
    }

    ZodModule {
        imports: vec![codegen_zod_import()],
        metadata: codegen_metadata(options),
        enums,
        models,
    }
}

fn codegen_zod_import() -> ZodImport {
    ZodImport {
        items: vec!["z".into()],
        from: ZOD_MODULE.into(),
    }
}

fn codegen_metadata(options: &EmitterOptions) -> Option<ZodMetadata> {
    if options.package_name.is_none() && options.package_version.is_none() {
        return None;
    }
    Some(ZodMetadata {
        package_name: options.package_name.clone(),
        package_version: options.package_version.clone(),
    })
}
