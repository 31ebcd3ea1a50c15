//! Intermediate Representation for type graph to Zod code generation.
//!
//! This module defines a three-layer architecture:
//! 1. Host graph: namespaces, declarations and type nodes (`zodspec-common`)
//! 2. Validator IR: Zod expressions, definitions and the module layout
//! 3. Emission: validator IR to TypeScript code strings via the `Emit` trait
//!
//! The separation allows:
//! - All graph corner cases resolved during translation
//! - Code generation builds a structured module (testable)
//! - Emission is purely mechanical string building
//!
//! ## Module Structure
//!
//! - `types`: validator IR (ZodExpr, ZodDef, ZodModule)
//! - `scalar`: scalar chain resolution and the scalar table
//! - `normalize`: type nodes and declarations -> validator IR
//! - `deps`: dependency analysis and emission ordering
//! - `codegen`: collected declarations -> ZodModule
//! - `emit`: validator IR -> code strings (via Emit trait)
//! - `utils`: Common utilities shared across modules

mod codegen;
pub mod deps;
mod emit;
pub mod normalize;
pub mod scalar;
pub mod types;
pub mod utils;

// Re-export the main entry points
pub use codegen::{ZOD_MODULE, codegen_module};
pub use deps::{DependencyGraph, model_dependencies, order_models};
pub use emit::Emit;
pub use normalize::{Scope, enum_to_zod, model_to_zod, property_to_field, type_to_zod};
pub use scalar::{ScalarKind, resolve_scalar, terminal_scalar};
