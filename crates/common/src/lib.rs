//! Shared types for zodspec
//!
//! This crate holds the host type graph model, the emitter options and the
//! error types used by both the `zodspec-core` compiler and the `zodspec`
//! command-line front end.

pub mod error;
pub mod graph;
pub mod options;

// Re-export commonly used types
pub use error::{GraphError, OptionsError};
pub use graph::{
    Container, DeclOrigin, EnumDecl, EnumMember, EnumRef, EnumValue, Indexer, KeyKind,
    LiteralValue, ModelDecl, ModelRef, Namespace, NamespaceEntry, Property, ScalarRef, TypeNode,
    load_graph_file, parse_graph,
};
pub use options::{DEFAULT_OUTPUT_FILE, EMITTER_NAME, EmitterOptions, PackageInfo};
