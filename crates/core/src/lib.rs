//! Core compiler for zodspec
//!
//! Turns a TypeSpec type graph into a Zod validator module. The pipeline is
//! split the same way throughout:
//!
//! - `collector`: which declarations get a schema
//! - `ir`: translation, dependency ordering and text emission
//! - `package`: optional npm package files
//! - `emitter`: the entry points tying it all together
//! - `sink`: where generated files end up

pub mod collector;
pub mod emitter;
pub mod error;
pub mod ir;
pub mod package;
pub mod sink;

// Re-export commonly used types
pub use collector::{CollectedTypes, collect_types};
pub use emitter::{EmitOutcome, GeneratedFile, emit_program, generate, generate_files};
pub use error::EmitError;
pub use sink::{FsSink, MemorySink, OutputSink};
