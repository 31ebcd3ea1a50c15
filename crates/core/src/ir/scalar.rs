//! Scalar resolution.
//!
//! Scalars may derive from other scalars (`scalar uuid extends string`). The
//! validator is chosen from the root of that chain through a fixed table.

use std::collections::HashMap;
use std::sync::LazyLock;

use zodspec_common::ScalarRef;

use super::types::{ZodExpr, ZodPrimitive};

/// Validator family of a root scalar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScalarKind {
    /// Text.
    String,
    /// Every integer, float and decimal scalar.
    Number,
    /// `boolean`.
    Boolean,
    /// Calendar dates, times and timestamps.
    Date,
    /// ISO-8601 durations.
    Duration,
    /// `url`.
    Url,
    /// Binary payloads.
    Bytes,
}

impl ScalarKind {
    /// The Zod expression validating values of this kind.
    pub fn to_zod(self) -> ZodExpr {
        match self {
            // Durations travel as ISO-8601 strings
            ScalarKind::String | ScalarKind::Duration => {
                ZodExpr::Primitive(ZodPrimitive::String)
            }
            ScalarKind::Number => ZodExpr::Primitive(ZodPrimitive::Number),
            ScalarKind::Boolean => ZodExpr::Primitive(ZodPrimitive::Boolean),
            ScalarKind::Date => ZodExpr::Primitive(ZodPrimitive::Date),
            ScalarKind::Url => ZodExpr::Url,
            ScalarKind::Bytes => ZodExpr::InstanceOf("Blob".to_string()),
        }
    }
}

/// Root scalar names known to the emitter.
static SCALAR_TABLE: LazyLock<HashMap<&'static str, ScalarKind>> = LazyLock::new(|| {
    let numbers = [
        "numeric",
        "integer",
        "float",
        "int8",
        "int16",
        "int32",
        "int64",
        "uint8",
        "uint16",
        "uint32",
        "uint64",
        "safeint",
        "float32",
        "float64",
        "decimal",
        "decimal128",
    ];
    let dates = ["plainDate", "plainTime", "utcDateTime", "offsetDateTime"];

    let mut table: HashMap<&'static str, ScalarKind> = numbers
        .into_iter()
        .map(|name| (name, ScalarKind::Number))
        .chain(dates.into_iter().map(|name| (name, ScalarKind::Date)))
        .collect();
    table.insert("string", ScalarKind::String);
    table.insert("boolean", ScalarKind::Boolean);
    table.insert("duration", ScalarKind::Duration);
    table.insert("url", ScalarKind::Url);
    table.insert("bytes", ScalarKind::Bytes);
    table
});

/// Follow `base` links to the root of the derivation chain.
pub fn terminal_scalar(scalar: &ScalarRef) -> &str {
    let mut current = scalar;
    while let Some(base) = &current.base {
        current = base;
    }
    &current.name
}

/// Look up a root scalar name.
pub fn scalar_kind(name: &str) -> Option<ScalarKind> {
    SCALAR_TABLE.get(name).copied()
}

/// Resolve a scalar reference to its validator. Unknown roots yield `z.unknown()`.
pub fn resolve_scalar(scalar: &ScalarRef) -> ZodExpr {
    scalar_kind(terminal_scalar(scalar)).map_or(ZodExpr::UNKNOWN, ScalarKind::to_zod)
}
