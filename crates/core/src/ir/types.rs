//! Zod IR types for code generation.
//!
//! This module defines the validator representation the translator produces:
//! - ZodExpr: validator expressions (primitives, containers, objects, refs)
//! - ZodLiteral: literal values accepted by `z.literal(...)`
//! - ZodModule: the whole generated document

/// Zod primitive constructors: `z.string()`, `z.number()`, ...
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ZodPrimitive {
    /// z.string()
    String,
    /// z.number()
    Number,
    /// z.boolean()
    Boolean,
    /// z.date()
    Date,
    /// z.unknown()
    Unknown,
    /// z.never()
    Never,
    /// z.null()
    Null,
    /// z.void()
    Void,
}

/// Literal values
#[derive(Debug, Clone, PartialEq)]
pub enum ZodLiteral {
    /// Double-quoted string
    String(String),
    /// Non-integral number
    Number(f64),
    /// Integer
    Int(i64),
    /// true / false
    Bool(bool),
}

/// Validator expression
#[derive(Debug, Clone, PartialEq)]
pub enum ZodExpr {
    /// z.string(), z.number(), ...
    Primitive(ZodPrimitive),
    /// z.string().url()
    Url,
    /// z.instanceof(Blob)
    InstanceOf(String),
    /// z.literal("a")
    Literal(ZodLiteral),
    /// z.enum(["A", "B"])
    Enum(Vec<String>),
    /// Reference to an already defined schema: UserSchema
    Ref(String),
    /// Deferred reference to a schema defined later: z.lazy(() => UserSchema)
    Lazy(String),
    /// z.array(T)
    Array(Box<ZodExpr>),
    /// z.record(K, V)
    Record {
        /// Key validator
        key: Box<ZodExpr>,
        /// Value validator
        value: Box<ZodExpr>,
    },
    /// z.union([A, B])
    Union(Vec<ZodExpr>),
    /// z.object({ ... }), optionally .catchall(V)
    Object {
        /// Declared fields, in order
        fields: Vec<ZodField>,
        /// Validator for undeclared keys
        catchall: Option<Box<ZodExpr>>,
    },
}

impl ZodExpr {
    /// The fallback for anything that cannot be typed more precisely.
    pub const UNKNOWN: Self = Self::Primitive(ZodPrimitive::Unknown);
}

/// Object field. `.optional()` is applied here and nowhere else.
#[derive(Debug, Clone, PartialEq)]
pub struct ZodField {
    /// Property name, quoted on emission when needed
    pub name: String,
    /// Field validator, without `.optional()`
    pub expr: ZodExpr,
    /// Whether `.optional()` is appended
    pub optional: bool,
}

// =============================================================================
// Module-Level IR (for printer)
// =============================================================================

/// Import statement
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ZodImport {
    /// Items to import
    pub items: Vec<String>,
    /// Module path
    pub from: String,
}

/// Package metadata comment block
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ZodMetadata {
    /// Package name line
    pub package_name: Option<String>,
    /// Package version line
    pub package_version: Option<String>,
}

/// Top-level `export const <Name>Schema = ...;`
#[derive(Debug, Clone, PartialEq)]
pub struct ZodDef {
    /// Declared type name (without the `Schema` suffix)
    pub name: String,
    /// Bound expression
    pub expr: ZodExpr,
}

/// Complete validator module
#[derive(Debug, Clone, PartialEq)]
pub struct ZodModule {
    /// Import statements
    pub imports: Vec<ZodImport>,
    /// Optional package comment
    pub metadata: Option<ZodMetadata>,
    /// Enum definitions, in collection order
    pub enums: Vec<ZodDef>,
    /// Model definitions, dependencies first
    pub models: Vec<ZodDef>,
}
