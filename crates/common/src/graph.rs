//! Host type graph model.
//!
//! This module mirrors the subset of the TypeSpec program graph the emitter
//! needs: a tree of namespaces holding model and enum declarations, and the
//! type nodes their properties point at. The graph is produced by the host
//! compiler (exported as a JSON snapshot) and is treated as read-only.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Deserializer};
use serde_json::Value;

use crate::error::GraphError;

/// Name of the host's generic array container model (`Array<T>`).
pub const ARRAY_MODEL: &str = "Array";

/// Name of the host's generic record container model (`Record<T>`).
pub const RECORD_MODEL: &str = "Record";

/// A namespace in the host's declaration tree.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Namespace {
    /// Simple (unqualified) namespace name. The global namespace is `""`.
    pub name: String,
    /// Nested namespaces, in declaration order.
    #[serde(default)]
    pub namespaces: Vec<NamespaceEntry>,
    /// Model declarations, in declaration order.
    #[serde(default)]
    pub models: Vec<ModelDecl>,
    /// Enum declarations, in declaration order.
    #[serde(default)]
    pub enums: Vec<EnumDecl>,
}

/// A child namespace slot.
///
/// The host occasionally hands over namespace references that cannot be
/// resolved; those are kept verbatim so the rest of the tree still loads.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum NamespaceEntry {
    /// A well-formed namespace.
    Namespace(Namespace),
    /// Anything that did not deserialize as a namespace.
    Malformed(Value),
}

/// Where a declaration comes from.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DeclOrigin {
    /// Authored in the user's own sources.
    #[default]
    User,
    /// Pulled in implicitly from a library or the host's standard library.
    Library,
}

/// A model declaration.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ModelDecl {
    /// Declared model name.
    pub name: String,
    /// Properties, in declaration order.
    #[serde(default)]
    pub properties: Vec<Property>,
    /// Key/value typing for map- or array-shaped models.
    #[serde(default)]
    pub indexer: Option<Indexer>,
    /// Set by the host on its generic array/record containers.
    #[serde(default)]
    pub intrinsic: bool,
    /// Unbound template parameters (`model Page<T>` carries `["T"]`).
    #[serde(default)]
    pub template_parameters: Vec<String>,
    /// Declaration origin.
    #[serde(default)]
    pub origin: DeclOrigin,
}

impl ModelDecl {
    /// Whether this model is one of the host's `Array`/`Record` containers.
    pub fn is_intrinsic_container(&self) -> bool {
        self.intrinsic
            || (self.indexer.is_some()
                && (self.name == ARRAY_MODEL || self.name == RECORD_MODEL))
    }

    /// Whether the declaration still has unbound template parameters.
    pub fn is_template(&self) -> bool {
        !self.template_parameters.is_empty()
    }
}

/// An enum declaration.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EnumDecl {
    /// Declared enum name.
    pub name: String,
    /// Members, in declaration order.
    #[serde(default)]
    pub members: Vec<EnumMember>,
    /// Declaration origin.
    #[serde(default)]
    pub origin: DeclOrigin,
}

/// A single enum member.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct EnumMember {
    /// Member name.
    pub name: String,
    /// Explicit value, if any. Implicit members take their name as value.
    #[serde(default)]
    pub value: Option<EnumValue>,
}

/// Explicit enum member value.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum EnumValue {
    /// Integer value.
    Int(i64),
    /// Floating point value.
    Float(f64),
    /// String value.
    String(String),
}

/// A model property.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Property {
    /// Property name as declared.
    pub name: String,
    /// Property type.
    #[serde(rename = "type", default, deserialize_with = "lenient_node")]
    pub ty: TypeNode,
    /// Whether the property may be absent.
    #[serde(default)]
    pub optional: bool,
}

impl Property {
    /// A required property.
    pub fn required(name: impl Into<String>, ty: TypeNode) -> Self {
        Self {
            name: name.into(),
            ty,
            optional: false,
        }
    }

    /// An optional property.
    pub fn optional(name: impl Into<String>, ty: TypeNode) -> Self {
        Self {
            name: name.into(),
            ty,
            optional: true,
        }
    }
}

/// Key/value typing of a map- or array-like model.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Indexer {
    /// Key kind (`integer` for arrays, `string` for records).
    pub key: KeyKind,
    /// Element/value type.
    #[serde(deserialize_with = "lenient_boxed_node")]
    pub value: Box<TypeNode>,
}

/// Kind of key an indexer or map uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(from = "String")]
pub enum KeyKind {
    /// String keys.
    String,
    /// Integer keys.
    Integer,
    /// Any other key scalar.
    Other,
}

impl From<String> for KeyKind {
    fn from(value: String) -> Self {
        match value.as_str() {
            "string" => Self::String,
            "integer" => Self::Integer,
            _ => Self::Other,
        }
    }
}

/// Reference to a scalar, carrying its `extends` chain.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ScalarRef {
    /// Scalar name.
    pub name: String,
    /// Scalar this one is derived from.
    #[serde(default)]
    pub base: Option<Box<ScalarRef>>,
}

/// Reference to a model.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ModelRef {
    /// Referenced model name.
    pub name: String,
    /// Indexer of the referenced model, present for `Array`/`Record`
    /// instantiations.
    #[serde(default)]
    pub indexer: Option<Indexer>,
}

/// An intrinsic container a model reference resolves to.
#[derive(Debug, Clone, Copy)]
pub enum Container<'a> {
    /// `Array<T>`.
    Array(&'a TypeNode),
    /// `Record<T>`, keyed by the given kind.
    Record(KeyKind, &'a TypeNode),
}

impl ModelRef {
    /// Classify this reference as an intrinsic container, if it is one.
    pub fn container(&self) -> Option<Container<'_>> {
        let indexer = self.indexer.as_ref()?;
        match self.name.as_str() {
            ARRAY_MODEL => Some(Container::Array(&indexer.value)),
            RECORD_MODEL => Some(Container::Record(indexer.key, &indexer.value)),
            _ => None,
        }
    }
}

/// Reference to an enum.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct EnumRef {
    /// Referenced enum name.
    pub name: String,
}

/// A literal type value.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum LiteralValue {
    /// `true` / `false`.
    Bool(bool),
    /// Integer literal.
    Int(i64),
    /// Floating point literal.
    Float(f64),
    /// String literal.
    String(String),
}

/// Any type a property (or a nested shape) can have.
///
/// Nested slots are read leniently: a node with an unknown `kind` or a
/// payload that does not fit its `kind` becomes [`TypeNode::Unrecognized`]
/// instead of failing the declaration that holds it.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum TypeNode {
    /// A scalar.
    Scalar(ScalarRef),
    /// A named model, or an intrinsic container instantiation.
    Model(ModelRef),
    /// A named enum.
    Enum(EnumRef),
    /// A union of variants, in declaration order.
    Union {
        /// Union variants.
        #[serde(default, deserialize_with = "lenient_nodes")]
        variants: Vec<TypeNode>,
    },
    /// `T[]`.
    Array {
        /// Element type.
        #[serde(deserialize_with = "lenient_boxed_node")]
        element: Box<TypeNode>,
    },
    /// `Record<K, V>` written inline.
    Map {
        /// Key kind.
        key: KeyKind,
        /// Value type.
        #[serde(deserialize_with = "lenient_boxed_node")]
        value: Box<TypeNode>,
    },
    /// An anonymous model expression (`{ a: string }`).
    Object {
        /// Fields, in declaration order.
        #[serde(default)]
        properties: Vec<Property>,
    },
    /// A literal type (`"a"`, `1`, `true`).
    Literal {
        /// Literal value.
        value: LiteralValue,
    },
    /// Host intrinsic (`unknown`, `never`, `null`, `void`).
    Intrinsic {
        /// Intrinsic name.
        name: String,
    },
    /// A node kind the emitter does not know about, or a malformed node.
    #[default]
    #[serde(other)]
    Unrecognized,
}

impl TypeNode {
    /// A root scalar with no base.
    pub fn scalar(name: impl Into<String>) -> Self {
        Self::Scalar(ScalarRef {
            name: name.into(),
            base: None,
        })
    }

    /// A plain reference to a named model.
    pub fn model(name: impl Into<String>) -> Self {
        Self::Model(ModelRef {
            name: name.into(),
            indexer: None,
        })
    }

    /// A reference to a named enum.
    pub fn enumeration(name: impl Into<String>) -> Self {
        Self::Enum(EnumRef { name: name.into() })
    }

    /// `T[]`.
    pub fn array(element: Self) -> Self {
        Self::Array {
            element: Box::new(element),
        }
    }
}

fn node_from_value(value: Value) -> TypeNode {
    serde_json::from_value(value).unwrap_or(TypeNode::Unrecognized)
}

fn lenient_node<'de, D>(deserializer: D) -> Result<TypeNode, D::Error>
where
    D: Deserializer<'de>,
{
    Value::deserialize(deserializer).map(node_from_value)
}

fn lenient_boxed_node<'de, D>(deserializer: D) -> Result<Box<TypeNode>, D::Error>
where
    D: Deserializer<'de>,
{
    lenient_node(deserializer).map(Box::new)
}

fn lenient_nodes<'de, D>(deserializer: D) -> Result<Vec<TypeNode>, D::Error>
where
    D: Deserializer<'de>,
{
    let values = Vec::<Value>::deserialize(deserializer)?;
    Ok(values.into_iter().map(node_from_value).collect())
}

/// Parse a type graph snapshot from JSON text.
pub fn parse_graph(json: &str) -> Result<Namespace, GraphError> {
    Ok(serde_json::from_str(json)?)
}

/// Read and parse a type graph snapshot from disk.
pub fn load_graph_file(path: &Path) -> Result<Namespace, GraphError> {
    let contents = fs::read_to_string(path).map_err(|source| GraphError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    parse_graph(&contents)
}
