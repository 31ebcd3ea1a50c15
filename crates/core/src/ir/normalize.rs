//! Translation from the host type graph to validator IR.
//!
//! This module handles all the graph-specific logic:
//! - Type node to Zod expression conversion
//! - Model and enum declaration translation
//! - Deciding between direct and deferred (`z.lazy`) references

use std::collections::HashSet;

use zodspec_common::{
    Container, EnumDecl, EnumValue, KeyKind, LiteralValue, ModelDecl, Property, TypeNode,
};

use super::scalar::resolve_scalar;
use super::types::{ZodExpr, ZodField, ZodLiteral, ZodPrimitive};
use crate::collector::CollectedTypes;

/// Names the translator may refer to, and which of them are already defined
/// in the module being assembled.
#[derive(Debug, Default, Clone)]
pub struct Scope<'a> {
    models: HashSet<&'a str>,
    enums: HashSet<&'a str>,
    defined: HashSet<&'a str>,
}

impl<'a> Scope<'a> {
    /// Scope over the collected declarations. Nothing is defined yet.
    pub fn new(collected: &CollectedTypes<'a>) -> Self {
        Self {
            models: collected.models.iter().map(|m| m.name.as_str()).collect(),
            enums: collected.enums.iter().map(|e| e.name.as_str()).collect(),
            defined: HashSet::new(),
        }
    }

    /// Record that `name` now has a definition earlier in the module.
    pub fn mark_defined(&mut self, name: &'a str) {
        self.defined.insert(name);
    }

    /// True for a collected model name.
    pub fn is_model(&self, name: &str) -> bool {
        self.models.contains(name)
    }

    /// True for a collected enum name.
    pub fn is_enum(&self, name: &str) -> bool {
        self.enums.contains(name)
    }

    /// True once the model's schema constant has been emitted.
    pub fn is_defined(&self, name: &str) -> bool {
        self.defined.contains(name)
    }
}

/// Convert a type node to a Zod expression.
///
/// Never fails: anything that cannot be typed precisely becomes `z.unknown()`.
pub fn type_to_zod(node: &TypeNode, scope: &Scope<'_>) -> ZodExpr {
    match node {
        TypeNode::Scalar(scalar) => resolve_scalar(scalar),
        TypeNode::Enum(r) => {
            if scope.is_enum(&r.name) {
                ZodExpr::Ref(r.name.clone())
            } else {
                ZodExpr::UNKNOWN
            }
        }
        TypeNode::Model(r) => match r.container() {
            Some(Container::Array(element)) => {
                ZodExpr::Array(Box::new(type_to_zod(element, scope)))
            }
            Some(Container::Record(key, value)) => map_to_zod(key, value, scope),
            None if scope.is_model(&r.name) => model_ref(&r.name, scope),
            None => ZodExpr::UNKNOWN,
        },
        TypeNode::Object { properties } => ZodExpr::Object {
            fields: properties
                .iter()
                .map(|p| property_to_field(p, scope))
                .collect(),
            catchall: None,
        },
        TypeNode::Union { variants } => union_to_zod(variants, scope),
        TypeNode::Array { element } => ZodExpr::Array(Box::new(type_to_zod(element, scope))),
        TypeNode::Map { key, value } => map_to_zod(*key, value, scope),
        TypeNode::Literal { value } => ZodExpr::Literal(literal_to_zod(value)),
        TypeNode::Intrinsic { name } => intrinsic_to_zod(name),
        TypeNode::Unrecognized => ZodExpr::UNKNOWN,
    }
}

/// Convert a property to an object field. Optionality stays on the field.
pub fn property_to_field(property: &Property, scope: &Scope<'_>) -> ZodField {
    ZodField {
        name: property.name.clone(),
        expr: type_to_zod(&property.ty, scope),
        optional: property.optional,
    }
}

/// Translate a model declaration into the expression bound to `<Name>Schema`.
pub fn model_to_zod(model: &ModelDecl, scope: &Scope<'_>) -> ZodExpr {
    let fields: Vec<_> = model
        .properties
        .iter()
        .map(|p| property_to_field(p, scope))
        .collect();

    let Some(indexer) = &model.indexer else {
        return ZodExpr::Object {
            fields,
            catchall: None,
        };
    };
    let value = type_to_zod(&indexer.value, scope);

    match (fields.is_empty(), indexer.key) {
        (true, KeyKind::Integer) => ZodExpr::Array(Box::new(value)),
        (true, _) => record(ZodPrimitive::String, value),
        // Positional indexers have no object counterpart; the properties win
        (false, KeyKind::Integer) => ZodExpr::Object {
            fields,
            catchall: None,
        },
        (false, _) => ZodExpr::Object {
            fields,
            catchall: Some(Box::new(value)),
        },
    }
}

/// Translate an enum declaration.
///
/// String-valued (or implicitly valued) enums become `z.enum([...])`; as soon
/// as one member is numeric the members become literals.
pub fn enum_to_zod(decl: &EnumDecl) -> ZodExpr {
    if decl.members.is_empty() {
        return ZodExpr::Primitive(ZodPrimitive::Never);
    }

    let numeric = decl
        .members
        .iter()
        .any(|m| matches!(m.value, Some(EnumValue::Int(_) | EnumValue::Float(_))));

    if !numeric {
        return ZodExpr::Enum(
            decl.members
                .iter()
                .map(|m| match &m.value {
                    Some(EnumValue::String(s)) => s.clone(),
                    _ => m.name.clone(),
                })
                .collect(),
        );
    }

    let mut literals: Vec<_> = decl
        .members
        .iter()
        .map(|m| {
            ZodExpr::Literal(match &m.value {
                Some(EnumValue::Int(i)) => ZodLiteral::Int(*i),
                Some(EnumValue::Float(f)) => ZodLiteral::Number(*f),
                Some(EnumValue::String(s)) => ZodLiteral::String(s.clone()),
                None => ZodLiteral::String(m.name.clone()),
            })
        })
        .collect();

    if literals.len() == 1 {
        if let Some(only) = literals.pop() {
            return only;
        }
    }
    ZodExpr::Union(literals)
}

fn model_ref(name: &str, scope: &Scope<'_>) -> ZodExpr {
    if scope.is_defined(name) {
        ZodExpr::Ref(name.to_string())
    } else {
        ZodExpr::Lazy(name.to_string())
    }
}

fn union_to_zod(variants: &[TypeNode], scope: &Scope<'_>) -> ZodExpr {
    let mut exprs: Vec<_> = variants.iter().map(|v| type_to_zod(v, scope)).collect();
    match exprs.len() {
        0 => ZodExpr::Primitive(ZodPrimitive::Never),
        1 => exprs.pop().unwrap_or(ZodExpr::UNKNOWN),
        _ => ZodExpr::Union(exprs),
    }
}

fn map_to_zod(key: KeyKind, value: &TypeNode, scope: &Scope<'_>) -> ZodExpr {
    match key {
        KeyKind::String => record(ZodPrimitive::String, type_to_zod(value, scope)),
        KeyKind::Integer => record(ZodPrimitive::Number, type_to_zod(value, scope)),
        KeyKind::Other => ZodExpr::UNKNOWN,
    }
}

fn record(key: ZodPrimitive, value: ZodExpr) -> ZodExpr {
    ZodExpr::Record {
        key: Box::new(ZodExpr::Primitive(key)),
        value: Box::new(value),
    }
}

fn literal_to_zod(value: &LiteralValue) -> ZodLiteral {
    match value {
        LiteralValue::Bool(b) => ZodLiteral::Bool(*b),
        LiteralValue::Int(i) => ZodLiteral::Int(*i),
        LiteralValue::Float(f) => ZodLiteral::Number(*f),
        LiteralValue::String(s) => ZodLiteral::String(s.clone()),
    }
}

fn intrinsic_to_zod(name: &str) -> ZodExpr {
    match name {
        "unknown" => ZodExpr::UNKNOWN,
        "never" => ZodExpr::Primitive(ZodPrimitive::Never),
        "null" => ZodExpr::Primitive(ZodPrimitive::Null),
        "void" => ZodExpr::Primitive(ZodPrimitive::Void),
        _ => ZodExpr::UNKNOWN,
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;
    use crate::collector::collect_types;
    use crate::ir::Emit;
    use zodspec_common::{Indexer, ModelRef, Namespace, parse_graph};

    fn graph() -> Namespace {
        parse_graph(
            r#"{
              "name": "",
              "models": [ { "name": "User" }, { "name": "Post" } ],
              "enums": [ { "name": "Status", "members": [ { "name": "On" } ] } ]
            }"#,
        )
        .unwrap()
    }

    fn emit(node: &TypeNode, scope: &Scope<'_>) -> String {
        type_to_zod(node, scope).emit()
    }

    fn decl(json: &str) -> ModelDecl {
        serde_json::from_str(json).unwrap()
    }

    #[test]
    fn test_references() {
        let graph = graph();
        let collected = collect_types(&graph);
        let mut scope = Scope::new(&collected);

        assert_eq!(emit(&TypeNode::enumeration("Status"), &scope), "StatusSchema");
        assert_eq!(emit(&TypeNode::enumeration("Missing"), &scope), "z.unknown()");
        assert_eq!(emit(&TypeNode::model("Missing"), &scope), "z.unknown()");

        assert_eq!(
            emit(&TypeNode::model("User"), &scope),
            "z.lazy(() => UserSchema)"
        );
        scope.mark_defined("User");
        assert_eq!(emit(&TypeNode::model("User"), &scope), "UserSchema");
    }

    #[test]
    fn test_containers() {
        let scope = Scope::default();
        let record = TypeNode::Model(ModelRef {
            name: "Record".into(),
            indexer: Some(Indexer {
                key: KeyKind::String,
                value: Box::new(TypeNode::scalar("string")),
            }),
        });
        assert_eq!(emit(&record, &scope), "z.record(z.string(), z.string())");

        let array = TypeNode::Model(ModelRef {
            name: "Array".into(),
            indexer: Some(Indexer {
                key: KeyKind::Integer,
                value: Box::new(TypeNode::scalar("int32")),
            }),
        });
        assert_eq!(emit(&array, &scope), "z.array(z.number())");

        assert_eq!(
            emit(&TypeNode::array(TypeNode::scalar("string")), &scope),
            "z.array(z.string())"
        );
        let map = |key| TypeNode::Map {
            key,
            value: Box::new(TypeNode::scalar("boolean")),
        };
        assert_eq!(
            emit(&map(KeyKind::Integer), &scope),
            "z.record(z.number(), z.boolean())"
        );
        assert_eq!(emit(&map(KeyKind::Other), &scope), "z.unknown()");

        let numeric_record = TypeNode::Model(ModelRef {
            name: "Record".into(),
            indexer: Some(Indexer {
                key: KeyKind::Integer,
                value: Box::new(TypeNode::scalar("string")),
            }),
        });
        assert_eq!(
            emit(&numeric_record, &scope),
            "z.record(z.number(), z.string())"
        );
    }

    #[test]
    fn test_container_of_pending_model() {
        let graph = graph();
        let collected = collect_types(&graph);
        let scope = Scope::new(&collected);

        let users = TypeNode::Model(ModelRef {
            name: "Array".into(),
            indexer: Some(Indexer {
                key: KeyKind::Integer,
                value: Box::new(TypeNode::model("User")),
            }),
        });
        assert_eq!(emit(&users, &scope), "z.array(z.lazy(() => UserSchema))");
    }

    #[test]
    fn test_unions() {
        let scope = Scope::default();
        let union = |variants| TypeNode::Union { variants };
        assert_eq!(emit(&union(vec![]), &scope), "z.never()");
        assert_eq!(
            emit(&union(vec![TypeNode::scalar("string")]), &scope),
            "z.string()"
        );
        assert_eq!(
            emit(
                &union(vec![
                    TypeNode::scalar("string"),
                    TypeNode::Intrinsic {
                        name: "null".into()
                    }
                ]),
                &scope
            ),
            "z.union([z.string(), z.null()])"
        );
    }

    #[test]
    fn test_literals_and_intrinsics() {
        let scope = Scope::default();
        let literal = |value| TypeNode::Literal { value };
        assert_eq!(
            emit(&literal(LiteralValue::String("a".into())), &scope),
            "z.literal(\"a\")"
        );
        assert_eq!(emit(&literal(LiteralValue::Int(3)), &scope), "z.literal(3)");
        assert_eq!(
            emit(&literal(LiteralValue::Bool(false)), &scope),
            "z.literal(false)"
        );

        let intrinsic = |name: &str| TypeNode::Intrinsic { name: name.into() };
        assert_eq!(emit(&intrinsic("void"), &scope), "z.void()");
        assert_eq!(emit(&intrinsic("never"), &scope), "z.never()");
        assert_eq!(emit(&intrinsic("ErrorType"), &scope), "z.unknown()");
        assert_eq!(emit(&TypeNode::Unrecognized, &scope), "z.unknown()");
    }

    #[test]
    fn test_optional_applied_once() {
        let scope = Scope::default();
        let node = TypeNode::Object {
            properties: vec![
                Property::required("a", TypeNode::scalar("string")),
                Property::optional("b", TypeNode::array(TypeNode::scalar("string"))),
            ],
        };
        let out = emit(&node, &scope);
        assert_eq!(
            out,
            "z.object({\n  a: z.string(),\n  b: z.array(z.string()).optional(),\n})"
        );
        assert_eq!(out.matches(".optional()").count(), 1);
    }

    #[test]
    fn test_model_shapes() {
        let scope = Scope::default();

        let plain = decl(r#"{ "name": "Empty" }"#);
        assert_eq!(model_to_zod(&plain, &scope).emit(), "z.object({})");

        let dict = decl(
            r#"{ "name": "Tags", "indexer": { "key": "string", "value": { "kind": "scalar", "name": "string" } } }"#,
        );
        assert_eq!(
            model_to_zod(&dict, &scope).emit(),
            "z.record(z.string(), z.string())"
        );

        let list = decl(
            r#"{ "name": "Ids", "indexer": { "key": "integer", "value": { "kind": "scalar", "name": "int64" } } }"#,
        );
        assert_eq!(model_to_zod(&list, &scope).emit(), "z.array(z.number())");

        let open = decl(
            r#"{ "name": "Open",
                 "properties": [ { "name": "id", "type": { "kind": "scalar", "name": "string" } } ],
                 "indexer": { "key": "string", "value": { "kind": "intrinsic", "name": "unknown" } } }"#,
        );
        assert_eq!(
            model_to_zod(&open, &scope).emit(),
            "z.object({\n  id: z.string(),\n}).catchall(z.unknown())"
        );
    }

    #[test]
    fn test_enum_shapes() {
        let parse = |json: &str| -> EnumDecl { serde_json::from_str(json).unwrap() };

        let empty = parse(r#"{ "name": "Nothing" }"#);
        assert_eq!(enum_to_zod(&empty).emit(), "z.never()");

        let implicit = parse(
            r#"{ "name": "S", "members": [ { "name": "Active" }, { "name": "Inactive" }, { "name": "Pending" } ] }"#,
        );
        assert_eq!(
            enum_to_zod(&implicit).emit(),
            "z.enum([\"Active\", \"Inactive\", \"Pending\"])"
        );

        let strings = parse(
            r#"{ "name": "S", "members": [ { "name": "Up", "value": "up" }, { "name": "Down" } ] }"#,
        );
        assert_eq!(enum_to_zod(&strings).emit(), "z.enum([\"up\", \"Down\"])");

        let single = parse(r#"{ "name": "N", "members": [ { "name": "One", "value": 1 } ] }"#);
        assert_eq!(enum_to_zod(&single).emit(), "z.literal(1)");

        let mixed = parse(
            r#"{ "name": "N", "members": [ { "name": "Low", "value": 1 }, { "name": "Half", "value": 0.5 }, { "name": "Named" } ] }"#,
        );
        assert_eq!(
            enum_to_zod(&mixed).emit(),
            "z.union([z.literal(1), z.literal(0.5), z.literal(\"Named\")])"
        );
    }
}
