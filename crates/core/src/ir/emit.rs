//! Zod code emission via the Emit trait.
//!
//! This module provides a trait-based approach to converting validator IR nodes
//! to string representations. Each IR type implements `Emit` for clean, composable
//! code generation.

use super::types::{
    ZodDef, ZodExpr, ZodField, ZodImport, ZodLiteral, ZodMetadata, ZodModule, ZodPrimitive,
};
use super::utils::{escape_block_comment, js_string, quote_if_needed, schema_ident};

/// Trait for emitting TypeScript code from IR nodes.
pub trait Emit {
    /// Convert the IR node to its TypeScript string representation.
    fn emit(&self) -> String;
}

// =============================================================================
// Primitives and literals
// =============================================================================

impl Emit for ZodPrimitive {
    fn emit(&self) -> String {
        match self {
            ZodPrimitive::String => "z.string()".to_string(),
            ZodPrimitive::Number => "z.number()".to_string(),
            ZodPrimitive::Boolean => "z.boolean()".to_string(),
            ZodPrimitive::Date => "z.date()".to_string(),
            ZodPrimitive::Unknown => "z.unknown()".to_string(),
            ZodPrimitive::Never => "z.never()".to_string(),
            ZodPrimitive::Null => "z.null()".to_string(),
            ZodPrimitive::Void => "z.void()".to_string(),
        }
    }
}

impl Emit for ZodLiteral {
    fn emit(&self) -> String {
        match self {
            ZodLiteral::String(s) => js_string(s),
            ZodLiteral::Number(n) => n.to_string(),
            ZodLiteral::Int(i) => i.to_string(),
            ZodLiteral::Bool(b) => b.to_string(),
        }
    }
}

// =============================================================================
// Expressions
// =============================================================================

impl Emit for ZodExpr {
    fn emit(&self) -> String {
        self.emit_indented(0)
    }
}

impl ZodExpr {
    /// Emit with the given indentation level (2 spaces per level).
    ///
    /// Only object literals span several lines; their fields sit one level
    /// deeper than `indent` and the closing brace at `indent`.
    pub fn emit_indented(&self, indent: usize) -> String {
        match self {
            ZodExpr::Primitive(p) => p.emit(),
            ZodExpr::Url => "z.string().url()".to_string(),
            ZodExpr::InstanceOf(class) => format!("z.instanceof({class})"),
            ZodExpr::Literal(lit) => format!("z.literal({})", lit.emit()),
            ZodExpr::Enum(values) => {
                let items = values
                    .iter()
                    .map(|v| js_string(v))
                    .collect::<Vec<_>>()
                    .join(", ");
                format!("z.enum([{items}])")
            }
            ZodExpr::Ref(name) => schema_ident(name),
            ZodExpr::Lazy(name) => format!("z.lazy(() => {})", schema_ident(name)),
            ZodExpr::Array(inner) => format!("z.array({})", inner.emit_indented(indent)),
            ZodExpr::Record { key, value } => format!(
                "z.record({}, {})",
                key.emit_indented(indent),
                value.emit_indented(indent)
            ),
            ZodExpr::Union(variants) => {
                let items = variants
                    .iter()
                    .map(|v| v.emit_indented(indent))
                    .collect::<Vec<_>>()
                    .join(", ");
                format!("z.union([{items}])")
            }
            ZodExpr::Object { fields, catchall } => {
                let mut output = if fields.is_empty() {
                    "z.object({})".to_string()
                } else {
                    let mut output = "z.object({\n".to_string();
                    for field in fields {
                        output.push_str(&field.emit_indented(indent + 1));
                    }
                    output.push_str(&"  ".repeat(indent));
                    output.push_str("})");
                    output
                };
                if let Some(rest) = catchall {
                    output.push_str(&format!(".catchall({})", rest.emit_indented(indent)));
                }
                output
            }
        }
    }
}

impl ZodField {
    /// Emit as one `key: expr,` line at the given indentation level.
    pub fn emit_indented(&self, indent: usize) -> String {
        let optional = if self.optional { ".optional()" } else { "" };
        format!(
            "{}{}: {}{},\n",
            "  ".repeat(indent),
            quote_if_needed(&self.name),
            self.expr.emit_indented(indent),
            optional
        )
    }
}

impl Emit for ZodField {
    fn emit(&self) -> String {
        self.emit_indented(0)
    }
}

// =============================================================================
// Definitions
// =============================================================================

impl Emit for ZodDef {
    fn emit(&self) -> String {
        format!(
            "export const {} = {};\n",
            schema_ident(&self.name),
            self.expr.emit_indented(0)
        )
    }
}

impl Emit for ZodImport {
    fn emit(&self) -> String {
        format!(
            "import {{ {} }} from {};\n",
            self.items.join(", "),
            js_string(&self.from)
        )
    }
}

impl Emit for ZodMetadata {
    fn emit(&self) -> String {
        let mut output = "/**\n".to_string();
        if let Some(name) = &self.package_name {
            output.push_str(&format!(" * Package: {}\n", escape_block_comment(name)));
        }
        if let Some(version) = &self.package_version {
            output.push_str(&format!(" * Version: {}\n", escape_block_comment(version)));
        }
        output.push_str(" */\n");
        output
    }
}

// =============================================================================
// Module
// =============================================================================

impl Emit for ZodModule {
    fn emit(&self) -> String {
        let mut sections = Vec::new();

        let imports: String = self.imports.iter().map(Emit::emit).collect();
        if !imports.is_empty() {
            sections.push(imports);
        }

        if let Some(metadata) = &self.metadata {
            sections.push(metadata.emit());
        }

        // Enums first: models may refer to them and they never refer back
        for def in self.enums.iter().chain(&self.models) {
            sections.push(def.emit());
        }

        sections.join("\n")
    }
}

// =============================================================================
// Tests
// =============================================================================
