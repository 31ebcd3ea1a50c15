//! Common utilities for validator code generation.
//!
//! This module provides shared helper functions used across translation and printing.

/// Suffix appended to a declared type name to form its schema constant.
pub const SCHEMA_SUFFIX: &str = "Schema";

/// Name of the generated constant for a declared type (`User` -> `UserSchema`).
pub fn schema_ident(name: &str) -> String {
    format!("{name}{SCHEMA_SUFFIX}")
}

/// Check if a name needs quoting to be used as an object key.
///
/// Returns true if the name:
/// - Is empty
/// - Doesn't start with a letter, underscore, or dollar sign
/// - Contains characters other than alphanumeric, underscore, or dollar sign
pub fn needs_quoting(name: &str) -> bool {
    name.is_empty()
        || !name
            .chars()
            .next()
            .is_some_and(|c| c.is_ascii_alphabetic() || c == '_' || c == '$')
        || !name
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '$')
}

/// Escape a string for use in JavaScript/TypeScript string literals.
/// Escapes backslashes, double quotes and line breaks.
pub fn escape_js_string(s: &str) -> String {
    s.replace('\\', "\\\\")
        .replace('"', "\\\"")
        .replace('\n', "\\n")
        .replace('\r', "\\r")
}

/// Keep text from closing the `/** ... */` block it is placed in.
pub fn escape_block_comment(s: &str) -> String {
    s.replace("*/", "*\\/")
}

/// Double-quote a string as a JavaScript string literal.
pub fn js_string(s: &str) -> String {
    format!("\"{}\"", escape_js_string(s))
}

/// Quote a string if needed for use as a property key.
/// Returns the name quoted with escaped special characters if needed,
/// or the original name if it's a valid identifier.
pub fn quote_if_needed(name: &str) -> String {
    if needs_quoting(name) {
        js_string(name)
    } else {
        name.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_schema_ident() {
        assert_eq!(schema_ident("User"), "UserSchema");
    }

    #[test]
    fn test_quote_if_needed() {
        assert_eq!(quote_if_needed("name"), "name");
        assert_eq!(quote_if_needed("$ref"), "$ref");
        assert_eq!(quote_if_needed("_id"), "_id");
        assert_eq!(quote_if_needed("content-type"), "\"content-type\"");
        assert_eq!(quote_if_needed("1st"), "\"1st\"");
        assert_eq!(quote_if_needed(""), "\"\"");
        assert_eq!(quote_if_needed("a\"b"), "\"a\\\"b\"");
    }

    #[test]
    fn test_escape_js_string() {
        assert_eq!(escape_js_string(r"C:\tmp"), r"C:\\tmp");
        assert_eq!(escape_js_string("line\nbreak"), "line\\nbreak");
    }

    #[test]
    fn test_escape_block_comment() {
        assert_eq!(escape_block_comment("@acme/models"), "@acme/models");
        assert_eq!(escape_block_comment("a*/b"), "a*\\/b");
    }
}
