//! Type algebra for unification
//!
//! A closed set of type variants:
//! - Base types: `number`, `string`, `boolean`
//! - Literal types: `1`, `"hello"`, `true`
//! - Type variables: named placeholders resolved by a substitution
//! - Function types: `(params) => returns`, arity is part of identity
//! - Object types: `{ field: T, ... }`
//!
//! Type trees are immutable values and can never be cyclic, so structural
//! recursion over a `Type` always terminates.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// Type representation
///
/// Serialized as an internally tagged object, e.g. `{"type": "strlit", "value": "a"}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum Type {
    /// Widened number type
    #[serde(rename = "num")]
    Number,

    /// Number literal type: `42`
    #[serde(rename = "numlit")]
    NumberLiteral { value: f64 },

    /// Widened string type
    #[serde(rename = "str")]
    String,

    /// String literal type: `"hello"`
    #[serde(rename = "strlit")]
    StringLiteral { value: String },

    /// Widened boolean type
    #[serde(rename = "bool")]
    Boolean,

    /// Boolean literal type: `true`
    #[serde(rename = "boollit")]
    BooleanLiteral { value: bool },

    /// Type variable, identified by name
    #[serde(rename = "var")]
    Variable { name: String },

    /// Function type: `(params) => returns`
    #[serde(rename = "func")]
    Function { params: Vec<Type>, returns: Box<Type> },

    /// Object type with uniquely named fields
    #[serde(rename = "obj")]
    Object { fields: BTreeMap<String, Type> },
}

/// Discriminant of a [`Type`], used in mismatch errors and traces
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TypeKind {
    Number,
    NumberLiteral,
    String,
    StringLiteral,
    Boolean,
    BooleanLiteral,
    Variable,
    Function,
    Object,
}

impl TypeKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            TypeKind::Number => "number",
            TypeKind::NumberLiteral => "number literal",
            TypeKind::String => "string",
            TypeKind::StringLiteral => "string literal",
            TypeKind::Boolean => "boolean",
            TypeKind::BooleanLiteral => "boolean literal",
            TypeKind::Variable => "type variable",
            TypeKind::Function => "function",
            TypeKind::Object => "object",
        }
    }
}

impl fmt::Display for TypeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Type {
    /// Create the widened number type
    pub fn number() -> Self {
        Type::Number
    }

    /// Create a number literal type
    pub fn number_literal(value: f64) -> Self {
        Type::NumberLiteral { value }
    }

    /// Create the widened string type
    pub fn string() -> Self {
        Type::String
    }

    /// Create a string literal type
    pub fn string_literal(value: impl Into<String>) -> Self {
        Type::StringLiteral {
            value: value.into(),
        }
    }

    /// Create the widened boolean type
    pub fn boolean() -> Self {
        Type::Boolean
    }

    /// Create a boolean literal type
    pub fn boolean_literal(value: bool) -> Self {
        Type::BooleanLiteral { value }
    }

    /// Create a type variable
    pub fn variable(name: impl Into<String>) -> Self {
        Type::Variable { name: name.into() }
    }

    /// Create a function type
    pub fn function(params: Vec<Type>, returns: Type) -> Self {
        Type::Function {
            params,
            returns: Box::new(returns),
        }
    }

    /// Create an object type from `(name, type)` pairs
    ///
    /// Later duplicates of a field name replace earlier ones.
    pub fn object<K, I>(fields: I) -> Self
    where
        K: Into<String>,
        I: IntoIterator<Item = (K, Type)>,
    {
        Type::Object {
            fields: fields.into_iter().map(|(k, t)| (k.into(), t)).collect(),
        }
    }

    pub fn kind(&self) -> TypeKind {
        match self {
            Type::Number => TypeKind::Number,
            Type::NumberLiteral { .. } => TypeKind::NumberLiteral,
            Type::String => TypeKind::String,
            Type::StringLiteral { .. } => TypeKind::StringLiteral,
            Type::Boolean => TypeKind::Boolean,
            Type::BooleanLiteral { .. } => TypeKind::BooleanLiteral,
            Type::Variable { .. } => TypeKind::Variable,
            Type::Function { .. } => TypeKind::Function,
            Type::Object { .. } => TypeKind::Object,
        }
    }

    /// Variable name, if this is a type variable
    pub fn as_variable(&self) -> Option<&str> {
        match self {
            Type::Variable { name } => Some(name),
            _ => None,
        }
    }

    /// Literal string value, if this is a string literal type
    pub fn as_string_literal(&self) -> Option<&str> {
        match self {
            Type::StringLiteral { value } => Some(value),
            _ => None,
        }
    }

    /// Replace every occurrence of variable `name` with `replacement`
    pub fn substitute(&self, name: &str, replacement: &Type) -> Type {
        match self {
            Type::Variable { name: var } if var == name => replacement.clone(),
            Type::Function { params, returns } => Type::Function {
                params: params
                    .iter()
                    .map(|p| p.substitute(name, replacement))
                    .collect(),
                returns: Box::new(returns.substitute(name, replacement)),
            },
            Type::Object { fields } => Type::Object {
                fields: fields
                    .iter()
                    .map(|(k, t)| (k.clone(), t.substitute(name, replacement)))
                    .collect(),
            },
            _ => self.clone(),
        }
    }

    /// Whether variable `name` occurs anywhere in this type
    pub fn mentions(&self, name: &str) -> bool {
        match self {
            Type::Variable { name: var } => var == name,
            Type::Function { params, returns } => {
                params.iter().any(|p| p.mentions(name)) || returns.mentions(name)
            }
            Type::Object { fields } => fields.values().any(|t| t.mentions(name)),
            _ => false,
        }
    }
}

impl fmt::Display for Type {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Type::Number => write!(f, "number"),
            Type::NumberLiteral { value } => write!(f, "{}", value),
            Type::String => write!(f, "string"),
            Type::StringLiteral { value } => write!(f, "{:?}", value),
            Type::Boolean => write!(f, "boolean"),
            Type::BooleanLiteral { value } => write!(f, "{}", value),
            Type::Variable { name } => write!(f, "{}", name),
            Type::Function { params, returns } => {
                write!(f, "(")?;
                for (i, p) in params.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{}", p)?;
                }
                write!(f, ") => {}", returns)
            }
            Type::Object { fields } if fields.is_empty() => write!(f, "{{}}"),
            Type::Object { fields } => {
                write!(f, "{{ ")?;
                for (i, (name, ty)) in fields.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{}: {}", name, ty)?;
                }
                write!(f, " }}")
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_literal_equality_requires_same_value() {
        assert_eq!(Type::string_literal("a"), Type::string_literal("a"));
        assert_ne!(Type::string_literal("a"), Type::string_literal("b"));
        assert_ne!(Type::number_literal(1.0), Type::string_literal("1"));
    }

    #[test]
    fn test_display() {
        let ty = Type::function(
            vec![Type::variable("x"), Type::number()],
            Type::object([("name", Type::string_literal("pete"))]),
        );
        assert_eq!(ty.to_string(), r#"(x, number) => { name: "pete" }"#);
        assert_eq!(Type::number_literal(1.0).to_string(), "1");
        assert_eq!(Type::object(Vec::<(String, Type)>::new()).to_string(), "{}");
    }

    #[test]
    fn test_substitute_is_structural() {
        let ty = Type::function(
            vec![Type::variable("x")],
            Type::object([("a", Type::variable("x")), ("b", Type::variable("y"))]),
        );
        let replaced = ty.substitute("x", &Type::boolean_literal(true));

        assert!(!replaced.mentions("x"));
        assert!(replaced.mentions("y"));
    }

    #[test]
    fn test_serde_tags() {
        let json = serde_json::to_value(Type::string_literal("hi")).unwrap();
        assert_eq!(json, serde_json::json!({"type": "strlit", "value": "hi"}));

        let parsed: Type =
            serde_json::from_str(r#"{"type": "func", "params": [{"type": "num"}], "returns": {"type": "var", "name": "r"}}"#)
                .unwrap();
        assert_eq!(parsed, Type::function(vec![Type::number()], Type::variable("r")));
    }

    #[test]
    fn test_kind() {
        assert_eq!(Type::variable("x").kind(), TypeKind::Variable);
        assert_eq!(Type::boolean_literal(false).kind(), TypeKind::BooleanLiteral);
        assert_eq!(TypeKind::StringLiteral.to_string(), "string literal");
    }
}
