//! `ConstraintSource` implementations
//!
//! - `VecConstraintSource`: constraints already built in memory
//! - `JsonConstraintSource`: a JSON array of tagged constraints, from a file or text

use std::path::PathBuf;

use crate::errors::Result;
use crate::features::type_unification::domain::Constraint;
use crate::features::type_unification::ports::ConstraintSource;

#[derive(Debug, Clone, Default)]
pub struct VecConstraintSource {
    constraints: Vec<Constraint>,
}

impl VecConstraintSource {
    pub fn new(constraints: Vec<Constraint>) -> Self {
        Self { constraints }
    }
}

impl From<Vec<Constraint>> for VecConstraintSource {
    fn from(constraints: Vec<Constraint>) -> Self {
        Self::new(constraints)
    }
}

impl ConstraintSource for VecConstraintSource {
    fn constraints(&self) -> Result<Vec<Constraint>> {
        Ok(self.constraints.clone())
    }
}

#[derive(Debug, Clone)]
enum JsonInput {
    File(PathBuf),
    Text(String),
}

#[derive(Debug, Clone)]
pub struct JsonConstraintSource {
    input: JsonInput,
}

impl JsonConstraintSource {
    pub fn from_file(path: impl Into<PathBuf>) -> Self {
        Self {
            input: JsonInput::File(path.into()),
        }
    }

    pub fn from_text(text: impl Into<String>) -> Self {
        Self {
            input: JsonInput::Text(text.into()),
        }
    }
}

impl ConstraintSource for JsonConstraintSource {
    fn constraints(&self) -> Result<Vec<Constraint>> {
        let constraints = match &self.input {
            JsonInput::File(path) => {
                let content = std::fs::read_to_string(path)?;
                serde_json::from_str(&content)?
            }
            JsonInput::Text(text) => serde_json::from_str(text)?,
        };
        Ok(constraints)
    }

    fn describe(&self) -> String {
        match &self.input {
            JsonInput::File(path) => format!("json:{}", path.display()),
            JsonInput::Text(_) => "json:<inline>".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::CodegraphUnifyError;
    use crate::features::type_unification::domain::Type;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_vec_source() {
        let source = VecConstraintSource::from(vec![Constraint::equals(
            Type::variable("x"),
            Type::number(),
        )]);
        assert_eq!(source.constraints().unwrap().len(), 1);
    }

    #[test]
    fn test_json_file_source() {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(
            br#"[{"type": "eq", "left": {"type": "var", "name": "x"}, "right": {"type": "bool"}}]"#,
        )
        .unwrap();

        let source = JsonConstraintSource::from_file(file.path());
        assert_eq!(
            source.constraints().unwrap(),
            vec![Constraint::equals(Type::variable("x"), Type::boolean())]
        );
        assert!(source.describe().starts_with("json:"));
    }

    #[test]
    fn test_json_malformed() {
        let source = JsonConstraintSource::from_text(r#"[{"type": "subtype"}]"#);
        assert!(matches!(
            source.constraints(),
            Err(CodegraphUnifyError::Json(_))
        ));
    }

    #[test]
    fn test_json_missing_file() {
        let source = JsonConstraintSource::from_file("/nonexistent/constraints.json");
        assert!(matches!(source.constraints(), Err(CodegraphUnifyError::Io(_))));
    }
}
