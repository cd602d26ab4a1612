//! Loads templates, contract data and clause overrides from JSON or YAML files.

use std::path::Path;

use serde::de::DeserializeOwned;
use thiserror::Error;
use tokio::fs;

use crate::domain::contract::{Clause, ContractData, ContractTemplate};

/// Serialisation of an input file, picked from its extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputFormat {
    Json,
    Yaml,
}

impl InputFormat {
    /// `.yaml` and `.yml` are YAML, anything else is JSON.
    pub fn from_path(path: &Path) -> Self {
        match path
            .extension()
            .and_then(|e| e.to_str())
            .map(str::to_ascii_lowercase)
            .as_deref()
        {
            Some("yaml") | Some("yml") => InputFormat::Yaml,
            _ => InputFormat::Json,
        }
    }
}

#[derive(Debug, Error)]
pub enum InputError {
    #[error("Failed to read {path}: {message}")]
    Io { path: String, message: String },

    #[error("Failed to parse {path}: {message}")]
    Parse { path: String, message: String },
}

/// Parses `content` in the given format.
pub fn parse_input<T: DeserializeOwned>(
    content: &str,
    format: InputFormat,
    origin: &str,
) -> Result<T, InputError> {
    let parse_error = |message: String| InputError::Parse {
        path: origin.to_string(),
        message,
    };
    match format {
        InputFormat::Json => serde_json::from_str(content).map_err(|e| parse_error(e.to_string())),
        InputFormat::Yaml => serde_yaml::from_str(content).map_err(|e| parse_error(e.to_string())),
    }
}

async fn load<T: DeserializeOwned>(path: &Path) -> Result<T, InputError> {
    let origin = path.display().to_string();
    let content = fs::read_to_string(path).await.map_err(|e| InputError::Io {
        path: origin.clone(),
        message: e.to_string(),
    })?;
    parse_input(&content, InputFormat::from_path(path), &origin)
}

pub async fn load_template(path: &Path) -> Result<ContractTemplate, InputError> {
    load(path).await
}

pub async fn load_contract_data(path: &Path) -> Result<ContractData, InputError> {
    load(path).await
}

/// Clause overrides: a plain list of `{title, content}`.
pub async fn load_clauses(path: &Path) -> Result<Vec<Clause>, InputError> {
    load(path).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn format_follows_extension() {
        assert_eq!(InputFormat::from_path(Path::new("t.yaml")), InputFormat::Yaml);
        assert_eq!(InputFormat::from_path(Path::new("t.YML")), InputFormat::Yaml);
        assert_eq!(InputFormat::from_path(Path::new("t.json")), InputFormat::Json);
        assert_eq!(InputFormat::from_path(Path::new("template")), InputFormat::Json);
    }

    #[test]
    fn parses_yaml_template() {
        let yaml = r#"
name: "Contrato de Shows"
templateType: shows
clauses:
  - title: Do Objeto
    content: "Apresentação de {{contracted_stage_name}}."
"#;
        let template: ContractTemplate = parse_input(yaml, InputFormat::Yaml, "inline").unwrap();
        assert_eq!(template.template_type, "shows");
        assert_eq!(template.clauses[0].title, "Do Objeto");
    }

    #[test]
    fn parse_errors_name_the_origin() {
        let err = parse_input::<ContractData>("{not json", InputFormat::Json, "data.json").unwrap_err();
        assert!(err.to_string().contains("data.json"));
    }

    #[tokio::test]
    async fn loads_clause_overrides_from_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("clauses.json");
        std::fs::write(&path, r#"[{"title": "Única", "content": "Texto."}]"#).unwrap();

        let clauses = load_clauses(&path).await.unwrap();
        assert_eq!(clauses, vec![Clause::new("Única", "Texto.")]);
    }

    #[tokio::test]
    async fn missing_file_is_an_io_error() {
        let dir = TempDir::new().unwrap();
        let err = load_contract_data(&dir.path().join("absent.json")).await.unwrap_err();
        assert!(matches!(err, InputError::Io { .. }));
    }
}
