use std::path::Path;

use crate::core::errors::{Result, StackctxError};
use crate::core::models::document::RootConfig;
use crate::core::traits::parser::DocumentParser;

/// Parses `cdk.json`-style context documents.
pub struct JsonDocumentParser;

impl DocumentParser for JsonDocumentParser {
    fn parse(&self, content: &str, source: &Path) -> Result<RootConfig> {
        let value: serde_json::Value =
            serde_json::from_str(content).map_err(|e| StackctxError::ParseError {
                file: source.to_path_buf(),
                detail: format!("line {}, column {}: {e}", e.line(), e.column()),
            })?;

        if !value.is_object() {
            return Err(StackctxError::ParseError {
                file: source.to_path_buf(),
                detail: "top-level value is not an object".into(),
            });
        }

        serde_json::from_value(value).map_err(|e| StackctxError::ParseError {
            file: source.to_path_buf(),
            detail: e.to_string(),
        })
    }

    fn supported_extensions(&self) -> &[&str] {
        &[".json"]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(content: &str) -> Result<RootConfig> {
        JsonDocumentParser.parse(content, Path::new("cdk.json"))
    }

    #[test]
    fn parse_full_document() {
        let doc = parse(
            r#"{
                "app": "python3 app.py",
                "watch": { "include": ["**"], "exclude": ["README.md", "cdk*.json"] },
                "context": {
                    "@aws-cdk/core:enableStackNameDuplicates": true,
                    "environments": { "projectName": "marti-ai", "dev": {}, "prod": {} }
                }
            }"#,
        )
        .unwrap();

        let watch = doc.watch.unwrap();
        assert_eq!(watch.include, vec!["**"]);
        assert_eq!(watch.exclude.len(), 2);
        assert_eq!(doc.context.environments.names(), vec!["dev", "prod"]);
    }

    #[test]
    fn syntax_error_reports_position() {
        let err = parse("{\n  \"context\": {,\n}").unwrap_err();

        match err {
            StackctxError::ParseError { file, detail } => {
                assert_eq!(file, Path::new("cdk.json"));
                assert!(detail.starts_with("line 2"), "got: {detail}");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn document_without_context_parses() {
        let doc = parse(r#"{ "app": "python3 app.py" }"#).unwrap();
        assert!(doc.environment_names().is_empty());

        let message = parse("42").unwrap_err().to_string();
        assert!(message.contains("Expected a JSON object"));
        assert!(!message.contains("top-level \"context\" entry"));
    }

    #[test]
    fn non_object_document_fails() {
        let err = parse("[1, 2, 3]").unwrap_err();
        assert!(err.to_string().contains("not an object"));
    }

    #[test]
    fn project_name_must_be_a_string() {
        let result = parse(r#"{ "context": { "environments": { "projectName": 7 } } }"#);
        assert!(result.is_err());
    }

    #[test]
    fn supported_extensions() {
        assert_eq!(JsonDocumentParser.supported_extensions(), &[".json"]);
    }
}
