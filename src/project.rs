use std::path::{Path, PathBuf};

use crate::adapters::parsers::json_parser::JsonDocumentParser;
use crate::config::app_config::AppConfig;
use crate::core::errors::{Result, StackctxError};
use crate::core::models::document::RootConfig;
use crate::core::models::resolved::ResolvedConfig;
use crate::core::services::config_resolver::ConfigResolver;
use crate::core::traits::parser::DocumentParser;

/// Read and parse a context document from disk.
pub fn load_document(path: &Path) -> Result<RootConfig> {
    load_document_with(path, &JsonDocumentParser)
}

/// Read a context document using a specific parser.
///
/// A file extension the parser does not handle is rejected before reading.
pub fn load_document_with(path: &Path, parser: &dyn DocumentParser) -> Result<RootConfig> {
    if !path.exists() {
        return Err(StackctxError::FileNotFound {
            path: path.to_path_buf(),
        });
    }
    if let Some(ext) = path.extension().and_then(|e| e.to_str()) {
        let dotted = format!(".{ext}");
        if !parser.supported_extensions().contains(&dotted.as_str()) {
            return Err(StackctxError::ParseError {
                file: path.to_path_buf(),
                detail: format!(
                    "unsupported extension '{dotted}' (expected one of: {})",
                    parser.supported_extensions().join(", ")
                ),
            });
        }
    }
    let content = std::fs::read_to_string(path)?;
    let document = parser.parse(&content, path)?;
    tracing::debug!(
        path = %path.display(),
        environments = document.environment_names().len(),
        "context document loaded"
    );
    Ok(document)
}

/// A project directory: tool config plus its context document.
///
/// Both are read once by `open`; resolution never touches the disk.
#[derive(Debug, Clone)]
pub struct Project {
    root: PathBuf,
    config: AppConfig,
    document: RootConfig,
}

impl Project {
    /// Open the project rooted at `root`.
    ///
    /// # Errors
    ///
    /// - `InvalidConfig` / `FormatVersionTooNew` for a bad `stackctx.toml`.
    /// - `FileNotFound` if the context document does not exist.
    /// - `ParseError` if the document is not valid JSON.
    pub fn open(root: impl Into<PathBuf>) -> Result<Self> {
        let root = root.into();
        let config = AppConfig::load(&root)?;
        let document = load_document(&root.join(&config.stackctx.document))?;
        Ok(Self {
            root,
            config,
            document,
        })
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    pub fn document(&self) -> &RootConfig {
        &self.document
    }

    /// Resolver carrying the `[variables]` table from the tool config.
    pub fn resolver(&self) -> ConfigResolver {
        ConfigResolver::new().with_variables(self.config.variables.clone())
    }

    /// Resolve `env`, or the configured default environment when `None`.
    pub fn resolve(&self, env: Option<&str>) -> Result<ResolvedConfig> {
        let env_name = env.unwrap_or_else(|| self.config.default_env());
        self.resolver().resolve(&self.document, env_name)
    }

    /// Resolve every environment in the document.
    pub fn resolve_all(&self) -> Result<Vec<ResolvedConfig>> {
        self.resolver().resolve_all(&self.document)
    }
}
