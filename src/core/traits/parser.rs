use std::path::Path;

use crate::core::errors::Result;
use crate::core::models::document::RootConfig;

/// Port for turning raw document text into a `RootConfig`.
///
/// Only `JsonDocumentParser` ships today; the trait leaves room for
/// YAML or TOML context files.
pub trait DocumentParser: Send + Sync {
    /// Parse raw file content. `source` is only used in error messages.
    fn parse(&self, content: &str, source: &Path) -> Result<RootConfig>;

    /// File extensions this parser handles (e.g. `[".json"]`).
    fn supported_extensions(&self) -> &[&str];
}
