use std::path::PathBuf;

/// All domain errors for stackctx.
///
/// Each variant provides enough context to diagnose the issue
/// without needing a debugger.
#[derive(Debug, thiserror::Error)]
pub enum StackctxError {
    #[error(
        "Environment '{name}' not found\n\n  \
         Available environments: {available}\n  \
         Check context.environments in the context document."
    )]
    UnknownEnvironment { name: String, available: String },

    #[error(
        "Unresolved placeholder '${{{token}}}' at {path}\n\n  \
         No variable named '{token}' is defined for this resolution.\n\n  \
         Solutions:\n    \
         → Built-in variables are projectName and envName\n    \
         → Add it to [variables] in stackctx.toml\n    \
         → Or remove the token from the value"
    )]
    UnresolvedPlaceholder { token: String, path: String },

    #[error(
        "Environment '{environment}' is missing the required '{section}' section\n\n  \
         Every environment must define: network, application, ecr, alarms, cleanup."
    )]
    MissingSection { environment: String, section: String },

    #[error("Invalid settings in environment '{environment}': {detail}")]
    InvalidSection { environment: String, detail: String },

    #[error(
        "Parse error in {file}: {detail}\n\n  \
         Expected a JSON object; feature flags and environments live under \"context\"."
    )]
    ParseError { file: PathBuf, detail: String },

    #[error(
        "File not found: {path}\n\n  \
         Check that the path is correct and the file exists.\n  \
         The document path can be set with 'document' in stackctx.toml."
    )]
    FileNotFound { path: PathBuf },

    #[error("Invalid configuration: {detail}")]
    InvalidConfig { detail: String },

    #[error(
        "This project uses format version {project_version}, but this build \
         only supports up to version {supported_version}.\n\n  \
         Solution:\n    \
         → Upgrade the stackctx dependency"
    )]
    FormatVersionTooNew {
        project_version: u32,
        supported_version: u32,
    },

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, StackctxError>;
