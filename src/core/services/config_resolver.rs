use std::collections::BTreeMap;

use serde_json::Value;

use crate::core::errors::{Result, StackctxError};
use crate::core::models::document::RootConfig;
use crate::core::models::environment::{EnvironmentConfig, REQUIRED_SECTIONS};
use crate::core::models::resolved::ResolvedConfig;
use crate::core::services::placeholder::{PlaceholderSubstitutor, escape_pointer_segment};

/// Variable bound to `context.environments.projectName`.
pub const PROJECT_NAME_VAR: &str = "projectName";
/// Variable bound to the environment being resolved.
pub const ENV_NAME_VAR: &str = "envName";

/// Resolves one environment of a context document into typed settings.
///
/// Resolution selects the environment subtree and copies the flag map.
/// It then substitutes placeholders in one pass and decodes the result.
/// It is atomic: either everything resolves or an error is returned.
#[derive(Debug, Clone, Default)]
pub struct ConfigResolver {
    extra_variables: BTreeMap<String, String>,
}

impl ConfigResolver {
    pub fn new() -> Self {
        Self::default()
    }

    /// Make an additional `${name}` variable available.
    ///
    /// Built-in variables (`projectName`, `envName`) take precedence.
    pub fn with_variable(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.extra_variables.insert(name.into(), value.into());
        self
    }

    pub fn with_variables<I, K, V>(mut self, variables: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        self.extra_variables
            .extend(variables.into_iter().map(|(k, v)| (k.into(), v.into())));
        self
    }

    /// Resolve `env_name` from `document`.
    ///
    /// # Errors
    ///
    /// - `UnknownEnvironment` if `env_name` is not under `context.environments`.
    /// - `MissingSection` if a required section is absent or `null`.
    /// - `UnresolvedPlaceholder` if a `${token}` has no variable. The
    ///   reported path is a JSON pointer into the whole document.
    /// - `InvalidSection` if a section does not decode into its typed form.
    pub fn resolve(&self, document: &RootConfig, env_name: &str) -> Result<ResolvedConfig> {
        tracing::debug!(environment = env_name, "resolving environment");

        let subtree = document.context.environments.get(env_name).ok_or_else(|| {
            StackctxError::UnknownEnvironment {
                name: env_name.to_string(),
                available: available_list(document),
            }
        })?;

        for section in REQUIRED_SECTIONS {
            if subtree.get(*section).is_none_or(Value::is_null) {
                return Err(StackctxError::MissingSection {
                    environment: env_name.to_string(),
                    section: (*section).to_string(),
                });
            }
        }

        let variables = self.variables_for(document, env_name);
        let substitutor = PlaceholderSubstitutor::new(&variables);

        let mut tree = Value::Object(subtree.clone());
        let mut pointer = format!(
            "/context/environments/{}",
            escape_pointer_segment(env_name)
        );
        let substitutions = substitutor.substitute_tree(&mut tree, &mut pointer)?;
        tracing::debug!(
            environment = env_name,
            substitutions,
            "placeholders substituted"
        );

        let settings: EnvironmentConfig =
            serde_json::from_value(tree).map_err(|e| StackctxError::InvalidSection {
                environment: env_name.to_string(),
                detail: e.to_string(),
            })?;

        tracing::info!(
            environment = env_name,
            project = document.project_name().unwrap_or("-"),
            flags = document.context.flags.len(),
            substitutions,
            "environment resolved"
        );

        Ok(ResolvedConfig::new(
            env_name.to_string(),
            document.project_name().map(str::to_string),
            document.context.flags.clone(),
            settings,
        ))
    }

    /// Resolve every environment in the document, in name order.
    ///
    /// Fails on the first environment that does not resolve.
    pub fn resolve_all(&self, document: &RootConfig) -> Result<Vec<ResolvedConfig>> {
        document
            .environment_names()
            .into_iter()
            .map(|name| self.resolve(document, name))
            .collect()
    }

    /// Build the variable table for one resolution.
    fn variables_for(&self, document: &RootConfig, env_name: &str) -> BTreeMap<String, String> {
        let mut variables = self.extra_variables.clone();
        if let Some(project) = document.project_name() {
            variables.insert(PROJECT_NAME_VAR.to_string(), project.to_string());
        }
        variables.insert(ENV_NAME_VAR.to_string(), env_name.to_string());
        variables
    }
}

fn available_list(document: &RootConfig) -> String {
    let names = document.environment_names();
    if names.is_empty() {
        "(none)".to_string()
    } else {
        names.join(", ")
    }
}
