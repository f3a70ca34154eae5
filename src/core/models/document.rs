use std::collections::BTreeMap;

use serde::Deserialize;
use serde_json::Value;

/// Top-level context document (`cdk.json`).
///
/// `app` and `watch` belong to the external provisioning tool and are
/// carried through untouched.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct RootConfig {
    pub app: Option<String>,
    pub watch: Option<WatchConfig>,
    #[serde(default)]
    pub context: ContextSection,
}

impl RootConfig {
    /// Names of all environments defined under `context.environments`, sorted.
    pub fn environment_names(&self) -> Vec<&str> {
        self.context.environments.names()
    }

    /// Project name used for `${projectName}` substitution, if present.
    pub fn project_name(&self) -> Option<&str> {
        self.context.environments.project_name.as_deref()
    }
}

/// The `watch` block: include/exclude glob lists.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct WatchConfig {
    #[serde(default)]
    pub include: Vec<String>,
    #[serde(default)]
    pub exclude: Vec<String>,
}

/// The `context` block: feature flags plus the nested `environments` map.
///
/// Flag values stay raw JSON because some framework flags are lists
/// rather than booleans.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct ContextSection {
    #[serde(default)]
    pub environments: EnvironmentsSection,
    #[serde(flatten)]
    pub flags: BTreeMap<String, Value>,
}

/// `context.environments`: a project name plus one object per environment.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct EnvironmentsSection {
    #[serde(rename = "projectName")]
    pub project_name: Option<String>,
    #[serde(flatten)]
    pub entries: BTreeMap<String, Value>,
}

impl EnvironmentsSection {
    /// Raw subtree for `name`. Non-object entries are not environments.
    pub fn get(&self, name: &str) -> Option<&serde_json::Map<String, Value>> {
        self.entries.get(name).and_then(Value::as_object)
    }

    pub fn names(&self) -> Vec<&str> {
        self.entries
            .iter()
            .filter(|(_, v)| v.is_object())
            .map(|(k, _)| k.as_str())
            .collect()
    }
}
