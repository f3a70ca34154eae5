use std::collections::BTreeMap;

use serde::Serialize;
use serde_json::Value;
use sha2::{Digest, Sha256};

use super::environment::{
    AlarmConfig, ApplicationConfig, CleanupConfig, DatabaseConfig, EcrConfig, EnvironmentConfig,
    HealthCheckConfig, NetworkConfig, PineconeConfig, RdsConfig, RedisConfig, ScalingConfig,
};

/// Fully-resolved settings for one environment.
///
/// Produced by `ConfigResolver::resolve`. Every placeholder has been
/// substituted and every section decoded, so consumers only read.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ResolvedConfig {
    environment_name: String,
    project_name: Option<String>,
    flags: BTreeMap<String, Value>,
    settings: EnvironmentConfig,
}

impl ResolvedConfig {
    pub(crate) fn new(
        environment_name: String,
        project_name: Option<String>,
        flags: BTreeMap<String, Value>,
        settings: EnvironmentConfig,
    ) -> Self {
        Self {
            environment_name,
            project_name,
            flags,
            settings,
        }
    }

    pub fn environment_name(&self) -> &str {
        &self.environment_name
    }

    pub fn project_name(&self) -> Option<&str> {
        self.project_name.as_deref()
    }

    /// Project-wide feature flags, exactly as they appear in the document.
    pub fn flags(&self) -> &BTreeMap<String, Value> {
        &self.flags
    }

    pub fn flag(&self, name: &str) -> Option<&Value> {
        self.flags.get(name)
    }

    /// True only when the flag is present and is the boolean `true`.
    pub fn feature_enabled(&self, name: &str) -> bool {
        matches!(self.flags.get(name), Some(Value::Bool(true)))
    }

    pub fn settings(&self) -> &EnvironmentConfig {
        &self.settings
    }

    pub fn network(&self) -> &NetworkConfig {
        &self.settings.network
    }

    pub fn application(&self) -> &ApplicationConfig {
        &self.settings.application
    }

    pub fn health_check(&self) -> &HealthCheckConfig {
        &self.settings.application.health_check
    }

    pub fn scaling(&self) -> &ScalingConfig {
        &self.settings.application.scaling
    }

    pub fn database(&self) -> &DatabaseConfig {
        &self.settings.application.database
    }

    pub fn redis(&self) -> &RedisConfig {
        &self.settings.application.database.redis
    }

    pub fn rds(&self) -> &RdsConfig {
        &self.settings.application.database.rds
    }

    /// `None` when the environment does not use Pinecone.
    pub fn pinecone(&self) -> Option<&PineconeConfig> {
        self.settings.pinecone()
    }

    pub fn ecr(&self) -> &EcrConfig {
        &self.settings.ecr
    }

    pub fn alarms(&self) -> &AlarmConfig {
        &self.settings.alarms
    }

    pub fn cleanup(&self) -> &CleanupConfig {
        &self.settings.cleanup
    }

    /// Physical resource name: `{project}-{env}-{suffix}`.
    ///
    /// Returns `None` when the document has no project name.
    pub fn resource_name(&self, suffix: &str) -> Option<String> {
        self.project_name
            .as_ref()
            .map(|project| format!("{project}-{}-{suffix}", self.environment_name))
    }

    /// SHA-256 hex digest of the canonical JSON form.
    ///
    /// Two resolutions of the same document and environment produce the
    /// same fingerprint.
    pub fn fingerprint(&self) -> String {
        let canonical = serde_json::to_vec(self).unwrap_or_default();
        let mut hasher = Sha256::new();
        hasher.update(&canonical);
        format!("{:x}", hasher.finalize())
    }

    pub fn to_json_pretty(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}
