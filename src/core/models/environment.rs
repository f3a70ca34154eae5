use serde::{Deserialize, Serialize};

/// Sections every environment must define. A `null` value counts as absent.
pub const REQUIRED_SECTIONS: &[&str] = &["network", "application", "ecr", "alarms", "cleanup"];

/// Typed settings for one deployment environment (dev, prod, ...).
///
/// Optional values are `None` when absent from the document; they are
/// never filled with guessed defaults.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EnvironmentConfig {
    pub network: NetworkConfig,
    pub application: ApplicationConfig,
    pub ecr: EcrConfig,
    pub alarms: AlarmConfig,
    pub cleanup: CleanupConfig,
    /// Environment-level Pinecone block, used when `application.database`
    /// carries none.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pinecone: Option<PineconeConfig>,
}

impl EnvironmentConfig {
    /// Pinecone settings, preferring `application.database.pinecone`.
    pub fn pinecone(&self) -> Option<&PineconeConfig> {
        self.application
            .database
            .pinecone
            .as_ref()
            .or(self.pinecone.as_ref())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NetworkConfig {
    #[serde(alias = "maxAzs")]
    pub max_azs: u32,
    #[serde(alias = "natGateways")]
    pub nat_gateways: u32,
}

/// Container service sizing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApplicationConfig {
    #[serde(alias = "container_insights")]
    pub container_insights: bool,
    #[serde(alias = "task_cpu")]
    pub task_cpu: u32,
    #[serde(alias = "task_memory")]
    pub task_memory: u32,
    #[serde(alias = "container_port")]
    pub container_port: u16,
    #[serde(alias = "desired_count")]
    pub desired_count: u32,
    #[serde(alias = "min_tasks")]
    pub min_tasks: u32,
    #[serde(alias = "max_tasks")]
    pub max_tasks: u32,
    #[serde(alias = "health_check")]
    pub health_check: HealthCheckConfig,
    pub scaling: ScalingConfig,
    pub database: DatabaseConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HealthCheckConfig {
    pub path: String,
    pub interval: u32,
    pub timeout: u32,
    #[serde(alias = "healthyCount")]
    pub healthy_count: u32,
    #[serde(alias = "unhealthyCount")]
    pub unhealthy_count: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScalingConfig {
    #[serde(alias = "cpuTargetUtilization")]
    pub cpu_target_utilization: u32,
    #[serde(alias = "requestsPerTarget")]
    pub requests_per_target: u32,
    #[serde(alias = "scaleInCooldown")]
    pub scale_in_cooldown: u32,
    #[serde(alias = "scaleOutCooldown")]
    pub scale_out_cooldown: u32,
}

/// Data stores attached to the application.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DatabaseConfig {
    /// Logical database name handed to the container as `DB_NAME`.
    pub name: String,
    pub redis: RedisConfig,
    pub rds: RdsConfig,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pinecone: Option<PineconeConfig>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RedisConfig {
    #[serde(alias = "nodeType")]
    pub node_type: String,
    #[serde(alias = "numNodes")]
    pub num_nodes: u32,
    pub port: u16,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RdsConfig {
    #[serde(alias = "instanceType")]
    pub instance_type: String,
    #[serde(alias = "allocatedStorage")]
    pub allocated_storage: u32,
    #[serde(alias = "maxAllocatedStorage")]
    pub max_allocated_storage: u32,
    #[serde(alias = "multiAz")]
    pub multi_az: bool,
    #[serde(alias = "backupRetentionDays")]
    pub backup_retention_days: u32,
    #[serde(alias = "databaseName")]
    pub database_name: String,
    pub port: u16,
    #[serde(default, alias = "deletionProtection")]
    pub deletion_protection: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PineconeConfig {
    #[serde(alias = "apiKey")]
    pub api_key: String,
    #[serde(alias = "indexName")]
    pub index_name: String,
}

/// Container registry settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EcrConfig {
    #[serde(alias = "repositoryName")]
    pub repository_name: String,
    #[serde(alias = "maxImageCount")]
    pub max_image_count: u32,
    #[serde(alias = "enableScan")]
    pub enable_scan: bool,
}

/// Alarm thresholds, grouped by the resource they watch.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AlarmConfig {
    pub costs: CostAlarms,
    pub rds: RdsAlarms,
    pub redis: RedisAlarms,
    pub ecs: EcsAlarms,
    /// NAT gateway alarms; only meaningful when the network has gateways.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub network: Option<NetworkAlarms>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CostAlarms {
    #[serde(alias = "daily_threshold")]
    pub daily_threshold: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RdsAlarms {
    #[serde(alias = "cpu_threshold")]
    pub cpu_threshold: f64,
    /// Free storage floor, in bytes.
    #[serde(alias = "storage_threshold")]
    pub storage_threshold: f64,
    #[serde(alias = "connection_threshold")]
    pub connection_threshold: f64,
    #[serde(
        default,
        alias = "deadlock_threshold",
        skip_serializing_if = "Option::is_none"
    )]
    pub deadlock_threshold: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RedisAlarms {
    #[serde(alias = "cpu_threshold")]
    pub cpu_threshold: f64,
    #[serde(alias = "memory_threshold")]
    pub memory_threshold: f64,
    #[serde(
        default,
        alias = "eviction_threshold",
        skip_serializing_if = "Option::is_none"
    )]
    pub eviction_threshold: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EcsAlarms {
    #[serde(alias = "cpu_threshold")]
    pub cpu_threshold: f64,
    #[serde(alias = "memory_threshold")]
    pub memory_threshold: f64,
    /// 5XX responses per five minutes.
    #[serde(rename = "error5xxThreshold", alias = "error_5xx_threshold")]
    pub error_5xx_threshold: f64,
    #[serde(alias = "min_tasks")]
    pub min_tasks: u32,
    #[serde(
        default,
        alias = "unhealthy_task_threshold",
        skip_serializing_if = "Option::is_none"
    )]
    pub unhealthy_task_threshold: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NetworkAlarms {
    #[serde(alias = "nat_port_threshold")]
    pub nat_port_threshold: f64,
    #[serde(alias = "nat_error_threshold")]
    pub nat_error_threshold: f64,
}

/// Retention and cleanup policy.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CleanupConfig {
    pub rds: RdsCleanup,
    pub redis: RedisCleanup,
    pub ecr: EcrCleanup,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RdsCleanup {
    #[serde(alias = "backup_retention_days")]
    pub backup_retention_days: u32,
    #[serde(alias = "maintenance_window")]
    pub maintenance_window: String,
    #[serde(alias = "delete_automated_backups")]
    pub delete_automated_backups: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RedisCleanup {
    #[serde(alias = "snapshot_retention_days")]
    pub snapshot_retention_days: u32,
    #[serde(alias = "snapshot_window")]
    pub snapshot_window: String,
    #[serde(alias = "maintenance_window")]
    pub maintenance_window: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EcrCleanup {
    #[serde(alias = "max_tagged_images")]
    pub max_tagged_images: u32,
    #[serde(alias = "untagged_retention_days")]
    pub untagged_retention_days: u32,
    #[serde(alias = "tag_prefixes")]
    pub tag_prefixes: Vec<String>,
}
