//! Typed, per-environment resolution of CDK context documents.
//!
//! A `cdk.json` document carries framework feature flags and a nested
//! `context.environments` map with per-environment sizing. This crate
//! selects one environment, substitutes `${projectName}` style
//! placeholders and decodes the result into read-only typed settings.
//!
//! ```no_run
//! let project = stackctx::Project::open(".")?;
//! let settings = project.resolve(Some("prod"))?;
//! println!("{} tasks max", settings.application().max_tasks);
//! # Ok::<(), stackctx::StackctxError>(())
//! ```

pub mod adapters;
pub mod config;
pub mod core;
pub mod project;

pub use crate::config::app_config::AppConfig;
pub use crate::core::errors::{Result, StackctxError};
pub use crate::core::models::document::RootConfig;
pub use crate::core::models::resolved::ResolvedConfig;
pub use crate::core::services::config_resolver::ConfigResolver;
pub use crate::project::{Project, load_document};
