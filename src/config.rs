//! Configuration management for stu
//!
//! All remote and export behavior flows through an explicit [`Config`]
//! value rather than process-global client state, so the credential
//! source and export parameters are first-class, testable inputs.

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};

/// Fallback remote region when neither the CLI nor the ambient
/// credential chain provides one.
pub const DEFAULT_REGION: &str = "us-east-1";

/// Default separator used to decompose template names into directories.
pub const DEFAULT_SEPARATOR: &str = "_";

/// Main configuration structure
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Remote gateway configuration
    pub gateway: GatewayConfig,
    /// Pull (bulk export) configuration
    pub pull: PullConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            gateway: GatewayConfig::default(),
            pull: PullConfig::default(),
        }
    }
}

impl Config {
    /// Validate configuration
    pub fn validate(&self) -> Result<()> {
        if matches!(&self.gateway.region, Some(region) if region.is_empty()) {
            return Err(Error::config("Region must not be empty"));
        }

        if self.pull.separator.is_empty() {
            return Err(Error::config("Separator must not be empty"));
        }

        if self.pull.concurrency == 0 {
            return Err(Error::config("Concurrency must be greater than 0"));
        }

        Ok(())
    }
}

/// Remote gateway configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GatewayConfig {
    /// Remote region override; when absent, the ambient chain
    /// (environment, profile) resolves it, falling back to
    /// [`DEFAULT_REGION`]
    pub region: Option<String>,
    /// Named credentials profile; falls back to the ambient chain
    pub profile: Option<String>,
    /// Endpoint override, mainly for localstack-style test endpoints
    pub endpoint_url: Option<String>,
    /// Per-operation timeout (seconds)
    pub timeout_secs: u64,
}

impl Default for GatewayConfig {
    fn default() -> Self {
        Self {
            region: None,
            profile: None,
            endpoint_url: None,
            timeout_secs: 30,
        }
    }
}

/// Pull (bulk export) configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PullConfig {
    /// Substring treated as a directory separator in template names
    pub separator: String,
    /// Maximum number of in-flight fetch-then-write units of work
    pub concurrency: usize,
}

impl Default for PullConfig {
    fn default() -> Self {
        Self {
            separator: DEFAULT_SEPARATOR.to_string(),
            concurrency: 8,
        }
    }
}
