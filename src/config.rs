//! Data-source configuration and JSON input loading.
//!
//! The configuration shapes the optional `DataSource` block at the top of the
//! generated document. It never changes the schema itself.
//!
//! ```json
//! {
//!   "identifier": "ID1234567890",
//!   "secretNames": { "connectionUri": "CONN_STR", "sslCertificate": "SSL_CERT" },
//!   "vpcConfig": {
//!     "vpcId": "vpc-123",
//!     "securityGroupIds": ["sg1"],
//!     "subnetAvailabilityZoneConfig": [{ "subnetId": "sb1", "availabilityZone": "az1" }]
//!   }
//! }
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use serde::de::DeserializeOwned;
use thiserror::Error;

/// Data-source settings for the generated document.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DataSourceConfig {
    #[serde(default)]
    pub identifier: Option<String>,

    pub secret_names: SecretNames,

    #[serde(default)]
    pub vpc_config: Option<VpcConfig>,
}

/// Names of the secrets holding connection material.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SecretNames {
    pub connection_uri: String,

    #[serde(default)]
    pub ssl_certificate: Option<String>,
}

/// Network placement of the database.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VpcConfig {
    #[serde(default)]
    pub vpc_id: Option<String>,

    /// Treated as a set; duplicates are dropped on emission.
    #[serde(default)]
    pub security_group_ids: Vec<String>,

    #[serde(default)]
    pub subnet_availability_zone_config: Vec<SubnetAvailabilityZone>,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubnetAvailabilityZone {
    pub subnet_id: String,
    pub availability_zone: String,
}

impl DataSourceConfig {
    pub fn new(connection_uri_secret: impl Into<String>) -> Self {
        Self {
            identifier: None,
            secret_names: SecretNames {
                connection_uri: connection_uri_secret.into(),
                ssl_certificate: None,
            },
            vpc_config: None,
        }
    }

    pub fn with_identifier(mut self, identifier: impl Into<String>) -> Self {
        self.identifier = Some(identifier.into());
        self
    }

    pub fn with_ssl_certificate(mut self, secret: impl Into<String>) -> Self {
        self.secret_names.ssl_certificate = Some(secret.into());
        self
    }

    pub fn with_vpc(mut self, vpc: VpcConfig) -> Self {
        self.vpc_config = Some(vpc);
        self
    }
}

impl VpcConfig {
    /// Security group ids without duplicates, in first-seen order.
    pub fn unique_security_group_ids(&self) -> Vec<&str> {
        let mut ids: Vec<&str> = self.security_group_ids.iter().map(String::as_str).collect();
        let mut seen = std::collections::HashSet::new();
        ids.retain(|id| seen.insert(*id));
        ids
    }
}

/// Input file errors
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read '{}': {source}", .path.display())]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Invalid JSON in '{}': {source}", .path.display())]
    Parse {
        path: PathBuf,
        source: serde_json::Error,
    },
}

/// Read and deserialize a JSON input file.
pub fn load_json<T: DeserializeOwned>(path: &Path) -> Result<T, ConfigError> {
    let content = fs::read_to_string(path).map_err(|source| ConfigError::Read {
        path: path.to_path_buf(),
        source,
    })?;

    serde_json::from_str(&content).map_err(|source| ConfigError::Parse {
        path: path.to_path_buf(),
        source,
    })
}
