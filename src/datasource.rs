//! Model-to-data-source routing.
//!
//! Converts per-model strategy declarations into the canonical routing map
//! consumed by the resolver compiler. Every entry is validated; one bad entry
//! fails the whole map so that no model is silently left unrouted.
//!
//! | dbType | provisionStrategy | resolved |
//! |--------|-------------------|----------|
//! | DYNAMODB | DEFAULT | DDB, provisioned, DEFAULT |
//! | DYNAMODB | AMPLIFY_TABLE | DDB, provisioned, AMPLIFY_TABLE |
//! | MYSQL | (ignored) | MySQL, external, DEFAULT |
//! | POSTGRES | (ignored) | Postgres, external, DEFAULT |

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize, Serializer};
use thiserror::Error;

/// Data-source declaration for one model, as written by the user.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ModelDataSourceStrategy {
    pub db_type: String,

    /// Only meaningful for DynamoDB.
    #[serde(default)]
    pub provision_strategy: Option<String>,
}

impl ModelDataSourceStrategy {
    pub fn dynamodb(provision_strategy: impl Into<String>) -> Self {
        Self {
            db_type: "DYNAMODB".to_string(),
            provision_strategy: Some(provision_strategy.into()),
        }
    }

    pub fn sql(db_type: impl Into<String>) -> Self {
        Self {
            db_type: db_type.into(),
            provision_strategy: None,
        }
    }
}

/// Resolved database type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum DbType {
    #[serde(rename = "DDB")]
    DynamoDb,
    #[serde(rename = "MySQL")]
    MySql,
    Postgres,
}

impl DbType {
    pub fn tag(&self) -> &'static str {
        match self {
            DbType::DynamoDb => "DDB",
            DbType::MySql => "MySQL",
            DbType::Postgres => "Postgres",
        }
    }
}

/// Resolved provisioning strategy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ProvisionStrategy {
    /// DynamoDB table created through CloudFormation.
    DynamoDbDefault,
    /// DynamoDB table created through the managed-table custom resource.
    AmplifyTable,
    /// SQL models resolved by the SQL Lambda against an existing database.
    SqlLambdaDefault,
}

impl ProvisionStrategy {
    pub fn tag(&self) -> &'static str {
        match self {
            ProvisionStrategy::DynamoDbDefault => "DEFAULT",
            ProvisionStrategy::AmplifyTable => "AMPLIFY_TABLE",
            ProvisionStrategy::SqlLambdaDefault => "DEFAULT",
        }
    }
}

impl Serialize for ProvisionStrategy {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.tag())
    }
}

/// Canonical routing record for one model.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DataSourceType {
    pub db_type: DbType,
    /// Whether the infrastructure layer must create the database.
    #[serde(rename = "provisionDB")]
    pub provision_db: bool,
    pub provision_strategy: ProvisionStrategy,
}

/// Routing map errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DataSourceError {
    #[error("Encountered unexpected database type '{db_type}' for model '{model}'")]
    UnexpectedDatabaseType { model: String, db_type: String },

    #[error("Encountered unexpected provision strategy '{strategy}' for model '{model}'")]
    UnexpectedProvisionStrategy { model: String, strategy: String },
}

/// Resolve a single declaration.
pub fn resolve(
    model: &str,
    strategy: &ModelDataSourceStrategy,
) -> Result<DataSourceType, DataSourceError> {
    match strategy.db_type.as_str() {
        "DYNAMODB" => {
            let provision_strategy = match strategy.provision_strategy.as_deref() {
                Some("DEFAULT") => ProvisionStrategy::DynamoDbDefault,
                Some("AMPLIFY_TABLE") => ProvisionStrategy::AmplifyTable,
                other => {
                    return Err(DataSourceError::UnexpectedProvisionStrategy {
                        model: model.to_string(),
                        strategy: other.unwrap_or("<none>").to_string(),
                    });
                }
            };
            Ok(DataSourceType {
                db_type: DbType::DynamoDb,
                provision_db: true,
                provision_strategy,
            })
        }
        "MYSQL" | "POSTGRES" => Ok(DataSourceType {
            db_type: if strategy.db_type == "MYSQL" {
                DbType::MySql
            } else {
                DbType::Postgres
            },
            provision_db: false,
            provision_strategy: ProvisionStrategy::SqlLambdaDefault,
        }),
        other => Err(DataSourceError::UnexpectedDatabaseType {
            model: model.to_string(),
            db_type: other.to_string(),
        }),
    }
}

/// Normalize every declaration into the routing map.
///
/// Keys are carried over unchanged. The first invalid declaration aborts the
/// whole normalization.
pub fn normalize<'a, I>(strategies: I) -> Result<BTreeMap<String, DataSourceType>, DataSourceError>
where
    I: IntoIterator<Item = (&'a String, &'a ModelDataSourceStrategy)>,
{
    strategies
        .into_iter()
        .map(|(model, strategy)| resolve(model, strategy).map(|resolved| (model.clone(), resolved)))
        .collect()
}
