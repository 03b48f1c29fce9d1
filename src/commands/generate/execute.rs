use std::error::Error;

use serde::Serialize;
use tracing::info;

use super::GenerateCmd;
use crate::commands::Execute;
use crate::config::{DataSourceConfig, load_json};
use crate::schema::{CompiledSchema, GraphqlCompiler, Schema};

/// Result of the generate command execution
#[derive(Debug, Clone, Serialize)]
pub struct GenerateResult {
    pub sdl: String,
    pub skipped_models: Vec<String>,
}

impl From<CompiledSchema> for GenerateResult {
    fn from(compiled: CompiledSchema) -> Self {
        Self {
            sdl: compiled.sdl,
            skipped_models: compiled.skipped_models,
        }
    }
}

impl Execute for GenerateCmd {
    type Output = GenerateResult;

    fn execute(self) -> Result<Self::Output, Box<dyn Error>> {
        let schema: Schema = load_json(&self.schema)?;
        let config: Option<DataSourceConfig> = self
            .config
            .as_deref()
            .map(load_json::<DataSourceConfig>)
            .transpose()?;

        info!(
            schema = %self.schema.display(),
            models = schema.models().len(),
            with_config = config.is_some(),
            "Generating GraphQL schema"
        );

        let compiled = GraphqlCompiler::compile(&schema, config.as_ref())?;
        Ok(compiled.into())
    }
}
