use std::collections::BTreeMap;
use std::error::Error;

use serde::Serialize;
use tracing::info;

use super::RoutesCmd;
use crate::commands::Execute;
use crate::config::load_json;
use crate::datasource::{DataSourceType, ModelDataSourceStrategy, normalize};

/// Result of the routes command execution
#[derive(Debug, Clone, Default, Serialize)]
#[serde(transparent)]
pub struct RoutesResult {
    pub routes: BTreeMap<String, DataSourceType>,
}

impl Execute for RoutesCmd {
    type Output = RoutesResult;

    fn execute(self) -> Result<Self::Output, Box<dyn Error>> {
        let strategies: BTreeMap<String, ModelDataSourceStrategy> = load_json(&self.strategies)?;
        info!(
            strategies = %self.strategies.display(),
            models = strategies.len(),
            "Normalizing data-source strategies"
        );

        let routes = normalize(&strategies)?;
        Ok(RoutesResult { routes })
    }
}
