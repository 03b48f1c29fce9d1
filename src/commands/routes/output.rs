//! Output formatting for routes command results.

use super::execute::RoutesResult;
use crate::output::Outputable;

impl Outputable for RoutesResult {
    fn to_table(&self) -> String {
        if self.routes.is_empty() {
            return "No models declared.".to_string();
        }

        let mut lines = vec![format!("Routes ({}):", self.routes.len())];
        for (model, route) in &self.routes {
            let provisioning = if route.provision_db {
                "provisioned"
            } else {
                "external"
            };
            lines.push(format!(
                "  {}: {} ({}, {})",
                model,
                route.db_type.tag(),
                provisioning,
                route.provision_strategy.tag()
            ));
        }
        lines.join("\n")
    }
}
