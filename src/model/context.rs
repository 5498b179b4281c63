use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use super::{
    Agent, Alert, AnalyticMetric, InventoryItem, Metric, Order, PerformanceTarget, Vehicle,
    Warehouse,
};

/// Read-only snapshot of dashboard data handed to the interpreter.
///
/// The interpreter only formats this data; it never mutates it. Every list
/// defaults to empty so partial snapshot files are accepted.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
#[cfg_attr(feature = "ts-bindings", derive(ts_rs::TS))]
#[cfg_attr(feature = "ts-bindings", ts(export))]
#[serde(default, rename_all = "camelCase")]
pub struct ExternalContext {
    pub metrics: Vec<Metric>,
    pub agents: Vec<Agent>,
    pub alerts: Vec<Alert>,
    pub inventory: Vec<InventoryItem>,
    pub orders: Vec<Order>,
    pub vehicles: Vec<Vehicle>,
    pub warehouses: Vec<Warehouse>,
    pub analytics: Vec<AnalyticMetric>,
    pub performance: Vec<PerformanceTarget>,
}

impl ExternalContext {
    /// Agent whose name equals `name`, ignoring case.
    pub fn find_agent(&self, name: &str) -> Option<&Agent> {
        let wanted = name.to_lowercase();
        self.agents.iter().find(|a| a.name.to_lowercase() == wanted)
    }

    pub fn find_order(&self, key: &str) -> Option<&Order> {
        self.orders.iter().find(|o| o.matches(key))
    }

    pub fn find_item(&self, key: &str) -> Option<&InventoryItem> {
        self.inventory.iter().find(|i| i.matches(key))
    }

    pub fn find_vehicle(&self, id: &str) -> Option<&Vehicle> {
        self.vehicles.iter().find(|v| v.id.eq_ignore_ascii_case(id))
    }

    pub fn active_agent_count(&self) -> usize {
        self.agents.iter().filter(|a| a.is_active()).count()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;

    #[test]
    fn partial_snapshot_defaults_missing_lists() {
        let ctx: ExternalContext =
            serde_json::from_str(r#"{"agents":[{"id":"1","name":"Alpha"}]}"#).unwrap();
        assert_eq!(ctx.agents.len(), 1);
        assert!(ctx.metrics.is_empty());
        assert!(ctx.alerts.is_empty());
        assert!(ctx.warehouses.is_empty());
    }

    #[test]
    fn agent_lookup_ignores_case() {
        let ctx = ExternalContext {
            agents: vec![Agent::new("1", "InventoryBot-Alpha")],
            ..ExternalContext::default()
        };
        assert_eq!(ctx.find_agent("inventorybot-alpha").map(|a| a.id.as_str()), Some("1"));
        assert!(ctx.find_agent("InventoryBot").is_none());
    }
}
