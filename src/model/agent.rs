use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// What an agent is responsible for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[cfg_attr(feature = "ts-bindings", derive(ts_rs::TS))]
#[cfg_attr(feature = "ts-bindings", ts(export))]
#[serde(rename_all = "lowercase")]
pub enum AgentKind {
    Inventory,
    Routing,
    Forecasting,
    Maintenance,
    Picking,
    Optimization,
}

impl AgentKind {
    pub fn label(self) -> &'static str {
        match self {
            Self::Inventory => "inventory",
            Self::Routing => "routing",
            Self::Forecasting => "forecasting",
            Self::Maintenance => "maintenance",
            Self::Picking => "picking",
            Self::Optimization => "optimization",
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[cfg_attr(feature = "ts-bindings", derive(ts_rs::TS))]
#[cfg_attr(feature = "ts-bindings", ts(export))]
#[serde(rename_all = "lowercase")]
pub enum AgentStatus {
    Active,
    Learning,
    #[default]
    Idle,
    Error,
}

impl AgentStatus {
    pub fn label(self) -> &'static str {
        match self {
            Self::Active => "active",
            Self::Learning => "learning",
            Self::Idle => "idle",
            Self::Error => "error",
        }
    }
}

/// An autonomous agent as shown on the dashboard.
///
/// Only `id` and `name` are required in snapshot files; the command
/// interpreter resolves agents by `name` and reports them by `id`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[cfg_attr(feature = "ts-bindings", derive(ts_rs::TS))]
#[cfg_attr(feature = "ts-bindings", ts(export))]
#[serde(rename_all = "camelCase")]
pub struct Agent {
    pub id: String,
    pub name: String,
    #[serde(default, rename = "type")]
    pub kind: Option<AgentKind>,
    #[serde(default)]
    pub status: AgentStatus,
    /// Percent, 0-100.
    #[serde(default)]
    pub performance: u8,
    #[serde(default)]
    pub last_action: String,
    #[serde(default)]
    pub next_action: String,
    #[serde(default)]
    pub assigned_area: String,
    #[serde(default)]
    pub decisions: u32,
    #[serde(default)]
    pub success_rate: u8,
    #[serde(default)]
    pub learning_progress: u8,
}

impl Agent {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            kind: None,
            status: AgentStatus::default(),
            performance: 0,
            last_action: String::new(),
            next_action: String::new(),
            assigned_area: String::new(),
            decisions: 0,
            success_rate: 0,
            learning_progress: 0,
        }
    }

    pub fn is_active(&self) -> bool {
        self.status == AgentStatus::Active
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;

    #[test]
    fn minimal_agent_deserializes_with_defaults() {
        let agent: Agent = serde_json::from_str(r#"{"id":"1","name":"Alpha"}"#).unwrap();
        assert_eq!(agent, Agent::new("1", "Alpha"));
        assert!(!agent.is_active());
    }

    #[test]
    fn agent_uses_dashboard_field_names() {
        let agent: Agent = serde_json::from_value(serde_json::json!({
            "id": "2",
            "name": "RouteOptimizer-1",
            "type": "routing",
            "status": "active",
            "successRate": 94,
            "learningProgress": 78
        }))
        .unwrap();
        assert_eq!(agent.kind, Some(AgentKind::Routing));
        assert!(agent.is_active());
        assert_eq!(agent.success_rate, 94);
        assert_eq!(agent.learning_progress, 78);
    }
}
