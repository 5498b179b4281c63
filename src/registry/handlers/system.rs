use crate::model::ExternalContext;
use crate::registry::{CommandInput, CommandOutput};

use super::common;

pub fn status(_input: &CommandInput<'_>, ctx: &ExternalContext) -> CommandOutput {
    let mut lines = vec![
        "System Status:".to_string(),
        format!("- Active Agents: {}", ctx.active_agent_count()),
    ];
    lines.extend(
        ctx.metrics
            .iter()
            .map(|m| format!("- {}: {}", m.title, m.value)),
    );
    CommandOutput::text(lines.join("\n"))
}

pub fn alerts(_input: &CommandInput<'_>, ctx: &ExternalContext) -> CommandOutput {
    let lines = ctx
        .alerts
        .iter()
        .map(|a| format!("[{}] {}", a.level.label(), a.message))
        .collect();
    common::bullet_list("Active Alerts:", lines, "No active alerts.")
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;
    use crate::model::{Agent, AgentStatus, Alert, AlertLevel, Metric};

    #[test]
    fn status_counts_active_agents_and_lists_metrics() {
        let mut active = Agent::new("1", "A");
        active.status = AgentStatus::Active;
        let ctx = ExternalContext {
            agents: vec![active, Agent::new("2", "B")],
            metrics: vec![Metric {
                title: "Fleet Utilization".into(),
                value: "85%".into(),
                change: 3.2,
                timeframe: "vs last week".into(),
            }],
            ..ExternalContext::default()
        };
        let out = status(&CommandInput::new("status", "status"), &ctx);
        assert_eq!(
            out.message,
            "System Status:\n- Active Agents: 1\n- Fleet Utilization: 85%"
        );
        assert!(out.effect.is_none());
    }

    #[test]
    fn alerts_listing_and_empty() {
        let ctx = ExternalContext {
            alerts: vec![Alert {
                id: "2".into(),
                level: AlertLevel::Error,
                message: "Vehicle maintenance required".into(),
                timestamp: None,
            }],
            ..ExternalContext::default()
        };
        let input = CommandInput::new("alerts", "alerts");
        assert_eq!(
            alerts(&input, &ctx).message,
            "Active Alerts:\n- [error] Vehicle maintenance required"
        );
        assert_eq!(
            alerts(&input, &ExternalContext::default()).message,
            "No active alerts."
        );
    }
}
