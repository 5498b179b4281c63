use crate::model::{Agent, ExternalContext};
use crate::registry::{CommandInput, CommandOutput, SideEffect};

use super::common;

const AGENT_HINT: &str = "Type \"list agents\" to see available agents.";

pub fn deploy_agent(_input: &CommandInput<'_>, _ctx: &ExternalContext) -> CommandOutput {
    CommandOutput::with_effect("Opening agent deployment...", SideEffect::OpenDeployModal)
}

pub fn configure_agent(input: &CommandInput<'_>, ctx: &ExternalContext) -> CommandOutput {
    with_agent(input, ctx, |agent| {
        CommandOutput::with_effect(
            format!("Configuring agent {}...", agent.name),
            SideEffect::ConfigureAgent(agent.id.clone()),
        )
    })
}

pub fn view_logs(input: &CommandInput<'_>, ctx: &ExternalContext) -> CommandOutput {
    with_agent(input, ctx, |agent| {
        CommandOutput::with_effect(
            format!("Opening activity logs for {}...", agent.name),
            SideEffect::ViewLogs(agent.id.clone()),
        )
    })
}

/// One `- name (type, status, n% performance)` line per agent, no heading.
pub fn list_agents(_input: &CommandInput<'_>, ctx: &ExternalContext) -> CommandOutput {
    if ctx.agents.is_empty() {
        return CommandOutput::text("No agents deployed.");
    }
    let lines: Vec<String> = ctx
        .agents
        .iter()
        .map(|agent| format!("- {}", describe_agent(agent)))
        .collect();
    CommandOutput::text(lines.join("\n"))
}

/// Resolve the argument to an agent by name, or explain why it could not be.
fn with_agent<F>(input: &CommandInput<'_>, ctx: &ExternalContext, f: F) -> CommandOutput
where
    F: FnOnce(&Agent) -> CommandOutput,
{
    let name = input.args();
    if name.is_empty() {
        return common::usage(input.name, "name");
    }
    match ctx.find_agent(name) {
        Some(agent) => f(agent),
        None => common::not_found("Agent", name, Some(AGENT_HINT)),
    }
}

fn describe_agent(agent: &Agent) -> String {
    let mut traits = Vec::with_capacity(3);
    if let Some(kind) = agent.kind {
        traits.push(kind.label().to_string());
    }
    traits.push(agent.status.label().to_string());
    traits.push(format!("{}% performance", agent.performance));
    format!("{} ({})", agent.name, traits.join(", "))
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;
    use crate::model::{AgentKind, AgentStatus};

    fn ctx() -> ExternalContext {
        let mut bot = Agent::new("7", "InventoryBot-Alpha");
        bot.kind = Some(AgentKind::Inventory);
        bot.status = AgentStatus::Active;
        bot.performance = 95;
        ExternalContext {
            agents: vec![bot, Agent::new("8", "Scout")],
            ..ExternalContext::default()
        }
    }

    #[test]
    fn configure_resolves_by_name_ignoring_case() {
        let out = configure_agent(&CommandInput::new("configure agent inventorybot-alpha", "configure agent"), &ctx());
        assert_eq!(out.message, "Configuring agent InventoryBot-Alpha...");
        assert_eq!(out.effect, Some(SideEffect::ConfigureAgent("7".into())));
    }

    #[test]
    fn view_logs_unknown_agent() {
        let out = view_logs(&CommandInput::new("view logs Ghost", "view logs"), &ctx());
        assert_eq!(
            out.message,
            "Agent \"Ghost\" not found. Type \"list agents\" to see available agents."
        );
        assert!(out.effect.is_none());
    }

    #[test]
    fn missing_name_prints_usage() {
        let out = configure_agent(&CommandInput::new("configure agent", "configure agent"), &ctx());
        assert_eq!(out.message, "Usage: configure agent <name>");
        assert!(out.effect.is_none());
    }

    #[test]
    fn list_agents_formats_each_agent() {
        let out = list_agents(&CommandInput::new("list agents", "list agents"), &ctx());
        assert_eq!(
            out.message,
            "- InventoryBot-Alpha (inventory, active, 95% performance)\n- Scout (idle, 0% performance)"
        );
        let empty = list_agents(&CommandInput::new("list agents", "list agents"), &ExternalContext::default());
        assert_eq!(empty.message, "No agents deployed.");
    }
}
