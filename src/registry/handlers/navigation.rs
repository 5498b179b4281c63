use crate::describe::Panel;
use crate::model::ExternalContext;
use crate::registry::{CommandInput, CommandOutput, SideEffect};

fn open(panel: Panel) -> CommandOutput {
    CommandOutput::with_effect(
        format!("Opening {}...", panel.label()),
        SideEffect::Navigate(panel.path().to_string()),
    )
}

pub fn overview(_input: &CommandInput<'_>, _ctx: &ExternalContext) -> CommandOutput {
    open(Panel::Overview)
}

pub fn inventory(_input: &CommandInput<'_>, _ctx: &ExternalContext) -> CommandOutput {
    open(Panel::Inventory)
}

pub fn orders(_input: &CommandInput<'_>, _ctx: &ExternalContext) -> CommandOutput {
    open(Panel::Orders)
}

pub fn warehouses(_input: &CommandInput<'_>, _ctx: &ExternalContext) -> CommandOutput {
    open(Panel::Warehouses)
}

pub fn fleet(_input: &CommandInput<'_>, _ctx: &ExternalContext) -> CommandOutput {
    open(Panel::Fleet)
}

pub fn agents(_input: &CommandInput<'_>, _ctx: &ExternalContext) -> CommandOutput {
    open(Panel::Agents)
}

pub fn analytics(_input: &CommandInput<'_>, _ctx: &ExternalContext) -> CommandOutput {
    open(Panel::Analytics)
}
