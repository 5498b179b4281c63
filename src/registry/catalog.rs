use schemars::JsonSchema;
use serde::Serialize;
use serde_json::Value;

use crate::error::TableError;

use super::handlers::{agents, fleet, inventory, navigation, orders, system};
use super::{CommandCategory, CommandDescriptor, CommandTable};

// ── builtin_commands! macro ─────────────────────────────────────

/// Declares the command list in table order. Each entry reads
/// `[Category] "name": "description" => handler;`.
macro_rules! builtin_commands {
    ( $( [$cat:ident] $name:literal : $desc:literal => $handler:path ; )* ) => {
        vec![
            $( CommandDescriptor {
                name: $name,
                description: $desc,
                category: CommandCategory::$cat,
                action: $handler,
            }, )*
        ]
    };
}

/// The complete command list, in match order.
pub fn builtin_commands() -> Vec<CommandDescriptor> {
    builtin_commands! {
        // ── Agents (4) ──────────────────────────────────────────
        [Agents] "deploy agent": "Deploy a new AI agent" => agents::deploy_agent;
        [Agents] "configure agent": "Configure an existing agent by name" => agents::configure_agent;
        [Agents] "view logs": "View an agent's activity logs by name" => agents::view_logs;
        [Agents] "list agents": "Show all agents" => agents::list_agents;
        // ── Orders (2) ──────────────────────────────────────────
        [Orders] "create order": "Create new logistics order" => orders::create_order;
        [Orders] "track order": "Track order status by order number" => orders::track_order;
        // ── Inventory (2) ───────────────────────────────────────
        [Inventory] "stock check": "Check stock levels, optionally for one SKU" => inventory::stock_check;
        [Inventory] "restock": "Request inventory restock" => inventory::restock;
        // ── Fleet (3) ───────────────────────────────────────────
        [Fleet] "assign vehicle": "Assign vehicle to delivery" => fleet::assign_vehicle;
        [Fleet] "vehicle status": "Check vehicle status by id" => fleet::vehicle_status;
        [Fleet] "optimize routes": "Optimize delivery routes" => fleet::optimize_routes;
        // ── Navigation (7) ──────────────────────────────────────
        [Navigation] "overview": "Open the overview dashboard" => navigation::overview;
        [Navigation] "inventory": "Check inventory status and manage stock levels" => navigation::inventory;
        [Navigation] "orders": "Open order management" => navigation::orders;
        [Navigation] "warehouses": "Access warehouse information and controls" => navigation::warehouses;
        [Navigation] "fleet": "Monitor and manage fleet vehicles" => navigation::fleet;
        [Navigation] "agents": "Open AI agent management" => navigation::agents;
        [Navigation] "analytics": "View system analytics and insights" => navigation::analytics;
        // ── System (2) ──────────────────────────────────────────
        [System] "status": "Get current system status" => system::status;
        [System] "alerts": "Show current system alerts" => system::alerts;
    }
}

/// The validated builtin table.
pub fn default_table() -> Result<CommandTable, TableError> {
    CommandTable::new(builtin_commands())
}

/// Grouped `help` listing: one block per category in [`CommandCategory::all`]
/// order, each line `  <name> - <description>`, blocks separated by a blank
/// line. Empty categories are skipped.
pub fn help_text(table: &CommandTable) -> String {
    let mut blocks = vec!["Available commands:".to_string()];
    for category in CommandCategory::all() {
        let lines: Vec<String> = table
            .in_category(*category)
            .map(|d| format!("  {} - {}", d.name, d.description))
            .collect();
        if lines.is_empty() {
            continue;
        }
        blocks.push(format!("{}:\n{}", category.label(), lines.join("\n")));
    }
    blocks.join("\n\n")
}

/// Serializable view of one table entry, for `commands --json` and browser hosts.
#[derive(Debug, Clone, Serialize, JsonSchema)]
pub struct CatalogEntry {
    pub name: &'static str,
    pub description: &'static str,
    pub category: CommandCategory,
}

pub fn catalog_entries(table: &CommandTable) -> Vec<CatalogEntry> {
    table
        .iter()
        .map(|d| CatalogEntry {
            name: d.name,
            description: d.description,
            category: d.category,
        })
        .collect()
}

/// Catalog grouped by category slug, preserving table order within groups.
pub fn to_json(table: &CommandTable) -> Value {
    let groups: serde_json::Map<String, Value> = CommandCategory::all()
        .iter()
        .map(|category| {
            let entries: Vec<Value> = table
                .in_category(*category)
                .map(|d| serde_json::json!({ "name": d.name, "description": d.description }))
                .collect();
            (category.slug().to_string(), Value::Array(entries))
        })
        .collect();
    Value::Object(groups)
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used, clippy::indexing_slicing)]
mod tests {
    use super::*;

    #[test]
    fn builtin_table_is_valid() {
        let table = default_table().unwrap();
        assert_eq!(table.len(), builtin_commands().len());
    }

    #[test]
    fn help_lists_every_command_once_under_its_category() {
        let table = default_table().unwrap();
        let help = help_text(&table);

        for d in table.iter() {
            let line = format!("  {} - {}", d.name, d.description);
            let count = help.lines().filter(|l| *l == line).count();
            assert_eq!(count, 1, "expected exactly one help line for {}", d.name);

            // The nearest heading above the line is the command's category.
            let heading = help
                .lines()
                .take_while(|l| *l != line)
                .filter(|l| l.ends_with(':') && !l.starts_with(' '))
                .last()
                .unwrap();
            assert_eq!(heading, format!("{}:", d.category.label()));
        }
    }

    #[test]
    fn help_blocks_follow_category_order() {
        let help = help_text(&default_table().unwrap());
        let headings: Vec<&str> = help
            .split("\n\n")
            .skip(1)
            .map(|block| block.lines().next().unwrap())
            .collect();
        assert_eq!(
            headings,
            vec!["Agents:", "Orders:", "Inventory:", "Fleet:", "Navigation:", "System:"]
        );
    }

    #[test]
    fn json_groups_by_slug() {
        let json = to_json(&default_table().unwrap());
        assert_eq!(json["system"][0]["name"], "status");
        assert_eq!(json["agents"].as_array().unwrap().len(), 4);
    }
}
