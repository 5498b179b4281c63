use crate::model::{ExternalContext, InventoryItem};
use crate::registry::{CommandInput, CommandOutput};

use super::common;

/// `stock check <sku>` for one item, bare `stock check` for all of them.
pub fn stock_check(input: &CommandInput<'_>, ctx: &ExternalContext) -> CommandOutput {
    let key = input.args();
    if key.is_empty() {
        let lines = ctx.inventory.iter().map(summary_line).collect();
        return common::bullet_list("Stock levels:", lines, "No inventory items tracked.");
    }
    match ctx.find_item(key) {
        Some(item) => CommandOutput::text(format!(
            "{} {}\n- Quantity: {}\n- Location: {}\n- Status: {}",
            item.sku,
            item.name,
            item.quantity,
            item.location,
            item.status.label()
        )),
        None => common::not_found("Item", key, None),
    }
}

pub fn restock(_input: &CommandInput<'_>, _ctx: &ExternalContext) -> CommandOutput {
    common::coming_soon("Restocking")
}

fn summary_line(item: &InventoryItem) -> String {
    format!(
        "{} {}: {} ({})",
        item.sku,
        item.name,
        item.quantity,
        item.status.label()
    )
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;
    use crate::model::StockStatus;

    fn ctx() -> ExternalContext {
        ExternalContext {
            inventory: vec![
                InventoryItem {
                    id: "1".into(),
                    sku: "SKU-123".into(),
                    name: "Widget A".into(),
                    quantity: 150,
                    location: "Warehouse A - Zone 1".into(),
                    status: StockStatus::InStock,
                    last_updated: None,
                },
                InventoryItem {
                    id: "2".into(),
                    sku: "SKU-456".into(),
                    name: "Widget B".into(),
                    quantity: 25,
                    location: "Warehouse B - Zone 3".into(),
                    status: StockStatus::LowStock,
                    last_updated: None,
                },
            ],
            ..ExternalContext::default()
        }
    }

    #[test]
    fn single_item_by_sku() {
        let out = stock_check(&CommandInput::new("stock check sku-456", "stock check"), &ctx());
        assert_eq!(
            out.message,
            "SKU-456 Widget B\n- Quantity: 25\n- Location: Warehouse B - Zone 3\n- Status: low-stock"
        );
    }

    #[test]
    fn single_item_by_row_id() {
        let by_id = stock_check(&CommandInput::new("stock check 2", "stock check"), &ctx());
        let by_sku = stock_check(&CommandInput::new("stock check SKU-456", "stock check"), &ctx());
        assert_eq!(by_id.message, by_sku.message);
    }

    #[test]
    fn bare_check_lists_everything() {
        let out = stock_check(&CommandInput::new("stock check", "stock check"), &ctx());
        assert_eq!(
            out.message,
            "Stock levels:\n- SKU-123 Widget A: 150 (in-stock)\n- SKU-456 Widget B: 25 (low-stock)"
        );
    }

    #[test]
    fn unknown_sku() {
        let out = stock_check(&CommandInput::new("stock check SKU-999", "stock check"), &ctx());
        assert_eq!(out.message, "Item \"SKU-999\" not found.");
    }
}
