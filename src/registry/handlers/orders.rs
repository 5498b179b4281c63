use crate::model::ExternalContext;
use crate::registry::{CommandInput, CommandOutput};

use super::common;

pub fn create_order(_input: &CommandInput<'_>, _ctx: &ExternalContext) -> CommandOutput {
    common::coming_soon("Order creation")
}

pub fn track_order(input: &CommandInput<'_>, ctx: &ExternalContext) -> CommandOutput {
    let key = input.args();
    if key.is_empty() {
        return common::usage(input.name, "order");
    }
    let Some(order) = ctx.find_order(key) else {
        return common::not_found("Order", key, None);
    };

    let mut lines = vec![
        format!("Order {} ({})", order.order_number, order.customer),
        format!("- Status: {}", order.status.label()),
        format!("- Priority: {}", order.priority.label()),
        format!(
            "- Items: {} line(s), {} unit(s)",
            order.items.len(),
            order.unit_count()
        ),
    ];
    if let Some(eta) = order.estimated_delivery {
        lines.push(format!("- Estimated delivery: {}", eta.format("%Y-%m-%d")));
    }
    CommandOutput::text(lines.join("\n"))
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use chrono::{TimeZone, Utc};

    use super::*;
    use crate::model::{Order, OrderLine, OrderStatus, Priority};

    fn ctx() -> ExternalContext {
        ExternalContext {
            orders: vec![Order {
                id: "1".into(),
                order_number: "ORD-2024-001".into(),
                customer: "Acme Corp".into(),
                items: vec![OrderLine {
                    sku: "SKU-123".into(),
                    quantity: 5,
                }],
                status: OrderStatus::Processing,
                priority: Priority::High,
                created_at: None,
                estimated_delivery: Some(Utc.with_ymd_and_hms(2024, 3, 2, 12, 0, 0).unwrap()),
            }],
            ..ExternalContext::default()
        }
    }

    #[test]
    fn tracks_by_order_number_any_case() {
        let out = track_order(&CommandInput::new("track order ord-2024-001", "track order"), &ctx());
        assert_eq!(
            out.message,
            "Order ORD-2024-001 (Acme Corp)\n- Status: processing\n- Priority: high\n- Items: 1 line(s), 5 unit(s)\n- Estimated delivery: 2024-03-02"
        );
        assert!(out.effect.is_none());
    }

    #[test]
    fn tracks_by_row_id() {
        let out = track_order(&CommandInput::new("track order 1", "track order"), &ctx());
        assert!(out.message.starts_with("Order ORD-2024-001 (Acme Corp)\n"));
        // An id that belongs to no row is still a miss.
        let miss = track_order(&CommandInput::new("track order 2", "track order"), &ctx());
        assert_eq!(miss.message, "Order \"2\" not found.");
    }

    #[test]
    fn unknown_order() {
        let out = track_order(&CommandInput::new("track order ORD-9", "track order"), &ctx());
        assert_eq!(out.message, "Order \"ORD-9\" not found.");
    }

    #[test]
    fn create_order_is_placeholder() {
        let out = create_order(&CommandInput::new("create order", "create order"), &ctx());
        assert_eq!(out.message, "Order creation is coming soon.");
        assert!(out.effect.is_none());
    }
}
