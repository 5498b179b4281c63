use chrono::{Duration, NaiveDate, Utc};

use crate::model::{
    Agent, AgentKind, AgentStatus, Alert, AlertLevel, AnalyticCategory, AnalyticMetric,
    ExternalContext, InventoryItem, Metric, Order, OrderLine, OrderStatus, PerformanceTarget,
    Priority, StockStatus, Trend, Vehicle, VehicleKind, VehicleStatus, Warehouse, Zone, ZoneKind,
};

/// Built-in dashboard snapshot used when no snapshot file is configured.
/// Timestamps are relative to the call time.
pub fn sample_context() -> ExternalContext {
    ExternalContext {
        metrics: sample_metrics(),
        agents: sample_agents(),
        alerts: sample_alerts(),
        inventory: sample_inventory(),
        orders: sample_orders(),
        vehicles: sample_vehicles(),
        warehouses: sample_warehouses(),
        analytics: sample_analytics(),
        performance: sample_performance(),
    }
}

fn metric(title: &str, value: &str, change: f64, timeframe: &str) -> Metric {
    Metric {
        title: title.into(),
        value: value.into(),
        change,
        timeframe: timeframe.into(),
    }
}

fn sample_metrics() -> Vec<Metric> {
    vec![
        metric("Total Orders", "1,234", 12.5, "vs last month"),
        metric("Fleet Utilization", "85%", 3.2, "vs last week"),
        metric("Warehouse Capacity", "72%", -5.1, "vs last month"),
        metric("On-Time Delivery", "94.2%", 1.5, "vs last week"),
    ]
}

#[allow(clippy::too_many_arguments)]
fn agent(
    id: &str,
    name: &str,
    kind: AgentKind,
    status: AgentStatus,
    performance: u8,
    actions: (&str, &str),
    assigned_area: &str,
    stats: (u32, u8, u8),
) -> Agent {
    let (decisions, success_rate, learning_progress) = stats;
    Agent {
        kind: Some(kind),
        status,
        performance,
        last_action: actions.0.into(),
        next_action: actions.1.into(),
        assigned_area: assigned_area.into(),
        decisions,
        success_rate,
        learning_progress,
        ..Agent::new(id, name)
    }
}

fn sample_agents() -> Vec<Agent> {
    vec![
        agent(
            "1",
            "InventoryBot-Alpha",
            AgentKind::Inventory,
            AgentStatus::Active,
            95,
            (
                "Optimized stock levels for high-demand items",
                "Analyzing seasonal demand patterns",
            ),
            "Warehouse A",
            (1234, 98, 85),
        ),
        agent(
            "2",
            "RouteOptimizer-1",
            AgentKind::Routing,
            AgentStatus::Active,
            92,
            (
                "Recalculated delivery routes for efficiency",
                "Adjusting for weather conditions",
            ),
            "Fleet Management",
            (567, 94, 78),
        ),
        agent(
            "3",
            "MaintenanceAI",
            AgentKind::Maintenance,
            AgentStatus::Learning,
            88,
            (
                "Scheduled preventive maintenance for Truck-7",
                "Learning from maintenance history",
            ),
            "Vehicle Fleet",
            (345, 91, 65),
        ),
    ]
}

fn sample_alerts() -> Vec<Alert> {
    let now = Utc::now();
    vec![
        Alert {
            id: "1".into(),
            level: AlertLevel::Warning,
            message: "Low inventory alert for SKU-123".into(),
            timestamp: Some(now),
        },
        Alert {
            id: "2".into(),
            level: AlertLevel::Error,
            message: "Vehicle maintenance required".into(),
            timestamp: Some(now),
        },
    ]
}

fn sample_inventory() -> Vec<InventoryItem> {
    let now = Utc::now();
    vec![
        InventoryItem {
            id: "1".into(),
            sku: "SKU-123".into(),
            name: "Widget A".into(),
            quantity: 150,
            location: "Warehouse A - Zone 1".into(),
            status: StockStatus::InStock,
            last_updated: Some(now),
        },
        InventoryItem {
            id: "2".into(),
            sku: "SKU-456".into(),
            name: "Widget B".into(),
            quantity: 25,
            location: "Warehouse B - Zone 3".into(),
            status: StockStatus::LowStock,
            last_updated: Some(now),
        },
    ]
}

fn sample_orders() -> Vec<Order> {
    let now = Utc::now();
    vec![
        Order {
            id: "1".into(),
            order_number: "ORD-2024-001".into(),
            customer: "Acme Corp".into(),
            items: vec![OrderLine {
                sku: "SKU-123".into(),
                quantity: 5,
            }],
            status: OrderStatus::Processing,
            priority: Priority::High,
            created_at: Some(now),
            estimated_delivery: Some(now + Duration::days(2)),
        },
        Order {
            id: "2".into(),
            order_number: "ORD-2024-002".into(),
            customer: "TechStart Inc".into(),
            items: vec![OrderLine {
                sku: "SKU-456".into(),
                quantity: 2,
            }],
            status: OrderStatus::Pending,
            priority: Priority::Urgent,
            created_at: Some(now),
            estimated_delivery: Some(now + Duration::days(1)),
        },
    ]
}

fn sample_vehicles() -> Vec<Vehicle> {
    vec![
        Vehicle {
            id: "1".into(),
            kind: VehicleKind::Truck,
            status: VehicleStatus::Active,
            battery: 85,
            location: "Route 27 - Delivery".into(),
            current_task: Some("Delivering to Customer XYZ".into()),
            last_maintenance: NaiveDate::from_ymd_opt(2024, 1, 15),
            efficiency: 92,
            mileage: 15000,
            assigned_warehouse: "Warehouse A".into(),
        },
        Vehicle {
            id: "2".into(),
            kind: VehicleKind::Drone,
            status: VehicleStatus::Charging,
            battery: 30,
            location: "Charging Station 3".into(),
            current_task: None,
            last_maintenance: NaiveDate::from_ymd_opt(2024, 2, 1),
            efficiency: 95,
            mileage: 500,
            assigned_warehouse: "Warehouse B".into(),
        },
        Vehicle {
            id: "3".into(),
            kind: VehicleKind::Robot,
            status: VehicleStatus::Active,
            battery: 75,
            location: "Zone A1 - Picking".into(),
            current_task: Some("Order Picking #1234".into()),
            last_maintenance: NaiveDate::from_ymd_opt(2024, 1, 28),
            efficiency: 88,
            mileage: 300,
            assigned_warehouse: "Warehouse A".into(),
        },
    ]
}

fn zone(id: &str, name: &str, kind: ZoneKind, utilization: u8) -> Zone {
    Zone {
        id: id.into(),
        name: name.into(),
        kind,
        utilization,
    }
}

fn sample_warehouses() -> Vec<Warehouse> {
    vec![
        Warehouse {
            id: "1".into(),
            name: "Warehouse A".into(),
            location: "123 Logistics Way".into(),
            capacity: 10000,
            utilized: 7800,
            temperature: 22.0,
            humidity: 45,
            active_robots: 12,
            pending_tasks: 34,
            zones: vec![
                zone("1", "Zone A1", ZoneKind::Storage, 85),
                zone("2", "Zone A2", ZoneKind::Picking, 65),
            ],
        },
        Warehouse {
            id: "2".into(),
            name: "Warehouse B".into(),
            location: "456 Supply Chain Rd".into(),
            capacity: 15000,
            utilized: 9000,
            temperature: 21.0,
            humidity: 42,
            active_robots: 15,
            pending_tasks: 27,
            zones: vec![
                zone("3", "Zone B1", ZoneKind::Storage, 75),
                zone("4", "Zone B2", ZoneKind::Shipping, 45),
            ],
        },
    ]
}

fn analytic(
    id: &str,
    name: &str,
    value: f64,
    change: f64,
    trend: Trend,
    category: AnalyticCategory,
) -> AnalyticMetric {
    AnalyticMetric {
        id: id.into(),
        name: name.into(),
        value,
        change,
        trend,
        timeframe: "vs last month".into(),
        category,
    }
}

fn sample_analytics() -> Vec<AnalyticMetric> {
    vec![
        analytic("1", "Order Fulfillment Rate", 96.5, 2.3, Trend::Up, AnalyticCategory::Operations),
        analytic("2", "Fleet Utilization", 88.2, -1.5, Trend::Down, AnalyticCategory::Efficiency),
        analytic("3", "Operating Costs", 15234.0, -5.2, Trend::Down, AnalyticCategory::Financial),
    ]
}

fn sample_performance() -> Vec<PerformanceTarget> {
    [
        ("Warehouse Efficiency", 92.0, 95.0),
        ("Order Accuracy", 99.2, 99.0),
        ("On-Time Delivery", 94.5, 96.0),
        ("Fleet Uptime", 97.8, 98.0),
    ]
    .into_iter()
    .map(|(label, value, target)| PerformanceTarget {
        label: label.into(),
        value,
        target,
    })
    .collect()
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used, clippy::indexing_slicing)]
mod tests {
    use super::*;
    use crate::describe::agent_stats;

    #[test]
    fn sample_matches_dashboard_counts() {
        let ctx = sample_context();
        assert_eq!(ctx.metrics.len(), 4);
        assert_eq!(ctx.agents.len(), 3);
        assert_eq!(ctx.alerts.len(), 2);
        assert_eq!(ctx.inventory.len(), 2);
        assert_eq!(ctx.orders.len(), 2);
        assert_eq!(ctx.vehicles.len(), 3);
        assert_eq!(ctx.warehouses.len(), 2);
        assert_eq!(ctx.analytics.len(), 3);
        assert_eq!(ctx.performance.len(), 4);
    }

    #[test]
    fn sample_agent_stats() {
        // 1234 + 567 + 345 decisions; (98 + 94 + 91) / 3 = 94.33
        assert_eq!(agent_stats(&sample_context()), (2, 2146, 94));
    }

    #[test]
    fn sample_lookups_resolve() {
        let ctx = sample_context();
        assert_eq!(ctx.find_agent("inventorybot-alpha").unwrap().id, "1");
        assert!(ctx.find_order("ord-2024-002").is_some());
        assert!(ctx.find_item("sku-456").is_some());
        assert_eq!(ctx.warehouses[0].utilization_percent(), 78);
    }
}
