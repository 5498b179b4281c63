pub mod agent;
pub mod context;
pub mod fleet;
pub mod inventory;
pub mod metrics;

// Re-export commonly used types at the model level.
pub use agent::{Agent, AgentKind, AgentStatus};
pub use context::ExternalContext;
pub use fleet::{Vehicle, VehicleKind, VehicleStatus, Warehouse, Zone, ZoneKind};
pub use inventory::{InventoryItem, Order, OrderLine, OrderStatus, Priority, StockStatus};
pub use metrics::{
    Alert, AlertLevel, AnalyticCategory, AnalyticMetric, Metric, PerformanceTarget, Trend,
};
