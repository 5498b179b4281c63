use crate::capability::Layout;
use crate::model::metrics::change_marker;
use crate::model::{AnalyticCategory, ExternalContext};

/// Dashboard pages a `Navigate` side effect can point at.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Panel {
    Overview,
    Inventory,
    Orders,
    Warehouses,
    Fleet,
    Agents,
    Analytics,
}

impl Panel {
    pub fn path(self) -> &'static str {
        match self {
            Self::Overview => "/",
            Self::Inventory => "/inventory",
            Self::Orders => "/orders",
            Self::Warehouses => "/warehouses",
            Self::Fleet => "/fleet",
            Self::Agents => "/agents",
            Self::Analytics => "/analytics",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Overview => "Overview",
            Self::Inventory => "Inventory",
            Self::Orders => "Orders",
            Self::Warehouses => "Warehouses",
            Self::Fleet => "Fleet",
            Self::Agents => "AI Agents",
            Self::Analytics => "Analytics",
        }
    }

    pub fn all() -> &'static [Panel] {
        &[
            Self::Overview,
            Self::Inventory,
            Self::Orders,
            Self::Warehouses,
            Self::Fleet,
            Self::Agents,
            Self::Analytics,
        ]
    }

    pub fn from_path(path: &str) -> Option<Self> {
        Self::all().iter().copied().find(|p| p.path() == path)
    }
}

/// Text render of the page at `path`, or `None` for unknown routes.
pub fn render_route(path: &str, ctx: &ExternalContext, layout: Layout) -> Option<String> {
    let panel = Panel::from_path(path)?;
    let body = match panel {
        Panel::Overview => describe_overview(ctx, layout),
        Panel::Inventory => describe_inventory(ctx, layout),
        Panel::Orders => describe_orders(ctx, layout),
        Panel::Warehouses => describe_warehouses(ctx, layout),
        Panel::Fleet => describe_fleet(ctx, layout),
        Panel::Agents => describe_agents(ctx, layout),
        Panel::Analytics => describe_analytics(ctx, layout),
    };
    Some(format!("== {} ==\n{body}", panel.label()))
}

// ── Records ──────────────────────────────────────────────────────

/// One row of a panel: a title plus labelled fields.
struct Record {
    title: String,
    fields: Vec<(&'static str, String)>,
}

impl Record {
    fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            fields: Vec::new(),
        }
    }

    fn field(mut self, label: &'static str, value: impl Into<String>) -> Self {
        self.fields.push((label, value.into()));
        self
    }

    fn render(&self, layout: Layout) -> String {
        match layout {
            Layout::Wide => {
                let mut cols = vec![self.title.clone()];
                cols.extend(self.fields.iter().map(|(_, v)| v.clone()));
                format!("  {}", cols.join(" | "))
            }
            Layout::Compact => {
                let mut lines = vec![format!("  {}", self.title)];
                lines.extend(self.fields.iter().map(|(l, v)| format!("    {l}: {v}")));
                lines.join("\n")
            }
        }
    }
}

fn section(heading: &str, records: &[Record], empty: &str, layout: Layout) -> String {
    let mut lines = vec![format!("\n{heading} ({})", records.len())];
    if records.is_empty() {
        lines.push(format!("  {empty}"));
    }
    lines.extend(records.iter().map(|r| r.render(layout)));
    lines.join("\n")
}

fn percent(value: impl std::fmt::Display) -> String {
    format!("{value}%")
}

// ── Panels ───────────────────────────────────────────────────────

/// Metric cards, alerts, warehouse utilization and fleet status.
pub fn describe_overview(ctx: &ExternalContext, layout: Layout) -> String {
    let metrics: Vec<Record> = ctx
        .metrics
        .iter()
        .map(|m| {
            Record::new(&m.title)
                .field("value", &m.value)
                .field("change", format!("{} {}", change_marker(m.change), m.timeframe).trim_end())
        })
        .collect();

    let alerts: Vec<Record> = ctx
        .alerts
        .iter()
        .map(|a| Record::new(format!("[{}] {}", a.level.label(), a.message)))
        .collect();

    let warehouses: Vec<Record> = ctx
        .warehouses
        .iter()
        .map(|w| {
            Record::new(&w.name)
                .field("utilization", percent(w.utilization_percent()))
                .field("robots", w.active_robots.to_string())
        })
        .collect();

    let fleet: Vec<Record> = ctx
        .vehicles
        .iter()
        .map(|v| {
            Record::new(&v.id)
                .field("status", v.status.label())
                .field("battery", percent(v.battery))
        })
        .collect();

    [
        section("Metrics", &metrics, "No metrics.", layout),
        section("Alerts", &alerts, "No active alerts.", layout),
        section("Warehouse utilization", &warehouses, "No warehouses.", layout),
        section("Fleet status", &fleet, "No vehicles.", layout),
    ]
    .join("\n")
}

pub fn describe_inventory(ctx: &ExternalContext, layout: Layout) -> String {
    let items: Vec<Record> = ctx
        .inventory
        .iter()
        .map(|i| {
            Record::new(format!("{} {}", i.sku, i.name))
                .field("quantity", i.quantity.to_string())
                .field("location", &i.location)
                .field("status", i.status.label())
        })
        .collect();
    section("Items", &items, "No inventory items.", layout)
}

pub fn describe_orders(ctx: &ExternalContext, layout: Layout) -> String {
    let orders: Vec<Record> = ctx
        .orders
        .iter()
        .map(|o| {
            let eta = o
                .estimated_delivery
                .map_or_else(|| "unknown".to_string(), |d| d.format("%Y-%m-%d").to_string());
            Record::new(&o.order_number)
                .field("customer", &o.customer)
                .field("status", o.status.label())
                .field("priority", o.priority.label())
                .field("units", o.unit_count().to_string())
                .field("eta", eta)
        })
        .collect();
    section("Orders", &orders, "No orders.", layout)
}

pub fn describe_warehouses(ctx: &ExternalContext, layout: Layout) -> String {
    let warehouses: Vec<Record> = ctx
        .warehouses
        .iter()
        .map(|w| {
            let zones = w
                .zones
                .iter()
                .map(|z| format!("{} ({}, {}%)", z.name, z.kind.label(), z.utilization))
                .collect::<Vec<_>>()
                .join(", ");
            Record::new(&w.name)
                .field("location", &w.location)
                .field(
                    "utilization",
                    format!("{}% ({}/{})", w.utilization_percent(), w.utilized, w.capacity),
                )
                .field("climate", format!("{:.1}°C, {}% humidity", w.temperature, w.humidity))
                .field("robots", w.active_robots.to_string())
                .field("pending tasks", w.pending_tasks.to_string())
                .field("zones", if zones.is_empty() { "none".to_string() } else { zones })
        })
        .collect();
    section("Warehouses", &warehouses, "No warehouses.", layout)
}

pub fn describe_fleet(ctx: &ExternalContext, layout: Layout) -> String {
    let vehicles: Vec<Record> = ctx
        .vehicles
        .iter()
        .map(|v| {
            Record::new(&v.id)
                .field("type", v.kind.label())
                .field("status", v.status.label())
                .field("battery", format!("{}% ({})", v.battery, v.battery_band()))
                .field("location", &v.location)
                .field("task", v.current_task.as_deref().unwrap_or("none"))
                .field("efficiency", percent(v.efficiency))
                .field("mileage", v.mileage.to_string())
        })
        .collect();
    section("Vehicles", &vehicles, "No vehicles.", layout)
}

/// Aggregate agent stats: active count, total decisions and mean success
/// rate rounded to a whole percent.
pub fn agent_stats(ctx: &ExternalContext) -> (usize, u64, u32) {
    let total: u64 = ctx.agents.iter().map(|a| u64::from(a.decisions)).sum();
    let rate_sum: u32 = ctx.agents.iter().map(|a| u32::from(a.success_rate)).sum();
    let average = match u32::try_from(ctx.agents.len()) {
        Ok(n) if n > 0 => (rate_sum + n / 2) / n,
        _ => 0,
    };
    (ctx.active_agent_count(), total, average)
}

pub fn describe_agents(ctx: &ExternalContext, layout: Layout) -> String {
    let (active, decisions, success) = agent_stats(ctx);
    let header = format!(
        "Active agents: {active}\nTotal decisions: {decisions}\nAverage success rate: {success}%"
    );
    let agents: Vec<Record> = ctx
        .agents
        .iter()
        .map(|a| {
            Record::new(&a.name)
                .field("type", a.kind.map_or("unassigned", |k| k.label()))
                .field("status", a.status.label())
                .field("performance", percent(a.performance))
                .field("area", &a.assigned_area)
                .field("last action", &a.last_action)
                .field("next action", &a.next_action)
        })
        .collect();
    format!("{header}\n{}", section("Agents", &agents, "No agents deployed.", layout))
}

fn category_label(category: AnalyticCategory) -> &'static str {
    match category {
        AnalyticCategory::Operations => "operations",
        AnalyticCategory::Efficiency => "efficiency",
        AnalyticCategory::Financial => "financial",
        AnalyticCategory::Sustainability => "sustainability",
    }
}

pub fn describe_analytics(ctx: &ExternalContext, layout: Layout) -> String {
    let metrics: Vec<Record> = ctx
        .analytics
        .iter()
        .map(|m| {
            Record::new(&m.name)
                .field("value", m.display_value())
                .field("change", format!("{} {}", change_marker(m.change), m.timeframe).trim_end())
                .field("category", category_label(m.category))
        })
        .collect();

    let targets: Vec<Record> = ctx
        .performance
        .iter()
        .map(|t| {
            let verdict = if t.on_target() { "on target" } else { "below target" };
            Record::new(&t.label)
                .field("value", percent(t.value))
                .field("target", percent(t.target))
                .field("verdict", verdict)
        })
        .collect();

    [
        section("Key metrics", &metrics, "No analytics.", layout),
        section("Performance targets", &targets, "No targets.", layout),
    ]
    .join("\n")
}
