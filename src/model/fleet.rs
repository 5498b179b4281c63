use chrono::NaiveDate;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[cfg_attr(feature = "ts-bindings", derive(ts_rs::TS))]
#[cfg_attr(feature = "ts-bindings", ts(export))]
#[serde(rename_all = "lowercase")]
pub enum VehicleKind {
    Truck,
    Van,
    Forklift,
    Drone,
    Robot,
}

impl VehicleKind {
    pub fn label(self) -> &'static str {
        match self {
            Self::Truck => "truck",
            Self::Van => "van",
            Self::Forklift => "forklift",
            Self::Drone => "drone",
            Self::Robot => "robot",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[cfg_attr(feature = "ts-bindings", derive(ts_rs::TS))]
#[cfg_attr(feature = "ts-bindings", ts(export))]
#[serde(rename_all = "lowercase")]
pub enum VehicleStatus {
    Active,
    Maintenance,
    Charging,
    Idle,
}

impl VehicleStatus {
    pub fn label(self) -> &'static str {
        match self {
            Self::Active => "active",
            Self::Maintenance => "maintenance",
            Self::Charging => "charging",
            Self::Idle => "idle",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[cfg_attr(feature = "ts-bindings", derive(ts_rs::TS))]
#[cfg_attr(feature = "ts-bindings", ts(export))]
#[serde(rename_all = "camelCase")]
pub struct Vehicle {
    pub id: String,
    #[serde(rename = "type")]
    pub kind: VehicleKind,
    pub status: VehicleStatus,
    /// Percent, 0-100.
    pub battery: u8,
    #[serde(default)]
    pub location: String,
    #[serde(default)]
    pub current_task: Option<String>,
    #[serde(default)]
    pub last_maintenance: Option<NaiveDate>,
    #[serde(default)]
    pub efficiency: u8,
    #[serde(default)]
    pub mileage: u32,
    #[serde(default)]
    pub assigned_warehouse: String,
}

impl Vehicle {
    /// Battery band used for the progress colour: `ok` above 60%, `low`
    /// above 30%, `critical` otherwise.
    pub fn battery_band(&self) -> &'static str {
        match self.battery {
            61.. => "ok",
            31..=60 => "low",
            _ => "critical",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[cfg_attr(feature = "ts-bindings", derive(ts_rs::TS))]
#[cfg_attr(feature = "ts-bindings", ts(export))]
#[serde(rename_all = "lowercase")]
pub enum ZoneKind {
    Storage,
    Picking,
    Packing,
    Shipping,
}

impl ZoneKind {
    pub fn label(self) -> &'static str {
        match self {
            Self::Storage => "storage",
            Self::Picking => "picking",
            Self::Packing => "packing",
            Self::Shipping => "shipping",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[cfg_attr(feature = "ts-bindings", derive(ts_rs::TS))]
#[cfg_attr(feature = "ts-bindings", ts(export))]
pub struct Zone {
    pub id: String,
    pub name: String,
    #[serde(rename = "type")]
    pub kind: ZoneKind,
    pub utilization: u8,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[cfg_attr(feature = "ts-bindings", derive(ts_rs::TS))]
#[cfg_attr(feature = "ts-bindings", ts(export))]
#[serde(rename_all = "camelCase")]
pub struct Warehouse {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub location: String,
    pub capacity: u32,
    pub utilized: u32,
    #[serde(default)]
    pub temperature: f64,
    #[serde(default)]
    pub humidity: u8,
    #[serde(default)]
    pub active_robots: u32,
    #[serde(default)]
    pub pending_tasks: u32,
    #[serde(default)]
    pub zones: Vec<Zone>,
}

impl Warehouse {
    /// Utilized share of capacity, rounded to a whole percent. Zero capacity
    /// reports 0.
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn utilization_percent(&self) -> u32 {
        if self.capacity == 0 {
            return 0;
        }
        (f64::from(self.utilized) / f64::from(self.capacity) * 100.0).round() as u32
    }
}
