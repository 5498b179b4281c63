use chrono::{DateTime, Utc};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Headline metric card on the overview page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[cfg_attr(feature = "ts-bindings", derive(ts_rs::TS))]
#[cfg_attr(feature = "ts-bindings", ts(export))]
#[serde(rename_all = "camelCase")]
pub struct Metric {
    pub title: String,
    /// Preformatted display value, e.g. `"85%"` or `"1,234"`.
    pub value: String,
    /// Percent change over `timeframe`.
    #[serde(default)]
    pub change: f64,
    #[serde(default)]
    pub timeframe: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[cfg_attr(feature = "ts-bindings", derive(ts_rs::TS))]
#[cfg_attr(feature = "ts-bindings", ts(export))]
#[serde(rename_all = "lowercase")]
pub enum AlertLevel {
    Warning,
    Error,
    Success,
}

impl AlertLevel {
    pub fn label(self) -> &'static str {
        match self {
            Self::Warning => "warning",
            Self::Error => "error",
            Self::Success => "success",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[cfg_attr(feature = "ts-bindings", derive(ts_rs::TS))]
#[cfg_attr(feature = "ts-bindings", ts(export))]
#[serde(rename_all = "camelCase")]
pub struct Alert {
    pub id: String,
    #[serde(rename = "type")]
    pub level: AlertLevel,
    pub message: String,
    #[serde(default)]
    pub timestamp: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[cfg_attr(feature = "ts-bindings", derive(ts_rs::TS))]
#[cfg_attr(feature = "ts-bindings", ts(export))]
#[serde(rename_all = "lowercase")]
pub enum Trend {
    Up,
    Down,
    Stable,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[cfg_attr(feature = "ts-bindings", derive(ts_rs::TS))]
#[cfg_attr(feature = "ts-bindings", ts(export))]
#[serde(rename_all = "lowercase")]
pub enum AnalyticCategory {
    Operations,
    Efficiency,
    Financial,
    Sustainability,
}

/// Metric tile on the analytics page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[cfg_attr(feature = "ts-bindings", derive(ts_rs::TS))]
#[cfg_attr(feature = "ts-bindings", ts(export))]
#[serde(rename_all = "camelCase")]
pub struct AnalyticMetric {
    pub id: String,
    pub name: String,
    pub value: f64,
    #[serde(default)]
    pub change: f64,
    pub trend: Trend,
    #[serde(default)]
    pub timeframe: String,
    pub category: AnalyticCategory,
}

impl AnalyticMetric {
    /// Display value: one decimal for fractional values, `$` suffix for
    /// financial metrics and `%` otherwise.
    pub fn display_value(&self) -> String {
        let unit = if self.category == AnalyticCategory::Financial {
            "$"
        } else {
            "%"
        };
        if self.value.fract() == 0.0 {
            format!("{:.0}{unit}", self.value)
        } else {
            format!("{:.1}{unit}", self.value)
        }
    }
}

/// Actual-versus-target bar on the analytics page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[cfg_attr(feature = "ts-bindings", derive(ts_rs::TS))]
#[cfg_attr(feature = "ts-bindings", ts(export))]
#[serde(rename_all = "camelCase")]
pub struct PerformanceTarget {
    pub label: String,
    pub value: f64,
    pub target: f64,
}

impl PerformanceTarget {
    pub fn on_target(&self) -> bool {
        self.value >= self.target
    }
}

/// `↗ 12.5%` / `↘ 5.1%` change marker used by metric cards.
pub fn change_marker(change: f64) -> String {
    let arrow = if change > 0.0 { '↗' } else { '↘' };
    format!("{arrow} {}%", change.abs())
}
