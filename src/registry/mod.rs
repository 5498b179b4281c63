pub mod catalog;
pub mod handlers;
pub mod validation;

use std::fmt;

use indexmap::IndexMap;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::error::TableError;
use crate::model::ExternalContext;

// ── Command metadata ────────────────────────────────────────────

/// Grouping used by the `help` listing. Declaration order is display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[cfg_attr(feature = "ts-bindings", derive(ts_rs::TS))]
#[cfg_attr(feature = "ts-bindings", ts(export))]
pub enum CommandCategory {
    Agents,
    Orders,
    Inventory,
    Fleet,
    Navigation,
    System,
}

impl CommandCategory {
    pub fn slug(&self) -> &'static str {
        match self {
            Self::Agents => "agents",
            Self::Orders => "orders",
            Self::Inventory => "inventory",
            Self::Fleet => "fleet",
            Self::Navigation => "navigation",
            Self::System => "system",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Agents => "Agents",
            Self::Orders => "Orders",
            Self::Inventory => "Inventory",
            Self::Fleet => "Fleet",
            Self::Navigation => "Navigation",
            Self::System => "System",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            Self::Agents => "Deploy, configure and inspect AI agents",
            Self::Orders => "Create and track logistics orders",
            Self::Inventory => "Stock levels and restocking",
            Self::Fleet => "Vehicles, assignments and routes",
            Self::Navigation => "Open dashboard pages",
            Self::System => "System status and alerts",
        }
    }

    pub fn all() -> &'static [CommandCategory] {
        &[
            Self::Agents,
            Self::Orders,
            Self::Inventory,
            Self::Fleet,
            Self::Navigation,
            Self::System,
        ]
    }
}

// ── Side effects ────────────────────────────────────────────────

/// A host action requested by a command. The interpreter never performs
/// these itself; the host decides what navigation or a modal means.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[cfg_attr(feature = "ts-bindings", derive(ts_rs::TS))]
#[cfg_attr(feature = "ts-bindings", ts(export))]
#[serde(tag = "kind", content = "target", rename_all = "camelCase")]
pub enum SideEffect {
    Navigate(String),
    OpenDeployModal,
    ConfigureAgent(String),
    ViewLogs(String),
}

impl fmt::Display for SideEffect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SideEffect::Navigate(path) => write!(f, "navigate({path})"),
            SideEffect::OpenDeployModal => write!(f, "openDeployModal()"),
            SideEffect::ConfigureAgent(id) => write!(f, "configureAgent({id})"),
            SideEffect::ViewLogs(id) => write!(f, "viewLogs({id})"),
        }
    }
}

// ── Command input / output ──────────────────────────────────────

/// What a command action sees: the trimmed input line in its original case
/// and the name of the command that matched it.
#[derive(Debug, Clone, Copy)]
pub struct CommandInput<'a> {
    pub raw: &'a str,
    pub name: &'static str,
}

impl<'a> CommandInput<'a> {
    pub fn new(raw: &'a str, name: &'static str) -> Self {
        Self { raw, name }
    }

    /// The input with the command name stripped, original case preserved.
    /// Empty when the command was given no argument.
    pub fn args(&self) -> &'a str {
        let rest = match self.raw.get(..self.name.len()) {
            Some(head) if head.eq_ignore_ascii_case(self.name) => self.raw.get(self.name.len()..),
            // Lowercasing changed byte lengths ahead of the argument; fall back to chars.
            _ => {
                let skip = self.name.chars().count();
                match self.raw.char_indices().nth(skip) {
                    Some((idx, _)) => self.raw.get(idx..),
                    None => None,
                }
            }
        };
        rest.unwrap_or_default().trim()
    }
}

/// Result of running a command action: text for the transcript plus the
/// side effect the host should perform, if any.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CommandOutput {
    pub message: String,
    pub effect: Option<SideEffect>,
}

impl CommandOutput {
    pub fn text(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            effect: None,
        }
    }

    pub fn with_effect(message: impl Into<String>, effect: SideEffect) -> Self {
        Self {
            message: message.into(),
            effect: Some(effect),
        }
    }
}

/// A command action. Pure over its inputs; side effects are only requested
/// through the returned [`CommandOutput`].
pub type CommandAction = fn(&CommandInput<'_>, &ExternalContext) -> CommandOutput;

// ── Descriptors and table ───────────────────────────────────────

#[derive(Clone, Copy)]
pub struct CommandDescriptor {
    pub name: &'static str,
    pub description: &'static str,
    pub category: CommandCategory,
    pub action: CommandAction,
}

impl fmt::Debug for CommandDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CommandDescriptor")
            .field("name", &self.name)
            .field("description", &self.description)
            .field("category", &self.category)
            .finish_non_exhaustive()
    }
}

impl CommandDescriptor {
    /// True when `normalized` is exactly this command's name, or the name
    /// followed by a space and arguments. Descriptions never take part.
    pub fn matches(&self, normalized: &str) -> bool {
        match normalized.strip_prefix(self.name) {
            Some(rest) => rest.is_empty() || rest.starts_with(' '),
            None => false,
        }
    }

    pub fn run(&self, raw: &str, ctx: &ExternalContext) -> CommandOutput {
        (self.action)(&CommandInput::new(raw, self.name), ctx)
    }
}

/// The fixed, ordered set of recognized commands. Built once and never
/// mutated; names are unique and stored lowercase.
#[derive(Debug, Clone)]
pub struct CommandTable {
    commands: IndexMap<&'static str, CommandDescriptor>,
}

impl CommandTable {
    pub fn new(descriptors: Vec<CommandDescriptor>) -> Result<Self, TableError> {
        validation::validate_descriptors(&descriptors)?;
        let commands = descriptors.into_iter().map(|d| (d.name, d)).collect();
        Ok(Self { commands })
    }

    /// Exact lookup by name, ignoring case.
    pub fn get(&self, name: &str) -> Option<&CommandDescriptor> {
        self.commands.get(name.trim().to_lowercase().as_str())
    }

    /// First command, in table order, that matches the normalized input.
    pub fn find_match(&self, normalized: &str) -> Option<&CommandDescriptor> {
        self.commands.values().find(|d| d.matches(normalized))
    }

    pub fn iter(&self) -> impl Iterator<Item = &CommandDescriptor> {
        self.commands.values()
    }

    pub fn in_category(&self, category: CommandCategory) -> impl Iterator<Item = &CommandDescriptor> {
        self.commands.values().filter(move |d| d.category == category)
    }

    pub fn names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.commands.keys().copied()
    }

    pub fn len(&self) -> usize {
        self.commands.len()
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }
}
