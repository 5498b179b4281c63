//! Free-text command interpretation.
//!
//! `interpret` maps one input line onto the command table and returns the
//! response text plus the side effect the host should perform. It touches no
//! UI or runtime state, so the same call serves the terminal, tests, and any
//! embedding host.

use serde::Serialize;
use tracing::debug;

use crate::model::ExternalContext;
use crate::registry::catalog::help_text;
use crate::registry::handlers::system;
use crate::registry::{CommandInput, CommandTable, SideEffect};

pub const HELP_COMMAND: &str = "help";
pub const STATUS_COMMAND: &str = "status";

/// Response for input that matches no command.
pub const FALLBACK_MESSAGE: &str =
    "Command not recognized. Type \"help\" to see available commands.";

/// Outcome of interpreting one line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[cfg_attr(feature = "ts-bindings", derive(ts_rs::TS))]
#[cfg_attr(feature = "ts-bindings", ts(export))]
#[serde(rename_all = "camelCase")]
pub struct Interpretation {
    pub response: String,
    pub effect: Option<SideEffect>,
    /// Name of the command that handled the input; `None` for the fallback.
    pub command: Option<&'static str>,
}

impl Interpretation {
    fn fallback() -> Self {
        Self {
            response: FALLBACK_MESSAGE.to_string(),
            effect: None,
            command: None,
        }
    }

    pub fn is_recognized(&self) -> bool {
        self.command.is_some()
    }
}

/// Lowercased, trimmed form used for matching.
pub fn normalize(raw: &str) -> String {
    raw.trim().to_lowercase()
}

/// Interpret `raw_input` against `table`.
///
/// `help` and `status` are answered before the table scan. Everything else
/// goes to the first command whose name equals the input or prefixes it
/// followed by a space. Never fails: unknown input yields the fallback.
pub fn interpret(table: &CommandTable, raw_input: &str, ctx: &ExternalContext) -> Interpretation {
    let raw = raw_input.trim();
    let normalized = normalize(raw);

    if normalized == HELP_COMMAND {
        return Interpretation {
            response: help_text(table),
            effect: None,
            command: Some(HELP_COMMAND),
        };
    }

    if normalized == STATUS_COMMAND {
        let out = system::status(&CommandInput::new(raw, STATUS_COMMAND), ctx);
        return Interpretation {
            response: out.message,
            effect: out.effect,
            command: Some(STATUS_COMMAND),
        };
    }

    let Some(descriptor) = table.find_match(&normalized) else {
        debug!(input = %raw, "no command matched");
        return Interpretation::fallback();
    };

    debug!(command = descriptor.name, input = %raw, "command matched");
    let out = descriptor.run(raw, ctx);
    Interpretation {
        response: out.message,
        effect: out.effect,
        command: Some(descriptor.name),
    }
}
