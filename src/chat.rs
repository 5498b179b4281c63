use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::interpreter::{interpret, Interpretation};
use crate::model::ExternalContext;
use crate::registry::{CommandTable, SideEffect};

// ── ConsoleHost trait ────────────────────────────────────────────

/// Performs the side effects the interpreter requests. The interpreter only
/// describes them, so a terminal, a browser bridge and tests can each decide
/// what "navigate" means.
pub trait ConsoleHost {
    fn navigate(&mut self, path: &str);
    fn open_deploy_modal(&mut self);
    fn configure_agent(&mut self, agent_id: &str);
    fn view_logs(&mut self, agent_id: &str);

    fn perform(&mut self, effect: &SideEffect) {
        match effect {
            SideEffect::Navigate(path) => self.navigate(path),
            SideEffect::OpenDeployModal => self.open_deploy_modal(),
            SideEffect::ConfigureAgent(id) => self.configure_agent(id),
            SideEffect::ViewLogs(id) => self.view_logs(id),
        }
    }
}

/// Host that ignores every request, for embedding and tests.
pub struct NoopHost;

impl ConsoleHost for NoopHost {
    fn navigate(&mut self, _path: &str) {}
    fn open_deploy_modal(&mut self) {}
    fn configure_agent(&mut self, _agent_id: &str) {}
    fn view_logs(&mut self, _agent_id: &str) {}
}

// ── Types ────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "ts-bindings", derive(ts_rs::TS))]
#[cfg_attr(feature = "ts-bindings", ts(export))]
#[serde(rename_all = "lowercase")]
pub enum Origin {
    User,
    System,
}

/// How a line reached the session. Voice transcriptions are submitted exactly
/// like typed text; the source is only logged.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputSource {
    Typed,
    Voice,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "ts-bindings", derive(ts_rs::TS))]
#[cfg_attr(feature = "ts-bindings", ts(export))]
#[serde(rename_all = "camelCase")]
pub struct ChatMessage {
    pub origin: Origin,
    pub text: String,
    pub created_at: DateTime<Utc>,
}

impl ChatMessage {
    fn new(origin: Origin, text: impl Into<String>) -> Self {
        Self {
            origin,
            text: text.into(),
            created_at: Utc::now(),
        }
    }
}

/// Ordered, append-only log of user/system messages for one session.
#[derive(Debug, Clone, Default, Serialize)]
pub struct Transcript {
    messages: Vec<ChatMessage>,
}

impl Transcript {
    pub fn messages(&self) -> &[ChatMessage] {
        &self.messages
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    /// The most recent user/system pair, if any.
    pub fn last_exchange(&self) -> Option<(&ChatMessage, &ChatMessage)> {
        match self.messages.as_slice() {
            [.., user, system] => Some((user, system)),
            _ => None,
        }
    }

    // Both halves go in together so the log never holds a dangling user line.
    fn push_exchange(&mut self, user: ChatMessage, system: ChatMessage) {
        self.messages.reserve(2);
        self.messages.push(user);
        self.messages.push(system);
    }
}

// ── Session ──────────────────────────────────────────────────────

/// One submitted line and what it produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Exchange {
    pub input: String,
    pub interpretation: Interpretation,
}

impl Exchange {
    pub fn response(&self) -> &str {
        &self.interpretation.response
    }

    pub fn effect(&self) -> Option<&SideEffect> {
        self.interpretation.effect.as_ref()
    }
}

/// A chat session: the fixed command table plus the transcript it grows.
/// Dropping the session is the only way to clear the transcript.
#[derive(Debug)]
pub struct Session {
    table: CommandTable,
    transcript: Transcript,
}

impl Session {
    pub fn new(table: CommandTable) -> Self {
        Self {
            table,
            transcript: Transcript::default(),
        }
    }

    pub fn table(&self) -> &CommandTable {
        &self.table
    }

    pub fn transcript(&self) -> &Transcript {
        &self.transcript
    }

    /// Submit one line. Blank input is a no-op and returns `None`; anything
    /// else appends one user and one system message.
    pub fn submit(
        &mut self,
        input: &str,
        source: InputSource,
        ctx: &ExternalContext,
    ) -> Option<Exchange> {
        let line = input.trim();
        if line.is_empty() {
            debug!(?source, "ignoring blank submission");
            return None;
        }

        let interpretation = interpret(&self.table, line, ctx);
        debug!(
            ?source,
            command = interpretation.command.unwrap_or("<none>"),
            "submission interpreted"
        );
        self.transcript.push_exchange(
            ChatMessage::new(Origin::User, line),
            ChatMessage::new(Origin::System, interpretation.response.clone()),
        );

        Some(Exchange {
            input: line.to_string(),
            interpretation,
        })
    }

    /// Hand the exchange's side effect, if any, to the host.
    pub fn dispatch(exchange: &Exchange, host: &mut dyn ConsoleHost) {
        if let Some(effect) = exchange.effect() {
            info!(%effect, "dispatching side effect");
            host.perform(effect);
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used, clippy::indexing_slicing)]
mod tests {
    use super::*;
    use crate::model::Agent;
    use crate::registry::catalog::default_table;

    #[derive(Default)]
    struct RecordingHost {
        calls: Vec<String>,
    }

    impl ConsoleHost for RecordingHost {
        fn navigate(&mut self, path: &str) {
            self.calls.push(format!("navigate {path}"));
        }
        fn open_deploy_modal(&mut self) {
            self.calls.push("deploy".into());
        }
        fn configure_agent(&mut self, agent_id: &str) {
            self.calls.push(format!("configure {agent_id}"));
        }
        fn view_logs(&mut self, agent_id: &str) {
            self.calls.push(format!("logs {agent_id}"));
        }
    }

    fn session() -> Session {
        Session::new(default_table().unwrap())
    }

    #[test]
    fn whitespace_submission_records_nothing() {
        let mut s = session();
        assert!(s.submit("   \t ", InputSource::Typed, &ExternalContext::default()).is_none());
        assert!(s.transcript().is_empty());
        assert!(s.transcript().last_exchange().is_none());
    }

    #[test]
    fn two_submissions_make_four_ordered_entries() {
        let mut s = session();
        let ctx = ExternalContext::default();
        s.submit("status", InputSource::Typed, &ctx).unwrap();
        s.submit("  xyzzy ", InputSource::Voice, &ctx).unwrap();

        let msgs = s.transcript().messages();
        assert_eq!(msgs.len(), 4);
        let origins: Vec<Origin> = msgs.iter().map(|m| m.origin).collect();
        assert_eq!(origins, vec![Origin::User, Origin::System, Origin::User, Origin::System]);
        assert_eq!(msgs[0].text, "status");
        assert!(msgs[1].text.starts_with("System Status:"));
        assert_eq!(msgs[2].text, "xyzzy");
        assert_eq!(msgs[3].text, crate::interpreter::FALLBACK_MESSAGE);
        assert!(msgs[0].created_at <= msgs[3].created_at);
    }

    #[test]
    fn dispatch_forwards_effect_to_host() {
        let mut s = session();
        let ctx = ExternalContext {
            agents: vec![Agent::new("1", "Alpha")],
            ..ExternalContext::default()
        };
        let mut host = RecordingHost::default();

        for line in ["deploy agent", "view logs alpha", "analytics", "alerts"] {
            let exchange = s.submit(line, InputSource::Typed, &ctx).unwrap();
            Session::dispatch(&exchange, &mut host);
        }
        assert_eq!(host.calls, vec!["deploy", "logs 1", "navigate /analytics"]);
    }

    #[test]
    fn last_exchange_is_latest_pair() {
        let mut s = session();
        s.submit("alerts", InputSource::Typed, &ExternalContext::default()).unwrap();
        let (user, system) = s.transcript().last_exchange().unwrap();
        assert_eq!(user.text, "alerts");
        assert_eq!(system.text, "No active alerts.");
    }

    #[test]
    fn message_wire_shape() {
        let msg = ChatMessage::new(Origin::User, "help");
        let json = serde_json::to_value(&msg).unwrap();
        assert_eq!(json["origin"], "user");
        assert_eq!(json["text"], "help");
        assert!(json.get("createdAt").is_some());
    }
}
