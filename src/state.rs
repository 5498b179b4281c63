use std::path::PathBuf;

use parking_lot::Mutex;

use crate::chat::{Exchange, InputSource, Session};
use crate::model::ExternalContext;
use crate::registry::CommandTable;
use crate::settings::ConsoleSettings;

// ── Console State ───────────────────────────────────────────────────

/// State shared by the REPL, the voice listener and one-shot commands.
pub struct ConsoleState {
    pub session: Mutex<Session>,
    /// Read-only dashboard snapshot the commands resolve against.
    pub context: ExternalContext,
    pub app_config_dir: PathBuf,
    pub settings: ConsoleSettings,
}

impl ConsoleState {
    pub fn new(
        table: CommandTable,
        context: ExternalContext,
        app_config_dir: PathBuf,
        settings: ConsoleSettings,
    ) -> Self {
        Self {
            session: Mutex::new(Session::new(table)),
            context,
            app_config_dir,
            settings,
        }
    }

    /// Read-only access to the session. Locks the mutex for the duration of `f`.
    pub fn with_session<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&Session) -> R,
    {
        let guard = self.session.lock();
        f(&guard)
    }

    /// Submit one line against the shared snapshot. The lock is held only
    /// for the submission; callers dispatch the effect afterwards with
    /// [`Session::dispatch`].
    pub fn submit(&self, input: &str, source: InputSource) -> Option<Exchange> {
        self.session.lock().submit(input, source, &self.context)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;
    use crate::chat::NoopHost;
    use crate::registry::catalog::default_table;
    use crate::sample::sample_context;

    fn state() -> ConsoleState {
        ConsoleState::new(
            default_table().unwrap(),
            sample_context(),
            PathBuf::from("/tmp/console"),
            ConsoleSettings::default(),
        )
    }

    #[test]
    fn typed_and_voice_share_one_transcript() {
        let state = state();
        state.submit("status", InputSource::Typed).unwrap();
        state.submit("track order ORD-2024-001", InputSource::Voice).unwrap();
        assert!(state.submit("  ", InputSource::Voice).is_none());

        assert_eq!(state.with_session(|s| s.transcript().len()), 4);
    }

    #[test]
    fn sample_agent_configures_by_id() {
        let state = state();
        let exchange = state
            .submit("configure agent routeoptimizer-1", InputSource::Typed)
            .unwrap();
        Session::dispatch(&exchange, &mut NoopHost);
        assert_eq!(
            exchange.effect(),
            Some(&crate::registry::SideEffect::ConfigureAgent("2".into()))
        );
    }
}
