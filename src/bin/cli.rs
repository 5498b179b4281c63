use std::borrow::Cow;
use std::path::{Path, PathBuf};
use std::process;
use std::sync::Arc;

use clap::{Parser, Subcommand};
use rustyline::completion::Completer;
use rustyline::config::Config;
use rustyline::error::ReadlineError;
use rustyline::highlight::Highlighter;
use rustyline::hint::Hinter;
use rustyline::history::DefaultHistory;
use rustyline::validate::Validator;
use rustyline::{CompletionType, Editor, ExternalPrinter, Helper};
use tokio::sync::oneshot;
use tracing::{error, info, warn};
use tracing_subscriber::EnvFilter;

use logistics_console::capability::{spawn_file_recognizer, Layout, Viewport, VoiceInput};
use logistics_console::chat::{ConsoleHost, Exchange, InputSource, Session};
use logistics_console::describe::render_route;
use logistics_console::error::ConsoleError;
use logistics_console::model::ExternalContext;
use logistics_console::registry::catalog::{self, default_table};
use logistics_console::settings::{self, ConsoleSettings};
use logistics_console::state::ConsoleState;
use logistics_console::{paths, persist, sample};

// ── CLI argument parsing ─────────────────────────────────────────

#[derive(Parser)]
#[command(name = "logistics-cli", about = "Logistics dashboard command console", version)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Config directory override
    #[arg(long, global = true)]
    config_dir: Option<PathBuf>,

    /// Dashboard snapshot (JSON) to use instead of the configured one
    #[arg(long, global = true)]
    snapshot: Option<PathBuf>,

    /// Output raw JSON instead of formatted text
    #[arg(long, global = true)]
    json: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive console (default)
    Repl {
        /// Write the session transcript as JSON on exit
        #[arg(long)]
        transcript_out: Option<PathBuf>,
        /// Replay voice transcriptions from this file alongside typed input
        #[arg(long)]
        voice_file: Option<PathBuf>,
    },
    /// Interpret each argument as one submitted line
    Run {
        #[arg(required = true)]
        inputs: Vec<String>,
    },
    /// List available commands grouped by category
    Commands,
    /// Render a dashboard panel, e.g. `/fleet`
    View { path: String },
    /// Print the JSON Schema of snapshot files
    Schema,
    /// Submit voice transcriptions replayed from a file
    Listen {
        #[arg(long)]
        voice_file: PathBuf,
    },
    /// Settings management
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[derive(Subcommand)]
enum ConfigAction {
    /// Print the effective settings
    Show,
    /// Write default settings
    Init {
        /// Overwrite an existing settings file
        #[arg(long)]
        force: bool,
    },
}

// ── Terminal host ────────────────────────────────────────────────

/// Performs side effects in the terminal: navigation renders the panel,
/// the other requests are acknowledged and logged.
struct TerminalHost<'a> {
    context: &'a ExternalContext,
    layout: Layout,
    json: bool,
    lines: Vec<String>,
}

impl ConsoleHost for TerminalHost<'_> {
    fn navigate(&mut self, path: &str) {
        info!(path, "navigate");
        if self.json {
            return;
        }
        match render_route(path, self.context, self.layout) {
            Some(text) => self.lines.push(text),
            None => warn!(path, "no panel for route"),
        }
    }

    fn open_deploy_modal(&mut self) {
        info!("deploy agent dialog requested");
        if !self.json {
            self.lines.push("[agent deployment dialog opened]".into());
        }
    }

    fn configure_agent(&mut self, agent_id: &str) {
        info!(agent_id, "agent configuration requested");
        if !self.json {
            self.lines.push(format!("[configuring agent {agent_id}]"));
        }
    }

    fn view_logs(&mut self, agent_id: &str) {
        info!(agent_id, "agent logs requested");
        if !self.json {
            self.lines.push(format!("[showing activity logs for agent {agent_id}]"));
        }
    }
}

fn format_exchange(exchange: &Exchange, raw_json: bool) -> String {
    if raw_json {
        let i = &exchange.interpretation;
        let json = serde_json::json!({
            "input": exchange.input,
            "response": i.response,
            "effect": i.effect,
            "command": i.command,
        });
        return serde_json::to_string_pretty(&json).unwrap_or_default();
    }
    exchange.response().to_string()
}

/// Submit one line and collect what the terminal shows for it: the
/// response, then whatever the host produced for the effect.
fn submit_line(
    state: &ConsoleState,
    line: &str,
    source: InputSource,
    layout: Layout,
    json: bool,
) -> Vec<String> {
    let Some(exchange) = state.submit(line, source) else {
        return Vec::new();
    };
    let mut host = TerminalHost {
        context: &state.context,
        layout,
        json,
        lines: vec![format_exchange(&exchange, json)],
    };
    Session::dispatch(&exchange, &mut host);
    host.lines
}

/// Where submitted lines are shown. While the line editor owns the
/// terminal, voice output goes through its printer so the prompt and the
/// half-typed line are redrawn below it.
enum Output {
    Stdout,
    Editor(Box<dyn ExternalPrinter + Send>),
}

impl Output {
    fn emit(&mut self, lines: Vec<String>) {
        if lines.is_empty() {
            return;
        }
        match self {
            Self::Stdout => {
                for line in &lines {
                    println!("{line}");
                }
            }
            Self::Editor(printer) => {
                if let Err(e) = printer.print(lines.join("\n")) {
                    warn!(error = %e, "line editor rejected output");
                }
            }
        }
    }
}

// ── Line editor ──────────────────────────────────────────────────

/// Completes and hints command names.
struct ConsoleHelper {
    names: Vec<&'static str>,
}

impl Completer for ConsoleHelper {
    type Candidate = String;

    fn complete(
        &self,
        line: &str,
        pos: usize,
        _ctx: &rustyline::Context<'_>,
    ) -> rustyline::Result<(usize, Vec<String>)> {
        let prefix = line.get(..pos).unwrap_or(line).to_lowercase();
        let matches = self
            .names
            .iter()
            .filter(|name| name.starts_with(prefix.as_str()))
            .map(|name| (*name).to_string())
            .collect();
        Ok((0, matches))
    }
}

impl Hinter for ConsoleHelper {
    type Hint = String;

    fn hint(&self, line: &str, pos: usize, _ctx: &rustyline::Context<'_>) -> Option<String> {
        if line.is_empty() || pos < line.len() {
            return None;
        }
        let typed = line.to_lowercase();
        self.names
            .iter()
            .find(|name| name.starts_with(typed.as_str()) && **name != typed)
            .and_then(|name| name.get(typed.len()..))
            .map(str::to_string)
    }
}

impl Highlighter for ConsoleHelper {
    fn highlight_hint<'h>(&self, hint: &'h str) -> Cow<'h, str> {
        Cow::Owned(format!("\x1b[90m{hint}\x1b[0m"))
    }
}

impl Validator for ConsoleHelper {}
impl Helper for ConsoleHelper {}

/// Runs the line editor until quit. When `voice_output` is given, the
/// editor's printer is sent through it once the editor exists.
fn run_repl(
    state: &ConsoleState,
    voice_output: Option<oneshot::Sender<Output>>,
    layout: Layout,
    json: bool,
) -> Result<(), ConsoleError> {
    let config = Config::builder()
        .history_ignore_dups(true)?
        .max_history_size(state.settings.history_limit)?
        .auto_add_history(true)
        .completion_type(CompletionType::List)
        .build();
    let mut rl: Editor<ConsoleHelper, DefaultHistory> = Editor::with_config(config)?;
    rl.set_helper(Some(ConsoleHelper {
        names: state.with_session(|s| s.table().names().collect()),
    }));

    let hist_path = paths::history_path(&state.app_config_dir);
    if let Some(parent) = hist_path.parent() {
        let _ = std::fs::create_dir_all(parent);
    }
    let _ = rl.load_history(&hist_path);

    if let Some(tx) = voice_output {
        let output = match rl.create_external_printer() {
            Ok(printer) => Output::Editor(Box::new(printer)),
            Err(e) => {
                warn!(error = %e, "voice output falls back to plain stdout");
                Output::Stdout
            }
        };
        let _ = tx.send(output);
    }

    println!("Logistics console. Type \"help\" for commands, \"quit\" to exit.");

    loop {
        match rl.readline(&state.settings.prompt) {
            Ok(line) => {
                if matches!(line.trim().to_lowercase().as_str(), "quit" | "exit") {
                    break;
                }
                Output::Stdout.emit(submit_line(state, &line, InputSource::Typed, layout, json));
            }
            // Ctrl+C drops the current line.
            Err(ReadlineError::Interrupted) => {}
            Err(ReadlineError::Eof) => break,
            Err(e) => return Err(e.into()),
        }
    }

    if let Err(e) = rl.save_history(&hist_path) {
        warn!(error = %e, "could not save history");
    }
    Ok(())
}

async fn run_voice(
    state: Arc<ConsoleState>,
    mut voice: VoiceInput,
    mut output: Output,
    layout: Layout,
    json: bool,
) {
    while let Some(text) = voice.next().await {
        let mut lines = submit_line(&state, &text, InputSource::Voice, layout, json);
        if !json && !lines.is_empty() {
            lines.insert(0, format!("(voice) {text}"));
        }
        output.emit(lines);
    }
    if let VoiceInput::Unavailable { reason } = &voice {
        info!(reason = reason.as_str(), "voice input ended");
    }
}

// ── State initialization ─────────────────────────────────────────

fn init_tracing(settings_filter: Option<&str>) {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(settings_filter.unwrap_or("warn")))
        .unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

/// An explicit `--snapshot` must load; a configured one falls back to the
/// built-in sample.
fn load_context(
    flag: Option<&Path>,
    settings: &ConsoleSettings,
) -> Result<ExternalContext, ConsoleError> {
    if let Some(path) = flag {
        return persist::load_snapshot(path);
    }
    let Some(path) = settings.snapshot.as_deref() else {
        return Ok(sample::sample_context());
    };
    Ok(persist::load_snapshot(path).unwrap_or_else(|e| {
        warn!(error = %e, "falling back to the sample snapshot");
        sample::sample_context()
    }))
}

fn initialize_state(
    app_config_dir: PathBuf,
    snapshot: Option<&Path>,
    settings: ConsoleSettings,
) -> Result<Arc<ConsoleState>, ConsoleError> {
    let context = load_context(snapshot, &settings)?;
    let table = default_table()?;
    Ok(Arc::new(ConsoleState::new(table, context, app_config_dir, settings)))
}

// ── Main ─────────────────────────────────────────────────────────

#[tokio::main]
async fn main() {
    let cli = Cli::parse();
    let app_config_dir = cli.config_dir.clone().unwrap_or_else(paths::default_config_dir);
    let loaded = settings::load_settings(&app_config_dir);
    init_tracing(loaded.as_ref().and_then(|s| s.log_filter.as_deref()));

    if let Err(e) = run(cli, app_config_dir, loaded).await {
        error!("{e}");
        process::exit(1);
    }
}

async fn run(
    cli: Cli,
    app_config_dir: PathBuf,
    loaded: Option<ConsoleSettings>,
) -> Result<(), ConsoleError> {
    let json = cli.json;
    let layout = Viewport::from_env().layout();
    let command = cli.command.unwrap_or(Commands::Repl {
        transcript_out: None,
        voice_file: None,
    });

    match command {
        Commands::Config { action } => run_config(&app_config_dir, loaded, action),
        Commands::Schema => {
            let schema = schemars::schema_for!(ExternalContext);
            println!("{}", serde_json::to_string_pretty(&schema)?);
            Ok(())
        }
        Commands::Commands => {
            let table = default_table()?;
            if json {
                println!("{}", serde_json::to_string_pretty(&catalog::to_json(&table))?);
            } else {
                println!("{}", catalog::help_text(&table));
            }
            Ok(())
        }
        Commands::View { path } => {
            let context = load_context(cli.snapshot.as_deref(), &loaded.unwrap_or_default())?;
            let text = render_route(&path, &context, layout)
                .ok_or(ConsoleError::UnknownRoute(path))?;
            println!("{text}");
            Ok(())
        }
        Commands::Run { inputs } => {
            let state = initialize_state(app_config_dir, cli.snapshot.as_deref(), loaded.unwrap_or_default())?;
            for input in &inputs {
                Output::Stdout.emit(submit_line(&state, input, InputSource::Typed, layout, json));
            }
            Ok(())
        }
        Commands::Listen { voice_file } => {
            let state = initialize_state(app_config_dir, cli.snapshot.as_deref(), loaded.unwrap_or_default())?;
            run_voice(state, spawn_file_recognizer(voice_file), Output::Stdout, layout, json).await;
            Ok(())
        }
        Commands::Repl {
            transcript_out,
            voice_file,
        } => {
            let state = initialize_state(app_config_dir, cli.snapshot.as_deref(), loaded.unwrap_or_default())?;
            let (printer_tx, printer_rx) = oneshot::channel();
            let voice_task = voice_file.map(|path| {
                let state = Arc::clone(&state);
                tokio::spawn(async move {
                    // Voice lines wait for the editor so they never race the first prompt.
                    let output = printer_rx.await.unwrap_or(Output::Stdout);
                    run_voice(state, spawn_file_recognizer(path), output, layout, json).await;
                })
            });

            let voice_output = voice_task.is_some().then_some(printer_tx);
            let repl_state = Arc::clone(&state);
            tokio::task::spawn_blocking(move || run_repl(&repl_state, voice_output, layout, json))
                .await
                .map_err(|e| ConsoleError::Io(std::io::Error::other(e)))??;

            if let Some(task) = voice_task {
                task.abort();
            }
            if let Some(path) = transcript_out {
                state.with_session(|s| persist::export_transcript(&path, s.transcript()))?;
                info!(path = %path.display(), "transcript written");
            }
            Ok(())
        }
    }
}

fn run_config(
    app_config_dir: &Path,
    loaded: Option<ConsoleSettings>,
    action: ConfigAction,
) -> Result<(), ConsoleError> {
    let path = paths::settings_path(app_config_dir);
    match action {
        ConfigAction::Show => {
            let current = loaded.unwrap_or_default();
            println!("# {}", path.display());
            println!("{}", serde_json::to_string_pretty(&current)?);
        }
        ConfigAction::Init { force } => {
            if path.exists() && !force {
                println!("Settings already exist at {} (use --force to overwrite)", path.display());
                return Ok(());
            }
            settings::save_settings(app_config_dir, &ConsoleSettings::default())?;
            println!("Wrote default settings to {}", path.display());
        }
    }
    Ok(())
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used, clippy::indexing_slicing)]
mod tests {
    use logistics_console::capability::VoiceStream;
    use parking_lot::Mutex;

    use super::*;

    /// Stands in for the editor's printer and records every message.
    struct Capture(Arc<Mutex<Vec<String>>>);

    impl ExternalPrinter for Capture {
        fn print(&mut self, msg: String) -> rustyline::Result<()> {
            self.0.lock().push(msg);
            Ok(())
        }
    }

    fn state() -> Arc<ConsoleState> {
        Arc::new(ConsoleState::new(
            default_table().unwrap(),
            sample::sample_context(),
            PathBuf::from("/tmp/console"),
            ConsoleSettings::default(),
        ))
    }

    #[test]
    fn response_comes_before_the_rendered_panel() {
        let lines = submit_line(&state(), "fleet", InputSource::Typed, Layout::Wide, false);
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[0], "Opening Fleet...");
        assert!(lines[1].starts_with("== Fleet =="));
    }

    #[test]
    fn blank_line_shows_nothing() {
        assert!(submit_line(&state(), "   ", InputSource::Typed, Layout::Wide, false).is_empty());
    }

    #[tokio::test]
    async fn voice_output_goes_through_the_editor_printer() {
        let printed = Arc::new(Mutex::new(Vec::new()));
        let (tx, stream) = VoiceStream::channel(4);
        tx.send(Ok("status".into())).await.unwrap();
        tx.send(Ok("deploy agent".into())).await.unwrap();
        drop(tx);

        let state = state();
        run_voice(
            Arc::clone(&state),
            VoiceInput::Available(stream),
            Output::Editor(Box::new(Capture(Arc::clone(&printed)))),
            Layout::Wide,
            false,
        )
        .await;

        let printed = printed.lock();
        assert_eq!(printed.len(), 2, "one message per utterance");
        assert!(printed[0].starts_with("(voice) status\nSystem Status:"));
        assert_eq!(
            printed[1],
            "(voice) deploy agent\nOpening agent deployment...\n[agent deployment dialog opened]"
        );
        assert_eq!(state.with_session(|s| s.transcript().len()), 4);
    }
}
