//! textcmd entrypoint: run an edit script against a fresh buffer.
use anyhow::{Context, Result};
use clap::Parser;
use core_actions::ScriptRunner;
use core_config::{Config, load_from};
use core_state::{EditorState, History};
use core_text::Buffer;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::sync::Once;
use tracing::{error, info};
use tracing_appender::non_blocking::WorkerGuard;

/// Script run when no path is given.
const DEMO_SCRIPT: &str = r#"# Insert, extend, delete, then undo the delete.
insert 0 "Hello, "
insert 7 "World!"
print
delete 7 6
print
undo
print
"#;

/// CLI arguments.
#[derive(Parser, Debug)]
#[command(name = "textcmd", version, about = "Command-based text editing with undo")]
struct Args {
    /// Edit script to run. If omitted the built-in demonstration runs.
    pub script: Option<PathBuf>,
    /// Optional configuration file path (overrides discovery of `textcmd.toml`).
    #[arg(long = "config")]
    pub config: Option<PathBuf>,
}

struct AppStartup {
    log_guard: Option<WorkerGuard>,
}

impl AppStartup {
    fn new() -> Self {
        Self { log_guard: None }
    }

    fn configure_logging(&mut self, config: &Config) -> Result<()> {
        let log_dir = Path::new(".");
        let file_name = config.file.log.file.as_str();
        let log_path = log_dir.join(file_name);
        if log_path.exists() {
            let _ = std::fs::remove_file(&log_path);
        }

        let file_appender = tracing_appender::rolling::never(log_dir, file_name);
        let (nb_writer, guard) = tracing_appender::non_blocking(file_appender);
        let filter = tracing_subscriber::EnvFilter::try_from_default_env()
            .or_else(|_| tracing_subscriber::EnvFilter::try_new(&config.file.log.filter))
            .with_context(|| format!("invalid log filter `{}`", config.file.log.filter))?;
        match tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_ansi(false)
            .with_writer(nb_writer)
            .try_init()
        {
            Ok(_) => {
                self.log_guard = Some(guard);
            }
            Err(_err) => {
                // Global tracing subscriber already installed; drop guard so writer shuts down.
            }
        }

        Ok(())
    }

    fn install_panic_hook() {
        static HOOK: Once = Once::new();
        HOOK.call_once(|| {
            let default_panic = std::panic::take_hook();
            std::panic::set_hook(Box::new(move |info| {
                tracing::error!(target: "runtime.panic", ?info, "panic");
                default_panic(info);
            }));
        });
    }
}

fn load_script(path: Option<&Path>) -> Result<String> {
    match path {
        Some(p) => std::fs::read_to_string(p)
            .with_context(|| format!("failed to read script {}", p.display())),
        None => Ok(DEMO_SCRIPT.to_string()),
    }
}

/// Run `script` in a new session sized by `config`, writing printed text to `out`.
fn execute(script: &str, config: &Config, out: &mut impl Write) -> Result<usize> {
    let history = History::with_capacity_limit(config.history_capacity());
    let state = EditorState::with_history(Buffer::new("script"), history);
    let mut runner = ScriptRunner::new(state);
    let mut write_err = None;
    let executed = runner.run(script, |text| {
        if write_err.is_none()
            && let Err(e) = writeln!(out, "{text}")
        {
            write_err = Some(e);
        }
    })?;
    if let Some(e) = write_err {
        return Err(e).context("failed to write output");
    }
    info!(
        target: "runtime",
        executed,
        len_chars = runner.state().buffer().len_chars(),
        undo_depth = runner.state().undo_depth(),
        "script_complete"
    );
    Ok(executed)
}

fn main() -> Result<()> {
    let args = Args::parse();
    let config = load_from(args.config.clone())?;

    let mut startup = AppStartup::new();
    startup.configure_logging(&config)?;
    AppStartup::install_panic_hook();
    config.log_load_outcome();

    let config_path = config.path.as_ref().map(|p| p.display().to_string());
    let script_path = args.script.as_ref().map(|p| p.display().to_string());
    info!(
        target: "runtime.startup",
        config = config_path.as_deref(),
        script = script_path.as_deref(),
        history_capacity = ?config.history_capacity(),
        "startup"
    );

    let script = load_script(args.script.as_deref())?;
    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    if let Err(e) = execute(&script, &config, &mut out) {
        error!(target: "runtime", error = %e, "script_failed");
        return Err(e);
    }
    out.flush()?;
    Ok(())
}
