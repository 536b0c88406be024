//! codeiter: terminal client for a code-improvement backend.
//!
//! Entry point for the `codeiter` binary. Wires together configuration and
//! logging, the terminal lifecycle (`tui`), the unified event bus (`event`),
//! the form controller from `codeiter-core`, and the renderer (`ui`).
//!
//! # Startup sequence
//!
//! 1. Parse arguments, load config, install file logging, all before the
//!    terminal is touched so failures print normally.
//! 2. `install_panic_hook()` — restores the terminal before the panic message.
//! 3. `register_sigterm()` — flag polled in the event loop heartbeat.
//! 4. `init_tui()` — alternate screen, raw mode, mouse and paste capture.
//! 5. Create the event channel and `spawn_event_task()`.
//!
//! `restore_tui()` is called once after the loop exits. Inside the loop `?` is
//! only used in the Render arm; draw errors break out and still reach it.

mod app;
mod clipboard;
mod config;
mod event;
mod logging;
mod theme;
mod tui;
mod ui;

use std::path::PathBuf;
use std::sync::atomic::Ordering;
use std::time::Instant;

use clap::Parser;
use codeiter_core::{ClipboardWriter, Effect, FormController, ProcessClient, Trigger};
use tokio::sync::mpsc::UnboundedSender;

use crate::app::AppState;
use crate::event::AppEvent;
use crate::ui::keybindings::{handle_key, handle_mouse, KeyAction};

/// Terminal client that sends code and an improvement prompt to a
/// `/process_code` backend and shows the improved code, explanation,
/// suggestions and diff.
#[derive(Debug, Parser)]
#[command(name = "codeiter", version)]
struct Cli {
    /// Preload the code input from this file.
    file: Option<PathBuf>,

    /// Backend base URL (overrides config and CODEITER_BASE_URL).
    #[arg(long)]
    base_url: Option<String>,

    /// Model identifier to select at startup.
    #[arg(long)]
    model: Option<String>,

    /// Theme name: `dark` or `catppuccin-mocha`.
    #[arg(long)]
    theme: Option<String>,
}

/// Everything the trigger executor needs besides the state.
struct Runtime {
    client: ProcessClient,
    clipboard: Box<dyn ClipboardWriter>,
    tx: UnboundedSender<AppEvent>,
}

impl Runtime {
    /// Runs `trigger` through the controller and executes the resulting effect.
    fn execute(&mut self, trigger: Trigger, state: &mut AppState) {
        let before = (state.form.active_tab(), state.form.view());
        let effect = state.form.dispatch(trigger, self.clipboard.as_mut(), Instant::now());
        if (state.form.active_tab(), state.form.view()) != before || trigger == Trigger::Reset {
            state.on_content_changed();
        }
        if let Some(Effect::Send(request)) = effect {
            event::spawn_process_request(self.client.clone(), request, self.tx.clone());
        }
    }
}

#[tokio::main]
async fn main() -> std::io::Result<()> {
    let cli = Cli::parse();

    // Step 1: config, logging, initial form state — before terminal init.
    let mut config = config::load_from(&config::config_path()).with_env_overrides();
    if let Some(url) = cli.base_url {
        config.base_url = url;
    }
    let log_path = config.log_file.clone().unwrap_or_else(logging::default_log_path);
    let _log_guard = logging::init(&log_path);
    tracing::info!(base_url = %config.base_url, "codeiter starting");

    let theme = theme::Theme::from_name(cli.theme.as_deref().unwrap_or(&config.theme));
    let client = ProcessClient::new(config.base_url.clone(), config.request_timeout())
        .map_err(std::io::Error::other)?;

    let mut form = FormController::new(config.models.clone());
    if let Some(id) = cli.model.as_deref().or(config.default_model.as_deref()) {
        if !form.select_model_id(id) {
            tracing::warn!(model = id, "unknown model, keeping default");
        }
    }
    let mut state = AppState::new(form);
    if let Some(path) = &cli.file {
        state.form.set_code_input(std::fs::read_to_string(path)?);
        if let Some(ext) = path.extension().and_then(|e| e.to_str()) {
            state.syntax_ext = ext.to_owned();
        }
    }

    // Step 2: panic hook installed first — innermost hook restores terminal.
    tui::install_panic_hook();

    // Step 3: SIGTERM flag — polled in the 50ms heartbeat arm below.
    let term_flag = tui::register_sigterm()?;

    // Step 4: enter alternate screen and raw mode.
    let mut terminal = tui::init_tui()?;

    // Step 5: create event channel and spawn the background event task.
    let handler = event::EventHandler::new();
    event::spawn_event_task(handler.tx.clone());
    let mut rx = handler.rx;

    let mut runtime = Runtime {
        client,
        clipboard: clipboard::from_choice(config.clipboard),
        tx: handler.tx.clone(),
    };

    // Event loop — exits only via `break`, never via `?` outside the Render arm.
    'event_loop: loop {
        tokio::select! {
            // Heartbeat: SIGTERM is checked at least every 50ms even when
            // no events arrive.
            _ = tokio::time::sleep(std::time::Duration::from_millis(50)) => {
                if term_flag.load(Ordering::Relaxed) {
                    break 'event_loop;
                }
            }
            maybe_event = rx.recv() => {
                match maybe_event {
                    Some(AppEvent::Render) => {
                        // Exactly one draw() call per Render event — never elsewhere.
                        terminal.draw(|frame| ui::render(frame, &mut state, &theme))?;
                    }
                    Some(AppEvent::Tick) => state.on_tick(Instant::now()),
                    Some(AppEvent::Key(key)) => match handle_key(key, &mut state) {
                        KeyAction::Quit => break 'event_loop,
                        KeyAction::Trigger(trigger) => runtime.execute(trigger, &mut state),
                        KeyAction::Continue => {}
                    },
                    Some(AppEvent::Mouse(mouse)) => match handle_mouse(mouse, &mut state) {
                        KeyAction::Quit => break 'event_loop,
                        KeyAction::Trigger(trigger) => runtime.execute(trigger, &mut state),
                        KeyAction::Continue => {}
                    },
                    Some(AppEvent::Paste(text)) => state.paste(&text),
                    Some(AppEvent::ProcessResult(outcome)) => {
                        state.form.complete_submit(*outcome, Instant::now());
                        state.on_content_changed();
                    }
                    Some(AppEvent::Resize(_, _)) => {
                        // ratatui picks up the new size on the next Render.
                    }
                    Some(AppEvent::Quit) | None => break 'event_loop,
                }
                if term_flag.load(Ordering::Relaxed) {
                    break 'event_loop;
                }
            }
        }
    }

    // Single exit point: covers quit keys, SIGTERM and channel close.
    tui::restore_tui()?;
    tracing::info!("codeiter exiting");
    Ok(())
}
