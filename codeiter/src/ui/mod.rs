//! UI rendering module for codeiter.
//!
//! `render()` is the single entry point called by the event loop's
//! `terminal.draw()` closure. Layout arithmetic lives in `layout.rs`; each pane
//! has its own renderer.

mod form;
pub mod help;
pub mod highlight;
pub mod keybindings;
mod layout;
pub mod markdown;
mod results;
mod toast;

use std::time::Instant;

use ratatui::Frame;

use crate::app::{AppState, Mode};
use crate::theme::Theme;
use layout::{compute_layout, render_status_bar};

/// Renders one complete frame: form, results, status bar, then overlays.
///
/// Pane rects and the results viewport height are written back into `state`
/// for mouse hit-testing and page scrolling on the next input event.
pub fn render(frame: &mut Frame, state: &mut AppState, theme: &Theme) {
    let l = compute_layout(frame.area());
    state.pane_rects.code = l.code;
    state.pane_rects.prompt = l.prompt;
    state.pane_rects.results = l.results;

    form::render_code_input(frame, l.code, state, theme);
    form::render_prompt_input(frame, l.prompt, state, theme);
    form::render_model_row(frame, l.model_row, state, theme);
    results::render_results(frame, l.results, state, theme);
    render_status_bar(frame, l.status_bar, state, theme);

    if let Some(toast) = state.form.toast(Instant::now()) {
        toast::render_toast(frame, toast);
    }

    if state.mode == Mode::HelpOverlay {
        help::render_help_overlay(frame, theme, state.help_scroll);
    }
}
