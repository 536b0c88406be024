//! Central application state for codeiter.
//!
//! `AppState` wraps the [`FormController`] (session and form state) together
//! with terminal-only concerns: which pane has focus, the editing mode, scroll
//! offsets, cached geometry and the highlight cache. No ratatui rendering logic
//! lives here; the render module reads it and the keybinding dispatcher
//! mutates it.

use codeiter_core::FormController;
use ratatui::layout::Rect;
use ratatui::text::Line;

/// Editor mode controlling which keybinding set is active.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    /// Commands and navigation (default).
    #[default]
    Normal,
    /// Keystrokes are typed into the focused input.
    Insert,
    /// Full-screen help overlay is shown above all panes.
    HelpOverlay,
}

/// Which pane currently has keyboard focus.
///
/// Cycles Code → Prompt → Results → Code via `next()`.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    #[default]
    Code,
    Prompt,
    Results,
}

impl Focus {
    pub fn next(self) -> Self {
        match self {
            Focus::Code => Focus::Prompt,
            Focus::Prompt => Focus::Results,
            Focus::Results => Focus::Code,
        }
    }

    pub fn prev(self) -> Self {
        match self {
            Focus::Code => Focus::Results,
            Focus::Prompt => Focus::Code,
            Focus::Results => Focus::Prompt,
        }
    }

    /// Whether the pane accepts typed text.
    pub fn is_input(self) -> bool {
        matches!(self, Focus::Code | Focus::Prompt)
    }
}

/// Screen rectangles cached after each render for mouse hit-testing.
#[derive(Debug, Default, Clone, Copy)]
pub struct PaneRects {
    pub code: Rect,
    pub prompt: Rect,
    pub results: Rect,
    /// One rect per tab title, in `Tab::ALL` order.
    pub tabs: [Rect; 4],
}

/// Highlighted improved-code lines, keyed by the text they were built from.
#[derive(Debug, Default)]
pub struct HighlightCache {
    pub source: String,
    pub lines: Vec<Line<'static>>,
}

/// All mutable UI state passed through every render cycle.
pub struct AppState {
    pub form: FormController,
    pub mode: Mode,
    pub focus: Focus,

    /// Vertical scroll offset of the results / final pane.
    pub results_scroll: u16,
    /// Inner height of the results pane, cached after each render.
    pub results_viewport_height: u16,
    pub help_scroll: u16,
    pub pane_rects: PaneRects,

    /// Advanced on every tick while a request is in flight.
    pub spinner_frame: usize,
    /// File extension used to pick a syntax for the improved code.
    pub syntax_ext: String,
    pub highlight_cache: HighlightCache,
}

impl AppState {
    pub fn new(form: FormController) -> Self {
        Self {
            form,
            mode: Mode::default(),
            focus: Focus::default(),
            results_scroll: 0,
            results_viewport_height: 0,
            help_scroll: 0,
            pane_rects: PaneRects::default(),
            spinner_frame: 0,
            syntax_ext: "txt".to_owned(),
            highlight_cache: HighlightCache::default(),
        }
    }

    /// Logic tick: spinner animation and toast expiry.
    pub fn on_tick(&mut self, now: std::time::Instant) {
        if self.form.is_busy() {
            self.spinner_frame = self.spinner_frame.wrapping_add(1);
        }
        self.form.tick(now);
    }

    /// The text buffer of the focused input, if the focus is on one.
    pub fn focused_input_mut(&mut self) -> Option<&mut String> {
        match self.focus {
            Focus::Code => Some(self.form.code_input_mut()),
            Focus::Prompt => Some(self.form.prompt_input_mut()),
            Focus::Results => None,
        }
    }

    /// Inserts pasted text into the focused input. Newlines are dropped from
    /// the single-line prompt.
    pub fn paste(&mut self, text: &str) {
        let is_prompt = self.focus == Focus::Prompt;
        let normalized = text.replace("\r\n", "\n").replace('\r', "\n");
        if let Some(buf) = self.focused_input_mut() {
            if is_prompt {
                buf.push_str(&normalized.replace('\n', " "));
            } else {
                buf.push_str(&normalized);
            }
        }
    }

    pub fn scroll_down(&mut self, lines: u16) {
        self.results_scroll = self.results_scroll.saturating_add(lines);
    }

    pub fn scroll_up(&mut self, lines: u16) {
        self.results_scroll = self.results_scroll.saturating_sub(lines);
    }

    pub fn scroll_top(&mut self) {
        self.results_scroll = 0;
    }

    /// Sets the offset past the end; the renderer clamps it.
    pub fn scroll_bottom(&mut self) {
        self.results_scroll = u16::MAX;
    }

    /// Scrolls down by half the visible height (at least one line).
    pub fn half_page_down(&mut self) {
        self.scroll_down((self.results_viewport_height / 2).max(1));
    }

    pub fn half_page_up(&mut self) {
        self.scroll_up((self.results_viewport_height / 2).max(1));
    }

    /// Called whenever the visible content of the results pane changes.
    pub fn on_content_changed(&mut self) {
        self.results_scroll = 0;
    }
}
