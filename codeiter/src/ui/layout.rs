//! Responsive two-pane layout for codeiter.
//!
//! Pure layout arithmetic plus the shared panel block and status bar. Called
//! inside `terminal.draw()` on every render so each frame reflects the current
//! terminal size.
//!
//! At `>= 100` columns the form sits left of the results; narrower terminals
//! stack the form above the results.

use codeiter_core::View;
use ratatui::{
    Frame,
    layout::{Constraint, Layout, Margin, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Paragraph},
};

use crate::app::{AppState, Mode};
use crate::theme::Theme;

/// Height of the prompt input including borders.
const PROMPT_HEIGHT: u16 = 3;

/// The rectangles of one frame. Valid only inside the current draw closure.
#[derive(Debug, Clone, Copy)]
pub struct FrameLayout {
    pub code: Rect,
    pub prompt: Rect,
    /// One row under the prompt: model label and busy indicator.
    pub model_row: Rect,
    pub results: Rect,
    pub status_bar: Rect,
}

/// Splits the frame into form, results and status bar.
pub fn compute_layout(area: Rect) -> FrameLayout {
    let [main_area, status_bar] =
        area.layout(&Layout::vertical([Constraint::Fill(1), Constraint::Length(1)]));

    let [form_area, results] = if area.width >= 100 {
        main_area.layout(&Layout::horizontal([
            Constraint::Percentage(45),
            Constraint::Percentage(55),
        ]))
    } else {
        main_area.layout(&Layout::vertical([
            Constraint::Percentage(45),
            Constraint::Percentage(55),
        ]))
    };

    let [code, prompt, model_row] = form_area.layout(&Layout::vertical([
        Constraint::Fill(1),
        Constraint::Length(PROMPT_HEIGHT),
        Constraint::Length(1),
    ]));

    FrameLayout { code, prompt, model_row, results, status_bar }
}

/// Returns the inner `Rect` of a panel after removing the 1-cell border on each side.
pub fn inner_rect(area: Rect) -> Rect {
    area.inner(Margin { vertical: 1, horizontal: 1 })
}

/// Builds a bordered `Block` for a panel.
///
/// Focused panels get a thick border in `border_active`; others a plain border
/// in `border_inactive`.
pub fn panel_block<'a>(title: impl Into<Line<'a>>, is_focused: bool, theme: &Theme) -> Block<'a> {
    let border_style = if is_focused {
        Style::default().fg(theme.border_active)
    } else {
        Style::default().fg(theme.border_inactive)
    };
    let border_type = if is_focused { BorderType::Thick } else { BorderType::Plain };

    Block::bordered()
        .title(title)
        .border_type(border_type)
        .border_style(border_style)
}

/// Renders the 1-row status bar: mode indicator followed by the key hints
/// relevant to the current mode.
pub fn render_status_bar(frame: &mut Frame, area: Rect, state: &AppState, theme: &Theme) {
    let (mode_text, mode_fg) = match state.mode {
        Mode::Insert => (" INSERT ", theme.status_mode_insert),
        Mode::Normal | Mode::HelpOverlay => (" NORMAL ", theme.status_mode_normal),
    };

    let hints = match state.mode {
        Mode::Insert => "  Esc normal · Ctrl-s submit",
        Mode::Normal if state.form.view() == View::Final => {
            "  R reset · j/k scroll · s submit · ? help · q quit"
        }
        Mode::Normal if state.form.integrate_available() => {
            "  s submit · I integrate · y copy · 1-4 tabs · m model · ? help · q quit"
        }
        _ => "  i edit · Tab focus · s submit · y copy · 1-4 tabs · m model · ? help · q quit",
    };

    let status_line = Line::from(vec![
        Span::styled(mode_text, Style::default().fg(mode_fg).add_modifier(Modifier::BOLD)),
        Span::raw(hints),
    ]);

    frame.render_widget(
        Paragraph::new(status_line)
            .style(Style::default().bg(theme.status_bar_bg).fg(theme.status_bar_fg)),
        area,
    );
}
