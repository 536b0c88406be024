//! Form pane renderer: code input, prompt input and the model row.

use ratatui::{
    Frame,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span, Text},
    widgets::Paragraph,
};

use crate::app::{AppState, Focus, Mode};
use crate::theme::Theme;
use crate::ui::layout::{inner_rect, panel_block};

const SPINNER: [&str; 8] = ["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧"];

/// Shown in the empty code input.
const CODE_HINT: &str = "Paste or type the code to improve (i to edit).";
/// Shown in the empty prompt input.
const PROMPT_HINT: &str = "Describe the improvements you want…";

/// Renders the code input. The view follows the end of the buffer so the
/// line being typed is always visible.
pub fn render_code_input(frame: &mut Frame, area: Rect, state: &AppState, theme: &Theme) {
    let focused = state.focus == Focus::Code;
    let editing = focused && state.mode == Mode::Insert;
    let title = if editing { "Code [editing]" } else { "Code" };
    let block = panel_block(title, focused, theme);
    let inner = inner_rect(area);

    let code = state.form.code_input();
    let text = if code.is_empty() && !editing {
        Text::styled(CODE_HINT, Style::default().fg(theme.placeholder))
    } else {
        with_cursor(code, editing, theme)
    };

    let overflow = text.lines.len().saturating_sub(inner.height as usize);
    let scroll = u16::try_from(overflow).unwrap_or(u16::MAX);
    frame.render_widget(Paragraph::new(text).block(block).scroll((scroll, 0)), area);
}

/// Renders the single-line prompt input, showing its tail when it overflows.
pub fn render_prompt_input(frame: &mut Frame, area: Rect, state: &AppState, theme: &Theme) {
    let focused = state.focus == Focus::Prompt;
    let editing = focused && state.mode == Mode::Insert;
    let block = panel_block("Prompt", focused, theme);
    let width = inner_rect(area).width as usize;

    let prompt = state.form.prompt_input();
    let line = if prompt.is_empty() && !editing {
        Line::styled(PROMPT_HINT, Style::default().fg(theme.placeholder))
    } else {
        let chars: Vec<char> = prompt.chars().collect();
        let keep = width.saturating_sub(1);
        let visible: String = chars[chars.len().saturating_sub(keep)..].iter().collect();
        let mut spans = vec![Span::raw(visible)];
        if editing {
            spans.push(cursor_span(theme));
        }
        Line::from(spans)
    };
    frame.render_widget(Paragraph::new(line).block(block), area);
}

/// Renders the model label and, while a request is in flight, the busy
/// indicator.
pub fn render_model_row(frame: &mut Frame, area: Rect, state: &AppState, theme: &Theme) {
    let mut spans = vec![
        Span::raw(" Model: "),
        Span::styled(
            state.form.model_label().to_owned(),
            Style::default().fg(theme.model_label).add_modifier(Modifier::BOLD),
        ),
        Span::styled("  (m to change)", Style::default().fg(theme.placeholder)),
    ];
    if state.form.is_busy() {
        let frame_glyph = SPINNER[state.spinner_frame % SPINNER.len()];
        spans.push(Span::styled(
            format!("   {frame_glyph} Improving code…"),
            Style::default().fg(theme.busy),
        ));
    }
    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}

fn with_cursor(code: &str, editing: bool, theme: &Theme) -> Text<'static> {
    let mut lines: Vec<Line<'static>> = code.split('\n').map(|l| Line::raw(l.to_owned())).collect();
    if editing {
        if let Some(last) = lines.last_mut() {
            last.spans.push(cursor_span(theme));
        }
    }
    Text::from(lines)
}

fn cursor_span(theme: &Theme) -> Span<'static> {
    Span::styled("▏", Style::default().fg(theme.border_active).add_modifier(Modifier::SLOW_BLINK))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cursor_is_appended_to_the_last_line_while_editing() {
        let text = with_cursor("a\nb\n", true, &Theme::dark());
        assert_eq!(text.lines.len(), 3);
        assert_eq!(text.lines[2].spans.last().unwrap().content, "▏");
        assert_eq!(with_cursor("a", false, &Theme::dark()).lines[0].spans.len(), 1);
    }
}
