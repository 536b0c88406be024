//! Help overlay renderer for codeiter.
//!
//! Draws a centred modal over the panes: `Clear` erases the background, then a
//! bordered `Paragraph` lists the key bindings. Rendered inside the same
//! `terminal.draw()` closure as everything else.

use ratatui::{
    Frame,
    layout::Constraint,
    text::{Line, Text},
    widgets::{Block, Clear, Paragraph, Wrap},
};

use crate::theme::Theme;

/// Renders the help overlay, scrolled by `help_scroll` rows.
///
/// Skipped on terminals narrower than 60 columns to avoid a degenerate rect.
pub fn render_help_overlay(frame: &mut Frame, theme: &Theme, help_scroll: u16) {
    if frame.area().width < 60 {
        return;
    }

    let overlay_area = frame
        .area()
        .centered(Constraint::Percentage(80), Constraint::Percentage(80));

    frame.render_widget(Clear, overlay_area);

    let block = Block::bordered()
        .title(" Help: j/k scroll, ? or Esc to dismiss ")
        .border_style(ratatui::style::Style::default().fg(theme.border_active));

    let text = build_help_text();
    let max_scroll = u16::try_from(text.lines.len().saturating_sub(1)).unwrap_or(u16::MAX);
    frame.render_widget(
        Paragraph::new(text)
            .block(block)
            .wrap(Wrap { trim: false })
            .scroll((help_scroll.min(max_scroll), 0)),
        overlay_area,
    );
}

fn build_help_text() -> Text<'static> {
    Text::from(vec![
        Line::from("Form"),
        Line::from("  Tab / Shift-Tab   Move focus: code → prompt → results"),
        Line::from("  i / Enter         Edit the focused input"),
        Line::from("  Esc               Stop editing"),
        Line::from("  Ctrl-u            Clear the input being edited"),
        Line::from("  m / M             Next / previous model"),
        Line::from(""),
        Line::from("Actions"),
        Line::from("  s / Ctrl-s        Submit code and prompt"),
        Line::from("  Enter (prompt)    Submit while editing the prompt"),
        Line::from("  I                 Integrate the improved code"),
        Line::from("  R                 Reset (final view): take the final code back into the editor"),
        Line::from("  y                 Copy the improved code"),
        Line::from(""),
        Line::from("Results"),
        Line::from("  1 2 3 4           Improved code / Explanation / Suggestions / Changes"),
        Line::from("  [ / ]             Previous / next tab"),
        Line::from("  j / k             Scroll down / up one line"),
        Line::from("  g / G             Jump to top / bottom"),
        Line::from("  Ctrl-d / u        Scroll half page down / up"),
        Line::from(""),
        Line::from("General"),
        Line::from("  ?                 Open / close this help overlay"),
        Line::from("  q / Ctrl-c        Quit"),
    ])
}
