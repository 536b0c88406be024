//! Results pane renderer: the tab bar with its four panels, or the final view
//! after integration.
//!
//! Panel content is turned into owned lines per frame (markdown, diff) or taken
//! from the highlight cache (code). The scroll offset is clamped here so key
//! handlers can overshoot freely.

use codeiter_core::controller::PanelContent;
use codeiter_core::diff::{diff_stats, DiffKind, DiffPart};
use codeiter_core::{Tab, View};
use ratatui::{
    Frame,
    layout::{Constraint, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span, Text},
    widgets::{Paragraph, Wrap},
};

use crate::app::{AppState, Focus};
use crate::theme::Theme;
use crate::ui::highlight::cached_highlight;
use crate::ui::layout::{inner_rect, panel_block};
use crate::ui::markdown::render_markdown;

/// Renders whichever result view is active and records tab rects for mouse
/// hit-testing.
pub fn render_results(frame: &mut Frame, area: Rect, state: &mut AppState, theme: &Theme) {
    let focused = state.focus == Focus::Results;
    let inner = inner_rect(area);
    state.pane_rects.tabs = [Rect::default(); 4];

    match state.form.view() {
        View::Result => {
            let title = if state.form.integrate_available() {
                "Result  (I to integrate)"
            } else {
                "Result"
            };
            frame.render_widget(panel_block(title, focused, theme), area);

            let [tab_bar, body] =
                inner.layout(&Layout::vertical([Constraint::Length(1), Constraint::Fill(1)]));
            render_tab_bar(frame, tab_bar, state, theme);

            let text = panel_text(state, theme);
            render_scrolled(frame, body, text, state);
        }
        View::Final => {
            frame.render_widget(panel_block("Final Code  (R to edit again)", focused, theme), area);
            let code = state.form.final_code().to_owned();
            let lines = cached_highlight(&mut state.highlight_cache, &code, &state.syntax_ext).to_vec();
            render_scrolled(frame, inner, Text::from(lines), state);
        }
    }
}

fn render_scrolled(frame: &mut Frame, area: Rect, text: Text<'static>, state: &mut AppState) {
    state.results_viewport_height = area.height;
    let max_scroll = text.lines.len().saturating_sub(area.height as usize);
    let max_scroll = u16::try_from(max_scroll).unwrap_or(u16::MAX);
    state.results_scroll = state.results_scroll.min(max_scroll);
    frame.render_widget(
        Paragraph::new(text).wrap(Wrap { trim: false }).scroll((state.results_scroll, 0)),
        area,
    );
}

/// Title shown for `tab`; the Changes tab carries its line counts once a diff
/// exists.
pub fn tab_label(tab: Tab, content: &PanelContent) -> String {
    let n = tab.index() + 1;
    match content {
        PanelContent::Diff(parts) => {
            let stats = diff_stats(parts);
            format!(" {n} {} +{} -{} ", tab.title(), stats.added, stats.removed)
        }
        _ => format!(" {n} {} ", tab.title()),
    }
}

fn render_tab_bar(frame: &mut Frame, area: Rect, state: &mut AppState, theme: &Theme) {
    let active = state.form.active_tab();
    let mut spans = Vec::with_capacity(Tab::ALL.len() * 2);
    let mut x = area.x;

    for tab in Tab::ALL {
        let label = tab_label(tab, state.form.panel(tab));
        let width = u16::try_from(label.chars().count()).unwrap_or(u16::MAX);
        let style = if tab == active {
            Style::default().fg(theme.tab_active).add_modifier(Modifier::BOLD | Modifier::REVERSED)
        } else {
            Style::default().fg(theme.tab_inactive)
        };

        let visible = width.min(area.right().saturating_sub(x));
        state.pane_rects.tabs[tab.index()] = Rect::new(x, area.y, visible, 1);
        x = x.saturating_add(width).saturating_add(1);

        spans.push(Span::styled(label, style));
        spans.push(Span::raw(" "));
    }

    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}

fn panel_text(state: &mut AppState, theme: &Theme) -> Text<'static> {
    let content = state.form.panel(state.form.active_tab()).clone();
    match content {
        PanelContent::Placeholder(text) => {
            Text::styled(text, Style::default().fg(theme.placeholder))
        }
        PanelContent::Plain(code) => {
            let lines = cached_highlight(&mut state.highlight_cache, &code, &state.syntax_ext);
            Text::from(lines.to_vec())
        }
        PanelContent::Markdown(md) => render_markdown(&md, theme),
        PanelContent::Diff(parts) => diff_text(&parts, theme),
    }
}

/// One line per diff line, prefixed `+ ` / `- ` / `  ` and colored by kind.
pub fn diff_text(parts: &[DiffPart], theme: &Theme) -> Text<'static> {
    let mut lines = Vec::new();
    for part in parts {
        let (prefix, color) = match part.kind {
            DiffKind::Added => ("+ ", theme.diff_added),
            DiffKind::Removed => ("- ", theme.diff_removed),
            DiffKind::Unchanged => ("  ", theme.diff_context),
        };
        let style = Style::default().fg(color);
        for line in part.value.lines() {
            lines.push(Line::from(vec![
                Span::styled(prefix, style),
                Span::styled(line.to_owned(), style),
            ]));
        }
    }
    Text::from(lines)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn changes_label_carries_stats() {
        let parts = codeiter_core::diff::line_diff("a\nb\n", "a\nc\nd\n");
        assert_eq!(tab_label(Tab::Changes, &PanelContent::Diff(parts)), " 4 Changes +2 -1 ");
        assert_eq!(
            tab_label(Tab::Explanation, &PanelContent::Placeholder("x".into())),
            " 2 Explanation "
        );
    }

    #[test]
    fn diff_lines_are_prefixed_by_kind() {
        let parts = codeiter_core::diff::line_diff("keep\nold\n", "keep\nnew\n");
        let text = diff_text(&parts, &Theme::dark());
        let rendered: Vec<String> = text
            .lines
            .iter()
            .map(|l| l.spans.iter().map(|s| s.content.as_ref()).collect())
            .collect();
        assert_eq!(rendered, vec!["  keep", "- old", "+ new"]);
        assert_eq!(text.lines[2].spans[0].style.fg, Some(Theme::dark().diff_added));
    }
}
