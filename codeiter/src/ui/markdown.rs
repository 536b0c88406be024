//! Markdown → ratatui `Text` renderer for the explanation and suggestions tabs.
//!
//! Covers what model output actually contains: headings, paragraphs, nested
//! lists, emphasis, inline code and fenced code blocks. Anything else degrades
//! to its plain text.

use pulldown_cmark::{Event, HeadingLevel, Options, Parser, Tag, TagEnd};
use ratatui::{
    style::{Modifier, Style},
    text::{Line, Span, Text},
};

use crate::theme::Theme;

/// Renders `markdown` into owned, styled lines.
pub fn render_markdown(markdown: &str, theme: &Theme) -> Text<'static> {
    let mut writer = MarkdownWriter::new(theme);
    for event in Parser::new_ext(markdown, Options::ENABLE_STRIKETHROUGH) {
        writer.handle(event);
    }
    writer.finish()
}

struct MarkdownWriter<'t> {
    theme: &'t Theme,
    lines: Vec<Line<'static>>,
    current: Vec<Span<'static>>,
    styles: Vec<Style>,
    /// One entry per open list: next ordinal for ordered lists.
    lists: Vec<Option<u64>>,
    in_code_block: bool,
}

impl<'t> MarkdownWriter<'t> {
    fn new(theme: &'t Theme) -> Self {
        Self {
            theme,
            lines: Vec::new(),
            current: Vec::new(),
            styles: vec![Style::default()],
            lists: Vec::new(),
            in_code_block: false,
        }
    }

    fn style(&self) -> Style {
        self.styles.last().copied().unwrap_or_default()
    }

    fn push_style(&mut self, patch: Style) {
        let next = self.style().patch(patch);
        self.styles.push(next);
    }

    fn pop_style(&mut self) {
        if self.styles.len() > 1 {
            self.styles.pop();
        }
    }

    fn flush(&mut self) {
        if !self.current.is_empty() {
            self.lines.push(Line::from(std::mem::take(&mut self.current)));
        }
    }

    fn blank_line(&mut self) {
        if self.lines.last().is_some_and(|l| l.width() > 0) {
            self.lines.push(Line::default());
        }
    }

    fn handle(&mut self, event: Event<'_>) {
        match event {
            Event::Start(tag) => self.start(tag),
            Event::End(tag) => self.end(tag),
            Event::Text(text) if self.in_code_block => {
                let code_style = Style::default().fg(self.theme.md_code);
                for line in text.lines() {
                    self.lines.push(Line::from(vec![
                        Span::raw("    "),
                        Span::styled(line.to_owned(), code_style),
                    ]));
                }
            }
            Event::Text(text) => self.current.push(Span::styled(text.into_string(), self.style())),
            Event::Code(code) => self.current.push(Span::styled(
                code.into_string(),
                self.style().fg(self.theme.md_code),
            )),
            Event::InlineHtml(html) => self.current.push(Span::styled(html.into_string(), self.style())),
            Event::Html(html) => {
                // Block HTML arrives one source line at a time.
                self.current.push(Span::styled(html.trim_end().to_owned(), self.style()));
                self.flush();
            }
            Event::SoftBreak => self.current.push(Span::raw(" ")),
            Event::HardBreak => self.flush(),
            Event::Rule => {
                self.flush();
                self.lines.push(Line::styled("────────", Style::default().fg(self.theme.placeholder)));
            }
            _ => {}
        }
    }

    fn start(&mut self, tag: Tag<'_>) {
        match tag {
            Tag::Heading { level, .. } => {
                self.flush();
                self.blank_line();
                let mut patch = Style::default().fg(self.theme.md_heading).add_modifier(Modifier::BOLD);
                if level == HeadingLevel::H1 {
                    patch = patch.add_modifier(Modifier::UNDERLINED);
                }
                self.push_style(patch);
            }
            Tag::List(start) => {
                self.flush();
                self.lists.push(start);
            }
            Tag::Item => {
                self.flush();
                let depth = self.lists.len().saturating_sub(1);
                let marker = match self.lists.last_mut() {
                    Some(Some(n)) => {
                        let m = format!("{n}. ");
                        *n += 1;
                        m
                    }
                    _ => "• ".to_owned(),
                };
                self.current.push(Span::raw("  ".repeat(depth)));
                self.current.push(Span::styled(marker, Style::default().fg(self.theme.md_bullet)));
            }
            Tag::CodeBlock(_) => {
                self.flush();
                self.in_code_block = true;
            }
            Tag::Emphasis => self.push_style(Style::default().add_modifier(Modifier::ITALIC)),
            Tag::Strong => self.push_style(Style::default().add_modifier(Modifier::BOLD)),
            Tag::Strikethrough => self.push_style(Style::default().add_modifier(Modifier::CROSSED_OUT)),
            _ => {}
        }
    }

    fn end(&mut self, tag: TagEnd) {
        match tag {
            TagEnd::Heading(_) => {
                self.flush();
                self.pop_style();
                self.blank_line();
            }
            TagEnd::Paragraph => {
                self.flush();
                if self.lists.is_empty() {
                    self.blank_line();
                }
            }
            TagEnd::List(_) => {
                self.flush();
                self.lists.pop();
                if self.lists.is_empty() {
                    self.blank_line();
                }
            }
            TagEnd::Item => self.flush(),
            TagEnd::CodeBlock => {
                self.in_code_block = false;
                self.blank_line();
            }
            TagEnd::Emphasis | TagEnd::Strong | TagEnd::Strikethrough => self.pop_style(),
            _ => {}
        }
    }

    fn finish(mut self) -> Text<'static> {
        self.flush();
        while self.lines.last().is_some_and(|l| l.width() == 0) {
            self.lines.pop();
        }
        Text::from(self.lines)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn plain(line: &Line<'_>) -> String {
        line.spans.iter().map(|s| s.content.as_ref()).collect()
    }

    #[test]
    fn heading_is_bold_and_followed_by_paragraph() {
        let text = render_markdown("## Changes\n\nRenamed `x`.", &Theme::dark());
        let lines: Vec<String> = text.lines.iter().map(plain).collect();
        assert_eq!(lines, vec!["Changes", "", "Renamed x."]);
        assert!(text.lines[0].spans[0].style.add_modifier.contains(Modifier::BOLD));
        let code = text.lines[2].spans.iter().find(|s| s.content == "x").unwrap();
        assert_eq!(code.style.fg, Some(Theme::dark().md_code));
    }

    #[test]
    fn angle_brackets_survive_as_text() {
        let text = render_markdown("Use Vec<T> instead.\n\n<details>\n", &Theme::dark());
        let lines: Vec<String> = text.lines.iter().map(plain).collect();
        assert_eq!(lines[0], "Use Vec<T> instead.");
        assert!(lines.iter().any(|l| l == "<details>"));
    }

    #[test]
    fn lists_get_bullets_and_ordinals() {
        let text = render_markdown("- one\n- two\n\n1. first\n2. second\n", &Theme::dark());
        let lines: Vec<String> = text.lines.iter().map(plain).collect();
        assert_eq!(lines, vec!["• one", "• two", "", "1. first", "2. second"]);
    }

    #[test]
    fn nested_list_is_indented() {
        let text = render_markdown("- outer\n  - inner\n", &Theme::dark());
        let lines: Vec<String> = text.lines.iter().map(plain).collect();
        assert_eq!(lines, vec!["• outer", "  • inner"]);
    }

    #[test]
    fn fenced_code_block_is_indented_verbatim() {
        let text = render_markdown("```rust\nlet a = 1;\n  let b = 2;\n```\n", &Theme::dark());
        let lines: Vec<String> = text.lines.iter().map(plain).collect();
        assert_eq!(lines, vec!["    let a = 1;", "      let b = 2;"]);
    }

    #[test]
    fn strong_text_is_bold() {
        let text = render_markdown("**Renamed** it", &Theme::dark());
        let bold = &text.lines[0].spans[0];
        assert_eq!(bold.content, "Renamed");
        assert!(bold.style.add_modifier.contains(Modifier::BOLD));
    }
}
