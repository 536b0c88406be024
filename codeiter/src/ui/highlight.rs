//! Syntax highlighting for code shown in the improved-code and final panes.
//!
//! The syntax is picked from a file extension (taken from the file the code
//! was loaded from) and falls back to the first-line heuristics, then plain
//! text.

use std::sync::LazyLock;

use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use syntect::easy::HighlightLines;
use syntect::highlighting::ThemeSet;
use syntect::parsing::{SyntaxReference, SyntaxSet};

use crate::app::HighlightCache;

static PS: LazyLock<SyntaxSet> = LazyLock::new(SyntaxSet::load_defaults_newlines);
static TS: LazyLock<ThemeSet> = LazyLock::new(ThemeSet::load_defaults);

/// Converts a syntect (Style, &str) pair to an owned ratatui Span.
///
/// Background colors are dropped so the pane keeps the terminal background.
fn syntect_to_span(style: syntect::highlighting::Style, content: &str) -> Span<'static> {
    let fg = style.foreground;
    let mut ratatui_style = Style::default();
    if fg.a > 0 {
        ratatui_style = ratatui_style.fg(Color::Rgb(fg.r, fg.g, fg.b));
    }
    if style.font_style.contains(syntect::highlighting::FontStyle::BOLD) {
        ratatui_style = ratatui_style.add_modifier(Modifier::BOLD);
    }
    if style.font_style.contains(syntect::highlighting::FontStyle::ITALIC) {
        ratatui_style = ratatui_style.add_modifier(Modifier::ITALIC);
    }
    Span::styled(content.trim_end_matches('\n').to_owned(), ratatui_style)
}

fn find_syntax(code: &str, ext: &str) -> &'static SyntaxReference {
    PS.find_syntax_by_extension(ext)
        .or_else(|| code.lines().next().and_then(|first| PS.find_syntax_by_first_line(first)))
        .unwrap_or_else(|| PS.find_syntax_plain_text())
}

/// Highlights `code` line by line. Falls back to unstyled lines when no theme
/// is available or a line fails to highlight.
pub fn highlight_code(code: &str, ext: &str) -> Vec<Line<'static>> {
    let theme = TS.themes.get("base16-ocean.dark").or_else(|| TS.themes.values().next());
    let Some(theme) = theme else {
        return code.lines().map(|l| Line::raw(l.to_owned())).collect();
    };

    let mut h = HighlightLines::new(find_syntax(code, ext), theme);
    syntect::util::LinesWithEndings::from(code)
        .map(|line| match h.highlight_line(line, &PS) {
            Ok(ranges) => Line::from(
                ranges.into_iter().map(|(style, text)| syntect_to_span(style, text)).collect::<Vec<_>>(),
            ),
            Err(_) => Line::raw(line.trim_end_matches('\n').to_owned()),
        })
        .collect()
}

/// Returns highlighted lines for `code`, recomputing only when it changed.
pub fn cached_highlight<'c>(cache: &'c mut HighlightCache, code: &str, ext: &str) -> &'c [Line<'static>] {
    if cache.source != code || (cache.lines.is_empty() && !code.is_empty()) {
        cache.lines = highlight_code(code, ext);
        cache.source = code.to_owned();
    }
    &cache.lines
}

#[cfg(test)]
mod tests {
    use super::*;

    fn plain(line: &Line<'_>) -> String {
        line.spans.iter().map(|s| s.content.as_ref()).collect()
    }

    #[test]
    fn highlighting_preserves_text_per_line() {
        let code = "fn main() {\n    println!(\"hi\");\n}\n";
        let lines = highlight_code(code, "rs");
        let text: Vec<String> = lines.iter().map(plain).collect();
        assert_eq!(text, vec!["fn main() {", "    println!(\"hi\");", "}"]);
    }

    #[test]
    fn cache_is_rebuilt_when_code_changes() {
        let mut cache = HighlightCache::default();
        assert_eq!(cached_highlight(&mut cache, "a = 1", "py").len(), 1);
        assert_eq!(cached_highlight(&mut cache, "a = 1\nb = 2", "py").len(), 2);
        assert_eq!(cache.source, "a = 1\nb = 2");
    }
}
