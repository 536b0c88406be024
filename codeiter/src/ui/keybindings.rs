//! Keybinding dispatcher for codeiter.
//!
//! Translates raw crossterm `KeyEvent`s into `AppState` mutations and returns a
//! `KeyAction` telling the event loop what to do next. Form operations are not
//! run here: they come back as `KeyAction::Trigger` so the loop can hand the
//! controller its clipboard and clock and execute any network effect.
//! The dispatcher branches first on `state.mode`.

use codeiter_core::{Tab, Trigger};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind};
use ratatui::layout::Position;

use crate::app::{AppState, Focus, Mode};

/// Control-flow signal returned from the key dispatcher.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyAction {
    /// Nothing further to do; the next render picks up the change.
    Continue,
    /// Run a form operation through the controller.
    Trigger(Trigger),
    /// Exit cleanly.
    Quit,
}

/// Dispatches a key event to the handler matching the current mode.
pub fn handle_key(key: KeyEvent, state: &mut AppState) -> KeyAction {
    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
    if ctrl && key.code == KeyCode::Char('c') {
        return KeyAction::Quit;
    }
    if ctrl && key.code == KeyCode::Char('s') && state.mode != Mode::HelpOverlay {
        return KeyAction::Trigger(Trigger::Submit);
    }

    match state.mode {
        Mode::HelpOverlay => handle_help(key, state),
        Mode::Normal => handle_normal(key, state),
        Mode::Insert => handle_insert(key, state),
    }
}

// ---------------------------------------------------------------------------
// Normal mode
// ---------------------------------------------------------------------------

fn handle_normal(key: KeyEvent, state: &mut AppState) -> KeyAction {
    if let Some(action) = handle_scroll_key(key, state) {
        return action;
    }

    match key.code {
        // Focus and editing
        KeyCode::Tab => {
            state.focus = state.focus.next();
            KeyAction::Continue
        }
        KeyCode::BackTab => {
            state.focus = state.focus.prev();
            KeyAction::Continue
        }
        KeyCode::Char('i') | KeyCode::Enter if state.focus.is_input() => {
            state.mode = Mode::Insert;
            KeyAction::Continue
        }

        // Form operations
        KeyCode::Char('s') => KeyAction::Trigger(Trigger::Submit),
        KeyCode::Char('I') => KeyAction::Trigger(Trigger::Integrate),
        KeyCode::Char('R') => KeyAction::Trigger(Trigger::Reset),
        KeyCode::Char('y') => KeyAction::Trigger(Trigger::Copy),
        KeyCode::Char('m') => KeyAction::Trigger(Trigger::NextModel),
        KeyCode::Char('M') => KeyAction::Trigger(Trigger::PrevModel),

        // Tabs
        KeyCode::Char(c @ '1'..='4') => {
            let idx = c as usize - '1' as usize;
            KeyAction::Trigger(Trigger::SelectTab(Tab::ALL[idx]))
        }
        KeyCode::Char('[') => KeyAction::Trigger(Trigger::PrevTab),
        KeyCode::Char(']') => KeyAction::Trigger(Trigger::NextTab),

        // Help overlay
        KeyCode::Char('?') => {
            state.help_scroll = 0;
            state.mode = Mode::HelpOverlay;
            KeyAction::Continue
        }

        KeyCode::Char('q') => KeyAction::Quit,

        _ => KeyAction::Continue,
    }
}

/// Scroll keys for the results pane: j / k / g / G and Ctrl-d / Ctrl-u.
///
/// Returns `None` when the key should fall through to the rest of the Normal
/// handler.
fn handle_scroll_key(key: KeyEvent, state: &mut AppState) -> Option<KeyAction> {
    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);

    match key.code {
        KeyCode::Char('j') | KeyCode::Down => state.scroll_down(1),
        KeyCode::Char('k') | KeyCode::Up => state.scroll_up(1),
        KeyCode::Char('g') => state.scroll_top(),
        KeyCode::Char('G') => state.scroll_bottom(),
        KeyCode::Char('d') if ctrl => state.half_page_down(),
        KeyCode::Char('u') if ctrl => state.half_page_up(),
        KeyCode::PageDown => state.half_page_down(),
        KeyCode::PageUp => state.half_page_up(),
        _ => return None,
    }
    Some(KeyAction::Continue)
}

// ---------------------------------------------------------------------------
// Insert mode
// ---------------------------------------------------------------------------

/// Types into the focused input. `Esc` returns to Normal mode; `Enter` in the
/// single-line prompt submits the form.
fn handle_insert(key: KeyEvent, state: &mut AppState) -> KeyAction {
    if key.code == KeyCode::Esc {
        state.mode = Mode::Normal;
        return KeyAction::Continue;
    }
    if key.code == KeyCode::Enter && state.focus == Focus::Prompt {
        return KeyAction::Trigger(Trigger::Submit);
    }

    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
    let Some(buf) = state.focused_input_mut() else {
        state.mode = Mode::Normal;
        return KeyAction::Continue;
    };
    match key.code {
        KeyCode::Char('u') if ctrl => buf.clear(),
        KeyCode::Char(c) if !ctrl => buf.push(c),
        KeyCode::Enter => buf.push('\n'),
        KeyCode::Tab => buf.push_str("    "),
        KeyCode::Backspace => {
            buf.pop();
        }
        _ => {}
    }
    KeyAction::Continue
}

// ---------------------------------------------------------------------------
// HelpOverlay mode
// ---------------------------------------------------------------------------

/// `?`, `Esc` or `q` dismiss the overlay; j/k/g/G scroll it.
fn handle_help(key: KeyEvent, state: &mut AppState) -> KeyAction {
    match key.code {
        KeyCode::Char('j') => state.help_scroll = state.help_scroll.saturating_add(1),
        KeyCode::Char('k') => state.help_scroll = state.help_scroll.saturating_sub(1),
        KeyCode::Char('g') => state.help_scroll = 0,
        KeyCode::Char('G') => state.help_scroll = u16::MAX,
        KeyCode::Char('?') | KeyCode::Esc | KeyCode::Char('q') => state.mode = Mode::Normal,
        _ => {}
    }
    KeyAction::Continue
}

// ---------------------------------------------------------------------------
// Mouse events
// ---------------------------------------------------------------------------

/// Left click focuses a pane or selects a tab; the wheel scrolls the results
/// pane (or the help overlay when it is open).
pub fn handle_mouse(mouse: MouseEvent, state: &mut AppState) -> KeyAction {
    match mouse.kind {
        MouseEventKind::Down(MouseButton::Left) => handle_mouse_click(mouse.column, mouse.row, state),
        MouseEventKind::ScrollUp if state.mode == Mode::HelpOverlay => {
            state.help_scroll = state.help_scroll.saturating_sub(3);
            KeyAction::Continue
        }
        MouseEventKind::ScrollDown if state.mode == Mode::HelpOverlay => {
            state.help_scroll = state.help_scroll.saturating_add(3);
            KeyAction::Continue
        }
        MouseEventKind::ScrollUp => {
            state.scroll_up(3);
            KeyAction::Continue
        }
        MouseEventKind::ScrollDown => {
            state.scroll_down(3);
            KeyAction::Continue
        }
        _ => KeyAction::Continue,
    }
}

fn handle_mouse_click(col: u16, row: u16, state: &mut AppState) -> KeyAction {
    let pos = Position { x: col, y: row };
    let rects = state.pane_rects;

    if let Some(idx) = rects.tabs.iter().position(|r| r.width > 0 && r.contains(pos)) {
        state.focus = Focus::Results;
        return KeyAction::Trigger(Trigger::SelectTab(Tab::ALL[idx]));
    }
    if rects.code.contains(pos) {
        state.focus = Focus::Code;
    } else if rects.prompt.contains(pos) {
        state.focus = Focus::Prompt;
    } else if rects.results.contains(pos) {
        state.focus = Focus::Results;
    }
    KeyAction::Continue
}

#[cfg(test)]
mod tests {
    use super::*;
    use codeiter_core::FormController;
    use crossterm::event::{KeyEventKind, KeyEventState};
    use ratatui::layout::Rect;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent {
            code,
            modifiers: KeyModifiers::NONE,
            kind: KeyEventKind::Press,
            state: KeyEventState::NONE,
        }
    }

    fn ctrl(c: char) -> KeyEvent {
        KeyEvent { modifiers: KeyModifiers::CONTROL, ..key(KeyCode::Char(c)) }
    }

    fn state() -> AppState {
        AppState::new(FormController::default())
    }

    #[test]
    fn typing_in_insert_mode_edits_the_focused_input() {
        let mut s = state();
        assert_eq!(handle_key(key(KeyCode::Char('i')), &mut s), KeyAction::Continue);
        assert_eq!(s.mode, Mode::Insert);

        for c in "fn x".chars() {
            handle_key(key(KeyCode::Char(c)), &mut s);
        }
        handle_key(key(KeyCode::Enter), &mut s);
        handle_key(key(KeyCode::Char('}')), &mut s);
        handle_key(key(KeyCode::Backspace), &mut s);
        assert_eq!(s.form.code_input(), "fn x\n");

        handle_key(key(KeyCode::Esc), &mut s);
        assert_eq!(s.mode, Mode::Normal);
    }

    #[test]
    fn enter_in_prompt_submits() {
        let mut s = state();
        s.focus = Focus::Prompt;
        s.mode = Mode::Insert;
        assert_eq!(handle_key(key(KeyCode::Enter), &mut s), KeyAction::Trigger(Trigger::Submit));
    }

    #[test]
    fn normal_mode_maps_form_operations() {
        let mut s = state();
        assert_eq!(handle_key(key(KeyCode::Char('s')), &mut s), KeyAction::Trigger(Trigger::Submit));
        assert_eq!(handle_key(key(KeyCode::Char('I')), &mut s), KeyAction::Trigger(Trigger::Integrate));
        assert_eq!(handle_key(key(KeyCode::Char('R')), &mut s), KeyAction::Trigger(Trigger::Reset));
        assert_eq!(handle_key(key(KeyCode::Char('y')), &mut s), KeyAction::Trigger(Trigger::Copy));
        assert_eq!(
            handle_key(key(KeyCode::Char('3')), &mut s),
            KeyAction::Trigger(Trigger::SelectTab(Tab::Suggestions))
        );
        assert_eq!(handle_key(key(KeyCode::Char('m')), &mut s), KeyAction::Trigger(Trigger::NextModel));
        assert_eq!(handle_key(key(KeyCode::Char('q')), &mut s), KeyAction::Quit);
    }

    #[test]
    fn repeated_esc_leaves_insert_mode_without_quitting() {
        let mut s = state();
        s.mode = Mode::Insert;
        s.form.set_code_input("fn keep() {}");
        assert_eq!(handle_key(key(KeyCode::Esc), &mut s), KeyAction::Continue);
        assert_eq!(handle_key(key(KeyCode::Esc), &mut s), KeyAction::Continue);
        assert_eq!(s.mode, Mode::Normal);
        assert_eq!(s.form.code_input(), "fn keep() {}");
    }

    #[test]
    fn ctrl_s_submits_from_insert_mode() {
        let mut s = state();
        s.mode = Mode::Insert;
        assert_eq!(handle_key(ctrl('s'), &mut s), KeyAction::Trigger(Trigger::Submit));
        assert_eq!(s.form.code_input(), "");
    }

    #[test]
    fn q_is_typed_not_quit_in_insert_mode() {
        let mut s = state();
        s.mode = Mode::Insert;
        assert_eq!(handle_key(key(KeyCode::Char('q')), &mut s), KeyAction::Continue);
        assert_eq!(s.form.code_input(), "q");
    }

    #[test]
    fn help_overlay_opens_and_closes() {
        let mut s = state();
        handle_key(key(KeyCode::Char('?')), &mut s);
        assert_eq!(s.mode, Mode::HelpOverlay);
        handle_key(key(KeyCode::Char('j')), &mut s);
        assert_eq!(s.help_scroll, 1);
        handle_key(key(KeyCode::Esc), &mut s);
        assert_eq!(s.mode, Mode::Normal);
    }

    #[test]
    fn clicking_a_tab_selects_it() {
        let mut s = state();
        s.pane_rects.tabs[1] = Rect::new(10, 0, 12, 1);
        let click = MouseEvent {
            kind: MouseEventKind::Down(MouseButton::Left),
            column: 12,
            row: 0,
            modifiers: KeyModifiers::NONE,
        };
        assert_eq!(
            handle_mouse(click, &mut s),
            KeyAction::Trigger(Trigger::SelectTab(Tab::Explanation))
        );
        assert_eq!(s.focus, Focus::Results);
    }
}
