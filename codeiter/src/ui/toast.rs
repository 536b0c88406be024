//! Toast overlay: a one-line notification anchored to the bottom-right corner,
//! above the status bar.

use codeiter_core::toast::{Toast, ToastKind};
use ratatui::{
    Frame,
    layout::Rect,
    style::{Modifier, Style},
    widgets::{Clear, Paragraph},
};

use crate::theme::{TOAST_ERROR, TOAST_SUCCESS, TOAST_TEXT};

/// Where the toast goes inside `area`: bottom-right, one row above the status
/// bar, never wider than the frame.
pub fn toast_rect(area: Rect, message: &str) -> Rect {
    let width = u16::try_from(message.chars().count() + 4).unwrap_or(u16::MAX).min(area.width);
    let x = area.right().saturating_sub(width + 1).max(area.x);
    let y = area.bottom().saturating_sub(3).max(area.y);
    Rect::new(x, y, width, 1)
}

pub fn render_toast(frame: &mut Frame, toast: &Toast) {
    let area = toast_rect(frame.area(), &toast.message);
    let bg = match toast.kind {
        ToastKind::Error => TOAST_ERROR,
        ToastKind::Success => TOAST_SUCCESS,
    };
    frame.render_widget(Clear, area);
    frame.render_widget(
        Paragraph::new(format!("  {}  ", toast.message))
            .style(Style::default().bg(bg).fg(TOAST_TEXT).add_modifier(Modifier::BOLD)),
        area,
    );
}
