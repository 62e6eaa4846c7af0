//! Buffer pane
//!
//! Stack mode draws the snapshot bottom-up with the tail on top; queue mode
//! draws it left to right from front to back. On a mismatch the end the
//! removal was taken from is drawn in the error color.

use super::border_style;
use crate::trace::{Bracket, Mode, Step, StepAction};
use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

fn cell_style(accent: Color, is_removal_end: bool, failed: bool) -> Style {
    let bg = if is_removal_end && failed {
        DEFAULT_THEME.error
    } else {
        accent
    };
    Style::default()
        .bg(bg)
        .fg(Color::Black)
        .add_modifier(Modifier::BOLD)
}

fn stack_lines(items: &[Bracket], accent: Color, failed: bool) -> Vec<Line<'static>> {
    let mut lines = Vec::new();
    for (depth, item) in items.iter().enumerate().rev() {
        let is_top = depth + 1 == items.len();
        let mut spans = vec![Span::styled(
            format!("  {}  ", item),
            cell_style(accent, is_top, failed),
        )];
        if is_top {
            spans.push(Span::styled(
                " ← TOP",
                Style::default().fg(DEFAULT_THEME.comment),
            ));
        } else {
            spans.push(Span::raw("      "));
        }
        lines.push(Line::from(spans));
    }
    lines.push(Line::styled(
        "───────",
        Style::default().fg(DEFAULT_THEME.comment),
    ));
    lines
}

fn queue_lines(items: &[Bracket], accent: Color, failed: bool) -> Vec<Line<'static>> {
    let label = Style::default().fg(DEFAULT_THEME.comment);
    let mut spans = vec![Span::styled("FRONT → ", label)];
    for (i, item) in items.iter().enumerate() {
        spans.push(Span::styled(
            format!("  {}  ", item),
            cell_style(accent, i == 0, failed),
        ));
        spans.push(Span::raw(" "));
    }
    spans.push(Span::styled("← BACK", label));
    vec![Line::from(spans)]
}

/// Render the buffer pane
pub fn render_structure_pane(frame: &mut Frame, area: Rect, step: &Step, mode: Mode) {
    let accent = DEFAULT_THEME.mode_accent(mode);
    let block = Block::default()
        .title(format!(" {} ({}) ", mode.capitalized(), mode.acronym()))
        .title_style(Style::default().fg(accent).add_modifier(Modifier::BOLD))
        .borders(Borders::ALL)
        .border_style(border_style(false));

    let items = step.structure();
    let failed = matches!(step.action(), StepAction::Mismatch { .. });

    let mut lines = vec![Line::raw("")];
    if items.is_empty() {
        lines.push(Line::styled(
            format!("({} is empty)", mode),
            Style::default().fg(DEFAULT_THEME.comment),
        ));
    } else {
        match mode {
            Mode::Stack => lines.extend(stack_lines(items, accent, failed)),
            Mode::Queue => lines.extend(queue_lines(items, accent, failed)),
        }
    }

    lines.push(Line::raw(""));
    lines.push(Line::styled(
        format!("{} item(s)", items.len()),
        Style::default().fg(DEFAULT_THEME.comment),
    ));

    let paragraph = Paragraph::new(lines)
        .block(block)
        .alignment(Alignment::Center);
    frame.render_widget(paragraph, area);
}
