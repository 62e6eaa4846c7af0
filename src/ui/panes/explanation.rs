//! Explanation side pane

use super::border_style;
use crate::trace::Mode;
use crate::ui::app::ExplanationState;
use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::Line,
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

/// Render the explanation pane. `scroll` is clamped to the text height.
pub fn render_explanation_pane(
    frame: &mut Frame,
    area: Rect,
    state: &ExplanationState,
    mode: Mode,
    scroll: &mut u16,
) {
    let accent = DEFAULT_THEME.mode_accent(mode);
    let block = Block::default()
        .title(" AI Comparison ")
        .title_style(Style::default().fg(accent).add_modifier(Modifier::BOLD))
        .borders(Borders::ALL)
        .border_style(border_style(matches!(state, ExplanationState::Ready(_))));

    let paragraph = match state {
        ExplanationState::Idle => {
            *scroll = 0;
            let hint = match mode {
                Mode::Stack => "succeeds",
                Mode::Queue => "usually fails",
            };
            Paragraph::new(vec![
                Line::raw(""),
                Line::styled(
                    format!("{} Analysis", mode.upper()),
                    Style::default().fg(accent).add_modifier(Modifier::BOLD),
                ),
                Line::raw(""),
                Line::styled(
                    format!(
                        "Learn why a {} {} at processing nested patterns like \"([])\".",
                        mode, hint
                    ),
                    Style::default().fg(DEFAULT_THEME.comment),
                ),
                Line::raw(""),
                Line::styled("Press e to explain", Style::default().fg(DEFAULT_THEME.fg)),
            ])
            .alignment(Alignment::Center)
        }
        ExplanationState::Loading => {
            *scroll = 0;
            Paragraph::new(vec![
                Line::raw(""),
                Line::styled(
                    format!("Thinking about {}s...", mode),
                    Style::default()
                        .fg(DEFAULT_THEME.comment)
                        .add_modifier(Modifier::ITALIC),
                ),
            ])
            .alignment(Alignment::Center)
        }
        ExplanationState::Ready(text) => {
            let max_scroll = text.lines().count().saturating_sub(1) as u16;
            *scroll = (*scroll).min(max_scroll);
            Paragraph::new(text.as_str())
                .style(Style::default().fg(DEFAULT_THEME.fg))
                .scroll((*scroll, 0))
        }
    };

    frame.render_widget(paragraph.block(block).wrap(Wrap { trim: false }), area);
}
