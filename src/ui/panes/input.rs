//! Input string pane
//!
//! Draws the bracket string as a row of cells. Characters already consumed
//! are dimmed, the one under the cursor takes the step's color, and a caret
//! row underneath points at it. In edit mode the pane shows a text cursor
//! instead.

use super::border_style;
use crate::trace::Step;
use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Data needed to render the input pane
pub struct InputRenderData<'a> {
    pub input: &'a str,
    pub step: &'a Step,
    pub error_index: Option<usize>,
    pub is_editing: bool,
}

/// Render the input pane
pub fn render_input_pane(frame: &mut Frame, area: Rect, data: InputRenderData) {
    let title = if data.is_editing {
        " Input (editing: Enter/Esc to finish) "
    } else {
        " Input "
    };

    let block = Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_style(border_style(data.is_editing));

    if data.is_editing {
        let line = Line::from(vec![
            Span::styled(
                data.input.to_string(),
                Style::default()
                    .fg(DEFAULT_THEME.fg)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled("▏", Style::default().fg(DEFAULT_THEME.border_focused)),
        ]);
        let paragraph = Paragraph::new(vec![Line::raw(""), line])
            .block(block)
            .alignment(Alignment::Center);
        frame.render_widget(paragraph, area);
        return;
    }

    if data.input.is_empty() {
        let paragraph = Paragraph::new(vec![Line::raw(""), Line::raw("(empty input)")])
            .block(block)
            .style(Style::default().fg(DEFAULT_THEME.comment))
            .alignment(Alignment::Center);
        frame.render_widget(paragraph, area);
        return;
    }

    let current = data.step.index();
    let highlight = DEFAULT_THEME.step_color(data.step);

    let mut cells = Vec::new();
    let mut caret = Vec::new();
    for (i, ch) in data.input.chars().enumerate() {
        let i = i as isize;
        let style = if i == current {
            Style::default()
                .bg(highlight)
                .fg(Color::Black)
                .add_modifier(Modifier::BOLD)
        } else if i < current {
            Style::default().fg(DEFAULT_THEME.comment)
        } else {
            Style::default().fg(DEFAULT_THEME.fg)
        };
        cells.push(Span::styled(format!(" {} ", ch), style));
        cells.push(Span::raw(" "));

        let marker = if i == current { " ▲ " } else { "   " };
        caret.push(Span::styled(marker, Style::default().fg(highlight)));
        caret.push(Span::raw(" "));
    }

    let mut lines = vec![Line::from(cells), Line::from(caret)];
    if let Some(index) = data.error_index {
        if data.step.action().is_structural_failure() {
            lines.push(Line::styled(
                format!("failed at position {}", index),
                Style::default().fg(DEFAULT_THEME.error),
            ));
        }
    }

    let paragraph = Paragraph::new(lines)
        .block(block)
        .alignment(Alignment::Center);
    frame.render_widget(paragraph, area);
}
