//! Step narrative pane

use super::border_style;
use crate::trace::{Mode, Step, StepAction};
use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

fn icon(step: &Step) -> &'static str {
    match step.action() {
        StepAction::Match { .. } => "✔",
        StepAction::FinalCheck { .. } if step.is_valid_so_far() => "✔",
        StepAction::Mismatch { .. }
        | StepAction::EmptyError { .. }
        | StepAction::FinalCheck { .. } => "✘",
        StepAction::Start | StepAction::Push { .. } => "ℹ",
    }
}

/// Render the message pane for the current step
pub fn render_message_pane(frame: &mut Frame, area: Rect, step: &Step, mode: Mode) {
    let color = DEFAULT_THEME.step_color(step);

    let block = Block::default()
        .title(" Step ")
        .borders(Borders::ALL)
        .border_style(border_style(false));

    let header = Line::from(vec![
        Span::styled(format!("{} ", icon(step)), Style::default().fg(color)),
        Span::styled(
            format!("{} {}", step.action().tag().to_uppercase(), mode.upper()),
            Style::default()
                .fg(DEFAULT_THEME.comment)
                .add_modifier(Modifier::BOLD),
        ),
    ]);
    let body = Line::styled(
        step.message().to_string(),
        Style::default().fg(color).add_modifier(Modifier::BOLD),
    );

    let paragraph = Paragraph::new(vec![header, body])
        .block(block)
        .wrap(Wrap { trim: true });
    frame.render_widget(paragraph, area);
}
