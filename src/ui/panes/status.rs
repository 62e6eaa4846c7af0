//! Status bar rendering with keybindings and state indicators

use crate::trace::Mode;
use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

/// Data needed to render the status bar
pub struct StatusRenderData<'a> {
    pub message: &'a str,
    pub current_step: usize,
    pub total_steps: usize,
    pub mode: Mode,
    /// Verdicts for (stack, queue) on the current input
    pub verdicts: (bool, bool),
    pub is_playing: bool,
    pub is_editing: bool,
}

const NORMAL_BINDS: &[(&str, &str)] = &[
    (" ←/→ ", " step "),
    (" ⎵ ", " play "),
    (" ↵ / ⌫ ", " end/start "),
    (" tab ", " mode "),
    (" i ", " edit "),
    (" p ", " preset "),
    (" e ", " explain "),
    ("q", " quit "),
];

const EDIT_BINDS: &[(&str, &str)] = &[(" ⌫ ", " delete "), (" ↵ / esc ", " done ")];

fn verdict_span(label: &str, valid: bool, active: bool) -> Span<'static> {
    let mut style = Style::default().bg(DEFAULT_THEME.current_line_bg).fg(if valid {
        DEFAULT_THEME.success
    } else {
        DEFAULT_THEME.error
    });
    if active {
        style = style.add_modifier(Modifier::BOLD | Modifier::UNDERLINED);
    }
    let mark = if valid { "✔" } else { "✘" };
    Span::styled(format!(" {} {} ", label, mark), style)
}

/// Render the status bar at the bottom
pub fn render_status_bar(frame: &mut Frame, area: Rect, data: StatusRenderData) {
    let layout = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(area);

    let sep_style = Style::default()
        .bg(DEFAULT_THEME.current_line_bg)
        .fg(DEFAULT_THEME.comment);

    // Left side: step counter, message and both verdicts
    let left_spans = vec![
        Span::styled(
            format!(" Step {}/{} ", data.current_step + 1, data.total_steps),
            Style::default()
                .bg(if data.is_editing {
                    DEFAULT_THEME.secondary
                } else {
                    DEFAULT_THEME.mode_accent(data.mode)
                })
                .fg(Color::Black)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(" | ", sep_style),
        verdict_span("stack", data.verdicts.0, data.mode == Mode::Stack),
        verdict_span("queue", data.verdicts.1, data.mode == Mode::Queue),
        Span::styled(" | ", sep_style),
        Span::styled(
            format!(" {} ", data.message),
            Style::default()
                .bg(DEFAULT_THEME.current_line_bg)
                .fg(DEFAULT_THEME.fg),
        ),
    ];

    let left_paragraph = Paragraph::new(Line::from(left_spans))
        .style(Style::default().bg(DEFAULT_THEME.current_line_bg))
        .alignment(Alignment::Left);

    frame.render_widget(left_paragraph, layout[0]);

    // Right side: keybinds
    let key_style = Style::default().bg(DEFAULT_THEME.comment).fg(Color::Black);
    let desc_style = Style::default()
        .bg(DEFAULT_THEME.current_line_bg)
        .fg(DEFAULT_THEME.fg);

    let binds = if data.is_editing {
        EDIT_BINDS
    } else {
        NORMAL_BINDS
    };

    let mut right_spans = Vec::new();
    for (i, (key, desc)) in binds.iter().enumerate() {
        if i > 0 {
            right_spans.push(Span::styled("│", sep_style));
            right_spans.push(Span::styled(" ", desc_style));
        }
        right_spans.push(Span::styled(*key, key_style));
        right_spans.push(Span::styled(*desc, desc_style));
    }

    let is_at_start = data.current_step == 0;
    let is_at_end = data.current_step + 1 >= data.total_steps;

    let indicator = if data.is_editing {
        Some((" ⌨ INPUT ", DEFAULT_THEME.secondary))
    } else if data.is_playing {
        Some((" ▶ PLAYING ", DEFAULT_THEME.secondary))
    } else if is_at_end {
        Some((" END ", DEFAULT_THEME.error))
    } else if is_at_start {
        Some((" START ", DEFAULT_THEME.success))
    } else {
        None
    };

    if let Some((label, bg)) = indicator {
        right_spans.push(Span::styled("│", sep_style));
        right_spans.push(Span::styled(
            label,
            Style::default()
                .bg(bg)
                .fg(Color::Black)
                .add_modifier(Modifier::BOLD),
        ));
    }

    let right_paragraph = Paragraph::new(Line::from(right_spans))
        .style(Style::default().bg(DEFAULT_THEME.current_line_bg))
        .alignment(Alignment::Right);

    frame.render_widget(right_paragraph, layout[1]);
}
