use ratatui::style::Color;

use crate::trace::{Mode, Step, StepAction};

pub struct Theme {
    pub fg: Color,
    pub primary: Color,   // Blue
    pub secondary: Color, // Orange
    pub comment: Color,   // Grey
    pub success: Color,   // Green
    pub error: Color,     // Red
    pub border_focused: Color,
    pub border_normal: Color,
    pub current_line_bg: Color,
    pub stack_accent: Color, // Indigo
    pub queue_accent: Color, // Rose
}

pub const DEFAULT_THEME: Theme = Theme {
    fg: Color::Rgb(205, 214, 244),
    primary: Color::Rgb(137, 180, 250),   // Blue
    secondary: Color::Rgb(250, 179, 135), // Orange
    comment: Color::Rgb(108, 112, 134),
    success: Color::Rgb(166, 227, 161),
    error: Color::Rgb(243, 139, 168),
    border_focused: Color::Rgb(249, 226, 175), // Yellow border for focus
    border_normal: Color::Rgb(108, 112, 134),  // Grey border for normal
    current_line_bg: Color::Rgb(50, 50, 70),   // Slightly lighter BG for current line
    stack_accent: Color::Rgb(180, 190, 254),
    queue_accent: Color::Rgb(235, 160, 172),
};

impl Theme {
    pub fn mode_accent(&self, mode: Mode) -> Color {
        match mode {
            Mode::Stack => self.stack_accent,
            Mode::Queue => self.queue_accent,
        }
    }

    /// Color for a step's highlight: blue for pushes, green for matches and a
    /// passing final check, red for every failure
    pub fn step_color(&self, step: &Step) -> Color {
        match step.action() {
            StepAction::Start => self.comment,
            StepAction::Push { .. } => self.primary,
            StepAction::Match { .. } => self.success,
            StepAction::Mismatch { .. } | StepAction::EmptyError { .. } => self.error,
            StepAction::FinalCheck { .. } if step.is_valid_so_far() => self.success,
            StepAction::FinalCheck { .. } => self.error,
        }
    }
}
