//! TUI pane rendering modules
//!
//! Each pane is a stateless `render_*` function that reads the current
//! [`Step`](crate::trace::Step) (and whatever else it needs) and draws into a
//! rectangle.
//!
//! # Pane Modules
//!
//! - [`input`]: the bracket string with the current character highlighted
//! - [`structure`]: the buffer snapshot, drawn as a stack or a queue
//! - [`message`]: action tag and narrative for the current step
//! - [`explanation`]: fetched prose explanation of the verdict
//! - [`status`]: status bar with keybindings and replay state

pub mod explanation;
pub mod input;
pub mod message;
pub mod status;
pub mod structure;

pub use explanation::render_explanation_pane;
pub use input::{render_input_pane, InputRenderData};
pub use message::render_message_pane;
pub use status::{render_status_bar, StatusRenderData};
pub use structure::render_structure_pane;

use crate::ui::theme::DEFAULT_THEME;
use ratatui::style::{Modifier, Style};

fn border_style(is_focused: bool) -> Style {
    if is_focused {
        Style::default()
            .fg(DEFAULT_THEME.border_focused)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(DEFAULT_THEME.border_normal)
    }
}
