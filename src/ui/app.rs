//! Main TUI application state and logic

use crate::config::Config;
use crate::error::ReplayError;
use crate::explain::{spawn_explanation, ExplanationRequest, FAILURE_MESSAGE};
use crate::replay::Replay;
use crate::trace::{generate, Bracket, Mode, ValidationResult};
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind};
use ratatui::{
    backend::Backend,
    layout::{Constraint, Direction, Layout},
    Frame, Terminal,
};
use rustc_hash::FxHashMap;
use std::io;
use std::rc::Rc;
use std::sync::mpsc::{Receiver, TryRecvError};
use std::time::{Duration, Instant};

/// Whether keys drive the replay or edit the input string
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputMode {
    Normal,
    Editing,
}

/// Progress of the explanation fetch for the current input and mode
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExplanationState {
    Idle,
    Loading,
    Ready(String),
}

/// The main application state
pub struct App {
    config: Config,

    /// Current input, always restricted to bracket characters
    pub input: String,

    pub mode: Mode,

    /// Replay over the trace for (`input`, `mode`)
    pub replay: Replay,

    /// Traces of `input` generated so far, one per mode. Cleared when the
    /// input changes.
    traces: FxHashMap<Mode, Rc<ValidationResult>>,

    /// Verdicts for (stack, queue) on `input`
    verdicts: (bool, bool),

    pub input_mode: InputMode,

    /// Index into `config.presets` of the last preset loaded
    preset_index: Option<usize>,

    pub explanation: ExplanationState,
    explanation_rx: Option<Receiver<String>>,
    pub explanation_scroll: u16,

    /// Whether the app should quit
    pub should_quit: bool,

    /// Status message to display
    pub status_message: String,

    /// Last time space was pressed (for debouncing)
    last_space_press: Instant,
}

impl App {
    /// Create a new app showing `input` under the configured mode.
    ///
    /// Non-bracket characters in `input` are dropped.
    pub fn new(config: Config, input: &str) -> Self {
        let input = crate::trace::sanitize(input);
        let mode = config.mode;
        let mut traces = FxHashMap::default();
        let verdicts = verdicts_for(&mut traces, &input);
        let replay = Replay::new(trace_for(&mut traces, &input, mode), config.play_interval);

        App {
            config,
            input,
            mode,
            replay,
            traces,
            verdicts,
            input_mode: InputMode::Normal,
            preset_index: None,
            explanation: ExplanationState::Idle,
            explanation_rx: None,
            explanation_scroll: 0,
            should_quit: false,
            status_message: String::from("Ready!"),
            last_space_press: Instant::now()
                .checked_sub(Duration::from_secs(1))
                .unwrap_or_else(Instant::now),
        }
    }

    /// Run the TUI application
    pub fn run<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> io::Result<()> {
        loop {
            terminal.draw(|f| self.render(f))?;

            if self.should_quit {
                break;
            }

            if self.replay.tick(Instant::now()) {
                self.status_message = "Playing...".to_string();
            } else if !self.replay.is_playing() && self.status_message == "Playing..." {
                self.status_message = "Playback complete".to_string();
            }

            self.poll_explanation();

            // Use poll with timeout to allow auto-play to work
            if event::poll(Duration::from_millis(50))? {
                if let Event::Key(key) = event::read()? {
                    if key.kind == KeyEventKind::Press {
                        self.handle_key_event(key);
                    }
                }
            }
        }

        Ok(())
    }

    /// Verdicts of both modes for the current input
    pub fn verdicts(&self) -> (bool, bool) {
        self.verdicts
    }

    /// Number of traces currently cached
    pub fn cached_traces(&self) -> usize {
        self.traces.len()
    }

    /// Regenerate (or fetch from cache) the trace and reset playback
    fn reload(&mut self) {
        self.verdicts = verdicts_for(&mut self.traces, &self.input);
        let result = trace_for(&mut self.traces, &self.input, self.mode);
        self.replay = Replay::new(result, self.config.play_interval);
        self.explanation = ExplanationState::Idle;
        self.explanation_rx = None;
        self.explanation_scroll = 0;
    }

    pub fn set_input(&mut self, input: &str) {
        let input = crate::trace::sanitize(input);
        if input != self.input {
            self.traces.clear();
            self.input = input;
        }
        self.reload();
    }

    pub fn set_mode(&mut self, mode: Mode) {
        self.mode = mode;
        self.reload();
        self.status_message = format!("Switched to {} mode", mode);
    }

    pub fn next_preset(&mut self) {
        if self.config.presets.is_empty() {
            return;
        }
        let next = self
            .preset_index
            .map_or(0, |i| (i + 1) % self.config.presets.len());
        self.preset_index = Some(next);
        let preset = self.config.presets[next].clone();
        self.set_input(&preset);
        self.status_message = format!("Preset {}", preset);
    }

    fn request_explanation(&mut self) {
        if self.explanation == ExplanationState::Loading {
            return;
        }
        let request = ExplanationRequest {
            input: self.input.clone(),
            is_valid: self.replay.result().is_valid,
            mode: self.mode,
        };
        self.explanation_rx = Some(spawn_explanation(self.config.explain.clone(), request));
        self.explanation = ExplanationState::Loading;
        self.explanation_scroll = 0;
        self.status_message = "Fetching explanation...".to_string();
    }

    /// Pick up a finished explanation, if any
    pub fn poll_explanation(&mut self) {
        let Some(rx) = &self.explanation_rx else {
            return;
        };
        let text = match rx.try_recv() {
            Ok(text) => text,
            Err(TryRecvError::Empty) => return,
            Err(TryRecvError::Disconnected) => FAILURE_MESSAGE.to_string(),
        };
        self.explanation = ExplanationState::Ready(text);
        self.explanation_rx = None;
        self.status_message = "Explanation ready".to_string();
    }

    /// Render the UI
    fn render(&mut self, frame: &mut Frame) {
        let size = frame.area();
        let verdicts = self.verdicts();

        // Input | body | message | status bar
        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(5),
                Constraint::Min(8),
                Constraint::Length(4),
                Constraint::Length(1),
            ])
            .split(size);

        let columns = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(60), Constraint::Percentage(40)])
            .split(rows[1]);

        let Some(step) = self.replay.current() else {
            return;
        };

        super::panes::render_input_pane(
            frame,
            rows[0],
            super::panes::InputRenderData {
                input: &self.input,
                step,
                error_index: self.replay.result().error_index,
                is_editing: self.input_mode == InputMode::Editing,
            },
        );

        super::panes::render_structure_pane(frame, columns[0], step, self.mode);

        super::panes::render_explanation_pane(
            frame,
            columns[1],
            &self.explanation,
            self.mode,
            &mut self.explanation_scroll,
        );

        super::panes::render_message_pane(frame, rows[2], step, self.mode);

        super::panes::render_status_bar(
            frame,
            rows[3],
            super::panes::StatusRenderData {
                message: &self.status_message,
                current_step: self.replay.position(),
                total_steps: self.replay.total_steps(),
                mode: self.mode,
                verdicts,
                is_playing: self.replay.is_playing(),
                is_editing: self.input_mode == InputMode::Editing,
            },
        );
    }

    /// Handle keyboard events
    pub fn handle_key_event(&mut self, key: KeyEvent) {
        match self.input_mode {
            InputMode::Editing => self.handle_edit_key(key),
            InputMode::Normal => self.handle_normal_key(key),
        }
    }

    fn handle_edit_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Enter | KeyCode::Esc => {
                self.input_mode = InputMode::Normal;
                self.status_message = "Input updated".to_string();
            }
            KeyCode::Backspace => {
                let mut input = self.input.clone();
                input.pop();
                self.set_input(&input);
            }
            KeyCode::Char(c) if Bracket::from_char(c).is_some() => {
                let mut input = self.input.clone();
                input.push(c);
                self.set_input(&input);
            }
            _ => {}
        }
    }

    fn handle_normal_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('q') | KeyCode::Char('Q') => {
                self.should_quit = true;
            }
            // Number keys step forward N times directly
            KeyCode::Char(c @ '1'..='9') => {
                self.replay.pause();
                let n = c.to_digit(10).unwrap_or(1) as usize;
                let stepped = self.replay.step_forward_n(n);
                self.status_message = format!("Stepped forward {} step(s)", stepped);
            }
            KeyCode::Tab => {
                self.set_mode(self.mode.toggled());
            }
            KeyCode::Char('i') => {
                self.replay.pause();
                self.input_mode = InputMode::Editing;
                self.status_message = "Editing input".to_string();
            }
            KeyCode::Char('p') => {
                self.next_preset();
            }
            KeyCode::Char('e') => {
                self.request_explanation();
            }
            KeyCode::Left => {
                self.replay.pause();
                let res = self.replay.step_backward();
                self.report_step(res, "Stepped backward", "Cannot step backward");
            }
            KeyCode::Right => {
                self.replay.pause();
                let res = self.replay.step_forward();
                self.report_step(res, "Stepped forward", "Cannot step forward");
            }
            KeyCode::Up => {
                self.explanation_scroll = self.explanation_scroll.saturating_sub(1);
            }
            KeyCode::Down => {
                self.explanation_scroll = self.explanation_scroll.saturating_add(1);
            }
            KeyCode::Char(' ') => {
                // Toggle auto-play mode (with 200ms debounce to prevent key repeat spam)
                if self.last_space_press.elapsed() >= Duration::from_millis(200) {
                    self.last_space_press = Instant::now();
                    self.status_message = if self.replay.toggle_play(Instant::now()) {
                        "Playing...".to_string()
                    } else {
                        "Paused".to_string()
                    };
                }
            }
            KeyCode::Enter | KeyCode::End => {
                let res = self.replay.jump_to_end();
                self.report_step(res, "Jumped to end", "Cannot jump");
            }
            KeyCode::Backspace | KeyCode::Home => {
                let res = self.replay.rewind_to_start();
                self.report_step(res, "Jumped to start", "Cannot rewind");
            }
            _ => {}
        }
    }

    fn report_step(&mut self, res: Result<(), ReplayError>, ok: &str, failed: &str) {
        self.status_message = match res {
            Ok(()) => ok.to_string(),
            Err(e) => format!("{}: {}", failed, e),
        };
    }
}

/// Look up the trace of `input` under `mode`, generating it on first use.
/// `traces` must only hold traces of `input`.
fn trace_for(
    traces: &mut FxHashMap<Mode, Rc<ValidationResult>>,
    input: &str,
    mode: Mode,
) -> Rc<ValidationResult> {
    let result = traces.entry(mode).or_insert_with(|| {
        let brackets: Vec<Bracket> = input.chars().filter_map(Bracket::from_char).collect();
        Rc::new(generate(&brackets, mode))
    });
    Rc::clone(result)
}

fn verdicts_for(
    traces: &mut FxHashMap<Mode, Rc<ValidationResult>>,
    input: &str,
) -> (bool, bool) {
    (
        trace_for(traces, input, Mode::Stack).is_valid,
        trace_for(traces, input, Mode::Queue).is_valid,
    )
}
