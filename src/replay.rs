//! Replay of a precomputed trace
//!
//! [`Replay`] shares a [`ValidationResult`] and owns a cursor into its steps. The
//! cursor stays inside `[0, len - 1]`: moving past either end is reported as a
//! [`ReplayError`] and leaves the position unchanged. Auto-play advances one
//! step per elapsed interval and stops by itself on the last step.

use crate::error::ReplayError;
use crate::trace::{Step, ValidationResult};
use std::rc::Rc;
use std::time::{Duration, Instant};

/// Period used by the interactive player when none is configured
pub const DEFAULT_PLAY_INTERVAL: Duration = Duration::from_millis(800);

#[derive(Debug, Clone)]
pub struct Replay {
    result: Rc<ValidationResult>,
    position: usize,
    is_playing: bool,
    interval: Duration,
    last_advance: Instant,
}

impl Replay {
    pub fn new(result: impl Into<Rc<ValidationResult>>, interval: Duration) -> Self {
        Replay {
            result: result.into(),
            position: 0,
            is_playing: false,
            interval,
            last_advance: Instant::now(),
        }
    }

    pub fn result(&self) -> &ValidationResult {
        &self.result
    }

    /// Shared handle to the trace being replayed
    pub fn shared_result(&self) -> &Rc<ValidationResult> {
        &self.result
    }

    /// Step under the cursor
    pub fn current(&self) -> Option<&Step> {
        self.result.steps.get(self.position)
    }

    pub fn position(&self) -> usize {
        self.position
    }

    pub fn total_steps(&self) -> usize {
        self.result.steps.len()
    }

    pub fn is_at_start(&self) -> bool {
        self.position == 0
    }

    pub fn is_at_end(&self) -> bool {
        self.position + 1 >= self.total_steps()
    }

    pub fn is_playing(&self) -> bool {
        self.is_playing
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }

    pub fn step_forward(&mut self) -> Result<(), ReplayError> {
        if self.total_steps() == 0 {
            return Err(ReplayError::Empty);
        }
        if self.is_at_end() {
            self.is_playing = false;
            return Err(ReplayError::AtEnd);
        }
        self.position += 1;
        Ok(())
    }

    pub fn step_backward(&mut self) -> Result<(), ReplayError> {
        if self.total_steps() == 0 {
            return Err(ReplayError::Empty);
        }
        if self.is_at_start() {
            return Err(ReplayError::AtStart);
        }
        self.position -= 1;
        Ok(())
    }

    /// Step forward up to `n` times, returning how many steps were taken
    pub fn step_forward_n(&mut self, n: usize) -> usize {
        let mut stepped = 0;
        for _ in 0..n {
            if self.step_forward().is_err() {
                break;
            }
            stepped += 1;
        }
        stepped
    }

    pub fn rewind_to_start(&mut self) -> Result<(), ReplayError> {
        if self.total_steps() == 0 {
            return Err(ReplayError::Empty);
        }
        self.is_playing = false;
        self.position = 0;
        Ok(())
    }

    pub fn jump_to_end(&mut self) -> Result<(), ReplayError> {
        if self.total_steps() == 0 {
            return Err(ReplayError::Empty);
        }
        self.is_playing = false;
        self.position = self.total_steps() - 1;
        Ok(())
    }

    /// Start or pause auto-play. Returns the new playing state.
    ///
    /// Starting from the last step restarts from the beginning.
    pub fn toggle_play(&mut self, now: Instant) -> bool {
        if self.is_playing {
            self.is_playing = false;
        } else {
            if self.is_at_end() {
                self.position = 0;
            }
            self.is_playing = self.total_steps() > 1;
            self.last_advance = now;
        }
        self.is_playing
    }

    pub fn pause(&mut self) {
        self.is_playing = false;
    }

    /// Advance once if playing and a full interval has passed since the last
    /// advance. Returns whether the cursor moved.
    pub fn tick(&mut self, now: Instant) -> bool {
        if !self.is_playing || now.saturating_duration_since(self.last_advance) < self.interval {
            return false;
        }
        self.last_advance = now;
        let moved = self.step_forward().is_ok();
        if self.is_at_end() {
            self.is_playing = false;
        }
        moved
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::trace::{generate, parse_brackets, Mode};

    fn replay_of(input: &str) -> Replay {
        let brackets = parse_brackets(input).unwrap();
        Replay::new(generate(&brackets, Mode::Stack), DEFAULT_PLAY_INTERVAL)
    }

    #[test]
    fn test_cursor_is_clamped() {
        let mut replay = replay_of("()");
        assert_eq!(replay.total_steps(), 4);
        assert_eq!(replay.step_backward(), Err(ReplayError::AtStart));
        assert_eq!(replay.step_forward_n(10), 3);
        assert!(replay.is_at_end());
        assert_eq!(replay.step_forward(), Err(ReplayError::AtEnd));
        assert_eq!(replay.position(), 3);
    }

    #[test]
    fn test_rewind_and_jump() {
        let mut replay = replay_of("([])");
        replay.jump_to_end().unwrap();
        assert_eq!(replay.position(), 5);
        replay.step_backward().unwrap();
        assert_eq!(replay.position(), 4);
        replay.rewind_to_start().unwrap();
        assert!(replay.is_at_start());
    }

    #[test]
    fn test_tick_waits_for_interval() {
        let mut replay = replay_of("()");
        let t0 = Instant::now();
        assert!(replay.toggle_play(t0));
        assert!(!replay.tick(t0 + Duration::from_millis(100)));
        assert!(replay.tick(t0 + DEFAULT_PLAY_INTERVAL));
        assert_eq!(replay.position(), 1);
    }

    #[test]
    fn test_play_stops_on_last_step() {
        let mut replay = replay_of("()");
        let mut now = Instant::now();
        replay.toggle_play(now);
        for _ in 0..10 {
            now += DEFAULT_PLAY_INTERVAL;
            replay.tick(now);
        }
        assert!(replay.is_at_end());
        assert!(!replay.is_playing());
    }

    #[test]
    fn test_replays_share_one_trace() {
        let result = Rc::new(generate(&parse_brackets("([])").unwrap(), Mode::Queue));
        let mut first = Replay::new(Rc::clone(&result), DEFAULT_PLAY_INTERVAL);
        let second = Replay::new(Rc::clone(&result), DEFAULT_PLAY_INTERVAL);
        first.step_forward().unwrap();
        assert!(Rc::ptr_eq(first.shared_result(), second.shared_result()));
        assert_eq!(second.position(), 0);
    }

    #[test]
    fn test_play_from_end_restarts() {
        let mut replay = replay_of("(");
        replay.jump_to_end().unwrap();
        assert!(replay.toggle_play(Instant::now()));
        assert_eq!(replay.position(), 0);
        assert!(!replay.toggle_play(Instant::now()));
    }
}
