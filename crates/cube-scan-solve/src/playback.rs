//! Step-by-step walk through a solution.

use crate::SolveStep;
use std::time::Duration;

/// Cursor over a solution with play/pause semantics.
///
/// The timer itself belongs to the caller: call [`SolvePlayback::tick`] once
/// per [`SolvePlayback::interval`] while playing.
#[derive(Clone, Debug)]
pub struct SolvePlayback {
    steps: Vec<SolveStep>,
    current: usize,
    playing: bool,
    interval: Duration,
}

impl SolvePlayback {
    pub const MIN_INTERVAL: Duration = Duration::from_millis(500);
    pub const MAX_INTERVAL: Duration = Duration::from_millis(3000);
    pub const DEFAULT_INTERVAL: Duration = Duration::from_millis(1000);

    pub fn new(steps: Vec<SolveStep>) -> Self {
        Self {
            steps,
            current: 0,
            playing: false,
            interval: Self::DEFAULT_INTERVAL,
        }
    }

    pub fn steps(&self) -> &[SolveStep] {
        &self.steps
    }

    pub fn len(&self) -> usize {
        self.steps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    /// Zero-based index of the displayed step.
    pub fn position(&self) -> usize {
        self.current
    }

    pub fn current(&self) -> Option<&SolveStep> {
        self.steps.get(self.current)
    }

    pub fn is_playing(&self) -> bool {
        self.playing
    }

    pub fn is_at_end(&self) -> bool {
        self.current + 1 >= self.steps.len()
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }

    /// Set the per-step interval, clamped to `[MIN_INTERVAL, MAX_INTERVAL]`.
    pub fn set_interval(&mut self, interval: Duration) {
        self.interval = interval.clamp(Self::MIN_INTERVAL, Self::MAX_INTERVAL);
    }

    /// Advance one step. Returns false at the last step.
    pub fn step_forward(&mut self) -> bool {
        if self.is_at_end() {
            return false;
        }
        self.current += 1;
        true
    }

    /// Go back one step. Returns false at the first step.
    pub fn step_back(&mut self) -> bool {
        if self.current == 0 {
            return false;
        }
        self.current -= 1;
        true
    }

    /// Start or pause playback. Starting from the last step rewinds first.
    pub fn toggle_play(&mut self) {
        if self.is_at_end() {
            self.current = 0;
        }
        self.playing = !self.playing;
    }

    /// Timer callback: advance while playing and stop on the last step.
    pub fn tick(&mut self) -> Option<&SolveStep> {
        if !self.playing || self.is_at_end() {
            self.playing = false;
            return None;
        }
        self.current += 1;
        if self.is_at_end() {
            self.playing = false;
        }
        self.steps.get(self.current)
    }

    /// `(position + 1) / len`, or 0 for an empty solution.
    pub fn progress(&self) -> f32 {
        if self.steps.is_empty() {
            return 0.0;
        }
        (self.current + 1) as f32 / self.steps.len() as f32
    }

    /// Time left at the current speed, counting the displayed step.
    pub fn remaining_time(&self) -> Duration {
        let left = self.steps.len().saturating_sub(self.current) as u32;
        self.interval * left
    }
}
