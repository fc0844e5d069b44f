use glam::Vec2;

use crate::api::types::GuidanceMode;
use crate::geometry::generate::{generate, Stroke};
use crate::geometry::instruction::StrokeInstruction;
use crate::geometry::mapper::LetterBox;

/// How far the user has traced along one stroke.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct StrokeState {
    /// Number of leading sample points already matched (0..=len).
    pub progress_index: usize,
    /// Set once `progress_index` reaches the stroke length.
    pub done: bool,
}

/// Result of feeding one input sample to the tracker.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CheckOutcome {
    /// At least one stroke moved forward.
    pub advanced: bool,
    /// This sample finished the last open stroke. True at most once per letter.
    pub letter_complete: bool,
}

/// Matching tolerances, in device pixels and sample counts.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MatchParams {
    /// Maximum distance (exclusive) between input and a target point.
    pub hit_radius_px: f32,
    /// Target points examined past the current progress index.
    pub lookahead: usize,
}

impl Default for MatchParams {
    fn default() -> Self {
        Self {
            hit_radius_px: 45.0,
            lookahead: 2,
        }
    }
}

/// Strokes of the loaded letter and the user's progress on each.
///
/// `states[i]` always belongs to `strokes[i]`; both are rebuilt from scratch
/// when a letter loads.
#[derive(Debug, Clone)]
pub struct LetterSession {
    strokes: Vec<Stroke>,
    states: Vec<StrokeState>,
}

impl LetterSession {
    pub fn new(strokes: Vec<Stroke>) -> Self {
        let states = vec![StrokeState::default(); strokes.len()];
        Self { strokes, states }
    }

    /// Generate every stroke of a glyph from its instructions.
    pub fn from_instructions(instructions: &[StrokeInstruction]) -> Self {
        Self::new(instructions.iter().map(generate).collect())
    }

    pub fn strokes(&self) -> &[Stroke] {
        &self.strokes
    }

    pub fn states(&self) -> &[StrokeState] {
        &self.states
    }

    pub fn stroke_count(&self) -> usize {
        self.strokes.len()
    }

    /// First stroke not yet done, in authored order.
    pub fn active_stroke(&self) -> Option<usize> {
        self.states.iter().position(|s| !s.done)
    }

    pub fn is_complete(&self) -> bool {
        self.states.iter().all(|s| s.done)
    }

    /// Fraction (0..=1) of the stroke's samples matched so far.
    pub fn progress_fraction(&self, stroke: usize) -> f32 {
        match (self.strokes.get(stroke), self.states.get(stroke)) {
            (Some(points), Some(state)) => state.progress_index as f32 / points.len() as f32,
            _ => 0.0,
        }
    }

    /// Forget all progress.
    pub fn reset(&mut self) {
        for state in &mut self.states {
            *state = StrokeState::default();
        }
    }

    /// Match one input sample (device pixels) against the open strokes.
    ///
    /// Outside `Loose` mode only the first open stroke is considered, so
    /// strokes must be traced in authored order. In `Loose` mode every open
    /// stroke is tested against the same sample independently.
    pub fn check_point(
        &mut self,
        position: Vec2,
        mode: GuidanceMode,
        mapper: &LetterBox,
        params: &MatchParams,
    ) -> CheckOutcome {
        let was_complete = self.is_complete();
        let mut advanced = false;

        if mode == GuidanceMode::Loose {
            for idx in 0..self.strokes.len() {
                if !self.states[idx].done {
                    advanced |= self.advance_stroke(idx, position, mapper, params);
                }
            }
        } else if let Some(idx) = self.active_stroke() {
            advanced = self.advance_stroke(idx, position, mapper, params);
        }

        CheckOutcome {
            advanced,
            letter_complete: advanced && !was_complete && self.is_complete(),
        }
    }

    /// Try to move one stroke forward. Only indices at or past the current
    /// progress are candidates, so progress never moves backward.
    fn advance_stroke(
        &mut self,
        idx: usize,
        position: Vec2,
        mapper: &LetterBox,
        params: &MatchParams,
    ) -> bool {
        let points = self.strokes[idx].points();
        let state = &mut self.states[idx];
        let from = state.progress_index;
        if from >= points.len() {
            return false;
        }
        let to = (from + params.lookahead).min(points.len() - 1);

        for (i, &target) in points.iter().enumerate().take(to + 1).skip(from) {
            if position.distance(mapper.to_pixels(target)) < params.hit_radius_px {
                state.progress_index = i + 1;
                if state.progress_index >= points.len() {
                    state.done = true;
                }
                return true;
            }
        }
        false
    }
}
