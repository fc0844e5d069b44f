//! Assembles the full draw list for one frame.

use glam::Vec2;

use crate::api::types::GuidanceMode;
use crate::effects::EffectsState;
use crate::geometry::mapper::LetterBox;
use crate::tracking::letter::LetterSession;

use super::guidance::{self, GuidanceStyle};
use super::primitive::{Color, Dash, DrawPrimitive, Frame};

/// Width of the traced ink.
pub const INK_WIDTH: f32 = 25.0;

/// Everything a frame is built from, borrowed from the tracer.
pub struct FrameInputs<'a> {
    pub letter: Option<&'a LetterSession>,
    pub mode: GuidanceMode,
    pub ghost_phase: f32,
    pub clock_ms: f64,
    pub mapper: &'a LetterBox,
    pub style: &'a GuidanceStyle,
    pub effects: &'a EffectsState,
}

/// Paper, guides, ink, markers, then confetti on top.
pub fn build_frame(inputs: &FrameInputs<'_>) -> Frame {
    let mut frame = Frame::new();
    frame.extend(paper(inputs.mapper));

    if let Some(letter) = inputs.letter {
        frame.extend(guidance::guide_paths(letter, inputs.mode, inputs.mapper));
        frame.extend(ink(letter, inputs.mapper));
        frame.extend(guidance::markers(
            letter,
            inputs.mode,
            inputs.ghost_phase,
            inputs.clock_ms,
            inputs.mapper,
            inputs.style,
        ));
    }

    frame.extend(inputs.effects.primitives());
    frame
}

/// Ruled writing lines at the top, middle and bottom of the letter plane.
pub fn paper(mapper: &LetterBox) -> [DrawPrimitive; 3] {
    let y = |plane_y: f32| mapper.to_pixels(Vec2::new(0.0, plane_y)).y;
    [
        DrawPrimitive::Rule {
            y: y(0.0),
            color: Color::PAPER_RULE,
            width: 2.0,
            dash: None,
        },
        DrawPrimitive::Rule {
            y: y(50.0),
            color: Color::PAPER_MIDLINE,
            width: 2.0,
            dash: Some(Dash::even(15.0)),
        },
        DrawPrimitive::Rule {
            y: y(100.0),
            color: Color::PAPER_RULE,
            width: 2.0,
            dash: None,
        },
    ]
}

/// The part of each stroke the user has already traced.
pub fn ink(letter: &LetterSession, mapper: &LetterBox) -> Vec<DrawPrimitive> {
    letter
        .strokes()
        .iter()
        .zip(letter.states())
        .filter_map(|(stroke, state)| {
            let traced = &stroke.points()[..state.progress_index.min(stroke.len())];
            match traced {
                [] => None,
                [only] => Some(DrawPrimitive::dot(mapper.to_pixels(*only), INK_WIDTH / 2.0, Color::INK)),
                _ => Some(DrawPrimitive::polyline(mapper.map_points(traced), Color::INK, INK_WIDTH)),
            }
        })
        .collect()
}
