//! Expands stroke instructions into evenly spaced sample points.

use std::f32::consts::PI;

use glam::Vec2;

use super::instruction::{ArcDirection, StrokeInstruction};

/// Target spacing between consecutive samples, in plane units.
pub const DENSITY: f32 = 4.0;

/// Sample points of one stroke in traversal order (plane coordinates).
/// Always holds at least two points.
#[derive(Debug, Clone, PartialEq)]
pub struct Stroke {
    points: Vec<Vec2>,
}

impl Stroke {
    /// Wrap sample points, padding degenerate input up to two points.
    pub fn from_points(mut points: Vec<Vec2>) -> Self {
        match points.len() {
            0 => points.extend([Vec2::ZERO, Vec2::ZERO]),
            1 => points.push(points[0]),
            _ => {}
        }
        Self { points }
    }

    pub fn points(&self) -> &[Vec2] {
        &self.points
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn first(&self) -> Vec2 {
        self.points[0]
    }

    pub fn last(&self) -> Vec2 {
        self.points[self.points.len() - 1]
    }

    /// Position `t` (0..=1) of the way along the sample sequence,
    /// interpolated between neighbouring samples.
    pub fn sample_at(&self, t: f32) -> Vec2 {
        let span = (self.points.len() - 1) as f32;
        let float_idx = t.clamp(0.0, 1.0) * span;
        let idx = (float_idx.floor() as usize).min(self.points.len() - 2);
        let frac = float_idx - idx as f32;
        self.points[idx].lerp(self.points[idx + 1], frac)
    }
}

/// Generate the stroke for an instruction at the standard density.
pub fn generate(instruction: &StrokeInstruction) -> Stroke {
    generate_with_density(instruction, DENSITY)
}

/// Generate the stroke for an instruction at a custom sample spacing.
pub fn generate_with_density(instruction: &StrokeInstruction, density: f32) -> Stroke {
    let mut points = Vec::new();
    push_points(instruction, density, &mut points);
    Stroke::from_points(points)
}

fn push_points(instruction: &StrokeInstruction, density: f32, out: &mut Vec<Vec2>) {
    match instruction {
        StrokeInstruction::Line { start, end } => push_line(*start, *end, density, out),
        StrokeInstruction::Arc {
            center_x,
            center_y,
            radius_x,
            radius_y,
            start_deg,
            end_deg,
            direction,
        } => push_arc(
            Vec2::new(*center_x, *center_y),
            Vec2::new(*radius_x, *radius_y),
            *start_deg,
            *end_deg,
            *direction,
            density,
            out,
        ),
        StrokeInstruction::Composite { parts } => {
            for part in parts {
                push_points(part, density, out);
            }
        }
    }
}

/// Most segments a single line or arc may expand into.
pub const MAX_SEGMENTS: usize = 4096;

/// Number of segments needed to cover `length` at `density`, in
/// `1..=MAX_SEGMENTS`.
fn segment_count(length: f32, density: f32) -> usize {
    let steps = (length / density).ceil();
    if steps.is_finite() && steps >= 1.0 {
        (steps as usize).min(MAX_SEGMENTS)
    } else {
        1
    }
}

fn push_line(start: Vec2, end: Vec2, density: f32, out: &mut Vec<Vec2>) {
    let steps = segment_count(start.distance(end), density);
    for i in 0..=steps {
        out.push(start.lerp(end, i as f32 / steps as f32));
    }
}

fn push_arc(
    center: Vec2,
    radius: Vec2,
    start_deg: f32,
    end_deg: f32,
    direction: ArcDirection,
    density: f32,
    out: &mut Vec<Vec2>,
) {
    let ccw = direction == ArcDirection::Ccw;
    let mut sweep = (end_deg - start_deg).abs();
    let mut end_deg = end_deg;
    if sweep == 0.0 && ccw {
        // Closed loop: go all the way round toward decreasing angles.
        sweep = 360.0;
        end_deg = start_deg - 360.0;
    }

    // Mean of the radii stands in for the elliptic arc length.
    let arc_length = (sweep / 180.0) * PI * ((radius.x + radius.y) / 2.0);
    let steps = segment_count(arc_length, density);

    let first = out.len();
    for i in 0..=steps {
        let mut factor = i as f32 / steps as f32;
        if ccw {
            factor = 1.0 - factor;
        }
        let theta = (start_deg + (end_deg - start_deg) * factor).to_radians();
        out.push(center + radius * Vec2::new(theta.cos(), theta.sin()));
    }
    if ccw {
        out[first..].reverse();
    }
}
