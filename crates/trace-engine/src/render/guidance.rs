//! Hint geometry for the active letter, per guidance mode.
//!
//! Everything here is a pure function of tracker state, mode and time; it
//! never feeds back into matching.

use crate::api::config::TraceConfig;
use crate::api::types::GuidanceMode;
use crate::geometry::generate::Stroke;
use crate::geometry::mapper::LetterBox;
use crate::tracking::letter::LetterSession;

use super::primitive::{Color, Dash, DrawPrimitive, Outline};

/// Width of the faint band under each guide path.
pub const GUIDE_BAND_WIDTH: f32 = 30.0;
/// Width of the dashed centre line of a guide path.
pub const GUIDE_LINE_WIDTH: f32 = 2.0;

/// Marker sizes and pulse timing.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GuidanceStyle {
    pub pulse_radius: f32,
    pub pulse_amplitude: f32,
    pub pulse_period_ms: f32,
    pub ghost_radius: f32,
}

impl GuidanceStyle {
    pub fn from_config(config: &TraceConfig) -> Self {
        Self {
            pulse_radius: config.pulse_radius,
            pulse_amplitude: config.pulse_amplitude,
            pulse_period_ms: config.pulse_period_ms,
            ghost_radius: config.ghost_radius,
        }
    }

    /// Pulse radius at a wall-clock time, so the rate does not depend on
    /// the frame rate.
    pub fn pulse_at(&self, clock_ms: f64) -> f32 {
        let phase = clock_ms / self.pulse_period_ms.max(f32::EPSILON) as f64;
        self.pulse_radius + phase.sin() as f32 * self.pulse_amplitude
    }
}

impl Default for GuidanceStyle {
    fn default() -> Self {
        Self::from_config(&TraceConfig::default())
    }
}

/// Guide paths followed by markers, back to front.
pub fn render(
    letter: &LetterSession,
    mode: GuidanceMode,
    ghost_phase: f32,
    clock_ms: f64,
    mapper: &LetterBox,
    style: &GuidanceStyle,
) -> Vec<DrawPrimitive> {
    let mut out = guide_paths(letter, mode, mapper);
    out.extend(markers(letter, mode, ghost_phase, clock_ms, mapper, style));
    out
}

/// Faint full-length paths. Drawn under the ink.
pub fn guide_paths(letter: &LetterSession, mode: GuidanceMode, mapper: &LetterBox) -> Vec<DrawPrimitive> {
    if mode == GuidanceMode::Off || letter.active_stroke().is_none() {
        return Vec::new();
    }

    let only_open = mode == GuidanceMode::Loose;
    letter
        .strokes()
        .iter()
        .zip(letter.states())
        .filter(|(_, state)| !(only_open && state.done))
        .flat_map(|(stroke, _)| guide_path(stroke, mapper))
        .collect()
}

fn guide_path(stroke: &Stroke, mapper: &LetterBox) -> [DrawPrimitive; 2] {
    let points = mapper.map_points(stroke.points());
    [
        DrawPrimitive::polyline(points.clone(), Color::GUIDE_BAND, GUIDE_BAND_WIDTH),
        DrawPrimitive::Polyline {
            points,
            color: Color::GUIDE_DASH,
            width: GUIDE_LINE_WIDTH,
            dash: Some(Dash::even(10.0)),
        },
    ]
}

/// Ghost dot and pulsing target on the active stroke. Drawn over the ink.
pub fn markers(
    letter: &LetterSession,
    mode: GuidanceMode,
    ghost_phase: f32,
    clock_ms: f64,
    mapper: &LetterBox,
    style: &GuidanceStyle,
) -> Vec<DrawPrimitive> {
    let (show_ghost, show_pulse) = match mode {
        GuidanceMode::Off | GuidanceMode::Loose => return Vec::new(),
        GuidanceMode::Strict => (false, true),
        GuidanceMode::GhostPlus => (true, true),
    };
    let Some(active) = letter.active_stroke() else {
        return Vec::new();
    };
    let stroke = &letter.strokes()[active];
    let state = letter.states()[active];

    let mut out = Vec::with_capacity(2);
    if show_ghost {
        let at = mapper.to_pixels(stroke.sample_at(ghost_phase));
        out.push(DrawPrimitive::dot(at, style.ghost_radius, Color::GHOST));
    }
    if show_pulse {
        if let Some(&next) = stroke.points().get(state.progress_index) {
            out.push(DrawPrimitive::Dot {
                center: mapper.to_pixels(next),
                radius: style.pulse_at(clock_ms),
                fill: Color::TARGET,
                outline: Some(Outline {
                    color: Color::WHITE,
                    width: 2.0,
                }),
            });
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec2;

    fn unit_box() -> LetterBox {
        LetterBox::fit_with(100.0, 100.0, 1.0, 0.0, 0.0)
    }

    fn two_strokes() -> LetterSession {
        LetterSession::new(vec![
            Stroke::from_points((0..5).map(|i| Vec2::new(10.0 + i as f32 * 4.0, 20.0)).collect()),
            Stroke::from_points((0..5).map(|i| Vec2::new(10.0 + i as f32 * 4.0, 80.0)).collect()),
        ])
    }

    fn finish_first(letter: &mut LetterSession) {
        let mapper = unit_box();
        let points = letter.strokes()[0].points().to_vec();
        for p in points {
            letter.check_point(p, GuidanceMode::Strict, &mapper, &Default::default());
        }
    }

    fn dots(prims: &[DrawPrimitive]) -> Vec<(Vec2, f32, Color)> {
        prims
            .iter()
            .filter_map(|p| match p {
                DrawPrimitive::Dot { center, radius, fill, .. } => Some((*center, *radius, *fill)),
                _ => None,
            })
            .collect()
    }

    fn draw(letter: &LetterSession, mode: GuidanceMode, phase: f32, ms: f64) -> Vec<DrawPrimitive> {
        render(letter, mode, phase, ms, &unit_box(), &GuidanceStyle::default())
    }

    #[test]
    fn off_draws_nothing() {
        assert!(draw(&two_strokes(), GuidanceMode::Off, 0.3, 100.0).is_empty());
    }

    #[test]
    fn loose_draws_paths_only() {
        let prims = draw(&two_strokes(), GuidanceMode::Loose, 0.3, 100.0);
        assert_eq!(prims.len(), 4);
        assert!(dots(&prims).is_empty());
    }

    #[test]
    fn loose_skips_finished_strokes() {
        let mut letter = two_strokes();
        finish_first(&mut letter);
        let prims = draw(&letter, GuidanceMode::Loose, 0.0, 0.0);
        assert_eq!(prims.len(), 2);
    }

    #[test]
    fn strict_adds_pulse_on_next_target() {
        let mut letter = two_strokes();
        let mapper = unit_box();
        letter.check_point(Vec2::new(10.0, 20.0), GuidanceMode::Strict, &mapper, &Default::default());

        let prims = draw(&letter, GuidanceMode::Strict, 0.5, 0.0);
        let dots = dots(&prims);
        assert_eq!(dots.len(), 1);
        // progress 1 → second sample
        assert_eq!(dots[0].0, Vec2::new(14.0, 20.0));
        assert_eq!(dots[0].1, 10.0);
        assert_eq!(dots[0].2, Color::TARGET);
    }

    #[test]
    fn pulse_follows_wall_clock() {
        let style = GuidanceStyle::default();
        let quarter = std::f64::consts::FRAC_PI_2 * 200.0;
        assert!((style.pulse_at(0.0) - 10.0).abs() < 1e-5);
        assert!((style.pulse_at(quarter) - 13.0).abs() < 1e-4);
        assert!((style.pulse_at(3.0 * quarter) - 7.0).abs() < 1e-4);
    }

    #[test]
    fn ghost_plus_adds_ghost_independent_of_progress() {
        let letter = two_strokes();
        let prims = draw(&letter, GuidanceMode::GhostPlus, 0.5, 0.0);
        let dots = dots(&prims);
        assert_eq!(dots.len(), 2);
        assert_eq!(dots[0].2, Color::GHOST);
        assert_eq!(dots[0].0, Vec2::new(18.0, 20.0));
        // Pulse still waits at the very first point.
        assert_eq!(dots[1].0, Vec2::new(10.0, 20.0));
    }

    #[test]
    fn markers_move_to_next_stroke() {
        let mut letter = two_strokes();
        finish_first(&mut letter);
        let dots = dots(&draw(&letter, GuidanceMode::GhostPlus, 0.0, 0.0));
        assert_eq!(dots[0].0, Vec2::new(10.0, 80.0));
        assert_eq!(dots[1].0, Vec2::new(10.0, 80.0));
    }

    #[test]
    fn nothing_when_letter_is_done() {
        let mut letter = LetterSession::new(vec![Stroke::from_points(vec![
            Vec2::new(50.0, 50.0),
            Vec2::new(52.0, 50.0),
        ])]);
        for _ in 0..2 {
            letter.check_point(Vec2::new(52.0, 50.0), GuidanceMode::Strict, &unit_box(), &Default::default());
        }
        assert!(letter.is_complete());
        for mode in GuidanceMode::ALL {
            assert!(draw(&letter, mode, 0.2, 0.0).is_empty(), "{mode}");
        }
    }

    #[test]
    fn rendering_does_not_touch_progress() {
        let letter = two_strokes();
        let before = letter.states().to_vec();
        for step in 0..10 {
            draw(&letter, GuidanceMode::GhostPlus, step as f32 / 10.0, step as f64 * 16.0);
        }
        assert_eq!(letter.states(), before.as_slice());
    }
}
