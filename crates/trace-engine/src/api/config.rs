use serde::{Deserialize, Serialize};

/// Tuning for the tracer, provided by the host.
///
/// Every field has a default, so a partial JSON object only overrides the
/// fields it names.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TraceConfig {
    /// Hit radius in device pixels for matching a pointer sample to a target point.
    pub hit_radius_px: f32,
    /// Extra target points examined past the current progress index.
    pub lookahead: usize,
    /// On-screen spacing (pixels) of interpolated samples between pointer moves.
    pub sample_step_px: f32,
    /// Pause after a letter is completed before the next letter loads (seconds).
    pub settle_delay: f32,
    /// Pause after the completion narration ends before returning to the menu (seconds).
    pub narration_tail_delay: f32,
    /// Return-to-menu delay used when narration is unavailable (seconds).
    pub fallback_delay: f32,
    /// Duration of one ghost-dot sweep along the active stroke (seconds).
    pub ghost_cycle: f32,
    /// Base radius of the pulsing target marker (pixels).
    pub pulse_radius: f32,
    /// Amplitude of the pulse (pixels).
    pub pulse_amplitude: f32,
    /// Wall-clock divisor of the pulse sine (milliseconds per radian).
    pub pulse_period_ms: f32,
    /// Radius of the ghost dot (pixels).
    pub ghost_radius: f32,
    /// Letter box width / height.
    pub aspect_ratio: f32,
    /// Horizontal padding on each side of the letter box (pixels).
    pub padding: f32,
    /// Total vertical margin around the letter box (pixels).
    pub vertical_margin: f32,
    /// Particles spawned by the word-complete burst.
    pub particle_count: usize,
    /// Fixed timestep for particle integration (seconds).
    pub fixed_dt: f32,
    /// Seed for celebration randomness (message fragments, particles).
    pub seed: u64,
    /// Speech rate passed to the narrator.
    pub voice_rate: f32,
}

impl Default for TraceConfig {
    fn default() -> Self {
        Self {
            hit_radius_px: 45.0,
            lookahead: 2,
            sample_step_px: 5.0,
            settle_delay: 1.0,
            narration_tail_delay: 1.0,
            fallback_delay: 3.0,
            // 0.015 of a cycle per frame at 60 fps
            ghost_cycle: 1.0 / (0.015 * 60.0),
            pulse_radius: 10.0,
            pulse_amplitude: 3.0,
            pulse_period_ms: 200.0,
            ghost_radius: 12.0,
            aspect_ratio: 0.8,
            padding: 20.0,
            vertical_margin: 40.0,
            particle_count: 30,
            fixed_dt: 1.0 / 60.0,
            seed: 42,
            voice_rate: 0.9,
        }
    }
}

impl TraceConfig {
    /// Parse a (possibly partial) config object.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}
