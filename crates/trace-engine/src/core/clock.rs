/// Per-frame timing for the tracer.
///
/// Tracks wall-clock time (drives the pulse), the repeating ghost-dot phase,
/// and a fixed-timestep accumulator for particle integration so effects run
/// at the same speed regardless of the host's frame rate.
#[derive(Debug, Clone)]
pub struct FrameClock {
    /// Seconds since the clock was created.
    elapsed: f64,
    /// Position of the ghost dot along its cycle, in [0, 1).
    ghost_phase: f32,
    /// Seconds per ghost cycle.
    ghost_cycle: f32,
    /// The fixed delta time per effects step.
    fixed_dt: f32,
    /// Accumulated time not yet consumed by fixed steps.
    accumulator: f32,
}

impl FrameClock {
    /// Most fixed steps a single frame may run; longer stalls are dropped.
    pub const MAX_STEPS: u32 = 10;

    pub fn new(fixed_dt: f32, ghost_cycle: f32) -> Self {
        Self {
            elapsed: 0.0,
            ghost_phase: 0.0,
            ghost_cycle: ghost_cycle.max(f32::EPSILON),
            fixed_dt: fixed_dt.max(f32::EPSILON),
            accumulator: 0.0,
        }
    }

    /// Advance by one frame. Returns the number of fixed steps to run.
    pub fn advance(&mut self, frame_dt: f32) -> u32 {
        let frame_dt = frame_dt.max(0.0);
        self.elapsed += frame_dt as f64;
        self.ghost_phase = (self.ghost_phase + frame_dt / self.ghost_cycle).fract();

        self.accumulator = (self.accumulator + frame_dt).min(self.fixed_dt * Self::MAX_STEPS as f32);
        let steps = (self.accumulator / self.fixed_dt) as u32;
        self.accumulator -= steps as f32 * self.fixed_dt;
        steps
    }

    /// Wall-clock milliseconds since creation.
    pub fn millis(&self) -> f64 {
        self.elapsed * 1000.0
    }

    pub fn ghost_phase(&self) -> f32 {
        self.ghost_phase
    }

    pub fn fixed_dt(&self) -> f32 {
        self.fixed_dt
    }
}
