use glam::Vec2;

/// Pointer events the tracer understands, in device pixels.
/// A single pointer only; the host drops secondary touches.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PointerEvent {
    /// A touch/click began.
    Down { x: f32, y: f32 },
    /// The touch/cursor moved.
    Move { x: f32, y: f32 },
    /// The touch/click ended.
    Up { x: f32, y: f32 },
}

/// Turns raw pointer events into a dense stream of samples.
///
/// Between two move events the sampler emits intermediate points every
/// `step_px` pixels so a fast swipe cannot jump over a target point.
#[derive(Debug, Clone)]
pub struct InputSampler {
    step_px: f32,
    drawing: bool,
    last: Option<Vec2>,
}

impl InputSampler {
    /// Most samples a single move event may produce.
    pub const MAX_SAMPLES_PER_MOVE: usize = 2048;

    pub fn new(step_px: f32) -> Self {
        Self {
            step_px: step_px.max(f32::EPSILON),
            drawing: false,
            last: None,
        }
    }

    pub fn is_drawing(&self) -> bool {
        self.drawing
    }

    /// Feed one event; every sample it produces goes to `feed`, in order.
    pub fn handle(&mut self, event: PointerEvent, mut feed: impl FnMut(Vec2)) {
        match event {
            PointerEvent::Down { x, y } => {
                let pos = Vec2::new(x, y);
                self.drawing = true;
                self.last = Some(pos);
                feed(pos);
            }
            PointerEvent::Move { x, y } => {
                if !self.drawing {
                    return;
                }
                let pos = Vec2::new(x, y);
                if let Some(last) = self.last {
                    let steps = Self::step_count(last.distance(pos), self.step_px);
                    for i in 1..=steps {
                        feed(last.lerp(pos, i as f32 / steps as f32));
                    }
                } else {
                    feed(pos);
                }
                self.last = Some(pos);
            }
            PointerEvent::Up { .. } => self.cancel(),
        }
    }

    /// Interpolated samples for a move of `distance` pixels, in
    /// `1..=MAX_SAMPLES_PER_MOVE`.
    fn step_count(distance: f32, step_px: f32) -> usize {
        let steps = (distance / step_px).ceil();
        if steps.is_finite() && steps >= 1.0 {
            (steps as usize).min(Self::MAX_SAMPLES_PER_MOVE)
        } else {
            1
        }
    }

    /// Stop drawing without touching tracker progress.
    pub fn cancel(&mut self) {
        self.drawing = false;
        self.last = None;
    }
}

impl Default for InputSampler {
    fn default() -> Self {
        Self::new(5.0)
    }
}
