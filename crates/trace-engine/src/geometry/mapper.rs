use glam::Vec2;

use crate::api::config::TraceConfig;

/// Side length of the normalized letter plane.
pub const PLANE_SIZE: f32 = 100.0;

/// Fixed-aspect box the letter plane is drawn into, fitted to the viewport.
///
/// Rendering and hit-testing both go through the same box so what the user
/// sees and what they are matched against can never drift apart. Refit on
/// every viewport resize.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LetterBox {
    /// Top-left corner of the box in device pixels.
    pub origin: Vec2,
    /// Box width and height in device pixels.
    pub size: Vec2,
    /// Viewport the box was fitted to.
    pub viewport: Vec2,
}

impl LetterBox {
    /// Fit a box of the given aspect ratio (width / height) into the viewport.
    ///
    /// The box takes the full width minus `padding` on both sides, unless that
    /// would make it taller than the viewport minus `vertical_margin`, in which
    /// case the height is capped and the width follows from the aspect ratio.
    pub fn fit_with(
        viewport_width: f32,
        viewport_height: f32,
        aspect_ratio: f32,
        padding: f32,
        vertical_margin: f32,
    ) -> Self {
        let mut width = viewport_width - padding * 2.0;
        let mut height = width / aspect_ratio;

        if height > viewport_height - vertical_margin {
            height = viewport_height - vertical_margin;
            width = height * aspect_ratio;
        }

        let size = Vec2::new(width, height);
        let viewport = Vec2::new(viewport_width, viewport_height);
        Self {
            origin: (viewport - size) / 2.0,
            size,
            viewport,
        }
    }

    /// Fit using the letter-box geometry from the config.
    pub fn fit(viewport_width: f32, viewport_height: f32, config: &TraceConfig) -> Self {
        Self::fit_with(
            viewport_width,
            viewport_height,
            config.aspect_ratio,
            config.padding,
            config.vertical_margin,
        )
    }

    /// Plane point (0–100 on both axes) to device pixels.
    #[inline]
    pub fn to_pixels(&self, point: Vec2) -> Vec2 {
        self.origin + point / PLANE_SIZE * self.size
    }

    /// Device pixels back to plane coordinates.
    #[inline]
    pub fn from_pixels(&self, pixel: Vec2) -> Vec2 {
        (pixel - self.origin) / self.size * PLANE_SIZE
    }

    /// Map a whole point sequence.
    pub fn map_points(&self, points: &[Vec2]) -> Vec<Vec2> {
        points.iter().map(|&p| self.to_pixels(p)).collect()
    }

    /// Whether the box has a usable (positive) area.
    pub fn is_usable(&self) -> bool {
        self.size.x > 0.0 && self.size.y > 0.0
    }
}

impl Default for LetterBox {
    fn default() -> Self {
        let config = TraceConfig::default();
        // A portrait phone-sized canvas until the host reports its size.
        Self::fit(400.0, 600.0, &config)
    }
}
