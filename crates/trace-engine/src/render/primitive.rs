use glam::Vec2;
use serde::Serialize;

/// RGBA color, components in 0.0 - 1.0.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl Color {
    pub const fn new(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    /// Opaque color from RGB u8 values (0-255).
    pub const fn rgb8(r: u8, g: u8, b: u8) -> Self {
        Self::rgba8(r, g, b, 1.0)
    }

    /// Color from RGB u8 values with a float alpha, CSS `rgba()` style.
    pub const fn rgba8(r: u8, g: u8, b: u8, a: f32) -> Self {
        Self {
            r: r as f32 / 255.0,
            g: g as f32 / 255.0,
            b: b as f32 / 255.0,
            a,
        }
    }

    pub const fn with_alpha(self, a: f32) -> Self {
        Self { a, ..self }
    }

    pub const WHITE: Self = Self::rgb8(255, 255, 255);
    /// Ruled paper top and baseline.
    pub const PAPER_RULE: Self = Self::rgb8(0xa3, 0xc4, 0xdc);
    /// Dashed midline.
    pub const PAPER_MIDLINE: Self = Self::rgb8(0xff, 0xb7, 0xb2);
    /// Wide faint band under each guide path.
    pub const GUIDE_BAND: Self = Self::rgb8(0xe0, 0xe0, 0xe0);
    /// Thin dashed centre line of a guide path.
    pub const GUIDE_DASH: Self = Self::rgb8(0xbb, 0xbb, 0xbb);
    /// Traced progress.
    pub const INK: Self = Self::rgb8(0x4a, 0x90, 0xe2);
    /// Pulsing next-target marker.
    pub const TARGET: Self = Self::rgb8(0xff, 0x57, 0x22);
    /// Ghost pacing dot.
    pub const GHOST: Self = Self::rgba8(255, 87, 34, 0.4);

    pub const CONFETTI: [Self; 4] = [
        Self::rgb8(255, 255, 0),
        Self::rgb8(255, 0, 0),
        Self::rgb8(0, 255, 0),
        Self::rgb8(0, 0, 255),
    ];
}

impl Default for Color {
    fn default() -> Self {
        Self::WHITE
    }
}

/// Dash pattern: painted length followed by gap length, in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Dash {
    pub on: f32,
    pub off: f32,
}

impl Dash {
    pub const fn even(len: f32) -> Self {
        Self { on: len, off: len }
    }
}

/// Dot outline.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Outline {
    pub color: Color,
    pub width: f32,
}

/// One thing for the host renderer to draw, in device pixels.
/// Lines use round caps and joins.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum DrawPrimitive {
    /// Open polyline through `points`.
    Polyline {
        #[serde(serialize_with = "points_as_pairs")]
        points: Vec<Vec2>,
        color: Color,
        width: f32,
        dash: Option<Dash>,
    },
    /// Filled circle.
    Dot {
        #[serde(serialize_with = "point_as_pair")]
        center: Vec2,
        radius: f32,
        fill: Color,
        outline: Option<Outline>,
    },
    /// Full-width horizontal rule at height `y`.
    Rule {
        y: f32,
        color: Color,
        width: f32,
        dash: Option<Dash>,
    },
}

impl DrawPrimitive {
    pub fn polyline(points: Vec<Vec2>, color: Color, width: f32) -> Self {
        Self::Polyline {
            points,
            color,
            width,
            dash: None,
        }
    }

    pub fn dot(center: Vec2, radius: f32, fill: Color) -> Self {
        Self::Dot {
            center,
            radius,
            fill,
            outline: None,
        }
    }
}

fn point_as_pair<S: serde::Serializer>(p: &Vec2, s: S) -> Result<S::Ok, S::Error> {
    [p.x, p.y].serialize(s)
}

fn points_as_pairs<S: serde::Serializer>(points: &[Vec2], s: S) -> Result<S::Ok, S::Error> {
    s.collect_seq(points.iter().map(|p| [p.x, p.y]))
}

/// Ordered draw list for one frame, back to front.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Frame {
    pub primitives: Vec<DrawPrimitive>,
}

impl Frame {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, primitive: DrawPrimitive) {
        self.primitives.push(primitive);
    }

    pub fn len(&self) -> usize {
        self.primitives.len()
    }

    pub fn is_empty(&self) -> bool {
        self.primitives.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &DrawPrimitive> {
        self.primitives.iter()
    }
}

impl Extend<DrawPrimitive> for Frame {
    fn extend<I: IntoIterator<Item = DrawPrimitive>>(&mut self, iter: I) {
        self.primitives.extend(iter);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rgb8_scales_to_unit_range() {
        let c = Color::rgb8(255, 0, 51);
        assert_eq!(c.r, 1.0);
        assert_eq!(c.g, 0.0);
        assert!((c.b - 0.2).abs() < 1e-6);
        assert_eq!(c.a, 1.0);
    }

    #[test]
    fn ghost_is_translucent_target() {
        assert_eq!(Color::GHOST.with_alpha(1.0), Color::TARGET);
    }

    #[test]
    fn dot_serializes_with_kind_tag() {
        let json = serde_json::to_value(DrawPrimitive::dot(Vec2::new(1.0, 2.0), 3.0, Color::WHITE)).unwrap();
        assert_eq!(json["kind"], "dot");
        assert_eq!(json["center"], serde_json::json!([1.0, 2.0]));
        assert!(json["outline"].is_null());
    }
}
