//! Flat float buffer of a frame, read by the host renderer.
//!
//! Layout (all values f32):
//! ```text
//! [PrimitiveRecord: 16 floats][vertex run: vertex_count × 2 floats]
//! [PrimitiveRecord: 16 floats][vertex run] ...
//! ```
//! Only polylines carry a vertex run; dots and rules have `vertex_count = 0`.
//! Must stay in sync with the host's frame reader.

use bytemuck::{Pod, Zeroable};

use super::primitive::{Color, Dash, DrawPrimitive, Frame, Outline};

pub const KIND_POLYLINE: f32 = 1.0;
pub const KIND_DOT: f32 = 2.0;
pub const KIND_RULE: f32 = 3.0;

/// Fixed-size header of one primitive. 16 floats = 64 bytes.
#[repr(C)]
#[derive(Debug, Clone, Copy, Default, PartialEq, Pod, Zeroable)]
pub struct PrimitiveRecord {
    pub kind: f32,
    /// Dot centre x; unused otherwise.
    pub x: f32,
    /// Dot centre y or rule height.
    pub y: f32,
    /// Line width or dot radius.
    pub size: f32,
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
    /// Dash lengths, both 0 for solid lines.
    pub dash_on: f32,
    pub dash_off: f32,
    /// Dot outline width, 0 when the dot has no outline.
    pub outline_width: f32,
    pub outline_r: f32,
    pub outline_g: f32,
    pub outline_b: f32,
    pub outline_a: f32,
    /// Number of (x, y) pairs following this record.
    pub vertex_count: f32,
}

impl PrimitiveRecord {
    pub const FLOATS: usize = 16;
    pub const STRIDE_BYTES: usize = Self::FLOATS * 4;

    fn with_color(mut self, color: Color) -> Self {
        self.r = color.r;
        self.g = color.g;
        self.b = color.b;
        self.a = color.a;
        self
    }

    fn with_dash(mut self, dash: Option<Dash>) -> Self {
        if let Some(dash) = dash {
            self.dash_on = dash.on;
            self.dash_off = dash.off;
        }
        self
    }

    fn with_outline(mut self, outline: Option<Outline>) -> Self {
        if let Some(outline) = outline {
            self.outline_width = outline.width;
            self.outline_r = outline.color.r;
            self.outline_g = outline.color.g;
            self.outline_b = outline.color.b;
            self.outline_a = outline.color.a;
        }
        self
    }
}

/// Reusable flat buffer; rebuilt every frame without reallocating.
#[derive(Debug, Default)]
pub struct FrameBuffer {
    data: Vec<f32>,
    primitive_count: usize,
}

impl FrameBuffer {
    pub fn new() -> Self {
        Self {
            data: Vec::with_capacity(4096),
            primitive_count: 0,
        }
    }

    /// Replace the buffer contents with `frame`.
    pub fn rebuild(&mut self, frame: &Frame) {
        self.data.clear();
        self.primitive_count = frame.len();

        for primitive in frame.iter() {
            match primitive {
                DrawPrimitive::Polyline {
                    points,
                    color,
                    width,
                    dash,
                } => {
                    let record = PrimitiveRecord {
                        kind: KIND_POLYLINE,
                        size: *width,
                        vertex_count: points.len() as f32,
                        ..Default::default()
                    }
                    .with_color(*color)
                    .with_dash(*dash);
                    self.push_record(record);
                    self.data.extend_from_slice(bytemuck::cast_slice(points.as_slice()));
                }
                DrawPrimitive::Dot {
                    center,
                    radius,
                    fill,
                    outline,
                } => {
                    let record = PrimitiveRecord {
                        kind: KIND_DOT,
                        x: center.x,
                        y: center.y,
                        size: *radius,
                        ..Default::default()
                    }
                    .with_color(*fill)
                    .with_outline(*outline);
                    self.push_record(record);
                }
                DrawPrimitive::Rule {
                    y,
                    color,
                    width,
                    dash,
                } => {
                    let record = PrimitiveRecord {
                        kind: KIND_RULE,
                        y: *y,
                        size: *width,
                        ..Default::default()
                    }
                    .with_color(*color)
                    .with_dash(*dash);
                    self.push_record(record);
                }
            }
        }
    }

    fn push_record(&mut self, record: PrimitiveRecord) {
        self.data.extend_from_slice(bytemuck::cast_slice(&[record]));
    }

    pub fn as_slice(&self) -> &[f32] {
        &self.data
    }

    pub fn ptr(&self) -> *const f32 {
        self.data.as_ptr()
    }

    /// Length in floats.
    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    pub fn primitive_count(&self) -> usize {
        self.primitive_count
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec2;

    #[test]
    fn record_is_sixteen_floats() {
        assert_eq!(std::mem::size_of::<PrimitiveRecord>(), PrimitiveRecord::STRIDE_BYTES);
    }

    #[test]
    fn polyline_is_followed_by_its_vertices() {
        let mut frame = Frame::new();
        frame.push(DrawPrimitive::polyline(
            vec![Vec2::new(1.0, 2.0), Vec2::new(3.0, 4.0)],
            Color::INK,
            25.0,
        ));
        frame.push(DrawPrimitive::dot(Vec2::new(9.0, 8.0), 5.0, Color::TARGET));

        let mut buf = FrameBuffer::new();
        buf.rebuild(&frame);

        let data = buf.as_slice();
        assert_eq!(buf.primitive_count(), 2);
        assert_eq!(data.len(), PrimitiveRecord::FLOATS * 2 + 4);
        assert_eq!(data[0], KIND_POLYLINE);
        assert_eq!(data[3], 25.0);
        assert_eq!(data[15], 2.0);
        assert_eq!(&data[16..20], &[1.0, 2.0, 3.0, 4.0]);

        let dot = &data[20..36];
        assert_eq!(dot[0], KIND_DOT);
        assert_eq!((dot[1], dot[2], dot[3]), (9.0, 8.0, 5.0));
        assert_eq!(dot[15], 0.0);
    }

    #[test]
    fn rebuild_replaces_previous_contents() {
        let mut frame = Frame::new();
        frame.push(DrawPrimitive::Rule {
            y: 10.0,
            color: Color::PAPER_MIDLINE,
            width: 2.0,
            dash: Some(Dash::even(15.0)),
        });
        let mut buf = FrameBuffer::new();
        buf.rebuild(&frame);
        buf.rebuild(&frame);
        assert_eq!(buf.len(), PrimitiveRecord::FLOATS);
        assert_eq!(buf.as_slice()[8], 15.0);

        buf.rebuild(&Frame::new());
        assert!(buf.is_empty());
    }
}
