use glam::Vec2;
use serde::{Deserialize, Serialize};

/// Sweep direction of an arc instruction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ArcDirection {
    #[default]
    Cw,
    Ccw,
}

/// Declarative description of one pen stroke, authored per letter on the
/// 0–100 plane.
///
/// Content JSON uses a `type` tag: `"line"`, `"arc"` or `"complex"`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum StrokeInstruction {
    Line {
        #[serde(with = "point")]
        start: Vec2,
        #[serde(with = "point")]
        end: Vec2,
    },
    Arc {
        #[serde(rename = "cx")]
        center_x: f32,
        #[serde(rename = "cy")]
        center_y: f32,
        #[serde(rename = "rx")]
        radius_x: f32,
        #[serde(rename = "ry")]
        radius_y: f32,
        /// Start angle in degrees (0 = +x, 90 = +y, y pointing down).
        #[serde(rename = "start")]
        start_deg: f32,
        #[serde(rename = "end")]
        end_deg: f32,
        #[serde(default)]
        direction: ArcDirection,
    },
    /// Parts traced one after another as a single stroke.
    #[serde(rename = "complex")]
    Composite { parts: Vec<StrokeInstruction> },
}

impl StrokeInstruction {
    pub fn line(start: Vec2, end: Vec2) -> Self {
        Self::Line { start, end }
    }

    pub fn arc(
        center: Vec2,
        radius: Vec2,
        start_deg: f32,
        end_deg: f32,
        direction: ArcDirection,
    ) -> Self {
        Self::Arc {
            center_x: center.x,
            center_y: center.y,
            radius_x: radius.x,
            radius_y: radius.y,
            start_deg,
            end_deg,
            direction,
        }
    }

    pub fn composite(parts: Vec<StrokeInstruction>) -> Self {
        Self::Composite { parts }
    }
}

/// `Vec2` as a two-element `[x, y]` array.
mod point {
    use glam::Vec2;
    use serde::{Deserialize, Deserializer, Serialize, Serializer};

    pub fn serialize<S: Serializer>(p: &Vec2, s: S) -> Result<S::Ok, S::Error> {
        [p.x, p.y].serialize(s)
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(d: D) -> Result<Vec2, D::Error> {
        let [x, y] = <[f32; 2]>::deserialize(d)?;
        Ok(Vec2::new(x, y))
    }
}
