pub mod api;
pub mod assets;
pub mod core;
pub mod effects;
pub mod geometry;
pub mod render;
pub mod session;
pub mod tracking;

// Re-export key types at crate root for convenience
pub use api::config::TraceConfig;
pub use api::narrator::{Narrator, SilentNarrator};
pub use api::tracer::WordTracer;
pub use api::types::{GuidanceMode, NarrationTicket, TraceEvent, UnknownMode};
pub use assets::celebration::PhrasePools;
pub use assets::content::GameContent;
pub use assets::glyphs::{GlyphEntry, GlyphPack, GlyphPacks, GlyphSource};
pub use assets::words::{WordCatalog, WordEntry, DEFAULT_WORDS};
pub use crate::core::clock::FrameClock;
pub use crate::core::schedule::{Transition, TransitionSlot, TransitionToken};
pub use effects::{EffectsState, Particle, Rng};
pub use geometry::generate::{generate, Stroke};
pub use geometry::instruction::{ArcDirection, StrokeInstruction};
pub use geometry::mapper::LetterBox;
pub use render::buffer::{FrameBuffer, PrimitiveRecord};
pub use render::primitive::{Color, DrawPrimitive, Frame};
pub use session::{LetterProgress, LetterStatus, SequencerState, WordSequencer, WordSession};
pub use tracking::letter::{CheckOutcome, LetterSession, MatchParams, StrokeState};
pub use tracking::sampler::{InputSampler, PointerEvent};
