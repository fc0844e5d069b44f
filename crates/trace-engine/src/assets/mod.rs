pub mod celebration;
pub mod content;
pub mod glyphs;
pub mod words;
