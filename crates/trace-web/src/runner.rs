use serde::Serialize;

use trace_engine::{
    FrameBuffer, GameContent, GlyphPacks, GuidanceMode, NarrationTicket, Narrator, TraceConfig,
    WordCatalog, WordTracer,
};

/// Owns the tracer plus the state the page reads back every frame.
///
/// `trace-web` keeps one of these in a `thread_local!` and exports free
/// functions over it, because wasm-bindgen cannot export generic structs.
pub struct TraceRunner<N: Narrator> {
    tracer: WordTracer<GlyphPacks, N>,
    frame_buffer: FrameBuffer,
    catalog: WordCatalog,
}

impl<N: Narrator> TraceRunner<N> {
    pub fn new(content: GameContent, config: TraceConfig, narrator: N) -> Self {
        let pools = content.phrase_pools();
        let tracer = WordTracer::new(content.packs, narrator, config).with_pools(pools);
        let mut runner = Self {
            tracer,
            frame_buffer: FrameBuffer::new(),
            catalog: WordCatalog::new(),
        };
        runner.rebuild_frame();
        runner
    }

    pub fn tracer(&self) -> &WordTracer<GlyphPacks, N> {
        &self.tracer
    }

    pub fn resize(&mut self, width: f32, height: f32) {
        self.tracer.resize(width, height);
        self.rebuild_frame();
    }

    pub fn set_mode(&mut self, name: &str) -> bool {
        match name.parse::<GuidanceMode>() {
            Ok(mode) => {
                self.tracer.set_mode(mode);
                true
            }
            Err(e) => {
                log::warn!("{e}");
                false
            }
        }
    }

    pub fn start_word(&mut self, word: &str) {
        self.tracer.start_word(word);
        self.rebuild_frame();
    }

    pub fn back_to_menu(&mut self) {
        self.tracer.back_to_menu();
        self.rebuild_frame();
    }

    pub fn pointer_down(&mut self, x: f32, y: f32) {
        self.tracer.pointer_down(x, y);
    }

    pub fn pointer_move(&mut self, x: f32, y: f32) {
        self.tracer.pointer_move(x, y);
    }

    pub fn pointer_up(&mut self, x: f32, y: f32) {
        self.tracer.pointer_up(x, y);
    }

    /// Advance one host frame and refresh the frame buffer.
    pub fn tick(&mut self, dt: f32) {
        self.tracer.tick(dt);
        self.rebuild_frame();
    }

    pub fn narration_finished(&mut self, ticket: u32) {
        self.tracer.narration_finished(NarrationTicket(ticket));
    }

    fn rebuild_frame(&mut self) {
        self.frame_buffer.rebuild(&self.tracer.frame());
    }

    // ---- Frame buffer accessors for direct memory reads ----

    pub fn frame_ptr(&self) -> *const f32 {
        self.frame_buffer.ptr()
    }

    pub fn frame_len(&self) -> u32 {
        self.frame_buffer.len() as u32
    }

    pub fn primitive_count(&self) -> u32 {
        self.frame_buffer.primitive_count() as u32
    }

    // ---- JSON accessors ----

    pub fn take_events_json(&mut self) -> String {
        to_json(&self.tracer.take_events())
    }

    pub fn progress_json(&self) -> String {
        to_json(&self.tracer.progress())
    }

    pub fn words_json(&self) -> String {
        to_json(&self.catalog.entries())
    }

    // ---- Word list ----

    pub fn add_word(&mut self, raw: &str) -> bool {
        self.catalog.add_custom(raw).is_some()
    }

    pub fn remove_word(&mut self, word: &str) -> bool {
        self.catalog.remove_custom(word)
    }

    /// Replace the custom words with a list saved by the page.
    pub fn load_custom_words(&mut self, json: &str) -> bool {
        match WordCatalog::from_json(json) {
            Ok(catalog) => {
                self.catalog = catalog;
                true
            }
            Err(e) => {
                log::error!("invalid saved word list: {e}");
                false
            }
        }
    }

    pub fn custom_words_json(&self) -> String {
        to_json(&self.catalog.custom_words())
    }
}

fn to_json<T: Serialize + ?Sized>(value: &T) -> String {
    serde_json::to_string(value).unwrap_or_else(|e| {
        log::error!("failed to serialize: {e}");
        "[]".to_string()
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use trace_engine::SilentNarrator;

    const CONTENT: &str = r#"{
        "packs": [
            { "name": "lower", "items": {
                "i": { "strokes": [
                    { "type": "line", "start": [50, 30], "end": [50, 100] }
                ] }
            } }
        ],
        "globalAudio": { "A": ["Hooray"] }
    }"#;

    fn runner() -> TraceRunner<SilentNarrator> {
        let content = GameContent::from_json(CONTENT).unwrap();
        TraceRunner::new(content, TraceConfig::default(), SilentNarrator)
    }

    #[test]
    fn menu_frame_is_paper_only() {
        let r = runner();
        assert_eq!(r.primitive_count(), 3);
        assert!(r.frame_len() > 0);
    }

    #[test]
    fn start_word_reports_events_and_progress() {
        let mut r = runner();
        r.start_word("ii");
        let events: serde_json::Value = serde_json::from_str(&r.take_events_json()).unwrap();
        assert_eq!(events[0]["kind"], "word_started");
        assert_eq!(events[1]["kind"], "letter_loaded");
        assert_eq!(r.take_events_json(), "[]");

        let progress: serde_json::Value = serde_json::from_str(&r.progress_json()).unwrap();
        assert_eq!(progress[0]["status"], "active");
        assert_eq!(progress[1]["status"], "pending");
        assert!(r.primitive_count() > 3);
    }

    #[test]
    fn mode_names_are_checked() {
        let mut r = runner();
        assert!(r.set_mode("loose"));
        assert_eq!(r.tracer().mode(), GuidanceMode::Loose);
        assert!(!r.set_mode("sideways"));
        assert_eq!(r.tracer().mode(), GuidanceMode::Loose);
    }

    #[test]
    fn custom_words_round_trip() {
        let mut r = runner();
        assert!(r.add_word("Zoe"));
        assert!(!r.add_word("Cat"));
        let words: serde_json::Value = serde_json::from_str(&r.words_json()).unwrap();
        let last = &words[words.as_array().map_or(0, |a| a.len()) - 1];
        assert_eq!(last["word"], "Zoe");
        assert_eq!(last["custom"], true);

        let saved = r.custom_words_json();
        assert!(r.remove_word("Zoe"));
        assert!(r.load_custom_words(&saved));
        assert_eq!(r.custom_words_json(), r#"["Zoe"]"#);
        assert!(!r.load_custom_words("not json"));
    }
}
