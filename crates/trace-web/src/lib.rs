use std::cell::RefCell;

use wasm_bindgen::prelude::*;

use trace_engine::{GameContent, TraceConfig};

pub mod narrator;
pub mod runner;

pub use narrator::SpeechNarrator;
pub use runner::TraceRunner;

thread_local! {
    static RUNNER: RefCell<Option<TraceRunner<SpeechNarrator>>> = RefCell::new(None);
}

/// Run `f` against the live runner. Calls before `tracer_init()`, or while
/// the runner is already borrowed further up the stack, are dropped.
fn with_runner<R>(f: impl FnOnce(&mut TraceRunner<SpeechNarrator>) -> R) -> Option<R> {
    RUNNER.with(|cell| {
        let Ok(mut borrow) = cell.try_borrow_mut() else {
            log::warn!("tracer busy, call dropped");
            return None;
        };
        match borrow.as_mut() {
            Some(runner) => Some(f(runner)),
            None => {
                log::warn!("tracer not initialized. Call tracer_init() first.");
                None
            }
        }
    })
}

/// Load glyph content and (optionally empty) config JSON. Returns `false`
/// when either fails to parse.
#[wasm_bindgen]
pub fn tracer_init(content_json: &str, config_json: &str) -> bool {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);

    let content = match GameContent::from_json(content_json) {
        Ok(content) => content,
        Err(e) => {
            log::error!("invalid content: {e}");
            return false;
        }
    };
    let config = if config_json.trim().is_empty() {
        TraceConfig::default()
    } else {
        match TraceConfig::from_json(config_json) {
            Ok(config) => config,
            Err(e) => {
                log::error!("invalid config: {e}");
                return false;
            }
        }
    };

    let narrator = SpeechNarrator::new(config.voice_rate);
    let runner = TraceRunner::new(content, config, narrator);
    RUNNER.with(|cell| {
        *cell.borrow_mut() = Some(runner);
    });
    log::info!("tracer: initialized");
    true
}

#[wasm_bindgen]
pub fn tracer_resize(width: f32, height: f32) {
    with_runner(|r| r.resize(width, height));
}

#[wasm_bindgen]
pub fn tracer_set_mode(mode: &str) -> bool {
    with_runner(|r| r.set_mode(mode)).unwrap_or(false)
}

#[wasm_bindgen]
pub fn tracer_start_word(word: &str) {
    with_runner(|r| r.start_word(word));
}

#[wasm_bindgen]
pub fn tracer_back_to_menu() {
    with_runner(|r| r.back_to_menu());
}

#[wasm_bindgen]
pub fn tracer_tick(dt: f32) {
    with_runner(|r| r.tick(dt));
}

// ---- Input ----

#[wasm_bindgen]
pub fn tracer_pointer_down(x: f32, y: f32) {
    with_runner(|r| r.pointer_down(x, y));
}

#[wasm_bindgen]
pub fn tracer_pointer_move(x: f32, y: f32) {
    with_runner(|r| r.pointer_move(x, y));
}

#[wasm_bindgen]
pub fn tracer_pointer_up(x: f32, y: f32) {
    with_runner(|r| r.pointer_up(x, y));
}

/// Called from the speech `onend` handler.
#[wasm_bindgen]
pub fn tracer_narration_finished(ticket: u32) {
    with_runner(|r| r.narration_finished(ticket));
}

// ---- Frame accessors ----

#[wasm_bindgen]
pub fn tracer_frame_ptr() -> *const f32 {
    with_runner(|r| r.frame_ptr()).unwrap_or(std::ptr::null())
}

#[wasm_bindgen]
pub fn tracer_frame_len() -> u32 {
    with_runner(|r| r.frame_len()).unwrap_or(0)
}

#[wasm_bindgen]
pub fn tracer_primitive_count() -> u32 {
    with_runner(|r| r.primitive_count()).unwrap_or(0)
}

// ---- JSON accessors ----

#[wasm_bindgen]
pub fn tracer_take_events() -> String {
    with_runner(|r| r.take_events_json()).unwrap_or_else(|| "[]".to_string())
}

#[wasm_bindgen]
pub fn tracer_progress() -> String {
    with_runner(|r| r.progress_json()).unwrap_or_else(|| "[]".to_string())
}

// ---- Word list ----

#[wasm_bindgen]
pub fn tracer_words() -> String {
    with_runner(|r| r.words_json()).unwrap_or_else(|| "[]".to_string())
}

#[wasm_bindgen]
pub fn tracer_add_word(word: &str) -> bool {
    with_runner(|r| r.add_word(word)).unwrap_or(false)
}

#[wasm_bindgen]
pub fn tracer_remove_word(word: &str) -> bool {
    with_runner(|r| r.remove_word(word)).unwrap_or(false)
}

#[wasm_bindgen]
pub fn tracer_load_custom_words(json: &str) -> bool {
    with_runner(|r| r.load_custom_words(json)).unwrap_or(false)
}

#[wasm_bindgen]
pub fn tracer_custom_words() -> String {
    with_runner(|r| r.custom_words_json()).unwrap_or_else(|| "[]".to_string())
}
