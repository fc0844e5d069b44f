use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{SpeechSynthesis, SpeechSynthesisUtterance};

use trace_engine::{NarrationTicket, Narrator};

/// Narration through the browser's `speechSynthesis`.
///
/// Each new utterance cancels whatever is still being spoken. The
/// completion message reports back through `tracer_narration_finished`
/// once the browser is done with it.
#[derive(Debug, Clone, Copy)]
pub struct SpeechNarrator {
    rate: f32,
}

impl SpeechNarrator {
    pub fn new(rate: f32) -> Self {
        Self { rate }
    }

    fn synthesis() -> Option<SpeechSynthesis> {
        web_sys::window()?.speech_synthesis().ok()
    }

    fn utterance(&self, text: &str) -> Option<SpeechSynthesisUtterance> {
        let utterance = SpeechSynthesisUtterance::new_with_text(text).ok()?;
        utterance.set_rate(self.rate);
        Some(utterance)
    }
}

impl Narrator for SpeechNarrator {
    fn play_letter(&mut self, ch: char) {
        let Some(synth) = Self::synthesis() else {
            return;
        };
        let Some(utterance) = self.utterance(&ch.to_uppercase().to_string()) else {
            return;
        };
        synth.cancel();
        synth.speak(&utterance);
    }

    fn speak(&mut self, text: &str, ticket: NarrationTicket) -> bool {
        let Some(synth) = Self::synthesis() else {
            log::info!("speech synthesis unavailable");
            return false;
        };
        let Some(utterance) = self.utterance(text) else {
            return false;
        };

        // An interrupted utterance fires `onerror` instead of `onend`; the
        // tracer accepts whichever arrives first.
        let on_end = Closure::once_into_js(move || crate::tracer_narration_finished(ticket.0));
        let on_error = Closure::once_into_js(move || crate::tracer_narration_finished(ticket.0));
        utterance.set_onend(Some(on_end.unchecked_ref::<js_sys::Function>()));
        utterance.set_onerror(Some(on_error.unchecked_ref::<js_sys::Function>()));

        synth.cancel();
        synth.speak(&utterance);
        true
    }
}
