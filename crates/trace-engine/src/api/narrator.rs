use super::types::NarrationTicket;

/// Audio collaborator. Both calls are fire-and-forget from the tracer's side.
pub trait Narrator {
    /// Play the cue for a just-completed letter.
    fn play_letter(&mut self, ch: char);

    /// Start speaking `text`. Return `false` if speech is unavailable; the
    /// tracer then falls back to a fixed delay. When `true` is returned the
    /// host must eventually hand `ticket` to `WordTracer::narration_finished`.
    fn speak(&mut self, text: &str, ticket: NarrationTicket) -> bool;
}

/// No audio at all: letter cues are dropped and speech is never available.
#[derive(Debug, Clone, Copy, Default)]
pub struct SilentNarrator;

impl Narrator for SilentNarrator {
    fn play_letter(&mut self, _ch: char) {}

    fn speak(&mut self, _text: &str, _ticket: NarrationTicket) -> bool {
        false
    }
}

impl<N: Narrator + ?Sized> Narrator for Box<N> {
    fn play_letter(&mut self, ch: char) {
        (**self).play_letter(ch);
    }

    fn speak(&mut self, text: &str, ticket: NarrationTicket) -> bool {
        (**self).speak(text, ticket)
    }
}
