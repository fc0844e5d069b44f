//! Letter-by-letter progression through a word, and the celebration at the end.

use glam::Vec2;

use crate::api::config::TraceConfig;
use crate::api::narrator::Narrator;
use crate::api::types::{NarrationTicket, TraceEvent};
use crate::assets::celebration::PhrasePools;
use crate::assets::glyphs::GlyphSource;
use crate::core::schedule::{Transition, TransitionSlot};
use crate::effects::EffectsState;
use crate::tracking::letter::LetterSession;

use super::word::{LetterProgress, WordSession};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SequencerState {
    /// No word in progress (menu).
    #[default]
    Idle,
    /// A letter is loaded and accepts input.
    LetterActive,
    /// The letter is finished; waiting out the settle delay.
    LetterComplete,
    /// Every letter is finished; celebrating before returning to the menu.
    WordComplete,
}

/// Things the sequencer needs but does not own, borrowed from the tracer
/// for the duration of one call.
pub struct Collaborators<'a, G: ?Sized, N: ?Sized> {
    pub glyphs: &'a G,
    pub narrator: &'a mut N,
    pub effects: &'a mut EffectsState,
    pub pools: &'a PhrasePools,
    /// Device-pixel centre of the letter box, where the burst starts.
    pub burst_center: Vec2,
}

#[derive(Debug, Clone, Copy)]
struct Timing {
    settle_delay: f32,
    narration_tail_delay: f32,
    fallback_delay: f32,
    particle_count: usize,
}

/// Drives a [`WordSession`] through its letters.
///
/// At most one deferred transition is outstanding at any time, and a word
/// completion waits either for its narration ticket or for the fallback
/// delay, never both.
#[derive(Debug)]
pub struct WordSequencer {
    state: SequencerState,
    word: Option<WordSession>,
    slot: TransitionSlot,
    narration: Option<NarrationTicket>,
    next_ticket: u32,
    events: Vec<TraceEvent>,
    timing: Timing,
}

impl WordSequencer {
    pub fn new(config: &TraceConfig) -> Self {
        Self {
            state: SequencerState::Idle,
            word: None,
            slot: TransitionSlot::new(),
            narration: None,
            next_ticket: 0,
            events: Vec::new(),
            timing: Timing {
                settle_delay: config.settle_delay,
                narration_tail_delay: config.narration_tail_delay,
                fallback_delay: config.fallback_delay,
                particle_count: config.particle_count,
            },
        }
    }

    pub fn state(&self) -> SequencerState {
        self.state
    }

    pub fn word(&self) -> Option<&WordSession> {
        self.word.as_ref()
    }

    /// The letter shown on the canvas, if any.
    pub fn letter(&self) -> Option<&LetterSession> {
        self.word.as_ref().and_then(WordSession::letter)
    }

    /// The letter accepting input. `None` unless a letter is active.
    pub fn active_letter_mut(&mut self) -> Option<&mut LetterSession> {
        if self.state != SequencerState::LetterActive {
            return None;
        }
        self.word.as_mut().and_then(WordSession::letter_mut)
    }

    pub fn progress(&self) -> Vec<LetterProgress> {
        self.word.as_ref().map(WordSession::progress).unwrap_or_default()
    }

    pub fn pending_transition(&self) -> Option<Transition> {
        self.slot.pending()
    }

    pub fn awaiting_narration(&self) -> Option<NarrationTicket> {
        self.narration
    }

    pub fn take_events(&mut self) -> Vec<TraceEvent> {
        std::mem::take(&mut self.events)
    }

    /// Begin a new word, dropping whatever was in progress.
    pub fn start_word<G, N>(&mut self, word: &str, deps: &mut Collaborators<'_, G, N>)
    where
        G: GlyphSource + ?Sized,
        N: Narrator + ?Sized,
    {
        self.abandon();
        log::info!("word started: {word}");
        self.word = Some(WordSession::new(word));
        self.events.push(TraceEvent::WordStarted {
            word: word.to_string(),
        });
        self.load_current(deps);
    }

    /// Leave the current word. Pending transitions and outstanding narration
    /// tickets are invalidated.
    pub fn abandon(&mut self) {
        self.slot.cancel();
        self.narration = None;
        self.word = None;
        self.state = SequencerState::Idle;
    }

    /// The tracker reported the active letter as finished.
    pub fn letter_completed<N: Narrator + ?Sized>(&mut self, narrator: &mut N) {
        if self.state != SequencerState::LetterActive {
            return;
        }
        let Some(word) = &self.word else {
            return;
        };
        let index = word.letter_index();
        let Some(ch) = word.current_char() else {
            return;
        };

        log::debug!("letter {index} ({ch}) complete");
        narrator.play_letter(ch);
        self.events.push(TraceEvent::LetterComplete { index, ch });
        self.state = SequencerState::LetterComplete;
        self.slot.schedule(Transition::NextLetter, self.timing.settle_delay);
    }

    /// The host finished speaking the message for `ticket`. Only the ticket
    /// of the current celebration counts, and only once.
    pub fn narration_finished(&mut self, ticket: NarrationTicket) {
        if self.narration != Some(ticket) {
            log::debug!("ignoring stale narration ticket {}", ticket.0);
            return;
        }
        self.narration = None;
        self.slot
            .schedule(Transition::ReturnToMenu, self.timing.narration_tail_delay);
    }

    /// Run the pending transition timer down by `dt` seconds.
    pub fn tick<G, N>(&mut self, dt: f32, deps: &mut Collaborators<'_, G, N>)
    where
        G: GlyphSource + ?Sized,
        N: Narrator + ?Sized,
    {
        match self.slot.tick(dt) {
            Some(Transition::NextLetter) => {
                if let Some(word) = self.word.as_mut() {
                    word.advance();
                }
                self.load_current(deps);
            }
            Some(Transition::ReturnToMenu) => {
                log::info!("returning to menu");
                self.abandon();
                self.events.push(TraceEvent::ReturnToMenu);
            }
            None => {}
        }
    }

    /// Load the letter at the current index, skipping characters without
    /// glyph data. Runs into word completion when the index passes the end.
    fn load_current<G, N>(&mut self, deps: &mut Collaborators<'_, G, N>)
    where
        G: GlyphSource + ?Sized,
        N: Narrator + ?Sized,
    {
        self.slot.cancel();
        let Some(word) = self.word.as_mut() else {
            return;
        };

        while let Some(ch) = word.current_char() {
            let index = word.letter_index();
            match deps.glyphs.strokes_for(ch) {
                Some(instructions) if !instructions.is_empty() => {
                    word.set_letter(LetterSession::from_instructions(instructions));
                    log::debug!("letter {index} ({ch}) loaded");
                    self.events.push(TraceEvent::LetterLoaded { index, ch });
                    self.state = SequencerState::LetterActive;
                    return;
                }
                _ => {
                    log::warn!("no strokes for {ch:?}, skipping");
                    self.events.push(TraceEvent::LetterSkipped { index, ch });
                    word.advance();
                }
            }
        }

        self.complete_word(deps);
    }

    fn complete_word<G, N>(&mut self, deps: &mut Collaborators<'_, G, N>)
    where
        G: ?Sized,
        N: Narrator + ?Sized,
    {
        let Some(word) = &self.word else {
            return;
        };
        let text = word.text();
        let message = deps.pools.compose(&text, &mut deps.effects.rng);
        log::info!("word complete: {text}");

        deps.effects
            .spawn_burst(deps.burst_center, self.timing.particle_count);
        self.state = SequencerState::WordComplete;
        self.events.push(TraceEvent::WordComplete {
            word: text,
            message: message.clone(),
        });

        self.next_ticket = self.next_ticket.wrapping_add(1);
        let ticket = NarrationTicket(self.next_ticket);
        if deps.narrator.speak(&message, ticket) {
            self.narration = Some(ticket);
        } else {
            log::debug!("narration unavailable, using fallback delay");
            self.slot
                .schedule(Transition::ReturnToMenu, self.timing.fallback_delay);
        }
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;
    use crate::api::narrator::SilentNarrator;
    use crate::geometry::instruction::StrokeInstruction;

    fn glyphs() -> HashMap<char, Vec<StrokeInstruction>> {
        let mut map = HashMap::new();
        map.insert(
            'a',
            vec![StrokeInstruction::line(Vec2::new(40.0, 40.0), Vec2::new(60.0, 60.0))],
        );
        map.insert(
            'b',
            vec![StrokeInstruction::line(Vec2::new(20.0, 0.0), Vec2::new(20.0, 100.0))],
        );
        map
    }

    struct Harness {
        glyphs: HashMap<char, Vec<StrokeInstruction>>,
        narrator: SilentNarrator,
        effects: EffectsState,
        pools: PhrasePools,
        seq: WordSequencer,
    }

    impl Harness {
        fn new() -> Self {
            Self {
                glyphs: glyphs(),
                narrator: SilentNarrator,
                effects: EffectsState::new(3),
                pools: PhrasePools::default(),
                seq: WordSequencer::new(&TraceConfig::default()),
            }
        }

        fn run(&mut self, f: impl FnOnce(&mut WordSequencer, &mut Collaborators<'_, HashMap<char, Vec<StrokeInstruction>>, SilentNarrator>)) {
            let mut deps = Collaborators {
                glyphs: &self.glyphs,
                narrator: &mut self.narrator,
                effects: &mut self.effects,
                pools: &self.pools,
                burst_center: Vec2::new(100.0, 100.0),
            };
            f(&mut self.seq, &mut deps);
        }

        fn start(&mut self, word: &str) {
            self.run(|seq, deps| seq.start_word(word, deps));
        }

        fn tick(&mut self, dt: f32) {
            self.run(|seq, deps| seq.tick(dt, deps));
        }
    }

    #[test]
    fn start_loads_first_letter() {
        let mut h = Harness::new();
        h.start("ab");
        assert_eq!(h.seq.state(), SequencerState::LetterActive);
        assert_eq!(
            h.seq.take_events(),
            vec![
                TraceEvent::WordStarted { word: "ab".into() },
                TraceEvent::LetterLoaded { index: 0, ch: 'a' },
            ]
        );
    }

    #[test]
    fn settle_delay_then_next_letter() {
        let mut h = Harness::new();
        h.start("ab");
        h.seq.letter_completed(&mut SilentNarrator);
        assert_eq!(h.seq.state(), SequencerState::LetterComplete);
        assert!(h.seq.active_letter_mut().is_none());

        h.tick(0.5);
        assert_eq!(h.seq.word().map(WordSession::letter_index), Some(0));
        h.tick(0.5);
        assert_eq!(h.seq.word().map(WordSession::letter_index), Some(1));
        assert_eq!(h.seq.state(), SequencerState::LetterActive);
    }

    #[test]
    fn second_completion_report_is_ignored() {
        let mut h = Harness::new();
        h.start("ab");
        h.seq.letter_completed(&mut SilentNarrator);
        h.seq.letter_completed(&mut SilentNarrator);
        let completes = h
            .seq
            .take_events()
            .into_iter()
            .filter(|e| matches!(e, TraceEvent::LetterComplete { .. }))
            .count();
        assert_eq!(completes, 1);
    }

    #[test]
    fn unknown_characters_are_skipped() {
        let mut h = Harness::new();
        h.start("?a");
        assert_eq!(h.seq.state(), SequencerState::LetterActive);
        assert_eq!(h.seq.word().map(WordSession::letter_index), Some(1));
        assert!(h
            .seq
            .take_events()
            .contains(&TraceEvent::LetterSkipped { index: 0, ch: '?' }));
    }

    #[test]
    fn glyph_without_strokes_is_skipped() {
        let mut h = Harness::new();
        h.glyphs.insert('x', Vec::new());
        h.start("xa");
        assert_eq!(h.seq.state(), SequencerState::LetterActive);
        assert_eq!(h.seq.word().map(WordSession::letter_index), Some(1));
        assert_eq!(h.seq.letter().map(LetterSession::stroke_count), Some(1));
        let events = h.seq.take_events();
        assert!(events.contains(&TraceEvent::LetterSkipped { index: 0, ch: 'x' }));
        assert!(events.contains(&TraceEvent::LetterLoaded { index: 1, ch: 'a' }));
    }

    #[test]
    fn word_of_unknowns_completes_at_once() {
        let mut h = Harness::new();
        h.start("?!");
        assert_eq!(h.seq.state(), SequencerState::WordComplete);
        assert_eq!(h.effects.particles.len(), 30);
        assert_eq!(h.seq.pending_transition(), Some(Transition::ReturnToMenu));
    }

    #[test]
    fn fallback_returns_to_menu() {
        let mut h = Harness::new();
        h.start("a");
        h.seq.letter_completed(&mut SilentNarrator);
        h.tick(1.0);
        assert_eq!(h.seq.state(), SequencerState::WordComplete);
        h.tick(2.9);
        assert_eq!(h.seq.state(), SequencerState::WordComplete);
        h.tick(0.2);
        assert_eq!(h.seq.state(), SequencerState::Idle);
        assert!(h.seq.word().is_none());
        assert_eq!(h.seq.take_events().last(), Some(&TraceEvent::ReturnToMenu));
    }

    #[test]
    fn abandon_cancels_settle() {
        let mut h = Harness::new();
        h.start("ab");
        h.seq.letter_completed(&mut SilentNarrator);
        h.seq.abandon();
        h.tick(5.0);
        assert_eq!(h.seq.state(), SequencerState::Idle);
        assert!(h.seq.progress().is_empty());
    }

    #[test]
    fn restart_discards_previous_word() {
        let mut h = Harness::new();
        h.start("ab");
        h.seq.letter_completed(&mut SilentNarrator);
        h.start("b");
        h.tick(5.0);
        // The old settle timer must not advance the new word.
        assert_eq!(h.seq.word().map(WordSession::letter_index), Some(0));
        assert_eq!(h.seq.state(), SequencerState::LetterActive);
    }
}
