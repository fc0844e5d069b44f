use glam::Vec2;

use crate::api::config::TraceConfig;
use crate::api::narrator::Narrator;
use crate::api::types::{GuidanceMode, NarrationTicket, TraceEvent};
use crate::assets::celebration::PhrasePools;
use crate::assets::glyphs::GlyphSource;
use crate::core::clock::FrameClock;
use crate::effects::EffectsState;
use crate::geometry::mapper::LetterBox;
use crate::render::frame::{build_frame, FrameInputs};
use crate::render::guidance::GuidanceStyle;
use crate::render::primitive::Frame;
use crate::session::{Collaborators, LetterProgress, SequencerState, WordSequencer, WordSession};
use crate::tracking::letter::{LetterSession, MatchParams};
use crate::tracking::sampler::{InputSampler, PointerEvent};

/// The whole tracing game behind one handle.
///
/// The host forwards pointer events and a per-frame `tick(dt)`, then reads
/// `frame()` and drains `take_events()`. Audio goes out through the
/// [`Narrator`]; when speech ends the host calls `narration_finished`.
pub struct WordTracer<G: GlyphSource, N: Narrator> {
    config: TraceConfig,
    glyphs: G,
    narrator: N,
    pools: PhrasePools,
    mode: GuidanceMode,
    mapper: LetterBox,
    sampler: InputSampler,
    params: MatchParams,
    style: GuidanceStyle,
    clock: FrameClock,
    effects: EffectsState,
    sequencer: WordSequencer,
}

impl<G: GlyphSource, N: Narrator> WordTracer<G, N> {
    pub fn new(glyphs: G, narrator: N, config: TraceConfig) -> Self {
        Self {
            glyphs,
            narrator,
            pools: PhrasePools::default(),
            mode: GuidanceMode::default(),
            mapper: LetterBox::default(),
            sampler: InputSampler::new(config.sample_step_px),
            params: MatchParams {
                hit_radius_px: config.hit_radius_px,
                lookahead: config.lookahead,
            },
            style: GuidanceStyle::from_config(&config),
            clock: FrameClock::new(config.fixed_dt, config.ghost_cycle),
            effects: EffectsState::new(config.seed),
            sequencer: WordSequencer::new(&config),
            config,
        }
    }

    /// Use custom celebration phrases.
    pub fn with_pools(mut self, pools: PhrasePools) -> Self {
        self.pools = pools.or_defaults();
        self
    }

    pub fn config(&self) -> &TraceConfig {
        &self.config
    }

    /// Refit the letter box to a new viewport. Stroke progress is kept in
    /// plane coordinates, so it survives the change.
    pub fn resize(&mut self, width: f32, height: f32) {
        let mapper = LetterBox::fit(width, height, &self.config);
        if !mapper.is_usable() {
            log::warn!("ignoring resize to unusable viewport {width}x{height}");
            return;
        }
        self.mapper = mapper;
    }

    pub fn mapper(&self) -> &LetterBox {
        &self.mapper
    }

    pub fn mode(&self) -> GuidanceMode {
        self.mode
    }

    pub fn set_mode(&mut self, mode: GuidanceMode) {
        if mode != self.mode {
            log::debug!("guidance mode {} -> {}", self.mode, mode);
        }
        self.mode = mode;
    }

    /// Begin tracing `word`, abandoning whatever was in progress.
    pub fn start_word(&mut self, word: &str) {
        self.sampler.cancel();
        let (sequencer, mut deps) = self.split();
        sequencer.start_word(word, &mut deps);
    }

    /// Leave the current word without finishing it.
    pub fn back_to_menu(&mut self) {
        self.sampler.cancel();
        self.sequencer.abandon();
    }

    pub fn pointer_down(&mut self, x: f32, y: f32) {
        self.handle_pointer(PointerEvent::Down { x, y });
    }

    pub fn pointer_move(&mut self, x: f32, y: f32) {
        self.handle_pointer(PointerEvent::Move { x, y });
    }

    pub fn pointer_up(&mut self, x: f32, y: f32) {
        self.handle_pointer(PointerEvent::Up { x, y });
    }

    /// Feed a pointer event. Samples only reach the tracker while a letter
    /// is active; otherwise they are dropped.
    pub fn handle_pointer(&mut self, event: PointerEvent) {
        let mode = self.mode;
        let mapper = &self.mapper;
        let params = &self.params;
        let sampler = &mut self.sampler;

        let mut completed = false;
        match self.sequencer.active_letter_mut() {
            Some(letter) => sampler.handle(event, |sample| {
                completed |= letter.check_point(sample, mode, mapper, params).letter_complete;
            }),
            None => {
                log::trace!("no active letter, ignoring {event:?}");
                sampler.handle(event, |_| {});
            }
        }

        if completed {
            self.sequencer.letter_completed(&mut self.narrator);
        }
    }

    /// Advance time by `dt` seconds: animation, particles, then any pending
    /// transition.
    pub fn tick(&mut self, dt: f32) {
        let steps = self.clock.advance(dt);
        for _ in 0..steps {
            self.effects.step();
        }
        let (sequencer, mut deps) = self.split();
        sequencer.tick(dt, &mut deps);
    }

    /// The host finished speaking the completion message for `ticket`.
    pub fn narration_finished(&mut self, ticket: NarrationTicket) {
        self.sequencer.narration_finished(ticket);
    }

    /// Draw list for the current state.
    pub fn frame(&self) -> Frame {
        build_frame(&FrameInputs {
            letter: self.sequencer.letter(),
            mode: self.mode,
            ghost_phase: self.clock.ghost_phase(),
            clock_ms: self.clock.millis(),
            mapper: &self.mapper,
            style: &self.style,
            effects: &self.effects,
        })
    }

    /// Events since the last call, oldest first.
    pub fn take_events(&mut self) -> Vec<TraceEvent> {
        self.sequencer.take_events()
    }

    pub fn state(&self) -> SequencerState {
        self.sequencer.state()
    }

    pub fn word(&self) -> Option<&WordSession> {
        self.sequencer.word()
    }

    pub fn letter(&self) -> Option<&LetterSession> {
        self.sequencer.letter()
    }

    pub fn progress(&self) -> Vec<LetterProgress> {
        self.sequencer.progress()
    }

    pub fn effects(&self) -> &EffectsState {
        &self.effects
    }

    pub fn glyphs(&self) -> &G {
        &self.glyphs
    }

    pub fn narrator(&self) -> &N {
        &self.narrator
    }

    pub fn narrator_mut(&mut self) -> &mut N {
        &mut self.narrator
    }

    fn split(&mut self) -> (&mut WordSequencer, Collaborators<'_, G, N>) {
        let burst_center = self.mapper.to_pixels(Vec2::splat(50.0));
        let Self {
            sequencer,
            glyphs,
            narrator,
            effects,
            pools,
            ..
        } = self;
        (
            sequencer,
            Collaborators {
                glyphs: &*glyphs,
                narrator,
                effects,
                pools: &*pools,
                burst_center,
            },
        )
    }
}
