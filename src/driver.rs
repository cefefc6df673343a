//! Headless frame driver
//!
//! Stands in for the presentation layer: feeds the model fixed timesteps from
//! variable frame times, applies one-shot lick input after the step, and stops
//! ticking once the game is over.

use crate::consts::{MAX_FRAME_DT, MAX_SUBSTEPS, MIN_FRAME_DT, SIM_DT};
use crate::sim::{EventLog, GameEvent, GameModel, SeededPicker, ZonePicker};

/// A tap, already resolved to what was hit
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LickInput {
    /// Tapped drip zone `n`
    Zone(usize),
    /// Tapped the ice cream outside any zone
    Dripless,
}

/// Demo player: licks the zone closest to dripping once it gets urgent
#[derive(Debug, Clone)]
pub struct Autoplay {
    /// Progress (0-1) a zone must reach before it is worth a lick
    pub urgency: f32,
    /// Seconds between licks (roughly the tongue animation)
    pub lick_cooldown: f32,
    cooldown: f32,
}

impl Default for Autoplay {
    fn default() -> Self {
        Self {
            urgency: 0.8,
            lick_cooldown: 0.7,
            cooldown: 0.0,
        }
    }
}

impl Autoplay {
    pub fn new(urgency: f32, lick_cooldown: f32) -> Self {
        Self {
            urgency,
            lick_cooldown,
            cooldown: 0.0,
        }
    }

    /// Pick a lick for this frame, if any
    pub fn decide<P: ZonePicker>(&mut self, model: &GameModel<P>, dt: f32) -> Option<LickInput> {
        self.cooldown = (self.cooldown - dt).max(0.0);
        if self.cooldown > 0.0 {
            return None;
        }

        // Most urgent active zone
        let (idx, progress) = (0..model.zone_count())
            .filter(|&i| model.is_zone_active(i))
            .map(|i| (i, model.drip_progress_normalized(i)))
            .max_by(|a, b| a.1.partial_cmp(&b.1).unwrap_or(std::cmp::Ordering::Equal))?;

        if progress < self.urgency {
            return None;
        }
        self.cooldown = self.lick_cooldown;
        Some(LickInput::Zone(idx))
    }
}

/// Drives a `GameModel` from frame times
#[derive(Debug)]
pub struct FrameDriver<P = SeededPicker> {
    model: GameModel<P>,
    events: EventLog,
    accumulator: f32,
    elapsed: f32,
    pending: Option<LickInput>,
    autoplay: Option<Autoplay>,
}

impl<P: ZonePicker> FrameDriver<P> {
    pub fn new(mut model: GameModel<P>) -> Self {
        let events = EventLog::new();
        model.subscribe(events.observer());
        Self {
            model,
            events,
            accumulator: 0.0,
            elapsed: 0.0,
            pending: None,
            autoplay: None,
        }
    }

    /// Let the demo player make the licks
    pub fn with_autoplay(mut self, autoplay: Autoplay) -> Self {
        self.autoplay = Some(autoplay);
        self
    }

    /// Queue a tap for the next frame. A later tap in the same frame wins.
    pub fn queue_lick(&mut self, input: LickInput) {
        self.pending = Some(input);
    }

    /// Whether the driver still ticks the model
    pub fn is_running(&self) -> bool {
        !self.model.is_game_over()
    }

    /// Run one frame of `frame_dt` seconds and return the events it produced.
    ///
    /// Steps the model in `SIM_DT` increments (at most `MAX_SUBSTEPS`), then
    /// applies queued or autoplay input. Does nothing once the game is over.
    /// A zero (or negative) frame adds no time; any positive frame counts as
    /// at least `MIN_FRAME_DT`.
    pub fn update(&mut self, frame_dt: f32) -> Vec<GameEvent> {
        if !self.is_running() {
            self.pending = None;
            return self.events.drain();
        }

        let frame_dt = if frame_dt > 0.0 {
            frame_dt.clamp(MIN_FRAME_DT, MAX_FRAME_DT)
        } else {
            0.0
        };
        self.accumulator += frame_dt;

        let mut substeps = 0;
        while self.accumulator >= SIM_DT && substeps < MAX_SUBSTEPS {
            self.model.tick(SIM_DT);
            self.accumulator -= SIM_DT;
            self.elapsed += SIM_DT;
            substeps += 1;
        }

        let input = match self.autoplay.as_mut() {
            Some(autoplay) => self
                .pending
                .take()
                .or_else(|| autoplay.decide(&self.model, frame_dt)),
            None => self.pending.take(),
        };
        if let Some(input) = input {
            self.apply(input);
        }

        self.events.drain()
    }

    fn apply(&mut self, input: LickInput) {
        match input {
            LickInput::Zone(idx) if idx < self.model.zone_count() => self.model.lick(idx),
            LickInput::Zone(idx) => log::warn!("Ignoring lick on unknown zone {}", idx),
            LickInput::Dripless => self.model.lick_dripless(),
        }
    }

    /// Simulated seconds so far
    pub fn elapsed(&self) -> f32 {
        self.elapsed
    }

    pub fn model(&self) -> &GameModel<P> {
        &self.model
    }

    pub fn model_mut(&mut self) -> &mut GameModel<P> {
        &mut self.model
    }

    pub fn into_model(self) -> GameModel<P> {
        self.model
    }
}
