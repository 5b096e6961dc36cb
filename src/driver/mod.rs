//! The animation loop: phase, play/pause and the per-tick render.

mod tick;

pub use tick::{IntervalTicks, ManualTicks, TickSource};

use crate::error::{Result, SpiralError};
use crate::params::{ParamKey, ParamValue, ParameterStore};
use crate::render::{compute_frame, paint, DrawCommand, Surface};
use tracing::{debug, trace, warn};

/// Phase advance per playing tick.
pub const DEFAULT_PHASE_STEP: f64 = 0.01;

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum PlayState {
    Playing,
    Paused,
}

impl PlayState {
    pub fn toggled(self) -> Self {
        match self {
            PlayState::Playing => PlayState::Paused,
            PlayState::Paused => PlayState::Playing,
        }
    }

    pub fn is_playing(&self) -> bool {
        *self == PlayState::Playing
    }

    /// Caption of the play/pause control: the action it would take.
    pub fn control_label(&self) -> &'static str {
        match self {
            PlayState::Playing => "Pause",
            PlayState::Paused => "Play",
        }
    }
}

/// Animation time fed into the radial perturbation.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct Phase(f64);

impl Phase {
    pub fn value(&self) -> f64 {
        self.0
    }

    fn advance(&mut self, step: f64) {
        self.0 += step;
    }
}

/// Input from the controls.
#[derive(Clone, Debug, PartialEq)]
pub enum DriverEvent {
    Toggle,
    ParamChange { key: ParamKey, raw: String },
}

pub struct AnimationDriverBuilder {
    store: Option<ParameterStore>,
    phase_step: f64,
    state: PlayState,
}

impl Default for AnimationDriverBuilder {
    fn default() -> Self {
        AnimationDriverBuilder {
            store: None,
            phase_step: DEFAULT_PHASE_STEP,
            state: PlayState::Playing,
        }
    }
}

impl AnimationDriverBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn store(mut self, store: ParameterStore) -> Self {
        self.store = Some(store);
        self
    }

    pub fn phase_step(mut self, step: f64) -> Self {
        self.phase_step = step;
        self
    }

    pub fn playing(mut self, playing: bool) -> Self {
        self.state = if playing {
            PlayState::Playing
        } else {
            PlayState::Paused
        };
        self
    }

    pub fn build(self) -> Result<AnimationDriver> {
        if !self.phase_step.is_finite() {
            return Err(SpiralError::InvalidPhaseStep(self.phase_step));
        }

        Ok(AnimationDriver {
            store: self.store.unwrap_or_default(),
            phase: Phase::default(),
            phase_step: self.phase_step,
            state: self.state,
        })
    }
}

/// Owns the phase and play state, and renders the store's parameters once per tick.
pub struct AnimationDriver {
    store: ParameterStore,
    phase: Phase,
    phase_step: f64,
    state: PlayState,
}

impl AnimationDriver {
    pub fn store(&self) -> &ParameterStore {
        &self.store
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn state(&self) -> PlayState {
        self.state
    }

    pub fn on_toggle(&mut self) -> PlayState {
        self.state = self.state.toggled();
        debug!(state = ?self.state, phase = self.phase.value(), "play state toggled");
        self.state
    }

    pub fn on_param_change(&mut self, key: ParamKey, raw: &str) -> Result<ParamValue> {
        self.store.set(key, raw)
    }

    pub fn handle_event(&mut self, event: DriverEvent) -> Result<()> {
        match event {
            DriverEvent::Toggle => {
                self.on_toggle();
            }
            DriverEvent::ParamChange { key, raw } => {
                self.on_param_change(key, &raw)?;
            }
        }
        Ok(())
    }

    /// Advances the phase if playing, then renders and paints one frame.
    ///
    /// The returned commands are the ones painted; later parameter changes never touch them.
    pub fn tick<S: Surface + ?Sized>(&mut self, surface: &mut S) -> Vec<DrawCommand> {
        if self.state.is_playing() {
            self.phase.advance(self.phase_step);
        }

        let snapshot = self.store.get();
        let (width, height) = surface.size();
        let commands = compute_frame(&snapshot, self.phase.value(), width, height);
        paint(&commands, surface);

        trace!(
            phase = self.phase.value(),
            commands = commands.len(),
            "tick"
        );
        commands
    }

    /// Runs the loop for as long as `ticks` keeps firing.
    ///
    /// Before each frame, the events `inbox` returns for that tick are applied. A
    /// rejected event is logged and the loop carries on.
    pub fn run<T, S, F, I>(&mut self, ticks: &mut T, surface: &mut S, mut inbox: F)
    where
        T: TickSource + ?Sized,
        S: Surface + ?Sized,
        F: FnMut(u64) -> I,
        I: IntoIterator<Item = DriverEvent>,
    {
        ticks.subscribe_tick(&mut |tick| {
            for event in inbox(tick) {
                if let Err(err) = self.handle_event(event) {
                    warn!(tick, %err, "control event rejected");
                }
            }
            self.tick(surface);
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::SvgSurface;

    #[test]
    fn toggle_flips_state_and_label() {
        let mut driver = AnimationDriverBuilder::new().build().unwrap();
        assert_eq!(driver.state(), PlayState::Playing);
        assert_eq!(driver.state().control_label(), "Pause");

        assert_eq!(driver.on_toggle(), PlayState::Paused);
        assert_eq!(driver.state().control_label(), "Play");

        driver.handle_event(DriverEvent::Toggle).unwrap();
        assert!(driver.state().is_playing());
    }

    #[test]
    fn playing_tick_advances_by_step() {
        let mut driver = AnimationDriverBuilder::new().phase_step(0.25).build().unwrap();
        let mut surface = SvgSurface::new(100., 100.);
        driver.tick(&mut surface);
        driver.tick(&mut surface);
        assert_eq!(driver.phase().value(), 0.5);
    }

    #[test]
    fn paused_tick_still_renders() {
        let mut driver = AnimationDriverBuilder::new().playing(false).build().unwrap();
        let mut surface = SvgSurface::new(100., 100.);
        let commands = driver.tick(&mut surface);
        assert_eq!(commands.len(), 4);
        assert_eq!(driver.phase(), Phase::default());
    }

    #[test]
    fn rejects_non_finite_step() {
        assert_eq!(
            AnimationDriverBuilder::new()
                .phase_step(f64::NAN)
                .build()
                .err()
                .map(|e| e.to_string()),
            Some(String::from("Phase step must be finite, got NaN"))
        );
    }

    #[test]
    fn bad_param_event_is_an_error() {
        let mut driver = AnimationDriverBuilder::new().build().unwrap();
        let event = DriverEvent::ParamChange {
            key: ParamKey::Radius,
            raw: String::from("huge"),
        };
        assert!(driver.handle_event(event).is_err());
        assert_eq!(driver.store().get().radius, 180.);
    }
}
