//! Match session
//!
//! Owns every piece of mutable game state and drives one loop iteration at a
//! time: drain input, apply mode effects, tick physics, present.

use crate::error::Result;
use crate::platform::{Clock, InputEvent, InputState, Pacer, Signal, SystemClock};
use crate::renderer::{Frame, Frontend};
use crate::settings::Settings;
use crate::sim::{Collision, GameMode, GameState, tick};

pub struct Session<C: Clock = SystemClock> {
    state: GameState,
    input: InputState,
    pacer: Pacer<C>,
    running: bool,
    message: &'static str,
    /// Reused between polls
    events: Vec<InputEvent>,
}

impl Session<SystemClock> {
    pub fn new(settings: &Settings) -> Self {
        Self::with_clock(settings, SystemClock::new())
    }
}

impl<C: Clock> Session<C> {
    pub fn with_clock(settings: &Settings, clock: C) -> Self {
        Self {
            state: GameState::new(settings),
            input: InputState::new(),
            pacer: Pacer::new(clock, settings.frame_interval()),
            running: true,
            message: GameMode::Menu.message(),
            events: Vec::new(),
        }
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn input(&self) -> &InputState {
        &self.input
    }

    pub fn pacer(&self) -> &Pacer<C> {
        &self.pacer
    }

    pub fn pacer_mut(&mut self) -> &mut Pacer<C> {
        &mut self.pacer
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Status text for the current mode
    pub fn message(&self) -> &'static str {
        self.message
    }

    /// Apply one input event
    pub fn handle_event(&mut self, event: InputEvent) {
        let signal = match event {
            InputEvent::KeyDown(key) => self.input.key_down(key),
            InputEvent::KeyUp(key) => {
                self.input.key_up(key);
                None
            }
            InputEvent::Quit => Some(Signal::Quit),
        };

        match signal {
            Some(Signal::Confirm) => {
                self.state.confirm();
            }
            Some(Signal::Quit) => {
                if self.running {
                    log::info!("Quit requested");
                }
                self.running = false;
            }
            None => {}
        }
    }

    /// Per-mode effects for one iteration.
    ///
    /// Playing resyncs the pacer before ticking so time spent in the menu or
    /// paused never shows up as one huge delta. Idle modes still tick the
    /// pacer to hold the frame rate, but discard the delta.
    pub fn step(&mut self) -> Option<Collision> {
        self.message = self.state.mode.message();

        match self.state.mode {
            GameMode::Playing => {
                self.pacer.resync();
                let dt = self.pacer.tick();
                tick(&mut self.state, self.input.tick_input(), dt)
            }
            GameMode::Menu | GameMode::Paused => {
                self.pacer.tick();
                None
            }
        }
    }

    /// Snapshot for the presenter
    pub fn frame(&self) -> Frame<'_> {
        Frame {
            field: self.state.rules.field,
            paddles: [
                self.state.paddles[0].bounds(),
                self.state.paddles[1].bounds(),
            ],
            ball: self.state.ball.bounds(),
            message: self.message,
            mode: self.state.mode,
        }
    }

    /// One full iteration: input, update, present
    pub fn iterate<F: Frontend>(&mut self, frontend: &mut F) -> Result<()> {
        let mut events = std::mem::take(&mut self.events);
        let polled = frontend.poll_events(&mut events);
        for event in events.drain(..) {
            self.handle_event(event);
        }
        self.events = events;
        polled?;

        self.step();
        frontend.present(&self.frame())?;
        Ok(())
    }

    /// Run until quit is requested
    pub fn run<F: Frontend>(&mut self, frontend: &mut F) -> Result<()> {
        log::info!(
            "Session running at {:?} per frame",
            self.pacer.frame_interval()
        );

        while self.running {
            if let Err(e) = self.iterate(frontend) {
                self.running = false;
                return Err(e);
            }
        }

        log::info!(
            "Session ended in {:?} mode, multiplier {}",
            self.state.mode,
            self.state.multiplier
        );
        Ok(())
    }
}
