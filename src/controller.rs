use log::{info, warn};

use crate::classifier::Classifier;
use crate::config::{ConfigError, ControllerConfig};
use crate::inbox::Inbox;
use crate::message::{Message, StateId};
use crate::pattern::Lamps;
use crate::renderer::Renderer;
use crate::state::run_state;
use crate::transition::{Transition, next_state};
use crate::{Delay, IndicatorDriver};

/// Controller - drives state bodies through the transition table
pub struct Controller<'a, D: IndicatorDriver, T: Delay> {
    // External dependencies and configuration
    inbox: &'a Inbox,
    config: ControllerConfig,
    delay: T,

    // Internal dependencies
    renderer: Renderer<D>,
}

impl<'a, D: IndicatorDriver, T: Delay> Controller<'a, D, T> {
    /// Create a new controller reading messages from `inbox`
    ///
    /// The configuration is validated first, so hand-built configs get the
    /// same checks as parsed ones.
    pub fn new(
        inbox: &'a Inbox,
        driver: D,
        delay: T,
        config: &ControllerConfig,
    ) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self {
            inbox,
            config: *config,
            delay,
            renderer: Renderer::new(driver),
        })
    }

    /// Classifier writing into this controller's inbox with its thresholds
    pub const fn classifier(&self) -> Classifier<'a> {
        Classifier::new(
            self.inbox,
            self.config.thresholds,
            self.config.unrecognized,
        )
    }

    /// Switch every lamp off, wait the startup delay and return the
    /// bootstrap pair
    pub fn start(&mut self) -> (StateId, Message) {
        self.renderer.set_pattern(Lamps::OFF);
        if self.config.startup_delay.as_ticks() > 0 {
            self.delay.delay(self.config.startup_delay);
        }
        (StateId::Start, Message::StartSignal)
    }

    /// Perform one transition: look up the pair and run the next state's
    /// body to completion.
    ///
    /// Unhandled pairs are not fatal: they are reported, followed by the
    /// grace pause, and yield a fresh `(Start, StartSignal)`.
    pub fn step(&mut self, (state, message): (StateId, Message)) -> (StateId, Message) {
        info!("jump from {}, message={}", state, message);
        match next_state(state, message) {
            Transition::Enter(next) => run_state(
                next,
                message,
                &self.config.timings,
                &mut self.renderer,
                &mut self.delay,
                self.inbox,
            ),
            Transition::Fallback => {
                warn!(
                    "unhandled ({}, {}), restarting in {} ms",
                    state,
                    message,
                    self.config.fallback_grace.as_millis()
                );
                self.delay.delay(self.config.fallback_grace);
                (StateId::Start, Message::StartSignal)
            }
        }
    }

    /// Run the machine forever
    pub fn run(&mut self) -> ! {
        let mut current = self.start();
        loop {
            current = self.step(current);
        }
    }

    pub const fn config(&self) -> &ControllerConfig {
        &self.config
    }

    pub const fn renderer(&self) -> &Renderer<D> {
        &self.renderer
    }

    pub const fn delay(&self) -> &T {
        &self.delay
    }

    pub fn delay_mut(&mut self) -> &mut T {
        &mut self.delay
    }
}
