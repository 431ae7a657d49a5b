#![no_std]

pub mod classifier;
pub mod config;
pub mod controller;
pub mod inbox;
pub mod message;
pub mod pattern;
pub mod renderer;
pub mod smart_led;
pub mod state;
pub mod transition;

pub use classifier::{Classifier, PressOutcome, PressThresholds, UnrecognizedPolicy};
pub use config::{ConfigError, ControllerConfig, StateTimings};
pub use controller::Controller;
pub use inbox::{Inbox, InboxOccupied};
pub use message::{Message, StateId};
pub use pattern::{Flash, Lamps, LightPattern};
pub use renderer::Renderer;
pub use smart_led::{LampColors, SmartLedIndicators};
pub use state::{IdleTick, StateBody, run_state};
pub use transition::{TRANSITIONS, Transition, next_state};

pub use embassy_time::{Duration, Instant};

/// Abstract indicator lamp driver
///
/// Implement this trait to support different hardware platforms.
/// The controller is generic over this trait.
pub trait IndicatorDriver {
    /// Switch the red, yellow and blue lamps on or off
    fn set(&mut self, lamps: Lamps);
}

/// Blocking delay provider
///
/// State bodies block on this while animating or between inbox polls.
pub trait Delay {
    /// Block the calling thread for at least `duration`
    fn delay(&mut self, duration: Duration);
}
