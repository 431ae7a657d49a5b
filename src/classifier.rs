//! Button press classification.
//!
//! Turns a press/release edge pair into a [`Message`] and delivers it to the
//! [`Inbox`]. Both entry points take `&self` and only touch state inside
//! critical sections, so they can be called from a GPIO interrupt or an
//! input thread while the controller is blocked in a state body.

use core::cell::Cell;

use critical_section::Mutex;
use embassy_time::{Duration, Instant};
use log::{debug, warn};

use crate::inbox::Inbox;
use crate::message::Message;

/// Duration thresholds separating press kinds.
///
/// Each threshold is the inclusive lower bound of its tier: a press lasting
/// exactly `short` is a short press, exactly `long` is a long press.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PressThresholds {
    /// Minimum duration counted as a deliberate press
    pub short: Duration,
    /// Minimum duration counted as a long press
    pub long: Duration,
}

impl PressThresholds {
    pub const DEFAULT: Self = Self {
        short: Duration::from_millis(100),
        long: Duration::from_millis(1200),
    };

    /// Classify a press interval.
    ///
    /// `None` stands for an interval that could not be measured (release
    /// without a press, or a clock that went backwards). A zero interval is
    /// never a press, whatever the thresholds.
    pub fn classify(self, interval: Option<Duration>) -> Message {
        match interval {
            Some(held) if held.as_ticks() == 0 => Message::Unrecognized,
            Some(held) if held >= self.long => Message::LongPress,
            Some(held) if held >= self.short => Message::ShortPress,
            _ => Message::Unrecognized,
        }
    }
}

impl Default for PressThresholds {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// What to do with presses too short to count.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum UnrecognizedPolicy {
    /// Never write them to the inbox.
    #[default]
    Drop,
    /// Write them only into an empty inbox; the transition table then
    /// routes them through the fallback path.
    Forward,
}

/// Outcome of [`Classifier::on_press_end`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PressOutcome {
    /// Classified message
    pub message: Message,
    /// Whether the message was written to the inbox
    pub delivered: bool,
    /// Unread message that was overwritten, if any
    pub replaced: Option<Message>,
}

/// Press classifier bound to an inbox.
pub struct Classifier<'a> {
    inbox: &'a Inbox,
    thresholds: PressThresholds,
    policy: UnrecognizedPolicy,
    pressed_at: Mutex<Cell<Option<Instant>>>,
}

impl<'a> Classifier<'a> {
    pub const fn new(
        inbox: &'a Inbox,
        thresholds: PressThresholds,
        policy: UnrecognizedPolicy,
    ) -> Self {
        Self {
            inbox,
            thresholds,
            policy,
            pressed_at: Mutex::new(Cell::new(None)),
        }
    }

    pub const fn thresholds(&self) -> PressThresholds {
        self.thresholds
    }

    /// Record the start of a press.
    ///
    /// A second start without a release restarts the measurement.
    pub fn on_press_start(&self, at: Instant) {
        critical_section::with(|cs| self.pressed_at.borrow(cs).set(Some(at)));
    }

    /// Record the end of a press, classify it and deliver the message.
    pub fn on_press_end(&self, at: Instant) -> PressOutcome {
        let pressed_at = critical_section::with(|cs| self.pressed_at.borrow(cs).take());
        let interval = pressed_at.and_then(|start| at.checked_duration_since(start));
        let message = self.thresholds.classify(interval);

        let outcome = if message.is_press() {
            PressOutcome {
                message,
                delivered: true,
                replaced: self.inbox.post(message),
            }
        } else {
            let delivered = match self.policy {
                UnrecognizedPolicy::Drop => false,
                UnrecognizedPolicy::Forward => self.inbox.offer(message).is_ok(),
            };
            PressOutcome {
                message,
                delivered,
                replaced: None,
            }
        };

        match interval {
            Some(held) => debug!("press held {} ms: {}", held.as_millis(), message),
            None => warn!("press release without a valid start, ignoring"),
        }
        if let Some(replaced) = outcome.replaced {
            warn!("unread {} replaced by {}", replaced, message);
        }
        outcome
    }

    /// Returns `true` while a press has started and not yet been released.
    pub fn is_pressed(&self) -> bool {
        critical_section::with(|cs| self.pressed_at.borrow(cs).get().is_some())
    }
}
