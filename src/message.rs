//! States and messages of the controller.

use core::fmt;

const STATE_NAME_START: &str = "start";
const STATE_NAME_WARM: &str = "warm";
const STATE_NAME_READY: &str = "ready";
const STATE_NAME_SNAP: &str = "snap";

const MESSAGE_NAME_START_SIGNAL: &str = "start_signal";
const MESSAGE_NAME_SHORT_PRESS: &str = "short_press";
const MESSAGE_NAME_LONG_PRESS: &str = "long_press";
const MESSAGE_NAME_NULL_COMPLETION: &str = "null_completion";
const MESSAGE_NAME_UNRECOGNIZED: &str = "unrecognized";

/// Controller state. Exactly one is active at any time.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum StateId {
    /// Idle, waiting for the first press
    Start,
    /// Warm-up animation
    Warm,
    /// Armed, waiting for a press
    Ready,
    /// Capture animation
    Snap,
}

impl StateId {
    pub const ALL: [Self; 4] = [Self::Start, Self::Warm, Self::Ready, Self::Snap];

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Start => STATE_NAME_START,
            Self::Warm => STATE_NAME_WARM,
            Self::Ready => STATE_NAME_READY,
            Self::Snap => STATE_NAME_SNAP,
        }
    }

    /// Returns `true` for states that run a fixed animation and then
    /// advance on their own.
    pub const fn is_transient(self) -> bool {
        matches!(self, Self::Warm | Self::Snap)
    }
}

impl fmt::Display for StateId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Event that causes or completes a state transition.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Message {
    /// Synthetic message that bootstraps (or restarts) the controller
    StartSignal,
    /// Deliberate press shorter than the long-press threshold
    ShortPress,
    /// Press held at least the long-press threshold
    LongPress,
    /// Self-issued by a transient state after its animation
    NullCompletion,
    /// Press too short (or malformed) to count
    Unrecognized,
}

impl Message {
    pub const ALL: [Self; 5] = [
        Self::StartSignal,
        Self::ShortPress,
        Self::LongPress,
        Self::NullCompletion,
        Self::Unrecognized,
    ];

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::StartSignal => MESSAGE_NAME_START_SIGNAL,
            Self::ShortPress => MESSAGE_NAME_SHORT_PRESS,
            Self::LongPress => MESSAGE_NAME_LONG_PRESS,
            Self::NullCompletion => MESSAGE_NAME_NULL_COMPLETION,
            Self::Unrecognized => MESSAGE_NAME_UNRECOGNIZED,
        }
    }

    /// Returns `true` for messages produced by a real button press that
    /// should advance the machine.
    pub const fn is_press(self) -> bool {
        matches!(self, Self::ShortPress | Self::LongPress)
    }
}

impl fmt::Display for Message {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
