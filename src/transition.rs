//! Transition table.

use crate::message::{Message, StateId};

/// Result of looking up a (state, message) pair
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transition {
    /// Enter the given state
    Enter(StateId),
    /// Pair is not in the table; recover through `Start`
    Fallback,
}

impl Transition {
    /// State that ends up active after this transition
    pub const fn target(self) -> StateId {
        match self {
            Self::Enter(state) => state,
            Self::Fallback => StateId::Start,
        }
    }
}

/// Every handled (state, message) pair and the state it leads to
pub const TRANSITIONS: [(StateId, Message, StateId); 10] = [
    (StateId::Start, Message::StartSignal, StateId::Start),
    (StateId::Start, Message::ShortPress, StateId::Warm),
    (StateId::Start, Message::LongPress, StateId::Start),
    (StateId::Warm, Message::NullCompletion, StateId::Ready),
    (StateId::Warm, Message::ShortPress, StateId::Start),
    (StateId::Warm, Message::LongPress, StateId::Start),
    (StateId::Ready, Message::ShortPress, StateId::Snap),
    (StateId::Ready, Message::LongPress, StateId::Start),
    (StateId::Snap, Message::NullCompletion, StateId::Ready),
    (StateId::Snap, Message::LongPress, StateId::Start),
];

/// Look up the next state. Pure.
pub const fn next_state(state: StateId, message: Message) -> Transition {
    use Message::{LongPress, NullCompletion, ShortPress, StartSignal, Unrecognized};
    use StateId::{Ready, Snap, Start, Warm};

    match (state, message) {
        (Start, StartSignal) => Transition::Enter(Start),
        (Start, ShortPress) => Transition::Enter(Warm),
        (Start, LongPress) => Transition::Enter(Start),
        (Warm, NullCompletion) => Transition::Enter(Ready),
        (Warm, ShortPress) => Transition::Enter(Start),
        (Warm, LongPress) => Transition::Enter(Start),
        (Ready, ShortPress) => Transition::Enter(Snap),
        (Ready, LongPress) => Transition::Enter(Start),
        (Snap, NullCompletion) => Transition::Enter(Ready),
        (Snap, LongPress) => Transition::Enter(Start),
        (Start, NullCompletion | Unrecognized)
        | (Warm, StartSignal | Unrecognized)
        | (Ready, StartSignal | NullCompletion | Unrecognized)
        | (Snap, StartSignal | ShortPress | Unrecognized) => Transition::Fallback,
    }
}
