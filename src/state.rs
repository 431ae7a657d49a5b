//! State bodies.
//!
//! Every state renders its entry pattern, clears the inbox and then either
//! waits for a press (waiting states) or plays a fixed animation and
//! completes on its own (transient states).
//!
//! ```text
//!            (Start) <-------------- Snap
//!              |        long            ^|
//!        short |                        ||
//!              |                  short ||  auto
//!              v          auto          |v
//!            Warm -----------------> Ready
//!
//!  long press from any state returns to Start
//! ```

use embassy_time::Duration;
use log::{debug, info};

use crate::config::StateTimings;
use crate::inbox::Inbox;
use crate::message::{Message, StateId};
use crate::pattern::{Flash, Lamps, LightPattern};
use crate::renderer::Renderer;
use crate::{Delay, IndicatorDriver};

/// What a waiting state does between two inbox polls
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IdleTick {
    /// Blink the lamps once
    Blink(Lamps, Flash),
    /// Keep the entry pattern and sleep
    Sleep(Duration),
}

/// Shape of a state body
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StateBody {
    /// Returns as soon as the inbox holds a message
    Waiting { entry: Lamps, tick: IdleTick },
    /// Plays `animation` to the end, then completes
    Transient { entry: Lamps, animation: LightPattern },
}

impl StateBody {
    pub const fn entry(&self) -> Lamps {
        match self {
            Self::Waiting { entry, .. } | Self::Transient { entry, .. } => *entry,
        }
    }
}

impl StateId {
    /// Body description of this state under the given timings
    pub const fn body(self, timings: &StateTimings) -> StateBody {
        match self {
            Self::Start => StateBody::Waiting {
                entry: Lamps::OFF,
                tick: IdleTick::Blink(Lamps::YELLOW, timings.start_blink),
            },
            Self::Warm => StateBody::Transient {
                entry: Lamps::RED_YELLOW,
                animation: LightPattern::flashing(Lamps::RED_YELLOW, timings.warm_flash),
            },
            Self::Ready => StateBody::Waiting {
                entry: Lamps::RED,
                tick: IdleTick::Sleep(timings.ready_poll),
            },
            Self::Snap => StateBody::Transient {
                entry: Lamps::RED_BLUE,
                animation: LightPattern::flashing(Lamps::RED_BLUE, timings.snap_flash),
            },
        }
    }
}

/// Run the body of `state` until it produces a message.
///
/// `incoming` is the message that caused the state to be entered; it is
/// only reported. Any message still waiting in the inbox on entry is stale
/// and discarded.
///
/// Transient states never wait for input: once the animation is over they
/// return the press that arrived while it played, or
/// [`Message::NullCompletion`] when there was none.
pub fn run_state<D: IndicatorDriver, T: Delay>(
    state: StateId,
    incoming: Message,
    timings: &StateTimings,
    renderer: &mut Renderer<D>,
    delay: &mut T,
    inbox: &Inbox,
) -> (StateId, Message) {
    let body = state.body(timings);
    renderer.set_pattern(body.entry());
    info!("in {}, incoming={}", state, incoming);
    if let Some(stale) = inbox.clear() {
        debug!("{}: discarded stale {}", state, stale);
    }

    let message = match body {
        StateBody::Waiting { tick, .. } => loop {
            match tick {
                IdleTick::Blink(lamps, flash) => renderer.animate(lamps, flash, delay),
                IdleTick::Sleep(interval) => delay.delay(interval),
            }
            if let Some(message) = inbox.take() {
                break message;
            }
            debug!("{} idle", state);
        },
        StateBody::Transient { animation, .. } => {
            renderer.render(animation, delay);
            inbox.take().unwrap_or(Message::NullCompletion)
        }
    };

    info!("{} got a message: {}", state, message);
    (state, message)
}
