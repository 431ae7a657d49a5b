//! Single-slot message inbox for `no_std` environments.
//!
//! Bridges the press classifier (writer, may run in interrupt context) and
//! the active state body (reader). Built on `critical-section`, so every
//! access is atomic at the granularity of one message.

use core::cell::Cell;

use critical_section::Mutex;

use crate::message::Message;

/// Error returned by [`Inbox::offer`] when an unread message is present.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InboxOccupied(pub Message);

/// Single-slot, interrupt-safe mailbox.
///
/// Holds either nothing or the latest [`Message`]. There is never more than
/// one unread message.
pub struct Inbox {
    slot: Mutex<Cell<Option<Message>>>,
}

impl Inbox {
    /// Create a new empty inbox.
    pub const fn new() -> Self {
        Self {
            slot: Mutex::new(Cell::new(None)),
        }
    }

    /// Write a message, replacing any unread one.
    ///
    /// Returns the message that was replaced without being read.
    pub fn post(&self, message: Message) -> Option<Message> {
        critical_section::with(|cs| self.slot.borrow(cs).replace(Some(message)))
    }

    /// Write a message only if the inbox is empty.
    ///
    /// Returns `Err(InboxOccupied(message))` when an unread message is
    /// already waiting; the waiting message is left untouched.
    pub fn offer(&self, message: Message) -> Result<(), InboxOccupied> {
        critical_section::with(|cs| {
            let slot = self.slot.borrow(cs);
            if slot.get().is_some() {
                return Err(InboxOccupied(message));
            }
            slot.set(Some(message));
            Ok(())
        })
    }

    /// Read and clear the inbox in one step.
    pub fn take(&self) -> Option<Message> {
        critical_section::with(|cs| self.slot.borrow(cs).take())
    }

    /// Look at the pending message without consuming it.
    pub fn peek(&self) -> Option<Message> {
        critical_section::with(|cs| self.slot.borrow(cs).get())
    }

    /// Drop any pending message.
    ///
    /// Returns the discarded message, if any.
    pub fn clear(&self) -> Option<Message> {
        self.take()
    }

    pub fn is_empty(&self) -> bool {
        self.peek().is_none()
    }
}

impl Default for Inbox {
    fn default() -> Self {
        Self::new()
    }
}
