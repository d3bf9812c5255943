//! The host page's native notification surface.
//!
//! The engine never calls a filtering API. It edits controls and then emits
//! the same notifications a real user interaction would produce; the host's
//! own listeners do the rest.

use crate::Id;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Key {
    Enter,
    Escape,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DomEventKind {
    /// The control's text changed ("input changed").
    Input,
    /// The control's value was committed ("value committed").
    Change,
    KeyDown(Key),
    KeyUp(Key),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DomEvent {
    pub target: Id,
    pub kind: DomEventKind,
}

/// Where emitted notifications go. The host wires this to its own event
/// dispatch; tests record into a `Vec`.
pub trait EventSink {
    fn dispatch(&mut self, event: DomEvent);
}

impl EventSink for Vec<DomEvent> {
    fn dispatch(&mut self, event: DomEvent) {
        self.push(event);
    }
}
