//! # Mediator: participants talk through a hub, not each other.
//!
//! [`Chatroom`] owns the participants and routes every message; a
//! participant never holds a reference to another participant. Direct
//! messages go to one recipient, broadcasts to everyone except the
//! sender, in registration order.

use crate::error::DispatchError;

/// A chat participant: a name and the transcript of what it received.
#[derive(Debug)]
pub struct Participant {
    name: String,
    inbox: Vec<String>,
}

impl Participant {
    fn new(name: String) -> Self {
        Self {
            name,
            inbox: Vec::new(),
        }
    }

    /// Participant name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Messages received, oldest first, rendered as
    /// `"<from> to <self>: <message>"`.
    pub fn inbox(&self) -> &[String] {
        &self.inbox
    }

    fn receive(&mut self, message: &str, from: &str) {
        self.inbox.push(format!("{from} to {}: {message}", self.name));
    }
}

/// Central routing point for a set of participants.
#[derive(Debug, Default)]
pub struct Chatroom {
    participants: Vec<Participant>,
}

impl Chatroom {
    /// Creates an empty chatroom.
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a participant under the given name.
    ///
    /// Re-registering an existing name is a no-op; the original inbox is
    /// kept.
    pub fn register(&mut self, name: impl Into<String>) {
        let name = name.into();
        if self.position(&name).is_none() {
            self.participants.push(Participant::new(name));
        }
    }

    /// Sends a direct message from `from` to `to`.
    ///
    /// # Errors
    /// [`DispatchError::UnknownParticipant`] if either end is not
    /// registered.
    pub fn send(&mut self, message: &str, from: &str, to: &str) -> Result<(), DispatchError> {
        self.position(from).ok_or_else(|| unknown(from))?;
        let to_pos = self.position(to).ok_or_else(|| unknown(to))?;
        self.participants[to_pos].receive(message, from);
        Ok(())
    }

    /// Broadcasts from `from` to every other participant, in registration
    /// order.
    ///
    /// # Errors
    /// [`DispatchError::UnknownParticipant`] if the sender is not
    /// registered.
    pub fn broadcast(&mut self, message: &str, from: &str) -> Result<(), DispatchError> {
        self.position(from).ok_or_else(|| unknown(from))?;
        for participant in &mut self.participants {
            if participant.name != from {
                participant.receive(message, from);
            }
        }
        Ok(())
    }

    /// Looks up a participant by name.
    pub fn participant(&self, name: &str) -> Option<&Participant> {
        self.position(name).map(|pos| &self.participants[pos])
    }

    fn position(&self, name: &str) -> Option<usize> {
        self.participants.iter().position(|p| p.name == name)
    }
}

fn unknown(name: &str) -> DispatchError {
    DispatchError::UnknownParticipant {
        name: name.to_string(),
    }
}
