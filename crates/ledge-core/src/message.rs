#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Informational message exchanged between the two characters' agents.
///
/// Messages never alter control flow on the receiving side.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct AgentMessage {
    pub text: String,
    /// Free-form description of an attached payload, if any.
    pub attachment: Option<String>,
}

impl AgentMessage {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            attachment: None,
        }
    }

    pub fn with_attachment(mut self, attachment: impl Into<String>) -> Self {
        self.attachment = Some(attachment.into());
        self
    }
}

/// Fire-and-forget outbound queue, drained completely on every poll.
#[derive(Debug, Default, Clone)]
pub struct Outbox {
    pending: Vec<AgentMessage>,
}

impl Outbox {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, message: AgentMessage) {
        self.pending.push(message);
    }

    pub fn len(&self) -> usize {
        self.pending.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }

    /// Take every queued message in send order, leaving the queue empty.
    pub fn drain(&mut self) -> Vec<AgentMessage> {
        std::mem::take(&mut self.pending)
    }
}
