use serde::{Deserialize, Serialize};

use super::participant::Participant;

/// One complete role assignment covering the whole roster.
///
/// `generation` increases with every assignment produced by a session, so a
/// card or timer can tell whether it still belongs to the live round.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoundAssignment {
    pub generation: u64,
    pub word: String,
    pub participants: Vec<Participant>,
}

impl RoundAssignment {
    pub fn names(&self) -> Vec<String> {
        self.participants.iter().map(|p| p.name.clone()).collect()
    }

    pub fn impostor(&self) -> Option<&Participant> {
        self.participants.iter().find(|p| p.role.is_impostor())
    }

    pub fn len(&self) -> usize {
        self.participants.len()
    }

    pub fn is_empty(&self) -> bool {
        self.participants.is_empty()
    }
}
