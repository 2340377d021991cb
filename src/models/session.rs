use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

use super::round::RoundAssignment;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum Stage {
    #[default]
    Setup,   // 名簿の編集
    Playing, // ラウンド進行中
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct SessionState {
    pub stage: Stage,
    pub roster: Vec<String>,
    pub round: Option<RoundAssignment>,
    pub first_player: Option<String>,
    pub first_player_visible: bool,
    // スロット番号 → 残り秒数
    pub timers: BTreeMap<usize, u32>,
}

impl SessionState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_revealed(&self, index: usize) -> bool {
        self.round
            .as_ref()
            .and_then(|round| round.participants.get(index))
            .map(|p| p.revealed)
            .unwrap_or(false)
    }

    pub fn remaining(&self, index: usize) -> Option<u32> {
        self.timers.get(&index).copied()
    }
}

impl fmt::Display for SessionState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.stage {
            Stage::Setup => {
                writeln!(f, "Players ({}): {}", self.roster.len(), self.roster.join(", "))?;
                if !self.roster.is_empty() && self.roster.len() < 3 {
                    writeln!(f, "Add at least 3 players to start")?;
                }
                Ok(())
            }
            Stage::Playing => {
                if let (true, Some(first)) = (self.first_player_visible, &self.first_player) {
                    writeln!(f, "First player: {}", first)?;
                }
                let Some(round) = &self.round else {
                    return Ok(());
                };
                for (index, participant) in round.participants.iter().enumerate() {
                    if participant.revealed {
                        let remaining = self
                            .remaining(index)
                            .map(|secs| format!(" ({}s)", secs))
                            .unwrap_or_default();
                        writeln!(
                            f,
                            "[{}] {}: {}{}",
                            index, participant.name, participant.role, remaining
                        )?;
                    } else {
                        writeln!(f, "[{}] {}: ?", index, participant.name)?;
                    }
                }
                Ok(())
            }
        }
    }
}
