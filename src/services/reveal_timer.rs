use log::debug;
use std::collections::HashMap;
use tokio::task::AbortHandle;

use crate::models::session::SessionState;

/// Identifies one reveal of one slot. A tick carrying a token that no longer
/// matches the slot's live entry is stale and must not touch the state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimerToken {
    id: u64,
    generation: u64,
}

#[derive(Debug)]
struct TimerSlot {
    token: TimerToken,
    handle: Option<AbortHandle>,
}

impl TimerSlot {
    fn cancel(self) {
        if let Some(handle) = self.handle {
            handle.abort();
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToggleOutcome {
    // 表示した。呼び出し側がこのトークンでティックを開始する
    Revealed(TimerToken),
    // 手動で隠した
    Hidden,
    // ラウンドが無い、または範囲外
    Ignored,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    Counting(u32),
    Expired,
    Stale,
}

/// Owns the per-slot countdowns of the current round.
///
/// The remaining seconds live in `SessionState::timers` so they can be
/// rendered; the tick sources and their tokens live here. Both maps always
/// hold the same keys, and a key is present iff that participant is revealed.
#[derive(Debug)]
pub struct RevealTimerManager {
    reveal_seconds: u32,
    slots: HashMap<usize, TimerSlot>,
    next_token: u64,
}

impl RevealTimerManager {
    pub fn new(reveal_seconds: u32) -> Self {
        Self {
            reveal_seconds,
            slots: HashMap::new(),
            next_token: 0,
        }
    }

    pub fn reveal_seconds(&self) -> u32 {
        self.reveal_seconds
    }

    pub fn active(&self) -> usize {
        self.slots.len()
    }

    pub fn toggle(&mut self, state: &mut SessionState, index: usize) -> ToggleOutcome {
        let Some(round) = state.round.as_mut() else {
            return ToggleOutcome::Ignored;
        };
        let generation = round.generation;
        let Some(participant) = round.participants.get_mut(index) else {
            debug!("toggle ignored: slot {} out of range", index);
            return ToggleOutcome::Ignored;
        };

        if participant.revealed {
            participant.revealed = false;
            state.timers.remove(&index);
            if let Some(slot) = self.slots.remove(&index) {
                slot.cancel();
            }
            debug!("slot {} hidden manually", index);
            return ToggleOutcome::Hidden;
        }

        // 古いティックが残っていれば先に止める
        if let Some(slot) = self.slots.remove(&index) {
            slot.cancel();
        }
        self.next_token += 1;
        let token = TimerToken {
            id: self.next_token,
            generation,
        };
        participant.revealed = true;
        state.timers.insert(index, self.reveal_seconds);
        self.slots.insert(
            index,
            TimerSlot {
                token,
                handle: None,
            },
        );
        debug!("slot {} revealed for {}s", index, self.reveal_seconds);
        ToggleOutcome::Revealed(token)
    }

    /// Binds the running tick source to the reveal it was started for. A
    /// handle for a reveal that is no longer live is aborted immediately.
    pub fn attach(&mut self, index: usize, token: TimerToken, handle: AbortHandle) {
        match self.slots.get_mut(&index) {
            Some(slot) if slot.token == token => {
                if let Some(old) = slot.handle.replace(handle) {
                    old.abort();
                }
            }
            _ => handle.abort(),
        }
    }

    pub fn apply_tick(
        &mut self,
        state: &mut SessionState,
        index: usize,
        token: TimerToken,
    ) -> TickOutcome {
        let live = self
            .slots
            .get(&index)
            .map_or(false, |slot| slot.token == token);
        let current_generation = state.round.as_ref().map(|round| round.generation);
        if !live || current_generation != Some(token.generation) {
            return TickOutcome::Stale;
        }
        let Some(remaining) = state.timers.get_mut(&index) else {
            return TickOutcome::Stale;
        };

        *remaining = remaining.saturating_sub(1);
        if *remaining > 0 {
            return TickOutcome::Counting(*remaining);
        }

        // 期限切れ: 自動で隠す。ティック元は呼び出し側で終了する
        state.timers.remove(&index);
        self.slots.remove(&index);
        if let Some(participant) = state
            .round
            .as_mut()
            .and_then(|round| round.participants.get_mut(index))
        {
            participant.revealed = false;
        }
        debug!("slot {} auto-hidden", index);
        TickOutcome::Expired
    }

    pub fn cancel_all(&mut self, state: &mut SessionState) {
        for (_, slot) in self.slots.drain() {
            slot.cancel();
        }
        state.timers.clear();
        if let Some(round) = state.round.as_mut() {
            for participant in &mut round.participants {
                participant.revealed = false;
            }
        }
    }
}

impl Drop for RevealTimerManager {
    fn drop(&mut self) {
        for (_, slot) in self.slots.drain() {
            slot.cancel();
        }
    }
}
