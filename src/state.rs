use rand::{rngs::StdRng, SeedableRng};
use std::sync::Arc;
use tokio::sync::{watch, Mutex};

use crate::models::config::GameConfig;
use crate::models::session::SessionState;
use crate::services::reveal_timer::RevealTimerManager;

/// Everything guarded by the session lock. Timer ticks and user commands
/// both mutate it only while holding that lock.
pub struct Session {
    pub state: SessionState,
    pub timers: RevealTimerManager,
    pub rng: StdRng,
    pub generation: u64,
    updates: watch::Sender<SessionState>,
}

pub type SharedSession = Arc<Mutex<Session>>;

impl Session {
    pub fn new(config: &GameConfig) -> Self {
        let rng = match config.rng_seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        let state = SessionState::new();
        let (updates, _) = watch::channel(state.clone());
        Session {
            state,
            timers: RevealTimerManager::new(config.reveal_seconds),
            rng,
            generation: 0,
            updates,
        }
    }

    pub fn next_generation(&mut self) -> u64 {
        self.generation += 1;
        self.generation
    }

    pub fn subscribe(&self) -> watch::Receiver<SessionState> {
        self.updates.subscribe()
    }

    // 購読者がいなくても状態は保持される
    pub fn publish(&self) {
        self.updates.send_replace(self.state.clone());
    }
}
