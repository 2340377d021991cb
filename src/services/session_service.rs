use log::{debug, info, warn};
use std::sync::{Arc, Weak};
use std::time::Duration;
use tokio::sync::{watch, Mutex};
use tokio::task::AbortHandle;
use tokio::time::{self, Instant};

use crate::error::GameError;
use crate::models::{
    config::GameConfig,
    round::RoundAssignment,
    session::{SessionState, Stage},
};
use crate::services::{
    first_player,
    reveal_timer::{TickOutcome, TimerToken, ToggleOutcome},
    round_generator::{self, MIN_PARTICIPANTS},
    words::{StaticWords, WordSource},
};
use crate::state::{Session, SharedSession};

/// The only mutation boundary of a game session. Presentation code forwards
/// user gestures here and renders the snapshots published on `subscribe`.
#[derive(Clone)]
pub struct SessionController {
    session: SharedSession,
    words: Arc<dyn WordSource>,
    tick_interval: Duration,
}

impl SessionController {
    pub fn new(config: &GameConfig, words: Arc<dyn WordSource>) -> Self {
        Self {
            session: Arc::new(Mutex::new(Session::new(config))),
            words,
            tick_interval: config.tick_interval,
        }
    }

    pub fn from_config(config: &GameConfig) -> Self {
        let words = config
            .words
            .clone()
            .map(StaticWords::new)
            .unwrap_or_default();
        Self::new(config, Arc::new(words))
    }

    pub async fn snapshot(&self) -> SessionState {
        self.session.lock().await.state.clone()
    }

    pub async fn subscribe(&self) -> watch::Receiver<SessionState> {
        self.session.lock().await.subscribe()
    }

    pub async fn active_timers(&self) -> usize {
        self.session.lock().await.timers.active()
    }

    pub async fn add_participant(&self, name: &str) -> bool {
        let mut session = self.session.lock().await;
        if session.state.stage != Stage::Setup {
            return false;
        }

        let name = name.trim();
        if name.is_empty() || session.state.roster.iter().any(|n| n == name) {
            return false;
        }

        session.state.roster.push(name.to_string());
        debug!("participant added: {}", name);
        session.publish();
        true
    }

    pub async fn remove_participant(&self, name: &str) -> bool {
        let mut session = self.session.lock().await;
        if session.state.stage != Stage::Setup {
            return false;
        }

        let Some(index) = session.state.roster.iter().position(|n| n == name) else {
            return false;
        };
        session.state.roster.remove(index);
        debug!("participant removed: {}", name);
        session.publish();
        true
    }

    pub async fn start_game(&self) -> Result<(), GameError> {
        let mut guard = self.session.lock().await;
        let session = &mut *guard;
        if session.state.stage != Stage::Setup {
            return Err(GameError::InvalidStage {
                expected: Stage::Setup,
                actual: session.state.stage,
            });
        }

        let (round, first) = self.deal(session, None)?;
        info!(
            "game started with {} participants (round {})",
            round.len(),
            round.generation
        );
        session.state.round = Some(round);
        session.state.first_player = Some(first);
        session.state.first_player_visible = false;
        session.state.stage = Stage::Playing;
        session.publish();
        Ok(())
    }

    pub async fn new_round(&self) -> Result<(), GameError> {
        let mut guard = self.session.lock().await;
        let session = &mut *guard;
        if session.state.stage != Stage::Playing {
            debug!("new round ignored outside of a game");
            return Ok(());
        }

        let previous = session.state.first_player.clone();
        let (round, first) = self.deal(session, previous.as_deref())?;

        session.timers.cancel_all(&mut session.state);
        info!("new round {} dealt", round.generation);
        session.state.round = Some(round);
        session.state.first_player = Some(first);
        session.state.first_player_visible = false;
        session.publish();
        Ok(())
    }

    pub async fn shuffle_first_player(&self) -> bool {
        let mut guard = self.session.lock().await;
        let session = &mut *guard;
        if session.state.stage != Stage::Playing {
            return false;
        }

        // ラウンドが無ければ名簿全体から選ぶ
        let names = match &session.state.round {
            Some(round) if !round.is_empty() => round.names(),
            _ => session.state.roster.clone(),
        };
        let previous = session.state.first_player.clone();
        match first_player::pick(&names, previous.as_deref(), &mut session.rng) {
            Ok(first) => {
                debug!("first player reshuffled: {}", first);
                session.state.first_player = Some(first);
                session.publish();
                true
            }
            Err(e) => {
                warn!("could not pick a first player: {}", e);
                false
            }
        }
    }

    pub async fn toggle_first_player_visibility(&self) -> bool {
        let mut session = self.session.lock().await;
        if session.state.stage != Stage::Playing {
            return false;
        }
        session.state.first_player_visible = !session.state.first_player_visible;
        session.publish();
        true
    }

    pub async fn reset_session(&self) {
        let mut guard = self.session.lock().await;
        let session = &mut *guard;
        session.timers.cancel_all(&mut session.state);
        session.state.roster.clear();
        session.state.round = None;
        session.state.first_player = None;
        session.state.first_player_visible = false;
        session.state.stage = Stage::Setup;
        info!("session reset");
        session.publish();
    }

    pub async fn toggle_reveal(&self, index: usize) -> bool {
        let mut guard = self.session.lock().await;
        let session = &mut *guard;
        if session.state.stage != Stage::Playing {
            return false;
        }

        match session.timers.toggle(&mut session.state, index) {
            ToggleOutcome::Revealed(token) => {
                let handle = spawn_ticker(
                    Arc::downgrade(&self.session),
                    index,
                    token,
                    self.tick_interval,
                );
                session.timers.attach(index, token, handle);
                session.publish();
                true
            }
            ToggleOutcome::Hidden => {
                session.publish();
                true
            }
            ToggleOutcome::Ignored => false,
        }
    }

    // 新しいラウンドと最初のプレイヤーを決める。失敗しても状態は変えない
    fn deal(
        &self,
        session: &mut Session,
        previous: Option<&str>,
    ) -> Result<(RoundAssignment, String), GameError> {
        let roster = &session.state.roster;
        if roster.len() < MIN_PARTICIPANTS {
            return Err(GameError::InsufficientParticipants {
                required: MIN_PARTICIPANTS,
                actual: roster.len(),
            });
        }

        let generation = session.generation + 1;
        let round =
            round_generator::generate(roster, self.words.words(), generation, &mut session.rng)?;
        let first = first_player::pick(&round.names(), previous, &mut session.rng)?;
        session.generation = generation;
        Ok((round, first))
    }
}

fn spawn_ticker(
    weak: Weak<Mutex<Session>>,
    index: usize,
    token: TimerToken,
    period: Duration,
) -> AbortHandle {
    tokio::spawn(async move {
        let mut ticker = time::interval_at(Instant::now() + period, period);
        loop {
            ticker.tick().await;
            // セッションが破棄されていれば終了
            let Some(shared) = weak.upgrade() else {
                break;
            };
            let mut guard = shared.lock().await;
            let session = &mut *guard;
            match session.timers.apply_tick(&mut session.state, index, token) {
                TickOutcome::Counting(_) => session.publish(),
                TickOutcome::Expired => {
                    session.publish();
                    break;
                }
                TickOutcome::Stale => break,
            }
        }
    })
    .abort_handle()
}
