use crate::models::session::Stage;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GameError {
    #[error("insufficient participants: at least {required} required, {actual} present")]
    InsufficientParticipants { required: usize, actual: usize },
    #[error("the word source has no candidate words")]
    EmptyWordSource,
    #[error("no candidates to pick from")]
    NoCandidates,
    #[error("operation requires stage {expected:?}, session is in {actual:?}")]
    InvalidStage { expected: Stage, actual: Stage },
}
