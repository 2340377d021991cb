use rand::{seq::SliceRandom, Rng};

use crate::error::GameError;
use crate::models::{participant::Participant, role::Role, round::RoundAssignment};

pub const MIN_PARTICIPANTS: usize = 3;

/// Builds one round: a uniformly chosen word, a uniform permutation of the
/// roster and a uniformly chosen impostor slot.
pub fn generate<R: Rng + ?Sized>(
    roster: &[String],
    words: &[String],
    generation: u64,
    rng: &mut R,
) -> Result<RoundAssignment, GameError> {
    if roster.len() < MIN_PARTICIPANTS {
        return Err(GameError::InsufficientParticipants {
            required: MIN_PARTICIPANTS,
            actual: roster.len(),
        });
    }
    let word = words.choose(rng).ok_or(GameError::EmptyWordSource)?.clone();

    // Fisher–Yates
    let mut names = roster.to_vec();
    names.shuffle(rng);

    let impostor_index = rng.gen_range(0..names.len());

    let participants = names
        .into_iter()
        .enumerate()
        .map(|(index, name)| {
            let role = if index == impostor_index {
                Role::Impostor
            } else {
                Role::SecretWord(word.clone())
            };
            Participant::new(name, role)
        })
        .collect();

    Ok(RoundAssignment {
        generation,
        word,
        participants,
    })
}
