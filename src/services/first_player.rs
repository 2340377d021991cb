use rand::{seq::SliceRandom, Rng};

use crate::error::GameError;

/// Picks who opens the discussion. `previous` is left out of the draw
/// whenever at least one other name remains, so the same player never opens
/// twice in a row unless they are alone.
pub fn pick<R: Rng + ?Sized>(
    names: &[String],
    previous: Option<&str>,
    rng: &mut R,
) -> Result<String, GameError> {
    if names.len() == 1 {
        return Ok(names[0].clone());
    }

    let candidates: Vec<&String> = match previous {
        Some(prev) => {
            let others: Vec<&String> = names.iter().filter(|n| n.as_str() != prev).collect();
            if others.is_empty() {
                names.iter().collect()
            } else {
                others
            }
        }
        None => names.iter().collect(),
    };

    candidates
        .choose(rng)
        .map(|name| (*name).clone())
        .ok_or(GameError::NoCandidates)
}
