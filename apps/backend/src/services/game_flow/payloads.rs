//! Response payloads for guess resolution.

use serde::Serialize;

use crate::domain::cards::Card;
use crate::domain::state::Outcome;

/// Outcome of one resolved guess.
///
/// `card.misfortune_index` is present iff the guess was correct: a wrong or
/// timed-out guess learns nothing about the card it just failed on, matching
/// how the value is hidden at deal time.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GuessResolution {
    pub card: Card,
    pub correct_position: usize,
    pub is_correct: bool,
    /// Set on the resolution that ends the game.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub outcome: Option<Outcome>,
}
