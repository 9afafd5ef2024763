//! Fixed game rules: hand bounds and terminal-outcome decision.

use crate::domain::state::Outcome;

/// Cards dealt when a game starts.
pub const INITIAL_HAND: usize = 3;
/// Owned-card count that wins the game.
pub const WINNING_HAND: usize = 6;
/// Incorrect or timed-out guesses that lose the game.
pub const MAX_MISSES: u8 = 3;

/// Terminal outcome for the given counters, if the game is over.
///
/// Anonymous callers play a one-round demo: their game is forced terminal
/// after the first resolved round regardless of how it went. That single
/// round can never reach six owned cards, so the demo outcome follows the
/// same owned-count rule as a full game.
pub fn outcome_for(
    owned: usize,
    misses: u8,
    rounds_served: u32,
    authenticated: bool,
) -> Option<Outcome> {
    let complete =
        owned >= WINNING_HAND || misses >= MAX_MISSES || (!authenticated && rounds_served >= 1);
    if !complete {
        return None;
    }
    if owned >= WINNING_HAND {
        Some(Outcome::Won)
    } else {
        Some(Outcome::Lost)
    }
}
