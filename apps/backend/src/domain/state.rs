//! Session state machine for a single misfortune game.

use std::collections::HashSet;

use serde::Serialize;

use crate::domain::cards::{Card, CardId};
use crate::domain::rules;
use crate::errors::domain::DomainError;

/// Game progression phases.
///
/// Illegal calls are rejected against the current phase rather than against
/// scattered flags; `Won` and `Lost` are absorbing.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Serialize)]
pub enum Phase {
    /// Session exists; a round may be dealt.
    AwaitingRound,
    /// Exactly one dealt round is outstanding.
    RoundActive,
    /// Terminal: six cards collected.
    Won,
    /// Terminal: three misses, or the demo round is over.
    Lost,
}

impl Phase {
    pub fn is_terminal(self) -> bool {
        matches!(self, Phase::Won | Phase::Lost)
    }
}

/// Terminal result of a game.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Outcome {
    Won,
    Lost,
}

/// One resolved round, as recorded for history.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RoundRecord {
    /// 1-based.
    pub round_number: u32,
    pub card_id: CardId,
    pub correct_position: usize,
    /// `None` records a timeout.
    pub player_guess_position: Option<usize>,
}

/// Result of applying one resolved round to a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Applied {
    pub is_correct: bool,
    /// Set when this resolution ended the game.
    pub outcome: Option<Outcome>,
}

/// Full mutable state of one game in progress.
#[derive(Debug, Clone)]
pub struct GameSession {
    pub phase: Phase,
    /// Always sorted ascending by misfortune index, which is present on
    /// every owned card.
    pub owned_cards: Vec<Card>,
    /// Every card shown this game, owned or rejected. Grows only.
    pub used_card_ids: HashSet<CardId>,
    /// The first three cards dealt, in deal order; fixed for the life of
    /// the game.
    pub initial_cards: Vec<Card>,
    /// Append-only round history.
    pub rounds: Vec<RoundRecord>,
    pub rounds_served: u32,
    pub misses: u8,
}

impl GameSession {
    /// Seed a fresh session from the initial hand. Every card must carry
    /// its misfortune index; the owned hand is kept sorted from the start.
    pub fn new(initial_cards: Vec<Card>) -> Result<Self, DomainError> {
        for card in &initial_cards {
            card.require_misfortune_index()?;
        }
        let mut owned_cards = initial_cards.clone();
        owned_cards.sort_by_key(|c| c.misfortune_index);
        let used_card_ids = initial_cards.iter().map(|c| c.id).collect();
        Ok(Self {
            phase: Phase::AwaitingRound,
            owned_cards,
            used_card_ids,
            initial_cards,
            rounds: Vec::new(),
            rounds_served: 0,
            misses: 0,
        })
    }

    /// Ids of the initial hand, in deal order.
    pub fn initial_card_ids(&self) -> Vec<CardId> {
        self.initial_cards.iter().map(|c| c.id).collect()
    }

    /// A round may be dealt in any non-terminal phase; dealing over an
    /// outstanding round discards it (last-deal-wins).
    pub fn require_dealable(&self) -> Result<(), DomainError> {
        if self.phase.is_terminal() {
            return Err(DomainError::game_already_complete(
                "cannot deal into a finished game",
            ));
        }
        Ok(())
    }

    pub fn require_round_active(&self) -> Result<(), DomainError> {
        match self.phase {
            Phase::RoundActive => Ok(()),
            Phase::AwaitingRound => Err(DomainError::no_active_round("no round has been dealt")),
            Phase::Won | Phase::Lost => {
                Err(DomainError::game_already_complete("game has ended"))
            }
        }
    }

    /// Record that a round was dealt for `card_id`.
    pub fn mark_round_dealt(&mut self, card_id: CardId) -> Result<(), DomainError> {
        self.require_dealable()?;
        self.used_card_ids.insert(card_id);
        self.phase = Phase::RoundActive;
        Ok(())
    }

    /// Apply one resolved round: the exactly-once state advance.
    ///
    /// `final_guess` is the timer's authoritative verdict (`None` for a
    /// timeout); `correct_position` must have been computed against the
    /// current owned hand. Inserting at that position keeps the hand sorted
    /// because the resolver derived it from the same sorted list.
    pub fn apply_resolution(
        &mut self,
        card: Card,
        correct_position: usize,
        final_guess: Option<usize>,
        authenticated: bool,
    ) -> Result<Applied, DomainError> {
        self.require_round_active()?;
        card.require_misfortune_index()?;

        let is_correct = final_guess == Some(correct_position);
        self.rounds_served += 1;
        if is_correct {
            self.owned_cards.insert(correct_position, card.clone());
        } else {
            self.misses += 1;
        }
        self.rounds.push(RoundRecord {
            round_number: self.rounds_served,
            card_id: card.id,
            correct_position,
            player_guess_position: final_guess,
        });
        debug_assert!(self.owned_sorted());

        let outcome = rules::outcome_for(
            self.owned_cards.len(),
            self.misses,
            self.rounds_served,
            authenticated,
        );
        self.phase = match outcome {
            Some(Outcome::Won) => Phase::Won,
            Some(Outcome::Lost) => Phase::Lost,
            None => Phase::AwaitingRound,
        };
        Ok(Applied {
            is_correct,
            outcome,
        })
    }

    fn owned_sorted(&self) -> bool {
        self.owned_cards
            .windows(2)
            .all(|pair| pair[0].misfortune_index <= pair[1].misfortune_index)
    }
}
