//! In-memory shared state: the session table and the active-round timer.

pub mod rounds;
pub mod sessions;

pub use rounds::{ActiveRound, FinalGuess, RoundTimer};
pub use sessions::SessionStore;
