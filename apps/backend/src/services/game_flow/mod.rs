//! Game flow orchestration - drives the per-session state machine over the
//! stores and the catalog/archive ports.

mod engine;
mod payloads;

#[cfg(test)]
mod test_doubles;

pub use engine::GameEngine;
pub use payloads::GuessResolution;
