//! Services orchestrating domain logic over the shared stores and ports.

pub mod game_flow;
