//! Opponent generation and decision making.

pub mod ai;
pub mod generator;

pub use ai::{OpponentMove, choose_move};
pub use generator::{generate, level_factor, scale_template};
