//! Ghost game-tree solving
//!
//! Minimax labeling over the prefix tree plus extraction of one optimal
//! line of play.

mod engine;
mod extract;
mod labeling;
mod outcome;

pub use engine::{Solution, solve};
pub use extract::extract_win;
pub use labeling::label_outcomes;
pub use outcome::{OutcomeTable, Player};
