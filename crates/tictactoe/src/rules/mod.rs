//! Game rules for tic-tac-toe.
//!
//! Pure functions for evaluating a board. They are kept apart from board
//! storage so the engine and the invariant checks share one definition.

pub mod tie;
pub mod win;

pub use tie::is_full;
pub use win::{find_winning_combination, line_owner};
