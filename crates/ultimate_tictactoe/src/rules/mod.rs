//! Game rules for ultimate tic-tac-toe.
//!
//! Pure functions that evaluate a board without mutating it. The same
//! three-in-a-row test decides each sub-board and, applied to the
//! sub-board outcomes, the overall game.

pub mod draw;
pub mod outcome;
pub mod win;

pub use draw::{all_decided, is_full};
pub use outcome::{is_game_over, sub_board_outcome};
pub use win::{overall_winner, three_in_a_row, LINES};
