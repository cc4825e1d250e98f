//! Triangular peg solitaire game logic.
//!
//! # Board Layout
//!
//! ```text
//! Holes are numbered row-major from the apex, 1-based.
//! Row r (0-based) holds r + 1 holes, index 0..=r.
//!
//!              1                row 0
//!            2   3              row 1
//!          4   5   6            row 2
//!        7   8   9  10          row 3
//!     11  12  13  14  15        row 4
//!
//! number(row, index) = row * (row + 1) / 2 + index + 1
//! ```
//!
//! # Jumps
//!
//! ```text
//! A peg jumps over an occupied neighbour into an empty hole two steps away.
//! (Δrow, Δindex) is one of the six lattice vectors:
//!
//!   (0, -2)  (0, +2)      along the row
//!   (-2, 0)  (+2, 0)      along the left diagonal
//!   (-2, -2) (+2, +2)     along the right diagonal
//!
//! The jumped peg sits at the half-way point and is removed.
//! ```
//!
//! A game starts with a full [`Board`], one call to
//! [`Board::remove_initial_peg`], then repeated [`Board::move_peg`] until
//! [`Board::all_moves`] is empty. [`Board::go_back`] undoes one move at a time.

pub mod board;
pub mod error;
pub mod moves;
pub mod peg;
pub mod rating;

#[cfg(feature = "wasm")]
pub mod wasm;

pub use board::{Board, OpenMoves};
pub use error::{BoardError, IllegalMove};
pub use moves::{Move, MoveHistory};
pub use peg::{last_peg_number, locate_peg, peg_number, Coord, Peg, EMPTY_HOLE, JUMPS};
pub use rating::Rating;
