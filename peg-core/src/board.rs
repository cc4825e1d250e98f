//! The triangular board: peg lookup, mutation, jump validation and enumeration, undo.

use std::collections::{BTreeMap, BTreeSet};
use std::fmt;

use log::{debug, trace};

use crate::error::{BoardError, IllegalMove};
use crate::moves::{Move, MoveHistory};
use crate::peg::{last_peg_number, locate_peg, Coord, Peg, JUMPS};

/// Legal jumps keyed by destination peg number, each listing source peg numbers.
pub type OpenMoves = BTreeMap<usize, Vec<usize>>;

/// A triangular peg board of `height` rows. Row `r` holds `r + 1` holes.
///
/// Pegs are created once and only toggle between present and removed; every
/// change made through [`Board::remove_initial_peg`], [`Board::move_peg`] and
/// [`Board::go_back`] is mirrored in the move history.
#[derive(Clone, Debug)]
pub struct Board {
    height: usize,
    pegs: Vec<Vec<Peg>>,
    total_pegs: usize,
    total_removed: usize,
    history: MoveHistory,
}

impl Board {
    /// Create a full board with every hole occupied.
    pub fn new(height: usize) -> Result<Board, BoardError> {
        if height == 0 {
            return Err(BoardError::InvalidHeight(height));
        }

        let pegs = (0..height)
            .map(|row| (0..=row).map(|index| Peg::at(Coord::new(row, index))).collect())
            .collect();

        Ok(Board {
            height,
            pegs,
            total_pegs: last_peg_number(height),
            total_removed: 0,
            history: MoveHistory::new(),
        })
    }

    #[inline]
    pub fn height(&self) -> usize {
        self.height
    }

    #[inline]
    pub fn total_pegs(&self) -> usize {
        self.total_pegs
    }

    #[inline]
    pub fn total_removed(&self) -> usize {
        self.total_removed
    }

    /// Pegs still on the board; the final score when the game is over.
    #[inline]
    pub fn pegs_left(&self) -> usize {
        self.total_pegs - self.total_removed
    }

    #[inline]
    pub fn history(&self) -> &MoveHistory {
        &self.history
    }

    /// Rows from the apex down.
    pub fn rows(&self) -> impl Iterator<Item = &[Peg]> + '_ {
        self.pegs.iter().map(Vec::as_slice)
    }

    /// Every peg in number order.
    pub fn iter(&self) -> impl Iterator<Item = &Peg> + '_ {
        self.pegs.iter().flatten()
    }

    // ========== Lookup ==========

    /// Check that `coord` names a hole on this board.
    fn resolve(&self, coord: Coord) -> Result<Coord, BoardError> {
        if coord.is_valid(self.height) {
            Ok(coord)
        } else {
            Err(BoardError::OutOfBounds {
                row: coord.row,
                index: coord.index,
            })
        }
    }

    /// Map a peg number to its hole, checked through the same bounds test as coordinates.
    pub fn locate(&self, number: usize) -> Result<Coord, BoardError> {
        let coord = locate_peg(number, self.height).ok_or(BoardError::NoSuchPeg(number))?;
        self.resolve(coord)
    }

    pub fn peg_at(&self, coord: Coord) -> Option<&Peg> {
        self.pegs.get(coord.row)?.get(coord.index)
    }

    pub fn peg(&self, number: usize) -> Option<&Peg> {
        self.locate(number).ok().and_then(|coord| self.peg_at(coord))
    }

    /// Whether the hole is empty; `None` if there is no such peg.
    pub fn is_removed(&self, number: usize) -> Option<bool> {
        self.peg(number).map(Peg::is_removed)
    }

    fn peg_mut(&mut self, coord: Coord) -> Result<&mut Peg, BoardError> {
        let coord = self.resolve(coord)?;
        Ok(&mut self.pegs[coord.row][coord.index])
    }

    // ========== Mutation ==========

    /// Put a removed peg back at `coord`.
    pub fn add_peg_at(&mut self, coord: Coord) -> Result<(), BoardError> {
        let peg = self.peg_mut(coord)?;
        if !peg.replace() {
            return Err(BoardError::NotRemoved(peg.number()));
        }
        self.total_removed -= 1;
        Ok(())
    }

    pub fn add_peg(&mut self, number: usize) -> Result<(), BoardError> {
        let coord = self.locate(number)?;
        self.add_peg_at(coord)
    }

    /// Take the peg at `coord` off the board.
    pub fn remove_peg_at(&mut self, coord: Coord) -> Result<(), BoardError> {
        let peg = self.peg_mut(coord)?;
        if !peg.remove() {
            return Err(BoardError::AlreadyRemoved(peg.number()));
        }
        self.total_removed += 1;
        Ok(())
    }

    pub fn remove_peg(&mut self, number: usize) -> Result<(), BoardError> {
        let coord = self.locate(number)?;
        self.remove_peg_at(coord)
    }

    /// Empty the starting hole. Only allowed before any other move is recorded.
    pub fn remove_initial_peg(&mut self, number: usize) -> Result<(), BoardError> {
        if !self.history.is_empty() {
            return Err(BoardError::GameAlreadyStarted);
        }
        let coord = self.locate(number)?;
        self.remove_peg_at(coord)?;

        let removed = self.pegs[coord.row][coord.index];
        self.history.push(Move::Initial { removed });
        debug!("removed initial peg {}", number);
        Ok(())
    }

    // ========== Validation ==========

    /// Check a jump from `from` into `to`, returning the hole jumped over.
    pub fn check_move(&self, from: Coord, to: Coord) -> Result<Coord, IllegalMove> {
        let (Some(source), Some(dest)) = (self.peg_at(from), self.peg_at(to)) else {
            return Err(IllegalMove::OffBoard);
        };
        if source.is_removed() {
            return Err(IllegalMove::SourceEmpty);
        }
        if !dest.is_removed() {
            return Err(IllegalMove::DestinationOccupied);
        }

        let middle = from.jump_middle(to).ok_or(IllegalMove::NotAJump)?;
        match self.peg_at(middle) {
            Some(peg) if !peg.is_removed() => Ok(middle),
            _ => Err(IllegalMove::NothingToJump),
        }
    }

    /// True if the peg at `from` can jump into the hole at `to` on the current board.
    pub fn validate_move(&self, from: &Peg, to: &Peg) -> bool {
        self.check_move(from.coord(), to.coord()).is_ok()
    }

    // ========== Moves ==========

    /// Jump the peg at `from` into `to`, removing the peg in between.
    pub fn move_peg_at(&mut self, from: Coord, to: Coord) -> Result<Move, BoardError> {
        let from = self.resolve(from)?;
        let to = self.resolve(to)?;
        let over = self
            .check_move(from, to)
            .map_err(|reason| BoardError::IllegalMove {
                from: from.number(),
                to: to.number(),
                reason,
            })?;

        self.remove_peg_at(from)?;
        self.add_peg_at(to)?;
        self.remove_peg_at(over)?;

        let mov = Move::Jump {
            from: self.pegs[from.row][from.index],
            over: self.pegs[over.row][over.index],
            to: self.pegs[to.row][to.index],
        };
        self.history.push(mov);
        debug!("{}", mov);
        Ok(mov)
    }

    pub fn move_peg(&mut self, from: usize, to: usize) -> Result<Move, BoardError> {
        let from = self.locate(from)?;
        let to = self.locate(to)?;
        self.move_peg_at(from, to)
    }

    /// Source peg numbers that can jump into the hole at `to`, ascending.
    pub fn moves_to_at(&self, to: Coord) -> Vec<usize> {
        JUMPS
            .iter()
            .filter_map(|&(dr, di)| to.offset(dr, di))
            .filter(|&from| from.is_valid(self.height) && self.check_move(from, to).is_ok())
            .map(Coord::number)
            .collect()
    }

    /// Source peg numbers that can jump into peg `to`. Empty for unknown pegs.
    pub fn moves_to(&self, to: usize) -> Vec<usize> {
        match self.locate(to) {
            Ok(coord) => self.moves_to_at(coord),
            Err(_) => Vec::new(),
        }
    }

    /// Every legal jump on the board, keyed by destination. Empty means the game is over.
    pub fn all_moves(&self) -> OpenMoves {
        let moves: OpenMoves = self
            .iter()
            .filter(|peg| peg.is_removed())
            .filter_map(|peg| {
                let sources = self.moves_to_at(peg.coord());
                (!sources.is_empty()).then(|| (peg.number(), sources))
            })
            .collect();
        trace!("{} empty holes, {} reachable", self.total_removed, moves.len());
        moves
    }

    /// Pegs that have at least one legal jump, ascending.
    pub fn movable_pegs(&self) -> Vec<usize> {
        self.all_moves()
            .into_values()
            .flatten()
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect()
    }

    /// Holes the peg `from` can jump into, ascending.
    pub fn destinations_from(&self, from: usize) -> Vec<usize> {
        self.all_moves()
            .into_iter()
            .filter(|(_, sources)| sources.contains(&from))
            .map(|(to, _)| to)
            .collect()
    }

    /// The game has started and no jump remains.
    pub fn is_over(&self) -> bool {
        !self.history.is_empty() && self.all_moves().is_empty()
    }

    // ========== Undo ==========

    /// Fail unless the hole at `coord` is empty (`removed`) or occupied (`!removed`).
    fn expect_state(&self, coord: Coord, removed: bool) -> Result<(), BoardError> {
        let peg = self.peg_at(self.resolve(coord)?).ok_or(BoardError::OutOfBounds {
            row: coord.row,
            index: coord.index,
        })?;
        match (peg.is_removed(), removed) {
            (false, true) => Err(BoardError::NotRemoved(peg.number())),
            (true, false) => Err(BoardError::AlreadyRemoved(peg.number())),
            _ => Ok(()),
        }
    }

    /// Revert the most recent move and return it.
    pub fn go_back(&mut self) -> Result<Move, BoardError> {
        let mov = *self.history.last().ok_or(BoardError::NothingToUndo)?;

        // Check every hole first so a failed undo changes nothing.
        match mov {
            Move::Initial { removed } => {
                self.expect_state(removed.coord(), true)?;
                self.add_peg_at(removed.coord())?;
            }
            Move::Jump { from, over, to } => {
                self.expect_state(from.coord(), true)?;
                self.expect_state(over.coord(), true)?;
                self.expect_state(to.coord(), false)?;
                self.add_peg_at(from.coord())?;
                self.add_peg_at(over.coord())?;
                self.remove_peg_at(to.coord())?;
            }
        }

        self.history.pop();
        debug!("undid: {}", mov);
        Ok(mov)
    }
}

/// Boards are equal when every hole holds the same state; history is not compared.
impl PartialEq for Board {
    fn eq(&self, other: &Self) -> bool {
        self.height == other.height
            && self.total_removed == other.total_removed
            && self
                .iter()
                .zip(other.iter())
                .all(|(a, b)| a.is_removed() == b.is_removed())
    }
}

impl Eq for Board {}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let cell = self.height * 2;
        for (row, pegs) in self.rows().enumerate() {
            let mut line = " ".repeat(self.height * (self.height - row));
            for peg in pegs {
                line.push_str(&format!("{:<cell$}", peg));
            }
            writeln!(f, "{}", line.trim_end())?;
            writeln!(f)?;
        }
        Ok(())
    }
}
