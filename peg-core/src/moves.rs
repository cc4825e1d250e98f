//! Executed moves and the undo log.

use std::fmt;

use serde::Serialize;

use crate::peg::Peg;

/// A move that has been played.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Move {
    /// The starting hole emptied before the first jump.
    Initial { removed: Peg },
    /// A peg jumped from `from` over `over` into `to`; `over` was taken off the board.
    Jump { from: Peg, over: Peg, to: Peg },
}

impl Move {
    #[inline]
    pub fn is_initial(&self) -> bool {
        matches!(self, Move::Initial { .. })
    }

    /// The peg taken off the board by this move.
    #[inline]
    pub fn removed(&self) -> Peg {
        match self {
            Move::Initial { removed } => *removed,
            Move::Jump { over, .. } => *over,
        }
    }

    /// Source hole of a jump; `None` for the initial removal.
    #[inline]
    pub fn from(&self) -> Option<Peg> {
        match self {
            Move::Initial { .. } => None,
            Move::Jump { from, .. } => Some(*from),
        }
    }

    /// Destination hole of a jump; `None` for the initial removal.
    #[inline]
    pub fn to(&self) -> Option<Peg> {
        match self {
            Move::Initial { .. } => None,
            Move::Jump { to, .. } => Some(*to),
        }
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Move::Initial { removed } => {
                write!(f, "Initial peg removed [{}]", removed.number())
            }
            Move::Jump { from, over, to } => write!(
                f,
                "Jumped peg [{}], over peg [{}], to peg [{}]",
                from.number(),
                over.number(),
                to.number()
            ),
        }
    }
}

/// Ordered log of played moves, indexed contiguously from 0.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct MoveHistory {
    moves: Vec<Move>,
}

impl MoveHistory {
    pub fn new() -> MoveHistory {
        MoveHistory::default()
    }

    /// Append a move, returning its index.
    pub fn push(&mut self, mov: Move) -> usize {
        self.moves.push(mov);
        self.moves.len() - 1
    }

    /// Drop and return the most recent move.
    pub fn pop(&mut self) -> Option<Move> {
        self.moves.pop()
    }

    /// Index of the most recent move, `None` while empty.
    #[inline]
    pub fn current_index(&self) -> Option<usize> {
        self.moves.len().checked_sub(1)
    }

    #[inline]
    pub fn last(&self) -> Option<&Move> {
        self.moves.last()
    }

    #[inline]
    pub fn get(&self, index: usize) -> Option<&Move> {
        self.moves.get(index)
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.moves.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.moves.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Move> + '_ {
        self.moves.iter()
    }
}

impl fmt::Display for MoveHistory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, mov) in self.moves.iter().enumerate() {
            writeln!(f, "{}.\t{}", i, mov)?;
        }
        Ok(())
    }
}
