/// Why a pair of holes is not a legal jump.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum IllegalMove {
    #[error("hole is not on the board")]
    OffBoard,

    #[error("there is no peg in the source hole")]
    SourceEmpty,

    #[error("the destination hole is not empty")]
    DestinationOccupied,

    #[error("the holes are not two apart in a straight line")]
    NotAJump,

    #[error("there is no peg to jump over")]
    NothingToJump,
}

/// Errors returned by board operations. A failed operation leaves the board untouched.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BoardError {
    #[error("board height must be at least 1 (got {0})")]
    InvalidHeight(usize),

    #[error("no peg numbered {0} on this board")]
    NoSuchPeg(usize),

    #[error("no hole at row {row}, index {index}")]
    OutOfBounds { row: usize, index: usize },

    #[error("peg {0} is already removed")]
    AlreadyRemoved(usize),

    #[error("peg {0} is already in place")]
    NotRemoved(usize),

    #[error("cannot jump from peg {from} to peg {to}: {reason}")]
    IllegalMove {
        from: usize,
        to: usize,
        reason: IllegalMove,
    },

    #[error("the initial peg has already been removed")]
    GameAlreadyStarted,

    #[error("no moves to undo")]
    NothingToUndo,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_illegal_move_display() {
        let err = BoardError::IllegalMove {
            from: 4,
            to: 1,
            reason: IllegalMove::NothingToJump,
        };
        assert_eq!(
            err.to_string(),
            "cannot jump from peg 4 to peg 1: there is no peg to jump over"
        );
    }

    #[test]
    fn test_bounds_display() {
        let err = BoardError::OutOfBounds { row: 2, index: 3 };
        assert_eq!(err.to_string(), "no hole at row 2, index 3");
        assert_eq!(BoardError::NoSuchPeg(16).to_string(), "no peg numbered 16 on this board");
    }
}
