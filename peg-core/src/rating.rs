use std::fmt;

/// Commentary on a finished game, tiered by pegs left.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Rating {
    Genius,
    PrettySmart,
    PlainDumb,
    Ignoramus,
}

impl Rating {
    pub fn for_pegs_left(pegs_left: usize) -> Rating {
        match pegs_left {
            1 => Rating::Genius,
            2 => Rating::PrettySmart,
            3 => Rating::PlainDumb,
            _ => Rating::Ignoramus,
        }
    }

    pub fn message(self) -> &'static str {
        match self {
            Rating::Genius => "You are a GENIUS",
            Rating::PrettySmart => "You are Pretty Smart!",
            Rating::PlainDumb => "You are Just Plain Dumb!",
            Rating::Ignoramus => "You are an EQ-NO-RA-MOOOSE!",
        }
    }
}

impl fmt::Display for Rating {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}
