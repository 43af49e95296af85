use std::fmt::{self, Display};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

///
/// Strand of a transcript, as given in column 7 of GFF3.
///
#[derive(Eq, PartialEq, Hash, Debug, Clone, Copy, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Strand {
    Forward,
    Reverse,
    #[default]
    Unstranded,
}

impl Strand {
    pub fn from_char(c: char) -> Strand {
        match c {
            '+' => Strand::Forward,
            '-' => Strand::Reverse,
            _ => Strand::Unstranded,
        }
    }

    pub fn as_char(&self) -> char {
        match self {
            Strand::Forward => '+',
            Strand::Reverse => '-',
            Strand::Unstranded => '.',
        }
    }

    /// Unstranded transcripts are read left to right, like forward ones.
    pub fn is_reverse(&self) -> bool {
        matches!(self, Strand::Reverse)
    }
}

impl Display for Strand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_char())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use pretty_assertions::assert_eq;
    use rstest::rstest;

    #[rstest]
    #[case('+', Strand::Forward)]
    #[case('-', Strand::Reverse)]
    #[case('.', Strand::Unstranded)]
    #[case('?', Strand::Unstranded)]
    fn test_from_char(#[case] c: char, #[case] expected: Strand) {
        assert_eq!(Strand::from_char(c), expected);
    }

    #[rstest]
    fn test_round_trip_display() {
        assert_eq!(Strand::Reverse.to_string(), "-");
        assert_eq!(Strand::from_char(Strand::Forward.as_char()), Strand::Forward);
    }
}
