//! The static 15x15 premium-square layout.
use crate::error::Error;
use std::fmt;
use std::str::FromStr;

const N: usize = 15;
const Q: usize = 1 + N / 2;

/// One quadrant of the standard Scrabble-style board. [`PremiumGrid::default`]
/// mirrors this horizontally and vertically to build the full 15x15 layout,
/// building a symmetric board from one eighth of the squares.
const STANDARD_QUARTER_BOARD: [&str; Q] = [
    "tw -- -- dl -- -- -- tw",
    "-- dw -- -- -- tl -- --",
    "-- -- dw -- -- -- dl --",
    "dl -- -- dw -- -- -- dl",
    "-- -- -- -- dw -- -- --",
    "-- tl -- -- -- tl -- --",
    "-- -- dl -- -- -- dl --",
    "tw -- -- dl -- -- -- ss",
];

/// A premium square classification.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Premium {
    Plain,
    /// The center start square; scores as [`Premium::DoubleWord`].
    Start,
    DoubleLetter,
    TripleLetter,
    DoubleWord,
    TripleWord,
}

use Premium::{DoubleLetter, DoubleWord, Plain, Start, TripleLetter, TripleWord};

impl Premium {
    /// Letter-value multiplier this square applies to a newly-placed tile.
    pub fn letter_multiplier(self) -> u32 {
        match self {
            DoubleLetter => 2,
            TripleLetter => 3,
            _ => 1,
        }
    }

    /// Word-score multiplier this square applies to a word with a
    /// newly-placed tile on it.
    pub fn word_multiplier(self) -> u32 {
        match self {
            DoubleWord | Start => 2,
            TripleWord => 3,
            _ => 1,
        }
    }
}

impl fmt::Display for Premium {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let s = match self {
            Plain => "--",
            Start => "ss",
            DoubleLetter => "dl",
            TripleLetter => "tl",
            DoubleWord => "dw",
            TripleWord => "tw",
        };
        write!(f, "{}", s)
    }
}

impl FromStr for Premium {
    type Err = Error;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "--" => Ok(Plain),
            "ss" => Ok(Start),
            "dl" => Ok(DoubleLetter),
            "tl" => Ok(TripleLetter),
            "dw" => Ok(DoubleWord),
            "tw" => Ok(TripleWord),
            _ => Err(Error::PremiumParseError(String::from(s))),
        }
    }
}

/// 15x15 grid of [`Premium`] squares.
#[derive(Debug, Clone, PartialEq)]
pub struct PremiumGrid([[Premium; N]; N]);

impl std::ops::Index<(usize, usize)> for PremiumGrid {
    type Output = Premium;
    fn index(&self, (row, col): (usize, usize)) -> &Premium {
        &self.0[row][col]
    }
}

impl PremiumGrid {
    fn empty() -> PremiumGrid {
        PremiumGrid([[Plain; N]; N])
    }

    /// Mirror a single quadrant into a full symmetric 15x15 grid.
    fn expand_quarter_board(qb: &[&str; Q]) -> PremiumGrid {
        let mut board = PremiumGrid::empty();
        for (i, row) in qb.iter().enumerate() {
            let tokens: Vec<&str> = row.split(' ').collect();
            assert_eq!(tokens.len(), Q);
            for (j, token) in tokens.iter().enumerate() {
                let val: Premium = token.parse().unwrap();
                board.0[i][j] = val;
                board.0[N - i - 1][j] = val;
                board.0[i][N - j - 1] = val;
                board.0[N - i - 1][N - j - 1] = val;
            }
        }
        board
    }

    /// The standard Scrabble-style premium layout, with the center square
    /// at (7, 7) as the double-word start square.
    pub fn standard() -> PremiumGrid {
        PremiumGrid::expand_quarter_board(&STANDARD_QUARTER_BOARD)
    }

    pub fn to_strings(&self) -> Vec<String> {
        self.0
            .iter()
            .map(|row| {
                row.iter()
                    .map(Premium::to_string)
                    .collect::<Vec<String>>()
                    .join(" ")
            })
            .collect()
    }
}

impl Default for PremiumGrid {
    fn default() -> Self {
        PremiumGrid::standard()
    }
}
