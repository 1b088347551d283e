// Two coordinate systems live here:
//   - `Coord` is what the engine works with: (row, col), both 0-based, row 0 is the top
//     of the board as White sees it (rank 8).
//   - `ChessPosition` is what users type: file letter plus rank number, e.g. "e2".

use std::{fmt, ops, str};

use itertools::Itertools;


pub const NUM_ROWS: u8 = 8;
pub const NUM_COLS: u8 = 8;


#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
pub struct Row {
    idx: u8, // 0-based, 0 is rank 8
}

impl Row {
    pub const fn from_zero_based(idx: u8) -> Self {
        assert!(idx < NUM_ROWS);
        Self { idx }
    }
    pub const fn from_rank(rank: u8) -> Self {
        assert!(rank >= 1 && rank <= NUM_ROWS);
        Self::from_zero_based(NUM_ROWS - rank)
    }
    pub const fn to_zero_based(self) -> u8 { self.idx }
    pub const fn to_rank(self) -> u8 { NUM_ROWS - self.idx }
    pub fn all() -> impl Iterator<Item = Self> + Clone {
        (0..NUM_ROWS).map(Self::from_zero_based)
    }
    pub fn checked_add(self, delta: i8) -> Option<Self> {
        let idx = self.idx as i8 + delta;
        (0..NUM_ROWS as i8).contains(&idx).then(|| Self::from_zero_based(idx as u8))
    }
}

impl ops::Sub for Row {
    type Output = i8;
    fn sub(self, other: Self) -> Self::Output {
        (self.to_zero_based() as i8) - (other.to_zero_based() as i8)
    }
}


#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
pub struct Col {
    idx: u8, // 0-based, 0 is file 'a'
}

impl Col {
    pub const fn from_zero_based(idx: u8) -> Self {
        assert!(idx < NUM_COLS);
        Self { idx }
    }
    pub const fn from_file(file: char) -> Self {
        assert!(file >= 'a');
        Self::from_zero_based(file as u8 - b'a')
    }
    pub const fn to_zero_based(self) -> u8 { self.idx }
    pub const fn to_file(self) -> char { (self.idx + b'a') as char }
    pub fn all() -> impl Iterator<Item = Self> + Clone {
        (0..NUM_COLS).map(Self::from_zero_based)
    }
    pub fn checked_add(self, delta: i8) -> Option<Self> {
        let idx = self.idx as i8 + delta;
        (0..NUM_COLS as i8).contains(&idx).then(|| Self::from_zero_based(idx as u8))
    }
}

impl ops::Sub for Col {
    type Output = i8;
    fn sub(self, other: Self) -> Self::Output {
        (self.to_zero_based() as i8) - (other.to_zero_based() as i8)
    }
}


#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Coord {
    pub row: Row,
    pub col: Col,
}

impl Coord {
    pub const fn new(row: Row, col: Col) -> Self { Self { row, col } }

    // Panics on malformed input. Meant for tests and hard-coded layouts; parse user input
    // via `ChessPosition`.
    #[track_caller]
    pub fn from_algebraic(s: &str) -> Self {
        match s.parse::<ChessPosition>() {
            Ok(pos) => pos.to_coord(),
            Err(err) => panic!("Invalid coord \"{s}\": {err}"),
        }
    }
    pub fn to_algebraic(self) -> String { ChessPosition::from_coord(self).to_string() }

    pub fn all() -> impl Iterator<Item = Self> {
        Row::all().cartesian_product(Col::all()).map(|(row, col)| Self { row, col })
    }

    // Returns `None` if the result falls off the board.
    pub fn checked_add(self, (d_row, d_col): (i8, i8)) -> Option<Self> {
        Some(Self {
            row: self.row.checked_add(d_row)?,
            col: self.col.checked_add(d_col)?,
        })
    }
}

impl ops::Sub for Coord {
    type Output = (i8, i8);
    fn sub(self, other: Self) -> Self::Output { (self.row - other.row, self.col - other.col) }
}

impl fmt::Debug for Coord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Coord({})", self.to_algebraic())
    }
}


#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum PositionError {
    InvalidNotation,
    OutOfRange,
}

impl fmt::Display for PositionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PositionError::InvalidNotation => {
                write!(f, "position must be a file letter followed by a rank number")
            }
            PositionError::OutOfRange => write!(f, "valid positions are from a1 to h8"),
        }
    }
}

impl std::error::Error for PositionError {}


#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub struct ChessPosition {
    file: char,
    rank: u8,
}

impl ChessPosition {
    pub fn new(file: char, rank: u8) -> Result<Self, PositionError> {
        if !('a'..='h').contains(&file) || !(1..=NUM_ROWS).contains(&rank) {
            return Err(PositionError::OutOfRange);
        }
        Ok(Self { file, rank })
    }

    pub fn file(self) -> char { self.file }
    pub fn rank(self) -> u8 { self.rank }

    pub fn to_coord(self) -> Coord {
        Coord::new(Row::from_rank(self.rank), Col::from_file(self.file))
    }
    pub fn from_coord(coord: Coord) -> Self {
        Self {
            file: coord.col.to_file(),
            rank: coord.row.to_rank(),
        }
    }
}

impl str::FromStr for ChessPosition {
    type Err = PositionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.trim().chars();
        let file = chars.next().ok_or(PositionError::InvalidNotation)?;
        let rank_str = chars.as_str();
        if !file.is_ascii_alphabetic()
            || rank_str.is_empty()
            || !rank_str.bytes().all(|b| b.is_ascii_digit())
        {
            return Err(PositionError::InvalidNotation);
        }
        let rank = rank_str.parse::<u8>().map_err(|_| PositionError::InvalidNotation)?;
        Self::new(file, rank)
    }
}

impl fmt::Display for ChessPosition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.file, self.rank)
    }
}

impl From<ChessPosition> for Coord {
    fn from(pos: ChessPosition) -> Self { pos.to_coord() }
}
