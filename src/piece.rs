use std::fmt;

use derive_new::new;
use enum_map::{Enum, EnumMap};
use serde::{Deserialize, Serialize};
use strum::EnumIter;

use crate::color::Color;
use crate::coord::Coord;
use crate::grid::Grid;
use crate::internal_error_message;
use crate::move_matrix::MoveMatrix;


#[derive(
    Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Enum, EnumIter, Serialize, Deserialize,
)]
pub enum PieceKind {
    Pawn,
    Knight,
    Bishop,
    Rook,
    Queen,
    King,
}

// Number of pieces of each kind. Used to summarize captures.
pub type Material = EnumMap<PieceKind, u8>;

// Unique within a match. Lets inventories track pieces independently of where they stand.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
pub struct PieceId(u32);

impl PieceId {
    pub fn new() -> Self { PieceId(0) }
    pub fn inc(&mut self) -> Self {
        let ret = *self;
        self.0 += 1;
        ret
    }
}

#[derive(Clone, Copy, PartialEq, Eq, Debug, new)]
pub struct PieceOnBoard {
    pub id: PieceId,
    pub kind: PieceKind,
    pub color: Color,
    #[new(default)]
    move_count: u32,
}

impl PieceKind {
    pub fn to_letter(self) -> char {
        match self {
            PieceKind::Pawn => 'P',
            PieceKind::Knight => 'N',
            PieceKind::Bishop => 'B',
            PieceKind::Rook => 'R',
            PieceKind::Queen => 'Q',
            PieceKind::King => 'K',
        }
    }

    pub fn from_letter(letter: char) -> Option<Self> {
        match letter.to_ascii_uppercase() {
            'P' => Some(PieceKind::Pawn),
            'N' => Some(PieceKind::Knight),
            'B' => Some(PieceKind::Bishop),
            'R' => Some(PieceKind::Rook),
            'Q' => Some(PieceKind::Queen),
            'K' => Some(PieceKind::King),
            _ => None,
        }
    }
}

impl PieceOnBoard {
    pub fn move_count(&self) -> u32 { self.move_count }

    pub fn increase_move_count(&mut self) { self.move_count += 1; }
    pub fn decrease_move_count(&mut self) {
        self.move_count = self.move_count.checked_sub(1).unwrap_or_else(|| {
            panic!("{}", internal_error_message!("{:?} has never moved", self))
        });
    }

    // Squares the piece standing at `from` may move to, according to its own movement rule.
    // Does not consider whether the move would expose the king.
    pub fn possible_moves(&self, grid: &Grid, from: Coord) -> MoveMatrix {
        self.kind.movement().possible_moves(self, grid, from)
    }
    pub fn can_move_to(&self, grid: &Grid, from: Coord, to: Coord) -> bool {
        self.possible_moves(grid, from).contains(to)
    }
    pub fn has_any_possible_move(&self, grid: &Grid, from: Coord) -> bool {
        !self.possible_moves(grid, from).is_empty()
    }
}

// White pieces are upper case, black pieces are lower case, like in FEN.
impl fmt::Display for PieceOnBoard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let letter = self.kind.to_letter();
        match self.color {
            Color::White => write!(f, "{}", letter),
            Color::Black => write!(f, "{}", letter.to_ascii_lowercase()),
        }
    }
}
