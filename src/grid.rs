use std::{fmt, ops};

use ndarray::{Array, Array2};

use crate::coord::{Coord, NUM_COLS, NUM_ROWS};
use crate::internal_error_message;
use crate::piece::PieceOnBoard;


// Fixed-size storage for pieces. Knows nothing about the rules.
#[derive(Clone, PartialEq, Eq)]
pub struct Grid {
    data: Array2<Option<PieceOnBoard>>,
}

impl Grid {
    pub fn new() -> Self {
        Grid {
            data: Array::from_elem((NUM_ROWS as usize, NUM_COLS as usize), None),
        }
    }

    pub fn piece(&self, pos: Coord) -> Option<&PieceOnBoard> { self[pos].as_ref() }
    pub fn has_piece(&self, pos: Coord) -> bool { self[pos].is_some() }

    // Placing onto an occupied square means the caller lost track of the board.
    #[track_caller]
    pub fn place_piece(&mut self, piece: PieceOnBoard, pos: Coord) {
        let cell = &mut self[pos];
        if let Some(existing) = cell {
            panic!(
                "{}",
                internal_error_message!("{:?} is already occupied by {:?}", pos, existing)
            );
        }
        *cell = Some(piece);
    }

    pub fn remove_piece(&mut self, pos: Coord) -> Option<PieceOnBoard> { self[pos].take() }

    pub fn piece_mut(&mut self, pos: Coord) -> Option<&mut PieceOnBoard> { self[pos].as_mut() }

    // All occupied squares, row by row starting from rank 8.
    pub fn pieces(&self) -> impl Iterator<Item = (Coord, &PieceOnBoard)> + '_ {
        Coord::all().filter_map(|pos| self.piece(pos).map(|piece| (pos, piece)))
    }
}

impl ops::Index<Coord> for Grid {
    type Output = Option<PieceOnBoard>;
    #[track_caller]
    fn index(&self, pos: Coord) -> &Self::Output { &self.data[coord_to_index(pos)] }
}

impl ops::IndexMut<Coord> for Grid {
    #[track_caller]
    fn index_mut(&mut self, pos: Coord) -> &mut Self::Output {
        &mut self.data[coord_to_index(pos)]
    }
}

fn coord_to_index(pos: Coord) -> [usize; 2] {
    [
        pos.row.to_zero_based() as usize,
        pos.col.to_zero_based() as usize,
    ]
}

fn debug_format_piece(piece: &PieceOnBoard) -> String {
    format!("[{:?}]-{:?}-{:?}-{}", piece.id, piece.color, piece.kind, piece.move_count())
}

impl fmt::Debug for Grid {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "Grid ")?;
        f.debug_map()
            .entries(self.pieces().map(|(pos, piece)| (pos.to_algebraic(), debug_format_piece(piece))))
            .finish()
    }
}
