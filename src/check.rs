use itertools::Itertools;

use crate::board::Board;
use crate::color::Color;
use crate::coord::Coord;
use crate::internal_error_message;
use crate::move_matrix::MoveMatrix;
use crate::piece::PieceKind;


// Each side must have exactly one king for the whole match, so a missing king means the match
// state is corrupt.
pub fn find_king(board: &Board, color: Color) -> Coord {
    let kings = board.pieces_of(color).filter(|(_, piece)| piece.kind == PieceKind::King);
    match kings.map(|(pos, _)| pos).exactly_one() {
        Ok(pos) => pos,
        Err(kings) => panic!(
            "{}",
            internal_error_message!("expected one {} king, found {:?}", color, kings.collect_vec())
        ),
    }
}

// Union of the reachability matrices of all `color` pieces.
pub fn attacked_squares(board: &Board, color: Color) -> MoveMatrix {
    let mut attacked = MoveMatrix::new();
    for (pos, piece) in board.pieces_of(color) {
        attacked |= piece.possible_moves(board.grid(), pos);
    }
    attacked
}

pub fn is_check(board: &Board, color: Color) -> bool {
    let king_pos = find_king(board, color);
    attacked_squares(board, color.opponent()).contains(king_pos)
}

// Tries every move of every `color` piece. Board is guaranteed to be returned intact.
pub fn is_checkmate(board: &mut Board, color: Color) -> bool {
    if !is_check(board, color) {
        return false;
    }
    let candidate_moves = board
        .pieces_of(color)
        .flat_map(|(from, piece)| {
            piece.possible_moves(board.grid(), from).coords().map(move |to| (from, to)).collect_vec()
        })
        .collect_vec();
    for (from, to) in candidate_moves {
        if !board.speculate(from, to, |board| is_check(board, color)) {
            return false;
        }
    }
    true
}
