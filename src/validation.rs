// Pre-move checks. These never touch the board: a move is fully validated before anything
// is executed.

use crate::board::Board;
use crate::color::Color;
use crate::coord::Coord;
use crate::error::MoveError;
use crate::piece::PieceOnBoard;


pub fn validate_source(
    board: &Board, active_color: Color, source: Coord,
) -> Result<&PieceOnBoard, MoveError> {
    let piece = board.grid().piece(source).ok_or(MoveError::NoPieceAtSource)?;
    if piece.color != active_color {
        return Err(MoveError::WrongOwner);
    }
    if !piece.has_any_possible_move(board.grid(), source) {
        return Err(MoveError::NoLegalMoves);
    }
    Ok(piece)
}

pub fn validate_target(board: &Board, source: Coord, target: Coord) -> Result<(), MoveError> {
    let piece = board.grid().piece(source).ok_or(MoveError::NoPieceAtSource)?;
    if !piece.can_move_to(board.grid(), source, target) {
        return Err(MoveError::IllegalTarget);
    }
    Ok(())
}
