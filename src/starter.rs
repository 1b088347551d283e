use crate::color::Color;
use crate::coord::{Col, Coord, Row};
use crate::grid::Grid;
use crate::piece::{PieceId, PieceKind, PieceOnBoard};
use crate::rules::StartingPosition;


const CLASSIC_PIECE_ROW: [PieceKind; 8] = {
    use PieceKind::*;
    [Rook, Knight, Bishop, Queen, King, Bishop, Knight, Rook]
};

pub fn place_new_piece(
    grid: &mut Grid, piece_id: &mut PieceId, pos: Coord, kind: PieceKind, color: Color,
) {
    grid.place_piece(PieceOnBoard::new(piece_id.inc(), kind, color), pos);
}

fn setup_minimal(grid: &mut Grid, piece_id: &mut PieceId) {
    use Color::*;
    use PieceKind::*;
    for (pos, kind, color) in [
        ("h7", Rook, White),
        ("d1", Rook, White),
        ("e1", King, White),
        ("b8", Rook, Black),
        ("a8", King, Black),
    ] {
        place_new_piece(grid, piece_id, Coord::from_algebraic(pos), kind, color);
    }
}

fn setup_classic(grid: &mut Grid, piece_id: &mut PieceId) {
    for (color, piece_rank, pawn_rank) in [(Color::White, 1, 2), (Color::Black, 8, 7)] {
        for (col, &kind) in Col::all().zip(CLASSIC_PIECE_ROW.iter()) {
            place_new_piece(grid, piece_id, Coord::new(Row::from_rank(piece_rank), col), kind, color);
        }
        for col in Col::all() {
            let pos = Coord::new(Row::from_rank(pawn_rank), col);
            place_new_piece(grid, piece_id, pos, PieceKind::Pawn, color);
        }
    }
}

pub fn generate_starting_grid(starting_position: StartingPosition, piece_id: &mut PieceId) -> Grid {
    let mut grid = Grid::new();
    match starting_position {
        StartingPosition::Minimal => setup_minimal(&mut grid, piece_id),
        StartingPosition::Classic => setup_classic(&mut grid, piece_id),
    }
    grid
}
