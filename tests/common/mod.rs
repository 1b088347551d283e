// Rust-upgrade (https://github.com/rust-lang/rust/issues/46379):
//   remove `#[allow(dead_code)]` before public functions.

use chess_match::board::Board;
use chess_match::grid::Grid;
use chess_match::piece::PieceId;
use chess_match::starter::place_new_piece;
use chess_match::{ChessMatch, ChessPosition, Color, Coord, MoveError, PieceKind};


#[allow(dead_code)]
pub fn pos(s: &str) -> ChessPosition { s.parse().unwrap() }

// Builds a grid from a list like "Ke1 Rd1 ka8 rb8": piece letter followed by the square.
// Upper case letters are White, lower case are Black.
#[allow(dead_code)]
pub fn grid_from_pieces(pieces: &str) -> Grid {
    let mut grid = Grid::new();
    let mut piece_id = PieceId::new();
    for token in pieces.split_whitespace() {
        let mut chars = token.chars();
        let letter = chars.next().unwrap();
        let kind = PieceKind::from_letter(letter)
            .unwrap_or_else(|| panic!("Unknown piece letter in \"{token}\""));
        let color = if letter.is_ascii_uppercase() { Color::White } else { Color::Black };
        place_new_piece(&mut grid, &mut piece_id, Coord::from_algebraic(chars.as_str()), kind, color);
    }
    grid
}

#[allow(dead_code)]
pub fn match_from_pieces(pieces: &str, current_player: Color) -> ChessMatch {
    ChessMatch::new_with_grid(grid_from_pieces(pieces), current_player)
}

// Plays moves written as "e2e4 e7e5 ...", stopping at the first rejected one.
#[allow(dead_code)]
pub fn replay_moves(chess_match: &mut ChessMatch, moves: &str) -> Result<(), MoveError> {
    for mv in moves.split_whitespace() {
        assert_eq!(mv.len(), 4, "Bad move \"{mv}\"");
        let (source, target) = mv.split_at(2);
        chess_match.perform_move(pos(source), pos(target))?;
    }
    Ok(())
}

// Every (source, target) pair `color` could try, ignoring checks.
#[allow(dead_code)]
pub fn all_candidate_moves(board: &Board, color: Color) -> Vec<(Coord, Coord)> {
    board
        .pieces_of(color)
        .flat_map(|(from, piece)| {
            piece
                .possible_moves(board.grid(), from)
                .coords()
                .map(move |to| (from, to))
                .collect::<Vec<_>>()
        })
        .collect()
}
