use std::collections::HashSet;

use derive_new::new;
use enum_map::EnumMap;

use crate::color::Color;
use crate::coord::Coord;
use crate::grid::Grid;
use crate::internal_error_message;
use crate::piece::{Material, PieceId, PieceOnBoard};


// Everything needed to reverse a move.
#[derive(Clone, Copy, PartialEq, Eq, Debug, new)]
pub struct ExecutedMove {
    pub from: Coord,
    pub to: Coord,
    pub captured: Option<PieceOnBoard>,
}

// Grid plus piece inventories. Every piece is either on the board or captured, never both.
//
// Mutation goes only through `execute_move` / `undo_move`, which keep the grid and the
// inventories in sync.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct Board {
    grid: Grid,
    pieces_on_board: HashSet<PieceId>,
    captured_pieces: Vec<PieceOnBoard>, // in capture order
}

impl Board {
    pub fn new(grid: Grid) -> Self {
        let pieces_on_board: HashSet<_> = grid.pieces().map(|(_, piece)| piece.id).collect();
        assert_eq!(
            pieces_on_board.len(),
            grid.pieces().count(),
            "{}",
            internal_error_message!("duplicate piece ids in {:?}", grid)
        );
        Board {
            grid,
            pieces_on_board,
            captured_pieces: Vec::new(),
        }
    }

    pub fn grid(&self) -> &Grid { &self.grid }
    pub fn pieces_on_board(&self) -> &HashSet<PieceId> { &self.pieces_on_board }
    pub fn captured_pieces(&self) -> &[PieceOnBoard] { &self.captured_pieces }

    pub fn pieces_of(&self, color: Color) -> impl Iterator<Item = (Coord, PieceOnBoard)> + '_ {
        self.grid
            .pieces()
            .filter(move |(_, piece)| piece.color == color)
            .map(|(pos, piece)| (pos, *piece))
    }

    // Captured pieces of each color, counted by kind.
    pub fn captured_material(&self) -> EnumMap<Color, Material> {
        let mut material: EnumMap<Color, Material> = EnumMap::default();
        for piece in &self.captured_pieces {
            material[piece.color][piece.kind] += 1;
        }
        material
    }

    // Moves the piece from `from` to `to`, capturing whatever stands on `to`. Does not check
    // legality: callers validate first.
    pub fn execute_move(&mut self, from: Coord, to: Coord) -> ExecutedMove {
        let Some(mut piece) = self.grid.remove_piece(from) else {
            panic!("{}", internal_error_message!("no piece to move at {:?}", from));
        };
        piece.increase_move_count();
        let captured = self.grid.remove_piece(to);
        self.grid.place_piece(piece, to);
        if let Some(captured) = captured {
            let was_on_board = self.pieces_on_board.remove(&captured.id);
            assert!(
                was_on_board,
                "{}",
                internal_error_message!("{:?} was not in the on-board inventory", captured)
            );
            self.captured_pieces.push(captured);
        }
        ExecutedMove::new(from, to, captured)
    }

    // Exact inverse of `execute_move`, including move counters and inventories.
    pub fn undo_move(&mut self, mv: ExecutedMove) {
        let Some(mut piece) = self.grid.remove_piece(mv.to) else {
            panic!("{}", internal_error_message!("no piece to move back at {:?}", mv.to));
        };
        piece.decrease_move_count();
        self.grid.place_piece(piece, mv.from);
        if let Some(captured) = mv.captured {
            self.grid.place_piece(captured, mv.to);
            let Some(idx) = self.captured_pieces.iter().rposition(|p| p.id == captured.id) else {
                panic!("{}", internal_error_message!("{:?} was not captured", captured));
            };
            self.captured_pieces.remove(idx);
            self.pieces_on_board.insert(captured.id);
        }
    }

    // Plays the move, lets `observe` look at the resulting board and rolls the move back.
    // The rollback happens on every way out of this function, unwinding included.
    pub fn speculate<R>(&mut self, from: Coord, to: Coord, observe: impl FnOnce(&Board) -> R) -> R {
        let mv = self.execute_move(from, to);
        let board = scopeguard::guard(self, move |board| board.undo_move(mv));
        observe(&board)
    }
}


#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::piece::PieceKind;

    fn sample_board() -> Board {
        let mut piece_id = PieceId::new();
        let mut grid = Grid::new();
        for (pos, kind, color) in [
            ("e1", PieceKind::King, Color::White),
            ("d1", PieceKind::Rook, Color::White),
            ("a8", PieceKind::King, Color::Black),
            ("d8", PieceKind::Rook, Color::Black),
        ] {
            grid.place_piece(PieceOnBoard::new(piece_id.inc(), kind, color), Coord::from_algebraic(pos));
        }
        Board::new(grid)
    }

    #[test]
    fn capture_moves_piece_between_inventories() {
        let mut board = sample_board();
        let d1 = Coord::from_algebraic("d1");
        let d8 = Coord::from_algebraic("d8");
        let black_rook = *board.grid().piece(d8).unwrap();
        let mv = board.execute_move(d1, d8);
        assert_eq!(mv.captured, Some(black_rook));
        assert!(!board.grid().has_piece(d1));
        assert_eq!(board.grid().piece(d8).unwrap().kind, PieceKind::Rook);
        assert_eq!(board.grid().piece(d8).unwrap().color, Color::White);
        assert_eq!(board.grid().piece(d8).unwrap().move_count(), 1);
        assert!(!board.pieces_on_board().contains(&black_rook.id));
        assert_eq!(board.captured_pieces(), &[black_rook]);
        assert_eq!(board.captured_material()[Color::Black][PieceKind::Rook], 1);
        assert_eq!(board.captured_material()[Color::White][PieceKind::Rook], 0);
    }

    #[test]
    fn undo_restores_everything() {
        let mut board = sample_board();
        let original = board.clone();
        let mv = board.execute_move(Coord::from_algebraic("d1"), Coord::from_algebraic("d8"));
        board.undo_move(mv);
        assert_eq!(board, original);

        let mv = board.execute_move(Coord::from_algebraic("e1"), Coord::from_algebraic("e2"));
        assert_eq!(mv.captured, None);
        board.undo_move(mv);
        assert_eq!(board, original);
    }

    #[test]
    fn speculate_rolls_back() {
        let mut board = sample_board();
        let original = board.clone();
        let captured = board.speculate(
            Coord::from_algebraic("d8"),
            Coord::from_algebraic("d1"),
            |board| board.captured_pieces().len(),
        );
        assert_eq!(captured, 1);
        assert_eq!(board, original);
    }

    #[test]
    fn speculate_rolls_back_on_panic() {
        let mut board = sample_board();
        let original = board.clone();
        let result = std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| {
            board.speculate(Coord::from_algebraic("d1"), Coord::from_algebraic("d8"), |_| -> bool {
                panic!("observer failed")
            })
        }));
        assert!(result.is_err());
        assert_eq!(board, original);
    }

    #[test]
    #[should_panic(expected = "no piece to move")]
    fn execute_from_empty_square() {
        let mut board = sample_board();
        board.execute_move(Coord::from_algebraic("h1"), Coord::from_algebraic("h2"));
    }
}
