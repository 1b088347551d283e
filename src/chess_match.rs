use enum_map::EnumMap;
use log::{debug, info};

use crate::board::Board;
use crate::check;
use crate::color::Color;
use crate::coord::Coord;
use crate::error::MoveError;
use crate::grid::Grid;
use crate::move_matrix::MoveMatrix;
use crate::piece::{Material, PieceId, PieceOnBoard};
use crate::rules::MatchRules;
use crate::starter::generate_starting_grid;
use crate::validation::{validate_source, validate_target};


#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum MatchStatus {
    InProgress,
    Checkmate { winner: Color },
}

// A single chess match: the board plus whose turn it is and whether someone is checked or mated.
//
// Each `perform_move` call is atomic: it is either applied in full or rejected with the match
// left exactly as it was.
#[derive(Clone, Debug)]
pub struct ChessMatch {
    board: Board,
    turn: u32,
    current_player: Color,
    check: bool,
    checkmate: bool,
}

impl ChessMatch {
    pub fn new(rules: &MatchRules) -> Self {
        let grid = generate_starting_grid(rules.starting_position, &mut PieceId::new());
        Self::new_with_grid(grid, Color::White)
    }

    // Starts a match from an arbitrary position. Each side must have exactly one king.
    pub fn new_with_grid(grid: Grid, current_player: Color) -> Self {
        let board = Board::new(grid);
        let check = check::is_check(&board, current_player);
        // Validates the other king too.
        check::find_king(&board, current_player.opponent());
        ChessMatch {
            board,
            turn: 1,
            current_player,
            check,
            checkmate: false,
        }
    }

    pub fn current_player(&self) -> Color { self.current_player }
    pub fn turn(&self) -> u32 { self.turn }
    // Whether the player to move (or the mated player, once the match is over) is in check.
    pub fn is_check(&self) -> bool { self.check }
    pub fn is_checkmate(&self) -> bool { self.checkmate }
    pub fn board(&self) -> &Board { &self.board }
    pub fn pieces(&self) -> Grid { self.board.grid().clone() }
    pub fn captured_pieces(&self) -> &[PieceOnBoard] { self.board.captured_pieces() }
    pub fn captured_material(&self) -> EnumMap<Color, Material> { self.board.captured_material() }

    pub fn status(&self) -> MatchStatus {
        if self.checkmate {
            MatchStatus::Checkmate { winner: self.current_player }
        } else {
            MatchStatus::InProgress
        }
    }

    // Squares the piece at `source` can move to. Fails the same way a move from `source` would.
    pub fn possible_moves(&self, source: impl Into<Coord>) -> Result<MoveMatrix, MoveError> {
        let source = source.into();
        let piece = validate_source(&self.board, self.current_player, source)?;
        Ok(piece.possible_moves(self.board.grid(), source))
    }

    // Returns the captured piece, if any.
    pub fn perform_move(
        &mut self, source: impl Into<Coord>, target: impl Into<Coord>,
    ) -> Result<Option<PieceOnBoard>, MoveError> {
        let (source, target) = (source.into(), target.into());
        let result = self.try_perform_move(source, target);
        if let Err(err) = result {
            debug!(
                "Turn {}: rejected {} move {} -> {}: {}",
                self.turn,
                self.current_player,
                source.to_algebraic(),
                target.to_algebraic(),
                err
            );
        }
        result
    }

    fn try_perform_move(
        &mut self, source: Coord, target: Coord,
    ) -> Result<Option<PieceOnBoard>, MoveError> {
        if self.checkmate {
            return Err(MoveError::MatchOver);
        }
        let mover = self.current_player;
        let opponent = mover.opponent();
        validate_source(&self.board, mover, source)?;
        validate_target(&self.board, source, target)?;
        if self.board.speculate(source, target, |board| check::is_check(board, mover)) {
            return Err(MoveError::SelfCheckViolation);
        }

        let captured = self.board.execute_move(source, target).captured;
        info!(
            "Turn {}: {} moved {} -> {}{}",
            self.turn,
            mover,
            source.to_algebraic(),
            target.to_algebraic(),
            captured.map_or(String::new(), |piece| format!(", capturing {:?}", piece.kind))
        );

        self.check = check::is_check(&self.board, opponent);
        if self.check {
            debug!("Turn {}: {} is in check", self.turn, opponent);
        }
        if self.check && check::is_checkmate(&mut self.board, opponent) {
            info!("Turn {}: {} is checkmated, {} wins", self.turn, opponent, mover);
            self.checkmate = true;
        } else {
            self.next_turn();
        }
        Ok(captured)
    }

    fn next_turn(&mut self) {
        self.turn += 1;
        self.current_player = self.current_player.opponent();
    }
}
