// Per-kind movement rules. Each rule looks at the grid around the piece and reports the squares
// the piece can reach. Rules don't care about checks: that's the match's job.
//
// Not supported: castling, en passant, promotion.

use crate::coord::Coord;
use crate::grid::Grid;
use crate::move_matrix::MoveMatrix;
use crate::piece::{PieceKind, PieceOnBoard};


pub trait MovementRule: Sync {
    fn possible_moves(&self, piece: &PieceOnBoard, grid: &Grid, from: Coord) -> MoveMatrix;
}

pub struct PawnMovement;
pub struct KnightMovement;
pub struct BishopMovement;
pub struct RookMovement;
pub struct QueenMovement;
pub struct KingMovement;

const STRAIGHT: [(i8, i8); 4] = [(-1, 0), (1, 0), (0, -1), (0, 1)];
const DIAGONAL: [(i8, i8); 4] = [(-1, -1), (-1, 1), (1, -1), (1, 1)];
const ALL_DIRECTIONS: [(i8, i8); 8] =
    [(-1, 0), (1, 0), (0, -1), (0, 1), (-1, -1), (-1, 1), (1, -1), (1, 1)];
const KNIGHT_JUMPS: [(i8, i8); 8] =
    [(-2, -1), (-2, 1), (-1, -2), (-1, 2), (1, -2), (1, 2), (2, -1), (2, 1)];

impl PieceKind {
    pub fn movement(self) -> &'static dyn MovementRule {
        match self {
            PieceKind::Pawn => &PawnMovement,
            PieceKind::Knight => &KnightMovement,
            PieceKind::Bishop => &BishopMovement,
            PieceKind::Rook => &RookMovement,
            PieceKind::Queen => &QueenMovement,
            PieceKind::King => &KingMovement,
        }
    }
}

fn is_free_or_capturable(piece: &PieceOnBoard, grid: &Grid, pos: Coord) -> bool {
    grid.piece(pos).is_none_or(|other| other.color != piece.color)
}

fn is_capturable(piece: &PieceOnBoard, grid: &Grid, pos: Coord) -> bool {
    grid.piece(pos).is_some_and(|other| other.color != piece.color)
}

// Moves along each direction until the edge or the first piece. An enemy piece on the way can be
// captured, a friendly one cannot.
fn slide(piece: &PieceOnBoard, grid: &Grid, from: Coord, directions: &[(i8, i8)]) -> MoveMatrix {
    let mut moves = MoveMatrix::new();
    for &direction in directions {
        let mut pos = from;
        while let Some(next) = pos.checked_add(direction) {
            pos = next;
            if grid.has_piece(pos) {
                if is_capturable(piece, grid, pos) {
                    moves.insert(pos);
                }
                break;
            }
            moves.insert(pos);
        }
    }
    moves
}

fn step(piece: &PieceOnBoard, grid: &Grid, from: Coord, offsets: &[(i8, i8)]) -> MoveMatrix {
    offsets
        .iter()
        .filter_map(|&offset| from.checked_add(offset))
        .filter(|&pos| is_free_or_capturable(piece, grid, pos))
        .collect()
}

impl MovementRule for PawnMovement {
    fn possible_moves(&self, piece: &PieceOnBoard, grid: &Grid, from: Coord) -> MoveMatrix {
        let mut moves = MoveMatrix::new();
        let forward = piece.color.forward();
        if let Some(one_step) = from.checked_add((forward, 0)) {
            if !grid.has_piece(one_step) {
                moves.insert(one_step);
                if piece.move_count() == 0 {
                    if let Some(two_steps) = from.checked_add((forward * 2, 0)) {
                        if !grid.has_piece(two_steps) {
                            moves.insert(two_steps);
                        }
                    }
                }
            }
        }
        for d_col in [-1, 1] {
            if let Some(pos) = from.checked_add((forward, d_col)) {
                if is_capturable(piece, grid, pos) {
                    moves.insert(pos);
                }
            }
        }
        moves
    }
}

impl MovementRule for KnightMovement {
    fn possible_moves(&self, piece: &PieceOnBoard, grid: &Grid, from: Coord) -> MoveMatrix {
        step(piece, grid, from, &KNIGHT_JUMPS)
    }
}

impl MovementRule for BishopMovement {
    fn possible_moves(&self, piece: &PieceOnBoard, grid: &Grid, from: Coord) -> MoveMatrix {
        slide(piece, grid, from, &DIAGONAL)
    }
}

impl MovementRule for RookMovement {
    fn possible_moves(&self, piece: &PieceOnBoard, grid: &Grid, from: Coord) -> MoveMatrix {
        slide(piece, grid, from, &STRAIGHT)
    }
}

impl MovementRule for QueenMovement {
    fn possible_moves(&self, piece: &PieceOnBoard, grid: &Grid, from: Coord) -> MoveMatrix {
        slide(piece, grid, from, &ALL_DIRECTIONS)
    }
}

impl MovementRule for KingMovement {
    fn possible_moves(&self, piece: &PieceOnBoard, grid: &Grid, from: Coord) -> MoveMatrix {
        step(piece, grid, from, &ALL_DIRECTIONS)
    }
}
