#![forbid(unsafe_code)]
#![cfg_attr(feature = "strict", deny(warnings))]

pub mod board;
pub mod check;
pub mod chess_match;
pub mod color;
pub mod coord;
pub mod error;
pub mod grid;
pub mod move_matrix;
pub mod movement;
pub mod piece;
pub mod rules;
pub mod starter;
pub mod validation;

pub use chess_match::{ChessMatch, MatchStatus};
pub use color::Color;
pub use coord::{ChessPosition, Coord, PositionError};
pub use error::MoveError;
pub use piece::{PieceKind, PieceOnBoard};
pub use rules::{MatchRules, StartingPosition};
