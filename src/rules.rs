use serde::{Deserialize, Serialize};


#[derive(Clone, Copy, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub enum StartingPosition {
    // Two kings and three rooks: White rooks on h7 and d1, White king on e1, Black rook on b8,
    // Black king on a8.
    Minimal,
    // The usual initial array, pawns included.
    Classic,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchRules {
    pub starting_position: StartingPosition,
}

impl MatchRules {
    pub fn minimal() -> Self { Self { starting_position: StartingPosition::Minimal } }
    pub fn classic() -> Self { Self { starting_position: StartingPosition::Classic } }

    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> { serde_json::from_str(json) }
}
