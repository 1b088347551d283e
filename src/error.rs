use std::fmt;


#[macro_export]
macro_rules! internal_error_message {
    () => {
        format!("Internal error at {}:{}.", file!(), line!())
    };
    ($($arg:tt)+) => {
        format!("Internal error at {}:{}: {}.", file!(), line!(), format!($($arg)*))
    };
}


// Reasons a move request is rejected. The match is left exactly as it was before the request.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum MoveError {
    NoPieceAtSource,
    WrongOwner,
    NoLegalMoves,
    IllegalTarget,
    // The move was tried and rolled back because it left the mover's own king attacked.
    SelfCheckViolation,
    MatchOver,
}

impl fmt::Display for MoveError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let message = match self {
            MoveError::NoPieceAtSource => "there is no piece on the source position",
            MoveError::WrongOwner => "the chosen piece is not yours",
            MoveError::NoLegalMoves => "there are no possible moves for the chosen piece",
            MoveError::IllegalTarget => "the chosen piece can't move to the target position",
            MoveError::SelfCheckViolation => "you can't put yourself in check",
            MoveError::MatchOver => "the match is over",
        };
        f.write_str(message)
    }
}

impl std::error::Error for MoveError {}
