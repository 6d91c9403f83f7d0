use crate::rules::Board;
use crate::rules::Color;
use serde::Serialize;

/// Who won, from the wire's point of view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Winner {
    White,
    Black,
    Draw,
}

impl From<Color> for Winner {
    fn from(color: Color) -> Self {
        match color {
            Color::White => Self::White,
            Color::Black => Self::Black,
        }
    }
}

/// Why a game finished.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Reason {
    Checkmate,
    Stalemate,
    ThreefoldRepetition,
    InsufficientMaterial,
    Draw,
    Timeout,
    Resignation,
}

impl std::fmt::Display for Reason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Checkmate => write!(f, "checkmate"),
            Self::Stalemate => write!(f, "stalemate"),
            Self::ThreefoldRepetition => write!(f, "threefold_repetition"),
            Self::InsufficientMaterial => write!(f, "insufficient_material"),
            Self::Draw => write!(f, "draw"),
            Self::Timeout => write!(f, "timeout"),
            Self::Resignation => write!(f, "resignation"),
        }
    }
}

/// Final result of a game.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Outcome {
    pub winner: Winner,
    pub reason: Reason,
}

impl Outcome {
    pub fn new(winner: Winner, reason: Reason) -> Self {
        Self { winner, reason }
    }
    /// Classifies a board the rule engine reports as over.
    ///
    /// Checkmate credits the side not to move. Among draws the most specific
    /// predicate names the reason, with plain `draw` left for the fifty-move
    /// rule.
    pub fn classify<B>(board: &B) -> Option<Self>
    where
        B: Board,
    {
        if !board.is_game_over() {
            None
        } else if board.is_checkmate() {
            Some(Self::new(Winner::from(board.turn().opponent()), Reason::Checkmate))
        } else if board.is_insufficient_material() {
            Some(Self::new(Winner::Draw, Reason::InsufficientMaterial))
        } else if board.is_threefold_repetition() {
            Some(Self::new(Winner::Draw, Reason::ThreefoldRepetition))
        } else if board.is_stalemate() {
            Some(Self::new(Winner::Draw, Reason::Stalemate))
        } else {
            Some(Self::new(Winner::Draw, Reason::Draw))
        }
    }
}

impl std::fmt::Display for Outcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.winner {
            Winner::Draw => write!(f, "draw by {}", self.reason),
            Winner::White => write!(f, "white wins by {}", self.reason),
            Winner::Black => write!(f, "black wins by {}", self.reason),
        }
    }
}
