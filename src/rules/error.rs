/// Reasons the rule engine refuses a move.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RuleError {
    MalformedSquare(String),
    MalformedPromotion(String),
    IllegalMove(String),
    InvalidPosition(String),
}

impl std::fmt::Display for RuleError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::MalformedSquare(s) => write!(f, "malformed square: {}", s),
            Self::MalformedPromotion(s) => write!(f, "malformed promotion: {}", s),
            Self::IllegalMove(s) => write!(f, "illegal move: {}", s),
            Self::InvalidPosition(s) => write!(f, "invalid position: {}", s),
        }
    }
}

impl std::error::Error for RuleError {}
