use serde::Deserialize;
use serde::Serialize;

/// Side to move. White always moves first.
#[derive(Debug, Clone, Copy, Eq, Hash, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Color {
    White,
    Black,
}

impl Color {
    pub fn opponent(&self) -> Self {
        match self {
            Self::White => Self::Black,
            Self::Black => Self::White,
        }
    }
    /// Seat index, white first.
    pub fn index(&self) -> usize {
        match self {
            Self::White => 0,
            Self::Black => 1,
        }
    }
    /// Side to move after `plies` half-moves from this side.
    pub fn after(&self, plies: usize) -> Self {
        match plies % 2 {
            0 => *self,
            _ => self.opponent(),
        }
    }
}

impl From<shakmaty::Color> for Color {
    fn from(color: shakmaty::Color) -> Self {
        match color {
            shakmaty::Color::White => Self::White,
            shakmaty::Color::Black => Self::Black,
        }
    }
}

impl std::fmt::Display for Color {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::White => write!(f, "white"),
            Self::Black => write!(f, "black"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    #[test]
    fn opponent_flips() {
        assert_eq!(Color::White.opponent(), Color::Black);
        assert_eq!(Color::Black.opponent(), Color::White);
    }
    #[test]
    fn after_alternates() {
        assert_eq!(Color::White.after(0), Color::White);
        assert_eq!(Color::White.after(1), Color::Black);
        assert_eq!(Color::Black.after(3), Color::White);
    }
    #[test]
    fn serializes_lowercase() {
        assert_eq!(serde_json::to_string(&Color::White).unwrap(), "\"white\"");
    }
}
