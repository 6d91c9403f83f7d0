use serde::Deserialize;
use serde::Serialize;

/// A proposed move as it arrives on the wire: algebraic squares plus an
/// optional promotion piece. Nothing here is validated; the [`Board`]
/// decides.
///
/// [`Board`]: super::Board
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveSpec {
    pub from: String,
    pub to: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub promotion: Option<String>,
}

impl MoveSpec {
    pub fn new(from: &str, to: &str) -> Self {
        Self {
            from: from.to_string(),
            to: to.to_string(),
            promotion: None,
        }
    }
    pub fn promote(mut self, piece: &str) -> Self {
        self.promotion = Some(piece.to_string());
        self
    }
}

impl std::fmt::Display for MoveSpec {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}{}", self.from, self.to)?;
        match &self.promotion {
            Some(p) => write!(f, "{}", p),
            None => Ok(()),
        }
    }
}

#[cfg(test)]
impl TryFrom<&str> for MoveSpec {
    type Error = &'static str;
    /// Parses coordinate notation such as `e2e4` or `e7e8q`.
    fn try_from(s: &str) -> Result<Self, Self::Error> {
        let s = s.trim();
        match s.len() {
            4 | 5 if s.is_ascii() => Ok(Self {
                from: s[0..2].to_string(),
                to: s[2..4].to_string(),
                promotion: s.get(4..5).map(str::to_string),
            }),
            _ => Err("expected coordinate notation like e2e4"),
        }
    }
}
