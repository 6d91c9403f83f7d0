use super::*;
use shakmaty::CastlingMode;
use shakmaty::Chess;
use shakmaty::EnPassantMode;
use shakmaty::File;
use shakmaty::Move;
use shakmaty::Position as _;
use shakmaty::Role;
use shakmaty::Square;
use shakmaty::fen::Fen;
use shakmaty::zobrist::Zobrist64;
use shakmaty::zobrist::ZobristHash;

/// Standard chess backed by `shakmaty`.
///
/// `shakmaty` positions carry no history, so repetition is tracked here as
/// the Zobrist hash of every position reached, starting position included.
#[derive(Debug, Clone)]
pub struct Position {
    chess: Chess,
    history: Vec<Zobrist64>,
}

impl Position {
    pub fn from_fen(fen: &str) -> Result<Self, RuleError> {
        fen.parse::<Fen>()
            .map_err(|_| RuleError::InvalidPosition(fen.to_string()))?
            .into_position::<Chess>(CastlingMode::Standard)
            .map(Self::from)
            .map_err(|_| RuleError::InvalidPosition(fen.to_string()))
    }
    /// Half-moves since the last capture or pawn advance.
    pub fn halfmoves(&self) -> u32 {
        self.chess.halfmoves()
    }
}

impl Position {
    fn hash(chess: &Chess) -> Zobrist64 {
        chess.zobrist_hash(EnPassantMode::Legal)
    }
    fn square(s: &str) -> Result<Square, RuleError> {
        s.parse::<Square>()
            .map_err(|_| RuleError::MalformedSquare(s.to_string()))
    }
    fn role(s: &str) -> Result<Role, RuleError> {
        let mut chars = s.chars().map(|c| c.to_ascii_lowercase());
        match (chars.next(), chars.next()) {
            (Some(c), None) => Role::from_char(c)
                .filter(|r| matches!(r, Role::Queen | Role::Rook | Role::Bishop | Role::Knight))
                .ok_or_else(|| RuleError::MalformedPromotion(s.to_string())),
            _ => Err(RuleError::MalformedPromotion(s.to_string())),
        }
    }
    /// Where the king lands for castling, the target square otherwise.
    /// Clients express castling as a two-square king move.
    fn destination(m: &Move) -> Square {
        match m {
            Move::Castle { king, rook } if rook > king => Square::from_coords(File::G, king.rank()),
            Move::Castle { king, .. } => Square::from_coords(File::C, king.rank()),
            _ => m.to(),
        }
    }
    fn find(&self, from: Square, to: Square, promotion: Option<Role>) -> Option<Move> {
        let legal = self.chess.legal_moves();
        let matching = |promotion: Option<Role>| {
            legal
                .iter()
                .find(|m| {
                    m.from() == Some(from)
                        && Self::destination(m) == to
                        && m.promotion() == promotion
                })
                .cloned()
        };
        match promotion {
            Some(role) => matching(Some(role)),
            None => matching(None).or_else(|| matching(Some(Role::Queen))),
        }
    }
}

impl Board for Position {
    fn turn(&self) -> Color {
        Color::from(self.chess.turn())
    }
    fn apply(&self, spec: &MoveSpec) -> Result<Self, RuleError> {
        let from = Self::square(&spec.from)?;
        let to = Self::square(&spec.to)?;
        let promotion = spec.promotion.as_deref().map(Self::role).transpose()?;
        let m = self
            .find(from, to, promotion)
            .ok_or_else(|| RuleError::IllegalMove(spec.to_string()))?;
        let chess = self
            .chess
            .clone()
            .play(&m)
            .map_err(|_| RuleError::IllegalMove(spec.to_string()))?;
        let mut history = self.history.clone();
        history.push(Self::hash(&chess));
        Ok(Self { chess, history })
    }
    fn is_checkmate(&self) -> bool {
        self.chess.is_checkmate()
    }
    fn is_draw(&self) -> bool {
        self.halfmoves() >= 100
            || self.is_stalemate()
            || self.is_insufficient_material()
            || self.is_threefold_repetition()
    }
    fn is_stalemate(&self) -> bool {
        self.chess.is_stalemate()
    }
    fn is_threefold_repetition(&self) -> bool {
        self.history
            .last()
            .map(|head| self.history.iter().filter(|h| *h == head).count() >= 3)
            .unwrap_or(false)
    }
    fn is_insufficient_material(&self) -> bool {
        self.chess.is_insufficient_material()
    }
}

impl From<Chess> for Position {
    fn from(chess: Chess) -> Self {
        Self {
            history: vec![Self::hash(&chess)],
            chess,
        }
    }
}

impl Default for Position {
    fn default() -> Self {
        Self::from(Chess::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    fn play(board: Position, moves: &[&str]) -> Position {
        moves.iter().fold(board, |board, m| {
            board
                .apply(&MoveSpec::try_from(*m).unwrap())
                .unwrap_or_else(|e| panic!("{} rejected: {}", m, e))
        })
    }
    #[test]
    fn white_moves_first() {
        let board = Position::default();
        assert_eq!(board.turn(), Color::White);
        assert!(!board.is_game_over());
    }
    #[test]
    fn legal_move_flips_turn() {
        let board = Position::default();
        let next = board.apply(&MoveSpec::new("e2", "e4")).unwrap();
        assert_eq!(next.turn(), Color::Black);
        assert_eq!(board.turn(), Color::White);
    }
    #[test]
    fn illegal_and_malformed_moves_are_rejected() {
        let board = Position::default();
        assert!(matches!(
            board.apply(&MoveSpec::new("e2", "e5")),
            Err(RuleError::IllegalMove(_))
        ));
        assert!(matches!(
            board.apply(&MoveSpec::new("z9", "e4")),
            Err(RuleError::MalformedSquare(_))
        ));
        assert!(matches!(
            board.apply(&MoveSpec::new("e2", "e4").promote("k")),
            Err(RuleError::MalformedPromotion(_))
        ));
    }
    #[test]
    fn castling_as_king_move() {
        let board = play(
            Position::default(),
            &["e2e4", "e7e5", "g1f3", "b8c6", "f1c4", "g8f6"],
        );
        let castled = board.apply(&MoveSpec::new("e1", "g1")).unwrap();
        assert_eq!(castled.turn(), Color::Black);
    }
    #[test]
    fn promotion_defaults_to_queen() {
        let board = Position::from_fen("8/P7/8/8/8/8/k7/4K3 w - - 0 1").unwrap();
        assert!(board.apply(&MoveSpec::new("a7", "a8")).is_ok());
        assert!(board.apply(&MoveSpec::new("a7", "a8").promote("n")).is_ok());
    }
    #[test]
    fn fools_mate() {
        let board = play(Position::default(), &["f2f3", "e7e5", "g2g4", "d8h4"]);
        assert!(board.is_game_over());
        assert!(board.is_checkmate());
        assert!(!board.is_draw());
        assert_eq!(board.turn(), Color::White);
    }
    #[test]
    fn threefold_by_knight_shuffle() {
        let shuffle = ["g1f3", "g8f6", "f3g1", "f6g8"];
        let twice = play(Position::default(), &shuffle);
        assert!(!twice.is_threefold_repetition());
        let thrice = play(twice, &shuffle);
        assert!(thrice.is_threefold_repetition());
        assert!(thrice.is_draw());
        assert!(thrice.is_game_over());
    }
    #[test]
    fn stalemate() {
        let board = Position::from_fen("k7/8/8/2Q5/8/8/8/K7 w - - 0 1").unwrap();
        let board = board.apply(&MoveSpec::new("c5", "b6")).unwrap();
        assert!(board.is_stalemate());
        assert!(board.is_draw());
        assert!(!board.is_checkmate());
    }
    #[test]
    fn insufficient_material() {
        let board = Position::from_fen("k7/8/8/8/8/8/1n6/K7 w - - 0 1").unwrap();
        let board = board.apply(&MoveSpec::new("a1", "b2")).unwrap();
        assert!(board.is_insufficient_material());
        assert!(board.is_game_over());
    }
    #[test]
    fn bad_fen() {
        assert!(Position::from_fen("not a fen").is_err());
    }
}
