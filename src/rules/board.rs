use super::*;

/// Move-legality and outcome oracle.
///
/// `Default` is the starting position. Implementations are immutable values:
/// [`Board::apply`] returns the successor rather than mutating in place, so a
/// rejected move can never leave a half-applied state behind.
pub trait Board: Clone + Default + Send + 'static {
    /// Side to move.
    fn turn(&self) -> Color;
    /// Validates and plays a move, returning the resulting board.
    fn apply(&self, spec: &MoveSpec) -> Result<Self, RuleError>;
    fn is_game_over(&self) -> bool {
        self.is_checkmate() || self.is_draw()
    }
    fn is_checkmate(&self) -> bool;
    /// Any drawn state, including the more specific ones below.
    fn is_draw(&self) -> bool;
    fn is_stalemate(&self) -> bool;
    fn is_threefold_repetition(&self) -> bool;
    fn is_insufficient_material(&self) -> bool;
}
