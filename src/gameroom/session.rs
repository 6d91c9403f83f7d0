use super::*;
use crate::ID;
use crate::rules::Board;
use crate::rules::Color;
use crate::rules::MoveSpec;
use crate::rules::Position;

const NOT_YOUR_TURN: &str = "not your turn";
const INVALID_MOVE: &str = "invalid move";

/// Lifecycle of a game. `Active → Finished` only, never back.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    Active,
    Finished,
}

/// Central coordinator for one live game.
/// Owns the board (single source of truth for whose turn it is), both
/// clocks, and the ticker driving them, and reports every state change to
/// the two seats at its table.
///
/// Every operation is synchronous and assumes exclusive access: the lobby
/// that owns the session serializes all calls into it.
#[derive(Debug)]
pub struct Session<B = Position> {
    id: ID<Session<B>>,
    table: Table,
    names: Names,
    board: B,
    clock: Clock,
    ticker: Ticker,
    status: Status,
    outcome: Option<Outcome>,
    opening: Color,
    plies: usize,
}

impl<B> Session<B>
where
    B: Board,
{
    pub fn new(id: ID<Session<B>>, table: Table, board: B, clock: Clock, ticker: Ticker) -> Self {
        Self {
            id,
            table,
            names: Names::seeded(id.seed()),
            opening: board.turn(),
            board,
            clock,
            ticker,
            status: Status::Active,
            outcome: None,
            plies: 0,
        }
    }
    /// Tells each player their color and both display names.
    pub fn start(&self) {
        log::info!(
            "[session {}] {} ({}) vs {} ({})",
            self.id,
            self.names.white(),
            self.table.id(Color::White),
            self.names.black(),
            self.table.id(Color::Black),
        );
        [Color::White, Color::Black]
            .into_iter()
            .for_each(|c| self.table.unicast(c, &ServerMessage::init_game(c, &self.names)));
    }
}

impl<B> Session<B>
where
    B: Board,
{
    /// Validates turn and legality, applies the move, then either ends the
    /// game or relays the move with both clocks to both players.
    pub fn make_move(&mut self, conn: ID<Connection>, spec: &MoveSpec) {
        let Some(color) = self.table.color(conn) else {
            log::warn!("[session {}] move from stranger {}", self.id, conn);
            return;
        };
        if self.is_finished() {
            log::debug!("[session {}] move after game over from {}", self.id, color);
            return;
        }
        let mover = self.mover();
        if color != mover {
            log::debug!("[session {}] {} moved out of turn", self.id, color);
            self.table.unicast(color, &ServerMessage::alert(NOT_YOUR_TURN));
            return;
        }
        match self.board.apply(spec) {
            Err(e) => {
                log::debug!("[session {}] {} rejected: {}", self.id, color, e);
                self.table.unicast(color, &ServerMessage::alert(INVALID_MOVE));
            }
            Ok(board) => {
                log::debug!("[session {}] {} played {}", self.id, color, spec);
                self.board = board;
                self.plies += 1;
                match Outcome::classify(&self.board) {
                    Some(outcome) => self.end(outcome),
                    None => self.table.broadcast(&ServerMessage::moved(spec, &self.clock)),
                }
            }
        }
    }
    /// Concedes on behalf of `conn`.
    pub fn resign(&mut self, conn: ID<Connection>) {
        let Some(color) = self.table.color(conn) else {
            log::warn!("[session {}] resignation from stranger {}", self.id, conn);
            return;
        };
        if self.is_finished() {
            log::debug!("[session {}] resignation after game over", self.id);
            return;
        }
        self.end(Outcome::new(Winner::from(color.opponent()), Reason::Resignation));
    }
    /// Burns one second from the side to move, flagging them at zero.
    pub fn tick(&mut self) {
        if self.is_finished() {
            return;
        }
        let mover = self.mover();
        if self.clock.tick(mover) == 0 {
            log::debug!("[session {}] {} flagged", self.id, mover);
            self.end(Outcome::new(Winner::from(mover.opponent()), Reason::Timeout));
        }
    }
    /// Finishes the game because `conn` left, without adjudicating a result.
    /// Returns the connection left behind.
    pub fn abandon(&mut self, conn: ID<Connection>) -> Option<ID<Connection>> {
        let opponent = self.table.opponent(conn)?;
        if !self.is_finished() {
            log::info!("[session {}] abandoned by {}", self.id, conn);
            self.status = Status::Finished;
            self.ticker.cancel();
        }
        Some(opponent)
    }
    /// Sends `OPPONENT_DISCONNECTED` to the given seat.
    pub fn notify_abandoned(&self, conn: ID<Connection>) {
        if let Some(color) = self.table.color(conn) {
            self.table.unicast(color, &ServerMessage::opponent_disconnected());
        }
    }
    /// The single transition into `Finished`. Emits `GAME_OVER` at most once.
    pub fn end(&mut self, outcome: Outcome) {
        if self.is_finished() {
            log::debug!("[session {}] already over, dropping {}", self.id, outcome);
            return;
        }
        log::info!("[session {}] {} after {} plies", self.id, outcome, self.plies);
        self.status = Status::Finished;
        self.outcome = Some(outcome);
        self.ticker.cancel();
        self.table.broadcast(&ServerMessage::game_over(outcome));
    }
}

impl<B> Session<B>
where
    B: Board,
{
    /// Side to move according to the board. The ply counter is only a
    /// cross-check; disagreement is logged and the board wins.
    fn mover(&self) -> Color {
        let mover = self.board.turn();
        if mover != self.opening.after(self.plies) {
            log::warn!(
                "[session {}] board says {} to move after {} plies",
                self.id,
                mover,
                self.plies
            );
        }
        mover
    }
    pub fn id(&self) -> ID<Session<B>> {
        self.id
    }
    pub fn board(&self) -> &B {
        &self.board
    }
    pub fn clock(&self) -> &Clock {
        &self.clock
    }
    pub fn names(&self) -> &Names {
        &self.names
    }
    pub fn status(&self) -> Status {
        self.status
    }
    pub fn outcome(&self) -> Option<Outcome> {
        self.outcome
    }
    pub fn plies(&self) -> usize {
        self.plies
    }
    pub fn is_finished(&self) -> bool {
        self.status == Status::Finished
    }
    pub fn is_ticking(&self) -> bool {
        self.ticker.is_running()
    }
    pub fn player(&self, color: Color) -> ID<Connection> {
        self.table.id(color)
    }
    pub fn opponent(&self, conn: ID<Connection>) -> Option<ID<Connection>> {
        self.table.opponent(conn)
    }
}
