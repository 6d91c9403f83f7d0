use super::*;
use crate::ID;
use crate::rules::Color;
use tokio::sync::mpsc::UnboundedSender;

/// Marker type for connection identity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Connection;

/// Outbound JSON for one connection.
pub type Tx = UnboundedSender<String>;

/// One side of the board: who sits there and how to reach them.
#[derive(Debug, Clone)]
pub struct Seat {
    id: ID<Connection>,
    inbox: Tx,
}

impl Seat {
    pub fn new(id: ID<Connection>, inbox: Tx) -> Self {
        Self { id, inbox }
    }
    pub fn id(&self) -> ID<Connection> {
        self.id
    }
}

/// The two seats of a game, white first.
/// Separates who plays which color from game logic.
/// Both seats always belong to different connections.
#[derive(Debug)]
pub struct Table {
    seats: [Seat; 2],
}

impl Table {
    /// None if both seats belong to the same connection.
    pub fn new(white: Seat, black: Seat) -> Option<Self> {
        match white.id == black.id {
            true => None,
            false => Some(Self {
                seats: [white, black],
            }),
        }
    }
    /// Connection playing `color`.
    pub fn id(&self, color: Color) -> ID<Connection> {
        self.seats[color.index()].id
    }
    /// Color played by `conn`, if seated.
    pub fn color(&self, conn: ID<Connection>) -> Option<Color> {
        [Color::White, Color::Black]
            .into_iter()
            .find(|c| self.id(*c) == conn)
    }
    /// Connection across the board from `conn`, if seated.
    pub fn opponent(&self, conn: ID<Connection>) -> Option<ID<Connection>> {
        self.color(conn).map(|c| self.id(c.opponent()))
    }
    /// Sends a message to one side.
    pub fn unicast(&self, color: Color, msg: &ServerMessage) {
        let seat = &self.seats[color.index()];
        log::debug!("[table] unicast to {} {}: {:?}", color, seat.id, msg);
        if let Err(e) = seat.inbox.send(msg.to_json()) {
            log::warn!("[table] unicast to {} {} failed: {:?}", color, seat.id, e);
        }
    }
    /// Sends a message to both sides.
    pub fn broadcast(&self, msg: &ServerMessage) {
        log::debug!("[table] broadcast: {:?}", msg);
        let json = msg.to_json();
        self.seats.iter().for_each(|seat| {
            if let Err(e) = seat.inbox.send(json.clone()) {
                log::warn!("[table] broadcast to {} failed: {:?}", seat.id, e);
            }
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::sync::mpsc::unbounded_channel;
    #[test]
    fn seats_by_color() {
        let (tx, _rx) = unbounded_channel();
        let white = ID::default();
        let black = ID::default();
        let table = Table::new(Seat::new(white, tx.clone()), Seat::new(black, tx)).unwrap();
        assert_eq!(table.id(Color::White), white);
        assert_eq!(table.color(black), Some(Color::Black));
        assert_eq!(table.opponent(white), Some(black));
        assert_eq!(table.color(ID::default()), None);
    }
    #[test]
    fn one_connection_cannot_take_both_seats() {
        let (tx, _rx) = unbounded_channel();
        let id = ID::default();
        assert!(Table::new(Seat::new(id, tx.clone()), Seat::new(id, tx)).is_none());
    }
    #[test]
    fn unicast_and_broadcast() {
        let (wtx, mut wrx) = unbounded_channel();
        let (btx, mut brx) = unbounded_channel();
        let table = Table::new(Seat::new(ID::default(), wtx), Seat::new(ID::default(), btx))
            .unwrap();
        table.unicast(Color::Black, &ServerMessage::alert("hi"));
        assert!(wrx.try_recv().is_err());
        assert!(brx.try_recv().is_ok());
        table.broadcast(&ServerMessage::alert("both"));
        assert!(wrx.try_recv().is_ok());
        assert!(brx.try_recv().is_ok());
    }
    #[test]
    fn closed_inbox_is_not_fatal() {
        let (wtx, wrx) = unbounded_channel();
        let (btx, mut brx) = unbounded_channel();
        drop(wrx);
        let table = Table::new(Seat::new(ID::default(), wtx), Seat::new(ID::default(), btx))
            .unwrap();
        table.broadcast(&ServerMessage::alert("still here"));
        assert!(brx.try_recv().is_ok());
    }
}
