use crate::ID;
use crate::gameroom::Connection;
use crate::gameroom::Session;
use crate::gameroom::Tx;

/// Everything the lobby reacts to. Transport bridges and clock tickers
/// only ever produce these; the lobby alone consumes them, one at a time.
#[derive(Debug)]
pub enum Event {
    /// A connection opened, with the channel that reaches it.
    Connect(ID<Connection>, Tx),
    /// Raw text from a connection.
    Message(ID<Connection>, String),
    /// A connection closed.
    Disconnect(ID<Connection>),
    /// One clock period elapsed for a game.
    Tick(ID<Session>),
}

impl std::fmt::Display for Event {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Event::Connect(id, _) => write!(f, "{}: connected", id),
            Event::Message(id, raw) => write!(f, "{}: {}", id, raw),
            Event::Disconnect(id) => write!(f, "{}: disconnected", id),
            Event::Tick(id) => write!(f, "tick {}", id),
        }
    }
}
