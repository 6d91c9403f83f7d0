use super::*;
use crate::ID;
use crate::gameroom::Connection;
use tokio::sync::mpsc::UnboundedReceiver;
use tokio::sync::mpsc::UnboundedSender;
use tokio::sync::mpsc::unbounded_channel;

/// Front door to a running [`Lobby`].
/// Cheap to clone; one copy lives in every transport worker.
#[derive(Debug, Clone)]
pub struct Handle {
    inbox: UnboundedSender<Event>,
}

impl Handle {
    pub fn new(inbox: UnboundedSender<Event>) -> Self {
        Self { inbox }
    }
    /// Registers a new connection.
    /// Returns its id and the receiver for everything sent to it.
    pub fn connect(&self) -> anyhow::Result<(ID<Connection>, UnboundedReceiver<String>)> {
        let id = ID::default();
        let (tx, rx) = unbounded_channel::<String>();
        self.send(Event::Connect(id, tx))?;
        Ok((id, rx))
    }
    pub fn message(&self, id: ID<Connection>, text: String) -> anyhow::Result<()> {
        self.send(Event::Message(id, text))
    }
    pub fn disconnect(&self, id: ID<Connection>) -> anyhow::Result<()> {
        self.send(Event::Disconnect(id))
    }
    pub fn send(&self, event: Event) -> anyhow::Result<()> {
        self.inbox
            .send(event)
            .map_err(|_| anyhow::anyhow!("lobby is closed"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gameroom::ClockConfig;

    #[tokio::test]
    async fn closed_lobby_refuses_events() {
        let (tx, rx) = unbounded_channel();
        let handle = Handle::new(tx);
        drop(rx);
        assert!(handle.connect().is_err());
        assert!(handle.disconnect(ID::default()).is_err());
    }

    #[tokio::test]
    async fn connections_get_their_own_channel() {
        let handle = Lobby::spawn(ClockConfig::default());
        let (a, _arx) = handle.connect().unwrap();
        let (b, _brx) = handle.connect().unwrap();
        assert_ne!(a, b);
        handle.message(a, r#"{"type":"INIT_GAME"}"#.to_string()).unwrap();
        handle.disconnect(a).unwrap();
        handle.disconnect(b).unwrap();
    }
}
