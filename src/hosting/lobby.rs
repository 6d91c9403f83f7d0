use super::*;
use crate::ID;
use crate::gameroom::*;
use crate::rules::Position;
use std::collections::HashMap;
use tokio::sync::mpsc::UnboundedReceiver;
use tokio::sync::mpsc::UnboundedSender;
use tokio::sync::mpsc::WeakUnboundedSender;
use tokio::sync::mpsc::unbounded_channel;

/// Registry and dispatcher for every connection and live game.
///
/// The lobby is the single execution context of the server: it owns the
/// matchmaking slot, the connection registry, and all sessions, and it
/// mutates them only while handling one [`Event`] at a time. Nothing else
/// holds a reference to that state, so no locks are needed.
///
/// Invariants between events:
/// - a connection owns at most one session, and every owned session is Active
/// - a finished session is no longer in the registry
/// - the pending connection, if any, owns no session
pub struct Lobby {
    config: ClockConfig,
    inbox: WeakUnboundedSender<Event>,
    clients: HashMap<ID<Connection>, Tx>,
    matchmaker: Matchmaker,
    owners: HashMap<ID<Connection>, ID<Session>>,
    sessions: HashMap<ID<Session>, Session>,
}

impl Lobby {
    /// `inbox` is where this lobby's tickers deliver [`Event::Tick`].
    /// It is held weakly so the lobby stops once every [`Handle`] is gone.
    pub fn new(config: ClockConfig, inbox: &UnboundedSender<Event>) -> Self {
        Self {
            config,
            inbox: inbox.downgrade(),
            clients: HashMap::new(),
            matchmaker: Matchmaker::default(),
            owners: HashMap::new(),
            sessions: HashMap::new(),
        }
    }
    /// Starts a lobby task on the current runtime and returns its front door.
    pub fn spawn(config: ClockConfig) -> Handle {
        let (tx, rx) = unbounded_channel();
        let lobby = Self::new(config, &tx);
        tokio::spawn(lobby.run(rx));
        Handle::new(tx)
    }
    pub async fn run(mut self, mut events: UnboundedReceiver<Event>) {
        log::info!("[lobby] open");
        while let Some(event) = events.recv().await {
            self.handle(event);
        }
        log::info!("[lobby] closed after {} games", self.matchmaker.matches());
    }
    pub fn handle(&mut self, event: Event) {
        log::trace!("[lobby] {}", event);
        match event {
            Event::Connect(id, tx) => self.connect(id, tx),
            Event::Message(id, raw) => self.message(id, &raw),
            Event::Disconnect(id) => self.disconnect(id),
            Event::Tick(id) => self.tick(id),
        }
    }
}

impl Lobby {
    fn connect(&mut self, id: ID<Connection>, tx: Tx) {
        if self.clients.insert(id, tx).is_some() {
            log::warn!("[lobby] {} connected twice", id);
        }
        log::debug!("[lobby] {} connected ({} online)", id, self.clients.len());
    }

    fn message(&mut self, id: ID<Connection>, raw: &str) {
        if !self.clients.contains_key(&id) {
            log::warn!("[lobby] message from unregistered {}", id);
            return;
        }
        match Protocol::decode(raw) {
            Err(e) => log::warn!("[lobby] dropping message from {}: {}", id, e),
            Ok(ClientMessage::InitGame) => self.join(id),
            Ok(ClientMessage::Move(spec)) => self.play(id, &spec),
            Ok(ClientMessage::Resign) => self.resign(id),
            Ok(ClientMessage::Unknown(kind)) => {
                log::debug!("[lobby] ignoring {} from {}", kind, id)
            }
        }
    }

    fn disconnect(&mut self, id: ID<Connection>) {
        self.clients.remove(&id);
        if self.matchmaker.cancel(id) {
            log::info!("[lobby] {} left the queue", id);
        }
        let Some(sid) = self.owners.get(&id).copied() else {
            log::debug!("[lobby] {} disconnected", id);
            return;
        };
        if let Some(mut session) = self.close(sid) {
            match session.abandon(id) {
                Some(other) if self.clients.contains_key(&other) => {
                    session.notify_abandoned(other)
                }
                Some(other) => log::debug!("[lobby] {} already gone", other),
                None => log::warn!("[lobby] {} not seated in {}", id, sid),
            }
        }
    }

    fn tick(&mut self, sid: ID<Session>) {
        match self.sessions.get_mut(&sid) {
            Some(session) => session.tick(),
            None => log::trace!("[lobby] stale tick for {}", sid),
        }
        self.settle(sid);
    }
}

impl Lobby {
    fn join(&mut self, id: ID<Connection>) {
        if let Some(sid) = self.owners.get(&id) {
            log::debug!("[lobby] {} already playing in {}", id, sid);
            return;
        }
        match self.matchmaker.request(id) {
            Some(pairing) => self.open(pairing),
            None => log::info!("[lobby] {} waiting for an opponent", id),
        }
    }

    fn play(&mut self, id: ID<Connection>, spec: &crate::rules::MoveSpec) {
        let Some(sid) = self.owners.get(&id).copied() else {
            log::debug!("[lobby] move from {} outside a game", id);
            return;
        };
        if let Some(session) = self.sessions.get_mut(&sid) {
            session.make_move(id, spec);
        }
        self.settle(sid);
    }

    fn resign(&mut self, id: ID<Connection>) {
        let Some(sid) = self.owners.get(&id).copied() else {
            log::debug!("[lobby] resignation from {} outside a game", id);
            return;
        };
        if let Some(session) = self.sessions.get_mut(&sid) {
            session.resign(id);
        }
        self.close(sid);
    }

    /// Seats a fresh pairing, starts its clock, and announces it.
    fn open(&mut self, pairing: Pairing) {
        let seat = |id: ID<Connection>| self.clients.get(&id).cloned().map(|tx| Seat::new(id, tx));
        let (Some(white), Some(black)) = (seat(pairing.white), seat(pairing.black)) else {
            log::warn!("[lobby] pairing with unregistered connection dropped");
            return;
        };
        let Some(table) = Table::new(white, black) else {
            log::warn!("[lobby] {} cannot play itself", pairing.white);
            return;
        };
        let id = ID::default();
        let session = Session::new(
            id,
            table,
            Position::default(),
            Clock::new(self.config.budget),
            self.ticker(id),
        );
        session.start();
        self.owners.insert(pairing.white, id);
        self.owners.insert(pairing.black, id);
        self.sessions.insert(id, session);
    }

    fn ticker(&self, sid: ID<Session>) -> Ticker {
        let inbox = self.inbox.clone();
        Ticker::spawn(self.config.period, move || {
            inbox
                .upgrade()
                .is_some_and(|tx| tx.send(Event::Tick(sid)).is_ok())
        })
    }

    /// Drops the session if it has finished.
    fn settle(&mut self, sid: ID<Session>) {
        if self.sessions.get(&sid).is_some_and(Session::is_finished) {
            self.close(sid);
        }
    }

    /// Removes a session and both ownership entries. Dropping the session
    /// cancels its ticker if it is still running.
    fn close(&mut self, sid: ID<Session>) -> Option<Session> {
        let session = self.sessions.remove(&sid)?;
        self.owners.retain(|_, owned| *owned != sid);
        log::debug!("[lobby] closed {} ({} active)", sid, self.sessions.len());
        Some(session)
    }
}

impl Lobby {
    /// Registered connections.
    pub fn connected(&self) -> usize {
        self.clients.len()
    }
    /// Active sessions.
    pub fn active(&self) -> usize {
        self.sessions.len()
    }
    pub fn pending(&self) -> Option<ID<Connection>> {
        self.matchmaker.pending()
    }
    pub fn session_of(&self, id: ID<Connection>) -> Option<ID<Session>> {
        self.owners.get(&id).copied()
    }
    pub fn session(&self, sid: ID<Session>) -> Option<&Session> {
        self.sessions.get(&sid)
    }
}
