//! Matchmaking and connection hosting.
//!
//! All game state lives in one [`Lobby`] task. Transports and clock tickers
//! talk to it only by sending [`Event`]s, so handlers never race.
//!
//! ## Core Types
//!
//! - [`Lobby`] — Connection registry, session registry, and event dispatcher
//! - [`Matchmaker`] — Single pending slot that pairs joiners two at a time
//! - [`Handle`] — Cloneable sender into a running lobby
//!
//! ## Transport
//!
//! With the `server` feature, [`Server`] serves WebSocket upgrades on `/` and
//! bridges each socket to the lobby through [`Handle::bridge`].
mod event;
mod handle;
mod lobby;
mod matchmaker;

pub use event::*;
pub use handle::*;
pub use lobby::*;
pub use matchmaker::*;

#[cfg(feature = "server")]
mod bridge;
#[cfg(feature = "server")]
mod config;
#[cfg(feature = "server")]
mod server;

#[cfg(feature = "server")]
pub use config::*;
#[cfg(feature = "server")]
pub use server::*;
