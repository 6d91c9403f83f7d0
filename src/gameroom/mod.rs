//! Live chess games.
//!
//! ## Architecture
//!
//! - [`Session`] — One game's state machine: turn checks, moves, clocks, termination
//! - [`Table`] — The two seats of a game and their outbound channels
//! - [`Clock`] — Per-side countdown in seconds
//! - [`Ticker`] — Cancellable once-per-period task that drives a clock
//! - [`Outcome`] — Winner and reason, classified from the board
//!
//! ## Wire
//!
//! - [`ServerMessage`] — Outbound `{type, payload}` envelopes
//! - [`Protocol`] — Decoding of inbound envelopes into [`ClientMessage`]
mod clock;
mod message;
mod names;
mod outcome;
mod protocol;
mod session;
mod table;
mod timer;

pub use clock::*;
pub use message::*;
pub use names::*;
pub use outcome::*;
pub use protocol::*;
pub use session::*;
pub use table::*;
pub use timer::*;
