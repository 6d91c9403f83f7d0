//! Rule-engine adapter.
//!
//! The rest of the crate never looks inside a chess position. It asks a
//! [`Board`] whose turn it is, whether a [`MoveSpec`] is legal, and how the
//! game ended. [`Position`] answers those questions with `shakmaty`.
mod board;
mod color;
mod error;
mod position;
mod spec;

pub use board::*;
pub use color::*;
pub use error::*;
pub use position::*;
pub use spec::*;
