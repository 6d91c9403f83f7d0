//! Hosting server binary.
//!
//! Accepts WebSocket connections on `/`, pairs them into chess games, and
//! runs every game until checkmate, draw, resignation, timeout, or disconnect.

use clap::Parser;
use gambit::*;

#[tokio::main]
async fn main() {
    log();
    kys();
    hosting::Server::run(hosting::Config::parse()).await.unwrap();
}
