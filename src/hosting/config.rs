use crate::gameroom::ClockConfig;
use clap::Parser;

/// Command-line and environment settings for the hosting server.
#[derive(Debug, Clone, Parser)]
#[command(name = "hosting", about = "Pairs WebSocket clients into chess games")]
pub struct Config {
    /// Address to listen on.
    #[arg(long, env = "BIND_ADDR", default_value = crate::BIND_ADDR)]
    pub bind: String,
    /// Seconds on each clock at the start of a game.
    #[arg(long, env = "CLOCK_SECONDS", default_value_t = crate::CLOCK_SECONDS)]
    pub clock: u32,
    /// HTTP worker threads.
    #[arg(long, env = "WORKERS", default_value_t = crate::WORKERS)]
    pub workers: usize,
}

impl Config {
    pub fn clock(&self) -> ClockConfig {
        ClockConfig {
            budget: self.clock,
            period: crate::TICK_PERIOD,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    #[test]
    fn flags_override_defaults() {
        let config = Config::parse_from(["hosting", "--bind", "127.0.0.1:9000", "--clock", "60"]);
        assert_eq!(config.bind, "127.0.0.1:9000");
        assert_eq!(config.clock().budget, 60);
        assert_eq!(config.clock().period, crate::TICK_PERIOD);
    }
    #[test]
    fn rejects_garbage() {
        assert!(Config::try_parse_from(["hosting", "--clock", "soon"]).is_err());
    }
}
