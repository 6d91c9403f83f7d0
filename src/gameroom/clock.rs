use crate::rules::Color;

/// Per-side countdown in whole seconds, white first.
///
/// Only ticks change it. Moves neither reset nor increment time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Clock {
    remaining: [u32; 2],
}

impl Clock {
    pub fn new(seconds: u32) -> Self {
        Self {
            remaining: [seconds; 2],
        }
    }
    pub fn remaining(&self, color: Color) -> u32 {
        self.remaining[color.index()]
    }
    /// Both sides' remaining seconds, white first.
    pub fn snapshot(&self) -> (u32, u32) {
        (self.remaining[0], self.remaining[1])
    }
    /// Burns one second from `color` and returns what is left.
    pub fn tick(&mut self, color: Color) -> u32 {
        let side = &mut self.remaining[color.index()];
        *side = side.saturating_sub(1);
        *side
    }
    pub fn flagged(&self, color: Color) -> bool {
        self.remaining(color) == 0
    }
}

impl Default for Clock {
    fn default() -> Self {
        Self::new(crate::CLOCK_SECONDS)
    }
}
