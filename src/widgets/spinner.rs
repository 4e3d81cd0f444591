//! Animated fetch-in-progress indicator.

use std::time::Duration;

const FRAMES: [&str; 8] = ["⣾", "⣽", "⣻", "⢿", "⡿", "⣟", "⣯", "⣷"];

/// Delay between spinner ticks. Each tick message advances one frame.
pub const TICK_INTERVAL: Duration = Duration::from_millis(100);

pub struct Spinner {
    frame: usize,
}

impl Spinner {
    pub fn new() -> Self {
        Spinner { frame: 0 }
    }

    pub fn advance(&mut self) {
        self.frame = (self.frame + 1) % FRAMES.len();
    }

    pub fn glyph(&self) -> &'static str {
        FRAMES[self.frame]
    }
}
