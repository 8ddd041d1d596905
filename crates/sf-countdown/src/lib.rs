//! Decorative sale countdown.
//!
//! States: `Running` → `Finished`. Ticks borrow seconds → minutes → hours;
//! the first tick after 00:00:00 finishes the countdown and every later tick
//! is ignored.

use tracing::debug;

pub const TICK_INTERVAL_MS: u32 = 1_000;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Tick {
    Running,
    Finished,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Countdown {
    hours: u8,
    minutes: u8,
    seconds: u8,
    finished: bool,
}

impl Default for Countdown {
    fn default() -> Self {
        Self::new(7, 23, 45)
    }
}

impl Countdown {
    /// Minutes and seconds are clamped to 59.
    pub fn new(hours: u8, minutes: u8, seconds: u8) -> Self {
        Self {
            hours,
            minutes: minutes.min(59),
            seconds: seconds.min(59),
            finished: false,
        }
    }

    pub fn hours(&self) -> u8 {
        self.hours
    }

    pub fn minutes(&self) -> u8 {
        self.minutes
    }

    pub fn seconds(&self) -> u8 {
        self.seconds
    }

    pub fn is_finished(&self) -> bool {
        self.finished
    }

    pub fn tick(&mut self) -> Tick {
        if self.finished {
            return Tick::Finished;
        }

        if self.seconds > 0 {
            self.seconds -= 1;
        } else if self.minutes > 0 {
            self.minutes -= 1;
            self.seconds = 59;
        } else if self.hours > 0 {
            self.hours -= 1;
            self.minutes = 59;
            self.seconds = 59;
        } else {
            self.finished = true;
            debug!("countdown finished");
            return Tick::Finished;
        }

        Tick::Running
    }

    /// Zero-padded `[hh, mm, ss]`.
    pub fn digits(&self) -> [String; 3] {
        [
            format!("{:02}", self.hours),
            format!("{:02}", self.minutes),
            format!("{:02}", self.seconds),
        ]
    }
}

impl std::fmt::Display for Countdown {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:02}:{:02}:{:02}", self.hours, self.minutes, self.seconds)
    }
}
