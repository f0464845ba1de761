use std::time::Duration;

use crate::game::GameMode;

/// In-game clock rate
const FRAMES_PER_SECOND: u64 = 30;

/// In-game clock, stored as four consecutive counters
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[repr(C)]
pub struct Timer {
    pub frames: u32,
    pub seconds: u32,
    pub minutes: u32,
    pub hours: u32,
}

impl Timer {
    pub fn elapsed(&self) -> Duration {
        let secs = u64::from(self.hours) * 3600
            + u64::from(self.minutes) * 60
            + u64::from(self.seconds);
        Duration::from_secs(secs)
            + Duration::from_nanos(u64::from(self.frames) * 1_000_000_000 / FRAMES_PER_SECOND)
    }
}

impl From<Timer> for Duration {
    fn from(timer: Timer) -> Duration {
        timer.elapsed()
    }
}

/// Members of the game object read by the autosplitter.
///
/// Field order and types follow the game's `Game` class; the layout report
/// is derived from this definition with `size_of` and `offset_of!`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[repr(C)]
pub struct GameObject {
    pub room_x: u32,
    pub room_y: u32,
    pub state: u32,
    pub gamestate: u32,
    pub timer: Timer,
}

impl GameObject {
    pub fn room(&self) -> (u32, u32) {
        (self.room_x, self.room_y)
    }

    /// Current mode, or `None` if `gamestate` holds an unknown value
    pub fn mode(&self) -> Option<GameMode> {
        GameMode::from_u32(self.gamestate)
    }

    pub fn elapsed(&self) -> Duration {
        self.timer.elapsed()
    }
}
