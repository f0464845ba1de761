use crate::layout::GameLayout;
use crate::report::LayoutReport;

/// What a tracker needs to know about one build of the game: where the game
/// object's members live and which `gamestate` values mean a run is underway
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Revision {
    pub layout: GameLayout,
    pub playing_states: [u32; 5],
}

impl Revision {
    /// Revision matching the values compiled into this crate
    pub fn compiled() -> Self {
        Self::from(LayoutReport::compiled())
    }

    pub fn is_playing_state(&self, gamestate: u32) -> bool {
        self.playing_states.contains(&gamestate)
    }
}

impl From<LayoutReport> for Revision {
    fn from(report: LayoutReport) -> Self {
        Self {
            layout: report.layout,
            playing_states: report.modes,
        }
    }
}
