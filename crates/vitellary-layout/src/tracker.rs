//! Split detection over successive game object snapshots
//!
//! Pure logic: callers read the game object (at the offsets of a
//! `Revision`) and feed each snapshot to `Tracker::update`.

use std::ops::RangeInclusive;
use std::time::Duration;

use strum::Display;
use tracing::debug;

use crate::game::GameObject;
use crate::revision::Revision;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum Event {
    NewGame,
    Verdigris,
    Vermilion,
    Victoria,
    Violet,
    Vitellary,
    IntermissionOne,
    IntermissionTwo,
    GameComplete,
    Reset,
}

/// `state` ranges of the cutscenes that end each split
pub const SPLITS: [(Event, RangeInclusive<u32>); 8] = [
    (Event::Verdigris, 3006..=3011),
    (Event::Vermilion, 3060..=3065),
    (Event::Victoria, 3040..=3045),
    (Event::Violet, 4091..=4099),
    (Event::Vitellary, 3020..=3025),
    (Event::IntermissionOne, 3085..=3087),
    (Event::IntermissionTwo, 3080..=3082),
    (Event::GameComplete, 3503..=3509),
];

/// `state` passes through 3006 on its way to any crewmate rescue, so it only
/// counts as Verdigris in the Murdering Twinmaker room or via telejump.
const VERDIGRIS_STATE: u32 = 3006;
const VERDIGRIS_ROOMS: [(u32, u32); 2] = [(115, 100), (113, 102)];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Update {
    pub time: Duration,
    pub event: Option<Event>,
}

/// Classify the transition from `old` to `cur`
pub fn classify(revision: &Revision, old: &GameObject, cur: &GameObject) -> Update {
    let was_playing = revision.is_playing_state(old.gamestate);
    let is_playing = revision.is_playing_state(cur.gamestate);

    if is_playing && !was_playing {
        return Update {
            time: Duration::ZERO,
            event: Some(Event::NewGame),
        };
    }

    let time = cur.elapsed();
    if !is_playing && was_playing {
        return Update {
            time,
            event: Some(Event::Reset),
        };
    }

    let event = if cur.state == VERDIGRIS_STATE && !VERDIGRIS_ROOMS.contains(&cur.room()) {
        debug!("Ignoring state {} in room {:?}", VERDIGRIS_STATE, cur.room());
        None
    } else {
        SPLITS.into_iter().find_map(|(event, range)| {
            (range.contains(&cur.state) && !range.contains(&old.state)).then_some(event)
        })
    };

    Update { time, event }
}

/// Remembers the previous snapshot so each update sees a transition
#[derive(Debug, Default)]
pub struct Tracker {
    previous: Option<GameObject>,
}

impl Tracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Feed the latest snapshot. The first snapshot is compared with itself,
    /// so attaching mid-run does not fire `NewGame`.
    pub fn update(&mut self, revision: &Revision, object: GameObject) -> Update {
        let old = self.previous.replace(object).unwrap_or(object);

        if old.room() != object.room() {
            debug!(
                "room: {:?} -> {:?} @ {:?}",
                old.room(),
                object.room(),
                object.elapsed()
            );
        }
        if old.gamestate != object.gamestate {
            debug!(
                "gamestate: {:?} -> {:?} @ {:?}",
                old.mode(),
                object.mode(),
                object.elapsed()
            );
        }
        if old.state != object.state {
            debug!(
                "state: {} -> {} @ {:?}",
                old.state,
                object.state,
                object.elapsed()
            );
        }

        classify(revision, &old, &object)
    }
}
