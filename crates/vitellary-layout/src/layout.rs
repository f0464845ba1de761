//! Compiled memory layout of the game object
//!
//! The autosplitter reads the game object out of another process by byte
//! offset, so it has to agree with the game binary on where each member
//! lives. `GameLayout::COMPILED` is that agreement as seen by this build.

use std::mem::{offset_of, size_of};

use strum::Display;
use tracing::debug;

use crate::error::{Error, Result};
use crate::game::{GameObject, Timer};

/// Game object members covered by the layout report, in report order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
pub enum Field {
    #[strum(serialize = "roomx")]
    RoomX,
    #[strum(serialize = "roomy")]
    RoomY,
    #[strum(serialize = "state")]
    State,
    #[strum(serialize = "gamestate")]
    GameState,
    #[strum(serialize = "frames")]
    Frames,
}

impl Field {
    pub const ALL: [Field; 5] = [
        Self::RoomX,
        Self::RoomY,
        Self::State,
        Self::GameState,
        Self::Frames,
    ];

    /// Size of the member in bytes (every tracked member is a 32-bit integer)
    pub const fn width(self) -> usize {
        size_of::<u32>()
    }
}

/// Total size and member offsets of the game object
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameLayout {
    pub size: usize,
    pub room_x: usize,
    pub room_y: usize,
    pub state: usize,
    pub gamestate: usize,
    pub frames: usize,
}

// Every reported field must lie inside the compiled structure.
const _: () = assert!(GameLayout::COMPILED.size >= GameLayout::COMPILED.end_of_fields());

impl GameLayout {
    /// Layout of `GameObject` as compiled into this binary
    pub const COMPILED: GameLayout = GameLayout {
        size: size_of::<GameObject>(),
        room_x: offset_of!(GameObject, room_x),
        room_y: offset_of!(GameObject, room_y),
        state: offset_of!(GameObject, state),
        gamestate: offset_of!(GameObject, gamestate),
        frames: offset_of!(GameObject, timer) + offset_of!(Timer, frames),
    };

    pub const fn offset(&self, field: Field) -> usize {
        match field {
            Field::RoomX => self.room_x,
            Field::RoomY => self.room_y,
            Field::State => self.state,
            Field::GameState => self.gamestate,
            Field::Frames => self.frames,
        }
    }

    /// Offsets of every reported field, in report order
    pub const fn offsets(&self) -> [usize; 5] {
        [
            self.room_x,
            self.room_y,
            self.state,
            self.gamestate,
            self.frames,
        ]
    }

    pub fn fields(&self) -> [(Field, usize); 5] {
        Field::ALL.map(|field| (field, self.offset(field)))
    }

    /// First byte past the last reported field
    pub const fn end_of_fields(&self) -> usize {
        let mut end = 0;
        let mut i = 0;
        while i < Field::ALL.len() {
            let field = Field::ALL[i];
            let field_end = self.offset(field) + field.width();
            if field_end > end {
                end = field_end;
            }
            i += 1;
        }
        end
    }

    /// Check that every field lies inside the structure and no two overlap
    pub fn validate(&self) -> Result<()> {
        for (field, offset) in self.fields() {
            let width = field.width();
            if offset + width > self.size {
                return Err(Error::FieldOutOfBounds {
                    field,
                    offset,
                    width,
                    size: self.size,
                });
            }
        }

        let mut sorted = self.fields();
        sorted.sort_by_key(|&(_, offset)| offset);
        for pair in sorted.windows(2) {
            let (first, first_offset) = pair[0];
            let (second, second_offset) = pair[1];
            if first_offset + first.width() > second_offset {
                return Err(Error::FieldOverlap { first, second });
            }
        }

        debug!("Layout valid: {:?}", self);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_layout() -> GameLayout {
        GameLayout {
            size: 32,
            room_x: 4,
            room_y: 8,
            state: 12,
            gamestate: 16,
            frames: 20,
        }
    }

    #[test]
    fn test_compiled_layout() {
        let layout = GameLayout::COMPILED;
        assert_eq!(layout.size, 32);
        assert_eq!(layout.offsets(), [0, 4, 8, 12, 16]);
        assert!(layout.validate().is_ok());
    }

    #[test]
    fn test_compiled_size_covers_fields() {
        let layout = GameLayout::COMPILED;
        let (last, offset) = layout
            .fields()
            .into_iter()
            .max_by_key(|&(_, offset)| offset)
            .unwrap();
        assert!(layout.size >= offset + last.width());
    }

    #[test]
    fn test_offsets_follow_declaration_order() {
        #[allow(dead_code)]
        #[repr(C)]
        struct Reordered {
            timer: Timer,
            gamestate: u32,
            state: u32,
            room_y: u32,
            room_x: u32,
        }

        let layout = GameLayout {
            size: size_of::<Reordered>(),
            room_x: offset_of!(Reordered, room_x),
            room_y: offset_of!(Reordered, room_y),
            state: offset_of!(Reordered, state),
            gamestate: offset_of!(Reordered, gamestate),
            frames: offset_of!(Reordered, timer) + offset_of!(Timer, frames),
        };
        assert_eq!(layout.size, GameLayout::COMPILED.size);
        assert_eq!(layout.offsets(), [28, 24, 20, 16, 0]);
        assert_ne!(layout.offsets(), GameLayout::COMPILED.offsets());
        assert!(layout.validate().is_ok());
    }

    #[test]
    fn test_end_of_fields() {
        assert_eq!(sample_layout().end_of_fields(), 24);
        assert_eq!(GameLayout::COMPILED.end_of_fields(), 20);
    }

    #[test]
    fn test_validate_out_of_bounds() {
        let layout = GameLayout {
            frames: 30,
            ..sample_layout()
        };
        match layout.validate() {
            Err(Error::FieldOutOfBounds { field, offset, .. }) => {
                assert_eq!(field, Field::Frames);
                assert_eq!(offset, 30);
            }
            other => panic!("expected FieldOutOfBounds, got {:?}", other),
        }
    }

    #[test]
    fn test_validate_overlap() {
        let layout = GameLayout {
            room_y: 6,
            ..sample_layout()
        };
        match layout.validate() {
            Err(Error::FieldOverlap { first, second }) => {
                assert_eq!(first, Field::RoomX);
                assert_eq!(second, Field::RoomY);
            }
            other => panic!("expected FieldOverlap, got {:?}", other),
        }
    }

    #[test]
    fn test_field_widths() {
        for field in Field::ALL {
            assert_eq!(field.width(), 4);
        }
    }

    #[test]
    fn test_field_names() {
        let names: Vec<String> = Field::ALL.iter().map(ToString::to_string).collect();
        assert_eq!(names, ["roomx", "roomy", "state", "gamestate", "frames"]);
    }
}
