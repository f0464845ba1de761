use strum::{Display, EnumIter, FromRepr};

/// Top-level game mode, mirroring the mode enumeration in the game's `Enums.h`
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, FromRepr, EnumIter, Display,
)]
#[repr(u32)]
pub enum GameMode {
    #[strum(serialize = "GAMEMODE")]
    Game = 0,
    #[strum(serialize = "TITLEMODE")]
    Title = 1,
    #[strum(serialize = "CLICKTOSTART")]
    ClickToStart = 2,
    #[strum(serialize = "FOCUSMODE")]
    Focus = 3,
    #[strum(serialize = "MAPMODE")]
    Map = 4,
    #[strum(serialize = "TELEPORTERMODE")]
    Teleporter = 5,
    #[strum(serialize = "GAMECOMPLETE")]
    GameComplete = 6,
    #[strum(serialize = "GAMECOMPLETE2")]
    GameComplete2 = 7,
    #[strum(serialize = "EDITORMODE")]
    Editor = 8,
    #[strum(serialize = "PRELOADER")]
    Preloader = 9,
}

impl GameMode {
    /// Modes printed by the layout report, in report order
    pub const REPORTED: [GameMode; 5] = [
        Self::Game,
        Self::Map,
        Self::Teleporter,
        Self::GameComplete,
        Self::GameComplete2,
    ];

    pub fn from_u32(value: u32) -> Option<Self> {
        Self::from_repr(value)
    }

    pub const fn value(self) -> u32 {
        self as u32
    }

    /// Raw values of the reported modes
    pub fn reported_values() -> [u32; 5] {
        Self::REPORTED.map(Self::value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn test_game_mode_from_u32() {
        assert_eq!(GameMode::from_u32(0), Some(GameMode::Game));
        assert_eq!(GameMode::from_u32(4), Some(GameMode::Map));
        assert_eq!(GameMode::from_u32(7), Some(GameMode::GameComplete2));
        assert_eq!(GameMode::from_u32(9), Some(GameMode::Preloader));
        assert_eq!(GameMode::from_u32(10), None);
    }

    #[test]
    fn test_game_mode_values_are_declaration_order() {
        for (i, mode) in GameMode::iter().enumerate() {
            assert_eq!(mode.value() as usize, i);
        }
    }

    #[test]
    fn test_reported_values() {
        assert_eq!(GameMode::reported_values(), [0, 4, 5, 6, 7]);
    }

    #[test]
    fn test_game_mode_display() {
        assert_eq!(GameMode::Map.to_string(), "MAPMODE");
        assert_eq!(GameMode::GameComplete2.to_string(), "GAMECOMPLETE2");
    }
}
