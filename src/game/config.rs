//! Game configuration.
//!
//! `PlayerSetup` is what the setup dialog hands over; `GameConfig` is what
//! the engine consumes. Name defaults follow the setup dialog: empty names
//! fall back to "Player 1"/"Player 2", or "Player"/"Computer" against the
//! computer.

use chrono::TimeDelta;

use crate::engines::engine_trait::Difficulty;
use crate::errors::{ChessError, ChessResult};
use crate::game_state::chess_rules::DEFAULT_CLOCK_SECONDS;
use crate::game_state::chess_types::Color;

/// Environment variable overriding the per-side clock allowance, in seconds.
pub const CLOCK_SECONDS_ENV: &str = "GRID_CHESS_CLOCK_SECONDS";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Opponent {
    Human,
    Computer { color: Color, difficulty: Difficulty },
}

/// What happens when a second friendly piece is clicked while one is selected.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SelectionPolicy {
    /// Drop the selection; the player must click again to pick up a piece.
    #[default]
    CancelOnFriendlyClick,
    /// Pick up the newly clicked piece instead.
    Reselect,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlayerSetup {
    pub name1: String,
    pub name2: String,
    pub vs_computer: bool,
    pub difficulty: Difficulty,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameConfig {
    pub white_name: String,
    pub black_name: String,
    pub opponent: Opponent,
    pub clock_duration: TimeDelta,
    pub selection_policy: SelectionPolicy,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            white_name: "Player 1".to_owned(),
            black_name: "Player 2".to_owned(),
            opponent: Opponent::Human,
            clock_duration: TimeDelta::seconds(DEFAULT_CLOCK_SECONDS),
            selection_policy: SelectionPolicy::default(),
        }
    }
}

fn name_or(name: &str, fallback: &str) -> String {
    let trimmed = name.trim();
    if trimmed.is_empty() {
        fallback.to_owned()
    } else {
        trimmed.to_owned()
    }
}

impl GameConfig {
    pub fn from_setup(setup: &PlayerSetup) -> Self {
        if setup.vs_computer {
            Self {
                white_name: name_or(&setup.name1, "Player"),
                black_name: name_or(&setup.name2, "Computer"),
                opponent: Opponent::Computer {
                    color: Color::Black,
                    difficulty: setup.difficulty,
                },
                ..Self::default()
            }
        } else {
            Self {
                white_name: name_or(&setup.name1, "Player 1"),
                black_name: name_or(&setup.name2, "Player 2"),
                ..Self::default()
            }
        }
    }

    pub fn vs_computer(difficulty: Difficulty) -> Self {
        Self::from_setup(&PlayerSetup {
            name1: String::new(),
            name2: String::new(),
            vs_computer: true,
            difficulty,
        })
    }

    pub fn player_name(&self, color: Color) -> &str {
        match color {
            Color::White => &self.white_name,
            Color::Black => &self.black_name,
        }
    }

    /// Human-vs-human games report Easy, matching the setup dialog.
    pub fn difficulty(&self) -> Difficulty {
        match self.opponent {
            Opponent::Human => Difficulty::Easy,
            Opponent::Computer { difficulty, .. } => difficulty,
        }
    }

    pub fn computer_color(&self) -> Option<Color> {
        match self.opponent {
            Opponent::Human => None,
            Opponent::Computer { color, .. } => Some(color),
        }
    }

    pub fn with_clock_seconds(mut self, seconds: i64) -> ChessResult<Self> {
        self.clock_duration = clock_duration_from_seconds(seconds)
            .ok_or_else(|| ChessError::InvalidClockSetting(seconds.to_string()))?;
        Ok(self)
    }

    /// Apply `GRID_CHESS_CLOCK_SECONDS` when it is set.
    pub fn with_env_overrides(self) -> ChessResult<Self> {
        match std::env::var(CLOCK_SECONDS_ENV) {
            Ok(value) => {
                let mut config = self;
                config.clock_duration = parse_clock_duration(&value)?;
                Ok(config)
            }
            Err(_) => Ok(self),
        }
    }
}

fn parse_clock_duration(value: &str) -> ChessResult<TimeDelta> {
    value
        .trim()
        .parse()
        .ok()
        .and_then(clock_duration_from_seconds)
        .ok_or_else(|| ChessError::InvalidClockSetting(value.to_owned()))
}

fn clock_duration_from_seconds(seconds: i64) -> Option<TimeDelta> {
    if seconds <= 0 {
        return None;
    }
    TimeDelta::try_seconds(seconds)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_twenty_minute_hot_seat() {
        let config = GameConfig::default();
        assert_eq!(config.clock_duration, TimeDelta::seconds(1200));
        assert_eq!(config.opponent, Opponent::Human);
        assert_eq!(config.difficulty(), Difficulty::Easy);
        assert_eq!(config.computer_color(), None);
    }

    #[test]
    fn blank_names_fall_back_per_mode() {
        let setup = PlayerSetup {
            name1: "  ".to_owned(),
            name2: String::new(),
            vs_computer: false,
            difficulty: Difficulty::Hard,
        };
        let config = GameConfig::from_setup(&setup);
        assert_eq!(config.white_name, "Player 1");
        assert_eq!(config.black_name, "Player 2");
        assert_eq!(config.difficulty(), Difficulty::Easy);

        let config = GameConfig::from_setup(&PlayerSetup {
            vs_computer: true,
            ..setup
        });
        assert_eq!(config.white_name, "Player");
        assert_eq!(config.black_name, "Computer");
        assert_eq!(config.difficulty(), Difficulty::Hard);
        assert_eq!(config.computer_color(), Some(Color::Black));
    }

    #[test]
    fn names_are_trimmed() {
        let config = GameConfig::from_setup(&PlayerSetup {
            name1: " Ada ".to_owned(),
            name2: "Max".to_owned(),
            vs_computer: false,
            difficulty: Difficulty::Easy,
        });
        assert_eq!(config.player_name(Color::White), "Ada");
        assert_eq!(config.player_name(Color::Black), "Max");
    }

    #[test]
    fn clock_setting_must_be_positive_seconds() {
        assert_eq!(parse_clock_duration("90"), Ok(TimeDelta::seconds(90)));
        assert!(matches!(
            parse_clock_duration("0"),
            Err(ChessError::InvalidClockSetting(_))
        ));
        assert!(parse_clock_duration("ten").is_err());
        let config = GameConfig::default()
            .with_clock_seconds(300)
            .expect("300 seconds is valid");
        assert_eq!(config.clock_duration, TimeDelta::seconds(300));
    }
}
