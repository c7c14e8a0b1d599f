//! Game configuration loaded from TOML.

use derive_getters::Getters;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tictactoe::{DEFAULT_BOARD_SIZE, Game, Mark, Player, PlayerColor};
use tracing::{debug, info, instrument};

/// Largest board side the terminal shell will set up.
pub const MAX_BOARD_SIZE: usize = 32;

/// One player entry in the config file.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct PlayerConfig {
    /// Single-character label, e.g. "X".
    label: String,

    /// Display color, e.g. "purple".
    color: PlayerColor,
}

impl PlayerConfig {
    /// Creates a player entry.
    pub fn new(label: impl Into<String>, color: PlayerColor) -> Self {
        Self {
            label: label.into(),
            color,
        }
    }

    /// Converts the entry into an engine player.
    #[instrument(skip(self), fields(label = %self.label))]
    pub fn to_player(&self) -> Result<Player, ConfigError> {
        let mut chars = self.label.chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) if !c.is_whitespace() => Ok(Player::new(Mark::new(c), self.color)),
            _ => Err(ConfigError::new(format!(
                "Player label must be a single visible character, got {:?}",
                self.label
            ))),
        }
    }
}

/// Board size and player roster for a game.
///
/// ```toml
/// board_size = 3
///
/// [[players]]
/// label = "X"
/// color = "purple"
///
/// [[players]]
/// label = "O"
/// color = "green"
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct GameConfig {
    /// Side length of the square board.
    #[serde(default = "default_board_size")]
    board_size: usize,

    /// Players in turn order.
    #[serde(default = "default_players")]
    players: Vec<PlayerConfig>,
}

fn default_board_size() -> usize {
    DEFAULT_BOARD_SIZE
}

fn default_players() -> Vec<PlayerConfig> {
    Player::defaults()
        .iter()
        .map(|p| PlayerConfig::new(p.label().to_string(), *p.color()))
        .collect()
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            board_size: default_board_size(),
            players: default_players(),
        }
    }
}

impl GameConfig {
    /// Loads configuration from a TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;

        let config = Self::parse(&content)?;
        info!(
            board_size = config.board_size,
            players = config.players.len(),
            "Config loaded successfully"
        );
        Ok(config)
    }

    /// Parses configuration from TOML text.
    #[instrument(skip(content))]
    pub fn parse(content: &str) -> Result<Self, ConfigError> {
        toml::from_str(content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))
    }

    /// Replaces the board size.
    pub fn with_board_size(mut self, board_size: usize) -> Self {
        self.board_size = board_size;
        self
    }

    /// Builds a fresh game from this configuration.
    ///
    /// Sizes above [`MAX_BOARD_SIZE`] are rejected before any board is
    /// allocated.
    #[instrument(skip(self), fields(board_size = self.board_size))]
    pub fn build_game(&self) -> Result<Game, ConfigError> {
        if self.board_size > MAX_BOARD_SIZE {
            return Err(ConfigError::new(format!(
                "Board size {} exceeds the maximum of {}",
                self.board_size, MAX_BOARD_SIZE
            )));
        }

        let players = self
            .players
            .iter()
            .map(PlayerConfig::to_player)
            .collect::<Result<Vec<_>, _>>()?;

        Game::new(players, self.board_size)
            .map_err(|e| ConfigError::new(format!("Invalid game setup: {}", e)))
    }
}

/// Configuration error.
#[derive(Debug, Clone, Display, Error)]
#[display("Config error: {} at {}:{}", message, file, line)]
pub struct ConfigError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl ConfigError {
    /// Creates a new configuration error.
    #[track_caller]
    pub fn new(message: String) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message,
            line: loc.line(),
            file: loc.file(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_default_is_classic_game() {
        let game = GameConfig::default().build_game().unwrap();
        assert_eq!(game.board_size(), 3);
        assert_eq!(game.players(), Player::defaults().as_slice());
    }

    #[test]
    fn test_missing_fields_fall_back_to_defaults() {
        let config = GameConfig::parse("board_size = 5").unwrap();
        assert_eq!(*config.board_size(), 5);
        assert_eq!(config.players(), &default_players());
    }

    #[test]
    fn test_parse_players() {
        let config = GameConfig::parse(
            r#"
            board_size = 4

            [[players]]
            label = "A"
            color = "red"

            [[players]]
            label = "B"
            color = "cyan"

            [[players]]
            label = "C"
            color = "maroon"
            "#,
        )
        .unwrap();
        let game = config.build_game().unwrap();
        assert_eq!(game.players().len(), 3);
        assert_eq!(*game.players()[2].color(), PlayerColor::Maroon);
        assert_eq!(game.winning_combinations().len(), 10);
    }

    #[test]
    fn test_unknown_color_is_rejected() {
        let err = GameConfig::parse(
            r#"
            [[players]]
            label = "X"
            color = "mauve"
            "#,
        )
        .unwrap_err();
        assert!(err.message.contains("Failed to parse config"));
    }

    #[test]
    fn test_multi_character_label_is_rejected() {
        let config = GameConfig {
            board_size: 3,
            players: vec![PlayerConfig::new("XX", PlayerColor::Purple)],
        };
        let err = config.build_game().unwrap_err();
        assert!(err.message.contains("single visible character"));
    }

    #[test]
    fn test_blank_label_is_rejected() {
        assert!(PlayerConfig::new(" ", PlayerColor::Green).to_player().is_err());
        assert!(PlayerConfig::new("", PlayerColor::Green).to_player().is_err());
    }

    #[test]
    fn test_setup_errors_surface_as_config_errors() {
        let zero = GameConfig::default().with_board_size(0);
        assert!(zero.build_game().unwrap_err().message.contains("Board size"));

        let nobody = GameConfig::parse("players = []").unwrap();
        assert!(nobody.build_game().unwrap_err().message.contains("At least one player"));

        let twins = GameConfig {
            board_size: 3,
            players: vec![
                PlayerConfig::new("X", PlayerColor::Purple),
                PlayerConfig::new("X", PlayerColor::Green),
            ],
        };
        assert!(twins.build_game().unwrap_err().message.contains("more than one player"));
    }

    #[test]
    fn test_board_size_is_capped() {
        let largest = GameConfig::default().with_board_size(MAX_BOARD_SIZE);
        assert_eq!(largest.build_game().unwrap().board_size(), MAX_BOARD_SIZE);

        for size in [MAX_BOARD_SIZE + 1, 100_000] {
            let err = GameConfig::default()
                .with_board_size(size)
                .build_game()
                .unwrap_err();
            assert!(err.message.contains("exceeds the maximum"), "{}", err);
        }
    }

    #[test]
    fn test_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(
            file,
            "board_size = 3\n[[players]]\nlabel = \"#\"\ncolor = \"yellow\""
        )
        .unwrap();

        let config = GameConfig::from_file(file.path()).unwrap();
        let game = config.build_game().unwrap();
        assert_eq!(game.players().len(), 1);
        assert_eq!(game.current_player().label().as_char(), '#');
    }

    #[test]
    fn test_from_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = GameConfig::from_file(dir.path().join("absent.toml")).unwrap_err();
        assert!(err.message.contains("Failed to read config file"));
    }
}
