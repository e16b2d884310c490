use serde::{Deserialize, Serialize};
use tictactoe_common::config::{
    ConfigManager, FileContentConfigProvider, Validate, YamlConfigSerializer,
};
use tictactoe_common::games::tictactoe::{BOARD_SIZE, BotType, Label, Player};

use super::LogConfig;

pub const CONFIG_FILE_NAME: &str = "tictactoe_config.yaml";

const MAX_RANDOM_BOARD_SIZE: usize = 9;

pub fn get_config_manager(
    path: &str,
) -> ConfigManager<FileContentConfigProvider, Config, YamlConfigSerializer> {
    ConfigManager::from_yaml_file(path)
}

#[derive(Debug, PartialEq, Serialize, Deserialize, Clone)]
pub struct Config {
    pub players: Vec<Player>,
    pub board_size: usize,
    pub bot_type: BotType,
    /// Label the computer plays; `None` for two human players.
    pub computer_label: Option<Label>,
    #[serde(default)]
    pub seed: Option<u64>,
    #[serde(default)]
    pub reset_restores_first_player: bool,
    #[serde(default)]
    pub log: LogConfig,
}

impl Validate for Config {
    fn validate(&self) -> Result<(), String> {
        if self.players.len() != 2 {
            return Err(format!(
                "exactly 2 players are required, got {}",
                self.players.len()
            ));
        }
        if self.players[0].label == self.players[1].label {
            return Err(format!(
                "player labels must differ, both are {}",
                self.players[0].label
            ));
        }
        for player in &self.players {
            let ch = player.label.as_char();
            if ch == '_' || ch.is_whitespace() {
                return Err(format!("'{}' cannot be used as a player label", ch));
            }
        }
        match self.bot_type {
            BotType::Minimax | BotType::MinimaxWithLength if self.board_size != BOARD_SIZE => {
                return Err(format!(
                    "{} requires a {}x{} board",
                    self.bot_type, BOARD_SIZE, BOARD_SIZE
                ));
            }
            _ => {}
        }
        if self.board_size < BOARD_SIZE || self.board_size > MAX_RANDOM_BOARD_SIZE {
            return Err(format!(
                "board_size must be between {} and {}",
                BOARD_SIZE, MAX_RANDOM_BOARD_SIZE
            ));
        }
        if let Some(label) = self.computer_label
            && !self.players.iter().any(|p| p.label == label)
        {
            return Err(format!("computer_label {} does not match any player", label));
        }
        Ok(())
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            players: Player::default_players(),
            board_size: BOARD_SIZE,
            bot_type: BotType::MinimaxWithLength,
            computer_label: Some(Label::O),
            seed: None,
            reset_restores_first_player: false,
            log: LogConfig::default(),
        }
    }
}
