pub(crate) use common::config::{ConfigManager, FileContentConfigProvider, Validate, YamlConfigSerializer};
use common::games::tictactoe::{Difficulty, Side};
use serde::{Deserialize, Serialize};

pub const CONFIG_FILE: &str = "tictactoe_config.yaml";

const MAX_PLAYER_NAME_LEN: usize = 32;
const MAX_BOT_DELAY_MS: u64 = 5000;

pub fn get_config_manager(
    path: &str,
) -> ConfigManager<FileContentConfigProvider, Config, YamlConfigSerializer> {
    ConfigManager::from_yaml_file(path)
}

#[derive(Debug, PartialEq, Serialize, Deserialize, Clone)]
pub struct Config {
    pub player_name: String,
    pub difficulty: Difficulty,
    pub human_side: Side,
    pub history_file: String,
    pub bot_delay_ms: u64,
}

impl Validate for Config {
    fn validate(&self) -> Result<(), String> {
        let name = self.player_name.trim();
        if name.is_empty() {
            return Err("player_name must not be empty".to_string());
        }
        if name.chars().count() > MAX_PLAYER_NAME_LEN {
            return Err(format!(
                "player_name must not exceed {} characters",
                MAX_PLAYER_NAME_LEN
            ));
        }
        if self.history_file.trim().is_empty() {
            return Err("history_file must not be empty".to_string());
        }
        if self.bot_delay_ms > MAX_BOT_DELAY_MS {
            return Err(format!("bot_delay_ms must not exceed {}", MAX_BOT_DELAY_MS));
        }
        Ok(())
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            player_name: "Player".to_string(),
            difficulty: Difficulty::Hard,
            human_side: Side::X,
            history_file: "tictactoe_history.yaml".to_string(),
            bot_delay_ms: 600,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use common::config::{ConfigContentProvider, ConfigSerializer};

    fn get_temp_file_path() -> String {
        let random_number: u32 = rand::random();
        let path = std::env::temp_dir().join(format!("temp_tictactoe_client_config_{}.yaml", random_number));
        path.to_string_lossy().into_owned()
    }

    #[test]
    fn test_default_config_is_valid() {
        assert!(Config::default().validate().is_ok());
    }

    #[test]
    fn test_default_config_can_be_serialized_and_deserialized_string() {
        let default_config = Config::default();
        let serializer = YamlConfigSerializer::new();
        let serialized = serializer.serialize(&default_config).unwrap();
        let deserialized: Config = serializer.deserialize(&serialized).unwrap();
        assert_eq!(default_config, deserialized);
    }

    #[test]
    fn test_config_can_be_saved_and_loaded_by_manager() {
        let config = Config {
            player_name: "Ada".to_string(),
            difficulty: Difficulty::Easy,
            human_side: Side::O,
            ..Config::default()
        };
        let file_path = get_temp_file_path();
        let manager = get_config_manager(&file_path);
        manager.set_config(&config).unwrap();

        let reloaded = get_config_manager(&file_path).get_config().unwrap();
        assert_eq!(config, reloaded);

        let _ = std::fs::remove_file(&file_path);
    }

    #[test]
    fn test_config_file_does_not_exist_returns_default_config() {
        let manager = get_config_manager("this_file_does_not_exist.yaml");
        assert_eq!(manager.get_config().unwrap(), Config::default());
    }

    #[test]
    fn test_invalid_config_cant_be_read() {
        let invalid_config_content = r#"
            player_name: ""
            difficulty: Hard
            human_side: X
            history_file: history.yaml
            bot_delay_ms: 100
        "#;

        let file_path = get_temp_file_path();
        FileContentConfigProvider::new(file_path.clone())
            .set_config_content(invalid_config_content)
            .unwrap();

        let manager = get_config_manager(&file_path);
        assert!(manager.get_config().is_err());

        let _ = std::fs::remove_file(&file_path);
    }

    #[test]
    fn test_too_long_delay_is_invalid() {
        let config = Config {
            bot_delay_ms: 10_000,
            ..Config::default()
        };
        assert!(config.validate().is_err());
    }
}
