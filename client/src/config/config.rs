use common::config::{ConfigManager, FileContentConfigProvider, Validate, YamlConfigSerializer};
use serde::{Deserialize, Serialize};

use super::GameConfig;

const CONFIG_FILE_NAME: &str = "tictactoe_config.yaml";

fn get_config_path() -> String {
    if let Ok(exe_path) = std::env::current_exe()
        && let Some(exe_dir) = exe_path.parent()
    {
        return exe_dir.join(CONFIG_FILE_NAME).to_string_lossy().into_owned();
    }
    CONFIG_FILE_NAME.to_string()
}

/// Config next to the executable unless `path` is given.
pub fn get_config_manager(
    path: Option<&str>,
) -> ConfigManager<FileContentConfigProvider, Config, YamlConfigSerializer> {
    match path {
        Some(path) => ConfigManager::from_yaml_file(path),
        None => ConfigManager::from_yaml_file(&get_config_path()),
    }
}

#[derive(Debug, PartialEq, Serialize, Deserialize, Clone, Default)]
pub struct Config {
    pub game: GameConfig,
    #[serde(default)]
    pub verbose_logging: bool,
}

impl Validate for Config {
    fn validate(&self) -> Result<(), String> {
        self.game.validate()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use common::config::{ConfigContentProvider, ConfigError, ConfigSerializer};
    use common::games::tictactoe::{Difficulty, FirstPlayer};

    fn get_temp_file_path() -> String {
        use std::env;
        let mut path = env::temp_dir();
        let random_number: u32 = rand::random();
        let file_name = format!("temp_tictactoe_config_{}.yaml", random_number);
        path.push(file_name);
        path.to_str().unwrap().to_string()
    }

    #[test]
    fn test_default_config_can_be_serialized_and_deserialized_string() {
        let default_config = Config::default();
        let serializer = YamlConfigSerializer::new();

        let serialized_string = serializer.serialize(&default_config).unwrap();
        let deserialized_config: Config = serializer.deserialize(&serialized_string).unwrap();

        assert_eq!(default_config, deserialized_config);
    }

    #[test]
    fn test_config_is_written_in_lowercase_yaml() {
        let config = Config {
            game: GameConfig {
                board_size: 3,
                difficulty: Difficulty::Hard,
                first_player: FirstPlayer::Computer,
            },
            verbose_logging: false,
        };

        let yaml = YamlConfigSerializer::new().serialize(&config).unwrap();

        assert!(yaml.contains("difficulty: hard"));
        assert!(yaml.contains("first_player: computer"));
    }

    #[test]
    fn test_config_can_be_saved_and_loaded_through_manager() {
        let config = Config {
            game: GameConfig {
                board_size: 4,
                difficulty: Difficulty::Easy,
                first_player: FirstPlayer::Computer,
            },
            verbose_logging: true,
        };
        let file_path = get_temp_file_path();
        let manager = get_config_manager(Some(&file_path));

        manager.set_config(&config).unwrap();
        assert_eq!(manager.get_config().unwrap(), config);

        let reloaded = get_config_manager(Some(&file_path));
        assert_eq!(reloaded.get_config().unwrap(), config);

        std::fs::remove_file(&file_path).ok();
    }

    #[test]
    fn test_config_file_does_not_exist_returns_default_config() {
        let manager = get_config_manager(Some("this_file_does_not_exist.yaml"));

        assert_eq!(manager.get_config().unwrap(), Config::default());
    }

    #[test]
    fn test_missing_verbose_flag_defaults_to_false() {
        let content = "game:\n  board_size: 3\n  difficulty: medium\n  first_player: human\n";
        let config: Config = YamlConfigSerializer::new().deserialize(content).unwrap();

        assert!(!config.verbose_logging);
    }

    #[test]
    fn test_invalid_config_cant_be_read() {
        let invalid_config_content = r#"
            game:
              board_size: 12
              difficulty: hard
              first_player: human
        "#;

        let file_path = get_temp_file_path();
        let content_provider = FileContentConfigProvider::new(file_path.clone());
        content_provider
            .set_config_content(invalid_config_content)
            .unwrap();

        let manager: ConfigManager<_, Config, _> =
            ConfigManager::new(content_provider, YamlConfigSerializer::new());

        assert!(matches!(manager.get_config(), Err(ConfigError::Validation(_))));

        std::fs::remove_file(&file_path).ok();
    }

    #[test]
    fn test_unknown_difficulty_cant_be_read() {
        let content = "game:\n  board_size: 3\n  difficulty: brutal\n  first_player: human\n";
        let result: Result<Config, _> = YamlConfigSerializer::new().deserialize(content);

        assert!(matches!(result, Err(ConfigError::Deserialize(_))));
    }
}
