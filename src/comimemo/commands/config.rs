use crate::commands::{CmdMessage, CmdResult};
use crate::config::ComimemoConfig;
use crate::error::Result;
use std::path::Path;
use tracing::info;

#[derive(Debug, Clone)]
pub enum ConfigAction {
    ShowAll,
    ShowKey(String),
    Set(String, String),
}

pub fn run(config_dir: &Path, action: ConfigAction) -> Result<CmdResult> {
    match action {
        ConfigAction::ShowAll => {
            let config = ComimemoConfig::load(config_dir)?;
            Ok(CmdResult::default().with_config(config))
        }
        ConfigAction::ShowKey(key) => {
            let config = ComimemoConfig::load(config_dir)?;
            let mut result = CmdResult::default();
            match config.get(&key) {
                Ok(value) => result.add_message(CmdMessage::info(value)),
                Err(e) => result.add_message(CmdMessage::error(e.to_string())),
            }
            Ok(result)
        }
        ConfigAction::Set(key, value) => {
            let mut config = ComimemoConfig::load(config_dir)?;
            if let Err(e) = config.set(&key, &value) {
                let mut result = CmdResult::default();
                result.add_message(CmdMessage::error(e.to_string()));
                return Ok(result);
            }
            config.save(config_dir)?;
            info!(%key, %value, "config updated");

            let display_value = config.get(&key).unwrap_or(value);
            let mut result = CmdResult::default().with_config(config);
            result.add_message(CmdMessage::success(format!(
                "{} set to {}",
                key, display_value
            )));
            Ok(result)
        }
    }
}
