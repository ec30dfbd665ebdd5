use crate::commands::{CmdMessage, CmdResult, ContactsPaths};
use crate::config::{ContactsConfig, unknown_key_message};
use crate::error::Result;

#[derive(Debug, Clone)]
pub enum ConfigAction {
    ShowAll,
    ShowKey(String),
    Set(String, String),
}

pub fn run(paths: &ContactsPaths, action: ConfigAction) -> Result<CmdResult> {
    let dir = &paths.home;
    match action {
        ConfigAction::ShowAll => {
            let config = ContactsConfig::load(dir)?;
            Ok(CmdResult::default().with_config(config))
        }
        ConfigAction::ShowKey(key) => {
            let config = ContactsConfig::load(dir)?;
            let message = match config.get(&key) {
                Some(val) => CmdMessage::info(val),
                None => CmdMessage::error(unknown_key_message(&key)),
            };
            Ok(CmdResult::default().with_message(message))
        }
        ConfigAction::Set(key, value) => {
            let mut config = ContactsConfig::load(dir)?;
            if let Err(e) = config.set(&key, &value) {
                return Ok(CmdResult::default().with_message(CmdMessage::error(e.to_string())));
            }
            config.save(dir)?;
            let display_val = config.get(&key).unwrap_or_else(|| value.clone());
            Ok(CmdResult::default()
                .with_config(config)
                .with_message(CmdMessage::success(format!("{} set to {}", key, display_val))))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::MessageLevel;

    #[test]
    fn set_then_show() {
        let temp = tempfile::tempdir().unwrap();
        let paths = ContactsPaths::new(temp.path());

        let set = run(
            &paths,
            ConfigAction::Set("birthday-window-days".into(), "3".into()),
        )
        .unwrap();
        assert_eq!(set.messages[0].content, "birthday-window-days set to 3");

        let shown = run(&paths, ConfigAction::ShowKey("birthday-window-days".into())).unwrap();
        assert_eq!(shown.messages[0].content, "3");

        let all = run(&paths, ConfigAction::ShowAll).unwrap();
        assert_eq!(all.config.unwrap().birthday_window_days, 3);
    }

    #[test]
    fn unknown_key_is_reported() {
        let temp = tempfile::tempdir().unwrap();
        let paths = ContactsPaths::new(temp.path());

        let shown = run(&paths, ConfigAction::ShowKey("colour".into())).unwrap();
        assert_eq!(shown.messages[0].level, MessageLevel::Error);
        assert!(shown.messages[0].content.contains("data-file, birthday-window-days"));

        let set = run(&paths, ConfigAction::Set("colour".into(), "red".into())).unwrap();
        assert_eq!(set.messages[0].level, MessageLevel::Error);
        assert!(!temp.path().join("config.json").exists());
    }
}
