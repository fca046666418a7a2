use std::{collections::HashMap, fs, path::Path};

use shared::domain::AppScreen;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub log_filter: String,
    pub display_old_tickets: bool,
    pub active_app_screen: AppScreen,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            log_filter: "info".into(),
            display_old_tickets: false,
            active_app_screen: AppScreen::TicketList,
        }
    }
}

/// Defaults, then the TOML file at `path` if it exists, then `APP__*` variables.
pub fn load_settings(path: &Path) -> Settings {
    let mut settings = Settings::default();

    if let Ok(raw) = fs::read_to_string(path) {
        apply_file(&mut settings, &raw);
    }
    apply_env(&mut settings, |key| std::env::var(key).ok());

    settings
}

fn apply_file(settings: &mut Settings, raw: &str) {
    let Ok(file_cfg) = toml::from_str::<HashMap<String, String>>(raw) else {
        return;
    };
    for (key, value) in &file_cfg {
        apply_value(settings, key, value);
    }
}

fn apply_env(settings: &mut Settings, lookup: impl Fn(&str) -> Option<String>) {
    for key in ["log_filter", "display_old_tickets", "active_app_screen"] {
        let env_key = format!("APP__{}", key.to_ascii_uppercase());
        if let Some(value) = lookup(&env_key) {
            apply_value(settings, key, &value);
        }
    }
}

// Values that fail to parse leave the previous layer in place.
fn apply_value(settings: &mut Settings, key: &str, value: &str) {
    match key {
        "log_filter" => {
            if !value.trim().is_empty() {
                settings.log_filter = value.trim().to_string();
            }
        }
        "display_old_tickets" => {
            if let Ok(parsed) = value.trim().parse::<bool>() {
                settings.display_old_tickets = parsed;
            }
        }
        "active_app_screen" => {
            if let Ok(parsed) = value.parse::<AppScreen>() {
                settings.active_app_screen = parsed;
            }
        }
        _ => {}
    }
}

#[cfg(test)]
#[path = "tests/config_tests.rs"]
mod tests;
