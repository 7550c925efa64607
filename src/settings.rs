use serde::{
    Deserialize,
    Serialize,
};

use crate::{
    persistence,
    segmentation::DEFAULT_SEPARATORS,
};

pub const SETTINGS_FILE: &str = "settings.json";

// Defines the cdiv/cbox layout and the f11..f48 size classes.
const DEFAULT_STYLESHEET_URL: &str = "http://web.cse.ohio-state.edu/software/2231/web-sw2/assignments/projects/tag-cloud-generator/data/tagcloud.css";

#[derive(Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub stylesheet_url: String,
    pub separators: String,
}

impl Default for Settings {
    fn default() -> Self {
        Settings {
            stylesheet_url: DEFAULT_STYLESHEET_URL.to_string(),
            separators: DEFAULT_SEPARATORS.to_string(),
        }
    }
}

impl Settings {
    /// Loads settings from the app data dir, falling back to defaults. On
    /// first run the defaults are written out so operators have a file to
    /// edit.
    pub fn load_or_default() -> Self {
        let settings: Settings = persistence::load_json_or_default(SETTINGS_FILE);

        if !persistence::data_file_exists(SETTINGS_FILE) {
            if let Err(e) = persistence::save_json(&settings, SETTINGS_FILE) {
                eprintln!("Failed to write default settings: {}", e);
            }
        }

        settings
    }
}
