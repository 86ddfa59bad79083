// File: crates/feature-chart/src/config.rs
// Summary: JSON render configuration; created with defaults on first use.

use std::path::{Path, PathBuf};

use chart_core::theme;
use chart_core::types::{HEIGHT, WIDTH};
use log::info;
use serde::{Deserialize, Serialize};

use crate::error::InputError;
use crate::page::{Page, PageSettings};
use crate::renderer::FEATURE_CHART_ELEMENT_ID;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderConfig {
    /// Size of the `featureChart` element, in CSS pixels.
    pub width: i32,
    pub height: i32,
    /// Theme preset name: `dark`, `light` or `high-contrast-dark`.
    pub theme: String,
    pub output_dir: PathBuf,
    pub device_pixel_ratio: f32,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            width: WIDTH,
            height: HEIGHT,
            theme: "dark".to_string(),
            output_dir: PathBuf::from("target/out"),
            device_pixel_ratio: 1.0,
        }
    }
}

impl RenderConfig {
    /// Read the config at `path`, or write the defaults there if it does not exist yet.
    pub fn load_or_init(path: impl AsRef<Path>) -> Result<Self, InputError> {
        let path = path.as_ref();
        if path.exists() {
            let text = std::fs::read_to_string(path).map_err(InputError::io(path))?;
            return Ok(serde_json::from_str(&text)?);
        }
        let config = Self::default();
        config.save(path)?;
        info!("wrote default render config to {}", path.display());
        Ok(config)
    }

    pub fn save(&self, path: impl AsRef<Path>) -> Result<(), InputError> {
        let path = path.as_ref();
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent).map_err(InputError::io(parent))?;
        }
        let text = serde_json::to_string_pretty(self)?;
        std::fs::write(path, text).map_err(InputError::io(path))
    }

    pub fn page_settings(&self) -> PageSettings {
        PageSettings {
            theme: theme::find(&self.theme),
            device_pixel_ratio: self.device_pixel_ratio,
            ..PageSettings::default()
        }
    }

    /// A page holding just the `featureChart` element at the configured size.
    pub fn page(&self) -> Page {
        Page::with_settings(self.page_settings()).with_element(FEATURE_CHART_ELEMENT_ID, self.width, self.height)
    }

    pub fn output_path(&self) -> PathBuf {
        self.output_dir.join(format!("{FEATURE_CHART_ELEMENT_ID}.png"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_load_writes_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("configs/config.json");

        let cfg = RenderConfig::load_or_init(&path).unwrap();
        assert_eq!(cfg, RenderConfig::default());
        assert!(path.exists());

        let again = RenderConfig::load_or_init(&path).unwrap();
        assert_eq!(again, cfg);
    }

    #[test]
    fn partial_file_keeps_defaults_for_missing_keys() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");
        std::fs::write(&path, r#"{"width": 300, "theme": "light"}"#).unwrap();

        let cfg = RenderConfig::load_or_init(&path).unwrap();
        assert_eq!(cfg.width, 300);
        assert_eq!(cfg.height, HEIGHT);
        assert_eq!(cfg.page_settings().theme.name, "light");
    }

    #[test]
    fn page_has_feature_element_at_configured_size() {
        let cfg = RenderConfig { width: 320, height: 200, ..RenderConfig::default() };
        let page = cfg.page();
        let el = page.element(FEATURE_CHART_ELEMENT_ID).unwrap();
        assert_eq!((el.width(), el.height()), (320, 200));
        assert_eq!(cfg.output_path(), PathBuf::from("target/out/featureChart.png"));
    }

    #[test]
    fn broken_json_is_reported() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");
        std::fs::write(&path, "{ not json").unwrap();
        assert!(matches!(RenderConfig::load_or_init(&path), Err(InputError::Json(_))));
    }
}
