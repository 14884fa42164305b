use ratatui::style::Color as RatColor;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub enum Language {
    English,
    Spanish,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    pub language: Language,
    pub tick_rate_ms: u64,
    pub auto_save: bool,

    pub api_base_url: String,
    pub fallback_country: String,
    pub cookie_file: PathBuf,

    pub enable_logging: bool,

    pub theme: Theme,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Theme {
    pub background: ColorTuple,
    pub text: ColorTuple,
    pub highlight: ColorTuple,
    pub accent: ColorTuple,
    pub border: ColorTuple,
    pub warning: ColorTuple,
    pub critical: ColorTuple,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ColorTuple {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl ColorTuple {
    pub fn to_color(&self) -> RatColor {
        RatColor::Rgb(self.r, self.g, self.b)
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            background: ColorTuple {
                r: 10,
                g: 10,
                b: 15,
            },
            text: ColorTuple {
                r: 220,
                g: 220,
                b: 230,
            },
            highlight: ColorTuple {
                r: 59,
                g: 91,
                b: 255,
            },
            accent: ColorTuple {
                r: 0,
                g: 200,
                b: 120,
            },
            border: ColorTuple {
                r: 60,
                g: 70,
                b: 90,
            },
            warning: ColorTuple {
                r: 255,
                g: 220,
                b: 50,
            },
            critical: ColorTuple {
                r: 255,
                g: 50,
                b: 50,
            },
        }
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            language: Language::Spanish,
            tick_rate_ms: 16,
            auto_save: true,

            api_base_url: "http://127.0.0.1:8000".to_string(),
            fallback_country: "Spain".to_string(),
            cookie_file: PathBuf::from("./cookies.txt"),

            enable_logging: false,

            theme: Theme::default(),
        }
    }
}

impl AppConfig {
    pub fn load() -> Result<Self, anyhow::Error> {
        let config_path = PathBuf::from("./config.json");

        if config_path.exists() {
            let content = fs::read_to_string(&config_path)?;
            Ok(serde_json::from_str(&content)?)
        } else {
            let config = Self::default();
            config.save()?;
            Ok(config)
        }
    }

    pub fn save(&self) -> Result<(), anyhow::Error> {
        let config_path = PathBuf::from("./config.json");
        let content = serde_json::to_string_pretty(self)?;
        fs::write(config_path, content)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = AppConfig::default();
        assert_eq!(config.language, Language::Spanish);
        assert_eq!(config.api_base_url, "http://127.0.0.1:8000");
        assert_eq!(config.fallback_country, "Spain");
        assert_eq!(config.cookie_file, PathBuf::from("./cookies.txt"));
        assert!(config.auto_save);
        assert!(!config.enable_logging);
    }

    #[test]
    fn test_config_json_roundtrip() {
        let config = AppConfig::default();
        let json = serde_json::to_string_pretty(&config).unwrap();
        let back: AppConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(back.language, config.language);
        assert_eq!(back.fallback_country, config.fallback_country);
        assert_eq!(back.api_base_url, config.api_base_url);
    }

    #[test]
    fn test_theme_color_conversion() {
        let tuple = ColorTuple {
            r: 59,
            g: 91,
            b: 255,
        };
        assert_eq!(tuple.to_color(), RatColor::Rgb(59, 91, 255));
    }
}
