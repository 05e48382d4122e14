use crate::error::{KanjiScanError, Result};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub gemini_api_key: Option<String>,
    pub notion_api_key: Option<String>,
    pub model: String,
    pub max_retries: u32,
}

impl Config {
    pub fn load() -> Result<Self> {
        let config_path = Self::config_path()?;

        if config_path.exists() {
            let content = std::fs::read_to_string(&config_path)?;
            let config: Config = serde_json::from_str(&content)?;
            Ok(config)
        } else {
            Ok(Self::default_config())
        }
    }

    pub fn config_path() -> Result<PathBuf> {
        let home = dirs::home_dir()
            .ok_or_else(|| KanjiScanError::Config("홈 디렉터리를 찾을 수 없습니다".into()))?;
        Ok(home.join(".config").join("kanji-scan").join("config.json"))
    }

    fn default_config() -> Self {
        Self {
            gemini_api_key: None,
            notion_api_key: None,
            model: "gemini-2.0-flash".into(),
            max_retries: 5,
        }
    }

    /// Gemini API 키（환경 변수 우선, 없으면 빈 문자열 → API 호출 단계에서 실패）
    pub fn gemini_api_key(&self) -> String {
        std::env::var("GEMINI_API_KEY")
            .ok()
            .or_else(|| self.gemini_api_key.clone())
            .unwrap_or_default()
    }

    /// Notion API 키（환경 변수 우선）
    pub fn notion_api_key(&self) -> String {
        std::env::var("NOTION_API_KEY")
            .ok()
            .or_else(|| self.notion_api_key.clone())
            .unwrap_or_default()
    }
}
