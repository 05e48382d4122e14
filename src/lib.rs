//! kanji-scan
//!
//! 한자 학습 카드 이미지를 Gemini로 분석해 구조화된 JSON으로 변환하는 CLI.
//! 이미지는 로컬 폴더 또는 Notion 페이지에서 가져온다.

pub mod analyzer;
pub mod cli;
pub mod config;
pub mod error;
pub mod notion;
pub mod output;
pub mod scanner;

pub use analyzer::{GeminiClient, KanjiEntry};
pub use config::Config;
pub use error::{KanjiScanError, Result};
pub use notion::NotionClient;
