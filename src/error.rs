use thiserror::Error;

#[derive(Error, Debug)]
pub enum KanjiScanError {
    #[error("설정 오류: {0}")]
    Config(String),

    #[error("No write permission for directory {0}")]
    AccessDenied(String),

    #[error("이미지가 없습니다: {0}")]
    NoImagesFound(String),

    #[error("API 호출 오류: {0}")]
    ApiCall(String),

    #[error("API 응답 해석 실패: {0}")]
    ApiParse(String),

    #[error("JSON 해석 오류: {0}")]
    JsonParse(#[from] serde_json::Error),

    #[error("HTTP 오류: {0}")]
    Http(#[from] reqwest::Error),

    #[error("IO 오류: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, KanjiScanError>;
