//! Gemini API 연동
//!
//! 이미지 1장 처리 흐름:
//! 1. Files API 업로드（resumable 프로토콜）
//! 2. 업로드 참조 + 고정 지시문으로 generateContent 호출
//! 3. 응답 펜스 제거・JSON 해석 후 imagePath 주입
//!
//! 실패하면 지수 백오프（5^시도 횟수 초）로 재시도한다.

use serde::{Deserialize, Serialize};
use std::future::Future;
use std::path::Path;
use std::time::Duration;

use crate::error::{KanjiScanError, Result};

use super::parser::{inject_image_path, parse_analysis_response, KanjiEntry};
use super::prompts::build_analysis_prompt;

const GEMINI_API_BASE: &str = "https://generativelanguage.googleapis.com";

/// Gemini API 요청
#[derive(Serialize)]
struct GeminiRequest {
    contents: Vec<Content>,
}

#[derive(Serialize)]
struct Content {
    parts: Vec<Part>,
}

#[derive(Serialize)]
#[serde(untagged)]
enum Part {
    Text { text: String },
    FileData { file_data: FileData },
}

#[derive(Serialize)]
struct FileData {
    mime_type: String,
    file_uri: String,
}

/// Gemini API 응답
#[derive(Deserialize)]
struct GeminiResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Deserialize)]
struct Candidate {
    content: ResponseContent,
}

#[derive(Deserialize)]
struct ResponseContent {
    #[serde(default)]
    parts: Vec<ResponsePart>,
}

#[derive(Deserialize)]
struct ResponsePart {
    #[serde(default)]
    text: String,
}

/// Files API 업로드 응답
#[derive(Deserialize)]
struct UploadResponse {
    file: UploadedFile,
}

/// 업로드된 파일 핸들
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct UploadedFile {
    uri: String,
    mime_type: String,
}

pub struct GeminiClient {
    http: reqwest::Client,
    api_key: String,
    model: String,
}

impl GeminiClient {
    pub fn new(api_key: String, model: String) -> Self {
        Self {
            http: reqwest::Client::new(),
            api_key,
            model,
        }
    }

    /// 이미지 1장을 업로드하고 분석（1회 시도）
    pub async fn analyze_image(&self, image_path: &Path, verbose: bool) -> Result<KanjiEntry> {
        let file = self.upload_file(image_path, verbose).await?;
        let text = self.generate(&file, verbose).await?;

        let mut entry = parse_analysis_response(&text)?;
        inject_image_path(&mut entry, image_path)?;
        Ok(entry)
    }

    /// 재시도 포함 분석
    ///
    /// 모든 시도가 실패하면 마지막 오류를 그대로 돌려준다.
    pub async fn analyze_with_retry(
        &self,
        image_path: &Path,
        max_retries: u32,
        verbose: bool,
    ) -> Result<KanjiEntry> {
        retry_with_backoff(max_retries, || self.analyze_image(image_path, verbose)).await
    }

    /// Files API 업로드（start → upload, finalize 2단계）
    async fn upload_file(&self, image_path: &Path, verbose: bool) -> Result<UploadedFile> {
        let bytes = std::fs::read(image_path)?;
        let mime_type = mime_type_for(image_path);
        let display_name = image_path
            .file_name()
            .map(|n| n.to_string_lossy().to_string())
            .unwrap_or_default();

        if verbose {
            println!("  이미지 크기: {}KB ({})", bytes.len() / 1024, mime_type);
        }

        // 업로드 세션 시작
        let start_url = format!("{}/upload/v1beta/files?key={}", GEMINI_API_BASE, self.api_key);
        let response = self
            .http
            .post(&start_url)
            .header("X-Goog-Upload-Protocol", "resumable")
            .header("X-Goog-Upload-Command", "start")
            .header("X-Goog-Upload-Header-Content-Length", bytes.len().to_string())
            .header("X-Goog-Upload-Header-Content-Type", mime_type)
            .json(&serde_json::json!({ "file": { "display_name": display_name } }))
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(api_error("업로드 시작", response).await);
        }

        let upload_url = response
            .headers()
            .get("x-goog-upload-url")
            .and_then(|v| v.to_str().ok())
            .ok_or_else(|| KanjiScanError::ApiCall("업로드 URL이 응답에 없습니다".into()))?
            .to_string();

        // 본문 전송 + 완료
        let response = self
            .http
            .post(&upload_url)
            .header("X-Goog-Upload-Offset", "0")
            .header("X-Goog-Upload-Command", "upload, finalize")
            .body(bytes)
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(api_error("업로드", response).await);
        }

        let payload: UploadResponse = response.json().await?;
        Ok(payload.file)
    }

    /// generateContent 호출 → 응답 텍스트
    async fn generate(&self, file: &UploadedFile, verbose: bool) -> Result<String> {
        let url = format!(
            "{}/v1beta/models/{}:generateContent?key={}",
            GEMINI_API_BASE, self.model, self.api_key
        );

        let request = GeminiRequest {
            contents: vec![Content {
                parts: vec![
                    Part::Text {
                        text: build_analysis_prompt(),
                    },
                    Part::FileData {
                        file_data: FileData {
                            mime_type: file.mime_type.clone(),
                            file_uri: file.uri.clone(),
                        },
                    },
                ],
            }],
        };

        let response = self.http.post(&url).json(&request).send().await?;
        if !response.status().is_success() {
            return Err(api_error("generateContent", response).await);
        }

        let payload: GeminiResponse = response.json().await?;
        let text = response_text(&payload)
            .ok_or_else(|| KanjiScanError::ApiCall("응답이 비어 있습니다".into()))?;

        if verbose {
            let preview: String = text.chars().take(500).collect();
            println!("  응답: {}", preview);
        }

        Ok(text)
    }
}

/// 첫 번째 후보의 텍스트 파트를 이어 붙인다
fn response_text(response: &GeminiResponse) -> Option<String> {
    let text: String = response
        .candidates
        .first()?
        .content
        .parts
        .iter()
        .map(|p| p.text.as_str())
        .collect();

    (!text.is_empty()).then_some(text)
}

/// 실패 응답을 ApiCall 오류로 변환
async fn api_error(phase: &str, response: reqwest::Response) -> KanjiScanError {
    let status = response.status();
    let body = response.text().await.unwrap_or_default();
    KanjiScanError::ApiCall(format!("{} 실패 (status {}): {}", phase, status, body))
}

/// 확장자에서 MIME 타입 결정
fn mime_type_for(path: &Path) -> &'static str {
    match path
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_lowercase())
        .as_deref()
    {
        Some("jpg") | Some("jpeg") => "image/jpeg",
        Some("gif") => "image/gif",
        Some("bmp") => "image/bmp",
        Some("webp") => "image/webp",
        _ => "image/png",
    }
}

/// k번째 시도 실패 후 대기 시간: 5^k * 1000 밀리초
fn backoff_delay(attempt: u32) -> Duration {
    Duration::from_millis(5u64.pow(attempt) * 1000)
}

/// 실패 시 지수 백오프로 재시도하는 실행 루프
///
/// 시도 횟수가 남아 있을 때만 대기 후 재시도하고,
/// 소진되면 마지막 오류를 돌려준다.
async fn retry_with_backoff<T, F, Fut>(max_retries: u32, mut op: F) -> Result<T>
where
    F: FnMut() -> Fut,
    Fut: Future<Output = Result<T>>,
{
    let mut attempt = 1u32;
    loop {
        println!("  시도 {}/{}...", attempt, max_retries);
        match op().await {
            Ok(value) => return Ok(value),
            Err(e) if attempt < max_retries => {
                let delay = backoff_delay(attempt);
                println!("  ✗ 실패: {} ({}초 후 재시도)", e, delay.as_secs());
                tokio::time::sleep(delay).await;
                attempt += 1;
            }
            Err(e) => return Err(e),
        }
    }
}
