//! 응답 파서
//!
//! Gemini 응답 텍스트에서 코드 펜스를 벗겨 내고
//! 한자 카드 JSON으로 해석한다

use crate::error::{KanjiScanError, Result};
use serde_json::{Map, Value};
use std::path::Path;

/// 한자 1자 분석 결과
///
/// 응답 JSON의 최상위 객체를 그대로 담는다（키 순서 유지）.
/// 내부 구조는 검증하지 않으며, imagePath 키는 저장 직전에 주입된다.
pub type KanjiEntry = Map<String, Value>;

/// 응답 텍스트에서 코드 펜스 제거
///
/// 정확히 펜스로 감싸진 경우에만 양끝 마커를 제거한다:
/// 1. json 태그 펜스로 시작하고 펜스로 끝나는 경우
/// 2. 태그 없는 펜스로 시작하고 펜스로 끝나는 경우
/// 3. 그 외에는 원문을 바이트 그대로 돌려준다（trim 없음）
///
/// # Arguments
/// * `text` - Gemini 응답 텍스트
///
/// # Returns
/// 펜스가 제거된（또는 원문 그대로의）문자열 슬라이스
///
/// # Examples
/// ```
/// use kanji_scan::analyzer::normalize_response;
///
/// let response = "```json\n{\"한\": {}}\n```";
/// assert_eq!(normalize_response(response), "\n{\"한\": {}}\n");
///
/// let plain = "{\"한\": {}}";
/// assert_eq!(normalize_response(plain), plain);
/// ```
pub fn normalize_response(text: &str) -> &str {
    if let Some(inner) = text.strip_prefix("```json").and_then(|t| t.strip_suffix("```")) {
        return inner;
    }
    if let Some(inner) = text.strip_prefix("```").and_then(|t| t.strip_suffix("```")) {
        return inner;
    }
    text
}

/// 응답 텍스트를 KanjiEntry로 해석
///
/// 펜스 제거 후 JSON 객체로 해석한다. 객체가 아닌 JSON（배열 등）은 오류.
///
/// # Arguments
/// * `text` - Gemini 응답 텍스트
///
/// # Returns
/// * `Ok(KanjiEntry)` - 해석 성공
/// * `Err` - JSON이 아니거나 최상위가 객체가 아닌 경우
pub fn parse_analysis_response(text: &str) -> Result<KanjiEntry> {
    let normalized = normalize_response(text);
    let entry: KanjiEntry = serde_json::from_str(normalized)
        .map_err(|e| KanjiScanError::ApiParse(format!("응답 JSON 해석 실패: {}", e)))?;
    Ok(entry)
}

/// 분석 결과에 이미지 절대 경로를 주입
///
/// imagePath 키를 마지막에 추가한다（기존 키 순서는 그대로）.
pub fn inject_image_path(entry: &mut KanjiEntry, image_path: &Path) -> Result<()> {
    let absolute = std::fs::canonicalize(image_path)?;
    entry.insert(
        "imagePath".to_string(),
        Value::String(absolute.display().to_string()),
    );
    Ok(())
}
