//! 응답 정규화・해석 테스트
//!
//! 코드 펜스 제거의 정확한 경계 조건과 imagePath 주입을 검증

use kanji_scan::analyzer::{inject_image_path, normalize_response, parse_analysis_response};
use std::path::Path;
use tempfile::tempdir;

/// json 태그 펜스: 앞 7글자・뒤 3글자만 제거된다
#[test]
fn test_json_fence_strips_exact_markers() {
    let body = "\n{\"日\": {\"on\": [\"ニチ\"]}}\n";
    let fenced = format!("```json{}```", body);

    assert_eq!(normalize_response(&fenced), body);
}

/// 태그 없는 펜스: 앞뒤 3글자만 제거된다
#[test]
fn test_bare_fence_strips_exact_markers() {
    let body = "\n{\"月\": {}}\n";
    let fenced = format!("```{}```", body);

    assert_eq!(normalize_response(&fenced), body);
}

/// 펜스가 없으면 바이트 그대로 통과한다（trim 없음）
#[test]
fn test_unfenced_passthrough_is_byte_exact() {
    let inputs = [
        "{\"日\": {}}",
        "  {\"日\": {}}  ",
        "{\"日\": {}}\n",
        "본문에 ```json 이 들어간 일반 텍스트",
    ];

    for input in inputs {
        assert_eq!(normalize_response(input), input);
    }
}

/// 펜스 밖에 공백이 있으면 감싸진 것으로 보지 않는다
#[test]
fn test_fence_with_outer_whitespace_passthrough() {
    let leading = " ```json\n{}\n```";
    let trailing = "```json\n{}\n```\n";

    assert_eq!(normalize_response(leading), leading);
    assert_eq!(normalize_response(trailing), trailing);
}

/// 펜스를 벗긴 결과가 그대로 해석된다
#[test]
fn test_parse_fenced_response() {
    let response = "```json\n{\"語\": {\"kunon\": [\"말씀 어\"], \"on\": [\"ゴ\"]}}\n```";

    let entry = parse_analysis_response(response).unwrap();
    assert!(entry.contains_key("語"));
    assert_eq!(entry["語"]["kunon"][0], "말씀 어");
}

/// 해석 결과에 imagePath가 절대 경로로 주입된다
#[test]
fn test_inject_image_path_absolute() {
    let dir = tempdir().expect("Failed to create temp dir");
    let image = dir.path().join("card.png");
    std::fs::write(&image, b"dummy").unwrap();

    let mut entry = parse_analysis_response("{\"語\": {\"on\": [\"ゴ\"]}}").unwrap();
    inject_image_path(&mut entry, &image).unwrap();

    let injected = entry["imagePath"].as_str().unwrap();
    assert!(Path::new(injected).is_absolute());
    assert!(injected.ends_with("card.png"));
}

/// imagePath는 응답의 키 뒤에 붙는다（응답 키 순서는 유지）
#[test]
fn test_inject_image_path_preserves_response_key_order() {
    let dir = tempdir().expect("Failed to create temp dir");
    let image = dir.path().join("card.png");
    std::fs::write(&image, b"dummy").unwrap();

    let mut entry =
        parse_analysis_response("{\"語\": {}, \"보조키\": 1}").unwrap();
    inject_image_path(&mut entry, &image).unwrap();

    let keys: Vec<&String> = entry.keys().collect();
    assert_eq!(keys, ["語", "보조키", "imagePath"]);
}

/// 해석 불가능한 응답은 오류（재시도 대상）
#[test]
fn test_unparseable_response_is_error() {
    assert!(parse_analysis_response("이미지를 읽을 수 없습니다.").is_err());
    assert!(parse_analysis_response("```json\n이것은 JSON이 아님\n```").is_err());
    assert!(parse_analysis_response("[1, 2, 3]").is_err());
}
