//! 오류 케이스 테스트
//!
//! 각 오류 조건의 처리와 메시지를 검증

use kanji_scan::error::KanjiScanError;
use kanji_scan::scanner;
use std::path::Path;
use tempfile::tempdir;

/// 존재하지 않는 폴더를 스캔한 경우
#[test]
fn test_scan_nonexistent_folder() {
    let result = scanner::scan_folder(Path::new("/nonexistent/path/12345"));
    assert!(result.is_err());

    let err = result.unwrap_err();
    assert!(matches!(err, KanjiScanError::AccessDenied(_)));
}

/// 빈 폴더를 스캔한 경우
#[test]
fn test_scan_empty_folder() {
    let dir = tempdir().expect("Failed to create temp dir");
    let result = scanner::scan_folder(dir.path());

    // 빈 폴더는 오류가 아니라 빈 Vec
    assert!(result.is_ok());
    assert!(result.unwrap().is_empty());
}

/// 이미지가 없는 폴더를 스캔한 경우
#[test]
fn test_scan_folder_no_images() {
    let dir = tempdir().expect("Failed to create temp dir");

    // 텍스트 파일만 생성
    std::fs::write(dir.path().join("test.txt"), "hello").unwrap();
    std::fs::write(dir.path().join("data.json"), "{}").unwrap();

    let result = scanner::scan_folder(dir.path());
    assert!(result.is_ok());
    assert!(result.unwrap().is_empty());
}

/// AccessDenied 메시지는 콘솔 출력 계약에 묶여 있다
#[test]
fn test_access_denied_message() {
    let err = KanjiScanError::AccessDenied("./images".to_string());
    let display = format!("{}", err);

    assert_eq!(display, "No write permission for directory ./images");
}

/// KanjiScanError의 Display 구현 확인
#[test]
fn test_error_display() {
    let errors = vec![
        KanjiScanError::Config("테스트 설정 오류".to_string()),
        KanjiScanError::AccessDenied("/path/to/folder".to_string()),
        KanjiScanError::NoImagesFound("페이지ID".to_string()),
        KanjiScanError::ApiCall("API 호출 실패".to_string()),
        KanjiScanError::ApiParse("해석 실패".to_string()),
    ];

    for err in errors {
        let display = format!("{}", err);
        assert!(!display.is_empty(), "오류 메시지가 비어 있음: {:?}", err);
    }
}

/// 오류의 Debug 구현 확인
#[test]
fn test_error_debug() {
    let err = KanjiScanError::Config("테스트".to_string());
    let debug = format!("{:?}", err);

    assert!(debug.contains("Config"));
    assert!(debug.contains("테스트"));
}

/// IO 오류로부터의 변환
#[test]
fn test_io_error_conversion() {
    let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
    let err: KanjiScanError = io_err.into();

    assert!(matches!(err, KanjiScanError::Io(_)));
    let display = format!("{}", err);
    assert!(display.contains("IO"));
}

/// JSON 오류로부터의 변환
#[test]
fn test_json_error_conversion() {
    let json_err = serde_json::from_str::<serde_json::Value>("{ invalid }").unwrap_err();
    let err: KanjiScanError = json_err.into();

    assert!(matches!(err, KanjiScanError::JsonParse(_)));
}
