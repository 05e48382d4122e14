//! 결과 저장
//!
//! 성공한 분석 결과를 sortedkanji-<타임스탬프>.json 배열로 저장한다

use crate::analyzer::KanjiEntry;
use crate::error::Result;
use chrono::{DateTime, Utc};
use std::path::{Path, PathBuf};

/// 출력 파일명용 타임스탬프（UTC, YYYYMMDDHHMMSS）
pub fn batch_timestamp(time: DateTime<Utc>) -> String {
    time.format("%Y%m%d%H%M%S").to_string()
}

/// 결과를 JSON 배열로 저장하고 절대 경로를 돌려준다
///
/// 타임스탬프는 배치 시작 시각 기준（처리 시간이 길어도 파일명은 고정）.
/// 성공 결과가 하나도 없으면 파일을 만들지 않는다.
pub fn write_results(
    results: &[KanjiEntry],
    folder: &Path,
    started_at: DateTime<Utc>,
) -> Result<Option<PathBuf>> {
    if results.is_empty() {
        println!("저장할 결과가 없습니다.");
        return Ok(None);
    }

    let file_name = format!("sortedkanji-{}.json", batch_timestamp(started_at));
    let output_path = folder.join(&file_name);

    let json = serde_json::to_string_pretty(results)?;
    std::fs::write(&output_path, json)?;

    let absolute = std::fs::canonicalize(&output_path)?;
    println!("Results saved to {}", absolute.display());

    Ok(Some(absolute))
}
