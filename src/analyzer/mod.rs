mod gemini;
mod parser;
mod prompts;

pub use gemini::GeminiClient;
pub use parser::{inject_image_path, normalize_response, parse_analysis_response, KanjiEntry};
pub use prompts::{build_analysis_prompt, IMAGE_ANALYSIS_CONDITIONS};

use crate::error::Result;
use std::future::Future;
use std::path::PathBuf;

/// 이미지를 순서대로 1장씩 분석한다
///
/// 실패한 항목은 로그만 남기고 건너뛴다（배치 전체를 중단하지 않음）.
/// 성공한 결과만 입력 순서대로 모아서 돌려준다.
pub async fn analyze_images(
    images: &[PathBuf],
    client: &GeminiClient,
    max_retries: u32,
    verbose: bool,
) -> Vec<KanjiEntry> {
    analyze_each(images, |path| {
        client.analyze_with_retry(path, max_retries, verbose)
    })
    .await
}

/// 항목별 처리를 배치 전체에 돌리는 순차 루프
///
/// 항목 실패는 건너뛸 뿐 루프를 중단하지 않는다. 끝에 실패 건수를 보고한다.
async fn analyze_each<'a, F, Fut>(images: &'a [PathBuf], mut analyze: F) -> Vec<KanjiEntry>
where
    F: FnMut(&'a PathBuf) -> Fut,
    Fut: Future<Output = Result<KanjiEntry>>,
{
    let total = images.len();
    let mut results = Vec::new();
    let mut failed = 0usize;

    for (i, path) in images.iter().enumerate() {
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().to_string())
            .unwrap_or_else(|| path.display().to_string());
        println!("[{}/{}] 분석 중: {}", i + 1, total, name);

        match analyze(path).await {
            Ok(entry) => {
                println!("  ✔ 완료");
                results.push(entry);
            }
            Err(e) => {
                println!("  ✗ 분석 실패, 건너뜀: {}", e);
                failed += 1;
            }
        }
    }

    if failed > 0 {
        println!("✗ 실패 {}건 / 성공 {}건", failed, results.len());
    }

    results
}
