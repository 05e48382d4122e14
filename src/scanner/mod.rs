use crate::error::{KanjiScanError, Result};
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// 분석 대상 확장자（대소문자 무시）
const IMAGE_EXTENSIONS: &[&str] = &["png", "jpg", "jpeg", "gif", "bmp", "webp"];

/// 원격 모드가 내려받은 파일의 접두사. 로컬 스캔에서는 제외한다
const NOTION_DOWNLOAD_PREFIX: &str = "notion_image";

/// 폴더 직하의 이미지 파일을 파일명 순으로 나열한다
///
/// 결과 JSON을 같은 폴더에 저장하므로 먼저 쓰기 권한을 확인한다.
/// 쓸 수 없는（또는 없는）폴더는 AccessDenied.
pub fn scan_folder(folder: &Path) -> Result<Vec<PathBuf>> {
    check_writable(folder)?;

    let mut images = Vec::new();

    for entry in WalkDir::new(folder)
        .max_depth(1)  // 직하만（재귀하지 않음）
        .into_iter()
        .filter_map(|e| e.ok())
    {
        let path = entry.path();

        if !path.is_file() {
            continue;
        }

        let file_name = entry.file_name().to_string_lossy();
        if file_name.starts_with(NOTION_DOWNLOAD_PREFIX) {
            continue;
        }

        if let Some(ext) = path.extension() {
            if is_image_extension(&ext.to_string_lossy()) {
                images.push(path.to_path_buf());
            }
        }
    }

    // 파일명으로 정렬
    images.sort_by(|a, b| a.file_name().cmp(&b.file_name()));

    Ok(images)
}

fn is_image_extension(ext: &str) -> bool {
    IMAGE_EXTENSIONS.contains(&ext.to_lowercase().as_str())
}

/// 쓰기 권한 확인（임시 파일 생성으로 검사）
fn check_writable(folder: &Path) -> Result<()> {
    tempfile::tempfile_in(folder)
        .map(|_| ())
        .map_err(|_| KanjiScanError::AccessDenied(folder.display().to_string()))
}
