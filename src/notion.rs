//! Notion 연동
//!
//! 페이지 하위 블록에서 이미지 블록을 골라 로컬로 내려받는다.
//! 다운로드를 전부 끝낸 뒤에 분석이 시작된다（2단계 처리）.

use crate::error::{KanjiScanError, Result};
use serde::Deserialize;
use std::path::{Path, PathBuf};

const NOTION_API_BASE: &str = "https://api.notion.com/v1";
const NOTION_VERSION: &str = "2022-06-28";

/// blocks.children.list 응답
#[derive(Deserialize)]
struct BlockChildren {
    #[serde(default)]
    results: Vec<Block>,
}

#[derive(Deserialize)]
struct Block {
    #[serde(rename = "type")]
    block_type: String,
    image: Option<ImageBlock>,
}

/// 이미지 블록 본문（외부 링크 또는 Notion 내부 파일）
#[derive(Deserialize)]
struct ImageBlock {
    #[serde(rename = "type")]
    source_type: String,
    external: Option<ImageSource>,
    file: Option<ImageSource>,
}

#[derive(Deserialize)]
struct ImageSource {
    url: String,
}

impl ImageBlock {
    /// 소스 URL 결정（external이면 외부 링크, 아니면 내부 파일）
    fn url(&self) -> Option<&str> {
        if self.source_type == "external" {
            self.external.as_ref().map(|s| s.url.as_str())
        } else {
            self.file.as_ref().map(|s| s.url.as_str())
        }
    }
}

pub struct NotionClient {
    http: reqwest::Client,
    api_key: String,
}

impl NotionClient {
    pub fn new(api_key: String) -> Self {
        Self {
            http: reqwest::Client::new(),
            api_key,
        }
    }

    /// 페이지의 모든 이미지를 내려받고 로컬 경로 목록을 돌려준다
    ///
    /// 이미지 블록이 없으면 NoImagesFound（폴더도 만들지 않음）.
    /// 파일명은 notion_image_<순번>.png 고정（원본 형식 판별・변환 없음）.
    pub async fn fetch_images(&self, page_id: &str, output_folder: &Path) -> Result<Vec<PathBuf>> {
        let urls = self.list_image_urls(page_id).await?;

        std::fs::create_dir_all(output_folder)?;

        let mut paths = Vec::new();
        for (i, url) in urls.iter().enumerate() {
            let image_path = output_folder.join(format!("notion_image_{}.png", i + 1));

            println!("다운로드 중: {}", url);
            self.download(url, &image_path).await?;
            paths.push(image_path);
        }

        println!("✔ 이미지 {}개 다운로드 완료", paths.len());
        Ok(paths)
    }

    /// 페이지 하위 블록 중 이미지 블록의 URL만 수집
    async fn list_image_urls(&self, page_id: &str) -> Result<Vec<String>> {
        let url = format!("{}/blocks/{}/children", NOTION_API_BASE, page_id);
        let response = self
            .http
            .get(&url)
            .bearer_auth(&self.api_key)
            .header("Notion-Version", NOTION_VERSION)
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(KanjiScanError::ApiCall(format!(
                "Notion 블록 조회 실패 (status {}): {}",
                status, body
            )));
        }

        let payload: BlockChildren = response.json().await?;
        image_urls(&payload, page_id)
    }

    /// URL의 바이트를 그대로 파일로 저장
    async fn download(&self, url: &str, output_path: &Path) -> Result<()> {
        let response = self.http.get(url).send().await?;
        if !response.status().is_success() {
            return Err(KanjiScanError::ApiCall(format!(
                "이미지 다운로드 실패 (status {}): {}",
                response.status(),
                url
            )));
        }

        let bytes = response.bytes().await?;
        std::fs::write(output_path, &bytes)?;
        Ok(())
    }
}

/// 블록 목록에서 이미지 블록의 URL을 목록 순서대로 추출
///
/// 이미지 블록이 하나도 없으면 NoImagesFound（폴더 생성・다운로드 전에 판정된다）.
fn image_urls(children: &BlockChildren, page_id: &str) -> Result<Vec<String>> {
    let mut urls = Vec::new();
    for block in children.results.iter().filter(|b| b.block_type == "image") {
        let url = block
            .image
            .as_ref()
            .and_then(|img| img.url())
            .ok_or_else(|| {
                KanjiScanError::ApiParse(format!("이미지 블록에 URL이 없습니다: {}", page_id))
            })?;
        urls.push(url.to_string());
    }

    if urls.is_empty() {
        return Err(KanjiScanError::NoImagesFound(page_id.to_string()));
    }

    Ok(urls)
}
