use chrono::{DateTime, Utc};
use clap::Parser;
use kanji_scan::{analyzer, cli, config, error, notion, output, scanner};

use analyzer::GeminiClient;
use cli::Cli;
use config::Config;
use error::{KanjiScanError, Result};
use notion::NotionClient;
use std::path::PathBuf;

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    if let Err(e) = run(cli).await {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> Result<()> {
    let config = Config::load()?;
    let started_at = Utc::now();

    if let Some(page_id) = &cli.notion {
        // Notion 모드: 처리 오류는 배치만 중단（프로세스는 정상 종료）
        if let Err(e) = run_notion(&cli, &config, page_id, started_at).await {
            match e {
                KanjiScanError::NoImagesFound(_) => println!("페이지에 이미지가 없습니다."),
                e => eprintln!("노션 페이지 처리 중 오류 발생: {}", e),
            }
        }
        return Ok(());
    }

    run_folder(&cli, &config, started_at).await
}

/// Notion 페이지의 이미지를 내려받아 분석한다
async fn run_notion(
    cli: &Cli,
    config: &Config,
    page_id: &str,
    started_at: DateTime<Utc>,
) -> Result<()> {
    println!("📚 kanji-scan - Notion 페이지 분석\n");

    let output_folder = cli.path.clone().unwrap_or_else(|| {
        PathBuf::from(format!("notion_images_{}", output::batch_timestamp(started_at)))
    });

    // 1. 이미지 다운로드（전부 받은 뒤에 분석 시작）
    println!("[1/3] 이미지 다운로드 중...");
    let notion = NotionClient::new(config.notion_api_key());
    let images = notion.fetch_images(page_id, &output_folder).await?;
    println!();

    // 2. Gemini 분석
    println!("[2/3] AI 분석 중...");
    let client = GeminiClient::new(config.gemini_api_key(), config.model.clone());
    let results = analyzer::analyze_images(&images, &client, config.max_retries, cli.verbose).await;
    println!();

    // 3. 결과 저장
    println!("[3/3] 결과 저장 중...");
    output::write_results(&results, &output_folder, started_at)?;
    println!("Processed {} images from Notion page.", images.len());

    Ok(())
}

/// 로컬 폴더의 이미지를 분석한다
async fn run_folder(cli: &Cli, config: &Config, started_at: DateTime<Utc>) -> Result<()> {
    let folder = cli.path.clone().unwrap_or_else(|| PathBuf::from("./images"));

    println!("📚 kanji-scan - 폴더 이미지 분석\n");

    // 1. 이미지 스캔（쓰기 권한 확인 포함）
    println!("[1/3] 이미지 스캔 중...");
    let images = scanner::scan_folder(&folder)?;
    println!("✔ 이미지 {}개 발견\n", images.len());

    // 2. Gemini 분석
    println!("[2/3] AI 분석 중...");
    let client = GeminiClient::new(config.gemini_api_key(), config.model.clone());
    let results = analyzer::analyze_images(&images, &client, config.max_retries, cli.verbose).await;
    println!();

    // 3. 결과 저장
    println!("[3/3] 결과 저장 중...");
    output::write_results(&results, &folder, started_at)?;
    println!("Processed {} images.", images.len());

    Ok(())
}
