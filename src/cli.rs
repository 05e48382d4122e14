use clap::Parser;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "kanji-scan")]
#[command(about = "한자 카드 이미지 AI 분석・JSON 변환 도구", long_about = None)]
#[command(arg_required_else_help = true)]
pub struct Cli {
    /// Notion 페이지 ID（지정 시 페이지의 이미지를 내려받아 분석）
    #[arg(long, value_name = "PAGE_ID")]
    pub notion: Option<String>,

    /// 로컬 모드: 이미지 폴더（기본값: ./images）／Notion 모드: 다운로드 폴더
    pub path: Option<PathBuf>,

    /// 상세 로그를 출력
    #[arg(short, long)]
    pub verbose: bool,
}
