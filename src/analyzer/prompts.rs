//! 분석 지시문 모듈
//!
//! Gemini에 보내는 고정 지시문:
//! - IMAGE_ANALYSIS_CONDITIONS: 이미지 분석 조건（순서 고정）
//! - build_analysis_prompt: 조건을 하나의 프롬프트로 결합

/// 이미지 분석 조건
///
/// 결과 JSON의 키 구조（kunon/on/kun/bushu/onExamples/kunExamples）는
/// 마지막 조건의 형식 지정에 의존한다. 문구・순서를 바꾸면 출력 호환성이 깨진다.
pub const IMAGE_ANALYSIS_CONDITIONS: &[&str] = &[
    "첨부한 이미지를 정리해줘",
    "이미지에 없는 내용은 임의로 추가하지 말아야해, 오직 이미지 내의 내용으로만 정리해줘",
    "이미지에 있는 내용 그대로 정리해줘, 예를 들어 히라가나로 되어있는데 가타카나로 바꾸는 것은 하지말아줘 반대도 마찬가지야",
    "훈독에서 대괄호 []는 제거해서 정리해줘",
    "example 에서 예외를 정리할 때 키는 그냥 예외 라는 단어로 정리해줘",
    r#"다음 JSON 형식으로 정리해줘:
    "한자": {
      "kunon": ["한글 훈음1", "한글 흠운2",...],
      "on": ["일본어 음독1", "일본어 음독2", ...],
      "kun": ["일본어 훈독1", "일본어 훈독2", ...],
      "bushu": ["부수1", "부수2", ...],
      "onExamples": {
        "일본어 음독1": [
          {
            "word": "음독1의 예시 단어1(후리가나는 빼고)",
            "yomikata": "요미카타",
            "meaning": ["뜻1", "뜻2",...]
          }
        ],
        "일본어 음독2": [
          {
            "word": "음독2의 예시 단어1(후리가나는 빼고)",
            "yomikata": "요미카타",
            "meaning": ["뜻1", "뜻2",...]
          }
        ],
        "일본어 음독 예외": [
          {
            "word": "음독 예외 예시 단어1(후리가나는 빼고)",
            "yomikata": "요미카타",
            "meaning": ["뜻1", "뜻2",...]
          }
        ]
      },
      "kunExamples": {
        "일본어 훈독1": [
          {
            "word": "훈독1의 예시 단어1(후리가나는 빼고)",
            "yomikata": "요미카타",
            "meaning": ["뜻1", "뜻2",...]
          }
        ],
        "일본어 훈독2": [
          {
            "word": "훈독2의 예시 단어1(후리가나는 빼고)",
            "yomikata": "요미카타",
            "meaning": ["뜻1", "뜻2",...]
          }
        ],
        "일본어 훈독 예외": [
          {
            "word": "훈독 예외 예시 단어1(후리가나는 빼고)",
            "yomikata": "요미카타",
            "meaning": ["뜻1", "뜻2",...]
          }
        ]
      }
    }"#,
];

/// 분석 프롬프트 생성
///
/// 조건을 줄바꿈으로 이어 붙인다. 조건 순서는 그대로 유지된다.
pub fn build_analysis_prompt() -> String {
    IMAGE_ANALYSIS_CONDITIONS.join("\n")
}
