//! # 문자열 유틸리티
//!
//! 입력 정리와 식별자 정규화에 쓰이는 공통 함수들입니다.

use serde::Deserialize;

/// 선택적 문자열 정리
///
/// 앞뒤 공백을 제거하고, 결과가 빈 문자열이면 `None`을 반환합니다.
///
/// # 예제
/// ```rust,ignore
/// assert_eq!(clean_optional_string(Some("  Alice  ".to_string())), Some("Alice".to_string()));
/// assert_eq!(clean_optional_string(Some("   ".to_string())), None);
/// ```
pub fn clean_optional_string(value: Option<String>) -> Option<String> {
    value.and_then(|s| {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(trimmed.to_string())
        }
    })
}

/// 저장소 조회용 정규화 키
///
/// 이메일, 사용자명, 역할 이름은 대소문자를 구분하지 않고 비교하므로
/// 앞뒤 공백을 제거한 뒤 대문자로 변환한 값을 유일성 키로 사용합니다.
pub fn normalize_key(value: &str) -> String {
    value.trim().to_uppercase()
}

/// Serde용 선택적 문자열 역직렬화 함수
///
/// 빈 문자열이나 공백만 있는 값을 `None`으로 변환합니다.
///
/// ```rust,ignore
/// #[derive(Deserialize)]
/// struct RegisterRequest {
///     #[serde(default, deserialize_with = "deserialize_optional_string")]
///     full_name: Option<String>,
/// }
/// // JSON: {"full_name": "  Alice  "} → Some("Alice")
/// // JSON: {"full_name": ""} → None
/// // JSON: {"full_name": null} → None
/// ```
pub fn deserialize_optional_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let opt = Option::<String>::deserialize(deserializer)?;
    Ok(clean_optional_string(opt))
}
