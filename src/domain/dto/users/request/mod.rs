//! # 계정 관련 요청 DTO 모듈
//!
//! 클라이언트로부터 받은 JSON 데이터를 구조화된 Rust 타입으로 변환합니다.
//!
//! ## 검증 계층
//!
//! 1. **구문 검증**: JSON 구조 (실패 시 핸들러가 요청을 `None`으로 전달)
//! 2. **필수 값 검증**: `validator` 크레이트로 누락/공백 필드 검출 (서비스 계층)
//! 3. **정책 검증**: 이메일 형식, 비밀번호 정책, 중복 확인 (자격 증명 저장소)

pub mod register_request;
pub mod login_request;

pub use register_request::RegisterRequest;
pub use login_request::LoginRequest;
