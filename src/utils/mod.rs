//! 공통 유틸리티 함수 모듈
//!
//! # Modules
//!
//! - [`string_utils`] - 입력 문자열 정리와 식별자 정규화
//! - [`display_terminal`] - 시작 시 터미널 출력 포맷팅

pub mod string_utils;
pub mod display_terminal;
