//! # Domain Entities Module
//!
//! 자격 증명 저장소가 소유하는 핵심 엔티티들을 정의합니다.
//!
//! ```text
//! Domain Layer
//! ├── entities/     ← 이 모듈 (User, Role)
//! ├── models/       ← 저장소 결과 모델 (IdentityResult)
//! └── dto/          ← 요청/응답 데이터 전송 객체
//! ```
//!
//! 엔티티는 저장소 종류(MongoDB, 메모리)와 무관합니다. 저장소 구현체는
//! 자체 문서 타입(비밀번호 해시, 정규화 키, 역할 목록 포함)으로 변환해 저장합니다.

pub mod users;
pub mod roles;

pub use users::User;
pub use roles::Role;
