//! # HTTP Request Handlers Module
//!
//! HTTP 요청을 처리하는 핸들러 함수들을 정의하는 모듈입니다.
//!
//! ```text
//! ┌─────────────────────────────────────────────┐
//!   Handlers (이 모듈) - HTTP 엔드포인트 처리       ← Web Layer
//! ├─────────────────────────────────────────────┤
//!   Services - 계정 생성, 로그인, 부트스트랩        ← Service Layer
//! ├─────────────────────────────────────────────┤
//!   Repositories - 자격 증명 저장소                ← Repository Layer
//! ├─────────────────────────────────────────────┤
//!   Entities/Models - 도메인 모델                  ← Domain Layer
//! └─────────────────────────────────────────────┘
//! ```
//!
//! 핸들러는 `web::Data<AccountsService>`로 서비스를 받고, 실패는 `AppError`를
//! 그대로 반환해 `ResponseError` 구현이 상태 코드와 JSON 본문을 결정하도록 합니다.

pub mod accounts;
