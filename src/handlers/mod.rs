//! # HTTP Request Handlers Module
//!
//! HTTP 요청을 처리하는 핸들러 함수들을 정의하는 모듈입니다.
//! ActixWeb 프레임워크를 기반으로 구현되었습니다.
//!
//! ## 아키텍처 위치
//!
//! ```text
//! ┌─────────────────────────────────────────────┐
//!   Client (Web, Mobile App)
//! └─────────────────────┬───────────────────────┘
//!                       │ HTTP Request/Response
//! ┌─────────────────────▼───────────────────────┐
//!   Handlers (이 모듈) - HTTP 엔드포인트 처리
//! ├─────────────────────────────────────────────┤
//!   Services - 비즈니스 로직
//! ├─────────────────────────────────────────────┤
//!   Repositories - 데이터 접근
//! ├─────────────────────────────────────────────┤
//!   Entities/Models - 도메인 모델
//! └─────────────────────────────────────────────┘
//! ```
//!
//! ## 핸들러 설계 원칙
//!
//! - **얇은 계층**: 유효성 검사 → 서비스 호출 → 응답 변환만 수행
//! - **싱글톤 서비스**: `Service::instance()`로 서비스 획득
//! - **자동 에러 변환**: `AppError`가 HTTP 응답으로 자동 변환
//!
//! ## 모듈 구성
//!
//! - [`auth`] - 로그인/토큰 갱신/로그아웃/현재 사용자 조회
//! - [`social`] - Google/Naver/Kakao 소셜 로그인 및 가입 완료
//! - [`adopters`] - 입양자 가입
//! - [`breeders`] - 브리더 가입 및 인증 서류 제출

pub mod auth;
pub mod social;
pub mod adopters;
pub mod breeders;
