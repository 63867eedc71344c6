//! 브리더 계정 관리 서비스 모듈

pub mod breeder_service;

pub use breeder_service::BreederService;
