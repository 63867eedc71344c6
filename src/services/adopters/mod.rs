//! 입양자 계정 관리 서비스 모듈

pub mod adopter_service;

pub use adopter_service::AdopterService;
