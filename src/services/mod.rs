//! Business logic layer between handlers and repositories.

pub mod fish_service;

pub use fish_service::FishService;
