//! File-backed persistence and configuration for the thinking workspace.

pub mod config_service;
pub mod dto;
pub mod file_state_repository;
pub mod paths;
pub mod storage;

pub use config_service::ConfigService;
pub use file_state_repository::FileStateRepository;
pub use paths::ThinkingPaths;
