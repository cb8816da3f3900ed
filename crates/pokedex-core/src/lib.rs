pub mod config;
pub mod error;
pub mod models;
pub mod storage;
pub mod title;
