pub mod logger;
pub mod common;
pub mod config;
pub mod connectivity;
pub mod image2text;
pub mod grid;
pub mod export;
pub mod upload;
pub mod job;
pub mod shell;
