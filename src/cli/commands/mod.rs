pub mod backup;
pub mod chart;
pub mod config;
pub mod db;
pub mod export;
pub mod habit;
pub mod init;
pub mod log;
pub mod progress;
pub mod session;
pub mod stats;
pub mod subject;
pub mod task;
