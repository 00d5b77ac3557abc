pub mod backup;
pub mod calculator;
pub mod log;
pub mod logic;
pub mod report;
pub mod session;
pub mod subject;
pub mod tracker;
