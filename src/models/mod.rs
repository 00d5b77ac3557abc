pub mod activity;
pub mod completion;
pub mod session;
pub mod stats;
pub mod subject;
pub mod task;
