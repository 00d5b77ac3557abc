pub mod breakdown;
pub mod completion;
pub mod streak;

pub use completion::compute_completion_series;
pub use streak::compute_stats;
